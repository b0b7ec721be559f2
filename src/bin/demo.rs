//! Walks the worked bookkeeping example end to end: build an account, apply
//! two currency-converted transactions, save them to disk and restore them
//! into a fresh account.

use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use ledgerling::{Account, Transaction};

fn main() {
    setup_logging();

    let mut account =
        Account::new(123_456, "účet jedna").expect("the example account name is long enough");

    let groceries = Transaction::build(350.0, "2022-03-01")
        .currency("CZK")
        .eur_conversion_rate(0.04)
        .description("Nákup číslo 1")
        .finalize();
    let salary = Transaction::build(1560.0, "2018-03-01")
        .description("Nákup číslo 2")
        .finalize();

    account.apply(groceries);
    account.apply(salary);

    println!(
        "account {} \"{}\" holds {} transactions, balance {:.2} EUR",
        account.number(),
        account.name(),
        account.transaction_count(),
        account.balance()
    );

    let path = account.save().expect("could not write the account file");

    let mut restored = Account::new(123_456, "účet dvě").expect("the name is long enough");
    restored
        .load(Some(&path))
        .expect("could not read the account file back");

    println!("restored from {}:", path.display());
    for transaction in restored.transactions() {
        println!("  {} ({:.2} EUR)", transaction, transaction.eur());
    }
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();
}
