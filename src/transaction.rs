//! This file defines the type `Transaction`, an immutable record of a single
//! monetary movement, and the builder used to create one.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An expense or income, i.e. an event where money moved in or out of an
/// account.
///
/// To create a new `Transaction`, use [Transaction::build]. A transaction is
/// read-only once built; its amount is converted into the reference currency
/// on demand via [Transaction::eur].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    amount: f64,
    date: String,
    currency: String,
    eur_conversion_rate: f64,
    description: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, date: impl Into<String>) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            date: date.into(),
            currency: "EUR".to_owned(),
            eur_conversion_rate: 1.0,
            description: None,
        }
    }

    /// The amount of money spent or earned, in the transaction's own currency.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// When the transaction happened.
    ///
    /// Dates are kept as free-form text and no particular format is enforced.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The currency code the amount is denominated in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// The multiplier that converts [Transaction::amount] into euros.
    pub fn eur_conversion_rate(&self) -> f64 {
        self.eur_conversion_rate
    }

    /// A text description of what the transaction was for.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The amount converted into euros.
    ///
    /// Recomputed from the amount and conversion rate on every call.
    pub fn eur(&self) -> f64 {
        self.amount * self.eur_conversion_rate
    }
}

impl Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{description}"),
            None => write!(f, "{} {}", self.amount, self.currency),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The optional fields default to a euro entry with a conversion rate of one
/// and no description. Finalizing cannot fail: transactions accept any date
/// and currency text by design.
///
/// # Examples
///
/// ```rust
/// use ledgerling::Transaction;
///
/// let transaction = Transaction::build(250.0, "2009-03-12")
///     .currency("CZK")
///     .eur_conversion_rate(0.26)
///     .description("groceries")
///     .finalize();
///
/// assert_eq!(transaction.eur(), 65.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// The monetary amount of the transaction.
    ///
    /// Positive values represent income/credits, negative values represent
    /// expenses/debits.
    pub amount: f64,

    /// The date when the transaction occurred, as free-form text.
    pub date: String,

    /// The currency code the amount is denominated in.
    ///
    /// Defaults to `"EUR"`. Any string is accepted; codes are not checked
    /// against a currency register.
    pub currency: String,

    /// The multiplier that converts the amount into euros.
    ///
    /// Defaults to `1.0`, i.e. the amount already is a euro amount.
    pub eur_conversion_rate: f64,

    /// An optional human-readable description of the transaction.
    pub description: Option<String>,
}

impl TransactionBuilder {
    /// Set the currency code for the transaction.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the conversion rate from the transaction's currency into euros.
    pub fn eur_conversion_rate(mut self, rate: f64) -> Self {
        self.eur_conversion_rate = rate;
        self
    }

    /// Set the description for the transaction.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the final [Transaction] instance.
    pub fn finalize(self) -> Transaction {
        Transaction {
            amount: self.amount,
            date: self.date,
            currency: self.currency,
            eur_conversion_rate: self.eur_conversion_rate,
            description: self.description,
        }
    }
}



#[cfg(test)]
mod display_tests {
    use super::Transaction;

    #[test]
    fn display_shows_the_description() {
        let transaction = Transaction::build(350.0, "2022-03-01")
            .description("Nákup číslo 1")
            .finalize();

        assert_eq!(transaction.to_string(), "Nákup číslo 1");
    }

    #[test]
    fn display_falls_back_to_amount_and_currency() {
        let transaction = Transaction::build(350.0, "2022-03-01")
            .currency("CZK")
            .finalize();

        assert_eq!(transaction.to_string(), "350 CZK");
    }
}
