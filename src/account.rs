//! Account management for the bookkeeping examples.
//!
//! This module contains everything related to accounts:
//! - The validated [AccountName] and the [Account] model itself
//! - Balance computation over the held transaction sequence
//! - Saving and restoring the transaction sequence through `.acc` files

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    storage::{self, StorageError},
    transaction::Transaction,
};

// ============================================================================
// ERRORS
// ============================================================================

/// Errors that can occur while naming, updating or persisting an account.
#[derive(Debug, Error)]
pub enum AccountError {
    /// A name shorter than [MIN_NAME_LENGTH] graphemes was used for an
    /// account.
    #[error("account names must be at least 4 characters long, got \"{0}\"")]
    NameTooShort(String),

    /// A filename without the `.acc` extension was passed to [Account::load].
    #[error("account files must use the .acc extension, got \"{}\"", .0.display())]
    InvalidFilename(PathBuf),

    /// [Account::load] was called without a filename and none was remembered
    /// from an earlier call.
    ///
    /// This is a usage error rather than an environmental one: the caller
    /// must supply a filename at least once before relying on the remembered
    /// one.
    #[error("no filename was given and none is remembered from an earlier load")]
    NoFilename,

    /// Writing the account file failed.
    ///
    /// Carries the underlying I/O or serialization error.
    #[error("could not save the account file: {0}")]
    Save(#[source] StorageError),

    /// Reading the account file failed.
    ///
    /// Carries the underlying I/O or deserialization error.
    #[error("could not load the account file: {0}")]
    Load(#[source] StorageError),
}

// ============================================================================
// MODELS
// ============================================================================

/// The number that identifies an account.
pub type AccountNumber = i64;

/// The minimum number of grapheme clusters in a valid account name.
pub const MIN_NAME_LENGTH: usize = 4;

/// The display name of an account.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountName(String);

impl AccountName {
    /// Create an account name.
    ///
    /// Length is counted in grapheme clusters so that accented names are
    /// measured the way a reader sees them, not by their encoded size.
    ///
    /// # Errors
    ///
    /// This function will return an error if `name` is shorter than
    /// [MIN_NAME_LENGTH] graphemes.
    pub fn new(name: &str) -> Result<Self, AccountError> {
        if name.graphemes(true).count() < MIN_NAME_LENGTH {
            Err(AccountError::NameTooShort(name.to_string()))
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create an account name without validation.
    ///
    /// The caller should ensure that the string is at least
    /// [MIN_NAME_LENGTH] graphemes long.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`,
    /// because violating the length invariant causes incorrect behaviour but
    /// does not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for AccountName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numbered, named holder of an ordered sequence of transactions.
///
/// Transactions are appended with [Account::apply] and summed on demand with
/// [Account::balance]. The whole sequence can be written to disk with
/// [Account::save] and restored wholesale with [Account::load]; the file an
/// account was last loaded from is remembered so later loads can omit the
/// filename.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    name: AccountName,
    transactions: Vec<Transaction>,
    acc_path: Option<PathBuf>,
}

impl Account {
    /// Create an empty account.
    ///
    /// # Errors
    ///
    /// This function will return an [AccountError::NameTooShort] if `name` is
    /// shorter than [MIN_NAME_LENGTH] graphemes.
    pub fn new(number: AccountNumber, name: &str) -> Result<Self, AccountError> {
        Ok(Self {
            number,
            name: AccountName::new(name)?,
            transactions: Vec::new(),
            acc_path: None,
        })
    }

    /// Create an account holding an initial transaction sequence.
    ///
    /// # Errors
    ///
    /// This function will return an [AccountError::NameTooShort] if `name` is
    /// shorter than [MIN_NAME_LENGTH] graphemes.
    pub fn with_transactions(
        number: AccountNumber,
        name: &str,
        transactions: Vec<Transaction>,
    ) -> Result<Self, AccountError> {
        Ok(Self {
            number,
            name: AccountName::new(name)?,
            transactions,
            acc_path: None,
        })
    }

    /// The number that identifies this account.
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// The display name of this account.
    pub fn name(&self) -> &AccountName {
        &self.name
    }

    /// The transactions held by this account, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions held by this account.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Append `transaction` to the account and return the full updated
    /// sequence.
    ///
    /// Duplicates are allowed; insertion order is preserved.
    pub fn apply(&mut self, transaction: Transaction) -> &[Transaction] {
        self.transactions.push(transaction);
        &self.transactions
    }

    /// The sum of every held transaction's euro value.
    ///
    /// Recomputed on every call so the result always reflects the current
    /// sequence.
    pub fn balance(&self) -> f64 {
        self.transactions.iter().map(Transaction::eur).sum()
    }

    /// Replace the account's display name.
    ///
    /// The change is visible immediately through [Account::name].
    ///
    /// # Errors
    ///
    /// This function will return an [AccountError::NameTooShort] if `name` is
    /// shorter than [MIN_NAME_LENGTH] graphemes; the existing name is kept in
    /// that case.
    pub fn set_name(&mut self, name: &str) -> Result<(), AccountError> {
        self.name = AccountName::new(name)?;
        Ok(())
    }

    /// Write the account's transaction sequence to `<number>.acc` in the
    /// current directory and return the path written.
    ///
    /// The filename is always derived from the account number, independent of
    /// any filename remembered by [Account::load].
    ///
    /// # Errors
    ///
    /// This function will return an [AccountError::Save] wrapping the
    /// underlying failure if the file cannot be written.
    pub fn save(&self) -> Result<PathBuf, AccountError> {
        self.save_in(Path::new("."))
    }

    /// Write the account's transaction sequence to `<number>.acc` inside
    /// `directory` and return the path written.
    ///
    /// # Errors
    ///
    /// This function will return an [AccountError::Save] wrapping the
    /// underlying failure if the file cannot be written.
    pub fn save_in(&self, directory: &Path) -> Result<PathBuf, AccountError> {
        let path = directory.join(format!("{}.acc", self.number));

        storage::write_account_file(&path, &self.transactions).map_err(AccountError::Save)?;

        tracing::info!(
            "saved {} transactions of account {} to {}",
            self.transactions.len(),
            self.number,
            path.display()
        );

        Ok(path)
    }

    /// Replace the account's transaction sequence with the contents of an
    /// account file.
    ///
    /// A supplied `filename` must end in `.acc` (case-insensitively) and is
    /// remembered on the account, so later calls may pass `None` to reload
    /// from the same file. The read replaces the in-memory sequence
    /// wholesale; nothing is merged.
    ///
    /// # Errors
    ///
    /// This function will return an:
    /// - [AccountError::InvalidFilename] if `filename` does not end in `.acc`,
    /// - [AccountError::NoFilename] if no filename was supplied now or
    ///   remembered from an earlier call,
    /// - or [AccountError::Load] wrapping the underlying failure if the file
    ///   cannot be read.
    pub fn load(&mut self, filename: Option<&Path>) -> Result<(), AccountError> {
        if let Some(path) = filename {
            if !has_acc_extension(path) {
                return Err(AccountError::InvalidFilename(path.to_path_buf()));
            }

            self.acc_path = Some(path.to_path_buf());
        }

        let path = self.acc_path.as_deref().ok_or(AccountError::NoFilename)?;

        let transactions = storage::read_account_file(path).map_err(AccountError::Load)?;

        tracing::info!(
            "loaded {} transactions into account {} from {}",
            transactions.len(),
            self.number,
            path.display()
        );

        self.transactions = transactions;

        Ok(())
    }
}

fn has_acc_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("acc"))
}

#[cfg(test)]
mod account_name_tests {
    use super::{AccountError, AccountName};

    #[test]
    fn new_fails_on_short_name() {
        let result = AccountName::new("abc");

        assert!(matches!(result, Err(AccountError::NameTooShort(name)) if name == "abc"));
    }

    #[test]
    fn new_fails_on_empty_name() {
        let result = AccountName::new("");

        assert!(matches!(result, Err(AccountError::NameTooShort(_))));
    }

    #[test]
    fn new_succeeds_on_four_graphemes() {
        let name = AccountName::new("účet").unwrap();

        assert_eq!(name.as_ref(), "účet");
    }

    #[test]
    fn length_is_counted_in_graphemes_not_bytes() {
        // Three accented letters encode to six bytes but remain three
        // characters to a reader.
        let result = AccountName::new("úúú");

        assert!(matches!(result, Err(AccountError::NameTooShort(_))));
    }
}
