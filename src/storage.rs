//! Reading and writing `.acc` account files.
//!
//! An account file is a versioned JSON envelope holding an account's
//! transaction sequence. The version tag lets a reader refuse a layout it was
//! not written for instead of silently misreading it.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transaction::Transaction;

/// The envelope version this library writes and accepts.
const FORMAT_VERSION: u32 = 1;

/// Errors that can occur while reading or writing an account file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be opened, read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file carries an envelope version this library does not understand.
    #[error("unsupported account file version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Debug, Serialize, Deserialize)]
struct AccountFile {
    version: u32,
    transactions: Vec<Transaction>,
}

/// Write `transactions` to `path` as a versioned account file.
///
/// The file handle is dropped, and therefore closed, whether or not the write
/// succeeds.
///
/// # Errors
/// Returns [StorageError::Io] if the file cannot be created or written, or
/// [StorageError::Serialization] if the envelope cannot be encoded.
pub(crate) fn write_account_file(
    path: &Path,
    transactions: &[Transaction],
) -> Result<(), StorageError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let envelope = AccountFile {
        version: FORMAT_VERSION,
        transactions: transactions.to_vec(),
    };
    serde_json::to_writer(&mut writer, &envelope)?;
    writer.flush()?;

    Ok(())
}

/// Read the transaction sequence stored in the account file at `path`.
///
/// The file handle is dropped, and therefore closed, whether or not the read
/// succeeds.
///
/// # Errors
/// Returns [StorageError::Io] if the file cannot be opened or read,
/// [StorageError::Serialization] if the contents are not a valid envelope, or
/// [StorageError::UnsupportedVersion] if the envelope was written by an
/// incompatible version of this library.
pub(crate) fn read_account_file(path: &Path) -> Result<Vec<Transaction>, StorageError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let envelope: AccountFile = serde_json::from_reader(reader)?;

    if envelope.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion(envelope.version));
    }

    Ok(envelope.transactions)
}

#[cfg(test)]
mod account_file_tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{StorageError, read_account_file, write_account_file};
    use crate::transaction::Transaction;

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::build(350.0, "2022-03-01")
                .currency("CZK")
                .eur_conversion_rate(0.04)
                .description("Nákup číslo 1")
                .finalize(),
            Transaction::build(1560.0, "2018-03-01")
                .description("Nákup číslo 2")
                .finalize(),
        ]
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("123456.acc");
        let transactions = sample_transactions();

        write_account_file(&path, &transactions).unwrap();
        let restored = read_account_file(&path).unwrap();

        assert_eq!(restored, transactions);
    }

    #[test]
    fn round_trip_of_empty_sequence() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("7.acc");

        write_account_file(&path, &[]).unwrap();
        let restored = read_account_file(&path).unwrap();

        assert!(restored.is_empty());
    }

    #[test]
    fn read_fails_on_missing_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("does_not_exist.acc");

        let result = read_account_file(&path);

        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn read_fails_on_unsupported_version() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("future.acc");
        fs::write(&path, r#"{"version": 99, "transactions": []}"#).unwrap();

        let result = read_account_file(&path);

        assert!(matches!(
            result,
            Err(StorageError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn read_fails_on_garbage_contents() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("garbage.acc");
        fs::write(&path, "definitely not an account file").unwrap();

        let result = read_account_file(&path);

        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
