//! Explicit transaction scope for write operations.

use rusqlite::{Connection, Transaction};

/// Runs `f` inside a transaction on `conn`.
///
/// Commits when `f` succeeds. When `f` fails the transaction is rolled back
/// before the original error is returned; a failed rollback is logged and
/// does not replace that error.
pub fn in_transaction<T, F>(conn: &mut Connection, f: F) -> rusqlite::Result<T>
where
    F: FnOnce(&Transaction) -> rusqlite::Result<T>,
{
    let tx = conn.transaction()?;

    match f(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback() {
                tracing::error!(error = %rollback_err, "Failed to roll back transaction");
            }
            Err(err)
        }
    }
}
