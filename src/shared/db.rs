// src/shared/db.rs
//
// Store adapter helpers shared by every postgres adapter: the transaction
// boundary used by counter-mutating writes, authoritative COUNT(*) reads,
// and lenient id parsing for finders.

use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    IsolationLevel, Statement, TransactionError, TransactionTrait, Value,
};
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

/// Read-modify-write counter sequences must not observe the same pre-toggle
/// count from two concurrent transactions.
pub const COUNTER_ISOLATION: IsolationLevel = IsolationLevel::Serializable;

/// Errors raised inside the transaction body reach the caller unchanged;
/// begin/commit failures become the port's own database variant.
pub fn flatten_transaction_error<E>(err: TransactionError<E>) -> E
where
    E: std::error::Error + From<DbErr>,
{
    match err {
        TransactionError::Connection(e) => E::from(e),
        TransactionError::Transaction(e) => e,
    }
}

/// Runs `body` inside one serializable read-write transaction. Any error
/// rolls the whole transaction back.
pub async fn run_in_transaction<F, T, E>(db: &DatabaseConnection, body: F) -> Result<T, E>
where
    F: for<'c> FnOnce(
            &'c DatabaseTransaction,
        ) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>
        + Send,
    T: Send,
    E: std::error::Error + From<DbErr> + Send,
{
    db.transaction_with_config(body, Some(COUNTER_ISOLATION), Some(AccessMode::ReadWrite))
        .await
        .map_err(flatten_transaction_error)
}

/// Executes a `SELECT count(*) AS count ...` statement and returns the count.
pub async fn count_rows<C>(conn: &C, sql: &str, values: Vec<Value>) -> Result<i64, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values);

    let row = conn
        .query_one(stmt)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("count query returned no rows".to_string()))?;

    row.try_get::<i64>("", "count")
}

/// Lookups on malformed ids are a no-op, not an error.
pub fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}
