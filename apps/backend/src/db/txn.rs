use std::future::Future;
use std::sync::Arc;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::error::AppError;
use crate::infra::require_db;
use crate::state::app_state::AppState;

/// Execute a function within a database transaction.
///
/// Begins a transaction, hands the closure a shared handle to it, commits on
/// `Ok` and rolls back on `Err`. The original error is preserved if the
/// rollback itself fails. The closure must not keep the handle alive past
/// its future; a leaked handle is reported as an internal error and the
/// transaction is rolled back when the last handle drops.
///
/// ```ignore
/// with_txn(&state, |txn| async move {
///     games::require_game(txn.as_ref(), game_id).await?;
///     Ok(())
/// })
/// .await?;
/// ```
pub async fn with_txn<R, F, Fut>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: FnOnce(Arc<DatabaseTransaction>) -> Fut,
    Fut: Future<Output = Result<R, AppError>>,
{
    let db = require_db(state)?;
    let txn = Arc::new(db.begin().await?);

    let out = f(Arc::clone(&txn)).await;

    let txn = Arc::try_unwrap(txn).map_err(|_| {
        AppError::internal("transaction handle still in use after the unit of work finished")
    })?;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
