use sea_orm::DatabaseTransaction;

pub mod customer_service;
pub mod product_service;
pub mod purchase_service;
pub mod report_service;

/// Roll back a failed write. The original error is what gets reported, so a
/// rollback failure is only logged.
pub(crate) async fn rollback(txn: DatabaseTransaction) {
    if let Err(err) = txn.rollback().await {
        tracing::warn!(error = %err, "rollback failed");
    }
}
