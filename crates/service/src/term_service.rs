use models::term::{self, NewTerm, TermPatch};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::{info, instrument, warn};

use crate::errors::{ServiceError, TERM_EXISTS, TERM_UPDATE_FAILED};
use crate::pagination::Pagination;

/// List terms in insertion order. A zero limit yields an empty page.
pub async fn list_terms(db: &DatabaseConnection, page: Pagination) -> Result<Vec<term::Model>, ServiceError> {
    let Some((skip, limit)) = page.normalize() else {
        return Ok(Vec::new());
    };
    let rows = term::list(db, skip, limit).await?;
    Ok(rows)
}

/// Get a term by its exact key.
pub async fn get_term(db: &DatabaseConnection, key: &str) -> Result<term::Model, ServiceError> {
    term::find_by_term(db, key)
        .await?
        .ok_or_else(ServiceError::term_not_found)
}

/// Create a term; a taken key is a conflict.
#[instrument(skip_all, fields(term = %new.term))]
pub async fn create_term(db: &DatabaseConnection, new: NewTerm) -> Result<term::Model, ServiceError> {
    new.validate()?;
    let txn = db.begin().await?;
    let res = term::create(&txn, new).await.map_err(|e| {
        warn!(err = %e, "term insert rejected");
        ServiceError::Conflict(TERM_EXISTS.into())
    });
    let created = finish(txn, res, |_| ServiceError::Conflict(TERM_EXISTS.into())).await?;
    info!(id = created.id, "term created");
    Ok(created)
}

/// Merge `patch` into the term stored under `key`.
#[instrument(skip(db, patch), fields(key = %key))]
pub async fn update_term(db: &DatabaseConnection, key: &str, patch: TermPatch) -> Result<term::Model, ServiceError> {
    patch.validate()?;
    let txn = db.begin().await?;
    let res = apply_update(&txn, key, patch).await;
    let updated = finish(txn, res, |_| ServiceError::Conflict(TERM_UPDATE_FAILED.into())).await?;
    info!(id = updated.id, term = %updated.term, "term updated");
    Ok(updated)
}

async fn apply_update(txn: &DatabaseTransaction, key: &str, patch: TermPatch) -> Result<term::Model, ServiceError> {
    let existing = term::find_by_term(txn, key)
        .await?
        .ok_or_else(ServiceError::term_not_found)?;
    term::update(txn, existing, patch).await.map_err(|e| {
        warn!(err = %e, "term update rejected");
        ServiceError::Conflict(TERM_UPDATE_FAILED.into())
    })
}

/// Hard delete the term stored under `key`.
#[instrument(skip(db), fields(key = %key))]
pub async fn delete_term(db: &DatabaseConnection, key: &str) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let res = apply_delete(&txn, key).await;
    let id = finish(txn, res, ServiceError::from).await?;
    info!(id, "term deleted");
    Ok(())
}

async fn apply_delete(txn: &DatabaseTransaction, key: &str) -> Result<i32, ServiceError> {
    let existing = term::find_by_term(txn, key)
        .await?
        .ok_or_else(ServiceError::term_not_found)?;
    if !term::delete(txn, existing.id).await? {
        return Err(ServiceError::term_not_found());
    }
    Ok(existing.id)
}

/// Commit on success, roll back explicitly on failure. A failed commit is
/// reported through `commit_failed`.
async fn finish<T, F>(txn: DatabaseTransaction, res: Result<T, ServiceError>, commit_failed: F) -> Result<T, ServiceError>
where
    F: FnOnce(DbErr) -> ServiceError,
{
    match res {
        Ok(value) => match txn.commit().await {
            Ok(()) => Ok(value),
            Err(e) => {
                warn!(err = %e, "commit failed");
                Err(commit_failed(e))
            }
        },
        Err(err) => {
            if let Err(e) = txn.rollback().await {
                warn!(err = %e, "rollback failed");
            }
            Err(err)
        }
    }
}
