//! The two halves of every optimistic write: a pure local phase that builds
//! what will be applied, and a reconcile phase that folds in whatever the
//! remote call returned. Neither half performs I/O.

use shared::{
    domain::{Product, ProductDraft, ProductId},
    protocol::{CreatedProduct, RemoteProduct},
};

use crate::{api::ApiError, state::CatalogState, CatalogError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// The service accepted the write and its response was adopted.
    Synced,
    /// The service accepted the write but part of its response was discarded.
    Conflict(String),
    /// The remote call failed; the write exists locally only.
    LocalOnly(String),
}

impl RemoteOutcome {
    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }

    fn local_only(err: &ApiError) -> Self {
        Self::LocalOnly(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome<T> {
    pub applied: T,
    pub remote: RemoteOutcome,
}

/// One past the highest id currently held, or 1 for an empty catalog.
pub fn next_local_id(state: &CatalogState) -> Result<ProductId, CatalogError> {
    match state.max_id() {
        None => Ok(ProductId(1)),
        Some(max) => max
            .0
            .max(0)
            .checked_add(1)
            .map(ProductId)
            .ok_or(CatalogError::IdSpaceExhausted),
    }
}

pub fn plan_add(state: &CatalogState, draft: ProductDraft) -> Result<Product, CatalogError> {
    Ok(Product::from_draft(next_local_id(state)?, draft))
}

/// Adopts the server-assigned id unless it is missing or already taken.
pub fn reconcile_add(
    state: &CatalogState,
    mut local: Product,
    remote: Result<CreatedProduct, ApiError>,
) -> WriteOutcome<Product> {
    let created = match remote {
        Ok(created) => created,
        Err(err) => {
            let remote = RemoteOutcome::local_only(&err);
            return WriteOutcome {
                applied: local,
                remote,
            };
        }
    };

    let remote = match created.assigned_id() {
        None => RemoteOutcome::Synced,
        Some(id) if state.contains(id) => RemoteOutcome::Conflict(format!(
            "server id {id} already held locally; kept {}",
            local.id
        )),
        Some(id) => {
            local.id = id;
            RemoteOutcome::Synced
        }
    };

    WriteOutcome {
        applied: local,
        remote,
    }
}

/// Lays `draft` over the stored product while keeping its id and rating.
pub fn plan_update(
    state: &CatalogState,
    id: ProductId,
    draft: ProductDraft,
) -> Result<Product, CatalogError> {
    let mut merged = state
        .get(id)
        .cloned()
        .ok_or(CatalogError::ProductNotFound(id))?;
    merged.apply_draft(draft);
    Ok(merged)
}

pub fn reconcile_update(
    mut local: Product,
    remote: Result<RemoteProduct, ApiError>,
) -> WriteOutcome<Product> {
    match remote {
        Ok(response) => {
            let outcome = match response.id {
                Some(id) if id != local.id => RemoteOutcome::Conflict(format!(
                    "server answered for product {id}; kept {}",
                    local.id
                )),
                _ => RemoteOutcome::Synced,
            };
            response.merge_into(&mut local);
            WriteOutcome {
                applied: local,
                remote: outcome,
            }
        }
        Err(err) => WriteOutcome {
            remote: RemoteOutcome::local_only(&err),
            applied: local,
        },
    }
}

pub fn plan_delete(state: &CatalogState, id: ProductId) -> Result<ProductId, CatalogError> {
    if state.contains(id) {
        Ok(id)
    } else {
        Err(CatalogError::ProductNotFound(id))
    }
}

pub fn reconcile_delete(id: ProductId, remote: Result<(), ApiError>) -> WriteOutcome<ProductId> {
    let remote = match remote {
        Ok(()) => RemoteOutcome::Synced,
        Err(err) => RemoteOutcome::local_only(&err),
    };
    WriteOutcome {
        applied: id,
        remote,
    }
}

#[cfg(test)]
#[path = "tests/reconcile_tests.rs"]
mod tests;
