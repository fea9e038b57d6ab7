use shared::domain::ProductId;
use thiserror::Error;

pub mod api;
pub mod confirm;
pub mod filter;
pub mod manager;
pub mod notify;
pub mod reconcile;
pub mod seed;
pub mod state;
pub mod view;

pub use api::{ApiError, CatalogApi, HttpCatalogApi, OfflineCatalogApi, DEFAULT_API_BASE};
pub use confirm::Confirm;
pub use filter::FilterCriteria;
pub use manager::{CatalogManager, EditorState, LoadSource, LoadStatus};
pub use notify::{Notification, NotificationCenter, Notifier};
pub use reconcile::{RemoteOutcome, WriteOutcome};
pub use state::CatalogState;

/// Failures of the local half of a write. Remote failures never surface
/// here; they downgrade the write to local-only instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("product {0} is not in the catalog")]
    ProductNotFound(ProductId),
    #[error("product {0} is already in the catalog")]
    DuplicateId(ProductId),
    #[error("no product form is open")]
    FormClosed,
    #[error("no product ids left to assign")]
    IdSpaceExhausted,
}
