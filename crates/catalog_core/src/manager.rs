use std::sync::Arc;

use shared::domain::{Product, ProductDraft, ProductId};
use tracing::{error, info, warn};

use crate::{
    api::CatalogApi,
    confirm::{Confirm, DELETE_QUESTION},
    filter::FilterCriteria,
    notify::{Notification, Notifier},
    reconcile::{self, RemoteOutcome, WriteOutcome},
    seed::fallback_products,
    state::CatalogState,
    CatalogError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    Fallback,
}

/// What the add/edit form is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Adding,
    Editing(ProductId),
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Update,
    Delete,
}

impl Operation {
    fn failure_message(self) -> &'static str {
        match self {
            Self::Add => "Error adding product",
            Self::Update => "Error updating product",
            Self::Delete => "Error deleting product",
        }
    }
}

/// Owns the catalog and mediates every write against the remote service.
/// All writes take `&mut self`, so there is exactly one writer at a time.
pub struct CatalogManager<N: Notifier> {
    api: Arc<dyn CatalogApi>,
    notifier: N,
    state: CatalogState,
    status: LoadStatus,
    editor: EditorState,
}

impl<N: Notifier> CatalogManager<N> {
    pub fn new(api: Arc<dyn CatalogApi>, notifier: N) -> Self {
        Self {
            api,
            notifier,
            state: CatalogState::default(),
            status: LoadStatus::Idle,
            editor: EditorState::Closed,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn editor(&self) -> EditorState {
        self.editor
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// The product the edit form was opened for, if any.
    pub fn editing_product(&self) -> Option<&Product> {
        match self.editor {
            EditorState::Editing(id) => self.state.get(id),
            _ => None,
        }
    }

    pub async fn load(&mut self) -> LoadSource {
        self.status = LoadStatus::Loading;
        let source = match self.api.list_products().await {
            Ok(products) => {
                let count = products.len();
                self.state.replace_all(products);
                info!(count, "catalog loaded");
                self.notifier.notify(Notification::success(format!(
                    "{count} products loaded successfully"
                )));
                LoadSource::Remote
            }
            Err(err) => {
                error!(error = %err, "error fetching products; using sample data");
                self.notifier.notify(Notification::error(
                    "Failed to load products. Using sample data.",
                ));
                self.state.replace_all(fallback_products());
                LoadSource::Fallback
            }
        };
        self.status = LoadStatus::Ready;
        source
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let criteria = FilterCriteria {
            search: search.into(),
            category: self.state.criteria().category.clone(),
        };
        self.state.set_criteria(criteria);
    }

    /// `None` or an empty string selects every category.
    pub fn select_category(&mut self, category: Option<String>) {
        let criteria = FilterCriteria {
            search: self.state.criteria().search.clone(),
            category: category.filter(|category| !category.is_empty()),
        };
        self.state.set_criteria(criteria);
    }

    pub fn clear_filters(&mut self) {
        self.state.set_criteria(FilterCriteria::default());
    }

    pub fn open_add(&mut self) {
        self.editor = EditorState::Adding;
    }

    pub fn open_edit(&mut self, id: ProductId) -> Result<&Product, CatalogError> {
        let product = self
            .state
            .get(id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        self.editor = EditorState::Editing(id);
        Ok(product)
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
    }

    /// Submits the open form: adds when adding, updates when editing.
    pub async fn save(&mut self, draft: ProductDraft) -> Result<WriteOutcome<Product>, CatalogError> {
        match self.editor {
            EditorState::Adding => self.add(draft).await,
            EditorState::Editing(_) => self.update(draft).await,
            EditorState::Closed => {
                let err = CatalogError::FormClosed;
                error!(error = %err, "save without an open form");
                self.notifier.notify(Notification::error("Error saving product"));
                Err(err)
            }
        }
    }

    pub async fn add(&mut self, draft: ProductDraft) -> Result<WriteOutcome<Product>, CatalogError> {
        let local = match reconcile::plan_add(&self.state, draft.clone()) {
            Ok(local) => local,
            Err(err) => return Err(self.fail(Operation::Add, err)),
        };

        let remote = self.api.create_product(&draft).await;
        let outcome = reconcile::reconcile_add(&self.state, local, remote);
        log_remote(Operation::Add, outcome.applied.id, &outcome.remote);

        if let Err(err) = self.state.prepend(outcome.applied.clone()) {
            return Err(self.fail(Operation::Add, err));
        }

        self.editor = EditorState::Closed;
        self.notifier
            .notify(Notification::success("Product added successfully"));
        Ok(outcome)
    }

    /// Applies `draft` to the product currently open in the edit form.
    pub async fn update(
        &mut self,
        draft: ProductDraft,
    ) -> Result<WriteOutcome<Product>, CatalogError> {
        let EditorState::Editing(id) = self.editor else {
            return Err(self.fail(Operation::Update, CatalogError::FormClosed));
        };

        let local = match reconcile::plan_update(&self.state, id, draft) {
            Ok(local) => local,
            Err(err) => return Err(self.fail(Operation::Update, err)),
        };

        let remote = self.api.update_product(id, &local).await;
        let outcome = reconcile::reconcile_update(local, remote);
        log_remote(Operation::Update, id, &outcome.remote);

        if let Err(err) = self.state.replace(outcome.applied.clone()) {
            return Err(self.fail(Operation::Update, err));
        }

        self.editor = EditorState::Closed;
        self.notifier
            .notify(Notification::success("Product updated successfully"));
        Ok(outcome)
    }

    /// Returns `Ok(None)` when the user declines; nothing changes then.
    pub async fn delete(
        &mut self,
        id: ProductId,
        confirm: &mut impl Confirm,
    ) -> Result<Option<WriteOutcome<ProductId>>, CatalogError> {
        if !confirm.confirm(DELETE_QUESTION) {
            return Ok(None);
        }

        if let Err(err) = reconcile::plan_delete(&self.state, id) {
            return Err(self.fail(Operation::Delete, err));
        }

        let remote = self.api.delete_product(id).await;
        let outcome = reconcile::reconcile_delete(id, remote);
        log_remote(Operation::Delete, id, &outcome.remote);

        if let Err(err) = self.state.remove(id) {
            return Err(self.fail(Operation::Delete, err));
        }
        if self.editor == EditorState::Editing(id) {
            self.editor = EditorState::Closed;
        }

        self.notifier
            .notify(Notification::success("Product deleted successfully"));
        Ok(Some(outcome))
    }

    fn fail(&mut self, operation: Operation, err: CatalogError) -> CatalogError {
        error!(?operation, error = %err, "local catalog mutation failed");
        self.notifier
            .notify(Notification::error(operation.failure_message()));
        err
    }
}

fn log_remote(operation: Operation, id: ProductId, outcome: &RemoteOutcome) {
    match outcome {
        RemoteOutcome::Synced => info!(?operation, id = id.0, "remote write synced"),
        RemoteOutcome::Conflict(detail) => {
            warn!(?operation, id = id.0, %detail, "remote response partially discarded")
        }
        RemoteOutcome::LocalOnly(reason) => {
            warn!(?operation, id = id.0, %reason, "API unavailable, applied locally")
        }
    }
}

#[cfg(test)]
#[path = "tests/manager_tests.rs"]
mod tests;
