//! Admin list screens.

use crate::{DeleteDialog, DialogAction, DialogView, ListState, Listing};
use serde::Serialize;
use std::time::Duration;
use tessera_error::ContentError;
use tracing::{info, instrument};

/// Delay applied when a delete is confirmed.
pub const DEFAULT_DELETE_DELAY: Duration = Duration::from_millis(1000);

/// Result of a confirmed delete.
///
/// The catalog is read-only, so `removed` is always false and the record
/// shows up again on the next listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    /// Record kind
    pub kind: &'static str,
    /// Record id
    pub id: u32,
    /// Whether the record left the catalog
    pub removed: bool,
}

/// One admin screen over a catalog slice.
pub struct Manager<'a, T: Listing> {
    items: &'a [T],
    state: ListState<T::SortField>,
    dialog: DeleteDialog,
    delete_delay: Duration,
}

impl<'a, T: Listing> Manager<'a, T> {
    /// Screen over `items` with the record type's default sort.
    pub fn new(items: &'a [T]) -> Self {
        let (field, order) = T::default_sort();
        Self {
            items,
            state: ListState::new(field, order),
            dialog: DeleteDialog::new(T::KIND),
            delete_delay: DEFAULT_DELETE_DELAY,
        }
    }

    /// Override the simulated delete latency.
    pub fn with_delete_delay(mut self, delay: Duration) -> Self {
        self.delete_delay = delay;
        self
    }

    /// List state.
    pub fn state(&self) -> &ListState<T::SortField> {
        &self.state
    }

    /// Mutable list state.
    pub fn state_mut(&mut self) -> &mut ListState<T::SortField> {
        &mut self.state
    }

    /// Every record, unfiltered.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Filtered and sorted records.
    pub fn view(&self) -> Vec<&'a T> {
        self.state.query().apply(self.items)
    }

    /// Delete dialog.
    pub fn dialog(&self) -> &DeleteDialog {
        &self.dialog
    }

    /// Dialog contents, if open.
    pub fn dialog_view(&self) -> Option<DialogView> {
        self.dialog.render()
    }

    /// Open the delete dialog for `id`.
    pub fn request_delete(&mut self, id: u32) -> Result<(), ContentError> {
        let item = self
            .items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| ContentError::not_found(T::KIND, id.to_string()))?;
        self.dialog.open(id, item.label());
        Ok(())
    }

    /// Cancel, backdrop, or close icon.
    pub fn dismiss_delete(&mut self, action: DialogAction) {
        if action != DialogAction::Confirm {
            self.dialog.handle(action);
        }
    }

    /// Confirm the open dialog: wait the delete delay, log, and close.
    ///
    /// Returns `None` when no dialog was open.
    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn confirm_delete(&mut self) -> Option<DeleteOutcome> {
        let id = self.dialog.handle(DialogAction::Confirm)?;
        tokio::time::sleep(self.delete_delay).await;
        info!(id, "Delete confirmed; catalog is read-only so the record stays");
        self.dialog.finish();
        Some(DeleteOutcome {
            kind: T::KIND,
            id,
            removed: false,
        })
    }
}
