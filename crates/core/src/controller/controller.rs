//! The metadata table controller.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::mapping::{MappingClient, MappingError, UpsertRequest};
use crate::view::{render_table, TableRow};

use super::store::DataStore;
use super::types::{ConfirmPrompt, EditSession, Notifier, Severity, ViewState};

/// Controller for the mapping administration table.
///
/// Commands take `&mut self`, so at most one workflow runs at a time; the
/// two fetches inside a refresh are the only intra-command concurrency.
pub struct MetadataController {
    client: MappingClient,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    state: ViewState,
    store: DataStore,
    search: String,
    table: Vec<TableRow>,
    active: Option<EditSession>,
}

impl MetadataController {
    pub fn new(
        client: MappingClient,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            client,
            notifier,
            confirm,
            state: ViewState::Loading,
            store: DataStore::new(),
            search: String::new(),
            table: render_table(&[], ""),
            active: None,
        }
    }

    /// Refresh and retry both funnel here.
    pub async fn on_refresh_requested(&mut self) {
        self.refresh_all().await;
    }

    /// Store the search text and re-render from the full current snapshot.
    pub fn on_search_changed(&mut self, text: &str) {
        self.search = text.to_string();
        self.rebuild_table();
    }

    /// Open an edit session for the mapping with this infohash.
    ///
    /// No-op when the snapshot no longer contains it.
    pub fn on_edit_requested(&mut self, infohash: &str) {
        match self.store.find(infohash) {
            Some(mapping) => {
                debug!(infohash = infohash, "Opening edit session");
                self.active = Some(EditSession::new(mapping.clone()));
            }
            None => {
                debug!(infohash = infohash, "Edit requested for unknown mapping");
            }
        }
    }

    /// Submit the active edit session with the dialog's label field.
    ///
    /// Workflow errors are surfaced as error notifications and never
    /// propagate to the caller.
    pub async fn on_save_requested(&mut self, label: &str) {
        if let Err(err) = self.save_edit(label).await {
            self.notifier.notify(&err.to_string(), Severity::Error);
        }
    }

    /// Close the edit dialog without saving.
    pub fn on_cancel_requested(&mut self) {
        self.active = None;
    }

    /// Confirmation-gated delete of the mapping with this infohash.
    ///
    /// Proceeds on the identifier alone: the server is authoritative even
    /// when the snapshot no longer contains the mapping. Workflow errors
    /// are surfaced as error notifications and never propagate.
    pub async fn on_delete_requested(&mut self, infohash: &str) {
        if let Err(err) = self.delete_mapping(infohash).await {
            self.notifier.notify(&err.to_string(), Severity::Error);
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn stats(&self) -> Option<&crate::mapping::MappingStats> {
        self.store.stats()
    }

    pub fn mappings(&self) -> &[crate::mapping::Mapping] {
        self.store.mappings()
    }

    pub fn table(&self) -> &[TableRow] {
        &self.table
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn active_edit(&self) -> Option<&EditSession> {
        self.active.as_ref()
    }

    /// Fetch stats and the mapping list concurrently, committing each
    /// independently as it succeeds. Content only when both succeed; a
    /// committed snapshot stays visible even when the other fetch failed.
    async fn refresh_all(&mut self) {
        self.state = ViewState::Loading;

        let (stats_result, list_result) =
            futures::join!(self.client.fetch_stats(), self.client.fetch_list());

        let stats_error = match stats_result {
            Ok(stats) => {
                self.store.commit_stats(stats);
                None
            }
            Err(err) => Some(err),
        };

        let list_error = match list_result {
            Ok(mappings) => {
                self.store.commit_mappings(mappings);
                self.rebuild_table();
                None
            }
            Err(err) => Some(err),
        };

        // Stats error takes precedence when both fail.
        match stats_error.or(list_error) {
            None => {
                debug!("Refresh complete");
                self.state = ViewState::Content;
            }
            Some(err) => {
                warn!(error = %err, "Refresh failed");
                self.state = ViewState::Error(err.to_string());
            }
        }
    }

    fn rebuild_table(&mut self) {
        self.table = render_table(self.store.mappings(), &self.search);
    }

    async fn save_edit(&mut self, label: &str) -> Result<(), MappingError> {
        let Some(session) = &self.active else {
            return Ok(());
        };

        let arr_name = label.trim();
        if arr_name.is_empty() {
            self.notifier
                .notify("Arr name is required.", Severity::Warning);
            return Ok(());
        }

        let request = UpsertRequest {
            infohash: session.mapping.infohash.clone(),
            torrent_id: session.mapping.torrent_id.clone(),
            torrent_name: session.mapping.torrent_name.clone(),
            arr_name: arr_name.to_string(),
        };

        self.client.upsert(&request).await?;

        self.notifier.notify("Mapping updated.", Severity::Success);
        self.active = None;
        self.refresh_all().await;
        Ok(())
    }

    async fn delete_mapping(&mut self, infohash: &str) -> Result<(), MappingError> {
        if infohash.is_empty() {
            return Ok(());
        }

        if !self.confirm.confirm("Delete this mapping?").await {
            debug!(infohash = infohash, "Delete declined");
            return Ok(());
        }

        self.client.delete(infohash).await?;

        self.notifier.notify("Mapping deleted.", Severity::Success);
        self.refresh_all().await;
        Ok(())
    }
}
