//! Action Dispatcher
//!
//! Binds user gestures to the repository, the table and the modal. Gestures
//! are queued on a channel and a single task works through them one at a
//! time, so a submit can never interleave with a delete.

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;

use crate::api::ItemRepository;
use crate::download::CsvDownload;
use crate::error::ClientResult;
use crate::modal::{self, FormFields, ModalSession, SubmitOutcome};
use crate::table::{TableRow, TableView};

#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    CreateClick,
    RefreshClick,
    ExportClick,
    EditClick { id: String },
    DeleteClick { id: String },
    /// Carries the form as it reads at the moment of the click
    SubmitClick(FormFields),
    CloseClick,
}

/// Where the dispatcher pushes visible state
pub trait InventoryView {
    fn show_rows(&self, rows: &[TableRow]);

    fn show_modal(&self, session: &ModalSession);

    fn download(&self, file: &CsvDownload) -> Result<(), String>;

    /// Last-resort status line for failures outside the modal. `None` clears it.
    fn report(&self, message: Option<String>);
}

pub struct Dispatcher<R, V> {
    repo: R,
    view: V,
    export_filename: String,
    table: TableView,
    session: ModalSession,
}

impl<R, V> Dispatcher<R, V>
where
    R: ItemRepository,
    V: InventoryView,
{
    pub fn new(repo: R, view: V, export_filename: impl Into<String>) -> Self {
        Self {
            repo,
            view,
            export_filename: export_filename.into(),
            table: TableView::new(),
            session: ModalSession::closed(),
        }
    }

    #[cfg(test)]
    pub fn table(&self) -> &TableView {
        &self.table
    }

    #[cfg(test)]
    pub fn session(&self) -> &ModalSession {
        &self.session
    }

    #[cfg(test)]
    pub fn repo(&self) -> &R {
        &self.repo
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle one gesture to completion. Errors not absorbed by the modal end
    /// up in the status line.
    pub async fn dispatch(&mut self, gesture: Gesture) {
        log::debug!("Gesture {:?}", gesture);
        if let Err(e) = self.handle(gesture).await {
            log::error!("{}", e);
            self.view.report(Some(e.user_message()));
        }
    }

    /// Drain the gesture queue until every sender is gone
    pub async fn run(mut self, mut gestures: UnboundedReceiver<Gesture>) -> Self {
        while let Some(gesture) = gestures.next().await {
            self.dispatch(gesture).await;
        }
        log::debug!("Gesture queue closed");
        self
    }

    async fn handle(&mut self, gesture: Gesture) -> ClientResult<()> {
        match gesture {
            Gesture::CreateClick => {
                self.set_session(modal::open_create());
            }
            Gesture::RefreshClick => {
                self.refresh().await?;
            }
            Gesture::ExportClick => {
                let csv = self.repo.export_csv().await?;
                let file = CsvDownload::new(self.export_filename.clone(), csv);
                if let Err(e) = self.view.download(&file) {
                    log::error!("Download failed: {}", e);
                    self.view.report(Some(e));
                }
            }
            Gesture::EditClick { id } => {
                let session = modal::open_edit(&self.repo, &id).await?;
                self.set_session(session);
            }
            Gesture::DeleteClick { id } => {
                let removed = self.repo.remove(&id).await;
                if let Err(e) = &removed {
                    log::warn!("Delete of {} failed: {}", id, e);
                }
                // The refresh reveals whether the item is really gone
                self.refresh().await?;
                removed?;
            }
            Gesture::SubmitClick(form) => {
                let session = std::mem::take(&mut self.session);
                match modal::submit(&self.repo, session, form).await {
                    SubmitOutcome::Saved { item, session } => {
                        log::debug!("Refreshing after saving item {}", item.id);
                        self.set_session(session);
                        self.refresh().await?;
                    }
                    outcome => self.set_session(outcome.into_session()),
                }
            }
            Gesture::CloseClick => {
                let session = std::mem::take(&mut self.session);
                self.set_session(modal::close(session));
            }
        }
        Ok(())
    }

    async fn refresh(&mut self) -> ClientResult<()> {
        let items = self.repo.list().await?;
        self.table.render(&items);
        log::info!("Loaded {} items", self.table.len());
        self.view.show_rows(self.table.rows());
        self.view.report(None);
        Ok(())
    }

    fn set_session(&mut self, session: ModalSession) {
        self.session = session;
        self.view.show_modal(&self.session);
    }
}

/// Cloneable handle the UI uses to enqueue gestures
#[derive(Clone)]
pub struct GestureSender {
    tx: UnboundedSender<Gesture>,
}

impl GestureSender {
    pub fn send(&self, gesture: Gesture) {
        if let Err(e) = self.tx.unbounded_send(gesture) {
            log::error!("Gesture dropped, dispatcher is gone: {:?}", e.into_inner());
        }
    }
}

pub fn gesture_channel() -> (GestureSender, UnboundedReceiver<Gesture>) {
    let (tx, rx) = unbounded();
    (GestureSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{item, Call, MemoryRepository};
    use crate::modal::ModalMode;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingView {
        rows: RefCell<Vec<TableRow>>,
        session: RefCell<ModalSession>,
        downloads: RefCell<Vec<CsvDownload>>,
        report: RefCell<Option<String>>,
    }

    impl InventoryView for RecordingView {
        fn show_rows(&self, rows: &[TableRow]) {
            *self.rows.borrow_mut() = rows.to_vec();
        }

        fn show_modal(&self, session: &ModalSession) {
            *self.session.borrow_mut() = session.clone();
        }

        fn download(&self, file: &CsvDownload) -> Result<(), String> {
            self.downloads.borrow_mut().push(file.clone());
            Ok(())
        }

        fn report(&self, message: Option<String>) {
            *self.report.borrow_mut() = message;
        }
    }

    fn dispatcher(items: Vec<crate::models::Item>) -> Dispatcher<MemoryRepository, RecordingView> {
        Dispatcher::new(
            MemoryRepository::with_items(items),
            RecordingView::default(),
            "inventory.csv",
        )
    }

    fn form(name: &str, description: &str, quantity: &str) -> FormFields {
        FormFields {
            name: name.to_string(),
            description: description.to_string(),
            quantity: quantity.to_string(),
        }
    }

    fn row_ids(d: &Dispatcher<MemoryRepository, RecordingView>) -> Vec<String> {
        d.view().rows.borrow().iter().map(|r| r.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_refresh_renders_rows_keyed_by_id() {
        let mut d = dispatcher(vec![item("1", "A", "", 1), item("2", "B", "", 2)]);
        d.dispatch(Gesture::RefreshClick).await;
        assert_eq!(row_ids(&d), vec!["1", "2"]);
        assert_eq!(d.table().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_then_list_no_longer_has_item() {
        let mut d = dispatcher(vec![item("41", "A", "", 1), item("42", "B", "", 2)]);
        d.dispatch(Gesture::DeleteClick { id: "42".to_string() }).await;

        assert_eq!(
            d.repo().calls(),
            vec![Call::Remove("42".to_string()), Call::List]
        );
        assert_eq!(row_ids(&d), vec!["41"]);
        let listed = d.repo().list().await.unwrap();
        assert!(listed.iter().all(|i| i.id != "42"));
    }

    #[tokio::test]
    async fn test_create_flow_closes_and_refreshes() {
        let mut d = dispatcher(vec![]);
        d.dispatch(Gesture::CreateClick).await;
        assert_eq!(d.view().session.borrow().mode(), &ModalMode::Create);

        d.dispatch(Gesture::SubmitClick(form("Bolt", "M4", "10"))).await;
        assert!(!d.session().is_open());
        assert!(!d.view().session.borrow().is_open());
        assert_eq!(d.view().rows.borrow().len(), 1);
        assert_eq!(d.view().rows.borrow()[0].name, "Bolt");
    }

    #[tokio::test]
    async fn test_create_blank_name_shows_message_and_stays_open() {
        let mut d = dispatcher(vec![]);
        d.dispatch(Gesture::CreateClick).await;
        d.dispatch(Gesture::SubmitClick(form("", "", "1"))).await;

        let shown = d.view().session.borrow().clone();
        assert_eq!(shown.mode(), &ModalMode::Create);
        assert_eq!(shown.alert(), Some("Item must have a name"));
        assert!(!d.repo().calls().contains(&Call::List));
    }

    #[tokio::test]
    async fn test_edit_close_issues_no_call() {
        let mut d = dispatcher(vec![item("1", "A", "d", 5)]);
        d.dispatch(Gesture::EditClick { id: "1".to_string() }).await;
        assert_eq!(d.session().target_id(), Some("1"));
        d.repo().clear_calls();

        d.dispatch(Gesture::CloseClick).await;
        assert!(d.repo().calls().is_empty());
        assert!(!d.session().is_open());
        assert_eq!(d.repo().items(), vec![item("1", "A", "d", 5)]);
    }

    #[tokio::test]
    async fn test_edit_submit_sends_diff_and_refreshes() {
        let mut d = dispatcher(vec![item("1", "A", "d", 5)]);
        d.dispatch(Gesture::EditClick { id: "1".to_string() }).await;
        d.repo().clear_calls();

        d.dispatch(Gesture::SubmitClick(form("A", "d2", "5"))).await;
        assert_eq!(d.repo().calls().len(), 2);
        assert_eq!(d.repo().calls()[1], Call::List);
        assert_eq!(d.view().rows.borrow()[0].description, "d2");
    }

    #[tokio::test]
    async fn test_edit_unknown_id_keeps_modal_closed() {
        let mut d = dispatcher(vec![]);
        d.dispatch(Gesture::EditClick { id: "9".to_string() }).await;
        assert!(!d.session().is_open());
        assert_eq!(d.view().report.borrow().as_deref(), Some("Item 9 not found"));
    }

    #[tokio::test]
    async fn test_export_downloads_csv() {
        let mut d = dispatcher(vec![item("1", "A", "d", 5)]);
        d.dispatch(Gesture::ExportClick).await;
        let downloads = d.view().downloads.borrow();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].filename, "inventory.csv");
        assert!(downloads[0].content.contains("1,A,d,5"));
    }

    #[tokio::test]
    async fn test_network_failure_is_reported_then_cleared() {
        let mut d = dispatcher(vec![item("1", "A", "", 1)]);
        d.repo().go_offline();
        d.dispatch(Gesture::RefreshClick).await;
        assert_eq!(
            d.view().report.borrow().as_deref(),
            Some("Network error: connection refused")
        );
        assert!(d.view().rows.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_queued_gestures_run_in_order() {
        let d = dispatcher(vec![item("1", "A", "", 1), item("2", "B", "", 2)]);
        let (sender, rx) = gesture_channel();
        sender.send(Gesture::DeleteClick { id: "1".to_string() });
        sender.send(Gesture::EditClick { id: "2".to_string() });
        sender.send(Gesture::SubmitClick(form("B2", "", "")));
        drop(sender);

        let d = d.run(rx).await;
        let patch = crate::models::ItemPatch {
            name: Some("B2".to_string()),
            ..Default::default()
        };
        assert_eq!(
            d.repo().calls(),
            vec![
                Call::Remove("1".to_string()),
                Call::List,
                Call::Get("2".to_string()),
                Call::Update("2".to_string(), patch),
                Call::List,
            ]
        );
        assert_eq!(row_ids(&d), vec!["2"]);
        assert_eq!(d.view().rows.borrow()[0].name, "B2");
    }
}
