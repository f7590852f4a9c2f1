//! Modal Workflow Controller
//!
//! The single create/edit form as an explicit state machine:
//!
//! ```text
//! Closed --open_create--> Create --submit ok / close--> Closed
//! Closed --open_edit----> Edit   --submit ok / close--> Closed
//! ```
//!
//! A failed submit stays in the current mode with the service message in the
//! alert region. Sessions are plain values: every transition takes one and
//! hands back the next.

use crate::api::ItemRepository;
use crate::error::ClientResult;
use crate::models::{Item, ItemPatch, NewItem, QuantityInput};

#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode {
    Closed,
    Create,
    /// `original` is the server state when editing began, used for the diff
    Edit { target_id: String, original: Item },
}

/// Raw text of the three editable inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub description: String,
    pub quantity: String,
}

impl FormFields {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// A form field left blank means "unchanged" (or "not given" on create)
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_blank(value: &str) -> Option<String> {
    if is_blank(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Numeric comparison, so `"5"`, `" 5"` and `"5.0"` all match `5`
fn quantity_matches(input: &str, original: i64) -> bool {
    input
        .trim()
        .parse::<f64>()
        .map(|q| q == original as f64)
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalSession {
    mode: ModalMode,
    form: FormFields,
    alert: Option<String>,
}

impl Default for ModalSession {
    fn default() -> Self {
        Self::closed()
    }
}

impl ModalSession {
    pub fn closed() -> Self {
        Self {
            mode: ModalMode::Closed,
            form: FormFields::default(),
            alert: None,
        }
    }

    /// Fresh Create session with empty fields
    pub fn create() -> Self {
        Self {
            mode: ModalMode::Create,
            form: FormFields::default(),
            alert: None,
        }
    }

    /// Edit session populated from the fetched item
    pub fn edit(original: Item) -> Self {
        Self {
            form: FormFields::from_item(&original),
            mode: ModalMode::Edit {
                target_id: original.id.clone(),
                original,
            },
            alert: None,
        }
    }

    pub fn mode(&self) -> &ModalMode {
        &self.mode
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, ModalMode::Closed)
    }

    pub fn target_id(&self) -> Option<&str> {
        match &self.mode {
            ModalMode::Edit { target_id, .. } => Some(target_id),
            _ => None,
        }
    }

    /// Keep the submitted input and replace any previous alert
    fn rejected(mut self, form: FormFields, message: String) -> Self {
        self.form = form;
        self.alert = Some(message);
        self
    }

    // Presentation, all derived from the mode

    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Closed => "",
            ModalMode::Create => "Create New Item",
            ModalMode::Edit { .. } => "Edit Item",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            ModalMode::Closed => "",
            ModalMode::Create => "Create",
            ModalMode::Edit { .. } => "Save Changes",
        }
    }

    pub fn submit_class(&self) -> &'static str {
        match self.mode {
            ModalMode::Closed => "btn",
            ModalMode::Create => "btn btn-success",
            ModalMode::Edit { .. } => "btn btn-primary",
        }
    }

    pub fn id_placeholder(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "ID Assigned When Created",
            _ => "ID",
        }
    }

    pub fn id_value(&self) -> String {
        self.target_id().unwrap_or_default().to_string()
    }
}

/// Closed -> Create
pub fn open_create() -> ModalSession {
    ModalSession::create()
}

/// Closed -> Edit. Fetches the current item first; on failure no session is
/// produced and the caller keeps the modal closed.
pub async fn open_edit<R>(repo: &R, id: &str) -> ClientResult<ModalSession>
where
    R: ItemRepository + ?Sized,
{
    let original = repo.get(id).await?;
    Ok(ModalSession::edit(original))
}

/// Create | Edit -> Closed, discarding the form and the snapshot
pub fn close(session: ModalSession) -> ModalSession {
    if let Some(id) = session.target_id() {
        log::debug!("Discarding edits to item {}", id);
    }
    ModalSession::closed()
}

/// Create payload: non-blank fields as typed, quantity coerced to a number
pub fn create_payload(form: &FormFields) -> NewItem {
    NewItem {
        name: non_blank(&form.name),
        description: non_blank(&form.description),
        quantity: non_blank(&form.quantity).map(|q| QuantityInput::coerce(&q)),
    }
}

/// Fields whose form value is non-blank and differs from the original
pub fn compute_diff(original: &Item, form: &FormFields) -> ItemPatch {
    ItemPatch {
        name: non_blank(&form.name).filter(|name| *name != original.name),
        description: non_blank(&form.description).filter(|d| *d != original.description),
        quantity: non_blank(&form.quantity)
            .filter(|q| !quantity_matches(q, original.quantity))
            .map(|q| QuantityInput::coerce(&q)),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The service accepted the change; the modal is now closed
    Saved { item: Item, session: ModalSession },
    /// The service refused; modal stays open showing its message
    Rejected(ModalSession),
    /// Submit with no open modal
    Ignored(ModalSession),
}

impl SubmitOutcome {
    #[cfg(test)]
    pub fn session(&self) -> &ModalSession {
        match self {
            SubmitOutcome::Saved { session, .. } => session,
            SubmitOutcome::Rejected(session) | SubmitOutcome::Ignored(session) => session,
        }
    }

    pub fn into_session(self) -> ModalSession {
        match self {
            SubmitOutcome::Saved { session, .. } => session,
            SubmitOutcome::Rejected(session) | SubmitOutcome::Ignored(session) => session,
        }
    }
}

/// Create | Edit -> Closed on success, unchanged mode on failure.
///
/// An Edit with nothing changed still issues the (empty) update.
pub async fn submit<R>(repo: &R, session: ModalSession, form: FormFields) -> SubmitOutcome
where
    R: ItemRepository + ?Sized,
{
    let result = match session.mode() {
        ModalMode::Closed => {
            log::warn!("Submit ignored, modal is closed");
            return SubmitOutcome::Ignored(session);
        }
        ModalMode::Create => repo.create(&create_payload(&form)).await,
        ModalMode::Edit {
            target_id,
            original,
        } => {
            let patch = compute_diff(original, &form);
            if patch.is_empty() {
                log::debug!("No changes to item {}", target_id);
            }
            repo.update(target_id, &patch).await
        }
    };

    match result {
        Ok(item) => {
            log::info!("Saved item {}", item.id);
            SubmitOutcome::Saved {
                item,
                session: ModalSession::closed(),
            }
        }
        Err(e) => {
            log::warn!("Submit failed: {}", e);
            let message = e.user_message();
            SubmitOutcome::Rejected(session.rejected(form, message))
        }
    }
}
