//! # Edit Session
//!
//! The add/edit form as an explicit state machine. The session owns a
//! [`Draft`] while the form is open; the store is only touched by a commit
//! whose draft validates.
//!
//! ```text
//!            open(None)                 commit (valid) / cancel
//!   Idle ───────────────▶ Creating ─────────────────────────────▶ Idle
//!     │                     │ ▲
//!     │ open(Some(id))      └─┘ edit / commit (invalid)
//!     ▼
//!   Editing(id) ──commit (valid) / cancel──▶ Idle
//!     │ ▲
//!     └─┘ edit / commit (invalid)
//! ```
//!
//! Misuse (`open` while open, `edit`/`commit` while idle) fails with
//! [`TableError::InvalidTransition`] and changes nothing. `cancel` while idle
//! is a no-op.

use crate::commands::{self, CmdResult};
use crate::error::{Result, TableError, ValidationErrors};
use crate::model::{Draft, Field, RecordId};
use crate::store::DataStore;
use crate::validation::validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Creating,
    Editing(RecordId),
}

impl Mode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Mode::Idle)
    }
}

#[derive(Debug, Default)]
pub struct EditSession {
    mode: Mode,
    draft: Draft,
    errors: ValidationErrors,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Form heading for the current mode.
    pub fn title(&self) -> Option<&'static str> {
        match self.mode {
            Mode::Idle => None,
            Mode::Creating => Some("Add record"),
            Mode::Editing(_) => Some("Edit record"),
        }
    }

    /// Label of the confirm button for the current mode.
    pub fn submit_label(&self) -> Option<&'static str> {
        match self.mode {
            Mode::Idle => None,
            Mode::Creating => Some("Add"),
            Mode::Editing(_) => Some("Update"),
        }
    }

    /// Opens the form, empty for a new record or prefilled from `target`.
    pub fn open<S: DataStore>(&mut self, store: &S, target: Option<RecordId>) -> Result<()> {
        if self.mode.is_open() {
            return Err(self.reject("open"));
        }

        let (mode, draft) = match target {
            None => (Mode::Creating, Draft::default()),
            Some(id) => {
                let record = store.get(id)?;
                (Mode::Editing(id), Draft::from_record(&record))
            }
        };

        tracing::debug!(mode = ?mode, "session opened");
        self.mode = mode;
        self.draft = draft;
        self.errors.clear();
        Ok(())
    }

    /// Updates one draft field. Clears that field's error; never touches the store.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        if !self.mode.is_open() {
            return Err(self.reject("edit"));
        }
        self.draft.set(field, value);
        self.errors.remove(field);
        Ok(())
    }

    /// Validates the draft and writes it to the store.
    ///
    /// On validation failure the session stays open with `errors` populated.
    /// On a store failure (the edited record vanished) the session also stays
    /// open so the caller can cancel.
    pub fn commit<S: DataStore>(&mut self, store: &mut S) -> Result<CmdResult> {
        if !self.mode.is_open() {
            return Err(self.reject("commit"));
        }

        if let Err(errors) = validate(&self.draft) {
            tracing::warn!(errors = %errors, "commit rejected");
            self.errors = errors.clone();
            return Err(TableError::Validation(errors));
        }

        let result = match self.mode {
            Mode::Creating => commands::create::run(store, &self.draft)?,
            Mode::Editing(id) => commands::update::run(store, id, &self.draft)?,
            Mode::Idle => return Err(self.reject("commit")),
        };

        self.reset();
        Ok(result)
    }

    /// Discards the draft.
    pub fn cancel(&mut self) {
        if self.mode.is_open() {
            tracing::debug!(mode = ?self.mode, "session cancelled");
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.mode = Mode::Idle;
        self.draft = Draft::default();
        self.errors.clear();
    }

    fn reject(&self, action: &str) -> TableError {
        tracing::warn!(action, mode = ?self.mode, "invalid session action");
        TableError::InvalidTransition(format!("cannot {} while {:?}", action, self.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::validation::{NAME_REQUIRED, VALUE_INVALID};

    fn fill(session: &mut EditSession, name: &str, date: &str, value: &str) {
        session.edit(Field::Name, name).unwrap();
        session.edit(Field::Date, date).unwrap();
        session.edit(Field::Value, value).unwrap();
    }

    #[test]
    fn starts_idle() {
        let session = EditSession::new();
        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(session.title(), None);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn cancel_discards_draft_without_mutation() {
        let mut fx = StoreFixture::new().with_sample();
        let before = fx.store.records();
        let mut session = EditSession::new();

        session.open(&fx.store, None).unwrap();
        session.edit(Field::Name, "X").unwrap();
        session.cancel();

        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(session.draft(), &Draft::default());
        assert_eq!(fx.store.records(), before);
        assert!(session.commit(&mut fx.store).is_err());
    }

    #[test]
    fn create_commit_adds_one_record_and_goes_idle() {
        let mut fx = StoreFixture::new().with_sample();
        let mut session = EditSession::new();

        session.open(&fx.store, None).unwrap();
        assert_eq!(session.mode(), Mode::Creating);
        assert_eq!(session.submit_label(), Some("Add"));
        fill(&mut session, "Анна", "01.03.2025", "42");

        let result = session.commit(&mut fx.store).unwrap();
        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(fx.store.len(), 4);
        assert_eq!(result.affected_records[0].name, "Анна");
    }

    #[test]
    fn empty_name_keeps_mode_and_reports_error() {
        let mut fx = StoreFixture::new().with_sample();
        let mut session = EditSession::new();

        session.open(&fx.store, None).unwrap();
        fill(&mut session, "", "2025-01-01", "1");

        let err = session.commit(&mut fx.store).unwrap_err();
        assert!(matches!(err, TableError::Validation(_)));
        assert_eq!(session.mode(), Mode::Creating);
        assert_eq!(session.errors().get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(fx.store.len(), 3);
        assert_eq!(session.draft().value, "1");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut fx = StoreFixture::new();
        let mut session = EditSession::new();
        session.open(&fx.store, None).unwrap();
        session.edit(Field::Value, "abc").unwrap();
        session.commit(&mut fx.store).unwrap_err();
        assert_eq!(session.errors().get(Field::Value), Some(VALUE_INVALID));
        assert_eq!(session.errors().len(), 3);

        session.edit(Field::Value, "5").unwrap();
        assert!(!session.errors().contains(Field::Value));
        assert!(session.errors().contains(Field::Name));
    }

    #[test]
    fn edit_prefills_and_updates_in_place() {
        let mut fx = StoreFixture::new().with_sample();
        let mut session = EditSession::new();

        session.open(&fx.store, Some(RecordId(2))).unwrap();
        assert_eq!(session.mode(), Mode::Editing(RecordId(2)));
        assert_eq!(session.title(), Some("Edit record"));
        assert_eq!(session.draft(), &Draft::new("Петр Петров", "24.06.2025", "99"));

        session.edit(Field::Value, "100").unwrap();
        // Draft edits are invisible until commit.
        assert_eq!(fx.store.get(RecordId(2)).unwrap().value, 99.0);

        session.commit(&mut fx.store).unwrap();
        let records = fx.store.records();
        assert_eq!(records[1].id, RecordId(2));
        assert_eq!(records[1].value, 100.0);
        assert_eq!(records[1].iso_date(), "2025-06-24");
    }

    #[test]
    fn opening_missing_record_stays_idle() {
        let fx = StoreFixture::new().with_sample();
        let mut session = EditSession::new();
        let err = session.open(&fx.store, Some(RecordId(9))).unwrap_err();
        assert!(matches!(err, TableError::NotFound(RecordId(9))));
        assert_eq!(session.mode(), Mode::Idle);
    }

    #[test]
    fn commit_after_concurrent_delete_keeps_session_open() {
        let mut fx = StoreFixture::new().with_sample();
        let mut session = EditSession::new();
        session.open(&fx.store, Some(RecordId(1))).unwrap();
        fx.store.remove(RecordId(1)).unwrap();

        let err = session.commit(&mut fx.store).unwrap_err();
        assert!(matches!(err, TableError::NotFound(RecordId(1))));
        assert_eq!(session.mode(), Mode::Editing(RecordId(1)));
        assert_eq!(fx.store.len(), 2);
    }

    #[test]
    fn rejects_invalid_transitions() {
        let fx = StoreFixture::new().with_sample();
        let mut session = EditSession::new();
        assert!(matches!(
            session.edit(Field::Name, "x"),
            Err(TableError::InvalidTransition(_))
        ));

        session.open(&fx.store, None).unwrap();
        assert!(matches!(
            session.open(&fx.store, Some(RecordId(1))),
            Err(TableError::InvalidTransition(_))
        ));
        assert_eq!(session.mode(), Mode::Creating);
    }
}
