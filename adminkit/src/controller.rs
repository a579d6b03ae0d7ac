use crate::error::AppError;
use crate::form::{RecordForm, SubmitOutcome};
use crate::notify::Notifier;
use crate::schema::FieldDef;
use crate::store::{Record, Store};
use crate::table::TableModel;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Post-validation hook that can stamp derived values onto the outgoing
/// fields, e.g. a denormalized display name looked up from another store.
pub type EnrichFn = Box<dyn Fn(&mut Map<String, Value>) + Send + Sync>;

/// Which modal, if any, a screen currently shows. At most one is open.
pub enum ScreenMode<R> {
    Idle,
    Creating,
    Editing(R),
    ConfirmingDelete(R),
}

/// One management page: a table over a store plus the create/edit/delete
/// modal state machine around it. Field schemas come from a closure so
/// dynamic select options (say, the current partner list) stay fresh each
/// time a form opens.
pub struct Screen<R: Record> {
    title: String,
    store: Arc<Store<R>>,
    notifier: Arc<Notifier>,
    fields_fn: Box<dyn Fn() -> Vec<FieldDef> + Send + Sync>,
    enrich: Option<EnrichFn>,
    pub table: TableModel<R>,
    mode: ScreenMode<R>,
    form: Option<RecordForm<R>>,
}

impl<R: Record> Screen<R> {
    pub fn new(
        title: impl Into<String>,
        store: Arc<Store<R>>,
        notifier: Arc<Notifier>,
        fields_fn: Box<dyn Fn() -> Vec<FieldDef> + Send + Sync>,
        table: TableModel<R>,
    ) -> Self {
        let mut screen = Screen {
            title: title.into(),
            store,
            notifier,
            fields_fn,
            enrich: None,
            table,
            mode: ScreenMode::Idle,
            form: None,
        };
        screen.refresh();
        screen
    }

    pub fn with_enrich(mut self, enrich: EnrichFn) -> Self {
        self.enrich = Some(enrich);
        self
    }

    /// Reloads the table from the store.
    pub fn refresh(&mut self) {
        let rows = self.store.list_all();
        self.table.set_rows(rows);
    }

    pub fn mode(&self) -> &ScreenMode<R> {
        &self.mode
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.mode, ScreenMode::Idle)
    }

    pub fn form(&self) -> Option<&RecordForm<R>> {
        self.form.as_ref()
    }

    pub fn open_create(&mut self) -> Result<(), AppError> {
        self.close();
        let fields = (self.fields_fn)();
        self.form = Some(RecordForm::create(format!("Add {}", self.title), fields)?);
        self.mode = ScreenMode::Creating;
        Ok(())
    }

    /// Opens the edit modal for the given id. A stale id is not an error:
    /// the screen stays idle and the miss is only logged.
    pub fn open_edit(&mut self, id: &str) -> Result<(), AppError> {
        self.close();
        let Some(record) = self.store.get_by_id(id) else {
            crate::warn!("edit requested for missing {} id {}", R::KIND, id);
            return Ok(());
        };
        let fields = (self.fields_fn)();
        self.form = Some(RecordForm::edit(
            format!("Edit {}", self.title),
            fields,
            &record,
        )?);
        self.mode = ScreenMode::Editing(record);
        Ok(())
    }

    pub fn request_delete(&mut self, id: &str) {
        self.close();
        match self.store.get_by_id(id) {
            Some(record) => self.mode = ScreenMode::ConfirmingDelete(record),
            None => crate::warn!("delete requested for missing {} id {}", R::KIND, id),
        }
    }

    /// Dismisses whatever modal is open. Never touches the store.
    pub fn close(&mut self) {
        self.mode = ScreenMode::Idle;
        self.form = None;
    }

    pub fn set_value(&mut self, name: &str, value: Value) {
        if let Some(form) = self.form.as_mut() {
            form.set_value(name, value);
        }
    }

    /// Submits the open form. Returns whether the store changed: `false`
    /// covers validation failures, a busy form and the no-modal case. A
    /// record deleted underneath an open edit modal is a logged no-op. The
    /// saved confirmation is raised only after the store call went through.
    pub fn submit(&mut self) -> Result<bool, AppError> {
        let Some(form) = self.form.as_mut() else {
            return Ok(false);
        };
        let mut fields = match form.submit() {
            SubmitOutcome::Submitted(fields) => fields,
            SubmitOutcome::Invalid(_) | SubmitOutcome::Busy => return Ok(false),
        };
        if let Some(enrich) = &self.enrich {
            enrich(&mut fields);
        }
        match std::mem::replace(&mut self.mode, ScreenMode::Idle) {
            ScreenMode::Creating => {
                let record = R::from_fields(fields)?;
                self.store.create(record)?;
            }
            ScreenMode::Editing(current) => {
                if self.store.update(current.id(), fields)?.is_none() {
                    crate::warn!("update for missing {} id {}", R::KIND, current.id());
                    self.form = None;
                    self.refresh();
                    return Ok(false);
                }
            }
            other => {
                self.mode = other;
                return Ok(false);
            }
        }
        self.form = None;
        self.refresh();
        self.notifier
            .push("Form submitted", "Your changes have been saved successfully.");
        Ok(true)
    }

    /// Carries out the pending delete. Returns whether a record was removed.
    pub fn confirm_delete(&mut self) -> bool {
        let ScreenMode::ConfirmingDelete(record) =
            std::mem::replace(&mut self.mode, ScreenMode::Idle)
        else {
            return false;
        };
        let removed = self.store.delete(record.id());
        if removed {
            self.refresh();
            self.notifier
                .push("Item deleted", "The item has been deleted successfully.");
        } else {
            crate::warn!("delete for missing {} id {}", R::KIND, record.id());
        }
        removed
    }
}
