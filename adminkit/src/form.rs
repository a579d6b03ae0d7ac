use crate::error::AppError;
use crate::schema::{FieldDef, FieldKind};
use crate::store::Record;
use crate::validate::{FieldErrors, Validator};
use serde_json::{Map, Number, Value};
use std::marker::PhantomData;

/// What a form submission produced.
pub enum SubmitOutcome {
    /// Validated, normalized field values ready for the store.
    Submitted(Map<String, Value>),
    Invalid(FieldErrors),
    /// A submission is already in flight; nothing was validated or queued.
    Busy,
}

/// Modal create/edit form over one record kind. The draft is kept as loose
/// field values so a half-typed record never has to satisfy the typed shape;
/// it only becomes an `R` once validation passes.
pub struct RecordForm<R: Record> {
    title: String,
    fields: Vec<FieldDef>,
    validator: Validator,
    draft: Map<String, Value>,
    errors: FieldErrors,
    busy: bool,
    _marker: PhantomData<R>,
}

impl<R: Record> RecordForm<R> {
    /// Empty form for creating a new record.
    pub fn create(title: impl Into<String>, fields: Vec<FieldDef>) -> Result<Self, AppError> {
        let validator = Validator::new(&fields)?;
        Ok(RecordForm {
            title: title.into(),
            fields,
            validator,
            draft: Map::new(),
            errors: FieldErrors::new(),
            busy: false,
            _marker: PhantomData,
        })
    }

    /// Form pre-filled from an existing record.
    pub fn edit(title: impl Into<String>, fields: Vec<FieldDef>, record: &R) -> Result<Self, AppError> {
        let mut form = RecordForm::create(title, fields)?;
        if let Value::Object(map) = serde_json::to_value(record)? {
            form.draft = map;
        }
        Ok(form)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.draft.get(name)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Loading..."
        } else {
            "Save"
        }
    }

    /// Sets one field of the draft. For date fields an incoming date-only
    /// value replaces just the date portion, keeping the stored time of day.
    pub fn set_value(&mut self, name: &str, value: Value) {
        let value = match self.field_kind(name) {
            Some(FieldKind::Date) => merge_date(self.draft.get(name), value),
            _ => value,
        };
        self.draft.insert(name.to_string(), value);
    }

    /// The value a widget shows: date fields expose only the date portion.
    pub fn display_value(&self, name: &str) -> String {
        let raw = match self.draft.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };
        match self.field_kind(name) {
            Some(FieldKind::Date) => raw.split('T').next().unwrap_or("").to_string(),
            _ => raw,
        }
    }

    /// Validates the normalized draft. On success the errors clear and the
    /// normalized values are handed back for the caller to persist; any
    /// confirmation is the caller's business, raised once persistence went
    /// through. While busy nothing happens at all.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.busy {
            return SubmitOutcome::Busy;
        }
        let mut normalized = self.draft.clone();
        normalize_draft(&self.fields, &mut normalized);
        let errors = self.validator.validate(&normalized);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }
        self.errors.clear();
        SubmitOutcome::Submitted(normalized)
    }

    fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.kind)
    }

}

/// Normalizes loose field values the way widgets deliver them into what the
/// typed record expects: numeric text becomes a JSON number and a bare date
/// gains a midnight UTC time of day. Shared by form submission and the REST
/// create path so both accept the same bodies.
pub fn normalize_draft(fields: &[FieldDef], draft: &mut Map<String, Value>) {
    for field in fields {
        match field.kind {
            FieldKind::Number => {
                if let Some(Value::String(text)) = draft.get(field.name) {
                    if let Some(number) = parse_number(text) {
                        draft.insert(field.name.to_string(), Value::Number(number));
                    }
                }
            }
            FieldKind::Date => {
                if let Some(Value::String(text)) = draft.get(field.name) {
                    if !text.is_empty() && !text.contains('T') {
                        let stamped = format!("{}T00:00:00Z", text);
                        draft.insert(field.name.to_string(), Value::String(stamped));
                    }
                }
            }
            _ => {}
        }
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Some(Number::from(integer));
    }
    trimmed.parse::<f64>().ok().and_then(Number::from_f64)
}

fn merge_date(current: Option<&Value>, incoming: Value) -> Value {
    let Some(Value::String(previous)) = current else {
        return incoming;
    };
    let Value::String(date) = &incoming else {
        return incoming;
    };
    if date.is_empty() || date.contains('T') {
        return incoming;
    }
    match previous.split_once('T') {
        Some((_, time)) => Value::String(format!("{}T{}", date, time)),
        None => incoming,
    }
}
