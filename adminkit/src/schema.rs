use serde::{Deserialize, Serialize};

/// Input widget a field renders as. Validation keys off this too: `Email`
/// implies the email format check, `Number` implies numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Date,
    Textarea,
    Select,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        SelectOption {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternRule {
    pub source: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct Rules {
    pub required: bool,
    pub required_message: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<PatternRule>,
}

/// Declarative description of one editable field of a record kind. A slice
/// of these drives the form layout, the validator and the REST create path.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<String>,
    pub options: Vec<SelectOption>,
    pub rules: Rules,
}

impl FieldDef {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldDef {
            name,
            label,
            kind,
            placeholder: None,
            options: Vec::new(),
            rules: Rules::default(),
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        FieldDef::new(name, label, FieldKind::Text)
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        FieldDef::new(name, label, FieldKind::Email)
    }

    pub fn number(name: &'static str, label: &'static str) -> Self {
        FieldDef::new(name, label, FieldKind::Number)
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        FieldDef::new(name, label, FieldKind::Date)
    }

    pub fn textarea(name: &'static str, label: &'static str) -> Self {
        FieldDef::new(name, label, FieldKind::Textarea)
    }

    pub fn select(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        let mut field = FieldDef::new(name, label, FieldKind::Select);
        field.options = options;
        field
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    /// Marks the field required with a custom message instead of the
    /// default "<Label> is required".
    pub fn required_msg(mut self, message: impl Into<String>) -> Self {
        self.rules.required = true;
        self.rules.required_message = Some(message.into());
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        self.rules.min = Some(value);
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        self.rules.max = Some(value);
        self
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.rules.min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.rules.max_length = Some(value);
        self
    }

    pub fn pattern(mut self, source: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules.pattern = Some(PatternRule {
            source: source.into(),
            message: message.into(),
        });
        self
    }
}
