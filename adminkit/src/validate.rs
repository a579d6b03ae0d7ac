use crate::error::AppError;
use crate::schema::{FieldDef, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Field name to human readable message, at most one message per field.
pub type FieldErrors = BTreeMap<String, String>;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Checks loose field values against a field schema. Pattern rules are
/// compiled once at construction so an invalid pattern surfaces as a schema
/// error instead of failing every submission.
pub struct Validator {
    fields: Vec<FieldDef>,
    patterns: Vec<Option<Regex>>,
}

impl Validator {
    pub fn new(fields: &[FieldDef]) -> Result<Self, AppError> {
        let mut patterns = Vec::with_capacity(fields.len());
        for field in fields {
            match &field.rules.pattern {
                Some(rule) => {
                    let regex = Regex::new(&rule.source).map_err(|err| {
                        AppError::Schema(format!("field {}: {}", field.name, err))
                    })?;
                    patterns.push(Some(regex));
                }
                None => patterns.push(None),
            }
        }
        Ok(Validator {
            fields: fields.to_vec(),
            patterns,
        })
    }

    /// Pure check of a record draft: same input, same errors. Per field the
    /// first failed rule wins, required going before everything else.
    pub fn validate(&self, record: &Map<String, Value>) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for (field, pattern) in self.fields.iter().zip(&self.patterns) {
            if let Some(message) = check_field(field, pattern.as_ref(), record.get(field.name)) {
                errors.insert(field.name.to_string(), message);
            }
        }
        errors
    }

    pub fn is_valid(&self, record: &Map<String, Value>) -> bool {
        self.validate(record).is_empty()
    }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
    }
}

fn check_field(field: &FieldDef, pattern: Option<&Regex>, value: Option<&Value>) -> Option<String> {
    let text = text_of(value);
    if text.is_empty() {
        if field.rules.required {
            return Some(
                field
                    .rules
                    .required_message
                    .clone()
                    .unwrap_or_else(|| format!("{} is required", field.label)),
            );
        }
        // Optional and absent: the remaining rules only apply to present values.
        return None;
    }
    if field.kind == FieldKind::Email && !EMAIL.is_match(&text) {
        return Some("Invalid email address".to_string());
    }
    if field.kind == FieldKind::Number {
        let number: f64 = match text.trim().parse() {
            Ok(number) => number,
            Err(_) => return Some(format!("{} must be a number", field.label)),
        };
        if let Some(min) = field.rules.min {
            if number < min {
                return Some(format!("{} must be at least {}", field.label, min));
            }
        }
        if let Some(max) = field.rules.max {
            if number > max {
                return Some(format!("{} must be at most {}", field.label, max));
            }
        }
    }
    if let Some(min_length) = field.rules.min_length {
        if text.chars().count() < min_length {
            return Some(format!(
                "{} must be at least {} characters",
                field.label, min_length
            ));
        }
    }
    if let Some(max_length) = field.rules.max_length {
        if text.chars().count() > max_length {
            return Some(format!(
                "{} must be at most {} characters",
                field.label, max_length
            ));
        }
    }
    if let (Some(regex), Some(rule)) = (pattern, field.rules.pattern.as_ref()) {
        if !regex.is_match(&text) {
            return Some(rule.message.clone());
        }
    }
    None
}
