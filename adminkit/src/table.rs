use crate::store::Record;
use serde_json::{Map, Value};
use std::cmp::Ordering;

pub const EMPTY_LABEL: &str = "No results found";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowActions {
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

#[derive(Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    pub render: Option<fn(&Value) -> String>,
}

impl ColumnDef {
    pub fn new(key: &'static str, title: &'static str) -> Self {
        ColumnDef {
            key,
            title,
            sortable: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(mut self, render: fn(&Value) -> String) -> Self {
        self.render = Some(render);
        self
    }
}

/// Read model over a record collection: a live search box and single-column
/// toggle sort on top of whatever rows the caller last loaded.
///
/// Search matches every field of the record, not just the visible columns,
/// so a hit on an off-screen field still surfaces the row.
pub struct TableModel<R: Record> {
    title: String,
    columns: Vec<ColumnDef>,
    rows: Vec<R>,
    search: String,
    sort: Option<(&'static str, SortDirection)>,
    pub actions: RowActions,
}

impl<R: Record> TableModel<R> {
    pub fn new(title: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        TableModel {
            title: title.into(),
            columns,
            rows: Vec::new(),
            search: String::new(),
            sort: None,
            actions: RowActions::default(),
        }
    }

    pub fn with_actions(mut self, actions: RowActions) -> Self {
        self.actions = actions;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn sort(&self) -> Option<(&'static str, SortDirection)> {
        self.sort
    }

    /// First click on a sortable column sorts ascending, a repeat click
    /// flips the direction. Non-sortable columns do not respond.
    pub fn toggle_sort(&mut self, key: &'static str) {
        let Some(column) = self.columns.iter().find(|column| column.key == key) else {
            return;
        };
        if !column.sortable {
            return;
        }
        self.sort = match self.sort {
            Some((active, SortDirection::Asc)) if active == key => Some((key, SortDirection::Desc)),
            Some((active, SortDirection::Desc)) if active == key => Some((key, SortDirection::Asc)),
            _ => Some((key, SortDirection::Asc)),
        };
    }

    /// Rows surviving the search filter, in the active sort order.
    pub fn visible_rows(&self) -> Vec<R> {
        let needle = self.search.to_lowercase();
        let mut projected: Vec<(R, Map<String, Value>)> = self
            .rows
            .iter()
            .filter_map(|row| {
                let Ok(Value::Object(map)) = serde_json::to_value(row) else {
                    return None;
                };
                Some((row.clone(), map))
            })
            .filter(|(_, map)| {
                needle.is_empty()
                    || map
                        .values()
                        .any(|value| cell_text(value).to_lowercase().contains(&needle))
            })
            .collect();
        if let Some((key, direction)) = self.sort {
            projected.sort_by(|(_, a), (_, b)| compare_cells(a.get(key), b.get(key), direction));
        }
        projected.into_iter().map(|(row, _)| row).collect()
    }

    pub fn is_empty_state(&self) -> bool {
        self.visible_rows().is_empty()
    }

    pub fn empty_label(&self) -> &'static str {
        EMPTY_LABEL
    }

    /// One rendered cell per column for the given row.
    pub fn cells(&self, row: &R) -> Vec<String> {
        let value = serde_json::to_value(row).unwrap_or(Value::Null);
        self.columns
            .iter()
            .map(|column| {
                let cell = value.get(column.key).unwrap_or(&Value::Null);
                match column.render {
                    Some(render) => render(cell),
                    None => cell_text(cell),
                }
            })
            .collect()
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(items) => items
            .iter()
            .map(cell_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Missing values sort after present ones no matter the direction; present
/// values compare numerically when both are numbers, textually otherwise.
fn compare_cells(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    let a = a.filter(|value| !value.is_null());
    let b = b.filter(|value| !value.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare_values(a, b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => cell_text(a).cmp(&cell_text(b)),
    }
}
