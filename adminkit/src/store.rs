use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A record kind that a [`Store`] can manage. Every record carries a string
/// id and creation/update timestamps; everything else is up to the kind.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Stable collection key for the kind, e.g. `"partners"`.
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn stamp_created(&mut self, at: DateTime<Utc>);
    fn stamp_updated(&mut self, at: DateTime<Utc>);

    /// Builds a record from loose field values, typically a submitted form
    /// draft. Missing id and timestamps are filled with placeholder values
    /// that [`Store::create`] replaces.
    fn from_fields(mut fields: Map<String, Value>) -> Result<Self, AppError> {
        let epoch = Value::String("1970-01-01T00:00:00Z".to_string());
        fields
            .entry("id".to_string())
            .or_insert_with(|| Value::String(String::new()));
        fields
            .entry("createdAt".to_string())
            .or_insert_with(|| epoch.clone());
        fields.entry("updatedAt".to_string()).or_insert(epoch);
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

/// Generates a fresh random record id.
pub fn fresh_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}

/// Volatile collection of records of one kind, kept in insertion order.
///
/// All reads return owned snapshots so callers never hold the lock. A
/// poisoned lock still holds valid rows, so read paths recover instead of
/// propagating the poison.
pub struct Store<R: Record> {
    rows: RwLock<Vec<R>>,
}

impl<R: Record> Store<R> {
    pub fn new() -> Self {
        Store {
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn list_all(&self) -> Vec<R> {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<R> {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|row| row.id() == id)
            .cloned()
    }

    /// Appends a record, assigning a fresh id when the caller left it empty
    /// and stamping both timestamps. Returns the stored form.
    pub fn create(&self, mut draft: R) -> Result<R, AppError> {
        if draft.id().is_empty() {
            draft.assign_id(fresh_id());
        }
        let now = Utc::now();
        draft.stamp_created(now);
        draft.stamp_updated(now);
        let mut rows = self.rows.write()?;
        rows.push(draft.clone());
        Ok(draft)
    }

    /// Shallow-merges `patch` into the record with the given id. The id and
    /// both timestamps are protected keys; `updatedAt` is re-stamped so it
    /// moves strictly forward even for back-to-back updates. Returns `None`
    /// when no record has that id.
    pub fn update(&self, id: &str, patch: Map<String, Value>) -> Result<Option<R>, AppError> {
        let mut rows = self.rows.write()?;
        let Some(idx) = rows.iter().position(|row| row.id() == id) else {
            return Ok(None);
        };
        let mut current = serde_json::to_value(&rows[idx])?;
        let Some(fields) = current.as_object_mut() else {
            return Err(AppError::Internal(format!(
                "{} record did not serialize to an object",
                R::KIND
            )));
        };
        for (key, value) in patch {
            if key == "id" || key == "createdAt" || key == "updatedAt" {
                continue;
            }
            fields.insert(key, value);
        }
        let mut merged: R = serde_json::from_value(current)?;
        merged.stamp_updated(next_instant(rows[idx].updated_at()));
        rows[idx] = merged.clone();
        Ok(Some(merged))
    }

    /// Removes the record with the given id. Returns whether anything was
    /// removed; deleting an unknown id is not an error.
    pub fn delete(&self, id: &str) -> bool {
        let mut rows = self
            .rows
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        rows.len() < before
    }

    /// Replaces the whole collection, keeping ids and timestamps as given.
    /// Bootstrap and test path; regular writes go through [`Store::create`].
    pub fn seed(&self, rows: Vec<R>) {
        *self.rows.write().unwrap_or_else(PoisonError::into_inner) = rows;
    }
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Store::new()
    }
}

fn next_instant(prev: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > prev {
        now
    } else {
        prev + Duration::microseconds(1)
    }
}

struct Registration {
    store: Arc<dyn Any + Send + Sync>,
    len: Box<dyn Fn() -> usize + Send + Sync>,
}

/// String-keyed registry over the typed stores of an application.
///
/// Typed call sites resolve stores statically through [`StoreHub::store`];
/// the kind-string surface exists for the places that genuinely receive a
/// dynamic kind, and those answer with [`AppError::UnknownKind`].
pub struct StoreHub {
    kinds: Vec<&'static str>,
    entries: HashMap<&'static str, Registration>,
}

impl StoreHub {
    pub fn new() -> Self {
        StoreHub {
            kinds: Vec::new(),
            entries: HashMap::new(),
        }
    }

    pub fn register<R: Record>(&mut self, store: Arc<Store<R>>) {
        let probe = store.clone();
        self.kinds.push(R::KIND);
        self.entries.insert(
            R::KIND,
            Registration {
                store,
                len: Box::new(move || probe.len()),
            },
        );
    }

    pub fn store<R: Record>(&self) -> Result<Arc<Store<R>>, AppError> {
        let registration = self
            .entries
            .get(R::KIND)
            .ok_or_else(|| AppError::UnknownKind(R::KIND.to_string()))?;
        registration
            .store
            .clone()
            .downcast::<Store<R>>()
            .map_err(|_| AppError::UnknownKind(R::KIND.to_string()))
    }

    pub fn count(&self, kind: &str) -> Result<usize, AppError> {
        self.entries
            .get(kind)
            .map(|registration| (registration.len)())
            .ok_or_else(|| AppError::UnknownKind(kind.to_string()))
    }

    /// Registered kind keys in registration order.
    pub fn kinds(&self) -> &[&'static str] {
        &self.kinds
    }
}

impl Default for StoreHub {
    fn default() -> Self {
        StoreHub::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Gadget {
        id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        name: String,
        size: Option<u32>,
    }

    impl Record for Gadget {
        const KIND: &'static str = "gadgets";
        fn id(&self) -> &str {
            &self.id
        }
        fn assign_id(&mut self, id: String) {
            self.id = id;
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
        fn updated_at(&self) -> DateTime<Utc> {
            self.updated_at
        }
        fn stamp_created(&mut self, at: DateTime<Utc>) {
            self.created_at = at;
        }
        fn stamp_updated(&mut self, at: DateTime<Utc>) {
            self.updated_at = at;
        }
    }

    fn gadget(name: &str) -> Gadget {
        Gadget::from_fields(fields(json!({ "name": name, "size": 3 })))
            .expect("Failed to build gadget from fields")
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a json object"),
        }
    }

    #[test]
    fn it_should_assign_id_and_timestamps_on_create() {
        let store = Store::<Gadget>::new();
        let created = store.create(gadget("probe")).expect("Failed to create gadget");
        assert!(!created.id.is_empty());
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(store.get_by_id(&created.id), Some(created));
    }

    #[test]
    fn it_should_keep_a_caller_supplied_id() {
        let store = Store::<Gadget>::new();
        let mut draft = gadget("probe");
        draft.id = "gadget-7".to_string();
        let created = store.create(draft).expect("Failed to create gadget");
        assert_eq!(created.id, "gadget-7");
    }

    #[test]
    fn it_should_list_in_insertion_order() {
        let store = Store::<Gadget>::new();
        for name in ["a", "b", "c"] {
            store.create(gadget(name)).expect("Failed to create gadget");
        }
        let names: Vec<String> = store.list_all().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn it_should_bump_updated_at_even_for_an_empty_patch() {
        let store = Store::<Gadget>::new();
        let created = store.create(gadget("probe")).expect("Failed to create gadget");
        let updated = store
            .update(&created.id, Map::new())
            .expect("Failed to update gadget")
            .expect("gadget vanished");
        assert_eq!(updated.name, created.name);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn it_should_ignore_protected_keys_in_a_patch() {
        let store = Store::<Gadget>::new();
        let created = store.create(gadget("probe")).expect("Failed to create gadget");
        let patch = fields(json!({
            "id": "hijacked",
            "createdAt": "1999-01-01T00:00:00Z",
            "name": "renamed"
        }));
        let updated = store
            .update(&created.id, patch)
            .expect("Failed to update gadget")
            .expect("gadget vanished");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "renamed");
    }

    #[test]
    fn it_should_answer_none_when_updating_a_missing_id() {
        let store = Store::<Gadget>::new();
        store.create(gadget("probe")).expect("Failed to create gadget");
        let answer = store
            .update("no-such-id", fields(json!({ "name": "x" })))
            .expect("Failed to update");
        assert!(answer.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn it_should_answer_false_when_deleting_a_missing_id() {
        let store = Store::<Gadget>::new();
        let created = store.create(gadget("probe")).expect("Failed to create gadget");
        assert!(!store.delete("no-such-id"));
        assert_eq!(store.len(), 1);
        assert!(store.delete(&created.id));
        assert!(store.is_empty());
    }

    #[test]
    fn it_should_resolve_typed_stores_and_counts_through_the_hub() {
        let store = Arc::new(Store::<Gadget>::new());
        store.create(gadget("probe")).expect("Failed to create gadget");
        let mut hub = StoreHub::new();
        hub.register(store);
        assert_eq!(hub.kinds(), &["gadgets"]);
        assert_eq!(hub.count("gadgets").expect("Failed to count"), 1);
        let resolved = hub.store::<Gadget>().expect("Failed to resolve store");
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn it_should_reject_an_unknown_kind_string() {
        let hub = StoreHub::new();
        match hub.count("starships") {
            Err(AppError::UnknownKind(kind)) => assert_eq!(kind, "starships"),
            other => panic!("expected UnknownKind, got {:?}", other.map(|_| ())),
        }
    }
}
