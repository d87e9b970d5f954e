use indexmap::IndexMap;
use serde_json::Value;

use crate::dictionary::DictionaryEntry;
use crate::errors::{ProposalError, SnapshotError};
use crate::proposal::{next_status, Transition};

/// The records of the live feed, as of the last snapshot.
///
/// Each snapshot replaces the whole collection; nothing is merged.
/// Records keep snapshot key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryStore {
    records: IndexMap<String, DictionaryEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(json: &str) -> Result<Self, SnapshotError> {
        let mut store = Self::new();
        store.apply_snapshot(json)?;
        Ok(store)
    }

    /// Replaces every record with the ones in `json`, an object of `id -> record`.
    ///
    /// A `null` root is an empty collection. On error the previous records are kept.
    /// Returns the number of records now held.
    pub fn apply_snapshot(&mut self, json: &str) -> Result<usize, SnapshotError> {
        let value: Value = serde_json::from_str(json)?;
        self.apply_value(value)
    }

    pub fn apply_value(&mut self, value: Value) -> Result<usize, SnapshotError> {
        let object = match value {
            Value::Null => Default::default(),
            Value::Object(object) => object,
            other => {
                return Err(SnapshotError::NotAnObject {
                    found: json_kind(&other),
                })
            }
        };
        let mut records = IndexMap::with_capacity(object.len());
        for (id, body) in object {
            let mut entry: DictionaryEntry =
                serde_json::from_value(body).map_err(|e| SnapshotError::Record {
                    id: id.clone(),
                    reason: e.to_string(),
                })?;
            entry.id = id.clone();
            records.insert(id, entry);
        }
        self.records = records;
        tracing::debug!(records = self.records.len(), "applied snapshot");
        Ok(self.records.len())
    }

    /// Replaces every record; ids are taken from the records themselves.
    pub fn replace(&mut self, entries: impl IntoIterator<Item = DictionaryEntry>) {
        self.records = entries.into_iter().map(|e| (e.id.clone(), e)).collect();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DictionaryEntry> {
        self.records.get(id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.records.values()
    }

    /// `initial -> pending`
    pub fn submit(&mut self, id: &str) -> Result<&DictionaryEntry, ProposalError> {
        self.advance(id, Transition::Submit)
    }

    /// `pending -> approved`, only for complete proposals.
    pub fn approve(&mut self, id: &str) -> Result<&DictionaryEntry, ProposalError> {
        self.advance(id, Transition::Approve)
    }

    /// Deletes an `initial` or `pending` proposal and returns it.
    pub fn reject(&mut self, id: &str) -> Result<DictionaryEntry, ProposalError> {
        let entry = self.lookup(id)?;
        next_status(entry, Transition::Reject)?;
        let removed = self
            .records
            .shift_remove(id)
            .ok_or_else(|| ProposalError::NotFound(id.to_string()))?;
        tracing::info!(id, "proposal rejected");
        Ok(removed)
    }

    fn advance(&mut self, id: &str, transition: Transition) -> Result<&DictionaryEntry, ProposalError> {
        let entry = self.lookup(id)?;
        let next = next_status(entry, transition)
            .inspect_err(|e| tracing::warn!(id, error = %e, "refused transition"))?;
        // only rejection deletes, and it does not come through here
        let Some(status) = next else {
            return Err(ProposalError::InvalidTransition {
                id: id.to_string(),
                from: entry.status,
                to: "rejected",
            });
        };
        let entry = self
            .records
            .get_mut(id)
            .ok_or_else(|| ProposalError::NotFound(id.to_string()))?;
        let from = entry.status;
        entry.status = status;
        tracing::info!(id, %from, to = %status, "proposal moved");
        Ok(entry)
    }

    fn lookup(&self, id: &str) -> Result<&DictionaryEntry, ProposalError> {
        self.records
            .get(id)
            .ok_or_else(|| ProposalError::NotFound(id.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
