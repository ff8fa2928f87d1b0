//! Shared test doubles for DNS lookups.

use std::collections::HashMap;

use super::records::{LookupFailure, RecordSource};
use super::types::RecordKind;

/// Answers lookups from a fixed table; kinds not in the table have no records.
#[derive(Default)]
pub(crate) struct FakeSource {
    pub answers: HashMap<RecordKind, Result<Vec<String>, LookupFailure>>,
}

impl FakeSource {
    pub fn with(mut self, kind: RecordKind, answer: Result<Vec<String>, LookupFailure>) -> Self {
        self.answers.insert(kind, answer);
        self
    }
}

impl RecordSource for FakeSource {
    async fn lookup_records(
        &self,
        _domain: &str,
        kind: RecordKind,
    ) -> Result<Vec<String>, LookupFailure> {
        self.answers
            .get(&kind)
            .cloned()
            .unwrap_or(Err(LookupFailure::NoRecords))
    }
}
