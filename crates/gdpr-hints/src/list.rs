//! # Hint Lists
//!
//! [`HintList`] groups hints by severity. Within a severity, hints keep the
//! order they were added in; merging another list appends its hints to the
//! matching groups. Nothing is ever re-sorted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gdpr_model::{EntityRef, RecordStore};

use crate::hint::{Hint, Severity};

/// Hints grouped by severity, in insertion order within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HintList {
    groups: BTreeMap<Severity, Vec<Hint>>,
}

impl HintList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one hint to its severity group.
    pub fn push(&mut self, hint: Hint) {
        self.groups.entry(hint.severity).or_default().push(hint);
    }

    /// Append every hint of `other`, group by group.
    pub fn extend(&mut self, other: HintList) {
        for (severity, hints) in other.groups {
            if !hints.is_empty() {
                self.groups.entry(severity).or_default().extend(hints);
            }
        }
    }

    /// True iff every group is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// Total number of hints.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Hints of one severity.
    pub fn get(&self, severity: Severity) -> &[Hint] {
        self.groups
            .get(&severity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every group as (severity, plural title, hints), least significant
    /// first. Empty groups are included.
    pub fn items(&self) -> Vec<(Severity, &'static str, &[Hint])> {
        Severity::ALL
            .into_iter()
            .map(|s| (s, s.title(), self.get(s)))
            .collect()
    }

    /// All hints as (severity, message) pairs in group order.
    pub fn flatten(&self) -> Vec<(Severity, String)> {
        self.iter().map(|h| (h.severity, h.message())).collect()
    }

    /// Iterate over all hints in group order.
    pub fn iter(&self) -> impl Iterator<Item = &Hint> {
        Severity::ALL
            .into_iter()
            .flat_map(move |s| self.get(s).iter())
    }

    /// Replace each hint's displayed name with `resolver(subject, name)`.
    ///
    /// The resolver is only called for subjects that still exist in
    /// `store`, with their current display name. Hints whose subject is
    /// gone, or for which the resolver returns `None`, are left unchanged.
    pub fn rebind<F>(&mut self, store: &dyn RecordStore, mut resolver: F)
    where
        F: FnMut(&EntityRef, &str) -> Option<String>,
    {
        for hint in self.groups.values_mut().flatten() {
            let Some(subject) = hint.subject else {
                continue;
            };
            let Some(name) = store.display_name(&subject) else {
                continue;
            };
            if let Some(label) = resolver(&subject, &name) {
                hint.display = Some(label);
            }
        }
    }
}
