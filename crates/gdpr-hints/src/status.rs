//! # Registry Status
//!
//! The summary shown on the registry's landing page: the hints of every
//! organization, merged in store order and rebound for display, plus a
//! standing suggestion so the list is never silent.

use gdpr_model::{EntityRef, RecordStore};

use crate::hint::{Hint, Severity};
use crate::list::HintList;
use crate::rules::collect_hints;

/// Shown when the registry holds no organization yet.
pub const ONBOARDING: &str = "First time here? Click to add your organization in the registry";

/// Shown when nothing else is suggested.
pub const CONTINUOUS_PROCESS: &str = "GDPR is a continuous process. Make sure that all your \
    business processes and processing activities that manage personal data are updated in this \
    registry.";

/// Merge the hints of every organization and rebind them with `resolver`.
pub fn registry_status<F>(store: &dyn RecordStore, resolver: F) -> HintList
where
    F: FnMut(&EntityRef, &str) -> Option<String>,
{
    let mut hints = HintList::new();
    let organizations: Vec<EntityRef> = store
        .organizations()
        .map(|org| EntityRef::Organization(org.id))
        .collect();
    if organizations.is_empty() {
        hints.push(Hint::unbound(Severity::Suggestion, ONBOARDING));
        return hints;
    }
    for org in &organizations {
        hints.extend(collect_hints(store, org));
    }
    hints.rebind(store, resolver);
    if hints.get(Severity::Suggestion).is_empty() {
        hints.push(Hint::unbound(Severity::Suggestion, CONTINUOUS_PROCESS));
    }
    tracing::info!(
        organizations = organizations.len(),
        hints = hints.len(),
        "computed registry status"
    );
    hints
}
