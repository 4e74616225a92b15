//! # Hint Properties Over Generated Registries
//!
//! Property tests over registries of several organizations with random
//! shapes: hint collection is deterministic, survives a snapshot round
//! trip, and the registry status is the concatenation of the per
//! organization lists.

use proptest::prelude::*;

use gdpr_core::RiskLevel;
use gdpr_hints::{collect_hints, registry_status, HintList, Severity, CONTINUOUS_PROCESS};
use gdpr_model::{
    BusinessProcess, DataAudit, EntityRef, InMemoryStore, ListEntry, ListKind, Organization,
    ProcessingActivity, RecordStore, RegistrySnapshot,
};

/// Shape of one generated organization.
#[derive(Debug, Clone)]
struct OrgShape {
    described: bool,
    public_authority: bool,
    /// Data audit risk per activity, one inner vector per process.
    processes: Vec<Vec<RiskLevel>>,
}

fn risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Unknown),
        Just(RiskLevel::Low),
        Just(RiskLevel::Mid),
        Just(RiskLevel::High),
    ]
}

fn org_shape() -> impl Strategy<Value = OrgShape> {
    (
        any::<bool>(),
        any::<bool>(),
        proptest::collection::vec(proptest::collection::vec(risk(), 0..3), 0..3),
    )
        .prop_map(|(described, public_authority, processes)| OrgShape {
            described,
            public_authority,
            processes,
        })
}

fn build(shapes: &[OrgShape]) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    let category = store
        .insert_list_entry(ListEntry::new(ListKind::DataCategory, "Identifiers"))
        .unwrap();
    let purpose = store
        .insert_list_entry(ListEntry::new(ListKind::ProcessingPurpose, "Support"))
        .unwrap();
    let proc_type = store
        .insert_list_entry(ListEntry::new(ListKind::ProcessingType, "Collection"))
        .unwrap();
    let legal = store
        .insert_list_entry(ListEntry::new(ListKind::LegalBasis, "Legitimate interest"))
        .unwrap();

    for (o, shape) in shapes.iter().enumerate() {
        let mut org = Organization::new(format!("Org {o}"));
        if shape.described {
            org.named.description = "described".into();
        }
        org.public_authority = shape.public_authority;
        for (p, risks) in shape.processes.iter().enumerate() {
            let mut process = BusinessProcess::new(format!("Process {o}.{p}"));
            for (a, risk) in risks.iter().enumerate() {
                let mut data = DataAudit::new(format!("Data {o}.{p}.{a}"), category);
                data.risk = *risk;
                let data = store.insert_data_audit(data).unwrap();
                let mut activity = ProcessingActivity::new(
                    format!("Activity {o}.{p}.{a}"),
                    purpose,
                    proc_type,
                    legal,
                );
                activity.data_audit.push(data);
                process.activities.push(store.insert_activity(activity).unwrap());
            }
            org.business.push(store.insert_business_process(process).unwrap());
        }
        store.insert_organization(org).unwrap();
    }
    store
}

fn every_org(store: &InMemoryStore) -> Vec<EntityRef> {
    store
        .organizations()
        .map(|org| EntityRef::Organization(org.id))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn collection_is_deterministic(shapes in proptest::collection::vec(org_shape(), 1..4)) {
        let store = build(&shapes);
        for org in every_org(&store) {
            let first = collect_hints(&store, &org);
            let second = collect_hints(&store, &org);
            prop_assert_eq!(first.is_empty(), first.flatten().is_empty());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn hints_survive_a_snapshot_round_trip(shapes in proptest::collection::vec(org_shape(), 1..4)) {
        let store = build(&shapes);
        let json = serde_json::to_string(&store.to_snapshot()).unwrap();
        let snapshot: RegistrySnapshot = serde_json::from_str(&json).unwrap();
        let reloaded = InMemoryStore::from_snapshot(snapshot).unwrap();
        for org in every_org(&store) {
            prop_assert_eq!(collect_hints(&store, &org), collect_hints(&reloaded, &org));
        }
    }

    #[test]
    fn status_concatenates_organizations(shapes in proptest::collection::vec(org_shape(), 1..4)) {
        let store = build(&shapes);
        let mut expected = HintList::new();
        for org in every_org(&store) {
            expected.extend(collect_hints(&store, &org));
        }
        let status = registry_status(&store, |_, _| None);

        let continuous = status
            .get(Severity::Suggestion)
            .iter()
            .filter(|h| h.text == CONTINUOUS_PROCESS)
            .count();
        if expected.get(Severity::Suggestion).is_empty() {
            prop_assert_eq!(continuous, 1);
            prop_assert_eq!(status.len(), expected.len() + 1);
        } else {
            prop_assert_eq!(continuous, 0);
            prop_assert_eq!(status.flatten(), expected.flatten());
        }
        for severity in [Severity::Issue, Severity::Warning] {
            prop_assert_eq!(status.get(severity), expected.get(severity));
        }
    }

    #[test]
    fn public_authorities_without_officer_get_one_issue_each(
        shapes in proptest::collection::vec(org_shape(), 1..4),
    ) {
        let store = build(&shapes);
        for (org, shape) in every_org(&store).iter().zip(&shapes) {
            let hints = collect_hints(&store, org);
            let dpo_issues = hints
                .get(Severity::Issue)
                .iter()
                .filter(|h| h.text.ends_with("must appoint a Data Protection Officer"))
                .count();
            prop_assert_eq!(dpo_issues, usize::from(shape.public_authority));
        }
    }
}
