//! Property tests: cluster aggregation of arbitrary node lists.

use clusterinfo_daemon::aggregate;
use clusterinfo_types::{
    ClusterId, Flavor, FlavorCatalog, Membership, NodeList, NodeRecord,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Generate an optional membership in one of a few clusters.
fn arb_membership() -> impl Strategy<Value = Option<Membership>> {
    prop::option::of(
        (
            prop_oneof![Just("c0"), Just("c1"), Just("c2"), Just("c3")],
            prop_oneof![Just("admin"), Just("container"), Just("content")],
        )
            .prop_map(|(id, ty)| Membership::new(id, ty)),
    )
}

/// Generate a node list with unique hostnames.
fn arb_node_list() -> impl Strategy<Value = NodeList> {
    prop::collection::vec(
        (
            prop_oneof![Just("f0"), Just("f1"), Just("f2")],
            0u32..100,
            arb_membership(),
        ),
        0..24,
    )
    .prop_map(|entries| {
        NodeList::new(
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (flavor, cost, membership))| NodeRecord {
                    hostname: format!("host{}.example.com", i),
                    flavor: flavor.to_string(),
                    cost,
                    membership,
                })
                .collect(),
        )
    })
}

/// Catalog knowing `f0` and `f1`; `f2` is always a miss.
fn catalog() -> FlavorCatalog {
    FlavorCatalog::new([
        Flavor::new("f0").with_resources(2.0, 8.0, 50.0),
        Flavor::new("f1").with_resources(16.0, 64.0, 800.0),
    ])
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Nodes without membership never show up in any cluster.
    #[test]
    fn unmembered_nodes_are_excluded(nodes in arb_node_list()) {
        let info = aggregate(&nodes, Some(&catalog())).unwrap();

        let listed: Vec<&String> = info.values().flat_map(|s| s.hostnames.iter()).collect();
        let membered = nodes.nodes.iter().filter(|n| n.membership.is_some()).count();
        prop_assert_eq!(listed.len(), membered);

        for node in nodes.nodes.iter().filter(|n| n.membership.is_none()) {
            prop_assert!(!listed.contains(&&node.hostname));
        }
    }

    /// One summary per distinct cluster id.
    #[test]
    fn one_summary_per_cluster(nodes in arb_node_list()) {
        let info = aggregate(&nodes, Some(&catalog())).unwrap();

        let ids: BTreeSet<ClusterId> = nodes
            .nodes
            .iter()
            .filter_map(|n| n.membership.as_ref())
            .map(|m| ClusterId::new(m.cluster_id.clone()))
            .collect();
        prop_assert_eq!(info.keys().cloned().collect::<BTreeSet<_>>(), ids);
    }

    /// Hostnames keep the order the inventory reported them in.
    #[test]
    fn hostnames_keep_input_order(nodes in arb_node_list()) {
        let info = aggregate(&nodes, Some(&catalog())).unwrap();

        for (id, summary) in &info {
            let expected: Vec<String> = nodes
                .nodes
                .iter()
                .filter(|n| n.membership.as_ref().map(|m| m.cluster_id.as_str()) == Some(id.as_str()))
                .map(|n| n.hostname.clone())
                .collect();
            prop_assert_eq!(&summary.hostnames, &expected);
        }
    }

    /// Aggregating the same snapshot twice serializes identically.
    #[test]
    fn aggregation_is_idempotent(nodes in arb_node_list()) {
        let first = serde_json::to_string(&aggregate(&nodes, Some(&catalog())).unwrap()).unwrap();
        let second = serde_json::to_string(&aggregate(&nodes, Some(&catalog())).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Disk always mirrors memory.
    #[test]
    fn disk_mirrors_memory(nodes in arb_node_list()) {
        let info = aggregate(&nodes, Some(&catalog())).unwrap();
        for summary in info.values() {
            prop_assert_eq!(summary.mem, summary.disk);
        }
    }

    /// Without a catalog hardware is zero and cost comes from the first member.
    #[test]
    fn missing_catalog_yields_zero_hardware(nodes in arb_node_list()) {
        let info = aggregate(&nodes, None).unwrap();

        for (id, summary) in &info {
            prop_assert_eq!((summary.cpu, summary.mem, summary.disk), (0.0, 0.0, 0.0));

            let first = nodes
                .nodes
                .iter()
                .find(|n| n.membership.as_ref().map(|m| m.cluster_id.as_str()) == Some(id.as_str()))
                .unwrap();
            prop_assert_eq!(summary.cost, first.cost);
            prop_assert_eq!(&summary.flavor, &first.flavor);
        }
    }
}
