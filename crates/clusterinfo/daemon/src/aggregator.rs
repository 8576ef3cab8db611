//! Aggregation of node inventories into per-cluster summaries

use clusterinfo_types::{
    ClusterId, ClusterInfo, ClusterSummary, ClusterType, ClusterTypeError, FlavorCatalog,
    Membership, NodeList, NodeRecord,
};
use std::collections::BTreeMap;

/// Summarize the clusters of one deployment.
///
/// Nodes without membership are ignored. Each cluster is described by its
/// first node in inventory order; hardware comes from `catalog` and defaults
/// to zero when the zone has no catalog or the flavor is unknown. Fails only
/// when a representative reports an unknown cluster type.
pub fn aggregate(
    nodes: &NodeList,
    catalog: Option<&FlavorCatalog>,
) -> Result<ClusterInfo, ClusterTypeError> {
    let mut clusters: BTreeMap<ClusterId, Vec<(&NodeRecord, &Membership)>> = BTreeMap::new();
    for node in &nodes.nodes {
        if let Some(membership) = &node.membership {
            clusters
                .entry(ClusterId::new(membership.cluster_id.as_str()))
                .or_default()
                .push((node, membership));
        }
    }

    let mut info = ClusterInfo::new();
    for (id, members) in clusters {
        info.insert(id, summarize(&members, catalog)?);
    }

    Ok(info)
}

/// `members` is never empty: groups are only created when a node is pushed.
fn summarize(
    members: &[(&NodeRecord, &Membership)],
    catalog: Option<&FlavorCatalog>,
) -> Result<ClusterSummary, ClusterTypeError> {
    let (representative, membership) = members[0];
    let cluster_type = membership.cluster_type.parse::<ClusterType>()?;

    let (cpu, mem, disk) = catalog
        .and_then(|catalog| catalog.get_flavor(&representative.flavor))
        // Disk is reported from the memory figure; consumers expect mem == disk.
        .map(|flavor| {
            (
                flavor.min_cpu_cores,
                flavor.min_main_memory_available_gb,
                flavor.min_main_memory_available_gb,
            )
        })
        .unwrap_or((0.0, 0.0, 0.0));

    Ok(ClusterSummary {
        flavor: representative.flavor.clone(),
        cost: representative.cost,
        cpu,
        mem,
        disk,
        cluster_type,
        hostnames: members.iter().map(|(node, _)| node.hostname.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clusterinfo_types::Flavor;

    fn node(host: &str, cluster: &str, ty: &str, flavor: &str, cost: u32) -> NodeRecord {
        NodeRecord::new(host, flavor, cost).with_membership(Membership::new(cluster, ty))
    }

    fn catalog() -> FlavorCatalog {
        FlavorCatalog::new([Flavor::new("f1").with_resources(4.0, 16.0, 16.0)])
    }

    #[test]
    fn test_reference_scenario() {
        let nodes = NodeList::new(vec![
            node("a", "c1", "content", "f1", 10),
            node("b", "c1", "content", "f1", 10),
            node("x", "c2", "container", "f2", 5),
        ]);

        let info = aggregate(&nodes, Some(&catalog())).unwrap();
        assert_eq!(info.len(), 2);

        let c1 = &info[&ClusterId::new("c1")];
        assert_eq!(c1.flavor, "f1");
        assert_eq!(c1.cost, 10);
        assert_eq!(c1.cpu, 4.0);
        assert_eq!(c1.mem, 16.0);
        assert_eq!(c1.disk, 16.0);
        assert_eq!(c1.cluster_type, ClusterType::Content);
        assert_eq!(c1.hostnames, vec!["a", "b"]);

        let c2 = &info[&ClusterId::new("c2")];
        assert_eq!(c2.flavor, "f2");
        assert_eq!(c2.cost, 5);
        assert_eq!((c2.cpu, c2.mem, c2.disk), (0.0, 0.0, 0.0));
        assert_eq!(c2.cluster_type, ClusterType::Container);
        assert_eq!(c2.hostnames, vec!["x"]);
    }

    #[test]
    fn test_unmembered_nodes_excluded() {
        let nodes = NodeList::new(vec![
            NodeRecord::new("spare", "f1", 3),
            node("a", "c1", "content", "f1", 10),
        ]);

        let info = aggregate(&nodes, Some(&catalog())).unwrap();
        assert_eq!(info.len(), 1);
        assert_eq!(info[&ClusterId::new("c1")].hostnames, vec!["a"]);
    }

    #[test]
    fn test_interleaved_nodes_grouped_in_input_order() {
        let nodes = NodeList::new(vec![
            node("c", "c2", "container", "f1", 1),
            node("a", "c1", "content", "f1", 1),
            node("d", "c2", "container", "f1", 1),
            node("b", "c1", "content", "f1", 1),
        ]);

        let info = aggregate(&nodes, None).unwrap();
        assert_eq!(info[&ClusterId::new("c1")].hostnames, vec!["a", "b"]);
        assert_eq!(info[&ClusterId::new("c2")].hostnames, vec!["c", "d"]);
    }

    #[test]
    fn test_first_node_is_representative() {
        let nodes = NodeList::new(vec![
            node("a", "c1", "content", "f1", 10),
            node("b", "c1", "content", "f9", 99),
        ]);

        let summary = &aggregate(&nodes, Some(&catalog())).unwrap()[&ClusterId::new("c1")];
        assert_eq!(summary.flavor, "f1");
        assert_eq!(summary.cost, 10);
        assert_eq!(summary.cpu, 4.0);
    }

    #[test]
    fn test_missing_catalog_yields_zero_hardware() {
        let nodes = NodeList::new(vec![node("a", "c1", "content", "f1", 7)]);

        let summary = &aggregate(&nodes, None).unwrap()[&ClusterId::new("c1")];
        assert_eq!((summary.cpu, summary.mem, summary.disk), (0.0, 0.0, 0.0));
        assert_eq!(summary.cost, 7);
    }

    #[test]
    fn test_disk_mirrors_memory() {
        let catalog = FlavorCatalog::new([Flavor::new("big").with_resources(8.0, 32.0, 800.0)]);
        let nodes = NodeList::new(vec![node("a", "c1", "content", "big", 1)]);

        let summary = &aggregate(&nodes, Some(&catalog)).unwrap()[&ClusterId::new("c1")];
        assert_eq!(summary.mem, 32.0);
        assert_eq!(summary.disk, 32.0);
    }

    #[test]
    fn test_unknown_cluster_type_fails() {
        let nodes = NodeList::new(vec![
            node("a", "c1", "content", "f1", 1),
            node("b", "c2", "storage", "f1", 1),
        ]);

        let err = aggregate(&nodes, None).unwrap_err();
        assert_eq!(err, ClusterTypeError::Unknown("storage".into()));
    }

    #[test]
    fn test_empty_inventory() {
        let info = aggregate(&NodeList::default(), Some(&catalog())).unwrap();
        assert!(info.is_empty());
    }
}
