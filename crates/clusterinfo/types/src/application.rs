//! Application and deployment records
//!
//! Records are values: updates produce modified copies which the owning
//! directory then stores.

use crate::{ApplicationId, ClusterInfo, DeploymentId, ZoneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An application and its deployments, one per zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,

    #[serde(default)]
    pub deployments: BTreeMap<ZoneId, Deployment>,
}

impl Application {
    pub fn new(id: ApplicationId) -> Self {
        Self {
            id,
            deployments: BTreeMap::new(),
        }
    }

    /// Copy of this application with the deployment in the same zone replaced
    pub fn with(&self, deployment: Deployment) -> Self {
        let mut updated = self.clone();
        updated.deployments.insert(deployment.zone.clone(), deployment);
        updated
    }

    pub fn deployment(&self, zone: &ZoneId) -> Option<&Deployment> {
        self.deployments.get(zone)
    }

    pub fn deployment_ids(&self) -> Vec<DeploymentId> {
        self.deployments
            .keys()
            .map(|zone| DeploymentId::new(self.id.clone(), zone.clone()))
            .collect()
    }
}

/// An application deployed in one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub zone: ZoneId,

    /// Cluster summaries from the last successful refresh
    #[serde(default)]
    pub cluster_info: ClusterInfo,

    /// When `cluster_info` was last replaced
    #[serde(default)]
    pub cluster_info_refreshed_at: Option<DateTime<Utc>>,
}

impl Deployment {
    pub fn new(zone: ZoneId) -> Self {
        Self {
            zone,
            cluster_info: BTreeMap::new(),
            cluster_info_refreshed_at: None,
        }
    }

    /// Copy with the cluster summaries replaced wholesale
    pub fn with_cluster_info(&self, cluster_info: ClusterInfo) -> Self {
        Self {
            zone: self.zone.clone(),
            cluster_info,
            cluster_info_refreshed_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClusterId, ClusterSummary, ClusterType};

    fn summary(host: &str) -> ClusterSummary {
        ClusterSummary {
            flavor: "f1".into(),
            cost: 1,
            cpu: 1.0,
            mem: 2.0,
            disk: 2.0,
            cluster_type: ClusterType::Container,
            hostnames: vec![host.to_string()],
        }
    }

    #[test]
    fn test_with_cluster_info_replaces_wholesale() {
        let mut old = ClusterInfo::new();
        old.insert(ClusterId::new("old"), summary("a"));
        let deployment = Deployment {
            zone: ZoneId::new("prod.eu-west-1"),
            cluster_info: old,
            cluster_info_refreshed_at: None,
        };

        let mut fresh = ClusterInfo::new();
        fresh.insert(ClusterId::new("new"), summary("b"));
        let updated = deployment.with_cluster_info(fresh);

        assert!(!updated.cluster_info.contains_key(&ClusterId::new("old")));
        assert!(updated.cluster_info.contains_key(&ClusterId::new("new")));
        assert!(updated.cluster_info_refreshed_at.is_some());
        // Original untouched
        assert!(deployment.cluster_info.contains_key(&ClusterId::new("old")));
    }

    #[test]
    fn test_application_with_replaces_only_matching_zone() {
        let east = ZoneId::new("prod.us-east-3");
        let west = ZoneId::new("prod.us-west-1");
        let app = Application::new(ApplicationId::new("t.a.default"))
            .with(Deployment::new(east.clone()))
            .with(Deployment::new(west.clone()));

        let mut info = ClusterInfo::new();
        info.insert(ClusterId::new("c1"), summary("h"));
        let updated = app.with(app.deployment(&east).unwrap().with_cluster_info(info));

        assert_eq!(updated.deployments.len(), 2);
        assert_eq!(updated.deployment(&east).unwrap().cluster_info.len(), 1);
        assert!(updated.deployment(&west).unwrap().cluster_info.is_empty());
    }

    #[test]
    fn test_deployment_ids_in_zone_order() {
        let app = Application::new(ApplicationId::new("t.a.default"))
            .with(Deployment::new(ZoneId::new("prod.b")))
            .with(Deployment::new(ZoneId::new("prod.a")));

        let ids: Vec<String> = app.deployment_ids().iter().map(|d| d.to_string()).collect();
        assert_eq!(ids, vec!["t.a.default in prod.a", "t.a.default in prod.b"]);
    }
}
