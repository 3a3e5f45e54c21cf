use anyhow::{Result, bail};

use rosa_describe::clients::OcmClients;
use rosa_describe::ocm::types::{
  Cluster, ControlPlaneUpgradePolicy, LimitedSupportReason, MachinePool, NodePool, UpgradePolicy, UpgradePolicyState,
};

/// Mock clusters management client. All fields default to an empty classic cluster.
/// Override specific fields to simulate different cluster states.
#[derive(Clone)]
pub struct MockOcmClients {
  pub url: String,
  pub cluster: Cluster,
  pub upgrade_policy: Option<UpgradePolicy>,
  pub upgrade_policy_state: Option<UpgradePolicyState>,
  pub control_plane_upgrade_policy: Option<ControlPlaneUpgradePolicy>,
  pub machine_pools: Vec<MachinePool>,
  pub node_pools: Vec<NodePool>,
  pub limited_support_reasons: Vec<LimitedSupportReason>,
  /// Names of the client methods that fail instead of returning the data above
  pub failing: Vec<&'static str>,
}

impl Default for MockOcmClients {
  fn default() -> Self {
    Self {
      url: "https://api.openshift.com".to_string(),
      cluster: Cluster {
        id: Some("test-id".to_string()),
        name: Some("test-cluster".to_string()),
        ..Default::default()
      },
      upgrade_policy: None,
      upgrade_policy_state: None,
      control_plane_upgrade_policy: None,
      machine_pools: vec![],
      node_pools: vec![],
      limited_support_reasons: vec![],
      failing: vec![],
    }
  }
}

impl MockOcmClients {
  fn check(&self, method: &str) -> Result<()> {
    if self.failing.iter().any(|failing| *failing == method) {
      bail!("mock OCM error in {method}");
    }
    Ok(())
  }
}

impl OcmClients for MockOcmClients {
  async fn get_cluster(&self, _key: &str) -> Result<Cluster> {
    self.check("get_cluster")?;
    Ok(self.cluster.clone())
  }

  async fn get_scheduled_upgrade(&self, _cluster_id: &str) -> Result<(Option<UpgradePolicy>, Option<UpgradePolicyState>)> {
    self.check("get_scheduled_upgrade")?;
    Ok((self.upgrade_policy.clone(), self.upgrade_policy_state.clone()))
  }

  async fn get_control_plane_scheduled_upgrade(&self, _cluster_id: &str) -> Result<Option<ControlPlaneUpgradePolicy>> {
    self.check("get_control_plane_scheduled_upgrade")?;
    Ok(self.control_plane_upgrade_policy.clone())
  }

  async fn get_machine_pools(&self, _cluster_id: &str) -> Result<Vec<MachinePool>> {
    self.check("get_machine_pools")?;
    Ok(self.machine_pools.clone())
  }

  async fn get_node_pools(&self, _cluster_id: &str) -> Result<Vec<NodePool>> {
    self.check("get_node_pools")?;
    Ok(self.node_pools.clone())
  }

  async fn get_limited_support_reasons(&self, _cluster_id: &str) -> Result<Vec<LimitedSupportReason>> {
    self.check("get_limited_support_reasons")?;
    Ok(self.limited_support_reasons.clone())
  }

  fn connection_url(&self) -> &str {
    &self.url
  }
}

/// Mock that returns errors for all methods, used for error path testing
pub struct MockOcmClientsError;

impl OcmClients for MockOcmClientsError {
  async fn get_cluster(&self, _key: &str) -> Result<Cluster> { bail!("mock OCM error") }
  async fn get_scheduled_upgrade(&self, _: &str) -> Result<(Option<UpgradePolicy>, Option<UpgradePolicyState>)> { bail!("mock OCM error") }
  async fn get_control_plane_scheduled_upgrade(&self, _: &str) -> Result<Option<ControlPlaneUpgradePolicy>> { bail!("mock OCM error") }
  async fn get_machine_pools(&self, _: &str) -> Result<Vec<MachinePool>> { bail!("mock OCM error") }
  async fn get_node_pools(&self, _: &str) -> Result<Vec<NodePool>> { bail!("mock OCM error") }
  async fn get_limited_support_reasons(&self, _: &str) -> Result<Vec<LimitedSupportReason>> { bail!("mock OCM error") }
  fn connection_url(&self) -> &str { "https://api.openshift.com" }
}
