use anyhow::Result;

use crate::{
  config::Config,
  ocm::{
    Connection,
    resources,
    types::{
      Cluster, ControlPlaneUpgradePolicy, LimitedSupportReason, MachinePool, NodePool, UpgradePolicy,
      UpgradePolicyState,
    },
  },
};

/// Trait abstracting all clusters management API operations used when describing a cluster
pub trait OcmClients {
  fn get_cluster(&self, key: &str) -> impl std::future::Future<Output = Result<Cluster>> + Send;
  fn get_scheduled_upgrade(
    &self,
    cluster_id: &str,
  ) -> impl std::future::Future<Output = Result<(Option<UpgradePolicy>, Option<UpgradePolicyState>)>> + Send;
  fn get_control_plane_scheduled_upgrade(
    &self,
    cluster_id: &str,
  ) -> impl std::future::Future<Output = Result<Option<ControlPlaneUpgradePolicy>>> + Send;
  fn get_machine_pools(&self, cluster_id: &str) -> impl std::future::Future<Output = Result<Vec<MachinePool>>> + Send;
  fn get_node_pools(&self, cluster_id: &str) -> impl std::future::Future<Output = Result<Vec<NodePool>>> + Send;
  fn get_limited_support_reasons(
    &self,
    cluster_id: &str,
  ) -> impl std::future::Future<Output = Result<Vec<LimitedSupportReason>>> + Send;
  /// API URL the client is connected to
  fn connection_url(&self) -> &str;
}

/// Real client implementation talking to the clusters management API over HTTP
pub struct RealOcmClients {
  connection: Connection,
}

impl RealOcmClients {
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self {
      connection: Connection::new(config)?,
    })
  }
}

impl OcmClients for RealOcmClients {
  async fn get_cluster(&self, key: &str) -> Result<Cluster> {
    resources::get_cluster(&self.connection, key).await
  }

  async fn get_scheduled_upgrade(&self, cluster_id: &str) -> Result<(Option<UpgradePolicy>, Option<UpgradePolicyState>)> {
    resources::get_scheduled_upgrade(&self.connection, cluster_id).await
  }

  async fn get_control_plane_scheduled_upgrade(&self, cluster_id: &str) -> Result<Option<ControlPlaneUpgradePolicy>> {
    resources::get_control_plane_scheduled_upgrade(&self.connection, cluster_id).await
  }

  async fn get_machine_pools(&self, cluster_id: &str) -> Result<Vec<MachinePool>> {
    resources::get_machine_pools(&self.connection, cluster_id).await
  }

  async fn get_node_pools(&self, cluster_id: &str) -> Result<Vec<NodePool>> {
    resources::get_node_pools(&self.connection, cluster_id).await
  }

  async fn get_limited_support_reasons(&self, cluster_id: &str) -> Result<Vec<LimitedSupportReason>> {
    resources::get_limited_support_reasons(&self.connection, cluster_id).await
  }

  fn connection_url(&self) -> &str {
    self.connection.url()
  }
}
