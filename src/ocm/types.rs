use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cluster property holding the ARN of the AWS principal that created the cluster
pub const CREATOR_ARN_PROPERTY: &str = "rosa_creator_arn";

/// Default network type; only other network types are shown in the report
pub const DEFAULT_NETWORK_TYPE: &str = "OpenShiftSDN";

/// Lifecycle state of a cluster as reported by the clusters management API
///
/// States this crate does not know about are kept verbatim in `Other`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClusterState {
  Waiting,
  Pending,
  Installing,
  Ready,
  Error,
  Uninstalling,
  Hibernating,
  PoweringDown,
  Resuming,
  Validating,
  Other(String),
}

impl ClusterState {
  pub fn as_str(&self) -> &str {
    match self {
      ClusterState::Waiting => "waiting",
      ClusterState::Pending => "pending",
      ClusterState::Installing => "installing",
      ClusterState::Ready => "ready",
      ClusterState::Error => "error",
      ClusterState::Uninstalling => "uninstalling",
      ClusterState::Hibernating => "hibernating",
      ClusterState::PoweringDown => "powering_down",
      ClusterState::Resuming => "resuming",
      ClusterState::Validating => "validating",
      ClusterState::Other(state) => state,
    }
  }
}

impl From<String> for ClusterState {
  fn from(state: String) -> Self {
    match state.as_str() {
      "waiting" => ClusterState::Waiting,
      "pending" => ClusterState::Pending,
      "installing" => ClusterState::Installing,
      "ready" => ClusterState::Ready,
      "error" => ClusterState::Error,
      "uninstalling" => ClusterState::Uninstalling,
      "hibernating" => ClusterState::Hibernating,
      "powering_down" => ClusterState::PoweringDown,
      "resuming" => ClusterState::Resuming,
      "validating" => ClusterState::Validating,
      _ => ClusterState::Other(state),
    }
  }
}

impl From<ClusterState> for String {
  fn from(state: ClusterState) -> Self {
    match state {
      ClusterState::Other(state) => state,
      known => known.as_str().to_string(),
    }
  }
}

impl std::fmt::Display for ClusterState {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// How the cluster API endpoint is exposed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListeningMethod {
  #[default]
  External,
  Internal,
}

/// Snapshot of a cluster
///
/// Only the fields used when describing a cluster are modelled. Every other
/// field, at the top level and in the nested objects, is retained in an
/// `other` map so that structured output still mirrors what the API returned
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cluster {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub external_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub state: Option<ClusterState>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hypershift: Option<Hypershift>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub multi_az: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub network: Option<Network>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub nodes: Option<ClusterNodes>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub proxy: Option<Proxy>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub additional_trust_bundle: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub aws: Option<Aws>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub creation_timestamp: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub properties: Option<BTreeMap<String, String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<ClusterStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dns: Option<Dns>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub api: Option<ClusterApi>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub console: Option<ClusterConsole>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub region: Option<CloudRegion>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub openshift_version: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub version: Option<Version>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub infra_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub disable_user_workload_monitoring: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fips: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subscription: Option<ObjectReference>,

  /// Fields returned by the API that are not modelled above
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

impl Cluster {
  /// Returns true when the control plane is hosted on the service (HyperShift)
  pub fn hypershift_enabled(&self) -> bool {
    self.hypershift.as_ref().and_then(|h| h.enabled).unwrap_or_default()
  }

  /// The creator ARN recorded in the cluster properties, if any
  pub fn creator_arn(&self) -> Option<&str> {
    self
      .properties
      .as_ref()
      .and_then(|props| props.get(CREATOR_ARN_PROPERTY))
      .map(String::as_str)
  }

  pub fn sts(&self) -> Option<&Sts> {
    self.aws.as_ref().and_then(|aws| aws.sts.as_ref())
  }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Hypershift {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub enabled: Option<bool>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Network {
  #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
  pub network_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub service_cidr: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub machine_cidr: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pod_cidr: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub host_prefix: Option<i32>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

/// Cluster level node counts
///
/// `compute` and `autoscale_compute` describe the default worker pool of a
/// classic cluster; additional pools are returned by the machine pools API
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClusterNodes {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub master: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub infra: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub compute: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub autoscale_compute: Option<MachinePoolAutoscaling>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub compute_machine_type: Option<ObjectReference>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub availability_zones: Option<Vec<String>>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Proxy {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub http_proxy: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub https_proxy: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub no_proxy: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Aws {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sts: Option<Sts>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub billing_account_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subnet_ids: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub private_link: Option<bool>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

/// AWS Security Token Service configuration of the cluster
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sts {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub enabled: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub role_arn: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub external_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub support_role_arn: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instance_iam_roles: Option<InstanceIamRoles>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub operator_iam_roles: Option<Vec<OperatorIamRole>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub managed_policies: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub oidc_endpoint_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub oidc_config: Option<OidcConfig>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InstanceIamRoles {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub master_role_arn: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub worker_role_arn: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperatorIamRole {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub namespace: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub role_arn: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OidcConfig {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub issuer_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub managed: Option<bool>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClusterStatus {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub state: Option<ClusterState>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dns_ready: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub provision_error_code: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub provision_error_message: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dns {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub base_domain: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClusterApi {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub listening: Option<ListeningMethod>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClusterConsole {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CloudRegion {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Version {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub raw_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub channel_group: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

/// Link to another API object (subscription, machine type, ...)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ObjectReference {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub href: Option<String>,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

/// Autoscaling bounds of a classic machine pool
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MachinePoolAutoscaling {
  #[serde(default)]
  pub min_replicas: i32,
  #[serde(default)]
  pub max_replicas: i32,
  #[serde(flatten)]
  pub other: Map<String, Value>,
}

/// Worker pool of a classic cluster
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MachinePool {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub replicas: Option<i32>,
  #[serde(default)]
  pub autoscaling: Option<MachinePoolAutoscaling>,
  #[serde(default)]
  pub instance_type: Option<String>,
  #[serde(default)]
  pub availability_zones: Option<Vec<String>>,
}

/// Autoscaling bounds of a hosted node pool
///
/// Note the singular `min_replica`/`max_replica` used by the node pools API
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodePoolAutoscaling {
  #[serde(default)]
  pub min_replica: i32,
  #[serde(default)]
  pub max_replica: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodePoolStatus {
  #[serde(default)]
  pub current_replicas: Option<i32>,
  #[serde(default)]
  pub message: Option<String>,
}

/// Worker pool of a hosted control plane cluster
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodePool {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub replicas: Option<i32>,
  #[serde(default)]
  pub autoscaling: Option<NodePoolAutoscaling>,
  #[serde(default)]
  pub availability_zone: Option<String>,
  #[serde(default)]
  pub subnet: Option<String>,
  #[serde(default)]
  pub status: Option<NodePoolStatus>,
}

/// Upgrade policy of a classic cluster; the state is served separately
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpgradePolicy {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub version: Option<String>,
  #[serde(default)]
  pub next_run: Option<DateTime<Utc>>,
  #[serde(default)]
  pub upgrade_type: Option<String>,
  #[serde(default)]
  pub schedule_type: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpgradePolicyState {
  #[serde(default)]
  pub value: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}

/// Upgrade policy of a hosted control plane, carrying its own state
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ControlPlaneUpgradePolicy {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub version: Option<String>,
  #[serde(default)]
  pub next_run: Option<DateTime<Utc>>,
  #[serde(default)]
  pub upgrade_type: Option<String>,
  #[serde(default)]
  pub schedule_type: Option<String>,
  #[serde(default)]
  pub state: Option<UpgradePolicyState>,
}

/// Reason a cluster is in limited support
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LimitedSupportReason {
  #[serde(default)]
  pub id: String,
  #[serde(default)]
  pub summary: String,
  #[serde(default)]
  pub details: String,
  #[serde(default)]
  pub detection_type: Option<String>,
}
