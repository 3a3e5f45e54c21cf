use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ocm::types::{
  Cluster, ClusterState, ControlPlaneUpgradePolicy, ListeningMethod, Sts, UpgradePolicy, UpgradePolicyState,
};

/// Details page prefix for clusters managed through the stage environment
pub const STAGE_URL: &str = "https://qaprodauth.console.redhat.com/openshift/details/s/";
/// Details page prefix for clusters managed through the production environment
pub const PRODUCTION_URL: &str = "https://console.redhat.com/openshift/details/s/";
/// API URL of the stage environment
pub const STAGE_ENV: &str = "https://api.stage.openshift.com";
/// API URL of the production environment
pub const PRODUCTION_ENV: &str = "https://api.openshift.com";

/// Format used for the scheduled upgrade time
const UPGRADE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

/// Format used for the cluster creation time
const CREATED_TIME_FORMAT: &str = "%b %e %Y %H:%M:%S %Z";

/// Map the API URL to the prefix of the web console details page
///
/// Only the exact URLs of the known environments have a details page
pub fn details_link(api_url: &str) -> Option<&'static str> {
  match api_url {
    STAGE_ENV => Some(STAGE_URL),
    PRODUCTION_ENV => Some(PRODUCTION_URL),
    _ => None,
  }
}

pub fn format_upgrade_time(time: &DateTime<Utc>) -> String {
  time.format(UPGRADE_TIME_FORMAT).to_string()
}

pub fn format_created_time(time: &DateTime<Utc>) -> String {
  time.format(CREATED_TIME_FORMAT).to_string()
}

/// Short explanation of what the cluster is doing in its current state
///
/// A status description provided by the service always takes precedence
pub fn phase(cluster: &Cluster) -> Option<String> {
  let status = cluster.status.clone().unwrap_or_default();

  let mut phase = match cluster.state.as_ref() {
    Some(ClusterState::Waiting) => Some("(Waiting for user action)".to_string()),
    Some(ClusterState::Pending) => Some("(Preparing account)".to_string()),
    Some(ClusterState::Installing) => {
      let mut phase = None;
      if !status.dns_ready.unwrap_or_default() {
        phase = Some("(DNS setup in progress)".to_string());
      }
      if status.provision_error_message.as_deref().is_some_and(|msg| !msg.is_empty()) {
        let code = match status.provision_error_code.as_deref() {
          Some(code) if !code.is_empty() => format!("{code} - "),
          _ => String::new(),
        };
        phase = Some(format!("({code}Install is taking longer than expected)"));
      }
      phase
    }
    _ => None,
  };

  if let Some(description) = status.description.as_deref()
    && !description.is_empty()
  {
    phase = Some(format!("({description})"));
  }

  phase
}

/// Fully qualified DNS name of the cluster, once DNS is ready
pub fn dns_name(cluster: &Cluster) -> Option<String> {
  let ready = cluster
    .status
    .as_ref()
    .and_then(|status| status.dns_ready)
    .unwrap_or_default();
  if !ready {
    return None;
  }

  let base_domain = cluster
    .dns
    .as_ref()
    .and_then(|dns| dns.base_domain.as_deref())
    .unwrap_or_default();
  Some(format!("{}.{base_domain}", cluster.name.as_deref().unwrap_or_default()))
}

/// Returns true when the API endpoint is only reachable from the cluster network
pub fn is_private(cluster: &Cluster) -> bool {
  cluster.api.as_ref().and_then(|api| api.listening) == Some(ListeningMethod::Internal)
}

/// How the OIDC provider of an STS cluster is managed
pub fn oidc_management(sts: &Sts) -> &'static str {
  match &sts.oidc_config {
    None => "Classic",
    Some(config) if config.managed.unwrap_or_default() => "Managed",
    Some(_) => "Unmanaged",
  }
}

/// Next upgrade scheduled for the cluster, normalized across the classic and
/// hosted control plane policy shapes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduledUpgrade {
  pub version: Option<String>,
  pub state: Option<String>,
  pub next_run: Option<DateTime<Utc>>,
}

impl From<(UpgradePolicy, Option<UpgradePolicyState>)> for ScheduledUpgrade {
  fn from((policy, state): (UpgradePolicy, Option<UpgradePolicyState>)) -> Self {
    Self {
      version: policy.version,
      state: state.and_then(|s| s.value),
      next_run: policy.next_run,
    }
  }
}

impl From<ControlPlaneUpgradePolicy> for ScheduledUpgrade {
  fn from(policy: ControlPlaneUpgradePolicy) -> Self {
    Self {
      version: policy.version,
      state: policy.state.and_then(|s| s.value),
      next_run: policy.next_run,
    }
  }
}

impl ScheduledUpgrade {
  /// Summary of the upgrade, only when version, state and next run are all known
  ///
  /// Partial data yields no summary at all rather than an incomplete one
  pub fn summary(&self) -> Option<UpgradeSummary> {
    let version = self.version.as_deref().filter(|v| !v.is_empty())?;
    let state = self.state.as_deref().filter(|s| !s.is_empty())?;
    let next_run = self.next_run.as_ref()?;

    Some(UpgradeSummary {
      version: version.to_string(),
      state: state.to_string(),
      next_run: format_upgrade_time(next_run),
    })
  }
}

/// Scheduled upgrade as presented to users
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeSummary {
  pub version: String,
  pub state: String,
  pub next_run: String,
}

impl std::fmt::Display for UpgradeSummary {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{} {} on {}", self.state, self.version, self.next_run)
  }
}
