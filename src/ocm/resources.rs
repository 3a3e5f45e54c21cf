use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
  config::Config,
  ocm::types::{
    Cluster, ControlPlaneUpgradePolicy, LimitedSupportReason, MachinePool, NodePool, UpgradePolicy,
    UpgradePolicyState,
  },
};

const CLUSTERS_PATH: &str = "/api/clusters_mgmt/v1/clusters";

/// Number of items requested per page when listing collections
const PAGE_SIZE: usize = 100;

/// Upgrade type of the policies that upgrade a classic cluster
const CLASSIC_UPGRADE_TYPE: &str = "OSD";

/// Upgrade type of the policies that upgrade a hosted control plane
const CONTROL_PLANE_UPGRADE_TYPE: &str = "ControlPlane";

/// Envelope returned by every list endpoint of the API
#[derive(Debug, Deserialize)]
struct Page<T> {
  #[serde(default)]
  total: Option<usize>,
  #[serde(default = "Vec::new")]
  items: Vec<T>,
}

/// Error body returned by the API on failed requests
#[derive(Debug, Deserialize)]
struct ApiError {
  reason: String,
}

/// Authenticated connection to the clusters management API
pub struct Connection {
  client: reqwest::Client,
  url: String,
  token: String,
}

impl Connection {
  pub fn new(config: &Config) -> Result<Self> {
    let token = match config.access_token.as_deref() {
      Some(token) if !token.is_empty() => token.to_owned(),
      _ => bail!("Not logged in, set OCM_TOKEN or add an access token to the OCM configuration file"),
    };

    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self {
      client,
      url: config.url.clone(),
      token,
    })
  }

  /// The API base URL this connection talks to, as configured
  pub fn url(&self) -> &str {
    &self.url
  }

  async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
    let url = format!("{}{path}", self.url.trim_end_matches('/'));
    debug!("GET {url} {query:?}");

    let response = self
      .client
      .get(&url)
      .bearer_auth(&self.token)
      .header("Accept", "application/json")
      .query(query)
      .send()
      .await
      .with_context(|| format!("Failed to send request to {url}"))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      let reason = serde_json::from_str::<ApiError>(&body)
        .map(|err| err.reason)
        .unwrap_or(body);
      bail!("Request to {path} failed with status {status}: {reason}");
    }

    response
      .json::<T>()
      .await
      .with_context(|| format!("Failed to decode response from {path}"))
  }

  /// Walks all pages of a collection
  async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut page = 1;

    loop {
      let query = [("page", page.to_string()), ("size", PAGE_SIZE.to_string())];
      let response: Page<T> = self.get(path, &query).await?;
      let received = response.items.len();
      items.extend(response.items);

      if received < PAGE_SIZE || response.total.is_some_and(|total| items.len() >= total) {
        break;
      }
      page += 1;
    }

    Ok(items)
  }
}

/// Returns true if the key can be used safely inside a search expression
pub fn is_valid_cluster_key(key: &str) -> bool {
  !key.is_empty()
    && key
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Find the single cluster whose ID, name or external ID matches the key
pub async fn get_cluster(conn: &Connection, key: &str) -> Result<Cluster> {
  if !is_valid_cluster_key(key) {
    bail!(
      "Cluster name, identifier or external identifier '{key}' isn't valid: it must contain only letters, digits, dashes and underscores"
    );
  }

  let search = format!("id = '{key}' or name = '{key}' or external_id = '{key}'");
  let query = [("search", search), ("size", "1".to_string())];
  let response: Page<Cluster> = conn.get(CLUSTERS_PATH, &query).await?;

  match response.total.unwrap_or(response.items.len()) {
    0 => bail!("There is no cluster with identifier or name '{key}'"),
    1 => response
      .items
      .into_iter()
      .next()
      .with_context(|| format!("Cluster '{key}' missing from search response")),
    n => bail!("There are {n} clusters with identifier or name '{key}'"),
  }
}

/// Get the next scheduled upgrade of a classic cluster along with its state
pub async fn get_scheduled_upgrade(
  conn: &Connection,
  cluster_id: &str,
) -> Result<(Option<UpgradePolicy>, Option<UpgradePolicyState>)> {
  let path = format!("{CLUSTERS_PATH}/{cluster_id}/upgrade_policies");
  let policies: Vec<UpgradePolicy> = conn.list(&path).await?;

  let policy = policies
    .into_iter()
    .find(|policy| policy.upgrade_type.as_deref() == Some(CLASSIC_UPGRADE_TYPE));

  match policy {
    Some(policy) => {
      let state_path = format!("{path}/{}/state", policy.id);
      let state: UpgradePolicyState = conn.get(&state_path, &[]).await?;
      Ok((Some(policy), Some(state)))
    }
    None => Ok((None, None)),
  }
}

/// Get the next scheduled upgrade of a hosted control plane
pub async fn get_control_plane_scheduled_upgrade(
  conn: &Connection,
  cluster_id: &str,
) -> Result<Option<ControlPlaneUpgradePolicy>> {
  let path = format!("{CLUSTERS_PATH}/{cluster_id}/control_plane/upgrade_policies");
  let policies: Vec<ControlPlaneUpgradePolicy> = conn.list(&path).await?;

  Ok(
    policies
      .into_iter()
      .find(|policy| policy.upgrade_type.as_deref() == Some(CONTROL_PLANE_UPGRADE_TYPE)),
  )
}

pub async fn get_machine_pools(conn: &Connection, cluster_id: &str) -> Result<Vec<MachinePool>> {
  conn.list(&format!("{CLUSTERS_PATH}/{cluster_id}/machine_pools")).await
}

pub async fn get_node_pools(conn: &Connection, cluster_id: &str) -> Result<Vec<NodePool>> {
  conn.list(&format!("{CLUSTERS_PATH}/{cluster_id}/node_pools")).await
}

pub async fn get_limited_support_reasons(conn: &Connection, cluster_id: &str) -> Result<Vec<LimitedSupportReason>> {
  conn
    .list(&format!("{CLUSTERS_PATH}/{cluster_id}/limited_support_reasons"))
    .await
}
