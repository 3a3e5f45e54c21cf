use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
  arn::Arn,
  clients::OcmClients,
  cluster::{
    Availability, NodeCounts, ScheduledUpgrade, Shape, Topology, UpgradeSummary, details_link, dns_name,
    format_created_time, is_private, oidc_management, phase,
  },
  ocm::types::{Cluster, ClusterState, DEFAULT_NETWORK_TYPE, LimitedSupportReason},
  output::{self, Format},
  report::Report,
};

/// Everything shown in the text description of a cluster
#[derive(Clone, Debug)]
pub struct Description {
  pub cluster: Cluster,
  pub topology: Topology,
  pub creator: Arn,
  pub upgrade: Option<UpgradeSummary>,
  pub limited_support: Vec<LimitedSupportReason>,
  /// Prefix of the web console details page, when the environment has one
  pub details_page: Option<&'static str>,
}

/// Fetch the cluster and its related resources and render them in the requested format
///
/// Nothing is rendered unless every fetch succeeds
pub async fn describe_cluster(client: &impl OcmClients, key: &str, format: &Format) -> Result<String> {
  let cluster = client.get_cluster(key).await?;
  let cluster_id = cluster.id.clone().unwrap_or_default();
  let shape = Shape::of(&cluster);
  debug!("Cluster {key} resolved to {cluster_id} ({shape:?})");

  let upgrade = get_scheduled_upgrade(client, &cluster_id, shape)
    .await
    .with_context(|| format!("Failed to get scheduled upgrades for cluster '{key}'"))?;
  let upgrade = upgrade.and_then(|u| u.summary());

  if format.is_structured() {
    let structured = to_structured(&cluster, upgrade.as_ref())?;
    return output::to_structured(&structured, format);
  }

  let creator = cluster
    .creator_arn()
    .unwrap_or_default()
    .parse::<Arn>()
    .with_context(|| format!("Failed to parse creator ARN for cluster '{key}'"))?;

  let topology = get_topology(client, &cluster_id, shape)
    .await
    .with_context(|| format!("Failed to get machine pools for cluster '{key}'"))?;

  let limited_support = client
    .get_limited_support_reasons(&cluster_id)
    .await
    .with_context(|| format!("Failed to get limited support reasons for cluster '{cluster_id}'"))?;
  info!("Cluster {key} has {} limited support reason(s)", limited_support.len());

  let description = Description {
    details_page: details_link(client.connection_url()),
    cluster,
    topology,
    creator,
    upgrade,
    limited_support,
  };

  Ok(description.to_text())
}

/// Fetch the worker pools matching the control plane shape
async fn get_topology(client: &impl OcmClients, cluster_id: &str, shape: Shape) -> Result<Topology> {
  let topology = match shape {
    Shape::Classic => Topology::Classic {
      machine_pools: client.get_machine_pools(cluster_id).await?,
    },
    Shape::Hosted => Topology::Hosted {
      node_pools: client.get_node_pools(cluster_id).await?,
    },
  };

  Ok(topology)
}

async fn get_scheduled_upgrade(
  client: &impl OcmClients,
  cluster_id: &str,
  shape: Shape,
) -> Result<Option<ScheduledUpgrade>> {
  match shape {
    Shape::Classic => {
      let (policy, state) = client.get_scheduled_upgrade(cluster_id).await?;
      Ok(policy.map(|policy| ScheduledUpgrade::from((policy, state))))
    }
    Shape::Hosted => {
      let policy = client.get_control_plane_scheduled_upgrade(cluster_id).await?;
      Ok(policy.map(ScheduledUpgrade::from))
    }
  }
}

/// Serialized form of the cluster with the scheduled upgrade attached
pub fn to_structured(cluster: &Cluster, upgrade: Option<&UpgradeSummary>) -> Result<Value> {
  let mut value = serde_json::to_value(cluster)?;

  if let (Some(upgrade), Some(map)) = (upgrade, value.as_object_mut()) {
    map.insert("scheduledUpgrade".to_string(), serde_json::to_value(upgrade)?);
  }

  Ok(value)
}

impl Description {
  /// Render the fixed column text report
  pub fn to_text(&self) -> String {
    let cluster = &self.cluster;
    let shape = self.topology.shape();
    let mut report = Report::new();

    let network = cluster.network.clone().unwrap_or_default();
    let network_type = network.network_type.as_deref().unwrap_or_default();
    let billing_account = cluster.aws.as_ref().and_then(|aws| aws.billing_account_id.as_deref());

    report
      .field("Name", cluster.name.as_deref().unwrap_or_default())
      .field("ID", cluster.id.as_deref().unwrap_or_default())
      .field("External ID", cluster.external_id.as_deref().unwrap_or_default())
      .field("Control Plane", shape.control_plane())
      .field("OpenShift Version", cluster.openshift_version.as_deref().unwrap_or_default())
      .field(
        "Channel Group",
        cluster
          .version
          .as_ref()
          .and_then(|v| v.channel_group.as_deref())
          .unwrap_or_default(),
      )
      .field("DNS", dns_name(cluster).unwrap_or_else(|| "Not ready".to_string()))
      .field("AWS Account", &self.creator.account_id);

    if shape == Shape::Hosted {
      report.field_opt("AWS Billing Account", billing_account);
    }

    report
      .field("API URL", cluster.api.as_ref().and_then(|a| a.url.as_deref()).unwrap_or_default())
      .field(
        "Console URL",
        cluster.console.as_ref().and_then(|c| c.url.as_deref()).unwrap_or_default(),
      )
      .field("Region", cluster.region.as_ref().and_then(|r| r.id.as_deref()).unwrap_or_default());

    self.availability_lines(&mut report);
    self.node_lines(&mut report);

    report
      .section("Network")
      .nested_opt("Type", Some(network_type).filter(|t| *t != DEFAULT_NETWORK_TYPE))
      .nested("Service CIDR", network.service_cidr.as_deref().unwrap_or_default())
      .nested("Machine CIDR", network.machine_cidr.as_deref().unwrap_or_default())
      .nested("Pod CIDR", network.pod_cidr.as_deref().unwrap_or_default())
      .nested("Host Prefix", format!("/{}", network.host_prefix.unwrap_or_default()))
      .field_opt("Infra ID", cluster.infra_id.as_deref());

    self.proxy_lines(&mut report);

    report.field_if(
      cluster.additional_trust_bundle.as_deref().is_some_and(|b| !b.is_empty()),
      "Additional trust bundle",
      "REDACTED",
    );

    self.sts_lines(&mut report);

    let state = cluster.state.as_ref().map(ToString::to_string).unwrap_or_default();
    let state = match phase(cluster) {
      Some(phase) if state.is_empty() => phase,
      Some(phase) => format!("{state} {phase}"),
      None => state,
    };
    let user_workload_monitoring_disabled = cluster.disable_user_workload_monitoring.unwrap_or_default();

    report
      .field("State", state)
      .field("Private", if is_private(cluster) { "Yes" } else { "No" })
      .field(
        "Created",
        cluster
          .creation_timestamp
          .as_ref()
          .map(format_created_time)
          .unwrap_or_default(),
      )
      .field_if(user_workload_monitoring_disabled, "User Workload Monitoring", "disabled")
      .field_if(cluster.fips.unwrap_or_default(), "FIPS mode", "enabled");

    if let Some(details_page) = self.details_page {
      let subscription_id = cluster
        .subscription
        .as_ref()
        .and_then(|s| s.id.as_deref())
        .unwrap_or_default();
      report.field("Details Page", format!("{details_page}{subscription_id}"));
    }

    if let Some(sts) = cluster.sts()
      && let Some(endpoint) = sts.oidc_endpoint_url.as_deref().filter(|url| !url.is_empty())
    {
      report.field(
        "OIDC Endpoint URL",
        format!("{endpoint} ({})", oidc_management(sts)),
      );
    }

    if let Some(upgrade) = &self.upgrade {
      report.field("Scheduled Upgrade", upgrade);
    }

    let status = cluster.status.clone().unwrap_or_default();
    if status.state == Some(ClusterState::Error) {
      report
        .field(
          "Provisioning Error Code",
          status.provision_error_code.as_deref().unwrap_or_default(),
        )
        .field(
          "Provisioning Error Message",
          status.provision_error_message.as_deref().unwrap_or_default(),
        );
    }

    if !self.limited_support.is_empty() {
      report.section("Limited Support");
    }
    for reason in &self.limited_support {
      report.nested("Summary", &reason.summary).nested("Details", &reason.details);
    }

    report.render()
  }

  fn availability_lines(&self, report: &mut Report) {
    match self.topology.availability(&self.cluster) {
      Availability::Classic { multi_az } => {
        report.field("Multi-AZ", multi_az);
      }
      Availability::Hosted {
        control_plane,
        data_plane,
      } => {
        report
          .section("Availability")
          .nested("Control Plane", control_plane)
          .nested("Data Plane", data_plane);
      }
    }
  }

  fn node_lines(&self, report: &mut Report) {
    report.section("Nodes");

    match self.topology.node_counts(&self.cluster) {
      NodeCounts::Classic {
        control_plane,
        infra,
        compute,
      } => {
        report.nested("Control plane", control_plane).nested("Infra", infra);
        if compute.is_autoscaled() {
          report.nested("Compute (Autoscaled)", compute);
        } else {
          report.nested("Compute", compute);
        }
      }
      NodeCounts::Hosted { compute, current } => {
        if compute.is_autoscaled() {
          report.nested("Compute (Autoscaled)", compute);
        } else {
          report.nested("Compute (desired)", compute);
        }
        report.nested("Compute (current)", current);
      }
    }
  }

  fn proxy_lines(&self, report: &mut Report) {
    let Some(proxy) = &self.cluster.proxy else {
      return;
    };

    let http_proxy = proxy.http_proxy.as_deref().filter(|p| !p.is_empty());
    let https_proxy = proxy.https_proxy.as_deref().filter(|p| !p.is_empty());
    if http_proxy.is_none() && https_proxy.is_none() {
      return;
    }

    report
      .section("Proxy")
      .nested_opt("HTTPProxy", http_proxy)
      .nested_opt("HTTPSProxy", https_proxy)
      .nested_opt("NoProxy", proxy.no_proxy.as_deref());
  }

  fn sts_lines(&self, report: &mut Report) {
    let Some(sts) = self.cluster.sts() else {
      return;
    };
    let Some(role_arn) = sts.role_arn.as_deref().filter(|arn| !arn.is_empty()) else {
      return;
    };

    report
      .field("STS Role ARN", role_arn)
      .field_opt("STS External ID", sts.external_id.as_deref())
      .field_opt("Support Role ARN", sts.support_role_arn.as_deref());

    let instance_roles = sts.instance_iam_roles.clone().unwrap_or_default();
    let master_role = instance_roles.master_role_arn.as_deref().filter(|arn| !arn.is_empty());
    let worker_role = instance_roles.worker_role_arn.as_deref().filter(|arn| !arn.is_empty());
    if master_role.is_some() || worker_role.is_some() {
      report
        .section("Instance IAM Roles")
        .nested_opt("Control plane", master_role)
        .nested_opt("Worker", worker_role);
    }

    let operator_roles = sts.operator_iam_roles.as_deref().unwrap_or_default();
    if !operator_roles.is_empty() {
      report.section("Operator IAM Roles");
      for role in operator_roles {
        report.item(role.role_arn.as_deref().unwrap_or_default());
      }
    }

    let managed = if sts.managed_policies.unwrap_or_default() { "Yes" } else { "No" };
    report.field("Managed Policies", managed);
  }
}
