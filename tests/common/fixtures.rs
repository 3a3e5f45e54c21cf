use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use rosa_describe::ocm::types::{
  Aws, CloudRegion, Cluster, ClusterApi, ClusterConsole, ClusterNodes, ClusterState, ClusterStatus,
  ControlPlaneUpgradePolicy, CREATOR_ARN_PROPERTY, Dns, Hypershift, InstanceIamRoles, LimitedSupportReason,
  ListeningMethod, MachinePool, MachinePoolAutoscaling, Network, NodePool, NodePoolAutoscaling, NodePoolStatus,
  ObjectReference, OidcConfig, OperatorIamRole, Proxy, Sts, UpgradePolicy, UpgradePolicyState, Version,
};

use super::mock_ocm::MockOcmClients;

pub const ACCOUNT_ID: &str = "123456789012";

pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
  Utc.with_ymd_and_hms(year, month, day, hour, min, 0).unwrap()
}

fn properties() -> BTreeMap<String, String> {
  BTreeMap::from([(
    CREATOR_ARN_PROPERTY.to_string(),
    format!("arn:aws:iam::{ACCOUNT_ID}:user/admin"),
  )])
}

fn role(name: &str) -> String {
  format!("arn:aws:iam::{ACCOUNT_ID}:role/{name}")
}

fn operator_role(namespace: &str, name: &str) -> OperatorIamRole {
  OperatorIamRole {
    name: Some(name.to_string()),
    namespace: Some(namespace.to_string()),
    role_arn: Some(role(&format!("mycluster-{namespace}-{name}"))),
    ..Default::default()
  }
}

/// Ready classic STS cluster in production with a single additional machine pool
pub fn classic_cluster() -> Cluster {
  Cluster {
    id: Some("24vg6o4ar6mhaeb5en9hk5rml4m4ffkq".to_string()),
    name: Some("mycluster".to_string()),
    external_id: Some("5b1c2a3e-1111-2222-3333-444455556666".to_string()),
    state: Some(ClusterState::Ready),
    multi_az: Some(false),
    network: Some(Network {
      network_type: Some("OpenShiftSDN".to_string()),
      service_cidr: Some("172.30.0.0/16".to_string()),
      machine_cidr: Some("10.0.0.0/16".to_string()),
      pod_cidr: Some("10.128.0.0/14".to_string()),
      host_prefix: Some(23),
      ..Default::default()
    }),
    nodes: Some(ClusterNodes {
      master: Some(3),
      infra: Some(2),
      compute: Some(2),
      ..Default::default()
    }),
    aws: Some(Aws {
      sts: Some(Sts {
        enabled: Some(true),
        role_arn: Some(role("ManagedOpenShift-Installer-Role")),
        support_role_arn: Some(role("ManagedOpenShift-Support-Role")),
        instance_iam_roles: Some(InstanceIamRoles {
          master_role_arn: Some(role("ManagedOpenShift-ControlPlane-Role")),
          worker_role_arn: Some(role("ManagedOpenShift-Worker-Role")),
          ..Default::default()
        }),
        operator_iam_roles: Some(vec![
          operator_role("openshift-ingress-operator", "cloud-credentials"),
          operator_role("openshift-image-registry", "installer-cloud-credentials"),
        ]),
        managed_policies: Some(false),
        oidc_endpoint_url: Some("https://oidc.op1.openshiftapps.com/24vg6o4ar6mh".to_string()),
        oidc_config: Some(OidcConfig {
          managed: Some(true),
          ..Default::default()
        }),
        ..Default::default()
      }),
      ..Default::default()
    }),
    creation_timestamp: Some(timestamp(2024, 1, 15, 10, 20)),
    properties: Some(properties()),
    status: Some(ClusterStatus {
      state: Some(ClusterState::Ready),
      dns_ready: Some(true),
      ..Default::default()
    }),
    dns: Some(Dns {
      base_domain: Some("abcd.p1.openshiftapps.com".to_string()),
      ..Default::default()
    }),
    api: Some(ClusterApi {
      url: Some("https://api.mycluster.abcd.p1.openshiftapps.com:6443".to_string()),
      listening: Some(ListeningMethod::External),
      ..Default::default()
    }),
    console: Some(ClusterConsole {
      url: Some("https://console-openshift-console.apps.mycluster.abcd.p1.openshiftapps.com".to_string()),
      ..Default::default()
    }),
    region: Some(CloudRegion {
      id: Some("us-east-1".to_string()),
      ..Default::default()
    }),
    openshift_version: Some("4.14.8".to_string()),
    version: Some(Version {
      id: Some("openshift-v4.14.8".to_string()),
      raw_id: Some("4.14.8".to_string()),
      channel_group: Some("stable".to_string()),
      ..Default::default()
    }),
    infra_id: Some("mycluster-x7k2p".to_string()),
    subscription: Some(ObjectReference {
      kind: Some("SubscriptionLink".to_string()),
      id: Some("2aBcDeFgHiJkLmNoPqRsTuVwXyZ".to_string()),
      ..Default::default()
    }),
    ..Default::default()
  }
}

/// Classic cluster with one additional fixed machine pool and a complete scheduled upgrade
pub fn classic_ocm() -> MockOcmClients {
  MockOcmClients {
    cluster: classic_cluster(),
    machine_pools: vec![MachinePool {
      id: "workers-2".to_string(),
      replicas: Some(3),
      instance_type: Some("m5.xlarge".to_string()),
      ..Default::default()
    }],
    upgrade_policy: Some(UpgradePolicy {
      id: "policy-1".to_string(),
      version: Some("4.14.9".to_string()),
      next_run: Some(timestamp(2024, 3, 5, 14, 30)),
      upgrade_type: Some("OSD".to_string()),
      schedule_type: Some("manual".to_string()),
    }),
    upgrade_policy_state: Some(UpgradePolicyState {
      value: Some("scheduled".to_string()),
      description: None,
    }),
    ..Default::default()
  }
}

/// Hosted control plane cluster that failed to install, in the stage environment
pub fn hosted_cluster() -> Cluster {
  let mut cluster = classic_cluster();

  cluster.id = Some("2a3b4c5d6e7f8g9h0i1j2k3l4m5n6o7p".to_string());
  cluster.name = Some("myhcp".to_string());
  cluster.state = Some(ClusterState::Error);
  cluster.hypershift = Some(Hypershift {
    enabled: Some(true),
    ..Default::default()
  });
  cluster.multi_az = Some(true);
  cluster.nodes = None;
  cluster.network = Some(Network {
    network_type: Some("OVNKubernetes".to_string()),
    service_cidr: Some("172.30.0.0/16".to_string()),
    machine_cidr: Some("10.0.0.0/16".to_string()),
    pod_cidr: Some("10.128.0.0/14".to_string()),
    host_prefix: Some(23),
    ..Default::default()
  });
  cluster.infra_id = None;
  cluster.proxy = Some(Proxy {
    http_proxy: Some("http://proxy.example.com:3128".to_string()),
    https_proxy: None,
    no_proxy: Some("example.com".to_string()),
    ..Default::default()
  });
  cluster.additional_trust_bundle = Some("-----BEGIN CERTIFICATE-----".to_string());
  cluster.aws = Some(Aws {
    billing_account_id: Some("210987654321".to_string()),
    sts: Some(Sts {
      enabled: Some(true),
      role_arn: Some(role("ManagedOpenShift-HCP-ROSA-Installer-Role")),
      external_id: Some("ext-123".to_string()),
      support_role_arn: Some(role("ManagedOpenShift-HCP-ROSA-Support-Role")),
      operator_iam_roles: Some(vec![operator_role("openshift-ingress-operator", "cloud-credentials")]),
      managed_policies: Some(true),
      oidc_endpoint_url: Some("https://oidc.op1.openshiftapps.com/2a3b4c5d".to_string()),
      ..Default::default()
    }),
    ..Default::default()
  });
  cluster.status = Some(ClusterStatus {
    state: Some(ClusterState::Error),
    dns_ready: Some(true),
    provision_error_code: Some("OCM3055".to_string()),
    provision_error_message: Some("Cluster install failed".to_string()),
    ..Default::default()
  });
  cluster.dns = Some(Dns {
    base_domain: Some("efgh.p3.openshiftapps.com".to_string()),
    ..Default::default()
  });
  cluster.api = Some(ClusterApi {
    url: Some("https://api.myhcp.efgh.p3.openshiftapps.com:443".to_string()),
    listening: Some(ListeningMethod::Internal),
    ..Default::default()
  });
  cluster.console = Some(ClusterConsole {
    url: Some("https://console-openshift-console.apps.rosa.myhcp.efgh.p3.openshiftapps.com".to_string()),
    ..Default::default()
  });
  cluster.openshift_version = Some("4.15.1".to_string());
  cluster.version = Some(Version {
    channel_group: Some("candidate".to_string()),
    ..Default::default()
  });
  cluster.disable_user_workload_monitoring = Some(true);
  cluster.fips = Some(true);
  cluster
}

pub fn node_pool(id: &str, zone: &str, replicas: Option<i32>, autoscaling: Option<(i32, i32)>, current: i32) -> NodePool {
  NodePool {
    id: id.to_string(),
    replicas,
    autoscaling: autoscaling.map(|(min_replica, max_replica)| NodePoolAutoscaling {
      min_replica,
      max_replica,
    }),
    availability_zone: Some(zone.to_string()),
    subnet: None,
    status: Some(NodePoolStatus {
      current_replicas: Some(current),
      message: None,
    }),
  }
}

pub fn limited_support_reason(id: &str, summary: &str, details: &str) -> LimitedSupportReason {
  LimitedSupportReason {
    id: id.to_string(),
    summary: summary.to_string(),
    details: details.to_string(),
    detection_type: Some("manual".to_string()),
  }
}

/// Hosted cluster spread over two zones, in limited support, with a pending control plane upgrade
pub fn hosted_ocm() -> MockOcmClients {
  MockOcmClients {
    url: "https://api.stage.openshift.com".to_string(),
    cluster: hosted_cluster(),
    node_pools: vec![
      node_pool("workers-0", "us-east-1a", None, Some((1, 4)), 2),
      node_pool("workers-1", "us-east-1b", Some(2), None, 2),
    ],
    control_plane_upgrade_policy: Some(ControlPlaneUpgradePolicy {
      id: "cp-policy-1".to_string(),
      version: Some("4.15.2".to_string()),
      next_run: Some(timestamp(2024, 4, 1, 0, 0)),
      upgrade_type: Some("ControlPlane".to_string()),
      schedule_type: Some("manual".to_string()),
      state: Some(UpgradePolicyState {
        value: Some("pending".to_string()),
        description: None,
      }),
    }),
    limited_support_reasons: vec![
      limited_support_reason("lsr-1", "Cluster is out of date", "Upgrade to a supported version"),
      limited_support_reason("lsr-2", "Missing IAM role", "Restore the support role"),
    ],
    ..Default::default()
  }
}

/// Classic cluster whose default pool autoscales, in the given state
pub fn classic_autoscaled(state: ClusterState, status: ClusterStatus) -> MockOcmClients {
  let mut cluster = classic_cluster();
  cluster.state = Some(state);
  cluster.status = Some(status);
  cluster.nodes = Some(ClusterNodes {
    master: Some(3),
    infra: Some(2),
    autoscale_compute: Some(MachinePoolAutoscaling {
      min_replicas: 2,
      max_replicas: 6,
      ..Default::default()
    }),
    ..Default::default()
  });

  MockOcmClients {
    cluster,
    ..Default::default()
  }
}
