use std::{collections::HashSet, fmt, iter::Sum, ops::Add};

use crate::ocm::types::{Cluster, MachinePool, NodePool};

/// Where the control plane of a cluster runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
  /// Control plane runs on dedicated nodes in the customer account
  Classic,
  /// Control plane runs on shared service infrastructure (HyperShift)
  Hosted,
}

impl Shape {
  pub fn of(cluster: &Cluster) -> Self {
    if cluster.hypershift_enabled() {
      Shape::Hosted
    } else {
      Shape::Classic
    }
  }

  /// Label shown for the control plane
  pub fn control_plane(&self) -> &'static str {
    match self {
      Shape::Classic => "Customer Hosted",
      Shape::Hosted => "ROSA Service Hosted",
    }
  }
}

/// Replica bounds contributed by a single pool, or summed across pools
///
/// A fixed replica count is represented as `min == max`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeRange {
  pub min: i32,
  pub max: i32,
}

impl NodeRange {
  pub fn new(min: i32, max: i32) -> Self {
    Self { min, max }
  }

  pub fn fixed(replicas: i32) -> Self {
    Self::new(replicas, replicas)
  }

  pub fn is_autoscaled(&self) -> bool {
    self.min != self.max
  }
}

impl Add for NodeRange {
  type Output = NodeRange;

  fn add(self, rhs: NodeRange) -> NodeRange {
    NodeRange::new(self.min.saturating_add(rhs.min), self.max.saturating_add(rhs.max))
  }
}

impl Sum for NodeRange {
  fn sum<I: Iterator<Item = NodeRange>>(iter: I) -> NodeRange {
    iter.fold(NodeRange::default(), Add::add)
  }
}

impl fmt::Display for NodeRange {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.is_autoscaled() {
      write!(f, "{}-{}", self.min, self.max)
    } else {
      write!(f, "{}", self.max)
    }
  }
}

/// Capabilities shared by classic machine pools and hosted node pools
pub trait PoolCapacity {
  /// Autoscaling bounds if set, otherwise the fixed replica count as both bounds
  fn range(&self) -> NodeRange;

  /// Availability zone the pool is pinned to, if the API reports one
  fn availability_zone(&self) -> Option<&str>;

  /// Replicas currently running; zero until the pool reports a status
  fn current_replicas(&self) -> i32;
}

impl PoolCapacity for MachinePool {
  fn range(&self) -> NodeRange {
    match &self.autoscaling {
      Some(autoscaling) => NodeRange::new(autoscaling.min_replicas, autoscaling.max_replicas),
      None => NodeRange::fixed(self.replicas.unwrap_or_default()),
    }
  }

  fn availability_zone(&self) -> Option<&str> {
    None
  }

  fn current_replicas(&self) -> i32 {
    0
  }
}

impl PoolCapacity for NodePool {
  fn range(&self) -> NodeRange {
    match &self.autoscaling {
      Some(autoscaling) => NodeRange::new(autoscaling.min_replica, autoscaling.max_replica),
      None => NodeRange::fixed(self.replicas.unwrap_or_default()),
    }
  }

  fn availability_zone(&self) -> Option<&str> {
    self.availability_zone.as_deref()
  }

  fn current_replicas(&self) -> i32 {
    self
      .status
      .as_ref()
      .and_then(|status| status.current_replicas)
      .unwrap_or_default()
  }
}

/// Sum the replica bounds of all pools
pub fn total_range<P: PoolCapacity>(pools: &[P]) -> NodeRange {
  pools.iter().map(PoolCapacity::range).sum()
}

/// Number of distinct availability zones the pools are spread across
///
/// Pools without a reported zone all count as one shared, empty zone
pub fn distinct_zones<P: PoolCapacity>(pools: &[P]) -> usize {
  pools
    .iter()
    .map(|pool| pool.availability_zone().unwrap_or_default())
    .collect::<HashSet<_>>()
    .len()
}

/// Spread of a data plane across availability zones
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneSpread {
  SingleAZ,
  MultiAZ,
}

impl fmt::Display for ZoneSpread {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      ZoneSpread::SingleAZ => write!(f, "SingleAZ"),
      ZoneSpread::MultiAZ => write!(f, "MultiAZ"),
    }
  }
}

/// Availability of the cluster as shown in the report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
  /// Multi-AZ flag stored on the cluster
  Classic { multi_az: bool },
  /// The hosted control plane is always spread across zones by the service;
  /// only the data plane spread depends on the node pools
  Hosted { control_plane: ZoneSpread, data_plane: ZoneSpread },
}

/// Node counts as shown in the report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeCounts {
  Classic {
    control_plane: i32,
    infra: i32,
    compute: NodeRange,
  },
  Hosted {
    compute: NodeRange,
    current: i32,
  },
}

/// Worker pools of a cluster, by control plane shape
///
/// Only one kind of pool is ever present for a given cluster
#[derive(Clone, Debug)]
pub enum Topology {
  Classic { machine_pools: Vec<MachinePool> },
  Hosted { node_pools: Vec<NodePool> },
}

impl Topology {
  pub fn shape(&self) -> Shape {
    match self {
      Topology::Classic { .. } => Shape::Classic,
      Topology::Hosted { .. } => Shape::Hosted,
    }
  }

  pub fn availability(&self, cluster: &Cluster) -> Availability {
    match self {
      Topology::Classic { .. } => Availability::Classic {
        multi_az: cluster.multi_az.unwrap_or_default(),
      },
      Topology::Hosted { node_pools } => {
        let data_plane = if distinct_zones(node_pools) > 1 {
          ZoneSpread::MultiAZ
        } else {
          ZoneSpread::SingleAZ
        };

        Availability::Hosted {
          control_plane: ZoneSpread::MultiAZ,
          data_plane,
        }
      }
    }
  }

  pub fn node_counts(&self, cluster: &Cluster) -> NodeCounts {
    match self {
      Topology::Classic { machine_pools } => {
        let nodes = cluster.nodes.clone().unwrap_or_default();

        // The default worker pool is described on the cluster itself
        let default_pool = match &nodes.autoscale_compute {
          Some(autoscale) => NodeRange::new(autoscale.min_replicas, autoscale.max_replicas),
          None => NodeRange::fixed(nodes.compute.unwrap_or_default()),
        };

        NodeCounts::Classic {
          control_plane: nodes.master.unwrap_or_default(),
          infra: nodes.infra.unwrap_or_default(),
          compute: total_range(machine_pools) + default_pool,
        }
      }
      Topology::Hosted { node_pools } => NodeCounts::Hosted {
        compute: total_range(node_pools),
        current: node_pools
          .iter()
          .map(PoolCapacity::current_replicas)
          .fold(0, i32::saturating_add),
      },
    }
  }
}
