mod status;
mod topology;

pub use status::{
  PRODUCTION_ENV, PRODUCTION_URL, STAGE_ENV, STAGE_URL, ScheduledUpgrade, UpgradeSummary, details_link, dns_name,
  format_created_time, format_upgrade_time, is_private, oidc_management, phase,
};
pub use topology::{
  Availability, NodeCounts, NodeRange, PoolCapacity, Shape, Topology, ZoneSpread, distinct_zones, total_range,
};
