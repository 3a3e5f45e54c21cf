pub mod arn;
pub mod clients;
pub mod cluster;
pub mod config;
pub mod describe;
pub mod ocm;
pub mod output;
pub mod report;

use std::time::Duration;

use anstyle::{AnsiColor, Effects};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, builder::Styles};
use clap_verbosity_flag::Verbosity;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use clients::{OcmClients, RealOcmClients};

const STYLES: Styles = Styles::styled()
  .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
  .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
  .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
  .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(author, about, version, styles = STYLES)]
#[command(propagate_version = true)]
pub struct Cli {
  #[command(subcommand)]
  pub commands: Commands,

  #[clap(flatten)]
  pub verbose: Verbosity,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  #[command(arg_required_else_help = true)]
  Describe(Describe),
}

/// Show details of a resource
#[derive(Args, Debug)]
pub struct Describe {
  #[command(subcommand)]
  pub command: DescribeCommands,
}

#[derive(Debug, Subcommand)]
pub enum DescribeCommands {
  Cluster(DescribeCluster),
}

/// Show details of a cluster
#[derive(Args, Debug, Serialize, Deserialize)]
pub struct DescribeCluster {
  /// Name, identifier or external identifier of the cluster
  #[arg(value_name = "CLUSTER")]
  pub key: Option<String>,

  /// Name, identifier or external identifier of the cluster
  #[arg(short, long, conflicts_with = "key")]
  pub cluster: Option<String>,

  #[arg(short, long, value_enum, default_value_t)]
  pub format: output::Format,

  /// Write to file instead of stdout
  #[arg(short, long)]
  pub output: Option<String>,

  /// Path to the OCM configuration file
  #[arg(long)]
  pub config: Option<String>,

  /// URL of the clusters management API, overrides the configuration file and environment
  #[arg(long)]
  pub url: Option<String>,
}

impl DescribeCluster {
  /// Cluster key from the positional argument or `--cluster`
  pub fn cluster_key(&self) -> Result<&str> {
    match self.key.as_deref().or(self.cluster.as_deref()) {
      Some(key) if !key.is_empty() => Ok(key),
      _ => bail!("Cluster name, identifier or external identifier is required"),
    }
  }
}

/// Describe a single cluster and write the result to the requested destination
pub async fn describe(args: &DescribeCluster) -> Result<()> {
  let key = args.cluster_key()?;
  let config = config::load(args.config.as_deref())?.with_overrides(args.url.clone(), None);
  debug!("Using clusters management API at {}", config.url);

  let client = RealOcmClients::new(&config)?;

  let spinner = (!args.format.is_structured()).then(|| spinner(key));
  let result = describe::describe_cluster(&client, key, &args.format).await;
  if let Some(spinner) = spinner {
    spinner.finish_and_clear();
  }

  output::output(&result?, &args.output).context("Failed to write output")?;

  Ok(())
}

fn spinner(key: &str) -> ProgressBar {
  let spinner = ProgressBar::new_spinner();
  if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
    spinner.set_style(style);
  }
  spinner.set_message(format!("Fetching cluster '{key}'..."));
  spinner.enable_steady_tick(Duration::from_millis(100));
  spinner
}
