use std::process;

use clap::Parser;
use rosa_describe::{Cli, Commands, DescribeCommands};
use tracing_log::AsTrace;

#[tokio::main]
async fn main() {
  let cli = Cli::parse();

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_max_level(cli.verbose.log_level_filter().as_trace())
    .init();

  let result = match &cli.commands {
    Commands::Describe(describe) => match &describe.command {
      DescribeCommands::Cluster(args) => rosa_describe::describe(args).await,
    },
  };

  if let Err(err) = result {
    eprintln!("E: {err:#}");
    process::exit(1);
  }
}
