use clap::Parser;

use planner::{Cli, run};

fn main() {
  // Documents go to stdout, so logs stay on stderr.
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();

  if let Err(e) = run(Cli::parse()) {
    tracing::error!("{e}");
    std::process::exit(1);
  }
}
