use clap::Parser;

use lanes::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    common::log_setup::setup_logging(&cli.log_level, cli.log_dir.as_deref())?;
    tracing::debug!(backend = lanes::BACKEND, "lanes starting");

    let report = run(cli)?;
    print!("{report}");
    Ok(())
}
