use std::io::Write;
use std::sync::Arc;

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use tenure_resource::LifecycleCounters;

mod commands;

#[derive(Parser)]
#[command(name = "tenure-cmd")]
#[command(about = "Demonstrates move-only resource handles and their lifecycle counters")]
#[command(version)]
struct Cli {
    /// Payload size of the resources created by the scenarios
    #[arg(long, global = true, default_value_t = 1000, allow_negative_numbers = true)]
    size: i64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Run every scenario in order (the default)
    All,

    /// Construct a resource and let it go out of scope
    Construction,

    /// Transfer a resource into a second handle and inspect both
    Transfer,
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let installed = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
    if let Err(e) = installed {
        // Traces still reach whichever logger was installed first.
        eprintln!("tenure-cmd: keeping the existing logger: {e}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let counters = LifecycleCounters::global();
    let mut out = std::io::stdout();

    let command = cli.command.unwrap_or(Commands::All);
    log::debug!("running {command:?} with size {}", cli.size);

    match command {
        Commands::All => {
            run_construction(cli.size, counters, &mut out)?;
            run_transfer(cli.size, counters, &mut out)?;
        }
        Commands::Construction => run_construction(cli.size, counters, &mut out)?,
        Commands::Transfer => run_transfer(cli.size, counters, &mut out)?,
    }
    Ok(())
}

fn run_construction(
    size: i64,
    counters: &Arc<LifecycleCounters>,
    out: &mut impl Write,
) -> Result<()> {
    let report = commands::construction::run(size, counters, out)?;
    ensure!(
        report.in_scope.live() == 1 && report.after_scope.live() == 0,
        "unbalanced construction counters: {:?}",
        report
    );
    Ok(())
}

fn run_transfer(size: i64, counters: &Arc<LifecycleCounters>, out: &mut impl Write) -> Result<()> {
    let report = commands::transfer::run(size, counters, out)?;
    ensure!(
        report.after.constructed == report.before.constructed,
        "transfer changed the construction count: {:?}",
        report
    );
    ensure!(
        report.source_name.is_empty() && report.target_name == commands::transfer::RESOURCE_NAME,
        "transfer did not empty its source: {:?}",
        report
    );
    Ok(())
}
