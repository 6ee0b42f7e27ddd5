use clap::Parser;

mod bootstrap;
mod cli;
mod output;
mod pipeline;
mod progress;
mod write_lock;

fn main() {
    if let Err(error) = run() {
        eprintln!("housegen error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let show_progress = !cli.quiet && !cli.no_progress;
    let outcome = pipeline::execute(&config, cli.count, show_progress)?;

    output::output(&outcome.summary, cli.format)?;
    outcome.failure.map_or(Ok(()), Err)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HOUSEGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the run summary.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
