use anyhow::{Context, Result, bail};
use clap::Parser;
use osis2json::cli::{Cli, Command, LookupArgs};
use osis2json::config::log_level;
use osis2json::{Config, convert_all, load_bible, lookup_verse, output};
use tracing_subscriber::EnvFilter;

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_lookup(args: &LookupArgs) -> Result<()> {
    let bible = load_bible(&args.bible)?;
    let found = lookup_verse(&bible, &args.book, &args.chapter, &args.verse);
    println!("{}", found.text);
    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(log_level(cli.verbose));

    if let Some(Command::Lookup(args)) = cli.command.take() {
        return run_lookup(&args);
    }

    let config = Config::from_args(cli)?;
    let report = convert_all(&config).with_context(|| {
        format!(
            "converting modules from {} into {}",
            config.input_dir.display(),
            config.output_dir.display()
        )
    })?;

    // Individual failures were already logged while converting.
    if !report.is_success() {
        bail!(output::format_summary(&report));
    }
    tracing::info!("{}", output::format_summary(&report));

    Ok(())
}
