use clap::Parser;

use zap_cli::{execute, render, Args, CliResult, ZapConfig};

fn main() -> CliResult<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    // Load configuration
    let config = ZapConfig::resolve(args.config.as_deref())?;
    let format = args.output.unwrap_or(config.display.output);

    log::debug!("Output format: {:?}", format);

    let report = execute(&args.command, &config)?;
    println!("{}", render(&report, format)?);

    Ok(())
}
