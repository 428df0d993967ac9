use clap::Parser;
use roomescape::{Config, cli, db, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let args = roomescape::config::Args::parse();

    // Load configuration
    let config = Config::load(&args)?;

    // If --validate flag is set, exit successfully after config validation
    if args.validate {
        println!("Configuration is valid.");
        return Ok(());
    }

    telemetry::init_telemetry()?;

    tracing::debug!("{:?}", args);

    let Some(command) = args.command else {
        anyhow::bail!("No command given, see --help");
    };

    let pool = db::pool::connect(&config.database, config.slow_statement_threshold()).await?;
    let output = cli::run(&command, &pool).await;
    pool.close().await;

    println!("{}", serde_json::to_string_pretty(&output?)?);
    Ok(())
}
