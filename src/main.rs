use clap::Parser;
use syntax_tour::utils::{logger, validation::Validate};
use syntax_tour::{demos, CliConfig, StdoutSink, TourEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting syntax-tour CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    if config.list {
        for demo in demos::registry() {
            println!("{:<20} {}", demo.name(), demo.summary());
        }
        return Ok(());
    }

    let mut engine = TourEngine::new(StdoutSink::new(), config);

    match engine.run() {
        Ok(reports) => {
            tracing::info!("✅ Tour completed: {} demos ran", reports.len());
        }
        Err(e) => {
            tracing::error!("❌ Tour failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
