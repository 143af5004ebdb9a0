use clap::Parser;
use fizzbuzz::utils::logger;
use fizzbuzz::{Classic, Classifier, CliConfig, GameSettings, Runner};

fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let result = match &settings.rules {
        Some(rules) => {
            tracing::info!(
                "Playing 1..={} with {} custom rules",
                settings.limit,
                rules.rules().len()
            );
            play(rules, &settings)
        }
        None => {
            tracing::info!("Playing 1..={}", settings.limit);
            play(Classic, &settings)
        }
    };

    if let Err(e) = result {
        tracing::error!("Run failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn play<C: Classifier>(classifier: C, settings: &GameSettings) -> fizzbuzz::Result<()> {
    let stdout = std::io::stdout();
    let runner = Runner::new(classifier, settings.limit).with_format(settings.format);
    let written = runner.run(stdout.lock())?;
    tracing::debug!("Done, {} lines", written);
    Ok(())
}
