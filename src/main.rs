use clap::Parser;
use sample_fixtures::utils::{logger, validation::Validate};
use sample_fixtures::{
    run_composite_fixture_with, run_counter_fixture_with, CliConfig, FixtureRun, StdoutSink,
};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let run = match config.validate().and_then(|_| config.resolve()) {
        Ok(run) => run,
        Err(e) => {
            tracing::error!("Failed to prepare fixture run: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    match run {
        FixtureRun::Counter(value) => run_counter_fixture_with(value, StdoutSink),
        FixtureRun::Composite(items) => run_composite_fixture_with(items, StdoutSink),
    }
}
