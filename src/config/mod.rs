pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, FixtureCommand};
pub use toml_config::FixtureConfig;

/// A fully resolved fixture invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureRun {
    Counter(i32),
    Composite(Vec<String>),
}

#[cfg(feature = "cli")]
mod cli {
    use super::{FixtureConfig, FixtureRun};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "sample-fixtures")]
    #[command(about = "Runs the counter and composite sample fixtures")]
    pub struct CliConfig {
        /// Optional TOML file with [counter] and [composite] tables
        #[arg(long, global = true)]
        pub config: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Option<FixtureCommand>,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum FixtureCommand {
        /// Print "Processing: <value>"
        Counter {
            #[arg(long, allow_negative_numbers = true)]
            value: Option<i32>,
        },
        /// Add the items and print "Items: <count>"
        Composite { items: Vec<String> },
    }

    impl CliConfig {
        /// Command line values win over the config file, which wins over defaults.
        pub fn resolve(&self) -> Result<FixtureRun> {
            let file_config = match &self.config {
                Some(path) => FixtureConfig::from_file(path)?,
                None => FixtureConfig::default(),
            };

            let run = match &self.command {
                None => FixtureRun::Counter(file_config.counter.value),
                Some(FixtureCommand::Counter { value }) => {
                    FixtureRun::Counter(value.unwrap_or(file_config.counter.value))
                }
                Some(FixtureCommand::Composite { items }) if items.is_empty() => {
                    FixtureRun::Composite(file_config.composite.items)
                }
                Some(FixtureCommand::Composite { items }) => {
                    FixtureRun::Composite(items.clone())
                }
            };
            Ok(run)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            Ok(())
        }
    }

}
