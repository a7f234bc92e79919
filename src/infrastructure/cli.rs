use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};

use crate::{
    infrastructure::{
        config::Config,
        scenario::{run_scenario, run_scenario_realtime, Scenario},
    },
    utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Config file applied over the defaults and the config directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also log to stderr, at debug level unless SITEUI_LOGLEVEL says otherwise
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a scripted page session and print a JSON report
    Simulate {
        /// JSON5 scenario file
        scenario: PathBuf,

        /// Stop at this many milliseconds instead of the scenario's end
        #[arg(long, value_name = "MS")]
        until: Option<u64>,

        /// Wait in real time instead of on a virtual clock
        #[arg(long)]
        realtime: bool,
    },
    /// List the service catalog, or print the modal markup of one entry
    Services {
        id: Option<String>,
    },
}

impl Cli {
    /// Run the selected command and return what should be printed
    pub async fn execute(&self, config: Config) -> Result<String> {
        match &self.command {
            Command::Simulate {
                scenario,
                until,
                realtime,
            } => {
                let scenario = Scenario::load(scenario)?;
                let report = if *realtime {
                    run_scenario_realtime(&scenario, config, *until).await?
                } else {
                    run_scenario(&scenario, config, *until)?
                };
                tracing::info!(
                    "simulated {} ms, {} command(s)",
                    report.elapsed_ms,
                    report.commands.len()
                );
                Ok(serde_json::to_string_pretty(&report)?)
            }
            Command::Services { id: Some(id) } => config
                .services
                .get(id)
                .map(|detail| detail.render_html())
                .ok_or_else(|| eyre!("unknown service `{id}`")),
            Command::Services { id: None } => Ok(config
                .services
                .iter()
                .map(|detail| format!("{}\t{}", detail.id, detail.title))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn test_parse_simulate() {
        let cli = parse(&["siteui", "-v", "simulate", "home.json5", "--until", "8000"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Simulate {
                scenario: PathBuf::from("home.json5"),
                until: Some(8000),
                realtime: false,
            }
        );
    }

    #[test]
    fn test_parse_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["siteui"]).is_err());
    }

    #[tokio::test]
    async fn test_services_listing() -> Result<()> {
        let config = Config::embedded()?;
        let listing = parse(&["siteui", "services"]).execute(config).await?;
        assert_eq!(listing.lines().count(), 9);
        assert!(listing.contains("fm-dm\tPrecision FM/DM Floors (Superflat)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_services_entry() -> Result<()> {
        let config = Config::embedded()?;
        let html = parse(&["siteui", "services", "fm-dm"])
            .execute(config.clone())
            .await?;
        assert!(html.starts_with("<h3>Precision FM/DM Floors (Superflat)</h3>"));

        let missing = parse(&["siteui", "services", "asphalt"]).execute(config).await;
        assert!(missing.is_err());
        Ok(())
    }
}
