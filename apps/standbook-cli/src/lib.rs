//! # standbook-cli
//!
//! Builds a stand from configuration (optionally on top of a saved snapshot),
//! records the configured days, and reports profit.
//!
//! ## Run Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  parse_args ──► CliConfig::load ──► CliOptions::apply_to               │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                   run(config)                           │
//! │   snapshot file? ── yes ──► LemonadeStand::from_json                   │
//! │        │ no                                                             │
//! │        ▼                                                                │
//! │   LemonadeStand::new(name)                                              │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   add menu items ──► enter each day (unknown item → day skipped)       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   save snapshot (if configured) ──► RunOutcome::render(text | json)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use standbook_core::{CoreError, LemonadeStand, ProfitReport};
use tracing::{info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};

// =============================================================================
// Arguments
// =============================================================================

/// Parsed command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub snapshot_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub show_help: bool,
}

impl CliOptions {
    /// Layers the flags over a loaded configuration.
    pub fn apply_to(&self, config: &mut CliConfig) {
        if let Some(path) = &self.snapshot_path {
            config.stand.snapshot_path = Some(path.clone());
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }
}

pub const USAGE: &str = "\
Standbook - profit ledger for a single stand

Usage: standbook [OPTIONS]

Options:
  -c, --config <PATH>     TOML config file (default: platform config dir)
  -s, --snapshot <PATH>   JSON snapshot to restore from and save to
      --json              Print the report as JSON
  -h, --help              Show this help message";

/// Parses arguments (without the program name).
pub fn parse_args<I>(args: I) -> CliResult<CliOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                options.config_path = Some(PathBuf::from(flag_value(&arg, args.next())?));
            }
            "-s" | "--snapshot" => {
                options.snapshot_path = Some(PathBuf::from(flag_value(&arg, args.next())?));
            }
            "--json" => options.format = Some(OutputFormat::Json),
            "-h" | "--help" => options.show_help = true,
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "unrecognized option '{}'",
                    other
                )))
            }
        }
    }

    Ok(options)
}

fn flag_value(flag: &str, value: Option<String>) -> CliResult<String> {
    value.ok_or_else(|| CliError::InvalidArgument(format!("{} requires a value", flag)))
}

// =============================================================================
// Run
// =============================================================================

/// A configured day that the ledger refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDay {
    /// Position in the config's `days` list.
    pub entry: usize,
    /// The item name that is not on the menu.
    pub item: String,
}

/// Result of one run, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub report: ProfitReport,
    pub skipped_days: Vec<SkippedDay>,
    #[serde(skip)]
    pub format: OutputFormat,
}

impl RunOutcome {
    pub fn render(&self) -> CliResult<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                let mut out = String::new();
                for skipped in &self.skipped_days {
                    out.push_str(&format!(
                        "Skipped day entry {}: '{}' is not on the menu\n",
                        skipped.entry, skipped.item
                    ));
                }
                out.push_str(&self.report.to_string());
                Ok(out)
            }
        }
    }
}

/// Builds or restores the stand, records the configured days, saves the
/// snapshot if one is configured, and reports.
pub fn run(config: &CliConfig) -> CliResult<RunOutcome> {
    let snapshot_path = config.stand.snapshot_path.as_deref();

    let mut stand = match snapshot_path {
        Some(path) if path.exists() => load_snapshot(path)?,
        _ => LemonadeStand::new(config.stand.name.clone()),
    };
    if stand.name() != config.stand.name {
        warn!(
            snapshot_name = %stand.name(),
            configured_name = %config.stand.name,
            "Snapshot stand name differs from configuration; keeping the snapshot name"
        );
    }

    for item in config.menu_items()? {
        stand.add_menu_item(item);
    }

    let mut skipped_days = Vec::new();
    for (entry, day) in config.days.iter().enumerate() {
        match stand.enter_sales_for_today(day.clone()) {
            Ok(recorded) => info!(entry, day = recorded, "Recorded configured day"),
            Err(CoreError::InvalidSalesItem { name }) => {
                warn!(entry, item = %name, "Skipping day with item not on the menu");
                skipped_days.push(SkippedDay { entry, item: name });
            }
            Err(other) => return Err(other.into()),
        }
    }

    if let Some(path) = snapshot_path {
        save_snapshot(&stand, path)?;
    }

    Ok(RunOutcome {
        report: stand.profit_report(),
        skipped_days,
        format: config.output.format,
    })
}

fn load_snapshot(path: &Path) -> CliResult<LemonadeStand> {
    info!(?path, "Restoring stand from snapshot");
    let json = fs::read_to_string(path)
        .map_err(|e| CliError::SnapshotIo(format!("{}: {}", path.display(), e)))?;
    Ok(LemonadeStand::from_json(&json)?)
}

fn save_snapshot(stand: &LemonadeStand, path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::SnapshotIo(format!("{}: {}", parent.display(), e)))?;
    }

    fs::write(path, stand.to_json()?)
        .map_err(|e| CliError::SnapshotIo(format!("{}: {}", path.display(), e)))?;

    info!(?path, days = stand.current_day(), "Snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use standbook_core::Money;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("standbook-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(args(&["-c", "stand.toml", "--snapshot", "s.json", "--json"])).unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("stand.toml")));
        assert_eq!(options.snapshot_path, Some(PathBuf::from("s.json")));
        assert_eq!(options.format, Some(OutputFormat::Json));
        assert!(!options.show_help);

        assert!(parse_args(args(&["--help"])).unwrap().show_help);
        assert_eq!(parse_args(Vec::new()).unwrap(), CliOptions::default());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(
            parse_args(args(&["--config"])),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_args(args(&["--verbose"])),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_options_override_config() {
        let mut config = CliConfig::default();
        let options = parse_args(args(&["-s", "x.json", "--json"])).unwrap();
        options.apply_to(&mut config);
        assert_eq!(config.stand.snapshot_path, Some(PathBuf::from("x.json")));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_demo_run_skips_day_with_water() {
        let outcome = run(&CliConfig::default()).unwrap();

        assert_eq!(
            outcome.skipped_days,
            vec![SkippedDay {
                entry: 0,
                item: "Water".to_string()
            }]
        );
        assert_eq!(outcome.report.days_recorded, 2);
        // 41 × $3.36 + 9 × $3.86 + 40 × $3.94 + 23 × $2.74
        assert_eq!(outcome.report.total_profit(), Money::from_cents(39312));

        let text = outcome.render().unwrap();
        assert!(text.starts_with("Skipped day entry 0: 'Water' is not on the menu\n"));
        assert!(text.ends_with("Total profit: $393.12"));
    }

    #[test]
    fn test_json_render() {
        let mut config = CliConfig::default();
        config.output.format = OutputFormat::Json;
        let json = run(&config).unwrap().render().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["report"]["stand"], "Irwin's Lemonade");
        assert_eq!(value["report"]["total_profit_cents"], 39312);
        assert_eq!(value["skipped_days"][0]["item"], "Water");
        assert!(value.get("format").is_none());
    }

    #[test]
    fn test_snapshot_is_saved_and_extended() {
        let path = temp_path("cactina/stand.json");
        let _ = fs::remove_file(&path);

        let mut config = CliConfig::from_toml_str(
            r#"
            [stand]
            name = "Zesty Cactina"

            [[menu]]
            name = "Lemon Tacos"
            wholesale_cost = "6.12"
            selling_price = "8.57"

            [[days]]
            "Lemon Tacos" = 122
            "#,
        )
        .unwrap();
        config.stand.snapshot_path = Some(path.clone());

        let first = run(&config).unwrap();
        assert_eq!(first.report.days_recorded, 1);
        assert!(path.exists());

        config.days = vec![[("Lemon Tacos".to_string(), 91)].into_iter().collect()];
        let second = run(&config).unwrap();
        assert_eq!(second.report.days_recorded, 2);
        assert_eq!(second.report.total_profit(), Money::from_cents(52185));

        let saved = LemonadeStand::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.current_day(), 2);
        assert_eq!(saved.sales_of_menu_item_for_day(1, "Lemon Tacos"), Ok(91));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_snapshot_name_wins_over_configured_name() {
        let path = temp_path("renamed/stand.json");
        let _ = fs::remove_file(&path);

        let mut config = CliConfig::default();
        config.stand.snapshot_path = Some(path.clone());
        config.days.clear();
        run(&config).unwrap();

        config.stand.name = "Frozen Lemon".to_string();
        let outcome = run(&config).unwrap();
        assert_eq!(outcome.report.stand, "Irwin's Lemonade");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_snapshot_fails_run() {
        let path = temp_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{\"name\": \"Broken\", \"sales_record\": [{\"day\": 3, \"quantities\": {}}]}").unwrap();

        let mut config = CliConfig::default();
        config.stand.snapshot_path = Some(path.clone());
        let err = run(&config).unwrap_err();
        assert!(matches!(err, CliError::Ledger(CoreError::InvalidSnapshot { .. })));

        let _ = fs::remove_file(&path);
    }
}
