//! # CLI Configuration
//!
//! Stand name, menu, days of sales to record, and output settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied in main)             │
//! │     --snapshot ./stand.json --json                                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STANDBOOK_STAND_NAME="Frozen Lemon"                                │
//! │     STANDBOOK_SNAPSHOT=./stand.json                                    │
//! │     STANDBOOK_OUTPUT=json                                              │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, else the platform config dir:                     │
//! │     ~/.config/standbook/standbook.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     The "Irwin's Lemonade" demo: four items, three days                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [stand]
//! name = "Zesty Cactina"
//! snapshot_path = "./cactina.json"   # optional
//!
//! [output]
//! format = "text"                    # text | json
//!
//! [[menu]]
//! name = "Lemon Tacos"
//! wholesale_cost = "6.12"
//! selling_price = "8.57"
//!
//! [[days]]
//! "Lemon Tacos" = 122
//!
//! [[days]]
//! "Lemon Tacos" = 91
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use standbook_core::validation::{validate_menu_item_name, validate_stand_name, ValidationResult};
use standbook_core::{MenuItem, Money};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

// =============================================================================
// Output Format
// =============================================================================

/// How the profit report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned plain text.
    #[default]
    Text,

    /// Pretty-printed JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// The `[stand]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandSettings {
    #[serde(default = "default_stand_name")]
    pub name: String,

    /// JSON file the stand is restored from and saved back to.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

fn default_stand_name() -> String {
    "Irwin's Lemonade".to_string()
}

impl Default for StandSettings {
    fn default() -> Self {
        StandSettings {
            name: default_stand_name(),
            snapshot_path: None,
        }
    }
}

/// The `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// One `[[menu]]` entry. Prices are decimal strings, e.g. `"4.99"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub name: String,
    pub wholesale_cost: String,
    pub selling_price: String,
}

impl MenuItemConfig {
    fn new(name: &str, wholesale_cost: &str, selling_price: &str) -> Self {
        MenuItemConfig {
            name: name.to_string(),
            wholesale_cost: wholesale_cost.to_string(),
            selling_price: selling_price.to_string(),
        }
    }

    /// Parses the prices and builds the ledger item.
    pub fn to_menu_item(&self) -> ValidationResult<MenuItem> {
        validate_menu_item_name(&self.name)?;
        Ok(MenuItem::new(
            self.name.clone(),
            Money::parse(&self.wholesale_cost)?,
            Money::parse(&self.selling_price)?,
        ))
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub stand: StandSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub menu: Vec<MenuItemConfig>,

    /// Days of sales, recorded in order. Each maps item name to units sold.
    #[serde(default)]
    pub days: Vec<BTreeMap<String, u64>>,
}

impl Default for CliConfig {
    /// The Irwin's Lemonade demo.
    ///
    /// Day 0 lists "Water", which is not on the menu, so it is rejected and
    /// only the two following days are recorded.
    fn default() -> Self {
        let day = |entries: &[(&str, u64)]| -> BTreeMap<String, u64> {
            entries
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect()
        };

        CliConfig {
            stand: StandSettings::default(),
            output: OutputSettings::default(),
            menu: vec![
                MenuItemConfig::new("Lemur Love Lemonade", "1.63", "4.99"),
                MenuItemConfig::new("Big Bear Brownie", "1.14", "5.00"),
                MenuItemConfig::new("Crikey Cookies", "2.31", "6.25"),
                MenuItemConfig::new("Roasted Crikey Crickets", "0.25", "2.99"),
            ],
            days: vec![
                day(&[
                    ("Lemur Love Lemonade", 19),
                    ("Big Bear Brownie", 6),
                    ("Crikey Cookies", 18),
                    ("Roasted Crikey Crickets", 2),
                    ("Water", 4),
                ]),
                day(&[
                    ("Lemur Love Lemonade", 19),
                    ("Big Bear Brownie", 1),
                    ("Crikey Cookies", 17),
                    ("Roasted Crikey Crickets", 6),
                ]),
                day(&[
                    ("Lemur Love Lemonade", 22),
                    ("Big Bear Brownie", 8),
                    ("Crikey Cookies", 23),
                    ("Roasted Crikey Crickets", 17),
                ]),
            ],
        }
    }
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `config_path` if given (must exist), else the
    ///    platform default path if a file is there
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Parses a TOML document. Sections left out fall back to empty values,
    /// not to the demo data.
    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        validate_stand_name(&self.stand.name)?;

        for item in &self.menu {
            item.to_menu_item().map_err(|e| {
                CliError::InvalidConfig(format!("menu item '{}': {}", item.name, e))
            })?;
        }

        Ok(())
    }

    /// Parsed menu items, in file order.
    pub fn menu_items(&self) -> CliResult<Vec<MenuItem>> {
        Ok(self
            .menu
            .iter()
            .map(MenuItemConfig::to_menu_item)
            .collect::<ValidationResult<Vec<_>>>()?)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `STANDBOOK_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("STANDBOOK_STAND_NAME") {
            debug!(stand = %name, "Overriding stand name from environment");
            self.stand.name = name;
        }

        if let Some(path) = lookup("STANDBOOK_SNAPSHOT") {
            debug!(path = %path, "Overriding snapshot path from environment");
            self.stand.snapshot_path = Some(PathBuf::from(path));
        }

        if let Some(format) = lookup("STANDBOOK_OUTPUT") {
            match format.parse() {
                Ok(parsed) => self.output.format = parsed,
                Err(_) => warn!(format = %format, "Unknown output format in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "standbook", "standbook")
            .map(|dirs| dirs.config_dir().join("standbook.toml"))
    }
}
