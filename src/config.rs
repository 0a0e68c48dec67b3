//! Configuration file handling for shopify2ynab.
//!
//! The configuration file is a JSON document that holds the delimiter and
//! header settings used when reading Shopify exports, the output column
//! layout, and the payee and category names used when building YNAB rows.

use crate::model::OutputColumn;
use crate::Result;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "shopify2ynab";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "shopify2ynab.json";

/// The `Config` object represents the settings of the app. It is loaded from
/// a configuration file when one can be found, and falls back to built-in
/// defaults when none exists.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The path the settings were loaded from, `None` for built-in defaults.
    path: Option<PathBuf>,
    config_file: ConfigFile,
}

impl Config {
    /// Loads the configuration.
    ///
    /// When `explicit` is given it must exist. Otherwise the file is searched
    /// for at `./shopify2ynab.json` and then in the user configuration
    /// directory, and built-in defaults are used when neither exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.is_file() {
                    bail!("The config file is missing '{}'", p.display())
                }
                Some(p.to_path_buf())
            }
            None => find_config(),
        };
        let config_file = match &path {
            Some(p) => ConfigFile::load(p)?,
            None => {
                debug!("No configuration file found, using default settings");
                ConfigFile::default()
            }
        };
        Ok(Self { path, config_file })
    }

    /// Writes a configuration file with default settings to `path` (or the
    /// default location) and returns the resulting `Config`.
    ///
    /// # Errors
    /// Returns an error if the file already exists and `force` is false, or
    /// if the file cannot be written.
    pub fn create(path: Option<&Path>, force: bool) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_JSON));
        if path.exists() && !force {
            bail!(
                "The config file '{}' already exists, use --force to overwrite it",
                path.display()
            )
        }
        let config_file = ConfigFile::default();
        config_file.save(&path)?;
        Ok(Self {
            path: Some(path),
            config_file,
        })
    }

    /// The path the settings were loaded from, `None` for built-in defaults.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The input delimiter as a byte for the CSV reader.
    pub fn input_delimiter(&self) -> Result<u8> {
        delimiter_byte(&self.config_file.input_delimiter)
            .context("Bad input_delimiter in configuration")
    }

    /// The output delimiter as a byte for the CSV writer.
    pub fn output_delimiter(&self) -> Result<u8> {
        delimiter_byte(&self.config_file.output_delimiter)
            .context("Bad output_delimiter in configuration")
    }

    /// The number of leading non-data rows in the input. The first is the
    /// header row.
    pub fn header_rows(&self) -> u32 {
        self.config_file.header_rows
    }

    /// The columns to write, in order.
    pub fn output_columns(&self) -> &[OutputColumn] {
        &self.config_file.output_columns
    }

    pub fn payees(&self) -> &Payees {
        &self.config_file.payees
    }

    pub fn categories(&self) -> &Categories {
        &self.config_file.categories
    }
}

/// Finds the configuration file in the default locations.
fn find_config() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_JSON);
    if local.is_file() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join(APP_NAME).join("config.json");
    user.is_file().then_some(user)
}

/// Converts a delimiter setting to the single byte the CSV reader and writer
/// require. Both a literal tab and the two-character escape `\t` are accepted.
fn delimiter_byte(s: &str) -> Result<u8> {
    if s == "\t" || s == "\\t" {
        return Ok(b'\t');
    }
    let mut bytes = s.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(b), None) if b.is_ascii() => Ok(b),
        _ => bail!("A delimiter must be a single ASCII character, got '{s}'"),
    }
}

/// Represents the serialization and deserialization format of the
/// configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "shopify2ynab",
///   "config_version": 1,
///   "input_delimiter": ",",
///   "output_delimiter": ",",
///   "header_rows": 1,
///   "output_columns": ["Date", "Payee", "Category", "Memo", "Outflow", "Inflow"],
///   "payees": {
///     "you": "Shopify Sales",
///     "payouts": "Checking",
///     "fees": "Shopify",
///     "refunds": "Shopify Customer",
///     "fees_adjustment": "Shopify",
///     "fees_chargebacks": "Shopify",
///     "chargebacks": "Shopify Customer",
///     "chargebacks_won": "Shopify Customer"
///   },
///   "categories": {
///     "income": "Sales",
///     "fees": "Merchant Fees",
///     "refunds": "Refunds",
///     "chargebacks": "Chargebacks"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "shopify2ynab"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// The field delimiter of the Shopify export, usually a comma
    input_delimiter: String,

    /// The field delimiter of the file we write, usually a comma
    output_delimiter: String,

    /// The number of leading non-data rows in the export
    header_rows: u32,

    /// The columns to write, in order
    output_columns: Vec<OutputColumn>,

    /// Payee names used when building output rows
    payees: Payees,

    /// Category names used when building output rows
    categories: Categories,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            input_delimiter: ",".to_string(),
            output_delimiter: ",".to_string(),
            header_rows: 1,
            output_columns: OutputColumn::default_columns(),
            payees: Payees::default(),
            categories: Categories::default(),
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        // Validate app_name
        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        std::fs::write(path, data)
            .with_context(|| format!("Unable to write config file at {}", path.display()))
    }
}

/// The payee names written into output rows.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Payees {
    /// The payee for gross sales income, i.e. you.
    you: String,

    /// The account payouts are transferred to. Written as `Transfer: <name>`.
    payouts: String,

    /// The payee for payment fees.
    fees: String,

    /// The payee for refunded sales.
    refunds: String,

    /// The payee for fee adjustments that accompany refunds.
    fees_adjustment: String,

    /// The payee for the extra fee charged on a chargeback.
    fees_chargebacks: String,

    /// The payee for chargeback reversals.
    chargebacks: String,

    /// The payee for funds returned when a chargeback is won.
    chargebacks_won: String,
}

impl Default for Payees {
    fn default() -> Self {
        Self {
            you: "Shopify Sales".to_string(),
            payouts: "Checking".to_string(),
            fees: "Shopify".to_string(),
            refunds: "Shopify Customer".to_string(),
            fees_adjustment: "Shopify".to_string(),
            fees_chargebacks: "Shopify".to_string(),
            chargebacks: "Shopify Customer".to_string(),
            chargebacks_won: "Shopify Customer".to_string(),
        }
    }
}

impl Payees {
    pub fn you(&self) -> &str {
        &self.you
    }

    pub fn payouts(&self) -> &str {
        &self.payouts
    }

    pub fn fees(&self) -> &str {
        &self.fees
    }

    pub fn refunds(&self) -> &str {
        &self.refunds
    }

    pub fn fees_adjustment(&self) -> &str {
        &self.fees_adjustment
    }

    pub fn fees_chargebacks(&self) -> &str {
        &self.fees_chargebacks
    }

    pub fn chargebacks(&self) -> &str {
        &self.chargebacks
    }

    pub fn chargebacks_won(&self) -> &str {
        &self.chargebacks_won
    }
}

/// The category names written into output rows.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct Categories {
    /// The category for gross sales income.
    income: String,

    /// The category for all fee rows.
    fees: String,

    /// The category for refund rows.
    refunds: String,

    /// The category for chargeback and chargeback-won rows.
    chargebacks: String,
}

impl Default for Categories {
    fn default() -> Self {
        Self {
            income: "Sales".to_string(),
            fees: "Merchant Fees".to_string(),
            refunds: "Refunds".to_string(),
            chargebacks: "Chargebacks".to_string(),
        }
    }
}

impl Categories {
    pub fn income(&self) -> &str {
        &self.income
    }

    pub fn fees(&self) -> &str {
        &self.fees
    }

    pub fn refunds(&self) -> &str {
        &self.refunds
    }

    pub fn chargebacks(&self) -> &str {
        &self.chargebacks
    }
}
