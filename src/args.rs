//! These structs provide the CLI interface for the shopify2ynab CLI.

use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// shopify2ynab: A command-line tool for converting Shopify financial exports.
///
/// Shopify provides two spreadsheets for financial data: payouts, which are
/// transfers of your Shopify balance to a bank account, and transactions,
/// which cover the full details of each charge including the payment fee,
/// refunds and chargebacks. This program reads either export and writes a
/// delimited file that YNAB (or another budgeting tool) can import.
///
/// Payee names, category names, delimiters and the output column layout are
/// taken from a configuration file. Run `shopify2ynab init` to create one
/// with default settings.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a starter configuration file with default settings.
    ///
    /// The file is written to ./shopify2ynab.json unless --path is given.
    /// Edit it to set your payee and category names before converting.
    Init(InitArgs),
    /// Convert a Shopify Payouts export.
    ///
    /// Each payout row becomes one transfer row in the output.
    Payouts(ConvertArgs),
    /// Convert a Shopify Transactions export.
    ///
    /// Each transaction row becomes a gross row and/or a fee row depending on
    /// its type. Rows with an unrecognized type are reported and dropped.
    Transactions(ConvertArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The path to the configuration file.
    ///
    /// When not given, ./shopify2ynab.json is used if it exists, then the
    /// user configuration directory, then built-in defaults.
    #[arg(long, env = "SHOPIFY2YNAB_CONFIG")]
    config: Option<DisplayPath>,
}

impl Common {
    pub fn new(log_level: LevelFilter, config: Option<PathBuf>) -> Self {
        Self {
            log_level,
            config: config.map(DisplayPath::from),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

/// Args for the `shopify2ynab init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// The path where the configuration file will be written.
    #[arg(long)]
    path: Option<PathBuf>,

    /// Overwrite the configuration file if it already exists.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    pub fn new(path: Option<PathBuf>, force: bool) -> Self {
        Self { path, force }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn force(&self) -> bool {
        self.force
    }
}

/// Args for the `payouts` and `transactions` commands.
#[derive(Debug, Parser, Clone)]
pub struct ConvertArgs {
    /// The export file to read. If not supplied, input is taken from stdin.
    #[arg(long = "file", short = 'f')]
    file: Option<PathBuf>,

    /// The file to write. If not supplied, output goes to stdout.
    #[arg(long = "output", short = 'o')]
    output: Option<PathBuf>,
}

impl ConvertArgs {
    pub fn new(file: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self { file, output }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
