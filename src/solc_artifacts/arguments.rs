//!
//! Solidity contract artifact builder arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

use solc_artifacts::Config;

///
/// Compiles every file of the contracts directory with `solc --standard-json` and writes
/// the ABI and bytecode of the selected contract to `<output-dir>/<contract>.json`.
/// Imports are read from the contracts directory.
///
/// Example: solc-artifacts --contracts-dir './contracts/' --contract Campaign -o './build/'
///
#[derive(Debug, StructOpt)]
#[structopt(name = "The Solidity contract artifact builder")]
pub struct Arguments {
    /// The directory with the Solidity source files.
    #[structopt(
        long = "contracts-dir",
        parse(from_os_str),
        default_value = "contracts"
    )]
    pub input_directory: PathBuf,

    /// The directory to write the artifact to.
    /// It is removed and recreated on every run.
    #[structopt(
        short = "o",
        long = "output-dir",
        parse(from_os_str),
        default_value = "build"
    )]
    pub output_directory: PathBuf,

    /// The name of the contract to write the artifact of.
    #[structopt(long = "contract", default_value = "Campaign")]
    pub contract_name: String,

    /// The optimizer runs parameter.
    #[structopt(long = "optimizer-runs")]
    pub optimizer_runs: Option<usize>,

    /// Path to the `solc` executable.
    /// By default, the one in $PATH is used.
    #[structopt(long = "solc")]
    pub solc: Option<String>,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }

    ///
    /// Converts the arguments into the build configuration.
    ///
    pub fn to_config(&self) -> Config {
        Config::new(
            self.input_directory.clone(),
            self.output_directory.clone(),
            self.contract_name.clone(),
            self.optimizer_runs.unwrap_or(Config::DEFAULT_OPTIMIZER_RUNS),
        )
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new()
    }
}
