//!
//! The artifact build configuration.
//!

use std::path::PathBuf;

///
/// The artifact build configuration.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The directory whose files are compiled and imports are resolved against.
    pub input_directory: PathBuf,
    /// The directory recreated on every run to hold the artifact.
    pub output_directory: PathBuf,
    /// The contract whose artifact is written.
    pub contract_name: String,
    /// The optimizer runs parameter.
    pub optimizer_runs: usize,
}

impl Config {
    /// The default input directory.
    pub const DEFAULT_INPUT_DIRECTORY: &'static str = "contracts";
    /// The default output directory.
    pub const DEFAULT_OUTPUT_DIRECTORY: &'static str = "build";
    /// The default contract name.
    pub const DEFAULT_CONTRACT_NAME: &'static str = "Campaign";
    /// The default optimizer runs, the value the deployed artifacts were built with.
    pub const DEFAULT_OPTIMIZER_RUNS: usize = 29;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        input_directory: PathBuf,
        output_directory: PathBuf,
        contract_name: String,
        optimizer_runs: usize,
    ) -> Self {
        Self {
            input_directory,
            output_directory,
            contract_name,
            optimizer_runs,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            PathBuf::from(Self::DEFAULT_INPUT_DIRECTORY),
            PathBuf::from(Self::DEFAULT_OUTPUT_DIRECTORY),
            Self::DEFAULT_CONTRACT_NAME.to_owned(),
            Self::DEFAULT_OPTIMIZER_RUNS,
        )
    }
}
