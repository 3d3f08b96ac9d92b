//!
//! The Solidity compiler.
//!

pub mod standard_json;

use std::io::Write;

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;

use self::standard_json::input::Input as StandardJsonInput;
use self::standard_json::output::Output as StandardJsonOutput;

/// The `solc --version` output version line.
static VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Version:\s*(\d+\.\d+\.\d+)").expect("Always valid"));

///
/// The `--standard-json` protocol compiler.
///
pub trait IStandardJsonCompiler {
    ///
    /// Compiles the `--standard-json` input.
    ///
    fn standard_json(&self, input: &StandardJsonInput) -> anyhow::Result<StandardJsonOutput>;
}

///
/// The Solidity compiler.
///
#[derive(Debug, Clone)]
pub struct Compiler {
    /// The binary executable name.
    pub executable: String,
}

impl Compiler {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "solc";

    ///
    /// A shortcut constructor.
    ///
    /// Different setups may use different `executable` names, e.g. `solc-<version>`.
    ///
    pub fn new(executable: String) -> Self {
        Self { executable }
    }

    ///
    /// The `solc --version` mirror.
    ///
    pub fn version(&self) -> anyhow::Result<semver::Version> {
        let mut solc_command = std::process::Command::new(self.executable.as_str());
        solc_command.arg("--version");
        let solc_output = solc_command
            .output()
            .with_context(|| format!("{} subprocess error", self.executable))?;
        if !solc_output.status.success() {
            anyhow::bail!(
                "{} --version: {}",
                self.executable,
                String::from_utf8_lossy(solc_output.stderr.as_slice())
            );
        }

        Self::parse_version(&String::from_utf8_lossy(solc_output.stdout.as_slice()))
    }

    ///
    /// Parses the version line of the `solc --version` output.
    ///
    pub fn parse_version(stdout: &str) -> anyhow::Result<semver::Version> {
        let version = VERSION
            .captures(stdout)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| anyhow::anyhow!("solc version not found in `{}`", stdout.trim()))?;

        semver::Version::parse(version.as_str())
            .with_context(|| format!("solc version `{}` parsing error", version.as_str()))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXECUTABLE_NAME.to_owned())
    }
}

impl IStandardJsonCompiler for Compiler {
    fn standard_json(&self, input: &StandardJsonInput) -> anyhow::Result<StandardJsonOutput> {
        let mut solc_command = std::process::Command::new(self.executable.as_str());
        solc_command.stdin(std::process::Stdio::piped());
        solc_command.stdout(std::process::Stdio::piped());
        solc_command.stderr(std::process::Stdio::piped());
        solc_command.arg("--standard-json");

        let input_json = serde_json::to_vec(input).context("solc input serializing error")?;

        let mut solc_process = solc_command
            .spawn()
            .with_context(|| format!("{} subprocess spawning error", self.executable))?;
        {
            let mut stdin = solc_process
                .stdin
                .take()
                .ok_or_else(|| anyhow::anyhow!("solc stdin getting error"))?;
            stdin
                .write_all(input_json.as_slice())
                .context("solc stdin writing error")?;
        }

        let solc_output = solc_process
            .wait_with_output()
            .context("solc subprocess output error")?;
        if !solc_output.status.success() {
            anyhow::bail!(
                "{} --standard-json: {}",
                self.executable,
                String::from_utf8_lossy(solc_output.stderr.as_slice())
            );
        }

        serde_json::from_slice(solc_output.stdout.as_slice()).with_context(|| {
            format!(
                "solc output parsing error: {}",
                String::from_utf8_lossy(solc_output.stdout.as_slice())
            )
        })
    }
}
