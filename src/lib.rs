//!
//! Solidity contract artifact builder library.
//!

pub mod artifact;
pub mod config;
pub mod error;
pub mod solc;
pub mod sources;

pub use self::artifact::Artifact;
pub use self::config::Config;
pub use self::error::Error;
pub use self::solc::standard_json::input::Input as SolcStandardJsonInput;
pub use self::solc::standard_json::output::Output as SolcStandardJsonOutput;
pub use self::solc::Compiler as SolcCompiler;
pub use self::solc::IStandardJsonCompiler;
pub use self::sources::Sources;

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;

///
/// Compiles the input directory and writes the configured contract artifact.
///
/// The output directory is removed first and only recreated once the artifact is ready, so
/// a failed run leaves no output directory behind.
///
pub fn compile<C>(config: &Config, compiler: &C) -> anyhow::Result<PathBuf>
where
    C: IStandardJsonCompiler,
{
    remove_directory(config.output_directory.as_path())?;

    let mut sources = Sources::try_from_directory(config.input_directory.as_path())?;
    sources.resolve_imports()?;

    let input = SolcStandardJsonInput::new(sources.files, config.optimizer_runs);
    let output = compiler.standard_json(&input)?;

    for warning in output.check_errors()?.into_iter() {
        eprintln!("{}", warning.to_string().yellow());
    }
    let artifact = output.try_into_artifact(config.contract_name.as_str())?;

    std::fs::create_dir_all(config.output_directory.as_path()).with_context(|| {
        format!(
            "Output directory {:?} creating error",
            config.output_directory
        )
    })?;
    artifact.write_to_directory(
        config.output_directory.as_path(),
        config.contract_name.as_str(),
    )
}

///
/// Removes whatever is at the output path: a directory recursively, or a single file.
///
fn remove_directory(path: &Path) -> anyhow::Result<()> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(error)
                .with_context(|| format!("Output directory {:?} metadata error", path))
        }
    };

    let result = if metadata.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    result.with_context(|| format!("Output directory {:?} removing error", path))
}
