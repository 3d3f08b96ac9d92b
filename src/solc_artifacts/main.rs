//!
//! Solidity contract artifact builder binary.
//!

pub mod arguments;

use colored::Colorize;

use self::arguments::Arguments;

/// The successful exit code.
const EXIT_CODE_SUCCESS: i32 = 0;
/// The failed exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {:?}", "Error:".bright_red(), error);
            EXIT_CODE_FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
fn main_inner() -> anyhow::Result<()> {
    let arguments = Arguments::new();
    let config = arguments.to_config();

    let solc = match arguments.solc {
        Some(executable) => solc_artifacts::SolcCompiler::new(executable),
        None => solc_artifacts::SolcCompiler::default(),
    };
    let version = solc.version()?;
    eprintln!(
        "Compiling {:?} with {} {}",
        config.input_directory,
        solc.executable.as_str(),
        version
    );

    let path = solc_artifacts::compile(&config, &solc)?;
    eprintln!("Artifact written to {:?}", path);
    println!("{}", "OK".green());

    Ok(())
}
