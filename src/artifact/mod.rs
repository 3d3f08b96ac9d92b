//!
//! The contract artifact.
//!

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;
use crate::solc::standard_json::output::contract::Contract;

///
/// The contract artifact consumed by the deployment tooling.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Artifact {
    /// The contract ABI array.
    pub abi: serde_json::Value,
    /// The `0x`-prefixed deploy bytecode.
    pub bytecode: String,
}

impl Artifact {
    /// The artifact file extension.
    pub const EXTENSION: &'static str = "json";

    /// The pretty-printer indentation.
    const INDENT: &'static [u8] = b"    ";

    ///
    /// Extracts the ABI and deploy bytecode from the compiler output contract.
    ///
    pub fn try_from_contract(name: &str, contract: Contract) -> Result<Self, Error> {
        let object = contract
            .bytecode_object()
            .filter(|object| !object.is_empty())
            .ok_or_else(|| Error::MalformedContract {
                name: name.to_owned(),
                reason: "the bytecode object is missing",
            })?;
        let bytecode = if object.starts_with("0x") {
            object.to_owned()
        } else {
            format!("0x{}", object)
        };

        let abi = match contract.abi {
            Some(abi @ serde_json::Value::Array(_)) => abi,
            Some(_) => {
                return Err(Error::MalformedContract {
                    name: name.to_owned(),
                    reason: "the ABI is not an array",
                })
            }
            None => {
                return Err(Error::MalformedContract {
                    name: name.to_owned(),
                    reason: "the ABI is missing",
                })
            }
        };

        Ok(Self { abi, bytecode })
    }

    ///
    /// Serializes the artifact as JSON indented with four spaces.
    ///
    pub fn to_pretty_json(&self) -> anyhow::Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.bytecode.len() * 2);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(Self::INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        Ok(buffer)
    }

    ///
    /// Writes the artifact to `<directory>/<name>.json` and returns the file path.
    ///
    pub fn write_to_directory(&self, directory: &Path, name: &str) -> anyhow::Result<PathBuf> {
        let mut file_path = directory.to_owned();
        file_path.push(format!("{}.{}", name, Self::EXTENSION));

        let json = self.to_pretty_json()?;
        File::create(&file_path)
            .with_context(|| format!("File {:?} creating error", file_path))?
            .write_all(json.as_slice())
            .with_context(|| format!("File {:?} writing error", file_path))?;

        Ok(file_path)
    }
}
