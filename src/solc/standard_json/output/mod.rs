//!
//! The `solc --standard-json` output representation.
//!

pub mod contract;
pub mod error;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::artifact::Artifact;
use crate::error::Error;

use self::contract::Contract;
use self::error::Error as SolidityError;

///
/// The `solc --standard-json` output representation.
///
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Output {
    /// The file-contract map, ordered by the source unit and contract names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts: Option<BTreeMap<String, BTreeMap<String, Contract>>>,
    /// The compilation errors and warnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<SolidityError>>,
}

impl Output {
    ///
    /// Fails if the compiler has reported any errors, otherwise returns the warnings.
    ///
    pub fn check_errors(&self) -> Result<Vec<&SolidityError>, Error> {
        let messages = match self.errors.as_ref() {
            Some(messages) => messages,
            None => return Ok(Vec::new()),
        };

        let (errors, warnings): (Vec<&SolidityError>, Vec<&SolidityError>) =
            messages.iter().partition(|message| message.is_error());
        if !errors.is_empty() {
            return Err(Error::Solidity(errors.into_iter().cloned().collect()));
        }

        Ok(warnings)
    }

    ///
    /// Extracts the artifact of the contract `name`.
    ///
    /// The source units are visited in their name order, and the first one declaring the
    /// contract wins.
    ///
    pub fn try_into_artifact(self, name: &str) -> Result<Artifact, Error> {
        let files = match self.contracts {
            Some(files) if files.values().any(|contracts| !contracts.is_empty()) => files,
            _ => return Err(Error::NoContracts),
        };

        let contract = files
            .into_values()
            .find_map(|mut contracts| contracts.remove(name))
            .ok_or_else(|| Error::ContractNotFound(name.to_owned()))?;

        Artifact::try_from_contract(name, contract)
    }
}
