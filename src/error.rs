//!
//! The artifact builder error.
//!

use crate::solc::standard_json::output::error::Error as SolidityError;

///
/// The artifact builder error.
///
#[derive(Debug)]
pub enum Error {
    /// The input directory contains no source files.
    NoSources(String),
    /// An imported file cannot be found in the input directory.
    ImportNotFound {
        /// The source unit containing the directive.
        importer: String,
        /// The resolved import path.
        path: String,
    },
    /// The compiler has reported errors.
    Solidity(Vec<SolidityError>),
    /// The compiler output contains no contracts.
    NoContracts,
    /// The contract cannot be found.
    ContractNotFound(String),
    /// The contract output is missing a required field.
    MalformedContract {
        /// The contract name.
        name: String,
        /// The description of the defect.
        reason: &'static str,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSources(directory) => {
                write!(f, "No source files found in `{}`", directory)
            }
            Self::ImportNotFound { importer, path } => {
                write!(f, "Import `{}` of `{}` not found", path, importer)
            }
            Self::Solidity(errors) => {
                writeln!(f, "Compiler has reported {} error(s):", errors.len())?;
                for error in errors.iter() {
                    writeln!(f, "{}", error)?;
                }
                Ok(())
            }
            Self::NoContracts => write!(f, "Contracts not found in the compiler output"),
            Self::ContractNotFound(name) => {
                write!(f, "Contract `{}` not found in the compiler output", name)
            }
            Self::MalformedContract { name, reason } => {
                write!(f, "Contract `{}` output is malformed: {}", name, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

impl PartialEq<Self> for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoSources(first), Self::NoSources(second)) => first == second,
            (
                Self::ImportNotFound {
                    importer: first_importer,
                    path: first_path,
                },
                Self::ImportNotFound {
                    importer: second_importer,
                    path: second_path,
                },
            ) => first_importer == second_importer && first_path == second_path,
            (Self::Solidity(first), Self::Solidity(second)) => first == second,
            (Self::NoContracts, Self::NoContracts) => true,
            (Self::ContractNotFound(first), Self::ContractNotFound(second)) => first == second,
            (
                Self::MalformedContract {
                    name: first_name,
                    reason: first_reason,
                },
                Self::MalformedContract {
                    name: second_name,
                    reason: second_reason,
                },
            ) => first_name == second_name && first_reason == second_reason,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::solc::standard_json::output::error::Error as SolidityError;

    use super::Error;

    fn solidity_error(message: &str) -> SolidityError {
        serde_json::from_value(serde_json::json!({
            "component": "general",
            "formattedMessage": format!("TypeError: {}\n", message),
            "message": message,
            "severity": "error",
            "type": "TypeError"
        }))
        .expect("Deserialization failed")
    }

    #[test]
    fn ok_solidity_errors_equal() {
        assert_eq!(
            Error::Solidity(vec![solidity_error("Undeclared identifier.")]),
            Error::Solidity(vec![solidity_error("Undeclared identifier.")])
        );
    }

    #[test]
    fn ok_solidity_errors_differ() {
        assert_ne!(
            Error::Solidity(vec![solidity_error("Undeclared identifier.")]),
            Error::Solidity(vec![solidity_error("Type mismatch.")])
        );
        assert_ne!(Error::Solidity(vec![]), Error::NoContracts);
    }

    #[test]
    fn ok_display_lists_messages() {
        let error = Error::Solidity(vec![
            solidity_error("Undeclared identifier."),
            solidity_error("Type mismatch."),
        ]);

        assert_eq!(
            error.to_string(),
            "Compiler has reported 2 error(s):\nTypeError: Undeclared identifier.\nTypeError: Type mismatch.\n"
        );
    }
}
