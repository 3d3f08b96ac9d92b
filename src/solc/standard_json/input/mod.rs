//!
//! The `solc --standard-json` input representation.
//!

pub mod language;
pub mod settings;
pub mod source;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::language::Language;
use self::settings::Settings;
use self::source::Source;

///
/// The `solc --standard-json` input representation.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The input language.
    pub language: Language,
    /// The input source code files map, ordered by the source unit name.
    pub sources: BTreeMap<String, Source>,
    /// The compiler settings.
    pub settings: Settings,
}

impl Input {
    ///
    /// A shortcut constructor.
    ///
    /// Requests the ABI and bytecode of every contract with the optimizer enabled.
    ///
    pub fn new(sources: BTreeMap<String, Source>, optimizer_runs: usize) -> Self {
        Self {
            language: Language::Solidity,
            sources,
            settings: Settings::new(Settings::get_output_selection(), optimizer_runs),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::source::Source;
    use super::Input;

    #[test]
    fn ok_serialize() {
        let mut sources = BTreeMap::new();
        sources.insert(
            "Campaign.sol".to_owned(),
            Source::from("contract Campaign {}".to_owned()),
        );

        let input = Input::new(sources, 29);
        let json = serde_json::to_value(&input).expect("Serialization failed");

        assert_eq!(
            json,
            serde_json::json!({
                "language": "Solidity",
                "sources": {
                    "Campaign.sol": { "content": "contract Campaign {}" }
                },
                "settings": {
                    "outputSelection": {
                        "*": { "*": ["abi", "evm.bytecode.object"] }
                    },
                    "optimizer": { "enabled": true, "runs": 29 }
                }
            })
        );
    }

    #[test]
    fn ok_sources_ordered() {
        let mut sources = BTreeMap::new();
        sources.insert("b.sol".to_owned(), Source::from(String::new()));
        sources.insert("a.sol".to_owned(), Source::from(String::new()));

        let input = Input::new(sources, 1);
        let json = serde_json::to_string(&input).expect("Serialization failed");

        let a = json.find("a.sol").expect("Always exists");
        let b = json.find("b.sol").expect("Always exists");
        assert!(a < b);
    }
}
