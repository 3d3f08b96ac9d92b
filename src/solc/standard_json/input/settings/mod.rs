//!
//! The `solc --standard-json` input settings representation.
//!

pub mod optimizer;
pub mod selection;

use serde::Deserialize;
use serde::Serialize;

use self::optimizer::Optimizer;
use self::selection::Selection;

///
/// The `solc --standard-json` input settings representation.
///
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The output selection filters.
    pub output_selection: serde_json::Value,
    /// The optimizer settings.
    pub optimizer: Optimizer,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(output_selection: serde_json::Value, optimizer_runs: usize) -> Self {
        Self {
            output_selection,
            optimizer: Optimizer::new(true, optimizer_runs),
        }
    }

    ///
    /// Generates the output selection pattern.
    ///
    /// Every contract of every file yields its ABI and bytecode.
    ///
    pub fn get_output_selection() -> serde_json::Value {
        let per_contract_selections = vec![Selection::ABI, Selection::BytecodeObject];

        serde_json::json!({
            "*": {
                "*": per_contract_selections,
            }
        })
    }
}
