//!
//! The Solidity import directive scanner.
//!

use once_cell::sync::Lazy;
use regex::Regex;

/// Comments, string literals and import directives, matched left to right. A directive is
/// only captured outside comments and string literals.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)/\*.*?\*/|//[^\n]*|\bimport\s+(?:[^;"']*?\s*\bfrom\s*)?["']([^"'\n]+)["']|"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#,
    )
    .expect("Always valid")
});

///
/// Returns the import paths of the source code, in the order of appearance.
///
pub fn scan(content: &str) -> Vec<String> {
    TOKEN
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|path| path.as_str().to_owned())
        .collect()
}

///
/// Resolves the import `path` found in the source unit `importer`.
///
/// Paths starting with `./` or `../` are relative to the importer's directory, the others
/// are source unit names as is.
///
pub fn resolve(importer: &str, path: &str) -> String {
    if !path.starts_with("./") && !path.starts_with("../") {
        return path.to_owned();
    }

    let mut components: Vec<&str> = importer.split('/').collect();
    components.pop();
    for component in path.split('/') {
        match component {
            "." | "" => {}
            ".." => match components.last() {
                Some(&last) if last != ".." => {
                    components.pop();
                }
                _ => components.push(".."),
            },
            component => components.push(component),
        }
    }
    components.join("/")
}

#[cfg(test)]
mod tests {
    #[test]
    fn ok_scan_all_forms() {
        let input = r#"
            pragma solidity ^0.8.9;
            import "./Plain.sol";
            import 'Single.sol' as Single;
            import * as Wildcard from "./Wildcard.sol";
            import {Request, Campaign as C} from "../lib/Symbols.sol";
            contract Campaign {}
        "#;

        assert_eq!(
            super::scan(input),
            vec![
                "./Plain.sol".to_owned(),
                "Single.sol".to_owned(),
                "./Wildcard.sol".to_owned(),
                "../lib/Symbols.sol".to_owned(),
            ]
        );
    }

    #[test]
    fn ok_scan_ignores_comments() {
        let input = r#"
            // import "./Line.sol";
            /*
             * import "./Block.sol";
             */
            import "./Real.sol";
        "#;

        assert_eq!(super::scan(input), vec!["./Real.sol".to_owned()]);
    }

    #[test]
    fn ok_scan_ignores_strings() {
        let input = r#"
            import "./Real.sol";
            contract C {
                string constant HINT = 'import "./Quoted.sol";';
                function f() public {
                    revert("import 'Token.sol' first");
                }
                function g() public {
                    revert("escaped \" import 'Escaped.sol'");
                }
            }
        "#;

        assert_eq!(super::scan(input), vec!["./Real.sol".to_owned()]);
    }

    #[test]
    fn ok_scan_no_imports() {
        assert!(super::scan("contract Campaign { uint important; }").is_empty());
    }

    #[test]
    fn ok_resolve() {
        assert_eq!(super::resolve("Campaign.sol", "./Lib.sol"), "Lib.sol");
        assert_eq!(super::resolve("lib/A.sol", "./B.sol"), "lib/B.sol");
        assert_eq!(super::resolve("lib/A.sol", "../C.sol"), "C.sol");
        assert_eq!(super::resolve("Campaign.sol", "Lib.sol"), "Lib.sol");
        assert_eq!(super::resolve("Campaign.sol", "../Outside.sol"), "../Outside.sol");
    }
}
