//!
//! The compiled source set.
//!

pub mod import;

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;

use crate::error::Error;
use crate::solc::standard_json::input::source::Source;

///
/// The source files read from the input directory, keyed by the source unit name.
///
#[derive(Debug, Clone)]
pub struct Sources {
    /// The input directory, which imports are resolved against.
    pub directory: PathBuf,
    /// The source unit name to source map.
    pub files: BTreeMap<String, Source>,
}

impl Sources {
    ///
    /// Reads every file of the `directory`, without descending into subdirectories.
    ///
    pub fn try_from_directory(directory: &Path) -> anyhow::Result<Self> {
        let entries = std::fs::read_dir(directory)
            .with_context(|| format!("Input directory {:?} reading error", directory))?;

        let mut files = BTreeMap::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Input directory {:?} reading error", directory))?
                .path();
            if !path.is_file() {
                continue;
            }

            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            let source = Source::try_from(path.as_path())?;
            files.insert(name, source);
        }

        if files.is_empty() {
            return Err(Error::NoSources(directory.to_string_lossy().to_string()).into());
        }

        Ok(Self {
            directory: directory.to_owned(),
            files,
        })
    }

    ///
    /// Adds the files imported by the sources, transitively, reading them from the input
    /// directory.
    ///
    pub fn resolve_imports(&mut self) -> anyhow::Result<()> {
        let mut queue: Vec<String> = self.files.keys().cloned().collect();

        while let Some(importer) = queue.pop() {
            let imports = match self.files.get(importer.as_str()) {
                Some(source) => import::scan(source.content.as_str()),
                None => continue,
            };

            for path in imports.into_iter() {
                let name = import::resolve(importer.as_str(), path.as_str());
                if self.files.contains_key(name.as_str()) {
                    continue;
                }

                let file_path = self.directory.join(name.as_str());
                if !file_path.is_file() {
                    return Err(Error::ImportNotFound {
                        importer,
                        path: name,
                    }
                    .into());
                }

                let source = Source::try_from(file_path.as_path())?;
                self.files.insert(name.clone(), source);
                queue.push(name);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::error::Error;

    use super::Sources;

    fn write(directory: &Path, name: &str, content: &str) {
        let path = directory.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Directory creating error");
        }
        std::fs::write(path, content).expect("File writing error");
    }

    #[test]
    fn ok_read_directory() {
        let directory = tempfile::tempdir().expect("Temporary directory creating error");
        write(directory.path(), "Campaign.sol", "contract Campaign {}");
        write(directory.path(), "Token.sol", "contract Token {}");
        write(directory.path(), "nested/Hidden.sol", "contract Hidden {}");

        let sources = Sources::try_from_directory(directory.path()).expect("Reading failed");

        assert_eq!(
            sources.files.keys().cloned().collect::<Vec<String>>(),
            vec!["Campaign.sol".to_owned(), "Token.sol".to_owned()]
        );
        assert_eq!(
            sources.files["Campaign.sol"].content,
            "contract Campaign {}"
        );
    }

    #[test]
    fn error_empty_directory() {
        let directory = tempfile::tempdir().expect("Temporary directory creating error");

        let error = Sources::try_from_directory(directory.path())
            .expect_err("Empty directory must fail");

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::NoSources(_))
        ));
    }

    #[test]
    fn error_missing_directory() {
        let directory = tempfile::tempdir().expect("Temporary directory creating error");

        assert!(Sources::try_from_directory(&directory.path().join("missing")).is_err());
    }

    #[test]
    fn ok_resolve_transitive_imports() {
        let directory = tempfile::tempdir().expect("Temporary directory creating error");
        write(
            directory.path(),
            "Campaign.sol",
            r#"import "./lib/Math.sol"; contract Campaign {}"#,
        );
        write(
            directory.path(),
            "lib/Math.sol",
            r#"import {Util} from "./Util.sol"; library Math {}"#,
        );
        write(directory.path(), "lib/Util.sol", "library Util {}");

        let mut sources = Sources::try_from_directory(directory.path()).expect("Reading failed");
        assert_eq!(sources.files.len(), 1);

        sources.resolve_imports().expect("Resolution failed");
        assert_eq!(
            sources.files.keys().cloned().collect::<Vec<String>>(),
            vec![
                "Campaign.sol".to_owned(),
                "lib/Math.sol".to_owned(),
                "lib/Util.sol".to_owned(),
            ]
        );
    }

    #[test]
    fn ok_import_already_present() {
        let directory = tempfile::tempdir().expect("Temporary directory creating error");
        write(
            directory.path(),
            "Campaign.sol",
            r#"import "./Factory.sol"; contract Campaign {}"#,
        );
        write(
            directory.path(),
            "Factory.sol",
            r#"import "./Campaign.sol"; contract Factory {}"#,
        );

        let mut sources = Sources::try_from_directory(directory.path()).expect("Reading failed");
        sources.resolve_imports().expect("Resolution failed");

        assert_eq!(sources.files.len(), 2);
    }

    #[test]
    fn error_missing_import() {
        let directory = tempfile::tempdir().expect("Temporary directory creating error");
        write(
            directory.path(),
            "Campaign.sol",
            r#"import "./Missing.sol"; contract Campaign {}"#,
        );

        let mut sources = Sources::try_from_directory(directory.path()).expect("Reading failed");
        let error = sources
            .resolve_imports()
            .expect_err("Missing import must fail");

        assert_eq!(
            error.downcast_ref::<Error>(),
            Some(&Error::ImportNotFound {
                importer: "Campaign.sol".to_owned(),
                path: "Missing.sol".to_owned(),
            })
        );
    }
}
