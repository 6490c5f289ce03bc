//! Artifact naming pattern
//!
//! Artifacts are named `<app>-<version>.<extension>` by the release process,
//! e.g. `myapp-1.2.3.war`. This is the only contract between the build and
//! the deployment manager.

use std::path::Path;

use regex::Regex;

use crate::error::{DeployError, DeployResult};

/// Matcher for `<app>-<version>.<extension>` file names
#[derive(Debug, Clone)]
pub struct ArtifactPattern {
    app: String,
    extension: String,
    regex: Regex,
}

impl ArtifactPattern {
    /// Build the pattern for an application and archive extension.
    ///
    /// A leading dot on `extension` is ignored (`".war"` == `"war"`).
    pub fn new(app: impl Into<String>, extension: impl Into<String>) -> DeployResult<Self> {
        let app = app.into();
        let extension = extension.into().trim_start_matches('.').to_string();
        let source = format!(
            r"^{}-(.+)\.{}$",
            regex::escape(&app),
            regex::escape(&extension)
        );
        let regex = Regex::new(&source).map_err(|e| DeployError::Config {
            file: None,
            message: format!("cannot build artifact pattern for '{}': {}", app, e),
        })?;
        Ok(Self {
            app,
            extension,
            regex,
        })
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Shell glob equivalent (`myapp-*.war`), used in operator output
    pub fn glob(&self) -> String {
        format!("{}-*.{}", self.app, self.extension)
    }

    /// Whether the file name (or the last component of a path) is an artifact
    pub fn matches(&self, filename: &str) -> bool {
        self.convert_to_version(filename).is_some()
    }

    /// Extract the version from an artifact file name.
    ///
    /// Accepts a bare file name or a path; only the last component is matched.
    /// Returns `None` for names that do not follow the convention.
    pub fn convert_to_version<'a>(&self, filename: &'a str) -> Option<&'a str> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(filename);
        self.regex
            .captures(name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl PartialEq for ArtifactPattern {
    fn eq(&self, other: &Self) -> bool {
        self.app == other.app && self.extension == other.extension
    }
}

impl Eq for ArtifactPattern {}
