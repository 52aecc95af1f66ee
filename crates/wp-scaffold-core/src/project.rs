//! Project configuration assembled from the collected answers
//!
//! [`ProjectConfig`] is built once per run and never changes afterwards. Its
//! serde representation (camelCase keys) is the data context every template
//! is rendered with.

use crate::error::{Result, ScaffoldError};
use crate::format;
use crate::validate;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Oldest WordPress release the generated code targets
pub const MIN_WP_VERSION: &str = "4.7.0";

/// Oldest PHP release the generated code targets
pub const MIN_PHP_VERSION: &str = "7.1";

pub const DEFAULT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Theme,
    Plugin,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Theme => "theme",
            ProjectType::Plugin => "plugin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "theme" | "t" => Some(ProjectType::Theme),
            "plugin" | "p" => Some(ProjectType::Plugin),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// License choices offered for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum License {
    Mit,
    Apache2,
    Gpl3,
}

impl License {
    pub const ALL: [License; 3] = [License::Mit, License::Apache2, License::Gpl3];

    /// SPDX-ish identifier, also selects the license template
    pub fn kind(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPLv3",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            License::Mit => "https://opensource.org/licenses/MIT",
            License::Apache2 => "https://opensource.org/licenses/Apache-2.0",
            License::Gpl3 => "https://opensource.org/licenses/GPL-3.0",
        }
    }

}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl Serialize for License {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("License", 2)?;
        state.serialize_field("type", self.kind())?;
        state.serialize_field("url", self.url())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub url: String,
    /// `name`, or `name <email>` when an email was given
    pub full: String,
}

impl Author {
    pub fn new(name: &str, email: &str, url: &str) -> Self {
        let full = if email.is_empty() {
            name.to_string()
        } else {
            format!("{} <{}>", name, email)
        };
        Self {
            name: name.to_string(),
            email: email.to_string(),
            url: url.to_string(),
            full,
        }
    }
}

/// Optional parts of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Features {
    /// PHP CodeSniffer with the WordPress coding standards
    pub phpcs: bool,
    pub git: bool,
    /// Translation support: `languages/` plus a generated `.pot` catalog
    pub i18n: bool,
    pub readme: bool,
    pub editorconfig: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            phpcs: true,
            git: true,
            i18n: true,
            readme: true,
            editorconfig: true,
        }
    }
}

/// Raw answers, as handed over by the prompts (or by tests)
#[derive(Debug, Clone)]
pub struct ProjectAnswers {
    pub project_type: ProjectType,
    pub name: String,
    pub description: String,
    pub version: String,
    pub tags: Vec<String>,
    pub uri: String,
    pub author_name: String,
    pub author_email: String,
    pub author_url: String,
    pub license: Option<License>,
    pub features: Features,
}

impl ProjectAnswers {
    /// Run every acceptance predicate; the first failure wins
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, std::result::Result<(), String>); 6] = [
            ("project name", validate::project_name(&self.name)),
            ("version", validate::version(&self.version)),
            ("project URI", validate::optional_url(&self.uri)),
            ("author name", validate::author_name(&self.author_name)),
            ("author email", validate::optional_email(&self.author_email)),
            ("author URL", validate::optional_url(&self.author_url)),
        ];
        for (field, outcome) in checks {
            outcome.map_err(|message| ScaffoldError::validation(field, message))?;
        }
        Ok(())
    }
}

/// Identifiers derived from the project name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifiers {
    /// Dash slug; also the output folder name and the text domain
    pub project_package_name: String,
    /// Underscore slug used for PHP function prefixes
    pub project_prefix: String,
    pub project_namespace: String,
    pub short_prefix: String,
    pub project_text_domain: String,
}

impl Identifiers {
    pub fn derive(name: &str) -> Self {
        let package = format::to_dash_slug(name);
        Self {
            project_prefix: format::to_underscore_slug(name),
            project_namespace: format::to_namespace(name),
            short_prefix: format::to_prefix(name),
            project_text_domain: package.clone(),
            project_package_name: package,
        }
    }
}

/// Fully assembled configuration, read-only after construction
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_type: ProjectType,
    pub project_name: String,
    pub project_description: String,
    pub project_version: String,
    /// Comma separated, empty when skipped
    pub project_tags: String,
    pub project_uri: String,
    pub project_author: Author,
    pub project_license: Option<License>,
    /// Composer vendor name derived from the author
    pub project_vendor: String,
    pub project_min_wp_version: &'static str,
    pub project_min_php_version: &'static str,
    #[serde(flatten)]
    pub identifiers: Identifiers,
    #[serde(flatten)]
    pub features: Features,
    pub year: i32,
    /// Creation time of the run, also used for the catalog header
    #[serde(skip)]
    pub created: DateTime<Utc>,
    #[serde(skip)]
    pub full_project_path: PathBuf,
}

impl ProjectConfig {
    /// Validate the answers and derive everything else
    ///
    /// `cwd` is the directory the project folder is created in. `created` is
    /// frozen into the config (with its year) so repeated runs stay identical.
    pub fn from_answers(answers: ProjectAnswers, cwd: &Path, created: DateTime<Utc>) -> Result<Self> {
        answers.validate()?;

        let identifiers = Identifiers::derive(&answers.name);
        let full_project_path = cwd.join(&identifiers.project_package_name);
        let tags: Vec<String> = answers
            .tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            project_type: answers.project_type,
            project_vendor: format::to_dash_slug(&answers.author_name),
            project_author: Author::new(
                &answers.author_name,
                &answers.author_email,
                &answers.author_url,
            ),
            project_name: answers.name,
            project_description: answers.description,
            project_version: answers.version,
            project_tags: tags.join(", "),
            project_uri: answers.uri,
            project_license: answers.license,
            project_min_wp_version: MIN_WP_VERSION,
            project_min_php_version: MIN_PHP_VERSION,
            identifiers,
            features: answers.features,
            year: created.year(),
            created,
            full_project_path,
        })
    }

    /// Folder name of the project; the same slug as the package name
    pub fn folder_name(&self) -> &str {
        &self.identifiers.project_package_name
    }

    pub fn package_name(&self) -> &str {
        &self.identifiers.project_package_name
    }

    pub fn text_domain(&self) -> &str {
        &self.identifiers.project_text_domain
    }

    /// Label/value rows for the confirmation summary
    pub fn summary(&self) -> Vec<(String, String)> {
        let kind = self.project_type.as_str();
        let mut rows = vec![(format!("{} name", kind), self.project_name.clone())];

        if !self.project_description.is_empty() {
            rows.push(("description".to_string(), self.project_description.clone()));
        }
        rows.push(("version".to_string(), self.project_version.clone()));
        if !self.project_uri.is_empty() {
            rows.push((format!("{} uri", kind), self.project_uri.clone()));
        }
        if !self.project_tags.is_empty() {
            rows.push(("tags".to_string(), self.project_tags.clone()));
        }
        if let Some(license) = self.project_license {
            rows.push(("license".to_string(), license.kind().to_string()));
        }
        rows.push(("author".to_string(), self.project_author.full.clone()));
        if !self.project_author.url.is_empty() {
            rows.push(("url".to_string(), self.project_author.url.clone()));
        }

        let flags = [
            ("PHP CodeSniffer", self.features.phpcs),
            ("i18n support", self.features.i18n),
            ("git version control", self.features.git),
            ("README", self.features.readme),
            ("EditorConfig", self.features.editorconfig),
        ];
        for (label, enabled) in flags {
            if enabled {
                rows.push((label.to_string(), "Yes".to_string()));
            }
        }

        rows.push(("package".to_string(), self.identifiers.project_package_name.clone()));
        rows.push(("namespace".to_string(), self.identifiers.project_namespace.clone()));
        rows.push(("prefix".to_string(), self.identifiers.project_prefix.clone()));
        if !self.identifiers.short_prefix.is_empty() {
            rows.push(("short prefix".to_string(), self.identifiers.short_prefix.clone()));
        }
        rows
    }
}
