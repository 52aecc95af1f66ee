//! Template directory manifest (`template.yaml`)

use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MANIFEST_FILE: &str = "template.yaml";

/// Shown when a template directory needs a newer `wp-create`
pub const UPGRADE_COMMAND: &str = "cargo install wp-create --force";

/// Describes a template directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Display name of the template set
    pub name: String,

    /// Description of what the template set provides
    #[serde(default)]
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,
}

impl TemplateManifest {
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse template manifest")
    }

    /// Read `template.yaml` from a template directory; a directory without one is fine
    pub fn load(template_dir: &Path) -> Result<Option<Self>> {
        let manifest_path = template_dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        Self::parse(&content).map(Some)
    }

    /// The `wp-create` version these templates were written for
    pub fn required_version(&self) -> Option<Version> {
        parse_semver(&self.version)
    }

    /// Warning for a CLI older than the templates require
    ///
    /// Versions that are not semver (on either side) never warn.
    pub fn compatibility_warning(&self, cli_version: &str) -> Option<String> {
        let required = self.required_version()?;
        let running = parse_semver(cli_version)?;
        if running >= required {
            return None;
        }
        Some(format!(
            "Template directory \"{}\" expects wp-create {} or newer, but {} is running. Upgrade with `{}`.",
            self.name, required, running, UPGRADE_COMMAND
        ))
    }
}

fn parse_semver(value: &str) -> Option<Version> {
    let value = value.trim();
    Version::parse(value.strip_prefix('v').unwrap_or(value)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = TemplateManifest::parse(
            "name: Starter\ndescription: Basic skeletons\nversion: 0.2.0\n",
        )
        .unwrap();
        assert_eq!(manifest.name, "Starter");
        assert_eq!(manifest.description, "Basic skeletons");
        assert_eq!(manifest.version, "0.2.0");
    }

    #[test]
    fn test_description_is_optional() {
        let manifest = TemplateManifest::parse("name: Starter\nversion: 0.2.0\n").unwrap();
        assert!(manifest.description.is_empty());
    }

    #[test]
    fn test_missing_version_is_an_error() {
        assert!(TemplateManifest::parse("name: Starter\n").is_err());
    }

    #[test]
    fn test_embedded_manifest_parses() {
        let manifest =
            TemplateManifest::parse(include_str!("../../templates/template.yaml")).unwrap();
        assert!(semver::Version::parse(&manifest.version).is_ok());
    }

    #[test]
    fn test_load_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TemplateManifest::load(dir.path()).unwrap().is_none());
    }

    fn manifest(version: &str) -> TemplateManifest {
        TemplateManifest {
            name: "Agency starter".to_string(),
            description: String::new(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_newer_templates_warn() {
        let warning = manifest("0.3.0").compatibility_warning("0.1.0").unwrap();
        assert!(warning.contains("\"Agency starter\""));
        assert!(warning.contains("wp-create 0.3.0 or newer, but 0.1.0 is running"));
        assert!(warning.ends_with(&format!("`{}`.", UPGRADE_COMMAND)));
    }

    #[test]
    fn test_matching_or_older_templates_are_silent() {
        assert!(manifest("0.1.0").compatibility_warning("0.1.0").is_none());
        assert!(manifest("v0.1.0").compatibility_warning("0.4.2").is_none());
    }

    #[test]
    fn test_prerelease_cli_is_older_than_release() {
        assert!(manifest("0.2.0").compatibility_warning("0.2.0-beta.1").is_some());
    }

    #[test]
    fn test_non_semver_versions_never_warn() {
        assert!(manifest("latest").required_version().is_none());
        assert!(manifest("latest").compatibility_warning("0.1.0").is_none());
        assert!(manifest("9.0.0").compatibility_warning("dev").is_none());
    }

    #[test]
    fn test_load_with_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "name: Local\nversion: 9.0.0\n").unwrap();
        let manifest = TemplateManifest::load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.name, "Local");
    }
}
