//! Template identifiers, sources and rendering
//!
//! This module provides:
//! - [`TemplateId`] / [`BundleId`]: the closed set of templates a plan can reference
//! - [`TemplateStore`]: the rendering capability the materializer depends on
//! - [`TemplateRenderer`]: the Handlebars-backed store, reading templates either
//!   from the binary ([`embedded`]) or from a local directory
//! - Local template directory manifest and version compatibility checking
//!
//! Templates see the serialized [`ProjectConfig`] (camelCase keys such as
//! `{{projectName}}`, `{{projectNamespace}}` or `{{projectLicense.type}}`).

pub mod embedded;
pub mod manifest;
pub mod renderer;

use crate::error::Result;
use crate::project::{License, ProjectConfig};
use std::path::PathBuf;

pub use manifest::TemplateManifest;
pub use renderer::{TemplateRenderer, TemplateSource};

/// A single renderable template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    ThemeFilters,
    ThemeHelpers,
    ThemeSetup,
    ThemeShims,
    ThemeBackwardsCompatibility,
    Theme404,
    ThemeArchive,
    ThemeFooter,
    ThemeFunctions,
    ThemeHeader,
    ThemeIndex,
    ThemeSearch,
    ThemeStyle,
    PluginMain,
    PluginBackwardsCompatibility,
    PluginSetup,
    PluginHelpers,
    License(License),
    Readme,
    Phpcs,
    EditorSettings,
    GitAttributes,
    GitIgnore,
    GitKeep,
    ComposerJson,
}

impl TemplateId {
    /// Path of the template relative to the template root
    pub fn path(&self) -> &'static str {
        match self {
            TemplateId::ThemeFilters => "theme/filters.php.hbs",
            TemplateId::ThemeHelpers => "theme/helpers.php.hbs",
            TemplateId::ThemeSetup => "theme/setup.php.hbs",
            TemplateId::ThemeShims => "theme/shims.php.hbs",
            TemplateId::ThemeBackwardsCompatibility => "theme/backwards-compatibility.php.hbs",
            TemplateId::Theme404 => "theme/404.php.hbs",
            TemplateId::ThemeArchive => "theme/archive.php.hbs",
            TemplateId::ThemeFooter => "theme/footer.php.hbs",
            TemplateId::ThemeFunctions => "theme/functions.php.hbs",
            TemplateId::ThemeHeader => "theme/header.php.hbs",
            TemplateId::ThemeIndex => "theme/index.php.hbs",
            TemplateId::ThemeSearch => "theme/search.php.hbs",
            TemplateId::ThemeStyle => "theme/style.css.hbs",
            TemplateId::PluginMain => "plugin/plugin.php.hbs",
            TemplateId::PluginBackwardsCompatibility => "plugin/backwards-compatibility.php.hbs",
            TemplateId::PluginSetup => "plugin/setup.php.hbs",
            TemplateId::PluginHelpers => "plugin/helpers.php.hbs",
            TemplateId::License(License::Mit) => "license/MIT.txt.hbs",
            TemplateId::License(License::Apache2) => "license/Apache-2.0.txt.hbs",
            TemplateId::License(License::Gpl3) => "license/GPLv3.txt.hbs",
            TemplateId::Readme => "readme/README.md.hbs",
            TemplateId::Phpcs => "phpcs/phpcs.xml.hbs",
            TemplateId::EditorSettings => "settings-json/settings.json.hbs",
            TemplateId::GitAttributes => "git/gitattributes.hbs",
            TemplateId::GitIgnore => "git/gitignore.hbs",
            TemplateId::GitKeep => "git/gitkeep.hbs",
            TemplateId::ComposerJson => "composer-json/composer.json.hbs",
        }
    }
}

/// A set of static files copied verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleId {
    EditorConfig,
}

impl BundleId {
    /// Directory of the bundle relative to the template root
    pub fn dir(&self) -> &'static str {
        match self {
            BundleId::EditorConfig => "editor-config",
        }
    }
}

/// One file of a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    /// Path relative to the bundle directory
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

/// Resolves templates and bundles for the materializer
pub trait TemplateStore {
    /// Render a template with the project configuration as context
    fn render(&self, id: TemplateId, config: &ProjectConfig) -> Result<String>;

    /// Files of a static bundle, in a stable order
    fn bundle(&self, id: BundleId) -> Result<Vec<BundleFile>>;
}
