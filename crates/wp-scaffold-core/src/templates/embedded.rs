//! Templates compiled into the binary
//!
//! The `include_str!` paths are relative to this file and checked at
//! compile time. Keep them in sync with [`TemplateId::path`].

use super::{BundleId, TemplateId};
use crate::project::License;

/// Source text of an embedded template
pub fn template(id: TemplateId) -> &'static str {
    match id {
        TemplateId::ThemeFilters => include_str!("../../templates/theme/filters.php.hbs"),
        TemplateId::ThemeHelpers => include_str!("../../templates/theme/helpers.php.hbs"),
        TemplateId::ThemeSetup => include_str!("../../templates/theme/setup.php.hbs"),
        TemplateId::ThemeShims => include_str!("../../templates/theme/shims.php.hbs"),
        TemplateId::ThemeBackwardsCompatibility => {
            include_str!("../../templates/theme/backwards-compatibility.php.hbs")
        }
        TemplateId::Theme404 => include_str!("../../templates/theme/404.php.hbs"),
        TemplateId::ThemeArchive => include_str!("../../templates/theme/archive.php.hbs"),
        TemplateId::ThemeFooter => include_str!("../../templates/theme/footer.php.hbs"),
        TemplateId::ThemeFunctions => include_str!("../../templates/theme/functions.php.hbs"),
        TemplateId::ThemeHeader => include_str!("../../templates/theme/header.php.hbs"),
        TemplateId::ThemeIndex => include_str!("../../templates/theme/index.php.hbs"),
        TemplateId::ThemeSearch => include_str!("../../templates/theme/search.php.hbs"),
        TemplateId::ThemeStyle => include_str!("../../templates/theme/style.css.hbs"),
        TemplateId::PluginMain => include_str!("../../templates/plugin/plugin.php.hbs"),
        TemplateId::PluginBackwardsCompatibility => {
            include_str!("../../templates/plugin/backwards-compatibility.php.hbs")
        }
        TemplateId::PluginSetup => include_str!("../../templates/plugin/setup.php.hbs"),
        TemplateId::PluginHelpers => include_str!("../../templates/plugin/helpers.php.hbs"),
        TemplateId::License(License::Mit) => include_str!("../../templates/license/MIT.txt.hbs"),
        TemplateId::License(License::Apache2) => {
            include_str!("../../templates/license/Apache-2.0.txt.hbs")
        }
        TemplateId::License(License::Gpl3) => {
            include_str!("../../templates/license/GPLv3.txt.hbs")
        }
        TemplateId::Readme => include_str!("../../templates/readme/README.md.hbs"),
        TemplateId::Phpcs => include_str!("../../templates/phpcs/phpcs.xml.hbs"),
        TemplateId::EditorSettings => {
            include_str!("../../templates/settings-json/settings.json.hbs")
        }
        TemplateId::GitAttributes => include_str!("../../templates/git/gitattributes.hbs"),
        TemplateId::GitIgnore => include_str!("../../templates/git/gitignore.hbs"),
        TemplateId::GitKeep => include_str!("../../templates/git/gitkeep.hbs"),
        TemplateId::ComposerJson => {
            include_str!("../../templates/composer-json/composer.json.hbs")
        }
    }
}

const EDITOR_CONFIG: &[(&str, &[u8])] = &[(
    ".editorconfig",
    include_bytes!("../../templates/editor-config/.editorconfig"),
)];

/// Files of an embedded bundle as (relative path, contents)
pub fn bundle(id: BundleId) -> &'static [(&'static str, &'static [u8])] {
    match id {
        BundleId::EditorConfig => EDITOR_CONFIG,
    }
}
