//! Scaffold planning
//!
//! [`plan`] turns a [`ProjectConfig`] into the ordered list of steps that
//! produce the project. Nothing here touches the filesystem; all paths are
//! relative to the project root.

use crate::project::{ProjectConfig, ProjectType};
use crate::templates::{BundleId, TemplateId};
use std::path::{Path, PathBuf};

pub const INC_DIR: &str = "inc";
pub const TEMPLATE_PARTS_DIR: &str = "template-parts";
pub const EDITOR_SETTINGS_DIR: &str = ".vscode";
pub const LANGUAGES_DIR: &str = "languages";

/// One unit of work for the materializer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    CreateDirectory(PathBuf),
    RenderFile {
        template: TemplateId,
        destination: PathBuf,
    },
    CopyTree {
        bundle: BundleId,
        destination: PathBuf,
    },
}

impl Step {
    fn render(template: TemplateId, destination: impl Into<PathBuf>) -> Self {
        Step::RenderFile {
            template,
            destination: destination.into(),
        }
    }

    fn dir(path: impl Into<PathBuf>) -> Self {
        Step::CreateDirectory(path.into())
    }

    /// Path the step writes to, relative to the project root
    pub fn destination(&self) -> &Path {
        match self {
            Step::CreateDirectory(path) => path,
            Step::RenderFile { destination, .. } | Step::CopyTree { destination, .. } => {
                destination
            }
        }
    }
}

const THEME_FILES: [(TemplateId, &str); 13] = [
    (TemplateId::ThemeFilters, "inc/filters.php"),
    (TemplateId::ThemeHelpers, "inc/helpers.php"),
    (TemplateId::ThemeSetup, "inc/setup.php"),
    (TemplateId::ThemeShims, "inc/shims.php"),
    (TemplateId::ThemeBackwardsCompatibility, "backwards-compatibility.php"),
    (TemplateId::Theme404, "404.php"),
    (TemplateId::ThemeArchive, "archive.php"),
    (TemplateId::ThemeFooter, "footer.php"),
    (TemplateId::ThemeFunctions, "functions.php"),
    (TemplateId::ThemeHeader, "header.php"),
    (TemplateId::ThemeIndex, "index.php"),
    (TemplateId::ThemeSearch, "search.php"),
    (TemplateId::ThemeStyle, "style.css"),
];

/// Build the ordered step list for a project
///
/// Later steps may rely on directories created by earlier ones, so the order
/// is part of the contract.
pub fn plan(config: &ProjectConfig) -> Vec<Step> {
    let features = &config.features;
    let mut steps = vec![Step::dir(""), Step::dir(INC_DIR)];

    match config.project_type {
        ProjectType::Theme => {
            steps.extend(
                THEME_FILES
                    .iter()
                    .map(|(template, destination)| Step::render(*template, *destination)),
            );
            steps.push(Step::dir(TEMPLATE_PARTS_DIR));
        }
        ProjectType::Plugin => {
            steps.push(Step::render(
                TemplateId::PluginMain,
                format!("{}.php", config.package_name()),
            ));
            steps.push(Step::render(
                TemplateId::PluginBackwardsCompatibility,
                "backwards-compatibility.php",
            ));
            steps.push(Step::render(TemplateId::PluginSetup, "inc/setup.php"));
            steps.push(Step::render(TemplateId::PluginHelpers, "inc/helpers.php"));
        }
    }

    if let Some(license) = config.project_license {
        steps.push(Step::render(TemplateId::License(license), "LICENSE"));
    }

    if features.editorconfig {
        steps.push(Step::CopyTree {
            bundle: BundleId::EditorConfig,
            destination: PathBuf::new(),
        });
    }

    if features.readme {
        steps.push(Step::render(TemplateId::Readme, "README.md"));
    }

    if features.phpcs {
        steps.push(Step::dir(EDITOR_SETTINGS_DIR));
        steps.push(Step::render(TemplateId::EditorSettings, ".vscode/settings.json"));
        steps.push(Step::render(TemplateId::Phpcs, "phpcs.xml"));
    }

    if features.git {
        steps.push(Step::render(TemplateId::GitAttributes, ".gitattributes"));
        steps.push(Step::render(TemplateId::GitIgnore, ".gitignore"));
        if config.project_type == ProjectType::Theme {
            steps.push(Step::render(TemplateId::GitKeep, "template-parts/.gitkeep"));
        }
    }

    if features.i18n {
        steps.push(Step::dir(LANGUAGES_DIR));
    }

    steps.push(Step::render(TemplateId::ComposerJson, "composer.json"));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::tests::{sample_answers, sample_config, sample_created};
    use crate::project::{Features, License};
    use std::path::Component;

    fn rendered(steps: &[Step]) -> Vec<String> {
        steps
            .iter()
            .filter_map(|s| match s {
                Step::RenderFile { destination, .. } => {
                    Some(destination.to_string_lossy().into_owned())
                }
                _ => None,
            })
            .collect()
    }

    fn config_with(project_type: ProjectType, features: Features, license: Option<License>) -> ProjectConfig {
        let mut answers = sample_answers(project_type);
        answers.features = features;
        answers.license = license;
        ProjectConfig::from_answers(answers, Path::new("/work"), sample_created()).unwrap()
    }

    const NO_FEATURES: Features = Features {
        phpcs: false,
        git: false,
        i18n: false,
        readme: false,
        editorconfig: false,
    };

    #[test]
    fn test_minimal_theme() {
        let steps = plan(&config_with(ProjectType::Theme, NO_FEATURES, None));
        assert_eq!(steps[0], Step::CreateDirectory(PathBuf::new()));
        assert_eq!(steps[1], Step::CreateDirectory(PathBuf::from("inc")));
        assert_eq!(
            rendered(&steps),
            vec![
                "inc/filters.php",
                "inc/helpers.php",
                "inc/setup.php",
                "inc/shims.php",
                "backwards-compatibility.php",
                "404.php",
                "archive.php",
                "footer.php",
                "functions.php",
                "header.php",
                "index.php",
                "search.php",
                "style.css",
                "composer.json",
            ]
        );
        assert!(steps.contains(&Step::CreateDirectory(PathBuf::from("template-parts"))));
    }

    #[test]
    fn test_minimal_plugin() {
        let steps = plan(&config_with(ProjectType::Plugin, NO_FEATURES, None));
        assert_eq!(
            rendered(&steps),
            vec![
                "my-cool-theme.php",
                "backwards-compatibility.php",
                "inc/setup.php",
                "inc/helpers.php",
                "composer.json",
            ]
        );
        assert!(!steps.contains(&Step::CreateDirectory(PathBuf::from("template-parts"))));
    }

    #[test]
    fn test_full_theme_order() {
        let steps = plan(&sample_config(ProjectType::Theme, Path::new("/work")));
        let tail: Vec<_> = steps.iter().skip(2 + THEME_FILES.len() + 1).cloned().collect();
        assert_eq!(
            tail,
            vec![
                Step::render(TemplateId::License(License::Mit), "LICENSE"),
                Step::CopyTree {
                    bundle: BundleId::EditorConfig,
                    destination: PathBuf::new()
                },
                Step::render(TemplateId::Readme, "README.md"),
                Step::dir(".vscode"),
                Step::render(TemplateId::EditorSettings, ".vscode/settings.json"),
                Step::render(TemplateId::Phpcs, "phpcs.xml"),
                Step::render(TemplateId::GitAttributes, ".gitattributes"),
                Step::render(TemplateId::GitIgnore, ".gitignore"),
                Step::render(TemplateId::GitKeep, "template-parts/.gitkeep"),
                Step::dir("languages"),
                Step::render(TemplateId::ComposerJson, "composer.json"),
            ]
        );
    }

    #[test]
    fn test_plugin_git_has_no_gitkeep() {
        let steps = plan(&sample_config(ProjectType::Plugin, Path::new("/work")));
        let files = rendered(&steps);
        assert!(files.contains(&".gitignore".to_string()));
        assert!(!files.iter().any(|f| f.ends_with(".gitkeep")));
    }

    #[test]
    fn test_license_template_follows_type() {
        for license in License::ALL {
            let steps = plan(&config_with(ProjectType::Plugin, NO_FEATURES, Some(license)));
            assert!(steps.contains(&Step::render(TemplateId::License(license), "LICENSE")));
        }
    }

    #[test]
    fn test_features_are_independent() {
        let only_git = Features {
            git: true,
            ..NO_FEATURES
        };
        let files = rendered(&plan(&config_with(ProjectType::Theme, only_git, None)));
        assert!(files.contains(&".gitattributes".to_string()));
        assert!(!files.contains(&"phpcs.xml".to_string()));
        assert!(!files.contains(&"README.md".to_string()));
        assert!(!files.contains(&"LICENSE".to_string()));
    }

    #[test]
    fn test_composer_json_is_last() {
        for project_type in [ProjectType::Theme, ProjectType::Plugin] {
            let steps = plan(&sample_config(project_type, Path::new("/work")));
            assert_eq!(
                steps.last(),
                Some(&Step::render(TemplateId::ComposerJson, "composer.json"))
            );
        }
    }

    #[test]
    fn test_destinations_stay_inside_project() {
        for project_type in [ProjectType::Theme, ProjectType::Plugin] {
            for step in plan(&sample_config(project_type, Path::new("/work"))) {
                assert!(
                    step.destination()
                        .components()
                        .all(|c| matches!(c, Component::Normal(_))),
                    "{:?}",
                    step
                );
            }
        }
    }
}
