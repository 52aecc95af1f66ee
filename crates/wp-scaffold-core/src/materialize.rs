//! Executes a scaffold plan against the filesystem

use crate::error::{Result, ScaffoldError};
use crate::plan::Step;
use crate::progress::Reporter;
use crate::project::ProjectConfig;
use crate::templates::TemplateStore;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Apply every step in order, stopping at the first failure
///
/// Files already written when a step fails are left in place. Returns the
/// written files relative to `root`.
pub async fn materialize<S>(
    steps: &[Step],
    root: &Path,
    store: &S,
    config: &ProjectConfig,
    reporter: &mut dyn Reporter,
) -> Result<Vec<PathBuf>>
where
    S: TemplateStore + ?Sized,
{
    let mut written = Vec::new();

    for step in steps {
        ensure_relative(step.destination())?;

        match step {
            Step::CreateDirectory(path) => {
                let target = root.join(path);
                fs::create_dir_all(&target)
                    .await
                    .map_err(|e| ScaffoldError::io(&target, e))?;
            }
            Step::RenderFile {
                template,
                destination,
            } => {
                // Render fully before touching the destination
                let content = store.render(*template, config)?;
                write_new(&root.join(destination), content.as_bytes()).await?;
                written.push(destination.clone());
            }
            Step::CopyTree {
                bundle,
                destination,
            } => {
                for file in store.bundle(*bundle)? {
                    ensure_relative(&file.path)?;
                    let relative = destination.join(&file.path);
                    let target = root.join(&relative);
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent)
                            .await
                            .map_err(|e| ScaffoldError::io(parent, e))?;
                    }
                    write_new(&target, &file.contents).await?;
                    written.push(relative);
                }
            }
        }

        reporter.step_applied(step);
    }

    Ok(written)
}

/// Only plain relative components may appear in a destination
fn ensure_relative(path: &Path) -> Result<()> {
    if path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    {
        Ok(())
    } else {
        Err(ScaffoldError::UnsafePath(path.to_path_buf()))
    }
}

/// Write a new file in a single call; an existing file is an error
async fn write_new(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
        .map_err(|e| ScaffoldError::io(path, e))?;
    file.write_all(contents)
        .await
        .map_err(|e| ScaffoldError::io(path, e))?;
    file.flush().await.map_err(|e| ScaffoldError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan;
    use crate::progress::{Event, RecordingReporter, SilentReporter};
    use crate::project::tests::sample_config;
    use crate::project::ProjectType;
    use crate::templates::{BundleFile, BundleId, TemplateId, TemplateRenderer};

    /// Store that renders every template as its own path
    struct EchoStore {
        missing: Option<TemplateId>,
        bundle_path: PathBuf,
    }

    impl EchoStore {
        fn new() -> Self {
            Self {
                missing: None,
                bundle_path: PathBuf::from(".editorconfig"),
            }
        }
    }

    impl TemplateStore for EchoStore {
        fn render(&self, id: TemplateId, _config: &ProjectConfig) -> Result<String> {
            if self.missing == Some(id) {
                return Err(ScaffoldError::Render {
                    template: id.path().to_string(),
                    message: "not found".to_string(),
                });
            }
            Ok(id.path().to_string())
        }

        fn bundle(&self, _id: BundleId) -> Result<Vec<BundleFile>> {
            Ok(vec![BundleFile {
                path: self.bundle_path.clone(),
                contents: b"root = true\n".to_vec(),
            }])
        }
    }

    #[tokio::test]
    async fn test_materialize_writes_rendered_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(ProjectType::Plugin, dir.path());
        let root = config.full_project_path.clone();
        let steps = plan(&config);

        let written = materialize(&steps, &root, &EchoStore::new(), &config, &mut SilentReporter)
            .await
            .unwrap();

        assert!(written.contains(&PathBuf::from("my-cool-theme.php")));
        assert!(written.contains(&PathBuf::from(".editorconfig")));
        assert_eq!(
            std::fs::read_to_string(root.join("inc/setup.php")).unwrap(),
            "plugin/setup.php.hbs"
        );
        assert!(root.join("languages").is_dir());
        assert!(root.join(".vscode/settings.json").is_file());
    }

    #[tokio::test]
    async fn test_render_error_stops_the_plan() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(ProjectType::Theme, dir.path());
        let root = config.full_project_path.clone();
        let steps = plan(&config);
        let store = EchoStore {
            missing: Some(TemplateId::ThemeFooter),
            ..EchoStore::new()
        };

        let err = materialize(&steps, &root, &store, &config, &mut SilentReporter)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Render { .. }));
        // Earlier output is kept, later steps never ran
        assert!(root.join("archive.php").is_file());
        assert!(!root.join("footer.php").exists());
        assert!(!root.join("functions.php").exists());
        assert!(!root.join("composer.json").exists());
    }

    #[tokio::test]
    async fn test_existing_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        std::fs::write(root.join("README.md"), "mine").unwrap();
        let config = sample_config(ProjectType::Theme, dir.path());
        let steps = vec![Step::RenderFile {
            template: TemplateId::Readme,
            destination: PathBuf::from("README.md"),
        }];

        let err = materialize(&steps, &root, &EchoStore::new(), &config, &mut SilentReporter)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert_eq!(std::fs::read_to_string(root.join("README.md")).unwrap(), "mine");
    }

    #[tokio::test]
    async fn test_escaping_destination_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        let config = sample_config(ProjectType::Theme, dir.path());
        let steps = vec![Step::RenderFile {
            template: TemplateId::Readme,
            destination: PathBuf::from("../outside.md"),
        }];

        let err = materialize(&steps, &root, &EchoStore::new(), &config, &mut SilentReporter)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::UnsafePath(_)));
        assert!(!dir.path().join("outside.md").exists());
    }

    #[tokio::test]
    async fn test_escaping_bundle_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("project");
        let config = sample_config(ProjectType::Theme, dir.path());
        let store = EchoStore {
            bundle_path: PathBuf::from("../evil"),
            ..EchoStore::new()
        };
        let steps = vec![Step::CopyTree {
            bundle: BundleId::EditorConfig,
            destination: PathBuf::new(),
        }];

        let err = materialize(&steps, &root, &store, &config, &mut SilentReporter)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::UnsafePath(_)));
    }

    #[tokio::test]
    async fn test_create_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(ProjectType::Theme, dir.path());
        let steps = vec![
            Step::CreateDirectory(PathBuf::from("inc")),
            Step::CreateDirectory(PathBuf::from("inc")),
        ];
        let mut reporter = RecordingReporter::default();

        let written = materialize(&steps, dir.path(), &EchoStore::new(), &config, &mut reporter)
            .await
            .unwrap();

        assert!(written.is_empty());
        assert_eq!(
            reporter.events,
            vec![
                Event::Applied(steps[0].clone()),
                Event::Applied(steps[1].clone())
            ]
        );
    }

    #[tokio::test]
    async fn test_embedded_theme_materializes() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(ProjectType::Theme, dir.path());
        let root = config.full_project_path.clone();
        let renderer = TemplateRenderer::embedded();

        materialize(&plan(&config), &root, &renderer, &config, &mut SilentReporter)
            .await
            .unwrap();

        let style = std::fs::read_to_string(root.join("style.css")).unwrap();
        assert!(style.contains("Theme Name: My Cool Theme"));
        let editorconfig = std::fs::read_to_string(root.join(".editorconfig")).unwrap();
        assert!(editorconfig.contains("root = true"));
        assert_eq!(std::fs::read_to_string(root.join("template-parts/.gitkeep")).unwrap(), "");
    }
}
