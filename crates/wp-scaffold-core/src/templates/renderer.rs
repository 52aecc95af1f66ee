//! Handlebars-backed template store
//!
//! HTML escaping is disabled since the output is PHP, CSS, JSON and plain
//! text. Two helpers are registered:
//! - `{{json value}}` writes the value as a JSON literal (quoted and escaped)
//! - `{{php value}}` escapes a string for use inside single-quoted PHP strings

use super::{embedded, BundleFile, BundleId, TemplateId, TemplateStore};
use crate::error::{Result, ScaffoldError};
use crate::project::ProjectConfig;
use handlebars::{handlebars_helper, no_escape, Handlebars};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable pointing at a local template directory
pub const TEMPLATE_DIR_ENV: &str = "WP_CREATE_TEMPLATE_DIR";

handlebars_helper!(json_literal: |value: Json| {
    serde_json::to_string(value).unwrap_or_default()
});

handlebars_helper!(php_string: |value: str| {
    value.replace('\\', "\\\\").replace('\'', "\\'")
});

/// Where template sources are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    Embedded,
    /// A template directory on disk, laid out like the embedded set
    Local(PathBuf),
}

impl TemplateSource {
    /// An explicit directory wins, then the environment override, then the embedded set
    pub fn resolve(template_dir: Option<PathBuf>) -> Self {
        template_dir
            .or_else(|| {
                std::env::var_os(TEMPLATE_DIR_ENV)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .map(Self::Local)
            .unwrap_or(Self::Embedded)
    }

    pub fn local_dir(&self) -> Option<&Path> {
        match self {
            Self::Embedded => None,
            Self::Local(path) => Some(path),
        }
    }
}

pub struct TemplateRenderer {
    source: TemplateSource,
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new(source: TemplateSource) -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry.register_helper("json", Box::new(json_literal));
        registry.register_helper("php", Box::new(php_string));
        Self { source, registry }
    }

    pub fn embedded() -> Self {
        Self::new(TemplateSource::Embedded)
    }

    fn load(&self, id: TemplateId) -> Result<String> {
        match &self.source {
            TemplateSource::Embedded => Ok(embedded::template(id).to_string()),
            TemplateSource::Local(root) => {
                let path = root.join(id.path());
                std::fs::read_to_string(&path).map_err(|e| ScaffoldError::Render {
                    template: id.path().to_string(),
                    message: format!("cannot read {}: {}", path.display(), e),
                })
            }
        }
    }

    fn local_bundle(root: &Path, id: BundleId) -> Result<Vec<BundleFile>> {
        let bundle_dir = root.join(id.dir());
        if !bundle_dir.is_dir() {
            return Err(ScaffoldError::Render {
                template: id.dir().to_string(),
                message: format!("bundle directory {} not found", bundle_dir.display()),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&bundle_dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ScaffoldError::Render {
                template: id.dir().to_string(),
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let contents =
                std::fs::read(entry.path()).map_err(|e| ScaffoldError::io(entry.path(), e))?;
            let relative = entry
                .path()
                .strip_prefix(&bundle_dir)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(BundleFile {
                path: relative,
                contents,
            });
        }
        Ok(files)
    }
}

impl TemplateStore for TemplateRenderer {
    fn render(&self, id: TemplateId, config: &ProjectConfig) -> Result<String> {
        let template = self.load(id)?;
        self.registry
            .render_template(&template, config)
            .map_err(|e| ScaffoldError::Render {
                template: id.path().to_string(),
                message: e.to_string(),
            })
    }

    fn bundle(&self, id: BundleId) -> Result<Vec<BundleFile>> {
        match &self.source {
            TemplateSource::Embedded => Ok(embedded::bundle(id)
                .iter()
                .map(|(path, contents)| BundleFile {
                    path: PathBuf::from(path),
                    contents: contents.to_vec(),
                })
                .collect()),
            TemplateSource::Local(root) => Self::local_bundle(root, id),
        }
    }
}
