//! Translation catalog (`.pot`) generation
//!
//! Scans the generated PHP files for WordPress gettext calls that use the
//! project's text domain and writes `languages/<package>.pot`.

use crate::error::{Result, ScaffoldError};
use crate::plan::LANGUAGES_DIR;
use crate::project::ProjectConfig;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// A single-quoted PHP string literal, capturing its raw body
const PHP_STR: &str = r"'((?:[^'\\]|\\.)*)'";

static SIMPLE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:__|_e|esc_html__|esc_html_e|esc_attr__|esc_attr_e)\(\s*{s}\s*,\s*{s}\s*\)",
        s = PHP_STR
    ))
    .expect("gettext pattern is valid")
});

static CONTEXT_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:_x|esc_html_x|esc_attr_x)\(\s*{s}\s*,\s*{s}\s*,\s*{s}\s*\)",
        s = PHP_STR
    ))
    .expect("gettext context pattern is valid")
});

static PLURAL_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b_n\(\s*{s}\s*,\s*{s}\s*,\s*[^,]+,\s*{s}\s*\)",
        s = PHP_STR
    ))
    .expect("gettext plural pattern is valid")
});

/// One translatable string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub context: Option<String>,
    pub msgid: String,
    pub plural: Option<String>,
    /// `path:line` of every occurrence
    pub references: Vec<String>,
}

/// Entries in order of first appearance, deduplicated by (context, msgid)
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<(Option<String>, String), usize>,
}

impl Catalog {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn add(&mut self, context: Option<String>, msgid: String, plural: Option<String>, reference: String) {
        let key = (context.clone(), msgid.clone());
        match self.index.get(&key) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.references.push(reference);
                if entry.plural.is_none() {
                    entry.plural = plural;
                }
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(CatalogEntry {
                    context,
                    msgid,
                    plural,
                    references: vec![reference],
                });
            }
        }
    }

    /// Collect calls from one PHP source whose domain matches `domain`
    pub fn scan_source(&mut self, source: &str, file: &str, domain: &str) {
        let mut found: Vec<(usize, Option<String>, String, Option<String>)> = Vec::new();

        for caps in SIMPLE_CALL.captures_iter(source) {
            if unescape(&caps[2]) == domain {
                found.push((start(&caps), None, unescape(&caps[1]), None));
            }
        }
        for caps in CONTEXT_CALL.captures_iter(source) {
            if unescape(&caps[3]) == domain {
                found.push((start(&caps), Some(unescape(&caps[2])), unescape(&caps[1]), None));
            }
        }
        for caps in PLURAL_CALL.captures_iter(source) {
            if unescape(&caps[3]) == domain {
                found.push((start(&caps), None, unescape(&caps[1]), Some(unescape(&caps[2]))));
            }
        }

        found.sort_by_key(|(offset, ..)| *offset);
        for (offset, context, msgid, plural) in found {
            let line = source[..offset].matches('\n').count() + 1;
            self.add(context, msgid, plural, format!("{}:{}", file, line));
        }
    }

    /// Scan every `*.php` file below `root` in a stable order
    pub fn scan_dir(root: &Path, domain: &str) -> Result<Self> {
        let mut catalog = Self::default();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                ScaffoldError::io(path, std::io::Error::other(e.to_string()))
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "php") {
                continue;
            }
            let source =
                std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))?;
            let relative = path.strip_prefix(root).unwrap_or(path);
            let file = relative.to_string_lossy().replace('\\', "/");
            catalog.scan_source(&source, &file, domain);
        }
        Ok(catalog)
    }

    /// Render the catalog in gettext POT format
    pub fn to_pot(&self, config: &ProjectConfig) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "# Copyright (C) {} {}\n",
            config.year, config.project_author.name
        ));
        if let Some(license) = config.project_license {
            out.push_str(&format!(
                "# This file is distributed under the {} license.\n",
                license.kind()
            ));
        }
        out.push_str("msgid \"\"\nmsgstr \"\"\n");
        let headers = [
            format!(
                "Project-Id-Version: {} {}",
                config.project_name, config.project_version
            ),
            format!(
                "Report-Msgid-Bugs-To: {}",
                if config.project_uri.is_empty() {
                    &config.project_author.url
                } else {
                    &config.project_uri
                }
            ),
            format!(
                "POT-Creation-Date: {}",
                config.created.format("%Y-%m-%d %H:%M%z")
            ),
            "MIME-Version: 1.0".to_string(),
            "Content-Type: text/plain; charset=UTF-8".to_string(),
            "Content-Transfer-Encoding: 8bit".to_string(),
            "PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE".to_string(),
            format!("Last-Translator: {}", config.project_author.full),
            "Language-Team: LANGUAGE <LL@li.org>".to_string(),
            format!("X-Domain: {}", config.text_domain()),
        ];
        for header in headers {
            out.push_str(&format!("\"{}\\n\"\n", escape(&header)));
        }

        for entry in &self.entries {
            out.push('\n');
            out.push_str(&format!("#: {}\n", entry.references.join(" ")));
            if let Some(context) = &entry.context {
                out.push_str(&format!("msgctxt \"{}\"\n", escape(context)));
            }
            out.push_str(&format!("msgid \"{}\"\n", escape(&entry.msgid)));
            match &entry.plural {
                Some(plural) => {
                    out.push_str(&format!("msgid_plural \"{}\"\n", escape(plural)));
                    out.push_str("msgstr[0] \"\"\nmsgstr[1] \"\"\n");
                }
                None => out.push_str("msgstr \"\"\n"),
            }
        }
        out
    }
}

/// Path of the catalog relative to the project root
pub fn pot_path(config: &ProjectConfig) -> PathBuf {
    Path::new(LANGUAGES_DIR).join(format!("{}.pot", config.package_name()))
}

/// Scan the generated project and write its `.pot` file
pub async fn generate_pot(config: &ProjectConfig, root: &Path) -> Result<PathBuf> {
    let catalog = Catalog::scan_dir(root, config.text_domain())?;
    let relative = pot_path(config);
    let target = root.join(&relative);
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ScaffoldError::io(parent, e))?;
    }
    tokio::fs::write(&target, catalog.to_pot(config))
        .await
        .map_err(|e| ScaffoldError::io(&target, e))?;
    Ok(relative)
}

fn start(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(0, |m| m.start())
}

/// Undo PHP single-quote escaping (`\'` and `\\`)
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next @ ('\'' | '\\')) => out.push(next),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Escape a string for a POT double-quoted literal
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materialize::materialize;
    use crate::plan::plan;
    use crate::progress::SilentReporter;
    use crate::project::tests::sample_config;
    use crate::project::ProjectType;
    use crate::templates::TemplateRenderer;

    const SOURCE: &str = r#"<?php
echo __( 'Hello', 'demo' );
esc_html_e( 'It\'s "quoted"', 'demo' );
echo __( 'Other domain', 'acme' );
echo _x( 'Post', 'noun', 'demo' );
printf( _n( '%s item', '%s items', $count, 'demo' ), $count );
echo esc_attr__( 'Hello', 'demo' );
"#;

    #[test]
    fn test_scan_source_filters_domain_and_dedupes() {
        let mut catalog = Catalog::default();
        catalog.scan_source(SOURCE, "inc/demo.php", "demo");
        let entries = catalog.entries();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].msgid, "Hello");
        assert_eq!(entries[0].references, vec!["inc/demo.php:2", "inc/demo.php:7"]);
        assert_eq!(entries[1].msgid, "It's \"quoted\"");
        assert_eq!(entries[2].context.as_deref(), Some("noun"));
        assert_eq!(entries[3].plural.as_deref(), Some("%s items"));
        assert!(!entries.iter().any(|e| e.msgid == "Other domain"));
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"It\'s"), "It's");
        assert_eq!(unescape(r"a\\b"), r"a\b");
        assert_eq!(unescape(r"keep\n"), r"keep\n");
    }

    #[test]
    fn test_pot_output() {
        let config = sample_config(ProjectType::Plugin, Path::new("/work"));
        let mut catalog = Catalog::default();
        catalog.scan_source(
            "<?php _e( 'Say \"hi\"', 'my-cool-theme' ); _x( 'Post', 'noun', 'my-cool-theme' );",
            "x.php",
            config.text_domain(),
        );
        let pot = catalog.to_pot(&config);

        assert!(pot.starts_with("# Copyright (C) 2024 Jane Doe\n"));
        assert!(pot.contains("\"Project-Id-Version: My Cool Theme 1.0.0\\n\"\n"));
        assert!(pot.contains("\"POT-Creation-Date: 2024-05-01 12:30+0000\\n\"\n"));
        assert!(pot.contains("\"X-Domain: my-cool-theme\\n\"\n"));
        assert!(pot.contains("#: x.php:1\nmsgid \"Say \\\"hi\\\"\"\nmsgstr \"\"\n"));
        assert!(pot.contains("msgctxt \"noun\"\nmsgid \"Post\"\n"));
    }

    #[tokio::test]
    async fn test_generate_pot_for_theme() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config(ProjectType::Theme, dir.path());
        let root = config.full_project_path.clone();
        let renderer = TemplateRenderer::embedded();
        materialize(&plan(&config), &root, &renderer, &config, &mut SilentReporter)
            .await
            .unwrap();

        let relative = generate_pot(&config, &root).await.unwrap();
        assert_eq!(relative, PathBuf::from("languages/my-cool-theme.pot"));

        let pot = std::fs::read_to_string(root.join(&relative)).unwrap();
        assert!(pot.contains("msgid \"Page not found\""));
        assert!(pot.contains("#: 404.php:"));
        assert!(pot.contains("msgid \"Primary menu\""));
        assert!(pot.contains("msgid \"Nothing found.\""));
    }
}
