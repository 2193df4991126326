//! Static site generation.
//!
//! Walks a content directory, renders each markdown file into an HTML template
//! and mirrors the tree into the output directory alongside copied static files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError, TemplateConfig};
use crate::error::MarkdownError;
use crate::{extract_title, markdown_to_html};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },

    #[error("{0}")]
    Config(#[from] ConfigError),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Template contents keyed by path, read at most once per build.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: HashMap<PathBuf, String>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, path: &Path) -> Result<&str, SiteError> {
        if !self.templates.contains_key(path) {
            tracing::debug!(path = %path.display(), "Loading template");
            let content = fs::read_to_string(path).map_err(io_error(path))?;
            self.templates.insert(path.to_path_buf(), content);
        }
        Ok(self.templates.get(path).map(String::as_str).unwrap_or_default())
    }
}

/// Counts reported after a full build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub static_files: usize,
}

/// Render one markdown document into a template.
pub fn render_page(
    markdown: &str,
    template: &str,
    base_path: &str,
    options: &TemplateConfig,
) -> Result<String, MarkdownError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    let title = if options.escape_title {
        html_escape::encode_text(&title).into_owned()
    } else {
        title
    };

    let page = template
        .replace(&options.title_placeholder, &title)
        .replace(&options.content_placeholder, &content);

    Ok(page
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}")))
}

/// Generate an HTML page from a markdown file.
pub fn generate_page(
    from: &Path,
    template: &Path,
    dest: &Path,
    config: &Config,
    cache: &mut TemplateCache,
) -> Result<(), SiteError> {
    tracing::info!(
        from = %from.display(),
        to = %dest.display(),
        template = %template.display(),
        "Generating page"
    );

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let template = cache.get(template)?;
    let page = render_page(&markdown, template, &config.site.base_path, &config.template)
        .map_err(|source| SiteError::Markdown {
            path: from.to_path_buf(),
            source,
        })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))
}

/// Generate pages for every `.md` file under `content_dir`, mirroring its layout.
///
/// Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Path,
    dest_dir: &Path,
    config: &Config,
    cache: &mut TemplateCache,
) -> Result<usize, SiteError> {
    let mut pages = 0;

    for path in sorted_entries(content_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);

        if path.is_dir() {
            fs::create_dir_all(&dest).map_err(io_error(&dest))?;
            pages += generate_pages_recursive(&path, template, &dest, config, cache)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            generate_page(&path, template, &dest.with_extension("html"), config, cache)?;
            pages += 1;
        }
    }

    Ok(pages)
}

/// Replace `dest` with a recursive copy of `src`.
///
/// Returns the number of files copied. A missing `src` copies nothing.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if dest.exists() {
        tracing::info!(path = %dest.display(), "Deleting existing directory");
        fs::remove_dir_all(dest).map_err(io_error(dest))?;
    }
    tracing::debug!(path = %dest.display(), "Creating directory");
    fs::create_dir_all(dest).map_err(io_error(dest))?;

    if !src.exists() {
        tracing::warn!(path = %src.display(), "Static directory does not exist");
        return Ok(0);
    }
    copy_dir_contents(src, dest)
}

fn copy_dir_contents(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;

    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_dir() {
            tracing::debug!(path = %target.display(), "Creating directory");
            fs::create_dir_all(&target).map_err(io_error(&target))?;
            copied += copy_dir_contents(&path, &target)?;
        } else {
            tracing::debug!(from = %path.display(), to = %target.display(), "Copying file");
            fs::copy(&path, &target).map_err(io_error(&path))?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut paths = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error(dir))?;
    paths.sort();
    Ok(paths)
}

/// Clear the output directory, copy static files, then generate every page.
pub fn build_site(config: &Config) -> Result<BuildSummary, SiteError> {
    let site = &config.site;
    let static_files = copy_static(&site.static_dir, &site.output_dir)?;

    let mut cache = TemplateCache::new();
    let pages = if site.content_dir.exists() {
        generate_pages_recursive(
            &site.content_dir,
            &site.template,
            &site.output_dir,
            config,
            &mut cache,
        )?
    } else {
        tracing::warn!(path = %site.content_dir.display(), "Content directory does not exist");
        0
    };

    Ok(BuildSummary {
        pages,
        static_files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = r#"<title>{{ Title }}</title><link href="/index.css"><main>{{ Content }}</main>"#;

    #[test]
    fn render_page_fills_placeholders() {
        let page = render_page(
            "# Hello\n\nSome [text](/about)",
            TEMPLATE,
            "/",
            &TemplateConfig::default(),
        )
        .unwrap();
        assert_eq!(
            page,
            r#"<title>Hello</title><link href="/index.css"><main><div><h1>Hello</h1><p>Some <a href="/about">text</a></p></div></main>"#
        );
    }

    #[test]
    fn render_page_rewrites_root_urls() {
        let page = render_page(
            "# T\n\n![pic](/img/a.png) [home](/) [ext](https://example.com)",
            TEMPLATE,
            "/blog/",
            &TemplateConfig::default(),
        )
        .unwrap();
        assert!(page.contains(r#"href="/blog/index.css""#));
        assert!(page.contains(r#"src="/blog/img/a.png""#));
        assert!(page.contains(r#"<a href="/blog/">home</a>"#));
        assert!(page.contains(r#"<a href="https://example.com">ext</a>"#));
    }

    #[test]
    fn render_page_escapes_title_when_asked() {
        let options = TemplateConfig {
            escape_title: true,
            ..TemplateConfig::default()
        };
        let page = render_page("# a < b", "{{ Title }}", "/", &options).unwrap();
        assert_eq!(page, "a &lt; b");

        let page = render_page("# a < b", "{{ Title }}", "/", &TemplateConfig::default()).unwrap();
        assert_eq!(page, "a < b");
    }

    #[test]
    fn render_page_custom_placeholders() {
        let options = TemplateConfig {
            title_placeholder: "%TITLE%".to_string(),
            content_placeholder: "%BODY%".to_string(),
            escape_title: false,
        };
        let page = render_page("# X", "%TITLE%|%BODY%|%TITLE%", "/", &options).unwrap();
        assert_eq!(page, "X|<div><h1>X</h1></div>|X");
    }

    #[test]
    fn render_page_requires_title() {
        let result = render_page("no heading", TEMPLATE, "/", &TemplateConfig::default());
        assert_eq!(result, Err(MarkdownError::NoTitle));
    }

    #[test]
    fn template_cache_reads_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("template.html");
        fs::write(&path, "first").unwrap();

        let mut cache = TemplateCache::new();
        assert_eq!(cache.get(&path).unwrap(), "first");
        fs::write(&path, "second").unwrap();
        assert_eq!(cache.get(&path).unwrap(), "first");
    }

    #[test]
    fn template_cache_does_not_remember_failures() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("late.html");
        let mut cache = TemplateCache::new();
        let err = cache.get(&path).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));

        fs::write(&path, "now here").unwrap();
        assert_eq!(cache.get(&path).unwrap(), "now here");
    }
}
