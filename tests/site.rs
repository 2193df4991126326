use std::fs;
use std::path::Path;

use mdsite::site::{BuildSummary, SiteError, build_site, copy_static};
use mdsite::{Config, MarkdownError, SiteConfig};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const TEMPLATE: &str = r#"<html><head><title>{{ Title }}</title><link href="/index.css" rel="stylesheet"></head><body>{{ Content }}</body></html>"#;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn site_config(root: &Path, base_path: &str) -> Config {
    Config {
        site: SiteConfig {
            content_dir: root.join("content"),
            static_dir: root.join("static"),
            output_dir: root.join("docs"),
            template: root.join("template.html"),
            base_path: base_path.to_string(),
        },
        ..Config::default()
    }
}

#[test]
fn builds_pages_and_copies_static_files() {
    let root = TempDir::new().unwrap();
    let root = root.path();
    write(&root.join("template.html"), TEMPLATE);
    write(&root.join("static/index.css"), "body {}");
    write(&root.join("static/images/logo.png"), "png");
    write(&root.join("content/index.md"), "# Home\n\nWelcome to **the site**");
    write(
        &root.join("content/blog/post.md"),
        "# First post\n\n- one\n- two\n\n[back](/)",
    );
    write(&root.join("content/notes.txt"), "ignored");
    write(&root.join("docs/stale.html"), "old");

    let summary = build_site(&site_config(root, "/")).unwrap();
    assert_eq!(
        summary,
        BuildSummary {
            pages: 2,
            static_files: 2,
        }
    );

    let docs = root.join("docs");
    assert!(!docs.join("stale.html").exists());
    assert!(!docs.join("notes.txt").exists());
    assert_eq!(fs::read_to_string(docs.join("index.css")).unwrap(), "body {}");
    assert_eq!(fs::read_to_string(docs.join("images/logo.png")).unwrap(), "png");

    assert_eq!(
        fs::read_to_string(docs.join("index.html")).unwrap(),
        r#"<html><head><title>Home</title><link href="/index.css" rel="stylesheet"></head><body><div><h1>Home</h1><p>Welcome to <b>the site</b></p></div></body></html>"#
    );
    assert_eq!(
        fs::read_to_string(docs.join("blog/post.html")).unwrap(),
        r#"<html><head><title>First post</title><link href="/index.css" rel="stylesheet"></head><body><div><h1>First post</h1><ul><li>one</li><li>two</li></ul><p><a href="/">back</a></p></div></body></html>"#
    );
}

#[test]
fn base_path_prefixes_root_urls() {
    let root = TempDir::new().unwrap();
    let root = root.path();
    write(&root.join("template.html"), TEMPLATE);
    write(&root.join("content/index.md"), "# Home\n\n![logo](/images/logo.png)");

    build_site(&site_config(root, "/project/")).unwrap();

    let page = fs::read_to_string(root.join("docs/index.html")).unwrap();
    assert!(page.contains(r#"<link href="/project/index.css""#));
    assert!(page.contains(r#"<img src="/project/images/logo.png" alt="logo"></img>"#));
}

#[test]
fn page_without_title_aborts_build() {
    let root = TempDir::new().unwrap();
    let root = root.path();
    write(&root.join("template.html"), TEMPLATE);
    write(&root.join("content/untitled.md"), "Just a paragraph");

    let err = build_site(&site_config(root, "/")).unwrap_err();
    match err {
        SiteError::Markdown { path, source } => {
            assert!(path.ends_with("untitled.md"));
            assert_eq!(source, MarkdownError::NoTitle);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!root.join("docs/untitled.html").exists());
}

#[test]
fn missing_template_is_an_io_error() {
    let root = TempDir::new().unwrap();
    let root = root.path();
    write(&root.join("content/index.md"), "# Home");

    let err = build_site(&site_config(root, "/")).unwrap_err();
    assert!(matches!(err, SiteError::Io { .. }));
}

#[test]
fn copy_static_without_source_leaves_empty_output() {
    let root = TempDir::new().unwrap();
    let dest = root.path().join("public");
    write(&dest.join("old.txt"), "old");

    let copied = copy_static(&root.path().join("static"), &dest).unwrap();
    assert_eq!(copied, 0);
    assert!(dest.is_dir());
    assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
}
