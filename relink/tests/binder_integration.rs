//! Integration tests for binding linkers to a document set.

mod common;

use common::SiteFixture;
use relink::config::{Config, ConfigBuilder, MatchConfig, ModifyLinks};
use relink::output::{Direction, LinkReport};
use relink::{Binder, Error, Resolvable};

fn build_config(config: Config) -> Config {
    ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(config)
        .build()
        .unwrap()
}

#[test]
fn test_default_binding_skips_dot_paths() {
    let site = SiteFixture::blog();
    let docs = site.build();

    let bindings = Binder::with_defaults().unwrap().bind(&docs).unwrap();
    assert_eq!(bindings.property(), "link");
    assert_eq!(bindings.len(), docs.len() - 1);
    assert!(!bindings.contains(".git/HEAD"));
}

#[test]
fn test_markdown_only_with_dot_files() {
    let site = SiteFixture::new()
        .with_page("x.gif", "gif")
        .with_page("x.md", "md")
        .with_page(".git/test.md", "hidden");
    let docs = site.build();

    let config = build_config(Config {
        match_pattern: Some("**/*.md".into()),
        match_options: Some(MatchConfig {
            dot: Some(true),
            ..MatchConfig::default()
        }),
        ..Config::default()
    });

    let bindings = Binder::from_config(&config).unwrap().bind(&docs).unwrap();
    let bound: Vec<_> = bindings.iter().map(|l| l.current_path()).collect();
    assert_eq!(bound, vec!["x.md", ".git/test.md"]);
}

#[test]
fn test_bound_linker_uses_configured_transform() {
    let site = SiteFixture::blog();
    let docs = site.build();
    let config = build_config(Config {
        modify_links: Some(ModifyLinks::Identity),
        ..Config::default()
    });

    let bindings = Binder::from_config(&config).unwrap().bind(&docs).unwrap();
    let post = bindings.get("blog/2024/first-post.md").unwrap();
    assert_eq!(post.to("/blog/index.md").unwrap(), "../index.md");
}

#[test]
fn test_invalid_pattern_is_reported() {
    let config = Config {
        match_pattern: Some("blog/[".into()),
        ..Config::default()
    };
    let err = Binder::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { .. }));
}

#[test]
fn test_report_to_home() {
    let site = SiteFixture::blog();
    let docs = site.build();
    let config = build_config(Config {
        match_pattern: Some("blog/**".into()),
        ..Config::default()
    });

    let bindings = Binder::from_config(&config).unwrap().bind(&docs).unwrap();
    let report =
        LinkReport::collect(&bindings, Direction::To, "/", Resolvable::from("/")).unwrap();

    let rows: Vec<_> = report
        .links
        .iter()
        .map(|e| (e.document.as_str(), e.link.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("blog/index.md", "../"),
            ("blog/2024/first-post.md", "../../"),
            ("blog/2024/second-post.md", "../../"),
        ]
    );
}

#[test]
fn test_report_from_handle() {
    let site = SiteFixture::blog();
    let docs = site.build();
    let about = site.handle("about.md");
    let config = build_config(Config {
        match_pattern: Some("*.md".into()),
        ..Config::default()
    });

    let bindings = Binder::from_config(&config).unwrap().bind(&docs).unwrap();
    let report =
        LinkReport::collect(&bindings, Direction::From, "@about.md", Resolvable::from(&about))
            .unwrap();

    assert_eq!(report.anchor, "@about.md");
    assert_eq!(report.links.len(), 2);
    assert_eq!(report.links[0].link, "./");
    assert_eq!(report.links[1].link, "about.html");
}
