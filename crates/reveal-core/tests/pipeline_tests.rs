mod common;

use std::fs;

use common::{FakeCloner, entries};
use pretty_assertions::assert_eq;
use reveal_core::{Bootstrap, Error, ExclusionRules, SourceResolver, TargetFilter};
use reveal_git::{GitCli, IndexLister};
use reveal_test_utils::template::{REVEAL_KEPT, REVEAL_LAYOUT, TemplateRepo, list_tree};
use tempfile::TempDir;

fn kept() -> Vec<String> {
    REVEAL_KEPT.iter().map(|s| s.to_string()).collect()
}

fn reveal_filter() -> TargetFilter {
    TargetFilter::new(ExclusionRules::reveal_defaults())
}

#[test]
fn test_copies_filtered_tree_from_existing_checkout() {
    let repo = TemplateRepo::reveal();
    let dest = TempDir::new().unwrap();
    let cloner = FakeCloner::failing(1, "must not clone");
    let git = GitCli::new();

    let report = Bootstrap::new(SourceResolver::new(&cloner), &git, reveal_filter())
        .run(Some(repo.root()), dest.path())
        .unwrap();

    assert_eq!(list_tree(dest.path()), kept());
    assert_eq!(report.listed, REVEAL_LAYOUT.len());
    assert_eq!(report.copied, REVEAL_KEPT.len());
    assert_eq!(report.excluded, REVEAL_LAYOUT.len() - REVEAL_KEPT.len());
    assert_eq!(report.already_satisfied, 0);
    assert_eq!(
        fs::read_to_string(dest.path().join("js/reveal.js")).unwrap(),
        "var Reveal = {};\n"
    );
    assert!(repo.path("README.md").is_file(), "source must be untouched");
}

#[test]
fn test_untracked_files_are_not_copied() {
    let repo = TemplateRepo::with_files(&[("index.html", "x")]);
    repo.write_untracked("scratch.txt", "local notes");
    let dest = TempDir::new().unwrap();
    let cloner = FakeCloner::failing(1, "");

    Bootstrap::new(SourceResolver::new(&cloner), &IndexLister, reveal_filter())
        .run(Some(repo.root()), dest.path())
        .unwrap();

    assert_eq!(list_tree(dest.path()), vec!["index.html".to_string()]);
}

#[test]
fn test_clones_into_temporary_checkout_and_removes_it() {
    let temp_root = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let cloner = FakeCloner::with_files(REVEAL_LAYOUT);
    let resolver = SourceResolver::new(&cloner).with_temp_root(temp_root.path());

    Bootstrap::new(resolver, &GitCli::new(), reveal_filter())
        .run(None, dest.path())
        .unwrap();

    assert_eq!(list_tree(dest.path()), kept());
    assert!(entries(temp_root.path()).is_empty());
}

#[test]
fn test_real_shallow_clone_of_local_remote() {
    let upstream = TemplateRepo::reveal();
    let temp_root = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let git = GitCli::new();
    let resolver = SourceResolver::new(&git)
        .with_remote(upstream.url())
        .with_temp_root(temp_root.path());

    Bootstrap::new(resolver, &git, reveal_filter())
        .run(None, dest.path())
        .unwrap();

    assert_eq!(list_tree(dest.path()), kept());
    assert!(entries(temp_root.path()).is_empty());
}

#[test]
fn test_missing_destination_root_is_created() {
    let repo = TemplateRepo::with_files(&[("index.html", "x")]);
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("talks/2026/intro");
    let cloner = FakeCloner::failing(1, "");

    Bootstrap::new(SourceResolver::new(&cloner), &GitCli::new(), reveal_filter())
        .run(Some(repo.root()), &dest)
        .unwrap();

    assert!(dest.join("index.html").is_file());
}

#[test]
fn test_copy_failure_aborts_and_still_cleans_up() {
    let temp_root = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    // Listing order is LICENSE, css/..., index.html, ...: make index.html fail.
    fs::create_dir_all(dest.path().join("index.html")).unwrap();
    let cloner = FakeCloner::with_files(REVEAL_LAYOUT);
    let resolver = SourceResolver::new(&cloner).with_temp_root(temp_root.path());

    let err = Bootstrap::new(resolver, &GitCli::new(), reveal_filter())
        .run(None, dest.path())
        .unwrap_err();

    match &err {
        Error::Copy { relative, source } => {
            assert_eq!(relative, "index.html");
            assert!(matches!(
                source,
                reveal_fs::Error::InvalidDestinationKind { .. }
            ));
        }
        other => panic!("expected copy error, got {other:?}"),
    }
    // Files before the failure stay, files after it were never copied.
    assert!(dest.path().join("LICENSE").is_file());
    assert!(dest.path().join("css/reveal.css").is_file());
    assert!(!dest.path().join("js/reveal.js").exists());
    assert!(entries(temp_root.path()).is_empty());
}

#[test]
fn test_listing_failure_is_reported_before_copying() {
    let not_a_repo = TempDir::new().unwrap();
    fs::write(not_a_repo.path().join("index.html"), "x").unwrap();
    let dest = TempDir::new().unwrap();
    let cloner = FakeCloner::failing(1, "");

    let err = Bootstrap::new(SourceResolver::new(&cloner), &GitCli::new(), reveal_filter())
        .run(Some(not_a_repo.path()), dest.path())
        .unwrap_err();

    assert!(
        matches!(err, Error::Git(reveal_git::Error::Listing { .. })),
        "{err:?}"
    );
    assert!(entries(dest.path()).is_empty());
}

#[test]
fn test_clone_failure_creates_destination_but_copies_nothing() {
    let temp_root = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("deck");
    let cloner = FakeCloner::failing(128, "fatal: repository not found");
    let resolver = SourceResolver::new(&cloner).with_temp_root(temp_root.path());

    let err = Bootstrap::new(resolver, &GitCli::new(), reveal_filter())
        .run(None, &dest)
        .unwrap_err();

    assert!(err.to_string().contains("repository not found"));
    assert!(dest.is_dir());
    assert!(entries(&dest).is_empty());
    assert!(entries(temp_root.path()).is_empty());
}

#[test]
fn test_rerun_overwrites_modified_files() {
    let repo = TemplateRepo::reveal();
    let dest = TempDir::new().unwrap();
    let cloner = FakeCloner::failing(1, "");
    let git = GitCli::new();
    let bootstrap = Bootstrap::new(SourceResolver::new(&cloner), &git, reveal_filter());

    bootstrap.run(Some(repo.root()), dest.path()).unwrap();
    fs::write(dest.path().join("index.html"), "edited by hand").unwrap();
    let report = bootstrap.run(Some(repo.root()), dest.path()).unwrap();

    assert_eq!(report.copied, REVEAL_KEPT.len());
    assert_eq!(
        fs::read_to_string(dest.path().join("index.html")).unwrap(),
        "<html><div class=\"reveal\"></div></html>\n"
    );
}

#[test]
fn test_bootstrapping_a_checkout_onto_itself_changes_nothing() {
    let repo = TemplateRepo::reveal();
    let cloner = FakeCloner::failing(1, "");

    let report = Bootstrap::new(SourceResolver::new(&cloner), &GitCli::new(), reveal_filter())
        .run(Some(repo.root()), repo.root())
        .unwrap();

    assert_eq!(report.copied, 0);
    assert_eq!(report.already_satisfied, REVEAL_KEPT.len());
    assert_eq!(report.bytes, 0);
}

#[test]
fn test_custom_rules_replace_defaults() {
    let repo = TemplateRepo::reveal();
    let dest = TempDir::new().unwrap();
    let cloner = FakeCloner::failing(1, "");
    let filter = TargetFilter::new(
        ExclusionRules::new()
            .with_prefix("css/")
            .with_prefix("test/")
            .with_prefix("plugin/")
            .with_prefix(".")
            .with_file("index.html"),
    );

    Bootstrap::new(SourceResolver::new(&cloner), &GitCli::new(), filter)
        .run(Some(repo.root()), dest.path())
        .unwrap();

    assert_eq!(
        list_tree(dest.path()),
        vec![
            "CONTRIBUTING.md",
            "Gruntfile.js",
            "LICENSE",
            "README.md",
            "bower.json",
            "demo.html",
            "js/reveal.js",
            "package.json",
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_file_names_with_quotes_and_tabs_are_copied() {
    let repo = TemplateRepo::with_files(&[("say\"hi\".txt", "quote"), ("tab\tname.md", "tab")]);
    let dest = TempDir::new().unwrap();
    let cloner = FakeCloner::failing(1, "");

    let report = Bootstrap::new(SourceResolver::new(&cloner), &GitCli::new(), reveal_filter())
        .run(Some(repo.root()), dest.path())
        .unwrap();

    assert_eq!(report.copied, 2);
    assert_eq!(
        fs::read_to_string(dest.path().join("say\"hi\".txt")).unwrap(),
        "quote"
    );
    assert_eq!(fs::read_to_string(dest.path().join("tab\tname.md")).unwrap(), "tab");
}
