//! Integration tests for the owned TreePath value.

use nodepath::path::{EmptyComponents, PathError, PathSyntax, TreePath};

#[test]
fn test_parse_keeps_escaped_components() {
    let path = TreePath::parse(r"a.b\.c.d");
    assert_eq!(path.components(), [r"a", r"b\.c", "d"]);
    assert_eq!(path.names(), vec!["a", "b.c", "d"]);
    assert_eq!(path.last(), Some("d"));
}

#[test]
fn test_parent_matches_parent_path() {
    for text in ["a.b.c", r"a\.b.c", r"a.b\.c\.d", "x"] {
        let parent = TreePath::parse(text).parent().map(|p| p.to_string());
        assert_eq!(parent.as_deref(), nodepath::path::parent_path(text));
    }
}

#[test]
fn test_ancestors_nearest_first() {
    let path = TreePath::parse(r"a.b\.c.d.e");
    let ancestors: Vec<String> = path.ancestors().map(|p| p.to_string()).collect();
    assert_eq!(ancestors, vec![r"a.b\.c.d", r"a.b\.c", "a"]);
}

#[test]
fn test_root_level() {
    let path = TreePath::parse(r"node-with-escaped\.dot");
    assert!(path.is_root_level());
    assert!(path.parent().is_none());
    assert_eq!(path.ancestors().count(), 0);
}

#[test]
fn test_empty_path() {
    let path = TreePath::parse("");
    assert!(path.is_empty());
    assert_eq!(path.depth(), 0);
    assert!(path.parent().is_none());
    assert_eq!(path.name(), None);
}

#[test]
fn test_child_escapes_name() {
    let parent = TreePath::parse("servers");
    let child = parent.child("eu.west");
    assert_eq!(child.to_string(), r"servers.eu\.west");
    assert_eq!(child.name().as_deref(), Some("eu.west"));
    assert!(child.starts_with(&parent));
    assert!(!parent.starts_with(&child));
    assert_eq!(child.parent(), Some(parent));
}

#[test]
fn test_from_names_round_trip() {
    let names = ["config", "v1.2", r"C:\tmp"];
    let path = TreePath::from_names(names, PathSyntax::default());
    assert_eq!(path.depth(), 3);
    assert_eq!(path.names(), names);
    assert_eq!(TreePath::parse(&path.to_string()), path);
}

#[test]
fn test_from_str_is_strict() {
    let path: TreePath = "a.b".parse().unwrap();
    assert_eq!(path.depth(), 2);

    assert_eq!("".parse::<TreePath>(), Err(PathError::EmptyPath));
    assert!(matches!(
        "a..b".parse::<TreePath>(),
        Err(PathError::EmptyComponent { index: 1, .. })
    ));
    assert!(matches!(
        ".a".parse::<TreePath>(),
        Err(PathError::EmptyComponent { index: 0, .. })
    ));
}

#[test]
fn test_preserve_policy_matches_parse() {
    let syntax = PathSyntax::default();
    let path = TreePath::parse_with("a..b", &syntax, EmptyComponents::Preserve).unwrap();
    assert_eq!(path, TreePath::parse("a..b"));
}

#[test]
fn test_error_messages() {
    let err = TreePath::parse_with("a.", &PathSyntax::default(), EmptyComponents::Reject)
        .unwrap_err();
    assert_eq!(err.to_string(), "Empty component at index 1 in path 'a.'");
}

#[test]
fn test_other_syntax_paths_do_not_prefix() {
    let dotted = TreePath::parse("a");
    let slashed = TreePath::parse_with(
        "a/b",
        &PathSyntax::new('/', '\\').unwrap(),
        EmptyComponents::Preserve,
    )
    .unwrap();
    assert!(!slashed.starts_with(&dotted));
    assert_eq!(slashed.to_string(), "a/b");
}

#[test]
fn test_root_level_path_resolves_without_parent() {
    for policy in [
        EmptyComponents::Preserve,
        EmptyComponents::Reject,
        EmptyComponents::Collapse,
    ] {
        let path = TreePath::parse_with("root", &PathSyntax::default(), policy).unwrap();
        assert!(path.parent().is_none());
    }
}
