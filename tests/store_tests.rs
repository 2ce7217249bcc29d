//! Integration tests for the path-keyed node store.

use nodepath::store::{NodeKind, NodeStore, TreeNode};

fn sample_store() -> NodeStore {
    let mut store = NodeStore::new();
    store.insert("config", TreeNode::mapping("config"));
    store.insert("config.servers", TreeNode::mapping("servers"));
    store.insert(r"config.servers.eu\.west", TreeNode::mapping("eu.west"));
    store.insert(
        r"config.servers.eu\.west.host",
        TreeNode::scalar("host", "10.0.0.1"),
    );
    store.insert(
        r"config.servers.eu\.west.port",
        TreeNode::scalar("port", "443"),
    );
    store.insert("config.version", TreeNode::scalar("version", "2"));
    store.insert("readme", TreeNode::scalar("readme", "hello"));
    store
}

#[test]
fn test_parent_of_escaped_path() {
    let store = sample_store();
    let (key, node) = store.parent_of(r"config.servers.eu\.west.host").unwrap();
    assert_eq!(key, r"config.servers.eu\.west");
    assert_eq!(node.name, "eu.west");
    assert_eq!(node.kind, NodeKind::Mapping);
}

#[test]
fn test_parent_of_root_level() {
    let store = sample_store();
    assert!(store.parent_of("config").is_none());
    assert!(store.parent_of("").is_none());
}

#[test]
fn test_parent_of_missing_parent() {
    let store = sample_store();
    assert!(store.parent_of("unknown.child").is_none());
}

#[test]
fn test_ancestors_chain() {
    let store = sample_store();
    let keys: Vec<&str> = store
        .ancestors(r"config.servers.eu\.west.host")
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(keys, vec![r"config.servers.eu\.west", "config.servers", "config"]);
}

#[test]
fn test_nearest_ancestor_of_unstored_path() {
    let store = sample_store();
    let (key, _) = store
        .nearest_ancestor(r"config.servers.eu\.west.tls.cert")
        .unwrap();
    assert_eq!(key, r"config.servers.eu\.west");
    assert!(store.nearest_ancestor("elsewhere.deep").is_none());
}

#[test]
fn test_children_in_insertion_order() {
    let store = sample_store();
    assert_eq!(
        store.children_of(r"config.servers.eu\.west"),
        vec![
            r"config.servers.eu\.west.host",
            r"config.servers.eu\.west.port"
        ]
    );
    assert_eq!(
        store.children_of("config"),
        vec!["config.servers", "config.version"]
    );
    assert!(store.children_of("readme").is_empty());
}

#[test]
fn test_escaped_dot_is_not_a_child_boundary() {
    let mut store = NodeStore::new();
    store.insert_path("a");
    store.insert_path(r"a\.b");
    assert_eq!(store.roots(), vec!["a", r"a\.b"]);
    assert!(store.children_of("a").is_empty());
}

#[test]
fn test_insert_replaces() {
    let mut store = NodeStore::new();
    assert!(store.insert("a", TreeNode::marker("a")).is_none());
    let previous = store.insert("a", TreeNode::scalar("a", "1")).unwrap();
    assert_eq!(previous.kind, NodeKind::Marker);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").unwrap().value.as_deref(), Some("1"));
}

#[test]
fn test_empty_store() {
    let store = NodeStore::new();
    assert!(store.is_empty());
    assert!(!store.contains("a"));
    assert!(store.roots().is_empty());
    assert!(store.ancestors("a.b.c").is_empty());
}

#[test]
fn test_resolve_prefers_stored_node() {
    let store = sample_store();
    let (key, node) = store.resolve(r"config.servers.eu\.west.host").unwrap();
    assert_eq!(key, r"config.servers.eu\.west.host");
    assert_eq!(node.value.as_deref(), Some("10.0.0.1"));
}

#[test]
fn test_resolve_unstored_path_falls_back_to_ancestor() {
    let store = sample_store();
    let (key, node) = store.resolve(r"config.servers.eu\.west.tls.cert").unwrap();
    assert_eq!(key, r"config.servers.eu\.west");
    assert_eq!(node.kind, NodeKind::Mapping);

    let (key, _) = store.resolve("readme.sections.intro").unwrap();
    assert_eq!(key, "readme");
}

#[test]
fn test_resolve_nothing_stored_on_the_chain() {
    let store = sample_store();
    assert!(store.resolve("elsewhere.deep").is_none());
    assert!(store.resolve("elsewhere").is_none());
    assert!(store.resolve("").is_none());
}
