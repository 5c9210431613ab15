use serde_json::Value;

/// Walks `path` through nested objects. A missing key or a non-object
/// intermediate short-circuits to `None`, it is never an error.
pub fn descend<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut node = root;
    for key in path {
        node = node.get(key)?;
    }
    Some(node)
}

/// Same as [`descend`] for a dotted path string; the empty path is the root.
pub fn descend_dotted<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(root);
    }
    path.split('.').try_fold(root, |node, key| node.get(key))
}

/// Reads a sprite field. Only a non-null string counts as a url.
pub fn url(map: &Value, field: &str) -> Option<String> {
    map.get(field)?.as_str().map(str::to_owned)
}
