//! Logical path handling
//!
//! Logical paths are `/`-separated and always rooted. Every lookup in the
//! registration table and every local-disk resolution goes through [`clean`],
//! so `"html/index.html"`, `"/html//index.html"` and `"/css/../html/index.html"`
//! all name the same asset. `..` never climbs above the root.

/// Separator used in logical paths
pub const SEPARATOR: char = '/';

/// Lexically normalize a logical path
///
/// The result always starts with `/`, has no empty, `.` or `..` segments and
/// no trailing slash (except for the root itself).
pub fn clean(name: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in name.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut cleaned = String::with_capacity(name.len() + 1);
    for segment in &segments {
        cleaned.push(SEPARATOR);
        cleaned.push_str(segment);
    }
    if cleaned.is_empty() {
        cleaned.push(SEPARATOR);
    }
    cleaned
}

/// Last element of a logical path, `/` for the root
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return "/";
    }
    trimmed
        .rsplit_once(SEPARATOR)
        .map_or(trimmed, |(_, base)| base)
}

/// Parent directory of a cleaned path, `None` for the root
pub fn parent(path: &str) -> Option<&str> {
    if path == "/" {
        return None;
    }
    match path.rfind(SEPARATOR) {
        Some(0) => Some("/"),
        Some(idx) => Some(&path[..idx]),
        None => None,
    }
}

/// Mount `name` underneath `prefix`
///
/// `name` is cleaned on its own first, so `..` segments stop at the prefix
/// and never reach the rest of the tree.
pub fn join(prefix: &str, name: &str) -> String {
    let prefix = clean(prefix);
    let name = clean(name);
    if name == "/" {
        prefix
    } else if prefix == "/" {
        name
    } else {
        prefix + &name
    }
}

/// Relative form of a logical path, suitable for joining onto a disk root
pub(crate) fn relative(path: &str) -> &str {
    path.trim_start_matches(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean() {
        assert_eq!(clean(""), "/");
        assert_eq!(clean("/"), "/");
        assert_eq!(clean("html/index.html"), "/html/index.html");
        assert_eq!(clean("/html//css/./main.css"), "/html/css/main.css");
        assert_eq!(clean("/html/js/"), "/html/js");
        assert_eq!(clean("/html/js/../css/main.css"), "/html/css/main.css");
        assert_eq!(clean("/../../etc/passwd"), "/etc/passwd");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/"), "/");
        assert_eq!(base_name("/html"), "html");
        assert_eq!(base_name("/html/css/main.css"), "main.css");
        assert_eq!(base_name("main.css"), "main.css");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/"), None);
        assert_eq!(parent("/html"), Some("/"));
        assert_eq!(parent("/html/js/boltguiapp.js"), Some("/html/js"));
    }

    #[test]
    fn test_join() {
        assert_eq!(join("/html", "/js/boltguiapp.js"), "/html/js/boltguiapp.js");
        assert_eq!(join("/html", "js/boltguiapp.js"), "/html/js/boltguiapp.js");
        assert_eq!(join("/html/", "/"), "/html");
        assert_eq!(join("", "/index.html"), "/index.html");
        assert_eq!(join("/html", "../secret"), "/html/secret");
        assert_eq!(join("/html/css", "/../../index.html"), "/html/css/index.html");
        assert_eq!(join("/", "/../js"), "/js");
        assert_eq!(join("html/./css/", ""), "/html/css");
    }

    proptest! {
        #[test]
        fn clean_is_idempotent(name in "[a-z./]{0,24}") {
            let once = clean(&name);
            prop_assert_eq!(clean(&once), once);
        }

        #[test]
        fn join_stays_under_prefix(name in "[a-z./]{0,24}") {
            let joined = join("/html", &name);
            prop_assert!(joined == "/html" || joined.starts_with("/html/"));
        }

        #[test]
        fn clean_is_rooted_without_dot_segments(name in "[a-z./]{0,24}") {
            let cleaned = clean(&name);
            prop_assert!(cleaned.starts_with('/'));
            prop_assert!(cleaned == "/" || !cleaned.ends_with('/'));
            for segment in cleaned.split('/').skip(1) {
                prop_assert!(segment != "." && segment != "..");
                prop_assert!(cleaned == "/" || !segment.is_empty());
            }
        }
    }
}
