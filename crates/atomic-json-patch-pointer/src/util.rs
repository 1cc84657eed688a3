use crate::{Path, PointerError};

/// Decodes the `~0` and `~1` escapes of one pointer token.
///
/// Escapes are decoded in a single left-to-right pass, so `~01` yields
/// `~1`. A `~` not followed by `0` or `1` is kept as is.
///
/// # Example
///
/// ```
/// use atomic_json_patch_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("no-escapes"), "no-escapes");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    let mut out = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('1') => out.push('/'),
            Some('0') => out.push('~'),
            Some(other) => {
                out.push('~');
                out.push(other);
            }
            None => out.push('~'),
        }
    }
    out
}

/// Encodes `~` as `~0` and `/` as `~1`.
///
/// # Example
///
/// ```
/// use atomic_json_patch_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    for c in component.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            c => out.push(c),
        }
    }
    out
}

/// Parse a JSON Pointer string into path components.
///
/// The empty string is the root and yields no components. The leading `/`
/// is stripped and every component is unescaped. This function does not
/// reject pointers without a leading slash; use
/// [`try_parse_json_pointer`](crate::try_parse_json_pointer) for input that
/// has not been validated.
pub fn parse_json_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/').map(unescape_component).collect()
}

/// Format path components into a JSON Pointer string.
///
/// # Example
///
/// ```
/// use atomic_json_patch_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string(), "bar".to_string()]), "/foo/bar");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(path.iter().map(|c| c.len() + 1).sum());
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `parent` is a proper prefix of `child`.
///
/// # Example
///
/// ```
/// use atomic_json_patch_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Check if two paths are equal.
pub fn is_path_equal(p1: &[String], p2: &[String]) -> bool {
    p1 == p2
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`PointerError::NoParent`] for the root path.
pub fn parent(path: &[String]) -> Result<Path, PointerError> {
    match path.split_last() {
        Some((_, init)) => Ok(init.to_vec()),
        None => Err(PointerError::NoParent),
    }
}

/// Returns a copy of `path` whose terminal step is replaced by `step`.
///
/// Used to turn an append pointer (`/list/-`) into the concrete index the
/// element landed at.
///
/// # Errors
///
/// Returns [`PointerError::NoParent`] for the root path, which has no
/// terminal step.
pub fn with_last(path: &[String], step: impl Into<String>) -> Result<Path, PointerError> {
    let mut out = parent(path)?;
    out.push(step.into());
    Ok(out)
}

/// Check if a string is a canonical non-negative base-10 array index.
///
/// Leading zeros, signs, exponents and fractions are rejected.
///
/// # Example
///
/// ```
/// use atomic_json_patch_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("1e0"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}
