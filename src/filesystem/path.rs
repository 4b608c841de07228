//! Path string helpers
//!
//! Paths are `/`-separated absolute strings, the way the device's VFS
//! exposes mount points (`/sd`, `/sd/docs`). All helpers are lexical and
//! never touch storage.

pub const SEPARATOR: char = '/';

/// Normalize to an absolute path with no empty, `.` or `..` components and
/// no trailing separator. `..` never climbs above `/`.
pub fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
        match part {
            ".." => {
                parts.pop();
            }
            "." => {}
            _ => parts.push(part),
        }
    }

    let mut out = String::with_capacity(path.len() + 1);
    for part in &parts {
        out.push(SEPARATOR);
        out.push_str(part);
    }
    if out.is_empty() {
        out.push(SEPARATOR);
    }
    out
}

/// Join a single entry name onto a directory, tolerating a trailing
/// separator on `dir`.
pub fn join(dir: &str, name: &str) -> String {
    let base = dir.trim_end_matches(SEPARATOR);
    let mut out = String::with_capacity(base.len() + name.len() + 1);
    out.push_str(base);
    out.push(SEPARATOR);
    out.push_str(name);
    out
}

/// True if `path` is `root` or lies below it, component-wise.
pub fn is_within(root: &str, path: &str) -> bool {
    if root == "/" {
        return path.starts_with(SEPARATOR);
    }
    match path.strip_prefix(root) {
        Some("") => true,
        Some(rest) => rest.starts_with(SEPARATOR),
        None => false,
    }
}

/// Parent of `current`, clamped to `root`.
///
/// Truncates at the last separator that sits strictly after `root`'s
/// length; when there is none the result is `root` itself.
pub fn parent_within(root: &str, current: &str) -> String {
    if current == root || !is_within(root, current) {
        return root.to_string();
    }
    match current.rfind(SEPARATOR) {
        Some(pos) if pos > root.len() => current[..pos].to_string(),
        _ => root.to_string(),
    }
}

/// `docs/` names the same entry as `docs`.
pub fn trim_trailing_separators(name: &str) -> &str {
    name.trim_end_matches(SEPARATOR)
}

/// Reject names that are not a single path component.
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(SEPARATOR)
}

/// Last component of a path, or the path itself for `/`.
pub fn file_name(path: &str) -> &str {
    match path.trim_end_matches(SEPARATOR).rsplit_once(SEPARATOR) {
        Some((_, name)) if !name.is_empty() => name,
        _ => path,
    }
}
