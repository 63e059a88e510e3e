//! Path helpers for file selectors.

use std::path::{Component, Path, PathBuf};

/// Expand the environment variables of `text`.
///
/// See [`expand_vars_with`].
pub fn expand_vars(text: &str) -> String {
    expand_vars_with(text, |name| std::env::var(name).ok())
}

/// Expand the variables of `text` using `lookup`.
///
/// `$(NAME)` is first rewritten as `${NAME}`, then `$NAME` and `${NAME}`
/// are replaced by their values. Unknown variables are left unchanged.
pub fn expand_vars_with(text: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let text = parens_to_braces(text);
    let mut out = String::with_capacity(text.len());
    let mut rest = text.as_str();

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let (name, consumed) = match after.strip_prefix('{') {
            Some(braced) => match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            },
            None => {
                let end = after
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(after.len());
                (&after[..end], end)
            }
        };
        match Some(name).filter(|n| !n.is_empty()).and_then(&lookup) {
            Some(value) => {
                out.push_str(&value);
                rest = &after[consumed..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Rewrite `$(NAME)` as `${NAME}`, `NAME` not containing `)`, `/`, `\` or `$`.
fn parens_to_braces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("$(") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        match after.find([')', '/', '\\', '$']) {
            Some(end) if after[end..].starts_with(')') => {
                out.push_str("${");
                out.push_str(&after[..end]);
                out.push('}');
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str("$(");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Relative path from `base` to `path`.
///
/// Returns `None` when no relative path exists: empty paths, or paths on
/// different roots such as two Windows drives.
pub fn relative_path(path: &Path, base: &Path) -> Option<PathBuf> {
    let path = normalized(path)?;
    let base = normalized(base)?;

    let (path_root, path_parts) = split_root(&path);
    let (base_root, base_parts) = split_root(&base);
    if path_root != base_root {
        return None;
    }

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Some(relative)
}

/// Absolute path with `.` and `..` resolved lexically.
fn normalized(path: &Path) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
        return None;
    }
    let absolute = std::path::absolute(path).ok()?;
    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(out.components().next_back(), Some(Component::RootDir) | None) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    Some(out)
}

fn split_root(path: &Path) -> (Vec<Component<'_>>, Vec<Component<'_>>) {
    path.components()
        .partition(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(name: &str) -> Option<String> {
        match name {
            "ROOT" => Some("/work".to_string()),
            "EXT" => Some("py".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_expand_forms() {
        assert_eq!(expand_vars_with("$ROOT/a", env), "/work/a");
        assert_eq!(expand_vars_with("${ROOT}/a", env), "/work/a");
        assert_eq!(expand_vars_with("$(ROOT)/a.$(EXT)", env), "/work/a.py");
    }

    #[test]
    fn test_expand_unknown_left_unchanged() {
        assert_eq!(expand_vars_with("$NOPE/a", env), "$NOPE/a");
        assert_eq!(expand_vars_with("$(NOPE)/a", env), "${NOPE}/a");
        assert_eq!(expand_vars_with("cost: 5$", env), "cost: 5$");
        assert_eq!(expand_vars_with("${ROOT", env), "${ROOT");
    }

    #[test]
    fn test_parens_with_separator_not_rewritten() {
        assert_eq!(parens_to_braces("$(a/b)"), "$(a/b)");
        assert_eq!(parens_to_braces("$()"), "${}");
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_path() {
        let rel = |p: &str, b: &str| relative_path(Path::new(p), Path::new(b));

        assert_eq!(rel("/work/project/src/a.py", "/work/project"), Some(PathBuf::from("src/a.py")));
        assert_eq!(rel("/work/other/a.py", "/work/project"), Some(PathBuf::from("../other/a.py")));
        assert_eq!(rel("/work/project", "/work/project"), Some(PathBuf::from(".")));
        assert_eq!(rel("/work/./project/../x", "/work"), Some(PathBuf::from("x")));
    }

    #[test]
    fn test_relative_path_empty_is_error() {
        assert_eq!(relative_path(Path::new(""), Path::new("/work")), None);
    }

    #[cfg(windows)]
    #[test]
    fn test_relative_path_other_drive_is_error() {
        assert_eq!(relative_path(Path::new(r"D:\data\a.py"), Path::new(r"C:\work")), None);
    }
}
