//! Filesystem path helpers.
//!
//! The conversion anchors every command-line path at the process working
//! directory and emits descriptor-relative paths into the generated script,
//! so both directions (absolutize, relativize) are needed.  All of this is
//! lexical: nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Resolve a command-line path against the current working directory.
pub fn child_from_working_directory(path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(p),
        Err(_) => p.to_path_buf(),
    }
}

/// Lexically normalize `.` and `..` components (without resolving links).
fn normalized(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Express `target` relative to the directory `base`.
///
/// Both paths should be absolute.  When they share no common prefix (e.g.
/// different drives), `target` is returned unchanged.
pub fn relative_path_from(target: &Path, base: &Path) -> String {
    let target = normalized(target);
    let base = normalized(base);

    let target_components: Vec<Component> = target.components().collect();
    let base_components: Vec<Component> = base.components().collect();

    let common = target_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 && !target_components.is_empty() {
        return target.to_string_lossy().into_owned();
    }

    let mut out = PathBuf::new();
    for _ in common..base_components.len() {
        out.push("..");
    }
    for component in &target_components[common..] {
        out.push(component);
    }

    if out.as_os_str().is_empty() {
        ".".to_string()
    } else {
        out.to_string_lossy().into_owned()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_sibling() {
        assert_eq!(
            relative_path_from(Path::new("/a/b/file.jucer"), Path::new("/a/b")),
            "file.jucer"
        );
    }

    #[test]
    fn relative_up_and_down() {
        assert_eq!(
            relative_path_from(Path::new("/a/x/y"), Path::new("/a/b/c")),
            "../../x/y"
        );
    }

    #[test]
    fn relative_of_base_itself() {
        assert_eq!(relative_path_from(Path::new("/a/b"), Path::new("/a/b")), ".");
    }

    #[test]
    fn normalizes_dot_segments() {
        assert_eq!(
            relative_path_from(Path::new("/a/b/../c/./d"), Path::new("/a")),
            "c/d"
        );
    }

    #[test]
    fn absolute_child_resolution() {
        let abs = child_from_working_directory("/opt/JUCE");
        assert_eq!(abs, PathBuf::from("/opt/JUCE"));
        let rel = child_from_working_directory("project.jucer");
        assert!(rel.is_absolute());
        assert!(rel.ends_with("project.jucer"));
    }
}
