use std::path::{Component, Path, PathBuf};

/// Resolve an archive member name to its location under `base`.
///
/// Both `/` and `\` count as separators and `.` components are dropped.
/// Returns `None` for names that are absolute, empty, or climb out of `base`;
/// none of the decoders write such members.
pub fn resolve_member(base: &Path, member: &str) -> Option<PathBuf> {
    let relative = normalize_member(member)?;
    if relative.as_os_str().is_empty() {
        return None;
    }
    Some(base.join(relative))
}

/// True when `member` is absolute or climbs above the directory it is
/// extracted into. Empty names and `.` do not escape.
pub(crate) fn escapes_base(member: &str) -> bool {
    normalize_member(member).is_none()
}

fn normalize_member(member: &str) -> Option<PathBuf> {
    let unified = member.replace('\\', "/");
    let mut relative = PathBuf::new();

    for component in Path::new(&unified).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !relative.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_base_path() -> &'static Path {
        if cfg!(windows) {
            Path::new("C:/out")
        } else {
            Path::new("/out")
        }
    }

    #[test]
    fn plain_member() {
        let resolved = resolve_member(test_base_path(), "page1.jpg").unwrap();
        assert_eq!(resolved, test_base_path().join("page1.jpg"));
    }

    #[test]
    fn nested_member_keeps_structure() {
        let resolved = resolve_member(test_base_path(), "docs/ch1/intro.txt").unwrap();
        assert_eq!(
            resolved.strip_prefix(test_base_path()).unwrap(),
            Path::new("docs/ch1/intro.txt")
        );
    }

    #[test]
    fn directory_member_trailing_slash() {
        let resolved = resolve_member(test_base_path(), "docs/").unwrap();
        assert_eq!(resolved, test_base_path().join("docs"));
    }

    #[test]
    fn backslash_separators() {
        let resolved = resolve_member(test_base_path(), "docs\\ch1\\intro.txt").unwrap();
        assert_eq!(
            resolved.strip_prefix(test_base_path()).unwrap(),
            Path::new("docs/ch1/intro.txt")
        );
    }

    #[test]
    fn inner_parent_dir_is_folded() {
        let resolved = resolve_member(test_base_path(), "a/./b/../c.txt").unwrap();
        assert_eq!(resolved, test_base_path().join("a").join("c.txt"));
    }

    #[test]
    fn escaping_member_rejected() {
        assert!(resolve_member(test_base_path(), "../etc/passwd").is_none());
        assert!(resolve_member(test_base_path(), "a/../../etc/passwd").is_none());
    }

    #[test]
    fn absolute_member_rejected() {
        assert!(resolve_member(test_base_path(), "/etc/passwd").is_none());
    }

    #[test]
    fn empty_member_rejected() {
        assert!(resolve_member(test_base_path(), "").is_none());
        assert!(resolve_member(test_base_path(), "./").is_none());
    }

    #[test]
    fn escape_detection() {
        assert!(escapes_base("../escaped.txt"));
        assert!(escapes_base("docs/../../escaped.txt"));
        assert!(escapes_base("..\\escaped.txt"));
        assert!(escapes_base("/etc/passwd"));
        assert!(!escapes_base("docs/../page1.jpg"));
        assert!(!escapes_base(""));
        assert!(!escapes_base("."));
    }

    #[test]
    fn relative_base_stays_relative() {
        let resolved = resolve_member(Path::new(""), "page1.jpg").unwrap();
        assert_eq!(resolved, Path::new("page1.jpg"));
    }
}
