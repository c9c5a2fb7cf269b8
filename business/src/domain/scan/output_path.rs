use std::path::{Path, PathBuf};

/// Picks the first of `scan.png`, `scan1.png`, `scan2.png`, ... for which `exists` is false.
///
/// The suffix goes before the last extension; a name without one gets the number appended.
/// This is a check-then-use: another process may claim the path before it is written.
pub fn next_available_path(requested: &Path, exists: impl Fn(&Path) -> bool) -> PathBuf {
    if !exists(requested) {
        return requested.to_path_buf();
    }

    let stem = requested
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = requested
        .extension()
        .map(|e| e.to_string_lossy().into_owned());

    (1u64..)
        .map(|i| {
            let file_name = match &extension {
                Some(extension) => format!("{stem}{i}.{extension}"),
                None => format!("{stem}{i}"),
            };
            requested.with_file_name(file_name)
        })
        .find(|candidate| !exists(candidate))
        .unwrap_or_else(|| requested.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn taken(paths: &[&str]) -> impl Fn(&Path) -> bool {
        let set: HashSet<PathBuf> = paths.iter().map(PathBuf::from).collect();
        move |p: &Path| set.contains(p)
    }

    #[test]
    fn should_keep_requested_path_when_free() {
        let path = next_available_path(Path::new("scan.png"), taken(&[]));
        assert_eq!(path, PathBuf::from("scan.png"));
    }

    #[test]
    fn should_add_suffix_when_taken() {
        let path = next_available_path(Path::new("scan.png"), taken(&["scan.png"]));
        assert_eq!(path, PathBuf::from("scan1.png"));
    }

    #[test]
    fn should_increment_suffix() {
        let path = next_available_path(
            Path::new("scan.png"),
            taken(&["scan.png", "scan1.png"]),
        );
        assert_eq!(path, PathBuf::from("scan2.png"));
    }

    #[test]
    fn should_restart_from_requested_stem() {
        let path = next_available_path(
            Path::new("scan.png"),
            taken(&["scan.png", "scan1.png", "scan2.png", "scan12.png"]),
        );
        assert_eq!(path, PathBuf::from("scan3.png"));
    }

    #[test]
    fn should_keep_directory_and_last_extension() {
        let path = next_available_path(
            Path::new("out/page.v2.jpg"),
            taken(&["out/page.v2.jpg"]),
        );
        assert_eq!(path, PathBuf::from("out/page.v21.jpg"));
    }

    #[test]
    fn should_append_number_without_extension() {
        let path = next_available_path(Path::new("scan"), taken(&["scan"]));
        assert_eq!(path, PathBuf::from("scan1"));
    }
}
