//! Manifest path helpers.
//!
//! Frame paths inside `transforms_*.json` are `/`-separated strings relative
//! to the dataset root and usually carry no extension, so these helpers work
//! on `&str` rather than on `std::path::Path`.

use crate::constants::IMAGE_EXTENSIONS;
use std::borrow::Cow;

/// Final component of a manifest path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Remove the extension of the final component.
///
/// Leading dots of the final component never start an extension, so
/// `".hidden"` and `"dir/..png"` come back unchanged.
pub fn strip_extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path.rfind('.') {
        Some(dot) if dot >= name_start && path[name_start..dot].bytes().any(|b| b != b'.') => {
            &path[..dot]
        }
        _ => path,
    }
}

/// Join a directory name and a file name with `/`.
pub fn join_manifest_path(dir: &str, name: &str) -> String {
    format!("{dir}/{name}")
}

/// Whether a file name has one of the image extensions (case-insensitive).
pub fn has_image_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
    })
}

/// Prepend `prefix` unless `name` already starts with it.
pub fn with_prefix<'a>(name: &'a str, prefix: &str) -> Cow<'a, str> {
    if name.starts_with(prefix) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{prefix}{name}"))
    }
}

/// Point a train frame path at the shared image directory.
///
/// `train/0001.png` becomes `images/0001`. Paths that do not mention the
/// source directory are rebuilt from their base name.
pub fn rewrite_train_path(path: &str, source_dir: &str, dest_dir: &str) -> String {
    let source = format!("{source_dir}/");
    let moved = if path.contains(&source) {
        path.replace(&source, &format!("{dest_dir}/"))
    } else {
        join_manifest_path(dest_dir, base_name(path))
    };
    strip_extension(&moved).to_string()
}

/// Point a test frame path at the prefixed copy in the shared image directory.
///
/// `test/0001.png` becomes `images/test_0001`; an already prefixed name is
/// left alone.
pub fn rewrite_test_path(path: &str, dest_dir: &str, prefix: &str) -> String {
    let name = with_prefix(base_name(path), prefix);
    join_manifest_path(dest_dir, strip_extension(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("train/0001.png"), "0001.png");
        assert_eq!(base_name("./a/b/r_12"), "r_12");
        assert_eq!(base_name("0001.png"), "0001.png");
        assert_eq!(base_name("train/"), "");
        assert_eq!(base_name(""), "");
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("images/0001.png"), "images/0001");
        assert_eq!(strip_extension("images/0001"), "images/0001");
        assert_eq!(strip_extension("a.b/0001"), "a.b/0001");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension(".hidden"), ".hidden");
        assert_eq!(strip_extension("dir/..png"), "dir/..png");
        assert_eq!(strip_extension("dir/.a.png"), "dir/.a");
        assert_eq!(strip_extension(""), "");
    }

    #[test]
    fn test_has_image_extension() {
        assert!(has_image_extension("0001.png"));
        assert!(has_image_extension("0001.PNG"));
        assert!(has_image_extension("0001.Jpeg"));
        assert!(has_image_extension("photo.jpg"));
        assert!(!has_image_extension("depth.exr"));
        assert!(!has_image_extension("png"));
        assert!(!has_image_extension("notes.png.txt"));
    }

    #[test]
    fn test_with_prefix_is_idempotent() {
        let once = with_prefix("0001.png", "test_");
        assert_eq!(once, "test_0001.png");
        let twice = with_prefix(&once, "test_");
        assert_eq!(twice, "test_0001.png");
    }

    #[test]
    fn test_rewrite_train_path() {
        assert_eq!(rewrite_train_path("train/0001.png", "train", "images"), "images/0001");
        assert_eq!(rewrite_train_path("./train/r_5", "train", "images"), "./images/r_5");
        assert_eq!(rewrite_train_path("0001.png", "train", "images"), "images/0001");
        assert_eq!(rewrite_train_path("other/0001.jpg", "train", "images"), "images/0001");
    }

    #[test]
    fn test_rewrite_train_path_missing_value() {
        assert_eq!(rewrite_train_path("", "train", "images"), "images/");
    }

    #[test]
    fn test_rewrite_test_path() {
        assert_eq!(rewrite_test_path("test/0001.png", "images", "test_"), "images/test_0001");
        assert_eq!(rewrite_test_path("./test/r_3", "images", "test_"), "images/test_r_3");
        assert_eq!(
            rewrite_test_path("images/test_0001", "images", "test_"),
            "images/test_0001"
        );
    }
}
