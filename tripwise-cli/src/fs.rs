//! Capability-based file access for CLI inputs.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open `path` for reading.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Whether `path` names a regular file.
///
/// The parent directory is opened as a capability and the entry is
/// inspected relative to it. A missing entry or parent is reported as
/// [`io::ErrorKind::NotFound`].
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;
    use tempfile::TempDir;

    fn workspace() -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        (tmp, root)
    }

    #[rstest]
    fn regular_files_are_files() {
        let (_tmp, root) = workspace();
        let path = root.join("request.json");
        std::fs::write(&path, b"{}").expect("write file");
        assert!(file_is_file(&path).expect("inspect file"));
    }

    #[rstest]
    fn directories_are_not_files() {
        let (_tmp, root) = workspace();
        let path = root.join("nested");
        std::fs::create_dir(&path).expect("create dir");
        assert!(!file_is_file(&path).expect("inspect dir"));
    }

    #[rstest]
    fn missing_entries_report_not_found() {
        let (_tmp, root) = workspace();
        let err = file_is_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn missing_parents_report_not_found() {
        let (_tmp, root) = workspace();
        let err = file_is_file(&root.join("absent/request.json")).expect_err("missing parent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
