//! Output path derivation for archives and extracted files.
//!
//! Only the final path component is inspected, so dots in directory names
//! never count as extensions.

use std::path::{Path, PathBuf};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn strip_last(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[..i],
        None => name,
    }
}

fn last_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i + 1..],
        None => "",
    }
}

/// Text after the last dot of the file name, or `""` if there is none.
pub fn source_extension(path: &Path) -> String {
    last_extension(&file_name(path)).to_string()
}

/// Path of the archive for `input`: the whole file name plus `.ext`.
pub fn archive_path(input: &Path, archive_ext: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(archive_ext);
    PathBuf::from(name)
}

/// Whether `path` carries the archive extension (case-insensitive).
pub fn is_archive(path: &Path, archive_ext: &str) -> bool {
    source_extension(path).eq_ignore_ascii_case(archive_ext)
}

/// Destination for extracting `archive` whose header stored `stored_ext`.
///
/// The archive's own extension is dropped. If what remains already ends in
/// `stored_ext` (any case) it is used as is, otherwise `stored_ext` is
/// appended. With no stored extension every remaining extension is stripped.
pub fn extracted_path(archive: &Path, stored_ext: &str) -> PathBuf {
    let name = file_name(archive);
    let base = match strip_last(&name) {
        "" => "extracted",
        base => base,
    };

    let derived = if stored_ext.is_empty() {
        let mut stem = base;
        while stem.contains('.') {
            stem = strip_last(stem);
        }
        stem.to_string()
    } else if last_extension(base).eq_ignore_ascii_case(stored_ext) && base.contains('.') {
        base.to_string()
    } else {
        format!("{base}.{stored_ext}")
    };
    archive.with_file_name(derived)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_of_file_name_only() {
        assert_eq!(source_extension(Path::new("dir.v2/report.PDF")), "PDF");
        assert_eq!(source_extension(Path::new("dir.v2/Makefile")), "");
        assert_eq!(source_extension(Path::new("a.tar.gz")), "gz");
    }

    #[test]
    fn archive_path_appends() {
        assert_eq!(
            archive_path(Path::new("docs/a.txt"), "huf"),
            PathBuf::from("docs/a.txt.huf")
        );
        assert_eq!(archive_path(Path::new("noext"), "huf"), PathBuf::from("noext.huf"));
    }

    #[test]
    fn archive_detection_ignores_case() {
        assert!(is_archive(Path::new("x.txt.HUF"), "huf"));
        assert!(!is_archive(Path::new("x.txt"), "huf"));
    }

    #[test]
    fn extracted_keeps_matching_extension() {
        assert_eq!(
            extracted_path(Path::new("out/photo.JPG.huf"), "jpg"),
            PathBuf::from("out/photo.JPG")
        );
    }

    #[test]
    fn extracted_appends_stored_extension() {
        assert_eq!(
            extracted_path(Path::new("renamed.huf"), "jpg"),
            PathBuf::from("renamed.jpg")
        );
        assert_eq!(
            extracted_path(Path::new("a.txt.huf"), "md"),
            PathBuf::from("a.txt.md")
        );
    }

    #[test]
    fn extracted_strips_all_without_stored_extension() {
        assert_eq!(extracted_path(Path::new("notes.huf"), ""), PathBuf::from("notes"));
        assert_eq!(extracted_path(Path::new("a.b.c.huf"), ""), PathBuf::from("a"));
    }

    #[test]
    fn extracted_never_empty() {
        assert_eq!(extracted_path(Path::new(".huf"), ""), PathBuf::from("extracted"));
        assert_eq!(extracted_path(Path::new(".huf"), "txt"), PathBuf::from("extracted.txt"));
    }
}
