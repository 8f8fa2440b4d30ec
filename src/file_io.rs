use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes exported deck/note bytes next to where the app was launched,
/// the terminal stand-in for a browser download.
pub fn save_export(bytes: &[u8], filename: &str) -> io::Result<PathBuf> {
    save_export_in(Path::new("."), bytes, filename)
}

pub fn save_export_in(dir: &Path, bytes: &[u8], filename: &str) -> io::Result<PathBuf> {
    let path = dir.join(sanitize_filename(filename));
    fs::write(&path, bytes)?;
    Ok(path)
}

/// List names become filenames; strip anything that would escape the
/// directory or upset the filesystem.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            _ => c,
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "export".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_export_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_export_in(dir.path(), b"deck bytes", "Verbs.apkg").unwrap();

        assert_eq!(path, dir.path().join("Verbs.apkg"));
        assert_eq!(fs::read(path).unwrap(), b"deck bytes");
    }

    #[test]
    fn test_save_export_sanitizes_separators() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_export_in(dir.path(), b"x", "a/b\\c.zip").unwrap();

        assert_eq!(path, dir.path().join("a-b-c.zip"));
        assert!(path.exists());
    }

    #[test]
    fn test_sanitize_filename_empty_becomes_placeholder() {
        assert_eq!(sanitize_filename("   "), "export");
        assert_eq!(sanitize_filename("???"), "---");
    }
}
