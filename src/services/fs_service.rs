use std::path::Path;

/// Extensions offered by the file-open dialog and accepted by the app.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_listed_extensions_case_insensitively() {
        assert!(is_image_file(Path::new("rex.jpg")));
        assert!(is_image_file(Path::new("rex.JPEG")));
        assert!(is_image_file(Path::new("/tmp/whiskers.Png")));
        assert!(is_image_file(Path::new("anim.gif")));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("archive.tar.gz")));
        assert!(!is_image_file(Path::new("no_extension")));
    }
}
