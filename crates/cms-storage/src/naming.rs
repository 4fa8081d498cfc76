//! Stored file name generation.

use uuid::Uuid;

/// Generate a unique stored file name, preserving the original extension.
///
/// The original name is otherwise discarded: client-supplied names are not
/// safe to use as filesystem paths.
pub fn stored_file_name(original_name: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    match extension_of(original_name) {
        Some(ext) => format!("{id}.{ext}"),
        None => id,
    }
}

/// Extract a sanitized lowercase extension from a client file name.
fn extension_of(name: &str) -> Option<String> {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext)?;
    if ext.is_empty() || ext.len() > 16 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_extension() {
        let name = stored_file_name("사진자료.JPG");
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_no_extension() {
        let name = stored_file_name("README");
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_rejects_bogus_extension() {
        let name = stored_file_name("report.tar.gz/../../etc");
        assert!(!name.contains("/"));
        assert!(!name.contains(".."));
    }

    #[test]
    fn test_names_are_unique() {
        assert_ne!(stored_file_name("a.png"), stored_file_name("a.png"));
    }
}
