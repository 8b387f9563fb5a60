//! Naming helpers shared by the media-storage variants.

use std::path::Path;

use domains::gallery::UploadFile;

/// Picks the stored file's extension: the original name's extension when
/// it has one, otherwise the first extension registered for the declared
/// content type.
pub(crate) fn extension_for(file: &UploadFile) -> String {
    Path::new(&file.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .or_else(|| {
            mime_guess::get_mime_extensions(&file.content_type)
                .and_then(|exts| exts.first())
                .map(|ext| (*ext).to_string())
        })
        .unwrap_or_else(|| "bin".to_string())
}

/// Keeps the original name readable while making it safe as a path
/// component.
pub(crate) fn sanitize_stem(original: &str) -> String {
    let stem = Path::new(original)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("upload");

    let mut cleaned: String = stem
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .take(40)
        .collect();

    if cleaned.chars().all(|c| c == '_') {
        cleaned = "upload".to_string();
    }
    cleaned
}
