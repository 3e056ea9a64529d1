//! MIME type resolution
//!
//! Maps filename extensions to content types for the two publishing tools.
//! Detection is by extension only; file contents are never sniffed.
//!
//! The two tools keep separate tables with different fallbacks. Path-based
//! callers overwhelmingly publish photos, so unknown extensions become
//! `image/jpeg` there. Content-based callers send anything, so the content
//! table is broader and falls back to `application/octet-stream`.

use std::path::Path;

/// Resolve the content type for a path-based upload.
///
/// An explicit, non-empty `content_type` always wins. Otherwise the
/// lowercased extension of `name` is looked up in the image-leaning path
/// table; unknown or missing extensions resolve to `image/jpeg`.
pub fn resolve_for_path(name: &str, content_type: Option<&str>) -> String {
    if let Some(explicit) = content_type.filter(|t| !t.is_empty()) {
        return explicit.to_string();
    }
    extension_of(name)
        .as_deref()
        .and_then(path_table)
        .unwrap_or("image/jpeg")
        .to_string()
}

/// Resolve the MIME type for a content-based upload.
///
/// Same precedence as [`resolve_for_path`], but against the broader content
/// table; unknown or missing extensions resolve to
/// `application/octet-stream`.
pub fn resolve_for_content(name: &str, mime_type: Option<&str>) -> String {
    if let Some(explicit) = mime_type.filter(|t| !t.is_empty()) {
        return explicit.to_string();
    }
    extension_of(name)
        .as_deref()
        .and_then(content_table)
        .unwrap_or("application/octet-stream")
        .to_string()
}

/// Lowercased extension of `name` including the leading dot, or `None` when
/// the filename has no extension.
fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// Extension table for path-based uploads.
fn path_table(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        ".jpg" | ".jpeg" => "image/jpeg",
        ".png" => "image/png",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".svg" => "image/svg+xml",
        ".avif" => "image/avif",
        ".bmp" => "image/bmp",
        ".ico" => "image/x-icon",
        ".tiff" | ".tif" => "image/tiff",
        ".heic" => "image/heic",
        _ => return None,
    };
    Some(mime)
}

/// Extension table for content-based uploads.
fn content_table(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        // Images
        ".jpg" | ".jpeg" => "image/jpeg",
        ".png" => "image/png",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".svg" => "image/svg+xml",
        ".bmp" => "image/bmp",
        ".ico" => "image/x-icon",
        ".tiff" | ".tif" => "image/tiff",
        // Text
        ".txt" => "text/plain",
        ".md" => "text/markdown",
        ".html" | ".htm" => "text/html",
        ".css" => "text/css",
        ".csv" => "text/csv",
        ".js" => "text/javascript",
        ".json" => "application/json",
        ".xml" => "application/xml",
        ".yaml" | ".yml" => "application/yaml",
        // Documents
        ".pdf" => "application/pdf",
        ".doc" => "application/msword",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".xls" => "application/vnd.ms-excel",
        ".xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ".ppt" => "application/vnd.ms-powerpoint",
        ".pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        // Archives
        ".zip" => "application/zip",
        ".gz" => "application/gzip",
        ".tar" => "application/x-tar",
        ".7z" => "application/x-7z-compressed",
        // Audio
        ".mp3" => "audio/mpeg",
        ".wav" => "audio/wav",
        ".ogg" => "audio/ogg",
        ".flac" => "audio/flac",
        ".m4a" => "audio/mp4",
        // Video
        ".mp4" => "video/mp4",
        ".webm" => "video/webm",
        ".mov" => "video/quicktime",
        ".avi" => "video/x-msvideo",
        ".mkv" => "video/x-matroska",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_type_wins() {
        assert_eq!(
            resolve_for_path("photo.png", Some("application/x-custom")),
            "application/x-custom"
        );
        assert_eq!(
            resolve_for_content("notes.txt", Some("application/x-custom")),
            "application/x-custom"
        );
    }

    #[test]
    fn test_empty_explicit_type_is_ignored() {
        assert_eq!(resolve_for_path("photo.png", Some("")), "image/png");
        assert_eq!(resolve_for_content("notes.txt", Some("")), "text/plain");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(resolve_for_path("PHOTO.PNG", None), "image/png");
        assert_eq!(resolve_for_path("photo.Jpeg", None), "image/jpeg");
        assert_eq!(resolve_for_content("README.MD", None), "text/markdown");
    }

    #[test]
    fn test_path_components_are_ignored() {
        assert_eq!(resolve_for_path("/tmp/shots/photo.gif", None), "image/gif");
        assert_eq!(resolve_for_content("a/b/c/data.json", None), "application/json");
    }

    #[test]
    fn test_path_default_is_jpeg() {
        assert_eq!(resolve_for_path("dump.bin", None), "image/jpeg");
        assert_eq!(resolve_for_path("no_extension", None), "image/jpeg");
    }

    #[test]
    fn test_content_default_is_octet_stream() {
        assert_eq!(resolve_for_content("dump.bin", None), "application/octet-stream");
        assert_eq!(resolve_for_content("no_extension", None), "application/octet-stream");
    }

    #[test]
    fn test_tables_diverge_beyond_images() {
        // The path table only knows images; everything else lands on its
        // jpeg fallback even when the content table knows better.
        assert_eq!(resolve_for_path("notes.txt", None), "image/jpeg");
        assert_eq!(resolve_for_content("notes.txt", None), "text/plain");
    }

    #[test]
    fn test_common_content_types() {
        assert_eq!(resolve_for_content("movie.mp4", None), "video/mp4");
        assert_eq!(resolve_for_content("song.mp3", None), "audio/mpeg");
        assert_eq!(resolve_for_content("report.pdf", None), "application/pdf");
        assert_eq!(resolve_for_content("bundle.tar", None), "application/x-tar");
    }
}
