//! Image sources for category and product image uploads.
//!
//! Upload endpoints accept either a remote URL or a local file. The two
//! cases are modeled as a tagged [`ImageSource`] decided once at the call
//! boundary: a URL is sent as a JSON body (`{"image_url": ...}`), a local
//! file is validated and streamed as multipart form data under the
//! `image_file` field.

use std::fs;
use std::path::PathBuf;

use serde_json::json;

use crate::clients::{RequestBody, UploadError};

/// The source of an image to upload.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::ImageSource;
///
/// let remote = ImageSource::detect("https://cdn.example.com/shirt.png");
/// assert!(matches!(remote, ImageSource::Url(_)));
///
/// let local = ImageSource::detect("images/shirt.png");
/// assert!(matches!(local, ImageSource::File(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    /// A remote image, referenced by URL.
    Url(String),
    /// A local image file, uploaded as multipart form data.
    File(PathBuf),
}

impl ImageSource {
    /// Classifies a raw string as a URL or a local file path.
    ///
    /// A value is treated as a URL when it parses as an absolute URL with a
    /// host; anything else is taken to be a local path. Detection happens
    /// here once; upload methods never re-inspect the value.
    #[must_use]
    pub fn detect(source: impl Into<String>) -> Self {
        let source = source.into();
        match reqwest::Url::parse(&source) {
            Ok(url) if url.has_host() => Self::Url(source),
            _ => Self::File(PathBuf::from(source)),
        }
    }

    /// Converts the source into a request body, validating local files.
    ///
    /// Local files are checked in order: existence, then regular-file, then
    /// readability. Each failure produces a distinct [`UploadError`] naming
    /// the file, and no request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] when a local file fails any of the checks.
    pub(crate) fn into_body(self) -> Result<RequestBody, UploadError> {
        match self {
            Self::Url(url) => Ok(RequestBody::Json(json!({ "image_url": url }))),
            Self::File(path) => {
                if !path.exists() {
                    return Err(UploadError::Missing { path });
                }

                if !path.is_file() {
                    return Err(UploadError::NotAFile { path });
                }

                if fs::File::open(&path).is_err() {
                    return Err(UploadError::Unreadable { path });
                }

                Ok(RequestBody::ImageFile(path))
            }
        }
    }
}

impl From<&str> for ImageSource {
    fn from(source: &str) -> Self {
        Self::detect(source)
    }
}

impl From<String> for ImageSource {
    fn from(source: String) -> Self {
        Self::detect(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_https_url() {
        let source = ImageSource::detect("https://cdn.example.com/image.png");
        assert_eq!(
            source,
            ImageSource::Url("https://cdn.example.com/image.png".to_string())
        );
    }

    #[test]
    fn test_detect_http_url() {
        assert!(matches!(
            ImageSource::detect("http://example.com/a.jpg"),
            ImageSource::Url(_)
        ));
    }

    #[test]
    fn test_detect_relative_path() {
        let source = ImageSource::detect("images/shirt.png");
        assert_eq!(source, ImageSource::File(PathBuf::from("images/shirt.png")));
    }

    #[test]
    fn test_detect_absolute_path() {
        let source = ImageSource::detect("/tmp/shirt.png");
        assert_eq!(source, ImageSource::File(PathBuf::from("/tmp/shirt.png")));
    }

    #[test]
    fn test_url_source_becomes_json_body() {
        let body = ImageSource::detect("https://cdn.example.com/image.png")
            .into_body()
            .unwrap();

        match body {
            RequestBody::Json(value) => {
                assert_eq!(value["image_url"], "https://cdn.example.com/image.png");
            }
            RequestBody::ImageFile(_) => panic!("expected JSON body"),
        }
    }

    #[test]
    fn test_missing_file_fails_first() {
        let error = ImageSource::File(PathBuf::from("/definitely/not/here.png"))
            .into_body()
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            r#"File "/definitely/not/here.png" does not exist."#
        );
    }

    #[test]
    fn test_directory_fails_as_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = ImageSource::File(dir.path().to_path_buf())
            .into_body()
            .unwrap_err();

        assert!(matches!(error, UploadError::NotAFile { .. }));
        assert!(error.to_string().ends_with("is not a valid file."));
    }

    #[test]
    fn test_readable_file_becomes_multipart_body() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fake image bytes").unwrap();

        let body = ImageSource::File(file.path().to_path_buf())
            .into_body()
            .unwrap();

        assert!(matches!(body, RequestBody::ImageFile(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_fails_last() {
        use std::os::unix::fs::PermissionsExt;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"secret").unwrap();
        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root; nothing to assert there.
        if fs::File::open(file.path()).is_ok() {
            return;
        }

        let error = ImageSource::File(file.path().to_path_buf())
            .into_body()
            .unwrap_err();

        assert!(matches!(error, UploadError::Unreadable { .. }));
        assert!(error.to_string().ends_with("is not readable."));
    }
}
