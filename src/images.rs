// src/images.rs
use std::path::PathBuf;

use http::header::CONTENT_TYPE;
use sha2::{Digest, Sha256};
use tracing::error;

/// Failure modes of the image fetch-and-save step.
#[derive(Debug)]
pub enum ImageError {
    Fetch(reqwest::Error),
    NotAnImage(Option<String>),
    Io(std::io::Error),
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::Fetch(e) => write!(f, "fetch failed: {}", e),
            ImageError::NotAnImage(Some(ct)) => write!(f, "content type is not an image: {}", ct),
            ImageError::NotAnImage(None) => write!(f, "response carried no content type"),
            ImageError::Io(e) => write!(f, "write failed: {}", e),
        }
    }
}

impl From<reqwest::Error> for ImageError {
    fn from(err: reqwest::Error) -> Self {
        ImageError::Fetch(err)
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err)
    }
}

/// Content-addressed store for product images in one flat directory.
///
/// Filenames derive from the SHA-256 of the bytes, so saving identical
/// bytes twice yields the same `/uploads/...` path and a single file.
/// Saves are never retried and deleted products leave their files behind.
#[derive(Clone)]
pub struct ImageStore {
    client: reqwest::Client,
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::Client::new(),
            dir: dir.into(),
        }
    }

    /// Fetch a remote image and persist it locally. The response must
    /// declare an `image/*` content type.
    pub async fn save_remote(&self, url: &str) -> Result<String, ImageError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let content_type = match content_type {
            Some(ct) if ct.starts_with("image/") => ct,
            other => {
                error!(content_type = ?other, %url, "Rejected non-image content type");
                return Err(ImageError::NotAnImage(other));
            }
        };

        let bytes = response.bytes().await?;
        self.save_bytes(&bytes, &content_type).await
    }

    /// Persist raw bytes under a digest-derived name and return the
    /// relative path the static file server exposes them at.
    pub async fn save_bytes(&self, bytes: &[u8], content_type: &str) -> Result<String, ImageError> {
        let digest = format!("{:x}", Sha256::digest(bytes));
        let file_name = format!("product_{}.{}", &digest[..16], extension_for(content_type));

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(&file_name);
        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::write(&path, bytes).await?;
        }

        Ok(format!("/uploads/{}", file_name))
    }
}

/// File extension for a MIME content type, e.g. `image/png` -> `png`.
fn extension_for(content_type: &str) -> &str {
    match content_type.split('/').nth(1) {
        None | Some("") => "jpg",
        Some(subtype) => match subtype.split(['+', ';']).next() {
            None | Some("") => "jpg",
            Some(ext) => ext,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};

    const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x01];

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{}", addr)
    }

    #[test]
    fn extension_follows_content_type() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/jpeg"), "jpeg");
        assert_eq!(extension_for("image/svg+xml"), "svg");
        assert_eq!(extension_for("image/webp; charset=binary"), "webp");
        assert_eq!(extension_for("garbage"), "jpg");
    }

    #[tokio::test]
    async fn save_bytes_is_content_addressed() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let first = store.save_bytes(PNG_BYTES, "image/png").await.unwrap();
        let second = store.save_bytes(PNG_BYTES, "image/png").await.unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with("/uploads/product_"));
        assert!(first.ends_with(".png"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn distinct_bytes_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let first = store.save_bytes(b"first image", "image/png").await.unwrap();
        let second = store.save_bytes(b"second image", "image/png").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn save_remote_persists_image_responses() {
        let app = Router::new().route(
            "/pic",
            get(|| async { ([(CONTENT_TYPE, "image/png")], PNG_BYTES) }),
        );
        let base = serve(app).await;

        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let path = store.save_remote(&format!("{}/pic", base)).await.unwrap();
        let file_name = path.trim_start_matches("/uploads/");
        assert_eq!(
            std::fs::read(dir.path().join(file_name)).unwrap(),
            PNG_BYTES
        );
    }

    #[tokio::test]
    async fn save_remote_rejects_non_image_content() {
        let app = Router::new().route("/page", get(|| async { "just text" }));
        let base = serve(app).await;

        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let err = store
            .save_remote(&format!("{}/page", base))
            .await
            .unwrap_err();
        assert!(matches!(err, ImageError::NotAnImage(Some(_))));
        // rejected before any write
        assert_eq!(std::fs::read_dir(dir.path()).map(|d| d.count()).unwrap_or(0), 0);
    }

    #[tokio::test]
    async fn save_remote_surfaces_http_errors() {
        let base = serve(Router::new()).await;

        let store = ImageStore::new(tempfile::tempdir().unwrap().path());
        let err = store
            .save_remote(&format!("{}/missing", base))
            .await
            .unwrap_err();
        assert!(matches!(err, ImageError::Fetch(_)));
    }
}
