//! # Image storage buckets
//!
//! Three buckets hold user-supplied images: avatars, project images, and
//! announcement attachments. Files land beneath the uploads root
//! (`MASONHUB_UPLOAD_DIR`, default `uploads/`) as
//! `<bucket>/<user_id>/<millis>.<ext>` and the web server exposes the root under
//! `/uploads`, so the stored path doubles as the public URL.
//!
//! Uploads accept jpg/jpeg/png/gif/webp/svg only, 5 MiB max.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::ProfileInfo;

/// Extensions accepted for any image upload.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Upload size cap in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A named storage bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    Avatars,
    ProjectImages,
    Announcements,
}

impl Bucket {
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Avatars => "avatars",
            Bucket::ProjectImages => "project-images",
            Bucket::Announcements => "announcements",
        }
    }
}

/// The lowercased extension of `file_name`, if it is an allowed image extension.
pub fn image_extension(file_name: &str) -> Option<String> {
    let ext = file_name.rsplit_once('.')?.1.to_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

#[cfg(feature = "server")]
mod server {
    use std::path::PathBuf;

    use super::{image_extension, Bucket, MAX_IMAGE_BYTES};
    use crate::error::ApiError;

    /// Directory all buckets live under.
    pub fn uploads_root() -> PathBuf {
        dotenvy::dotenv().ok();
        PathBuf::from(
            std::env::var("MASONHUB_UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
        )
    }

    /// Validate and write an image, returning its public URL.
    pub async fn store_image(
        bucket: Bucket,
        user_id: uuid::Uuid,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, ApiError> {
        let ext = image_extension(file_name).ok_or(ApiError::InvalidImageType)?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ApiError::ImageTooLarge);
        }

        let stored_name = format!("{}/{}.{}", user_id, chrono::Utc::now().timestamp_millis(), ext);
        let path = uploads_root().join(bucket.as_str()).join(&stored_name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        Ok(format!("/uploads/{}/{}", bucket.as_str(), stored_name))
    }

    /// Remove a stored image given its public URL. The file is addressed by the
    /// URL's last two segments (`<user_id>/<file>`).
    pub async fn remove_image(bucket: Bucket, url: &str) -> bool {
        let segments: Vec<&str> = url.rsplit('/').take(2).collect();
        let [file, user] = segments[..] else {
            return false;
        };
        let path = uploads_root().join(bucket.as_str()).join(user).join(file);
        tokio::fs::remove_file(&path).await.is_ok()
    }
}

/// Upload an image into a bucket. Requires login; returns the public URL.
#[cfg(feature = "server")]
#[post("/api/storage/upload", session: tower_sessions::Session)]
pub async fn upload_image(
    bucket: Bucket,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<String, ServerFnError> {
    use crate::auth::require_user;

    let me = require_user(&session).await?;

    server::store_image(bucket, me.id, &file_name, &bytes)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(not(feature = "server"))]
#[post("/api/storage/upload")]
pub async fn upload_image(
    bucket: Bucket,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete an uploaded image by public URL. Returns whether a file was removed.
#[cfg(feature = "server")]
#[post("/api/storage/delete", session: tower_sessions::Session)]
pub async fn delete_image(bucket: Bucket, url: String) -> Result<bool, ServerFnError> {
    use crate::auth::require_user;

    require_user(&session).await?;

    Ok(server::remove_image(bucket, &url).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/storage/delete")]
pub async fn delete_image(bucket: Bucket, url: String) -> Result<bool, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Upload an avatar and point the caller's profile at it.
#[cfg(feature = "server")]
#[post("/api/storage/avatar", session: tower_sessions::Session)]
pub async fn set_avatar(file_name: String, bytes: Vec<u8>) -> Result<ProfileInfo, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;
    use crate::models::Profile;

    let me = require_user(&session).await?;

    let url = server::store_image(Bucket::Avatars, me.id, &file_name, &bytes)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let updated: Profile = sqlx::query_as(
        "UPDATE profiles SET avatar_url = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
    )
    .bind(&url)
    .bind(me.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(updated.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/storage/avatar")]
pub async fn set_avatar(file_name: String, bytes: Vec<u8>) -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_extensions() {
        assert_eq!(image_extension("geode.png").as_deref(), Some("png"));
        assert_eq!(image_extension("Geode.JPG").as_deref(), Some("jpg"));
        assert_eq!(image_extension("a.b.webp").as_deref(), Some("webp"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(image_extension("geode.exe"), None);
        assert_eq!(image_extension("geode.pdf"), None);
        assert_eq!(image_extension("no_extension"), None);
    }

    #[test]
    fn bucket_names_match_directories() {
        assert_eq!(Bucket::Avatars.as_str(), "avatars");
        assert_eq!(Bucket::ProjectImages.as_str(), "project-images");
        assert_eq!(Bucket::Announcements.as_str(), "announcements");
    }
}
