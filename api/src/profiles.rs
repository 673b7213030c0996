//! # Profile server functions
//!
//! Public lookups feed the members directory, the Mason team page, and the public
//! profile view; the mutating functions only ever touch the calling user's own row.
//! Rank changes, badges, verification, and bans are admin operations and live in
//! [`crate::admin`].

use dioxus::prelude::*;

use crate::models::ProfileInfo;

/// Maximum bio length, enforced on both the form and the write.
pub const MAX_BIO_LEN: usize = 300;

/// Look up a profile by username. Tolerates a leading `@`.
#[cfg(feature = "server")]
#[get("/api/profiles/:username")]
pub async fn get_profile(username: String) -> Result<Option<ProfileInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Profile;

    let clean = username.strip_prefix('@').unwrap_or(&username).to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<Profile> = sqlx::query_as("SELECT * FROM profiles WHERE username = $1")
        .bind(&clean)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile.map(|p| p.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/profiles/:username")]
pub async fn get_profile(username: String) -> Result<Option<ProfileInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All community members, newest first.
#[cfg(feature = "server")]
#[get("/api/members")]
pub async fn list_members() -> Result<Vec<ProfileInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Profile;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profiles: Vec<Profile> =
        sqlx::query_as("SELECT * FROM profiles ORDER BY created_at DESC LIMIT 100")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profiles.iter().map(|p| p.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/members")]
pub async fn list_members() -> Result<Vec<ProfileInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Mason team members: admins, developers, and mason officials.
#[cfg(feature = "server")]
#[get("/api/members/mason")]
pub async fn list_mason_members() -> Result<Vec<ProfileInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Profile;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profiles: Vec<Profile> = sqlx::query_as(
        "SELECT * FROM profiles \
         WHERE user_rank IN ('admin', 'developer', 'mason_official') \
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profiles.iter().map(|p| p.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/members/mason")]
pub async fn list_mason_members() -> Result<Vec<ProfileInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update the caller's display name and bio.
#[cfg(feature = "server")]
#[post("/api/profiles/me", session: tower_sessions::Session)]
pub async fn update_profile(
    display_name: String,
    bio: String,
) -> Result<ProfileInfo, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;
    use crate::models::Profile;

    if bio.chars().count() > MAX_BIO_LEN {
        return Err(ServerFnError::new("Bio must be at most 300 characters"));
    }

    let me = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let updated: Profile = sqlx::query_as(
        "UPDATE profiles SET display_name = $1, bio = $2, updated_at = NOW() \
         WHERE id = $3 RETURNING *",
    )
    .bind(display_name.trim())
    .bind(bio.trim())
    .bind(me.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(updated.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profiles/me")]
pub async fn update_profile(
    display_name: String,
    bio: String,
) -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Append a social link to the caller's profile.
#[cfg(feature = "server")]
#[post("/api/profiles/me/links", session: tower_sessions::Session)]
pub async fn add_social_link(platform: String, url: String) -> Result<ProfileInfo, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;
    use crate::models::{Profile, SocialLink};

    if platform.trim().is_empty() || url.trim().is_empty() {
        return Err(ServerFnError::new("Platform and URL are required"));
    }

    let me = require_user(&session).await?;

    let mut links = me.social_links.0.clone();
    links.push(SocialLink {
        platform: platform.trim().to_string(),
        url: url.trim().to_string(),
    });

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let updated: Profile = sqlx::query_as(
        "UPDATE profiles SET social_links = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
    )
    .bind(sqlx::types::Json(&links))
    .bind(me.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(updated.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profiles/me/links")]
pub async fn add_social_link(platform: String, url: String) -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove the social link at `index` from the caller's profile.
#[cfg(feature = "server")]
#[post("/api/profiles/me/links/remove", session: tower_sessions::Session)]
pub async fn remove_social_link(index: usize) -> Result<ProfileInfo, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;
    use crate::models::Profile;

    let me = require_user(&session).await?;

    let mut links = me.social_links.0.clone();
    if index >= links.len() {
        return Err(ServerFnError::new("No such link"));
    }
    links.remove(index);

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let updated: Profile = sqlx::query_as(
        "UPDATE profiles SET social_links = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
    )
    .bind(sqlx::types::Json(&links))
    .bind(me.id)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(updated.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/profiles/me/links/remove")]
pub async fn remove_social_link(index: usize) -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
