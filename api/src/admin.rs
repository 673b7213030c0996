//! # Admin panel server functions
//!
//! User management: rank changes, verification, bans, badges, deletion, and
//! administrator-initiated password changes. Every function re-checks the caller's
//! rank via [`require_admin`]; the rendering-side gate on the `/masonadmin` route is
//! cosmetic.
//!
//! [`require_admin`]: crate::auth::require_admin

use dioxus::prelude::*;

use crate::models::ProfileInfo;

/// Every profile, newest first, for the user-management table.
#[cfg(feature = "server")]
#[get("/api/admin/users", session: tower_sessions::Session)]
pub async fn admin_list_users() -> Result<Vec<ProfileInfo>, ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;
    use crate::models::Profile;

    require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profiles: Vec<Profile> =
        sqlx::query_as("SELECT * FROM profiles ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profiles.iter().map(|p| p.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/users")]
pub async fn admin_list_users() -> Result<Vec<ProfileInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Set a user's rank.
#[cfg(feature = "server")]
#[post("/api/admin/rank", session: tower_sessions::Session)]
pub async fn admin_set_rank(user_id: String, rank: String) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;
    use crate::models::Rank;

    require_admin(&session).await?;

    let target =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE profiles SET user_rank = $1, updated_at = NOW() WHERE id = $2")
        .bind(Rank::parse(&rank))
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/rank")]
pub async fn admin_set_rank(user_id: String, rank: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Toggle a user's verification mark.
#[cfg(feature = "server")]
#[post("/api/admin/verify", session: tower_sessions::Session)]
pub async fn admin_set_verified(user_id: String, verified: bool) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let target =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE profiles SET is_verified = $1, updated_at = NOW() WHERE id = $2")
        .bind(verified)
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/verify")]
pub async fn admin_set_verified(user_id: String, verified: bool) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Ban or unban a user. Banned users cannot log in.
#[cfg(feature = "server")]
#[post("/api/admin/ban", session: tower_sessions::Session)]
pub async fn admin_set_banned(user_id: String, banned: bool) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let target =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE profiles SET is_banned = $1, updated_at = NOW() WHERE id = $2")
        .bind(banned)
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/ban")]
pub async fn admin_set_banned(user_id: String, banned: bool) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Set or clear a user's mason badge. An empty string clears it.
#[cfg(feature = "server")]
#[post("/api/admin/badge", session: tower_sessions::Session)]
pub async fn admin_set_badge(user_id: String, badge: String) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let target =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let badge = badge.trim();
    let badge = (!badge.is_empty()).then_some(badge);

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE profiles SET mason_badge = $1, updated_at = NOW() WHERE id = $2")
        .bind(badge)
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/badge")]
pub async fn admin_set_badge(user_id: String, badge: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a user and all of their projects. Admins cannot delete themselves.
#[cfg(feature = "server")]
#[post("/api/admin/delete-user", session: tower_sessions::Session)]
pub async fn admin_delete_user(user_id: String) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    let me = require_admin(&session).await?;

    let target =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    if target == me.id {
        return Err(ServerFnError::new("You cannot delete your own account"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM projects WHERE user_id = $1")
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/delete-user")]
pub async fn admin_delete_user(user_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Change another user's password.
#[cfg(feature = "server")]
#[post("/api/admin/password", session: tower_sessions::Session)]
pub async fn admin_set_password(
    user_id: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    use crate::auth::{hash_password, require_admin, MIN_PASSWORD_LEN};
    use crate::db::get_pool;

    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(ServerFnError::new("Password must be at least 6 characters"));
    }

    require_admin(&session).await?;

    let target =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let password_hash = hash_password(&new_password).map_err(ServerFnError::new)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("UPDATE profiles SET password_hash = $1, updated_at = NOW() WHERE id = $2")
        .bind(&password_hash)
        .bind(target)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/password")]
pub async fn admin_set_password(
    user_id: String,
    new_password: String,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
