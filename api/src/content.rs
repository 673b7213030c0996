//! # Announcements and rules
//!
//! Public reads, admin-only writes. Both record kinds are plain titled content;
//! announcements additionally carry a list of image URLs uploaded through the
//! `announcements` bucket.

use dioxus::prelude::*;

use crate::models::{AnnouncementInfo, RuleInfo};

/// All announcements, newest first.
#[cfg(feature = "server")]
#[get("/api/announcements")]
pub async fn list_announcements() -> Result<Vec<AnnouncementInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Announcement;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!("{} ORDER BY a.created_at DESC", Announcement::SELECT);
    let rows: Vec<Announcement> = sqlx::query_as(&query)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|a| a.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/announcements")]
pub async fn list_announcements() -> Result<Vec<AnnouncementInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create an announcement (admin only).
#[cfg(feature = "server")]
#[post("/api/announcements", session: tower_sessions::Session)]
pub async fn create_announcement(
    title: String,
    content: String,
    images: Vec<String>,
) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ServerFnError::new("Please fill all fields"));
    }

    let me = require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "INSERT INTO announcements (title, content, images, created_by) VALUES ($1, $2, $3, $4)",
    )
    .bind(title.trim())
    .bind(content.trim())
    .bind(sqlx::types::Json(&images))
    .bind(me.id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/announcements")]
pub async fn create_announcement(
    title: String,
    content: String,
    images: Vec<String>,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update an announcement (admin only).
#[cfg(feature = "server")]
#[post("/api/announcements/update", session: tower_sessions::Session)]
pub async fn update_announcement(
    id: String,
    title: String,
    content: String,
    images: Vec<String>,
) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ServerFnError::new("Please fill all fields"));
    }

    require_admin(&session).await?;

    let announcement_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE announcements SET title = $1, content = $2, images = $3, updated_at = NOW() \
         WHERE id = $4",
    )
    .bind(title.trim())
    .bind(content.trim())
    .bind(sqlx::types::Json(&images))
    .bind(announcement_id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/announcements/update")]
pub async fn update_announcement(
    id: String,
    title: String,
    content: String,
    images: Vec<String>,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete an announcement (admin only).
#[cfg(feature = "server")]
#[post("/api/announcements/delete", session: tower_sessions::Session)]
pub async fn delete_announcement(id: String) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let announcement_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM announcements WHERE id = $1")
        .bind(announcement_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/announcements/delete")]
pub async fn delete_announcement(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All rules, newest first.
#[cfg(feature = "server")]
#[get("/api/rules")]
pub async fn list_rules() -> Result<Vec<RuleInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::Rule;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!("{} ORDER BY r.created_at DESC", Rule::SELECT);
    let rows: Vec<Rule> = sqlx::query_as(&query)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/rules")]
pub async fn list_rules() -> Result<Vec<RuleInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a rule (admin only).
#[cfg(feature = "server")]
#[post("/api/rules", session: tower_sessions::Session)]
pub async fn create_rule(title: String, content: String) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ServerFnError::new("Please fill all fields"));
    }

    let me = require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("INSERT INTO rules (title, content, created_by) VALUES ($1, $2, $3)")
        .bind(title.trim())
        .bind(content.trim())
        .bind(me.id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/rules")]
pub async fn create_rule(title: String, content: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a rule (admin only).
#[cfg(feature = "server")]
#[post("/api/rules/update", session: tower_sessions::Session)]
pub async fn update_rule(id: String, title: String, content: String) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ServerFnError::new("Please fill all fields"));
    }

    require_admin(&session).await?;

    let rule_id = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query(
        "UPDATE rules SET title = $1, content = $2, updated_at = NOW() WHERE id = $3",
    )
    .bind(title.trim())
    .bind(content.trim())
    .bind(rule_id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/rules/update")]
pub async fn update_rule(id: String, title: String, content: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a rule (admin only).
#[cfg(feature = "server")]
#[post("/api/rules/delete", session: tower_sessions::Session)]
pub async fn delete_rule(id: String) -> Result<(), ServerFnError> {
    use crate::auth::require_admin;
    use crate::db::get_pool;

    require_admin(&session).await?;

    let rule_id = uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM rules WHERE id = $1")
        .bind(rule_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/rules/delete")]
pub async fn delete_rule(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
