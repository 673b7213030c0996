//! # Project server functions
//!
//! Public listing, the VIP/Mason gated listings, creation, deletion, and the
//! download counter. Every read joins the owner's public profile columns via
//! [`ProjectRecord::SELECT`].
//!
//! Gating happens here, not in the database: the VIP and Mason listings check the
//! caller's rank before querying, deletion checks ownership or a moderating rank,
//! and creation forces non-staff submissions to the public tier.
//!
//! [`ProjectRecord::SELECT`]: crate::models::ProjectRecord::SELECT

use dioxus::prelude::*;

use crate::models::{ProjectInfo, ProjectType};

/// Maximum project description length.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Public projects, newest first.
#[cfg(feature = "server")]
#[get("/api/projects")]
pub async fn list_projects() -> Result<Vec<ProjectInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProjectRecord;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!(
        "{} WHERE p.project_type = 'public' ORDER BY p.created_at DESC LIMIT 50",
        ProjectRecord::SELECT
    );
    let records: Vec<ProjectRecord> = sqlx::query_as(&query)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(records.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/projects")]
pub async fn list_projects() -> Result<Vec<ProjectInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Projects in a gated tier. The caller's rank must pass the tier's gate.
#[cfg(feature = "server")]
#[get("/api/projects/tier/:tier", session: tower_sessions::Session)]
pub async fn list_projects_by_type(tier: String) -> Result<Vec<ProjectInfo>, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;
    use crate::models::ProjectRecord;

    let tier = ProjectType::parse(&tier);
    if tier != ProjectType::Public {
        let me = require_user(&session).await?;
        if !tier.visible_to(me.user_rank) {
            return Err(ServerFnError::new("Access denied"));
        }
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!(
        "{} WHERE p.project_type = $1 ORDER BY p.created_at DESC",
        ProjectRecord::SELECT
    );
    let records: Vec<ProjectRecord> = sqlx::query_as(&query)
        .bind(tier)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(records.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/projects/tier/:tier")]
pub async fn list_projects_by_type(tier: String) -> Result<Vec<ProjectInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// A single project with its owner, `None` when missing.
#[cfg(feature = "server")]
#[get("/api/projects/:id")]
pub async fn get_project(id: String) -> Result<Option<ProjectInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProjectRecord;

    let project_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!("{} WHERE p.id = $1", ProjectRecord::SELECT);
    let record: Option<ProjectRecord> = sqlx::query_as(&query)
        .bind(project_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(record.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/projects/:id")]
pub async fn get_project(id: String) -> Result<Option<ProjectInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All projects owned by a user, for the public profile page.
#[cfg(feature = "server")]
#[get("/api/projects/by-user/:user_id")]
pub async fn list_projects_by_user(user_id: String) -> Result<Vec<ProjectInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProjectRecord;

    let owner_id =
        uuid::Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!(
        "{} WHERE p.user_id = $1 ORDER BY p.created_at DESC",
        ProjectRecord::SELECT
    );
    let records: Vec<ProjectRecord> = sqlx::query_as(&query)
        .bind(owner_id)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(records.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/projects/by-user/:user_id")]
pub async fn list_projects_by_user(user_id: String) -> Result<Vec<ProjectInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a project owned by the caller.
///
/// Non-staff callers always publish public; staff submissions carry the official
/// flag.
#[cfg(feature = "server")]
#[post("/api/projects", session: tower_sessions::Session)]
pub async fn create_project(
    title: String,
    description: String,
    language: String,
    download_link: String,
    image_url: Option<String>,
    project_type: ProjectType,
) -> Result<ProjectInfo, ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;
    use crate::models::ProjectRecord;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Project title is required"));
    }
    if download_link.trim().is_empty() {
        return Err(ServerFnError::new("Download link is required"));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ServerFnError::new(
            "Description must be at most 200 characters",
        ));
    }

    let me = require_user(&session).await?;

    let tier = if project_type.allowed_for(me.user_rank) {
        project_type
    } else {
        ProjectType::Public
    };
    let is_official = me.user_rank.is_staff();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let inserted: (uuid::Uuid,) = sqlx::query_as(
        "INSERT INTO projects \
         (user_id, title, description, language, download_link, image_url, project_type, is_official) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
    )
    .bind(me.id)
    .bind(&title)
    .bind(description.trim())
    .bind(language.trim())
    .bind(download_link.trim())
    .bind(&image_url)
    .bind(tier)
    .bind(is_official)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let query = format!("{} WHERE p.id = $1", ProjectRecord::SELECT);
    let record: ProjectRecord = sqlx::query_as(&query)
        .bind(inserted.0)
        .fetch_one(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(record.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/projects")]
pub async fn create_project(
    title: String,
    description: String,
    language: String,
    download_link: String,
    image_url: Option<String>,
    project_type: ProjectType,
) -> Result<ProjectInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a project. Allowed for the owner and for moderating ranks.
#[cfg(feature = "server")]
#[post("/api/projects/delete", session: tower_sessions::Session)]
pub async fn delete_project(id: String) -> Result<(), ServerFnError> {
    use crate::auth::require_user;
    use crate::db::get_pool;

    let project_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let me = require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let owner: Option<(uuid::Uuid,)> =
        sqlx::query_as("SELECT user_id FROM projects WHERE id = $1")
            .bind(project_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some((owner_id,)) = owner else {
        return Err(ServerFnError::new("Project not found"));
    };

    if owner_id != me.id && !me.user_rank.can_moderate_projects() {
        return Err(ServerFnError::new("Access denied"));
    }

    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(project_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/projects/delete")]
pub async fn delete_project(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Bump a project's download counter and return its download link.
#[cfg(feature = "server")]
#[post("/api/projects/download")]
pub async fn record_download(id: String) -> Result<String, ServerFnError> {
    use crate::db::get_pool;

    let project_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let link: Option<(String,)> = sqlx::query_as(
        "UPDATE projects SET download_count = download_count + 1 \
         WHERE id = $1 RETURNING download_link",
    )
    .bind(project_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    match link {
        Some((link,)) => Ok(link),
        None => Err(ServerFnError::new("Project not found")),
    }
}

#[cfg(not(feature = "server"))]
#[post("/api/projects/download")]
pub async fn record_download(id: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
