//! # Project model
//!
//! A shareable item: a rock-collection project with an external download link.
//! Project reads always join the owner's public profile columns, mirroring the nested
//! owner select the pages rely on, so [`ProjectRecord`] is the flat row produced by
//! that join and [`ProjectInfo`] nests the owner back as [`ProjectOwner`].

use serde::{Deserialize, Serialize};

use super::{ProjectType, Rank};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Project row joined with its owner's public columns.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub download_link: String,
    pub image_url: Option<String>,
    pub project_type: ProjectType,
    pub is_official: bool,
    pub featured: bool,
    pub download_count: i64,
    pub created_at: DateTime<Utc>,
    pub owner_username: String,
    pub owner_display_name: Option<String>,
    pub owner_rank: Rank,
    pub owner_verified: bool,
    pub owner_avatar_url: Option<String>,
}

#[cfg(feature = "server")]
impl ProjectRecord {
    /// Columns and join shared by every project query.
    pub const SELECT: &'static str = "SELECT p.id, p.user_id, p.title, p.description, p.language, \
         p.download_link, p.image_url, p.project_type, p.is_official, p.featured, \
         p.download_count, p.created_at, \
         pr.username AS owner_username, pr.display_name AS owner_display_name, \
         pr.user_rank AS owner_rank, pr.is_verified AS owner_verified, \
         pr.avatar_url AS owner_avatar_url \
         FROM projects p JOIN profiles pr ON pr.id = p.user_id";

    /// Convert to ProjectInfo for client consumption.
    pub fn to_info(&self) -> ProjectInfo {
        ProjectInfo {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            language: self.language.clone(),
            download_link: self.download_link.clone(),
            image_url: self.image_url.clone(),
            project_type: self.project_type,
            is_official: self.is_official,
            featured: self.featured,
            download_count: self.download_count,
            created_at: self.created_at.to_rfc3339(),
            owner: ProjectOwner {
                username: self.owner_username.clone(),
                display_name: self.owner_display_name.clone(),
                rank: self.owner_rank,
                is_verified: self.owner_verified,
                avatar_url: self.owner_avatar_url.clone(),
            },
        }
    }
}

/// Public profile columns of a project's owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOwner {
    pub username: String,
    pub display_name: Option<String>,
    pub rank: Rank,
    pub is_verified: bool,
    pub avatar_url: Option<String>,
}

impl ProjectOwner {
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Project information safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub download_link: String,
    pub image_url: Option<String>,
    pub project_type: ProjectType,
    pub is_official: bool,
    pub featured: bool,
    pub download_count: i64,
    pub created_at: String,
    pub owner: ProjectOwner,
}

impl ProjectInfo {
    /// Whether `viewer` may delete this project: owners always, plus the
    /// moderating ranks.
    pub fn deletable_by(&self, viewer_id: &str, viewer_rank: Rank) -> bool {
        self.user_id == viewer_id || viewer_rank.can_moderate_projects()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(owner_id: &str) -> ProjectInfo {
        ProjectInfo {
            id: "p1".into(),
            user_id: owner_id.into(),
            title: "Agate polishing jig".into(),
            description: None,
            language: None,
            download_link: "https://example.com/jig.zip".into(),
            image_url: None,
            project_type: ProjectType::Public,
            is_official: false,
            featured: false,
            download_count: 0,
            created_at: "2024-01-01T00:00:00+00:00".into(),
            owner: ProjectOwner {
                username: "geodes4life".into(),
                display_name: None,
                rank: Rank::Member,
                is_verified: false,
                avatar_url: None,
            },
        }
    }

    #[test]
    fn owner_can_delete_own_project() {
        let p = project("u1");
        assert!(p.deletable_by("u1", Rank::Member));
        assert!(!p.deletable_by("u2", Rank::Member));
    }

    #[test]
    fn moderators_can_delete_any_project() {
        let p = project("u1");
        assert!(p.deletable_by("u2", Rank::Admin));
        assert!(p.deletable_by("u2", Rank::Developer));
        assert!(!p.deletable_by("u2", Rank::MasonOfficial));
        assert!(!p.deletable_by("u2", Rank::Vip));
    }
}
