//! Announcements, rules, and password-reset codes.
//!
//! Announcements and rules are simple titled content records written by admins.
//! Reads join the author's public columns so the pages can attribute them; the
//! author is nullable because records survive their author's deletion.

use serde::{Deserialize, Serialize};

use super::Rank;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Announcement row joined with its author.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub images: sqlx::types::Json<Vec<String>>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub author_username: Option<String>,
    pub author_display_name: Option<String>,
    pub author_rank: Option<Rank>,
}

#[cfg(feature = "server")]
impl Announcement {
    pub const SELECT: &'static str = "SELECT a.id, a.title, a.content, a.images, a.created_by, a.created_at, \
         pr.username AS author_username, pr.display_name AS author_display_name, \
         pr.user_rank AS author_rank \
         FROM announcements a LEFT JOIN profiles pr ON pr.id = a.created_by";

    pub fn to_info(&self) -> AnnouncementInfo {
        AnnouncementInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            content: self.content.clone(),
            images: self.images.0.clone(),
            created_at: self.created_at.to_rfc3339(),
            author: author_info(
                self.author_username.as_ref(),
                self.author_display_name.clone(),
                self.author_rank,
            ),
        }
    }
}

/// Rule row joined with its author.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Rule {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub author_username: Option<String>,
    pub author_display_name: Option<String>,
    pub author_rank: Option<Rank>,
}

#[cfg(feature = "server")]
impl Rule {
    pub const SELECT: &'static str = "SELECT r.id, r.title, r.content, r.created_by, r.created_at, \
         pr.username AS author_username, pr.display_name AS author_display_name, \
         pr.user_rank AS author_rank \
         FROM rules r LEFT JOIN profiles pr ON pr.id = r.created_by";

    pub fn to_info(&self) -> RuleInfo {
        RuleInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            content: self.content.clone(),
            created_at: self.created_at.to_rfc3339(),
            author: author_info(
                self.author_username.as_ref(),
                self.author_display_name.clone(),
                self.author_rank,
            ),
        }
    }
}

#[cfg(feature = "server")]
fn author_info(
    username: Option<&String>,
    display_name: Option<String>,
    rank: Option<Rank>,
) -> Option<AuthorInfo> {
    username.map(|u| AuthorInfo {
        username: u.clone(),
        display_name,
        rank: rank.unwrap_or_default(),
    })
}

/// One-time password-reset code (server only).
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct PasswordResetCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl PasswordResetCode {
    /// A code is redeemable while unused and unexpired.
    pub fn redeemable_at(&self, now: DateTime<Utc>) -> bool {
        !self.used && now <= self.expires_at
    }
}

/// Public columns of a content record's author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub username: String,
    pub display_name: Option<String>,
    pub rank: Rank,
}

impl AuthorInfo {
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Announcement safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnouncementInfo {
    pub id: String,
    pub title: String,
    pub content: String,
    pub images: Vec<String>,
    pub created_at: String,
    pub author: Option<AuthorInfo>,
}

/// Rule safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub author: Option<AuthorInfo>,
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use chrono::Duration;

    fn code(used: bool, expires_in: Duration) -> PasswordResetCode {
        let now = Utc::now();
        PasswordResetCode {
            id: Uuid::new_v4(),
            email: "quartz@example.com".into(),
            code: "123456".into(),
            expires_at: now + expires_in,
            used,
            created_at: now,
        }
    }

    #[test]
    fn fresh_code_is_redeemable() {
        let c = code(false, Duration::minutes(10));
        assert!(c.redeemable_at(Utc::now()));
    }

    #[test]
    fn used_code_is_not_redeemable() {
        let c = code(true, Duration::minutes(10));
        assert!(!c.redeemable_at(Utc::now()));
    }

    #[test]
    fn expired_code_is_not_redeemable() {
        let c = code(false, Duration::minutes(-1));
        assert!(!c.redeemable_at(Utc::now()));
    }
}
