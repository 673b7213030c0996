//! # Profile model
//!
//! Two representations of a MasonHub member, following the row/projection split used
//! throughout the api crate:
//!
//! ## [`Profile`] (server only)
//!
//! The complete `profiles` row, loaded via [`sqlx::FromRow`]. The profile carries the
//! account itself: `email` and `password_hash` live here rather than in a separate
//! auth service. `social_links` is a jsonb list of `{platform, url}` pairs.
//!
//! ## [`ProfileInfo`]
//!
//! The projection sent to clients. It drops the password hash, converts the `Uuid` to
//! a `String` so it works in WASM, and formats timestamps as RFC 3339 strings. The
//! email stays: the members directory never shows it, but the admin panel table and
//! the owner's own profile page do.

use serde::{Deserialize, Serialize};

use super::Rank;

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// One external link on a profile ("Twitter", "GitHub", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Full profile record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub background_color: Option<String>,
    pub background_image_url: Option<String>,
    pub social_links: sqlx::types::Json<Vec<SocialLink>>,
    pub user_rank: Rank,
    pub mason_badge: Option<String>,
    pub is_verified: bool,
    pub is_banned: bool,
    pub banned_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl Profile {
    /// Convert to ProfileInfo for client consumption.
    pub fn to_info(&self) -> ProfileInfo {
        ProfileInfo {
            id: self.id.to_string(),
            username: self.username.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            bio: self.bio.clone(),
            avatar_url: self.avatar_url.clone(),
            background_color: self.background_color.clone(),
            background_image_url: self.background_image_url.clone(),
            social_links: self.social_links.0.clone(),
            rank: self.user_rank,
            mason_badge: self.mason_badge.clone(),
            is_verified: self.is_verified,
            is_banned: self.is_banned,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Profile information safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub background_color: Option<String>,
    pub background_image_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub rank: Rank,
    pub mason_badge: Option<String>,
    pub is_verified: bool,
    pub is_banned: bool,
    pub created_at: String,
}

impl ProfileInfo {
    /// Display name, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }

    /// Whether a verification glyph renders next to the name: every elevated rank
    /// gets one, plain members only when verified.
    pub fn shows_badge(&self) -> bool {
        self.rank != Rank::Member || self.is_verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(rank: Rank, verified: bool) -> ProfileInfo {
        ProfileInfo {
            id: "00000000-0000-0000-0000-000000000001".into(),
            username: "quartz_fan".into(),
            email: "quartz@example.com".into(),
            display_name: None,
            bio: None,
            avatar_url: None,
            background_color: None,
            background_image_url: None,
            social_links: Vec::new(),
            rank,
            mason_badge: None,
            is_verified: verified,
            is_banned: false,
            created_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut p = info(Rank::Member, false);
        assert_eq!(p.display_name(), "quartz_fan");
        p.display_name = Some(String::new());
        assert_eq!(p.display_name(), "quartz_fan");
        p.display_name = Some("Quartz Fan".into());
        assert_eq!(p.display_name(), "Quartz Fan");
    }

    #[test]
    fn badge_hidden_for_unverified_members() {
        assert!(!info(Rank::Member, false).shows_badge());
        assert!(info(Rank::Member, true).shows_badge());
        assert!(info(Rank::Vip, false).shows_badge());
        assert!(info(Rank::Admin, false).shows_badge());
    }
}
