//! # Membership ranks and project visibility tiers
//!
//! [`Rank`] is the closed set of membership tiers. It is stored in Postgres as the
//! `user_rank` enum and crosses the server/client boundary in [`ProfileInfo`], so the
//! same predicates drive both the gated server functions and which navbar entries and
//! buttons render.
//!
//! The gate lists mirror the access checks the pages apply:
//!
//! - VIP room: admin, developer, mason_official, vip
//! - Mason room and the `mason` project type: admin, developer, mason_official
//! - Deleting any project: admin, developer (owners may always delete their own)
//! - Admin panel and announcement/rule writes: admin only
//!
//! [`ProjectType`] is the visibility tier of a shared project (`project_type` enum in
//! Postgres): `public` projects appear on the main projects page, `vip` and `mason`
//! only inside the matching room.
//!
//! [`ProfileInfo`]: super::ProfileInfo

use serde::{Deserialize, Serialize};

/// Membership tier of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(feature = "server", sqlx(type_name = "user_rank", rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Admin,
    Developer,
    MasonOfficial,
    Vip,
    #[default]
    Member,
}

impl Rank {
    /// All ranks, in the order the admin panel's rank selector lists them.
    pub const ALL: [Rank; 5] = [
        Rank::Member,
        Rank::Vip,
        Rank::MasonOfficial,
        Rank::Developer,
        Rank::Admin,
    ];

    pub fn is_admin(self) -> bool {
        self == Rank::Admin
    }

    /// Mason team ranks. Staff see the Mason room, may pick the `mason` project
    /// type, and their projects are marked official.
    pub fn is_staff(self) -> bool {
        matches!(self, Rank::Admin | Rank::Developer | Rank::MasonOfficial)
    }

    /// Staff plus VIP members see the VIP room.
    pub fn has_vip_access(self) -> bool {
        self.is_staff() || self == Rank::Vip
    }

    /// Ranks allowed to delete projects they do not own.
    pub fn can_moderate_projects(self) -> bool {
        matches!(self, Rank::Admin | Rank::Developer)
    }

    /// Wire/database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Admin => "admin",
            Rank::Developer => "developer",
            Rank::MasonOfficial => "mason_official",
            Rank::Vip => "vip",
            Rank::Member => "member",
        }
    }

    /// Parse the wire representation; unknown strings fall back to `Member`,
    /// matching how the pages treat a missing rank.
    pub fn parse(s: &str) -> Rank {
        match s {
            "admin" => Rank::Admin,
            "developer" => Rank::Developer,
            "mason_official" => Rank::MasonOfficial,
            "vip" => Rank::Vip,
            _ => Rank::Member,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Admin => "Admin",
            Rank::Developer => "Developer",
            Rank::MasonOfficial => "Mason Team",
            Rank::Vip => "VIP",
            Rank::Member => "Member",
        }
    }
}

/// Visibility tier of a shared project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "server", derive(sqlx::Type))]
#[cfg_attr(feature = "server", sqlx(type_name = "project_type", rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    Public,
    Vip,
    Mason,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Public => "public",
            ProjectType::Vip => "vip",
            ProjectType::Mason => "mason",
        }
    }

    pub fn parse(s: &str) -> ProjectType {
        match s {
            "vip" => ProjectType::Vip,
            "mason" => ProjectType::Mason,
            _ => ProjectType::Public,
        }
    }

    /// Whether `rank` may publish a project under this tier.
    pub fn allowed_for(self, rank: Rank) -> bool {
        match self {
            ProjectType::Public => true,
            ProjectType::Vip => rank.is_staff(),
            ProjectType::Mason => rank.is_staff(),
        }
    }

    /// Whether `rank` may browse projects of this tier.
    pub fn visible_to(self, rank: Rank) -> bool {
        match self {
            ProjectType::Public => true,
            ProjectType::Vip => rank.has_vip_access(),
            ProjectType::Mason => rank.is_staff(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_roundtrip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::parse(rank.as_str()), rank);
        }
        assert_eq!(Rank::parse("banana"), Rank::Member);
    }

    #[test]
    fn vip_room_gate() {
        assert!(Rank::Admin.has_vip_access());
        assert!(Rank::Developer.has_vip_access());
        assert!(Rank::MasonOfficial.has_vip_access());
        assert!(Rank::Vip.has_vip_access());
        assert!(!Rank::Member.has_vip_access());
    }

    #[test]
    fn mason_room_gate() {
        assert!(Rank::Admin.is_staff());
        assert!(Rank::Developer.is_staff());
        assert!(Rank::MasonOfficial.is_staff());
        assert!(!Rank::Vip.is_staff());
        assert!(!Rank::Member.is_staff());
    }

    #[test]
    fn project_moderation_gate() {
        assert!(Rank::Admin.can_moderate_projects());
        assert!(Rank::Developer.can_moderate_projects());
        assert!(!Rank::MasonOfficial.can_moderate_projects());
        assert!(!Rank::Vip.can_moderate_projects());
    }

    #[test]
    fn project_type_visibility() {
        assert!(ProjectType::Public.visible_to(Rank::Member));
        assert!(!ProjectType::Vip.visible_to(Rank::Member));
        assert!(ProjectType::Vip.visible_to(Rank::Vip));
        assert!(!ProjectType::Mason.visible_to(Rank::Vip));
        assert!(ProjectType::Mason.visible_to(Rank::MasonOfficial));
    }

    #[test]
    fn vip_members_cannot_publish_gated_projects() {
        // VIP members can browse the VIP room but only staff publish into it.
        assert!(!ProjectType::Vip.allowed_for(Rank::Vip));
        assert!(ProjectType::Vip.allowed_for(Rank::MasonOfficial));
        assert!(ProjectType::Public.allowed_for(Rank::Member));
    }
}
