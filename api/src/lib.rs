//! # API crate — shared fullstack server functions for MasonHub
//!
//! This crate is the backbone of the MasonHub fullstack architecture. It defines every
//! Dioxus server function that the web frontend calls, along with the supporting
//! modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`admin`] | — | User management: ranks, verification, bans, badges, deletion, password changes |
//! | [`auth`] | — | Registration, login, sessions, password hashing, password reset codes |
//! | [`content`] | — | Announcements and community rules (admin-editable) |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and migrations |
//! | [`error`] | `server` | Internal error type for server-side helpers |
//! | [`models`] | — | Database rows (`Profile`, `ProjectRecord`, ...) and their client-safe projections |
//! | [`profiles`] | — | Public profiles, member directory, bio/display-name/social-link editing |
//! | [`projects`] | — | Project sharing, tiered visibility, download tracking |
//! | [`storage`] | — | Image uploads for avatars, project images, and announcements |
//!
//! ## Server functions
//!
//! Every public `async fn` annotated with `#[get(...)]` or `#[post(...)]` in the
//! modules above is a Dioxus server function, compiled twice: once with full server
//! logic (behind `#[cfg(feature = "server")]`) and once as a thin client stub that
//! simply forwards the call over HTTP.

pub mod admin;
pub mod auth;
pub mod content;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod error;
pub mod models;
pub mod profiles;
pub mod projects;
pub mod storage;

pub use models::{
    AnnouncementInfo, AuthorInfo, ProfileInfo, ProjectInfo, ProjectOwner, ProjectType, Rank,
    RuleInfo, SocialLink,
};
pub use storage::Bucket;
