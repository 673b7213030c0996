//! Data models for the application.

mod content;
mod profile;
mod project;
mod rank;

#[cfg(feature = "server")]
pub use content::{Announcement, PasswordResetCode, Rule};
pub use content::{AnnouncementInfo, AuthorInfo, RuleInfo};
#[cfg(feature = "server")]
pub use profile::Profile;
pub use profile::{ProfileInfo, SocialLink};
#[cfg(feature = "server")]
pub use project::ProjectRecord;
pub use project::{ProjectInfo, ProjectOwner};
pub use rank::{ProjectType, Rank};
