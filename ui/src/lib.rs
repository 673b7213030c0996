//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod message;
pub use message::{use_messages, Message, MessageHost, MessageKind, MessageState};

mod navbar;
pub use navbar::Navbar;

mod badge;
pub use badge::RankBadge;

mod project_card;
pub use project_card::ProjectCard;

mod captcha;
pub use captcha::{generate_captcha, Captcha};

mod links;
pub use links::{confirm, copy_to_clipboard, profile_url, project_url, redirect_to, share_url};
