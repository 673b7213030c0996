//! Landing page: terminal-style greeting plus quick links.

use dioxus::prelude::*;
use ui::{profile_url, use_auth};

use super::RetroWindow;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        RetroWindow {
            title: "MasonHub - Rock Collectors Community",
            div {
                class: "terminal-section",
                div { class: "terminal-title", "WELCOME TO MASONHUB" }
                div { class: "terminal-line", "> Initializing rock collectors community platform..." }
                div { class: "terminal-line", "> Loading member profiles and projects..." }
                div { class: "terminal-line", "> System ready. Welcome to the community!" }
            }

            if let Some(me) = user {
                div {
                    class: "user-info",
                    h3 { "Welcome back, {me.display_name()}!" }
                    div {
                        class: "user-details",
                        p {
                            strong { "Rank: " }
                            "{me.rank.label()}"
                        }
                        if let Some(badge) = me.mason_badge.as_deref() {
                            p {
                                strong { "Badge: " }
                                "{badge}"
                            }
                        }
                        if me.is_verified {
                            p { class: "verified-text", "Verified" }
                        }
                    }
                    div {
                        class: "button-row",
                        Link { class: "retro-button primary", to: Route::Projects {}, "Browse Projects" }
                        Link { class: "retro-button secondary", to: Route::Members {}, "View Members" }
                        a { class: "retro-button", href: profile_url(&me.username), "My Profile" }
                    }
                }
            } else {
                div {
                    class: "guest-info",
                    h3 { "Welcome to MasonHub" }
                    p {
                        "Join our community of rock and mineral collectors. "
                        "Share your projects and connect with fellow enthusiasts!"
                    }
                    div {
                        class: "button-row",
                        Link { class: "retro-button primary", to: Route::AuthPage {}, "Get Started" }
                        Link { class: "retro-button secondary", to: Route::Projects {}, "Browse Projects" }
                    }
                }
            }

            div { class: "separator" }

            div {
                class: "features-section",
                h3 { "Platform Features" }
                div {
                    class: "features-grid",
                    div {
                        class: "feature-card",
                        h4 { "Share Projects" }
                        p { "Upload and share your rock collection projects with the community" }
                    }
                    div {
                        class: "feature-card",
                        h4 { "Community" }
                        p { "Connect with fellow collectors and enthusiasts worldwide" }
                    }
                    div {
                        class: "feature-card",
                        h4 { "Ranking System" }
                        p { "Earn ranks and badges as you contribute to the community" }
                    }
                }
            }
        }
    }
}
