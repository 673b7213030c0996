//! Public page presenting the Mason team hierarchy.

use api::ProfileInfo;
use dioxus::prelude::*;
use ui::{profile_url, RankBadge};

use super::RetroWindow;

#[component]
pub fn Mason() -> Element {
    let mut team = use_signal(Vec::<ProfileInfo>::new);

    let _ = use_resource(move || async move {
        match api::profiles::list_mason_members().await {
            Ok(list) => team.set(list),
            Err(e) => tracing::warn!("failed to load mason team: {e}"),
        }
    });

    rsx! {
        RetroWindow {
            title: "MasonHub - Mason Team",
            div {
                class: "terminal-section",
                div { class: "terminal-title", "MASON HIERARCHY" }
                div { class: "terminal-line", "> Mason Team - Trusted community leaders" }
            }
            div {
                class: "members-grid",
                for member in team() {
                    a {
                        key: "{member.id}",
                        class: "member-card",
                        href: profile_url(&member.username),
                        if let Some(avatar_url) = member.avatar_url.as_deref() {
                            img { class: "member-avatar", src: "{avatar_url}", alt: "{member.username}" }
                        } else {
                            div { class: "member-avatar placeholder", "?" }
                        }
                        div { class: "member-name", "{member.display_name()}" }
                        div {
                            class: "profile-rank",
                            "{member.rank.label()} "
                            RankBadge { rank: member.rank, is_verified: member.is_verified }
                        }
                        if let Some(badge) = member.mason_badge.as_deref() {
                            div { class: "mason-badge", "{badge}" }
                        }
                    }
                }
            }
            div { class: "separator" }
            div {
                class: "about-section",
                h3 { "About Mason" }
                p {
                    "The Mason hierarchy represents the leadership and core team of Mason Team. "
                    "These members have special privileges and responsibilities to maintain, develop, "
                    "and guide the community."
                }
            }
        }
    }
}
