//! Rank-gated project rooms (VIP and Mason team).
//!
//! Access is decided on the server; these views only pick friendlier UI for
//! visitors without the required rank.

use api::{ProjectInfo, Rank};
use dioxus::prelude::*;
use ui::icons::FaLock;
use ui::{use_auth, Icon, ProjectCard};

use super::RetroWindow;
use crate::Route;

#[component]
pub fn VipRoom() -> Element {
    rsx! {
        ProjectRoom {
            window_title: "MasonHub - VIP Room",
            tier: "vip",
            banner: "> Exclusive projects for VIP members and the Mason team",
            allowed: AccessRule::Vip,
        }
    }
}

#[component]
pub fn MasonRoom() -> Element {
    rsx! {
        ProjectRoom {
            window_title: "MasonHub - Mason Room",
            tier: "mason",
            banner: "> Internal projects of the Mason team",
            allowed: AccessRule::Staff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AccessRule {
    Vip,
    Staff,
}

impl AccessRule {
    fn permits(self, rank: Rank) -> bool {
        match self {
            AccessRule::Vip => rank.has_vip_access(),
            AccessRule::Staff => rank.is_staff(),
        }
    }
}

#[component]
fn ProjectRoom(
    window_title: String,
    tier: String,
    banner: String,
    allowed: AccessRule,
) -> Element {
    let auth = use_auth();
    let mut projects = use_signal(Vec::<ProjectInfo>::new);

    let tier_param = tier.clone();
    let _ = use_resource(move || {
        let tier = tier_param.clone();
        let entitled = auth()
            .user
            .map(|me| allowed.permits(me.rank))
            .unwrap_or(false);
        async move {
            if !entitled {
                return;
            }
            match api::projects::list_projects_by_type(tier).await {
                Ok(list) => projects.set(list),
                Err(e) => tracing::warn!("failed to load room projects: {e}"),
            }
        }
    });

    let has_access = auth()
        .user
        .map(|me| allowed.permits(me.rank))
        .unwrap_or(false);

    if auth().loading {
        return rsx! {
            RetroWindow {
                title: "{window_title}",
                div { class: "terminal-line", "> Loading..." }
            }
        };
    }

    if !has_access {
        return rsx! {
            RetroWindow {
                title: "{window_title} - Access Denied",
                div {
                    class: "access-denied",
                    Icon { icon: FaLock, width: 32, height: 32 }
                    h3 { "ACCESS DENIED" }
                    p { "This room is reserved for members with a higher rank." }
                    Link { class: "retro-button", to: Route::Home {}, "Back to Home" }
                }
            }
        };
    }

    rsx! {
        RetroWindow {
            title: "{window_title}",
            div {
                class: "terminal-section",
                div { class: "terminal-line", "{banner}" }
            }
            div {
                class: "projects-grid",
                if projects().is_empty() {
                    div { class: "no-projects", "No projects shared here yet" }
                }
                for project in projects() {
                    ProjectCard {
                        key: "{project.id}",
                        project: project.clone(),
                        on_deleted: move |id: String| {
                            projects.write().retain(|p| p.id != id);
                        },
                    }
                }
            }
        }
    }
}
