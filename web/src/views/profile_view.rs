//! Public profile page for any member.

use api::{ProfileInfo, ProjectInfo};
use dioxus::prelude::*;
use ui::icons::FaCopy;
use ui::{copy_to_clipboard, profile_url, share_url, use_messages, Icon, ProjectCard, RankBadge};

use super::RetroWindow;

#[component]
pub fn ProfileView(username: String) -> Element {
    let mut messages = use_messages();
    let mut projects = use_signal(Vec::<ProjectInfo>::new);

    let name = username.clone();
    let profile = use_resource(move || {
        let name = name.clone();
        async move {
            let profile = api::profiles::get_profile(name).await?;
            if let Some(ref p) = profile {
                match api::projects::list_projects_by_user(p.id.clone()).await {
                    Ok(list) => projects.set(list),
                    Err(e) => tracing::warn!("failed to load member projects: {e}"),
                }
            }
            Ok::<Option<ProfileInfo>, ServerFnError>(profile)
        }
    });

    rsx! {
        match &*profile.read() {
            Some(Ok(Some(p))) => {
                let p = p.clone();
                let copy_name = p.username.clone();
                let background = match (&p.background_image_url, &p.background_color) {
                    (Some(url), _) => format!("background-image: url({url}); background-size: cover;"),
                    (None, Some(color)) => format!("background: {color};"),
                    (None, None) => String::new(),
                };
                rsx! {
                    div {
                        class: "profile-page",
                        style: "{background}",
                        RetroWindow {
                            title: "MasonHub - {p.username}",
                            div {
                                class: "profile-header",
                                if let Some(avatar_url) = p.avatar_url.as_deref() {
                                    img { class: "profile-avatar", src: "{avatar_url}", alt: "{p.username}" }
                                } else {
                                    div { class: "profile-avatar placeholder", "?" }
                                }
                                h2 {
                                    "{p.display_name()} "
                                    RankBadge { rank: p.rank, is_verified: p.is_verified }
                                }
                                div { class: "profile-rank", "{p.rank.label()}" }
                                if let Some(badge) = p.mason_badge.as_deref() {
                                    div { class: "mason-badge-display", "{badge}" }
                                }
                                button {
                                    class: "retro-button secondary",
                                    onclick: move |_| {
                                        copy_to_clipboard(&share_url(&profile_url(&copy_name)));
                                        messages.success("Profile URL copied!");
                                    },
                                    Icon { icon: FaCopy, width: 16, height: 16 }
                                    " Copy Profile URL"
                                }
                            }

                            if let Some(bio) = p.bio.as_deref() {
                                div {
                                    class: "profile-bio",
                                    label { "Bio:" }
                                    p { "{bio}" }
                                }
                            }

                            if !p.social_links.is_empty() {
                                div {
                                    class: "social-links",
                                    label { "Social Links:" }
                                    for link in p.social_links.iter() {
                                        a {
                                            class: "social-link",
                                            href: "{link.url}",
                                            target: "_blank",
                                            "{link.platform}"
                                        }
                                    }
                                }
                            }

                            div { class: "separator" }

                            h3 { "Projects ({projects().len()})" }
                            div {
                                class: "projects-grid",
                                if projects().is_empty() {
                                    div { class: "no-projects", "No projects yet" }
                                }
                                for project in projects() {
                                    ProjectCard {
                                        key: "{project.id}",
                                        project: project.clone(),
                                        on_deleted: move |id: String| {
                                            projects.write().retain(|pr| pr.id != id);
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Ok(None)) => rsx! {
                RetroWindow {
                    title: "MasonHub - Profile",
                    div { class: "no-projects", "Profile not found" }
                }
            },
            Some(Err(e)) => rsx! {
                RetroWindow {
                    title: "MasonHub - Profile",
                    div { class: "no-projects", "Failed to load profile: {e}" }
                }
            },
            None => rsx! {
                RetroWindow {
                    title: "MasonHub - Profile",
                    div { class: "terminal-line", "> Loading..." }
                }
            },
        }
    }
}
