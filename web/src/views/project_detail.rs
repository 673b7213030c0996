//! Full-page view of a single project.

use dioxus::prelude::*;
use ui::icons::{FaCopy, FaDownload};
use ui::{copy_to_clipboard, profile_url, project_url, redirect_to, use_messages, Icon, RankBadge};

use super::RetroWindow;

#[component]
pub fn ProjectDetail(project_id: String) -> Element {
    let mut messages = use_messages();

    let id = project_id.clone();
    let project = use_resource(move || {
        let id = id.clone();
        async move { api::projects::get_project(id).await }
    });

    rsx! {
        RetroWindow {
            title: "MasonHub - Project",
            match &*project.read() {
                Some(Ok(Some(p))) => {
                    let p = p.clone();
                    let download_id = p.id.clone();
                    let copy_id = p.id.clone();
                    rsx! {
                        div {
                            class: "project-detail",
                            if let Some(image_url) = p.image_url.as_deref() {
                                img { class: "project-image-full", src: "{image_url}", alt: "{p.title}" }
                            }
                            h2 { class: "project-title", "{p.title}" }
                            if p.is_official {
                                span { class: "official-tag", "Official" }
                            }
                            a {
                                class: "project-author",
                                href: profile_url(&p.owner.username),
                                "by {p.owner.display_name()} "
                                RankBadge { rank: p.owner.rank, is_verified: p.owner.is_verified }
                            }
                            if let Some(description) = p.description.as_deref() {
                                p { class: "project-description", "{description}" }
                            }
                            if let Some(language) = p.language.as_deref() {
                                div {
                                    class: "project-language",
                                    strong { "Language: " }
                                    "{language}"
                                }
                            }
                            div {
                                class: "project-meta",
                                "Downloads: {p.download_count} | Shared: {p.created_at}"
                            }
                            div {
                                class: "project-footer",
                                button {
                                    class: "retro-button primary download-btn",
                                    onclick: move |_| {
                                        let id = download_id.clone();
                                        async move {
                                            match api::projects::record_download(id).await {
                                                Ok(link) => redirect_to(&link),
                                                Err(e) => tracing::warn!("download failed: {e}"),
                                            }
                                        }
                                    },
                                    Icon { icon: FaDownload, width: 16, height: 16 }
                                    " Download"
                                }
                                button {
                                    class: "retro-button secondary",
                                    onclick: move |_| {
                                        copy_to_clipboard(&project_url(&copy_id));
                                        messages.success("Link copied!");
                                    },
                                    Icon { icon: FaCopy, width: 12, height: 12 }
                                    " Copy Link"
                                }
                            }
                        }
                    }
                }
                Some(Ok(None)) => rsx! {
                    div { class: "no-projects", "Project not found" }
                },
                Some(Err(e)) => rsx! {
                    div { class: "no-projects", "Failed to load project: {e}" }
                },
                None => rsx! {
                    div { class: "terminal-line", "> Loading..." }
                },
            }
        }
    }
}
