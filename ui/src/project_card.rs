//! Card shown in the project grids (public, VIP, and Mason rooms).

use api::ProjectInfo;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCopy, FaDownload, FaStar, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    confirm, copy_to_clipboard, profile_url, project_url, redirect_to, share_url, use_auth,
    use_messages, RankBadge,
};

const DESCRIPTION_PREVIEW_LEN: usize = 100;

/// Truncate on a char boundary at roughly `DESCRIPTION_PREVIEW_LEN` bytes.
fn preview(description: &str) -> Option<String> {
    if description.len() <= DESCRIPTION_PREVIEW_LEN {
        return None;
    }
    let cut = description
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= DESCRIPTION_PREVIEW_LEN)
        .last()
        .unwrap_or(0);
    Some(format!("{}...", &description[..cut]))
}

/// A single project card. Downloading bumps the server-side counter before
/// opening the link; the delete button only shows for the owner and moderators.
#[component]
pub fn ProjectCard(project: ProjectInfo, on_deleted: EventHandler<String>) -> Element {
    let auth = use_auth();
    let mut messages = use_messages();

    let can_delete = auth()
        .user
        .map(|me| project.deletable_by(&me.id, me.rank))
        .unwrap_or(false);

    let owner_name = project.owner.display_name().to_string();
    let description = project.description.clone().unwrap_or_default();
    let short = preview(&description);

    let project_id = project.id.clone();
    let handle_download = move |_| {
        let id = project_id.clone();
        async move {
            match api::projects::record_download(id).await {
                Ok(link) => redirect_to(&link),
                Err(e) => tracing::warn!("download failed: {e}"),
            }
        }
    };

    let copy_id = project.id.clone();
    let handle_copy = move |_| {
        copy_to_clipboard(&share_url(&project_url(&copy_id)));
        messages.success("Link copied!");
    };

    let delete_id = project.id.clone();
    let handle_delete = move |_| {
        let id = delete_id.clone();
        async move {
            if !confirm("Delete this project?") {
                return;
            }
            match api::projects::delete_project(id.clone()).await {
                Ok(()) => {
                    messages.success("Project deleted!");
                    on_deleted.call(id);
                }
                Err(e) => messages.error(e.to_string()),
            }
        }
    };

    rsx! {
        div {
            class: "project-card",
            if let Some(image_url) = project.image_url.as_deref() {
                img { class: "project-image", src: "{image_url}", alt: "{project.title}" }
            }
            div {
                class: "project-header",
                div {
                    h4 { class: "project-title", "{project.title}" }
                    if project.is_official {
                        span {
                            class: "official-tag",
                            Icon { icon: FaStar, width: 12, height: 12 }
                            " Official"
                        }
                    }
                    if project.featured {
                        span {
                            class: "featured-star",
                            Icon { icon: FaStar, width: 16, height: 16 }
                        }
                    }
                }
                if can_delete {
                    button {
                        class: "delete-btn",
                        onclick: handle_delete,
                        Icon { icon: FaTrash, width: 12, height: 12 }
                    }
                }
            }
            a {
                class: "project-author",
                href: profile_url(&project.owner.username),
                "by {owner_name} "
                RankBadge { rank: project.owner.rank, is_verified: project.owner.is_verified }
            }
            if !description.is_empty() {
                div {
                    class: "project-description",
                    if let Some(short) = short {
                        "{short}"
                        a {
                            class: "retro-button secondary",
                            href: project_url(&project.id),
                            "View Full"
                        }
                    } else {
                        "{description}"
                    }
                }
            }
            if let Some(language) = project.language.as_deref() {
                div {
                    class: "project-language",
                    strong { "Language: " }
                    "{language}"
                }
            }
            div {
                class: "project-footer",
                button {
                    class: "retro-button download-btn",
                    onclick: handle_download,
                    Icon { icon: FaDownload, width: 16, height: 16 }
                    " Download ({project.download_count})"
                }
                button {
                    class: "retro-button secondary",
                    onclick: handle_copy,
                    Icon { icon: FaCopy, width: 12, height: 12 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn short_descriptions_are_not_truncated() {
        assert_eq!(preview("a small quartz scanner"), None);
    }

    #[test]
    fn long_descriptions_get_an_ellipsis() {
        let long = "x".repeat(150);
        let p = preview(&long).unwrap();
        assert!(p.ends_with("..."));
        assert!(p.len() <= 150);
    }
}
