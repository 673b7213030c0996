//! Member directory with search.

use api::ProfileInfo;
use dioxus::prelude::*;
use ui::{profile_url, RankBadge};

use super::RetroWindow;

#[component]
pub fn Members() -> Element {
    let mut members = use_signal(Vec::<ProfileInfo>::new);
    let mut search = use_signal(String::new);

    let _ = use_resource(move || async move {
        match api::profiles::list_members().await {
            Ok(list) => members.set(list),
            Err(e) => tracing::warn!("failed to load members: {e}"),
        }
    });

    let needle = search().to_lowercase();
    let filtered: Vec<ProfileInfo> = members()
        .into_iter()
        .filter(|m| {
            needle.is_empty()
                || m.username.to_lowercase().contains(&needle)
                || m.display_name
                    .as_deref()
                    .map(|n| n.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .collect();

    rsx! {
        RetroWindow {
            title: "MasonHub - Members",
            input {
                class: "retro-input search-input",
                r#type: "text",
                placeholder: "Search members...",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }
            div {
                class: "members-grid",
                if filtered.is_empty() {
                    div { class: "no-projects", "No members found" }
                }
                for member in filtered {
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
        }
    }
}
