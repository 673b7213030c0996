//! Admin panel: user management table behind the `/masonadmin` route.
//!
//! The route gate here is cosmetic; every admin server function re-checks the
//! caller's rank.

use api::{ProfileInfo, Rank};
use dioxus::prelude::*;
use ui::{use_auth, use_messages, RankBadge};

use super::RetroWindow;
use crate::Route;

#[component]
pub fn AdminPanel() -> Element {
    let auth = use_auth();
    let mut messages = use_messages();

    let mut users = use_signal(Vec::<ProfileInfo>::new);
    let mut search = use_signal(String::new);
    let mut badge_drafts = use_signal(std::collections::HashMap::<String, String>::new);
    let mut password_drafts = use_signal(std::collections::HashMap::<String, String>::new);

    let mut reload = use_resource(move || {
        let entitled = auth().user.map(|me| me.rank.is_admin()).unwrap_or(false);
        async move {
            if !entitled {
                return;
            }
            match api::admin::admin_list_users().await {
                Ok(list) => users.set(list),
                Err(e) => tracing::warn!("failed to load users: {e}"),
            }
        }
    });

    let is_admin = auth()
        .user
        .map(|me| me.rank.is_admin())
        .unwrap_or(false);

    if auth().loading {
        return rsx! {
            RetroWindow {
                title: "MasonHub - Admin Panel",
                div { class: "terminal-line", "> Loading..." }
            }
        };
    }

    if !is_admin {
        return rsx! {
            RetroWindow {
                title: "MasonHub - Access Denied",
                div {
                    class: "access-denied",
                    h3 { "ACCESS DENIED" }
                    p { "The admin panel is reserved for administrators." }
                    Link { class: "retro-button", to: Route::Home {}, "Back to Home" }
                }
            }
        };
    }

    let needle = search().to_lowercase();
    let filtered: Vec<ProfileInfo> = users()
        .into_iter()
        .filter(|u| matches_search(u, &needle))
        .collect();

    rsx! {
        RetroWindow {
            title: "MasonHub - Admin Panel",
            div {
                class: "terminal-section",
                div { class: "terminal-title", "USER MANAGEMENT" }
                div { class: "terminal-line", "> {users().len()} registered members" }
            }

            input {
                class: "retro-input search-input",
                r#type: "text",
                placeholder: "Search by username, email, or display name...",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }

            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "User" }
                        th { "Rank" }
                        th { "Verified" }
                        th { "Banned" }
                        th { "Badge" }
                        th { "Password" }
                        th { "" }
                    }
                }
                tbody {
                    for user in filtered {
                        AdminRow {
                            key: "{user.id}",
                            user: user.clone(),
                            badge_draft: badge_drafts()
                                .get(&user.id)
                                .cloned()
                                .unwrap_or_else(|| user.mason_badge.clone().unwrap_or_default()),
                            password_draft: password_drafts().get(&user.id).cloned().unwrap_or_default(),
                            on_badge_input: move |(id, value): (String, String)| {
                                badge_drafts.write().insert(id, value);
                            },
                            on_password_input: move |(id, value): (String, String)| {
                                password_drafts.write().insert(id, value);
                            },
                            on_changed: move |_| reload.restart(),
                            on_error: move |text: String| messages.error(text),
                            on_success: move |text: String| messages.success(text),
                        }
                    }
                }
            }
        }
    }
}

/// `needle` must already be lowercased.
fn matches_search(user: &ProfileInfo, needle: &str) -> bool {
    needle.is_empty()
        || user.username.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
        || user
            .display_name
            .as_deref()
            .map(|n| n.to_lowercase().contains(needle))
            .unwrap_or(false)
}

#[component]
fn AdminRow(
    user: ProfileInfo,
    badge_draft: String,
    password_draft: String,
    on_badge_input: EventHandler<(String, String)>,
    on_password_input: EventHandler<(String, String)>,
    on_changed: EventHandler<()>,
    on_error: EventHandler<String>,
    on_success: EventHandler<String>,
) -> Element {
    let user_id = user.id.clone();

    let rank_id = user_id.clone();
    let handle_rank = move |evt: FormEvent| {
        let id = rank_id.clone();
        async move {
            match api::admin::admin_set_rank(id, evt.value()).await {
                Ok(()) => on_changed.call(()),
                Err(e) => on_error.call(e.to_string()),
            }
        }
    };

    let verify_id = user_id.clone();
    let verified = user.is_verified;
    let handle_verify = move |_| {
        let id = verify_id.clone();
        async move {
            match api::admin::admin_set_verified(id, !verified).await {
                Ok(()) => on_changed.call(()),
                Err(e) => on_error.call(e.to_string()),
            }
        }
    };

    let ban_id = user_id.clone();
    let banned = user.is_banned;
    let handle_ban = move |_| {
        let id = ban_id.clone();
        async move {
            match api::admin::admin_set_banned(id, !banned).await {
                Ok(()) => on_changed.call(()),
                Err(e) => on_error.call(e.to_string()),
            }
        }
    };

    let badge_id = user_id.clone();
    let badge_value = badge_draft.clone();
    let handle_badge = move |_| {
        let id = badge_id.clone();
        let badge = badge_value.clone();
        async move {
            match api::admin::admin_set_badge(id, badge).await {
                Ok(()) => {
                    on_success.call("Badge updated!".to_string());
                    on_changed.call(());
                }
                Err(e) => on_error.call(e.to_string()),
            }
        }
    };

    let pw_id = user_id.clone();
    let pw_value = password_draft.clone();
    let handle_password = move |_| {
        let id = pw_id.clone();
        let password = pw_value.clone();
        async move {
            match api::admin::admin_set_password(id.clone(), password).await {
                Ok(()) => {
                    on_success.call("Password changed!".to_string());
                    on_password_input.call((id, String::new()));
                }
                Err(e) => on_error.call(e.to_string()),
            }
        }
    };

    let delete_id = user_id.clone();
    let handle_delete = move |_| {
        let id = delete_id.clone();
        async move {
            if !ui::confirm(
                "Delete this user and all their projects? This cannot be undone.",
            ) {
                return;
            }
            match api::admin::admin_delete_user(id).await {
                Ok(()) => {
                    on_success.call("User deleted".to_string());
                    on_changed.call(());
                }
                Err(e) => on_error.call(e.to_string()),
            }
        }
    };

    let badge_input_id = user_id.clone();
    let password_input_id = user_id.clone();

    rsx! {
        tr {
            td {
                class: "admin-user-cell",
                "{user.username} "
                RankBadge { rank: user.rank, is_verified: user.is_verified }
                div { class: "admin-user-email", "{user.email}" }
            }
            td {
                select {
                    class: "retro-input",
                    value: user.rank.as_str(),
                    onchange: handle_rank,
                    for rank in Rank::ALL {
                        option { value: rank.as_str(), "{rank.label()}" }
                    }
                }
            }
            td {
                button {
                    class: if user.is_verified { "retro-button primary" } else { "retro-button secondary" },
                    onclick: handle_verify,
                    if user.is_verified { "Verified" } else { "Verify" }
                }
            }
            td {
                button {
                    class: if user.is_banned { "retro-button danger" } else { "retro-button secondary" },
                    onclick: handle_ban,
                    if user.is_banned { "Unban" } else { "Ban" }
                }
            }
            td {
                input {
                    class: "retro-input",
                    r#type: "text",
                    placeholder: "Badge text",
                    value: "{badge_draft}",
                    oninput: move |evt| on_badge_input.call((badge_input_id.clone(), evt.value())),
                }
                button { class: "retro-button", onclick: handle_badge, "Set" }
            }
            td {
                input {
                    class: "retro-input",
                    r#type: "password",
                    placeholder: "New password",
                    value: "{password_draft}",
                    oninput: move |evt| on_password_input.call((password_input_id.clone(), evt.value())),
                }
                button { class: "retro-button", onclick: handle_password, "Change" }
            }
            td {
                button {
                    class: "retro-button danger",
                    onclick: handle_delete,
                    "Delete"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::matches_search;
    use api::{ProfileInfo, Rank};

    fn user(username: &str, email: &str, display_name: Option<&str>) -> ProfileInfo {
        ProfileInfo {
            id: "00000000-0000-0000-0000-000000000001".into(),
            username: username.into(),
            email: email.into(),
            display_name: display_name.map(Into::into),
            bio: None,
            avatar_url: None,
            background_color: None,
            background_image_url: None,
            social_links: Vec::new(),
            rank: Rank::Member,
            mason_badge: None,
            is_verified: false,
            is_banned: false,
            created_at: "2024-01-01T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn filters_on_username_email_and_display_name() {
        let u = user("geodude", "rocks@example.com", Some("The Geode Dude"));
        assert!(matches_search(&u, ""));
        assert!(matches_search(&u, "geo"));
        assert!(matches_search(&u, "rocks@"));
        assert!(matches_search(&u, "dude"));
        assert!(!matches_search(&u, "feldspar"));
    }

    #[test]
    fn display_name_is_optional() {
        let u = user("geodude", "rocks@example.com", None);
        assert!(matches_search(&u, "geodude"));
        assert!(!matches_search(&u, "the geode"));
    }
}
