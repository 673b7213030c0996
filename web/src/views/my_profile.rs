//! The signed-in member's own profile editor.

use dioxus::prelude::*;
use ui::icons::FaTrash;
use ui::{redirect_to, use_auth, use_messages, Icon, RankBadge};

use super::RetroWindow;

#[component]
pub fn MyProfile() -> Element {
    let mut auth = use_auth();
    let mut messages = use_messages();

    let mut display_name = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut social_platform = use_signal(String::new);
    let mut social_url = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    // Seed the form once the profile is available.
    use_effect(move || {
        if let Some(me) = auth().user {
            display_name.set(me.display_name.unwrap_or_default());
            bio.set(me.bio.unwrap_or_default());
        }
    });

    let state = auth();
    if !state.loading && state.user.is_none() {
        redirect_to("/login");
        return rsx! {};
    }
    let Some(me) = state.user else {
        return rsx! {
            RetroWindow {
                title: "MasonHub - My Profile",
                div { class: "terminal-line", "> Loading..." }
            }
        };
    };

    let handle_avatar = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let Ok(bytes) = file.read_bytes().await.map(|b| b.to_vec()) else {
            messages.error("Could not read the selected file");
            return;
        };

        busy.set(true);
        match api::storage::set_avatar(name, bytes).await {
            Ok(updated) => {
                auth.write().user = Some(updated);
                messages.success("Avatar updated!");
            }
            Err(e) => messages.error(e.to_string()),
        }
        busy.set(false);
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            match api::profiles::update_profile(display_name(), bio()).await {
                Ok(updated) => {
                    auth.write().user = Some(updated);
                    messages.success("Profile updated!");
                }
                Err(e) => messages.error(e.to_string()),
            }
            busy.set(false);
        });
    };

    let handle_add_link = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if social_platform().trim().is_empty() || social_url().trim().is_empty() {
                return;
            }
            match api::profiles::add_social_link(social_platform(), social_url()).await {
                Ok(updated) => {
                    auth.write().user = Some(updated);
                    social_platform.set(String::new());
                    social_url.set(String::new());
                }
                Err(e) => messages.error(e.to_string()),
            }
        });
    };

    let handle_password = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if new_password().len() < 6 {
                messages.error("Password must be at least 6 characters");
                return;
            }
            if new_password() != confirm_password() {
                messages.error("Passwords do not match");
                return;
            }
            match api::auth::update_password(new_password()).await {
                Ok(()) => {
                    messages.success("Password changed!");
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => messages.error(e.to_string()),
            }
        });
    };

    rsx! {
        RetroWindow {
            title: "MasonHub - My Profile",
            div {
                class: "profile-avatar-section",
                label {
                    class: "profile-avatar-large",
                    if let Some(avatar_url) = me.avatar_url.as_deref() {
                        img { src: "{avatar_url}", alt: "{me.username}" }
                    } else {
                        div { class: "member-avatar placeholder", "?" }
                    }
                    span { class: "avatar-upload-overlay", "Change" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        style: "display: none;",
                        onchange: handle_avatar,
                    }
                }
                h2 {
                    "{me.display_name()} "
                    RankBadge { rank: me.rank, is_verified: me.is_verified }
                }
                div { class: "profile-rank", "{me.rank.label()}" }
                if let Some(badge) = me.mason_badge.as_deref() {
                    div { class: "mason-badge-display", "{badge}" }
                }
            }

            form {
                class: "profile-form",
                onsubmit: handle_save,
                label { "Display name" }
                input {
                    class: "retro-input",
                    r#type: "text",
                    value: display_name(),
                    oninput: move |evt| display_name.set(evt.value()),
                }
                label { "Bio (max 300 characters)" }
                textarea {
                    class: "retro-input",
                    maxlength: "300",
                    value: bio(),
                    oninput: move |evt| bio.set(evt.value()),
                }
                button {
                    class: "retro-button primary",
                    r#type: "submit",
                    disabled: busy(),
                    "Save Profile"
                }
            }

            div { class: "separator" }

            div {
                class: "social-links",
                h3 { "Social Links" }
                if me.social_links.is_empty() {
                    p { class: "no-projects", "No social links added yet" }
                }
                for (index, link) in me.social_links.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "social-link",
                        a { href: "{link.url}", target: "_blank", "{link.platform}" }
                        button {
                            class: "retro-button danger",
                            onclick: move |_| async move {
                                match api::profiles::remove_social_link(index).await {
                                    Ok(updated) => auth.write().user = Some(updated),
                                    Err(e) => messages.error(e.to_string()),
                                }
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                        }
                    }
                }
                form {
                    class: "links-form",
                    onsubmit: handle_add_link,
                    input {
                        class: "retro-input",
                        r#type: "text",
                        placeholder: "Platform (e.g. Discord)",
                        value: social_platform(),
                        oninput: move |evt| social_platform.set(evt.value()),
                    }
                    input {
                        class: "retro-input",
                        r#type: "url",
                        placeholder: "https://...",
                        value: social_url(),
                        oninput: move |evt| social_url.set(evt.value()),
                    }
                    button { class: "retro-button", r#type: "submit", "Add Link" }
                }
            }

            div { class: "separator" }

            form {
                class: "password-form",
                onsubmit: handle_password,
                h3 { "Change Password" }
                input {
                    class: "retro-input",
                    r#type: "password",
                    placeholder: "New password (min 6 characters)",
                    value: new_password(),
                    oninput: move |evt| new_password.set(evt.value()),
                }
                input {
                    class: "retro-input",
                    r#type: "password",
                    placeholder: "Confirm new password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
                button { class: "retro-button", r#type: "submit", "Update Password" }
            }
        }
    }
}
