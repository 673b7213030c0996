//! Community announcements. Admins can post, edit, and delete; everyone can read.

use api::{AnnouncementInfo, Bucket};
use dioxus::prelude::*;
use ui::icons::{FaPenToSquare, FaTrash};
use ui::{use_auth, use_messages, Icon};

use super::RetroWindow;

#[component]
pub fn Announcements() -> Element {
    let auth = use_auth();
    let mut messages = use_messages();

    let mut announcements = use_signal(Vec::<AnnouncementInfo>::new);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut images = use_signal(Vec::<String>::new);
    let mut busy = use_signal(|| false);

    let mut reload = use_resource(move || async move {
        match api::content::list_announcements().await {
            Ok(list) => announcements.set(list),
            Err(e) => tracing::warn!("failed to load announcements: {e}"),
        }
    });

    let is_admin = auth()
        .user
        .map(|me| me.rank.is_admin())
        .unwrap_or(false);

    let handle_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let Ok(bytes) = file.read_bytes().await.map(|b| b.to_vec()) else {
            messages.error("Could not read the selected file");
            return;
        };

        busy.set(true);
        match api::storage::upload_image(Bucket::Announcements, name, bytes).await {
            Ok(url) => images.write().push(url),
            Err(e) => messages.error(e.to_string()),
        }
        busy.set(false);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            let result = match editing() {
                Some(id) => {
                    api::content::update_announcement(id, title(), content(), images()).await
                }
                None => api::content::create_announcement(title(), content(), images()).await,
            };
            busy.set(false);

            match result {
                Ok(()) => {
                    messages.success("Announcement saved!");
                    show_form.set(false);
                    editing.set(None);
                    title.set(String::new());
                    content.set(String::new());
                    images.set(Vec::new());
                    reload.restart();
                }
                Err(e) => messages.error(e.to_string()),
            }
        });
    };

    rsx! {
        RetroWindow {
            title: "MasonHub - Announcements",
            if is_admin {
                button {
                    class: "retro-button primary",
                    onclick: move |_| {
                        if show_form() {
                            editing.set(None);
                            title.set(String::new());
                            content.set(String::new());
                            images.set(Vec::new());
                        }
                        show_form.toggle();
                    },
                    if show_form() { "Cancel" } else { "+ New Announcement" }
                }
            }

            if show_form() {
                form {
                    class: "announcement-form",
                    onsubmit: handle_submit,
                    input {
                        class: "retro-input",
                        r#type: "text",
                        placeholder: "Title",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                    textarea {
                        class: "retro-input",
                        placeholder: "Announcement text",
                        value: content(),
                        oninput: move |evt| content.set(evt.value()),
                    }
                    input {
                        class: "retro-input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_image,
                    }
                    div {
                        class: "image-previews",
                        for url in images() {
                            div {
                                key: "{url}",
                                class: "image-preview",
                                img { class: "upload-preview", src: "{url}" }
                                button {
                                    class: "retro-button danger",
                                    r#type: "button",
                                    onclick: {
                                        let url = url.clone();
                                        move |_| {
                                            let url = url.clone();
                                            async move {
                                                if let Err(e) =
                                                    api::storage::delete_image(Bucket::Announcements, url.clone())
                                                        .await
                                                {
                                                    messages.error(e.to_string());
                                                    return;
                                                }
                                                images.write().retain(|u| u != &url);
                                            }
                                        }
                                    },
                                    "x"
                                }
                            }
                        }
                    }
                    button {
                        class: "retro-button primary",
                        r#type: "submit",
                        disabled: busy(),
                        if editing().is_some() { "Update" } else { "Post" }
                    }
                }
            }

            div {
                class: "announcements-list",
                if announcements().is_empty() {
                    div { class: "no-projects", "No announcements yet" }
                }
                for item in announcements() {
                    div {
                        key: "{item.id}",
                        class: "announcement-card",
                        div {
                            class: "announcement-header",
                            h3 { "{item.title}" }
                            if is_admin {
                                div {
                                    class: "announcement-actions",
                                    button {
                                        class: "retro-button secondary",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| {
                                                editing.set(Some(item.id.clone()));
                                                title.set(item.title.clone());
                                                content.set(item.content.clone());
                                                images.set(item.images.clone());
                                                show_form.set(true);
                                            }
                                        },
                                        Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                    }
                                    button {
                                        class: "retro-button danger",
                                        onclick: {
                                            let id = item.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                async move {
                                                    if !ui::confirm("Delete this announcement?") {
                                                        return;
                                                    }
                                                    match api::content::delete_announcement(id.clone()).await {
                                                        Ok(()) => {
                                                            announcements.write().retain(|a| a.id != id);
                                                        }
                                                        Err(e) => messages.error(e.to_string()),
                                                    }
                                                }
                                            }
                                        },
                                        Icon { icon: FaTrash, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                        p { class: "announcement-content", "{item.content}" }
                        for url in item.images.iter() {
                            img { class: "announcement-image", src: "{url}" }
                        }
                        div {
                            class: "announcement-meta",
                            if let Some(author) = item.author.as_ref() {
                                "by {author.display_name()} | "
                            }
                            "{item.created_at}"
                        }
                    }
                }
            }
        }
    }
}
