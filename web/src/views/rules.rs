//! Community rules. Admins can add, edit, and delete entries.

use api::RuleInfo;
use dioxus::prelude::*;
use ui::icons::{FaPenToSquare, FaTrash};
use ui::{use_auth, use_messages, Icon};

use super::RetroWindow;

#[component]
pub fn Rules() -> Element {
    let auth = use_auth();
    let mut messages = use_messages();

    let mut rules = use_signal(Vec::<RuleInfo>::new);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let mut reload = use_resource(move || async move {
        match api::content::list_rules().await {
            Ok(list) => rules.set(list),
            Err(e) => tracing::warn!("failed to load rules: {e}"),
        }
    });

    let is_admin = auth()
        .user
        .map(|me| me.rank.is_admin())
        .unwrap_or(false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            let result = match editing() {
                Some(id) => api::content::update_rule(id, title(), content()).await,
                None => api::content::create_rule(title(), content()).await,
            };
            busy.set(false);

            match result {
                Ok(()) => {
                    messages.success("Rule saved!");
                    show_form.set(false);
                    editing.set(None);
                    title.set(String::new());
                    content.set(String::new());
                    reload.restart();
                }
                Err(e) => messages.error(e.to_string()),
            }
        });
    };

    rsx! {
        RetroWindow {
            title: "MasonHub - Community Rules",
            div {
                class: "terminal-section",
                div { class: "terminal-title", "RULES OF CONDUCT" }
                div { class: "terminal-line", "> Breaking the rules may lead to a ban." }
            }

            if is_admin {
                button {
                    class: "retro-button primary",
                    onclick: move |_| {
                        if show_form() {
                            editing.set(None);
                            title.set(String::new());
                            content.set(String::new());
                        }
                        show_form.toggle();
                    },
                    if show_form() { "Cancel" } else { "+ New Rule" }
                }
            }

            if show_form() {
                form {
                    class: "rule-form",
                    onsubmit: handle_submit,
                    input {
                        class: "retro-input",
                        r#type: "text",
                        placeholder: "Rule title",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                    textarea {
                        class: "retro-input",
                        placeholder: "Rule text",
                        value: content(),
                        oninput: move |evt| content.set(evt.value()),
                    }
                    button {
                        class: "retro-button primary",
                        r#type: "submit",
                        disabled: busy(),
                        if editing().is_some() { "Update" } else { "Add Rule" }
                    }
                }
            }

            ol {
                class: "rules-list",
                if rules().is_empty() {
                    div { class: "no-projects", "No rules posted yet" }
                }
                for rule in rules() {
                    li {
                        key: "{rule.id}",
                        class: "rule-card",
                        div {
                            class: "rule-header",
                            h3 { "{rule.title}" }
                            if is_admin {
                                div {
                                    class: "rule-actions",
                                    button {
                                        class: "retro-button secondary",
                                        onclick: {
                                            let rule = rule.clone();
                                            move |_| {
                                                editing.set(Some(rule.id.clone()));
                                                title.set(rule.title.clone());
                                                content.set(rule.content.clone());
                                                show_form.set(true);
                                            }
                                        },
                                        Icon { icon: FaPenToSquare, width: 12, height: 12 }
                                    }
                                    button {
                                        class: "retro-button danger",
                                        onclick: {
                                            let id = rule.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                async move {
                                                    if !ui::confirm("Delete this rule?") {
                                                        return;
                                                    }
                                                    match api::content::delete_rule(id.clone()).await {
                                                        Ok(()) => {
                                                            rules.write().retain(|r| r.id != id);
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
                        p { class: "rule-content", "{rule.content}" }
                    }
                }
            }
        }
    }
}
