//! Public project gallery with search and a create form.

use api::{Bucket, ProjectInfo, ProjectType};
use dioxus::prelude::*;
use ui::{use_auth, use_messages, ProjectCard};

use super::RetroWindow;

#[component]
pub fn Projects() -> Element {
    let auth = use_auth();
    let mut messages = use_messages();

    let mut projects = use_signal(Vec::<ProjectInfo>::new);
    let mut search = use_signal(String::new);
    let mut show_create = use_signal(|| false);

    // Create form
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut language = use_signal(String::new);
    let mut download_link = use_signal(String::new);
    let mut project_type = use_signal(|| ProjectType::Public);
    let mut image_url = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);

    let _ = use_resource(move || async move {
        match api::projects::list_projects().await {
            Ok(list) => projects.set(list),
            Err(e) => tracing::warn!("failed to load projects: {e}"),
        }
    });

    let me = auth().user;
    let is_staff = me.as_ref().map(|m| m.rank.is_staff()).unwrap_or(false);

    let handle_image = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let Ok(bytes) = file.read_bytes().await.map(|b| b.to_vec()) else {
            messages.error("Could not read the selected file");
            return;
        };

        uploading.set(true);
        match api::storage::upload_image(Bucket::ProjectImages, name, bytes).await {
            Ok(url) => image_url.set(Some(url)),
            Err(e) => messages.error(e.to_string()),
        }
        uploading.set(false);
    };

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            uploading.set(true);
            let result = api::projects::create_project(
                title(),
                description(),
                language(),
                download_link(),
                image_url(),
                project_type(),
            )
            .await;
            uploading.set(false);

            match result {
                Ok(created) => {
                    messages.success("Project created!");
                    if created.project_type == ProjectType::Public {
                        projects.write().insert(0, created);
                    }
                    show_create.set(false);
                    title.set(String::new());
                    description.set(String::new());
                    language.set(String::new());
                    download_link.set(String::new());
                    image_url.set(None);
                    project_type.set(ProjectType::Public);
                }
                Err(e) => messages.error(e.to_string()),
            }
        });
    };

    let needle = search().to_lowercase();
    let filtered: Vec<ProjectInfo> = projects()
        .into_iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.owner.username.to_lowercase().contains(&needle)
        })
        .collect();

    rsx! {
        RetroWindow {
            title: "MasonHub - Community Projects",
            div {
                class: "projects-toolbar",
                input {
                    class: "retro-input search-input",
                    r#type: "text",
                    placeholder: "Search projects...",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                if me.is_some() {
                    button {
                        class: "retro-button primary",
                        onclick: move |_| show_create.toggle(),
                        if show_create() { "Cancel" } else { "+ Create Project" }
                    }
                }
            }

            if show_create() {
                form {
                    class: "create-project-form",
                    onsubmit: handle_create,
                    input {
                        class: "retro-input",
                        r#type: "text",
                        placeholder: "Project title",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }
                    textarea {
                        class: "retro-input",
                        placeholder: "Description (max 200 characters)",
                        maxlength: "200",
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                    input {
                        class: "retro-input",
                        r#type: "text",
                        placeholder: "Programming language",
                        value: language(),
                        oninput: move |evt| language.set(evt.value()),
                    }
                    input {
                        class: "retro-input",
                        r#type: "url",
                        placeholder: "Download link",
                        value: download_link(),
                        oninput: move |evt| download_link.set(evt.value()),
                    }
                    if is_staff {
                        select {
                            class: "retro-input",
                            value: project_type().as_str(),
                            onchange: move |evt| project_type.set(ProjectType::parse(&evt.value())),
                            option { value: "public", "Public" }
                            option { value: "vip", "VIP only" }
                            option { value: "mason", "Mason team only" }
                        }
                    }
                    input {
                        class: "retro-input",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_image,
                    }
                    if let Some(url) = image_url() {
                        img { class: "upload-preview", src: "{url}" }
                    }
                    button {
                        class: "retro-button primary",
                        r#type: "submit",
                        disabled: uploading(),
                        if uploading() { "Uploading..." } else { "Create" }
                    }
                }
            }

            div {
                class: "projects-grid",
                if filtered.is_empty() {
                    div { class: "no-projects", "No projects found" }
                }
                for project in filtered {
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
