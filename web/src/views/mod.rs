use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

mod home;
pub use home::Home;

mod auth_page;
pub use auth_page::AuthPage;

mod projects;
pub use projects::Projects;

mod project_detail;
pub use project_detail::ProjectDetail;

mod members;
pub use members::Members;

mod mason;
pub use mason::Mason;

mod rooms;
pub use rooms::{MasonRoom, VipRoom};

mod admin;
pub use admin::AdminPanel;

mod profile_view;
pub use profile_view::ProfileView;

mod my_profile;
pub use my_profile::MyProfile;

mod rules;
pub use rules::Rules;

mod announcements;
pub use announcements::Announcements;

/// App chrome: the navbar with rank-gated links around the routed page.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        Navbar {
            Link { class: "nav-btn", to: Route::Home {}, "Home" }
            Link { class: "nav-btn", to: Route::Projects {}, "Projects" }
            Link { class: "nav-btn", to: Route::Members {}, "Members" }
            Link { class: "nav-btn", to: Route::Announcements {}, "Announcements" }
            Link { class: "nav-btn", to: Route::Mason {}, "Mason" }
            Link { class: "nav-btn", to: Route::Rules {}, "Rules" }
            if let Some(me) = user.as_ref() {
                if me.rank.has_vip_access() {
                    Link { class: "nav-btn gold", to: Route::VipRoom {}, "VIP" }
                }
                if me.rank.is_staff() {
                    Link { class: "nav-btn gold", to: Route::MasonRoom {}, "Mason Projects" }
                }
                Link { class: "nav-btn", to: Route::MyProfile {}, "Profile" }
                if me.rank.is_admin() {
                    Link { class: "nav-btn gold", to: Route::AdminPanel {}, "Admin Panel" }
                }
                LogoutButton { class: "nav-btn logout" }
            } else {
                Link { class: "nav-btn", to: Route::AuthPage {}, "Login" }
            }
        }
        main {
            class: "page-content",
            Outlet::<Route> {}
        }
    }
}

/// Shared frame for the retro window dressing every page uses.
#[component]
pub fn RetroWindow(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "retro-window",
            div {
                class: "window-header",
                span { "{title}" }
                div {
                    class: "window-buttons",
                    div { class: "window-button minimize", "_" }
                    div { class: "window-button maximize", "□" }
                    div { class: "window-button close", "×" }
                }
            }
            div {
                class: "window-content",
                {children}
            }
        }
    }
}
