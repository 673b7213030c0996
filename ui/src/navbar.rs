use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "retro-navbar",
            div {
                class: "nav-container",
                a {
                    class: "retro-logo",
                    href: "/",
                    "MasonHub"
                }
                div {
                    class: "nav-links",
                    {children}
                }
            }
        }
    }
}
