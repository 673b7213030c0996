//! Client-side captcha challenge for the login and registration forms.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowsRotate;
use dioxus_free_icons::Icon;

const CAPTCHA_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CAPTCHA_LEN: usize = 6;

/// Generate a fresh 6-character challenge string.
pub fn generate_captcha() -> String {
    (0..CAPTCHA_LEN)
        .map(|_| CAPTCHA_CHARS[random_index(CAPTCHA_CHARS.len())] as char)
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn random_index(len: usize) -> usize {
    (js_sys::Math::random() * len as f64) as usize % len
}

#[cfg(not(target_arch = "wasm32"))]
fn random_index(len: usize) -> usize {
    use rand::Rng;
    rand::thread_rng().gen_range(0..len)
}

/// Challenge display with an input box and a refresh button.
#[component]
pub fn Captcha(
    challenge: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    onrefresh: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            class: "captcha-container",
            div {
                class: "captcha-row",
                span {
                    class: "captcha-display",
                    "{challenge}"
                }
                button {
                    r#type: "button",
                    class: "captcha-refresh",
                    title: "New code",
                    onclick: move |evt| onrefresh.call(evt),
                    Icon { icon: FaArrowsRotate, width: 14, height: 14 }
                }
            }
            input {
                class: "captcha-input",
                r#type: "text",
                placeholder: "Enter captcha code",
                value: "{value}",
                maxlength: "{CAPTCHA_LEN}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captcha_shape() {
        for _ in 0..32 {
            let c = generate_captcha();
            assert_eq!(c.len(), CAPTCHA_LEN);
            assert!(c.bytes().all(|b| CAPTCHA_CHARS.contains(&b)));
        }
    }
}
