//! Shareable URLs and small browser helpers.

/// Path to a member's public profile page.
pub fn profile_url(username: &str) -> String {
    format!("/user/{}", username)
}

/// Path to a project's detail page.
pub fn project_url(project_id: &str) -> String {
    format!("/project/{}", project_id)
}

/// Absolute form of an in-app `path` for copying off-site. In the browser the
/// origin is prefixed; elsewhere the path is returned as-is.
pub fn share_url(path: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return format!("{origin}{path}");
        }
    }
    path.to_string()
}

/// Ask the user to confirm a destructive action. Outside the browser there is
/// nobody to ask, so the action proceeds.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("confirm({message}) outside browser");
    }
    true
}

/// Navigate the browser to `path`. No-op outside the browser.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect_to({path}) outside browser");
    }
}

/// Copy `text` to the system clipboard. Best-effort; failures are silent.
pub fn copy_to_clipboard(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("clipboard write outside browser: {text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shareable_urls() {
        assert_eq!(profile_url("geodude"), "/user/geodude");
        assert_eq!(
            project_url("6f2a6e5e-0000-0000-0000-000000000000"),
            "/project/6f2a6e5e-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn share_url_keeps_path_without_an_origin() {
        // Outside the browser there is no origin to prefix.
        assert_eq!(share_url("/user/geodude"), "/user/geodude");
    }

    #[test]
    fn confirm_proceeds_without_a_browser() {
        assert!(confirm("Delete this project?"));
    }
}
