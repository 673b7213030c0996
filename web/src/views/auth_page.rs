//! Login / registration / password-reset page.

use dioxus::prelude::*;
use ui::{generate_captcha, redirect_to, use_auth, use_messages, AuthState, Captcha};

use super::RetroWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
    Forgot,
    VerifyCode,
}

#[component]
pub fn AuthPage() -> Element {
    let mut auth = use_auth();
    let mut messages = use_messages();

    let mut mode = use_signal(|| AuthMode::Login);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut challenge = use_signal(generate_captcha);
    let mut captcha_input = use_signal(String::new);
    let mut busy = use_signal(|| false);

    // Reset flow state
    let mut reset_email = use_signal(String::new);
    let mut verification_code = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if captcha_input().trim().to_uppercase() != challenge() {
                messages.error("Invalid captcha code");
                challenge.set(generate_captcha());
                captcha_input.set(String::new());
                return;
            }

            busy.set(true);
            let result = if mode() == AuthMode::Register {
                api::auth::register(email(), password(), username()).await
            } else {
                api::auth::login(email(), password()).await
            };
            busy.set(false);

            match result {
                Ok(me) => {
                    messages.success(if mode() == AuthMode::Login {
                        "Login successful!"
                    } else {
                        "Registration successful!"
                    });
                    auth.set(AuthState {
                        user: Some(me),
                        loading: false,
                    });
                    redirect_to("/");
                }
                Err(e) => {
                    messages.error(e.to_string());
                    challenge.set(generate_captcha());
                    captcha_input.set(String::new());
                }
            }
        });
    };

    let handle_send_code = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let target = email().trim().to_string();
            if target.is_empty() {
                messages.error("Please enter your email");
                return;
            }

            busy.set(true);
            let result = api::auth::request_password_reset(target.clone()).await;
            busy.set(false);

            match result {
                Ok(()) => {
                    reset_email.set(target);
                    messages.success("Code sent! Check the server log for the verification code.");
                    mode.set(AuthMode::VerifyCode);
                }
                Err(e) => messages.error(e.to_string()),
            }
        });
    };

    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let code = verification_code().trim().to_string();
            if code.len() != 6 {
                messages.error("Please enter a valid 6-digit code");
                return;
            }
            if new_password().len() < 6 {
                messages.error("Password must be at least 6 characters");
                return;
            }
            if new_password() != confirm_password() {
                messages.error("Passwords do not match");
                return;
            }

            busy.set(true);
            let result = api::auth::reset_password(reset_email(), code, new_password()).await;
            busy.set(false);

            match result {
                Ok(()) => {
                    messages.success("Password updated! You can now log in.");
                    mode.set(AuthMode::Login);
                    password.set(String::new());
                }
                Err(e) => messages.error(e.to_string()),
            }
        });
    };

    let title = match mode() {
        AuthMode::Login => "MasonHub - Login",
        AuthMode::Register => "MasonHub - Register",
        AuthMode::Forgot => "MasonHub - Reset Password",
        AuthMode::VerifyCode => "MasonHub - Verify Code",
    };

    rsx! {
        RetroWindow {
            title: "{title}",
            match mode() {
                AuthMode::Login | AuthMode::Register => rsx! {
                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,
                        if mode() == AuthMode::Register {
                            input {
                                class: "retro-input",
                                r#type: "text",
                                placeholder: "Username (3-30 characters)",
                                value: username(),
                                oninput: move |evt| username.set(evt.value()),
                            }
                        }
                        input {
                            class: "retro-input",
                            r#type: "email",
                            placeholder: "Email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            class: "retro-input",
                            r#type: "password",
                            placeholder: "Password",
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        Captcha {
                            challenge: challenge(),
                            value: captcha_input(),
                            oninput: move |evt: FormEvent| captcha_input.set(evt.value()),
                            onrefresh: move |_| {
                                challenge.set(generate_captcha());
                                captcha_input.set(String::new());
                            },
                        }
                        button {
                            class: "retro-button primary",
                            r#type: "submit",
                            disabled: busy(),
                            if mode() == AuthMode::Login { "Login" } else { "Register" }
                        }
                    }
                    div {
                        class: "auth-switch",
                        if mode() == AuthMode::Login {
                            button {
                                class: "link-button",
                                onclick: move |_| mode.set(AuthMode::Register),
                                "Need an account? Register"
                            }
                            button {
                                class: "link-button",
                                onclick: move |_| mode.set(AuthMode::Forgot),
                                "Forgot password?"
                            }
                        } else {
                            button {
                                class: "link-button",
                                onclick: move |_| mode.set(AuthMode::Login),
                                "Already have an account? Login"
                            }
                        }
                    }
                },
                AuthMode::Forgot => rsx! {
                    form {
                        class: "auth-form",
                        onsubmit: handle_send_code,
                        p { "Enter your email and we will issue a 6-digit verification code." }
                        input {
                            class: "retro-input",
                            r#type: "email",
                            placeholder: "Email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                        button {
                            class: "retro-button primary",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Sending..." } else { "Send Code" }
                        }
                    }
                    div {
                        class: "auth-switch",
                        button {
                            class: "link-button",
                            onclick: move |_| mode.set(AuthMode::Login),
                            "Back to login"
                        }
                    }
                },
                AuthMode::VerifyCode => rsx! {
                    form {
                        class: "auth-form",
                        onsubmit: handle_verify,
                        p { "Enter the 6-digit code issued for {reset_email()} and pick a new password." }
                        input {
                            class: "retro-input",
                            r#type: "text",
                            placeholder: "Verification code",
                            maxlength: "6",
                            value: verification_code(),
                            oninput: move |evt| verification_code.set(evt.value()),
                        }
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
                        button {
                            class: "retro-button primary",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Resetting..." } else { "Reset Password" }
                        }
                    }
                    div {
                        class: "auth-switch",
                        button {
                            class: "link-button",
                            onclick: move |_| mode.set(AuthMode::Forgot),
                            "Request a new code"
                        }
                    }
                },
            }
        }
    }
}
