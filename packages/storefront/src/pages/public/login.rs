//! Phone login page: phone number, one-time code, then login or signup

use dioxus::prelude::*;
use std::rc::Rc;
use std::sync::Arc;

use crate::components::LoadingSpinner;
use crate::flows::auth::{AuthEffects, AuthEvent, AuthField, AuthMachine, AuthStep, CODE_LENGTH};
use crate::machine::{drive, Machine};
use crate::routes::RouterNavigator;
use crate::state::use_services;

#[component]
pub fn Login() -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let mut machine = use_signal(AuthMachine::new);
    let effects = use_hook(|| {
        Rc::new(AuthEffects {
            codes: services.codes.clone(),
            accounts: services.accounts.clone(),
            timer: services.timer.clone(),
            navigator: Arc::new(RouterNavigator(navigator)),
            step_delay: services.config.otp_step_delay,
        })
    });

    // Tasks are scoped to this component and dropped if the user leaves mid-step.
    let send = use_callback(move |event: AuthEvent| {
        let effects = effects.clone();
        spawn(async move {
            drive(|ev| machine.write().decide(ev), &*effects, event).await;
        });
    });

    let edit = move |field: AuthField| {
        move |e: FormEvent| {
            send.call(AuthEvent::Edited {
                field,
                value: e.value(),
            })
        }
    };

    let clock = services.clock.clone();
    let submit = move |e: FormEvent| {
        e.prevent_default();
        let event = match machine.peek().step() {
            AuthStep::Phone => AuthEvent::PhoneSubmitted,
            AuthStep::Otp => AuthEvent::OtpSubmitted { at: clock.now() },
            AuthStep::Signup => AuthEvent::SignupSubmitted,
            AuthStep::LoggedIn | AuthStep::Registered => return,
        };
        send.call(event);
    };

    let state = machine.read().clone();
    let loading = state.is_loading();
    let phone = state.phone().to_string();
    let otp_input = state.otp_input().to_string();
    let name = state.name().to_string();
    let email = state.email().to_string();
    let title = match state.step() {
        AuthStep::Signup => "Create your account",
        _ => "Sign in",
    };

    rsx! {
        div {
            class: "card auth-card",

            h1 { "{title}" }

            if let Some(err) = state.error() {
                div { class: "alert alert-error", "{err}" }
            }

            match state.step() {
                AuthStep::Phone => rsx! {
                    form {
                        onsubmit: submit,
                        label { r#for: "phone", "Phone number" }
                        input {
                            id: "phone",
                            r#type: "tel",
                            inputmode: "numeric",
                            value: "{phone}",
                            placeholder: "09xxxxxxxxx",
                            disabled: loading,
                            oninput: edit(AuthField::Phone),
                        }
                        button {
                            r#type: "submit",
                            class: "btn",
                            disabled: loading,
                            if loading { "Sending code..." } else { "Send code" }
                        }
                    }
                },
                AuthStep::Otp => rsx! {
                    form {
                        onsubmit: submit,
                        p { class: "muted", "Enter the {CODE_LENGTH}-digit code sent to {phone}" }
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            maxlength: "{CODE_LENGTH}",
                            value: "{otp_input}",
                            disabled: loading,
                            oninput: edit(AuthField::Otp),
                        }
                        button {
                            r#type: "submit",
                            class: "btn",
                            disabled: loading,
                            if loading { "Verifying..." } else { "Verify" }
                        }
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            disabled: loading,
                            onclick: move |_| send.call(AuthEvent::ChangePhoneRequested),
                            "Change phone number"
                        }
                    }
                },
                AuthStep::Signup => rsx! {
                    form {
                        onsubmit: submit,
                        label { r#for: "name", "Full name" }
                        input {
                            id: "name",
                            r#type: "text",
                            value: "{name}",
                            disabled: loading,
                            oninput: edit(AuthField::Name),
                        }
                        label { r#for: "email", "Email (optional)" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            disabled: loading,
                            oninput: edit(AuthField::Email),
                        }
                        button {
                            r#type: "submit",
                            class: "btn",
                            disabled: loading,
                            if loading { "Creating account..." } else { "Create account" }
                        }
                    }
                },
                AuthStep::LoggedIn | AuthStep::Registered => rsx! {
                    LoadingSpinner { label: "Signing you in..." }
                },
            }
        }
    }
}
