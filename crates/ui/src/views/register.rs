use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::session::use_session_store;

#[component]
pub fn RegisterView() -> Element {
    let store = use_session_store();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| None::<String>);
    let submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let store = store.clone();
        let name_value = name.read().trim().to_owned();
        let email_value = email.read().trim().to_owned();
        let password_value = password.read().clone();
        let mut error = error;
        let mut submitting = submitting;
        spawn(async move {
            submitting.set(true);
            error.set(None);
            let outcome = store
                .register(&name_value, &email_value, &password_value)
                .await;
            submitting.set(false);
            error.set(outcome.message().map(str::to_owned));
        });
    };

    rsx! {
        div { class: "auth-card",
            h2 { class: "auth-title", "Create your account" }
            if let Some(message) = error() {
                p { class: "form-error", role: "alert", "{message}" }
            }
            form { class: "auth-form", onsubmit: on_submit,
                label { r#for: "name", "Full name" }
                input {
                    id: "name",
                    r#type: "text",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { r#for: "email", "Email address" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Register" }
                }
            }
            p { class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
