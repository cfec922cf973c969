use contracts::quote::{ContactMessage, ContactResponse};
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::config::{use_api_config, ApiConfig};

async fn send_contact(config: &ApiConfig, message: &ContactMessage) -> Result<ContactResponse, String> {
    Request::post(&config.api_url("/api/contact"))
        .json(message)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Contact form. Submission is await-then-render: the button disables while
/// the request is in flight and the outcome is shown inline.
#[component]
#[allow(non_snake_case)]
pub fn ContactPage() -> impl IntoView {
    let config = use_api_config();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (result, set_result) = signal(None::<Result<(), String>>);

    let is_valid = move || {
        !name.get().trim().is_empty()
            && email.get().contains('@')
            && !message.get().trim().is_empty()
    };

    let handle_submit = move |_| {
        if !is_valid() || submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_result.set(None);

        let body = ContactMessage {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone: {
                let p = phone.get_untracked().trim().to_string();
                if p.is_empty() { None } else { Some(p) }
            },
            message: message.get_untracked().trim().to_string(),
        };
        let config = config.clone();
        spawn_local(async move {
            let outcome = match send_contact(&config, &body).await {
                Ok(resp) if resp.success => Ok(()),
                Ok(resp) => Err(resp
                    .error
                    .unwrap_or_else(|| "Message could not be sent".to_string())),
                Err(err) => {
                    log::error!("contact submit failed: {}", err);
                    Err("Message could not be sent".to_string())
                }
            };
            if outcome.is_ok() {
                set_message.try_set(String::new());
            }
            set_result.try_set(Some(outcome));
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="content contact-page">
            <h2>{"Contact Us"}</h2>
            <p>{"Questions about a block or a custom drawing? Send us a note."}</p>

            <div class="contact-form">
                <label>
                    {"Name"}
                    <input
                        type="text"
                        class="form-control"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {"Email"}
                    <input
                        type="email"
                        class="form-control"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {"Phone (optional)"}
                    <input
                        type="tel"
                        class="form-control"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {"Message"}
                    <textarea
                        class="form-control"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <button
                    class="btn btn-primary"
                    disabled=move || submitting.get() || !is_valid()
                    on:click=handle_submit
                >
                    {move || if submitting.get() { "Sending..." } else { "Send message" }}
                </button>

                {move || {
                    result.get().map(|outcome| match outcome {
                        Ok(()) => view! {
                            <div class="form-success">{"Thanks, we'll get back to you shortly."}</div>
                        }
                        .into_any(),
                        Err(err) => view! { <div class="form-error">{err}</div> }.into_any(),
                    })
                }}
            </div>
        </div>
    }
}
