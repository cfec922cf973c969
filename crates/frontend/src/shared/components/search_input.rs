use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button.
///
/// Keystrokes update the DOM immediately; `on_change` fires after the user
/// pauses, so the filter pipeline is not re-run per keystroke.
#[component]
pub fn SearchInput(
    /// Current filter value (for display and the clear button)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search products...".to_string()
    } else {
        placeholder
    };

    let pending = StoredValue::new_local(None::<Timeout>);

    let cancel_pending = move || {
        pending.update_value(|p| {
            if let Some(timeout) = p.take() {
                timeout.cancel();
            }
        });
    };

    let handle_input = move |new_value: String| {
        cancel_pending();
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form-control"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || {
                (!value.get().is_empty()).then(|| view! {
                    <button
                        class="btn-clear"
                        title="Clear search"
                        on:click=move |_| {
                            cancel_pending();
                            on_change.run(String::new());
                        }
                    >
                        {"×"}
                    </button>
                })
            }}
        </div>
    }
}
