//! Confirm Dialog Component
//!
//! Modal prompt with confirm/cancel actions.

use leptos::prelude::*;

/// Confirmation prompt shown while `open` is true
///
/// # Arguments
/// * `busy` - Disables the confirm button while the confirmed action runs
/// * `on_confirm` - Callback to execute when the user confirms
/// * `on_cancel` - Callback for the cancel button and backdrop clicks
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <h3 class="dialog-title">{title.clone()}</h3>
                    <p class="dialog-message">{message.clone()}</p>
                    <div class="dialog-footer">
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cancel.run(());
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="confirm-btn"
                            disabled=move || busy.get()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            "Confirm"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
