use leptos::prelude::*;

/// Inline validation message under an input
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="field-error">{text}</p> })
}
