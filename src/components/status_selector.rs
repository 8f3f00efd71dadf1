//! Status Selector Component
//!
//! OK/NOK toggle shared by the task and system forms.

use leptos::prelude::*;

use admin_forms::TaskStatus;

/// One button per [`TaskStatus`]; none is highlighted while `current` is unset
#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<Option<TaskStatus>>,
    on_change: impl Fn(TaskStatus) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {TaskStatus::OPTIONS.into_iter().map(|status| {
                let is_selected = move || current.get() == Some(status);
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        title=status.as_str()
                        on:click=move |_| on_change(status)
                    >
                        {status.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
