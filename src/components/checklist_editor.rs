//! Checklist Task Editor Component
//!
//! Editable rows of checklist entries for one task list.

use leptos::prelude::*;

use admin_forms::schema::{EntryField, EntryInput, EntryValues};
use admin_forms::{ChecklistFormController, FieldValue};

use crate::components::FieldError;
use crate::context::AppContext;
use crate::models::{Identifier, TaskListEntry};

#[component]
pub fn ChecklistTaskEditor(task_list_id: Identifier, entries: Vec<TaskListEntry>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let form = RwSignal::new(ChecklistFormController::new(&entries, task_list_id));
    // Rows are only rebuilt when one is added or removed
    let row_count = Memo::new(move |_| form.with(|f| f.entries().len()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            if let Err(e) = f.submit() {
                log::debug!("[CHECKLIST] not saved: {}", e);
            }
        });
    };

    view! {
        <section class="form-card">
            <h2 class="form-title">"Checklist tasks"</h2>
            <form class="checklist-form" on:submit=on_submit>
                <div class="checklist-rows">
                    {move || (0..row_count.get())
                        .map(|index| view! { <EntryRow index=index form=form /> })
                        .collect_view()}
                </div>
                <div class="form-actions">
                    <button type="button" on:click=move |_| form.update(|f| f.add_entry())>
                        "Add task"
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| form.with_untracked(|f| f.cancel(&ctx, &ctx.config()))
                    >
                        "Cancel"
                    </button>
                    <button type="submit" disabled=move || form.with(|f| f.is_loading())>
                        "Save"
                    </button>
                </div>
            </form>
        </section>
    }
}

/// One entry's inputs, bound by index
#[component]
fn EntryRow(index: usize, form: RwSignal<ChecklistFormController>) -> impl IntoView {
    let field = move |input: EntryInput| EntryField::new(index, input);
    let set = move |input: EntryInput, value: FieldValue| {
        form.update(|f| {
            if let Err(e) = f.edit(field(input), value) {
                log::warn!("[CHECKLIST] {}", e);
            }
        });
    };
    let text_of = move |read: fn(&EntryValues) -> String| {
        move || form.with(|f| f.entries().get(index).map(read).unwrap_or_default())
    };
    let flag_of = move |read: fn(&EntryValues) -> bool| {
        move || form.with(|f| f.entries().get(index).is_some_and(read))
    };
    let error_of = move |input: EntryInput| {
        Signal::derive(move || form.with(|f| f.error(field(input)).map(str::to_string)))
    };

    view! {
        <fieldset class="checklist-row">
            <input
                type="text"
                placeholder="System id"
                prop:value=text_of(|entry| entry.system_id.map(|id| id.to_string()).unwrap_or_default())
                on:input=move |ev| set(EntryInput::SystemId, FieldValue::Text(event_target_value(&ev)))
            />
            <FieldError message=error_of(EntryInput::SystemId) />

            <input
                type="text"
                placeholder="Checklist"
                prop:value=text_of(|entry| entry.checklist.clone())
                on:input=move |ev| set(EntryInput::Checklist, FieldValue::Text(event_target_value(&ev)))
            />
            <FieldError message=error_of(EntryInput::Checklist) />

            <input
                type="text"
                placeholder="Frequency"
                prop:value=text_of(|entry| entry.frequency.clone())
                on:input=move |ev| set(EntryInput::Frequency, FieldValue::Text(event_target_value(&ev)))
            />
            <FieldError message=error_of(EntryInput::Frequency) />

            <input
                type="text"
                placeholder="Note"
                prop:value=text_of(|entry| entry.note.clone())
                on:input=move |ev| set(EntryInput::Note, FieldValue::Text(event_target_value(&ev)))
            />

            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=flag_of(|entry| entry.review)
                    on:change=move |ev| set(EntryInput::Review, FieldValue::Flag(event_target_checked(&ev)))
                />
                "Review"
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=flag_of(|entry| entry.status)
                    on:change=move |ev| set(EntryInput::Status, FieldValue::Flag(event_target_checked(&ev)))
                />
                "Status"
            </label>

            <button type="button" class="delete-btn" on:click=move |_| form.update(|f| f.remove_entry(index))>
                "×"
            </button>
        </fieldset>
    }
}
