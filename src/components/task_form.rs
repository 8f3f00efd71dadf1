//! Task Form Component
//!
//! Create/edit form for one task. Systems are fetched on mount for the
//! system picker; saving navigates back to the task listing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use admin_forms::loader;
use admin_forms::schema::TaskField;
use admin_forms::{FieldValue, TaskFormController, TaskStatus};

use crate::commands::HostApi;
use crate::components::{FieldError, StatusSelector};
use crate::context::AppContext;
use crate::models::{System, Task};

#[component]
pub fn TaskForm(#[prop(optional)] existing: Option<Task>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let form = RwSignal::new(TaskFormController::new(existing.as_ref()));
    let title = form.with_untracked(|f| f.title(chrono::Local::now().date_naive(), &ctx.config()));

    // Load systems once; dropping the guard on unmount aborts the fetch
    form.update(|f| f.begin_systems_load());
    let (load, guard) = loader::load_systems(HostApi);
    on_cleanup(move || drop(guard));
    spawn_local(async move {
        match load.await {
            Ok(result) => form.update(|f| f.apply_systems(result)),
            Err(_) => log::debug!("[TASK_FORM] systems load aborted"),
        }
    });

    let systems = Memo::new(move |_| form.with(|f| f.systems().to_vec()));
    let busy = Memo::new(move |_| form.with(|f| f.is_busy()));

    let set_value = move |field: TaskField, value: FieldValue| {
        form.update(|f| {
            if let Err(e) = f.edit(field, value) {
                log::warn!("[TASK_FORM] {}", e);
            }
        });
    };
    let set_field = move |field: TaskField, text: String| set_value(field, FieldValue::Text(text));
    let error_of = move |field: TaskField| {
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submission = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                log::debug!("[TASK_FORM] submit blocked: {}", e);
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let result = submission.send(&HostApi).await;
            let config = ctx.config();
            form.update(|f| {
                let _ = f.finish_submit(result, &ctx, &config);
            });
        });
    };

    let on_cancel = move |_| form.with_untracked(|f| f.cancel(&ctx, &ctx.config()));

    view! {
        <section class="form-card">
            <h2 class="form-title">{title}</h2>
            <form class="task-form" on:submit=on_submit>
                <label class="form-row">
                    <span>"System"</span>
                    <select
                        prop:value=move || form.with(|f| {
                            f.values().system_id.map(|id| id.to_string()).unwrap_or_default()
                        })
                        on:change=move |ev| set_field(TaskField::SystemId, event_target_value(&ev))
                    >
                        <option value="">
                            {move || if form.with(|f| f.is_loading_systems()) { "Loading systems..." } else { "Select a system" }}
                        </option>
                        {move || systems.get().into_iter().filter_map(system_option).collect_view()}
                    </select>
                    <FieldError message=error_of(TaskField::SystemId) />
                </label>

                <label class="form-row">
                    <span>"Description"</span>
                    <textarea
                        placeholder="Task description"
                        prop:value=move || form.with(|f| f.values().description.clone())
                        on:input=move |ev| set_field(TaskField::Description, event_target_value(&ev))
                    ></textarea>
                    <FieldError message=error_of(TaskField::Description) />
                </label>

                <div class="form-row">
                    <span>"Status"</span>
                    <StatusSelector
                        current=Signal::derive(move || form.with(|f| f.values().status.parse::<TaskStatus>().ok()))
                        on_change=move |status: TaskStatus| set_value(TaskField::Status, FieldValue::Flag(status.as_bool()))
                    />
                    <FieldError message=error_of(TaskField::Status) />
                </div>

                <label class="form-row">
                    <span>"Frequency"</span>
                    <input
                        type="text"
                        placeholder="e.g. weekly"
                        prop:value=move || form.with(|f| f.values().frequency.clone())
                        on:input=move |ev| set_field(TaskField::Frequency, event_target_value(&ev))
                    />
                    <FieldError message=error_of(TaskField::Frequency) />
                </label>

                <label class="form-row">
                    <span>"Notes"</span>
                    <textarea
                        placeholder="Notes"
                        prop:value=move || form.with(|f| f.values().notes.clone())
                        on:input=move |ev| set_field(TaskField::Notes, event_target_value(&ev))
                    ></textarea>
                </label>

                {move || form.with(|f| f.submit_error().map(|message| {
                    let message = message.to_string();
                    view! { <p class="submit-error">{message}</p> }
                }))}

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=on_cancel>"Cancel"</button>
                    <button type="submit" disabled=move || busy.get()>
                        {move || form.with(|f| f.submit_label())}
                    </button>
                </div>
            </form>
        </section>
    }
}

fn system_option(system: System) -> Option<impl IntoView> {
    let id = system.id?;
    Some(view! { <option value=id.to_string()>{system.name}</option> })
}
