//! System Form Component
//!
//! Register/edit form for one system. Submitting opens a confirmation
//! prompt; the save only happens once it is confirmed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use admin_forms::schema::SystemField;
use admin_forms::{FieldValue, SystemFormController, TaskStatus};

use crate::commands::HostApi;
use crate::components::{ConfirmDialog, FieldError, StatusSelector};
use crate::context::AppContext;
use crate::models::System;

#[component]
pub fn SystemForm(#[prop(optional)] existing: Option<System>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let form = RwSignal::new(SystemFormController::new(existing.as_ref()));
    let (title, submit_label) = form.with_untracked(|f| (f.title(), f.submit_label()));

    let set_field = move |field: SystemField, value: FieldValue| {
        form.update(|f| {
            if let Err(e) = f.edit(field, value) {
                log::warn!("[SYSTEM_FORM] {}", e);
            }
        });
    };
    let error_of = move |field: SystemField| {
        Signal::derive(move || form.with(|f| f.error(field).map(str::to_string)))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            if let Err(e) = f.request_confirmation() {
                log::debug!("[SYSTEM_FORM] not staged: {}", e);
            }
        });
    };

    let on_confirm = Callback::new(move |_: ()| {
        let submission = match form.try_update(|f| f.begin_confirm()) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                log::debug!("[SYSTEM_FORM] confirm ignored: {}", e);
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let result = submission.send(&HostApi).await;
            let config = ctx.config();
            form.update(|f| {
                let _ = f.finish_confirm(result, &ctx, &config);
            });
        });
    });
    let on_cancel = Callback::new(move |_: ()| form.update(|f| f.cancel_confirmation()));

    let confirm_message = if existing.is_some() {
        "Save the changes to this system?"
    } else {
        "Register this system?"
    };

    view! {
        <section class="form-card">
            <h2 class="form-title">{title}</h2>
            <form class="system-form" on:submit=on_submit>
                <label class="form-row">
                    <span>"Name"</span>
                    <input
                        type="text"
                        placeholder="System name"
                        prop:value=move || form.with(|f| f.values().name.clone())
                        on:input=move |ev| set_field(SystemField::Name, FieldValue::Text(event_target_value(&ev)))
                    />
                    <FieldError message=error_of(SystemField::Name) />
                </label>

                <label class="form-row">
                    <span>"Description"</span>
                    <textarea
                        placeholder="Description"
                        prop:value=move || form.with(|f| f.values().description.clone())
                        on:input=move |ev| set_field(SystemField::Description, FieldValue::Text(event_target_value(&ev)))
                    ></textarea>
                </label>

                <div class="form-row">
                    <span>"Status"</span>
                    <StatusSelector
                        current=Signal::derive(move || form.with(|f| Some(TaskStatus::from_bool(f.values().status))))
                        on_change=move |status: TaskStatus| set_field(SystemField::Status, FieldValue::Flag(status.as_bool()))
                    />
                    <FieldError message=error_of(SystemField::Status) />
                </div>

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| form.update(|f| f.reset())>
                        "Reset"
                    </button>
                    <button type="submit" disabled=move || form.with(|f| f.is_submitting())>
                        {submit_label}
                    </button>
                </div>
            </form>

            <ConfirmDialog
                open=Signal::derive(move || form.with(|f| f.is_dialog_open()))
                busy=Signal::derive(move || form.with(|f| f.is_submitting()))
                title=submit_label
                message=confirm_message
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </section>
    }
}
