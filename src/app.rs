//! Checklist Admin App
//!
//! Path-based switch between the form screens.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{ChecklistTaskEditor, SystemForm, TaskForm};
use crate::config::load_config;
use crate::context::{current_path, AppContext};
use crate::models::Identifier;

const NEW_TASK_ROUTE: &str = "/admin/tasks/new";
const NEW_SYSTEM_ROUTE: &str = "/admin/systems/new";

/// Screen shown for a path
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    NewTask,
    NewSystem,
    /// `/checklist/{id}/edit`
    Checklist(Identifier),
    Listing(String),
}

impl Screen {
    fn for_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            NEW_TASK_ROUTE => Screen::NewTask,
            NEW_SYSTEM_ROUTE => Screen::NewSystem,
            other => checklist_id(other)
                .map(Screen::Checklist)
                .unwrap_or_else(|| Screen::Listing(path.to_string())),
        }
    }
}

fn checklist_id(path: &str) -> Option<Identifier> {
    path.strip_prefix("/checklist/")?
        .strip_suffix("/edit")?
        .parse()
        .ok()
}

#[component]
pub fn App() -> impl IntoView {
    let route = signal(current_path().unwrap_or_else(|| "/".to_string()));
    let ctx = AppContext::new(route, load_config());
    provide_context(ctx);

    let popstate = window_event_listener(ev::popstate, move |_| ctx.sync_with_location());
    on_cleanup(move || popstate.remove());

    let screen = Memo::new(move |_| Screen::for_path(&ctx.route.get()));

    view! {
        <main class="admin-panel">
            {move || match screen.get() {
                Screen::NewTask => view! { <TaskForm /> }.into_any(),
                Screen::NewSystem => view! { <SystemForm /> }.into_any(),
                Screen::Checklist(id) => view! {
                    <ChecklistTaskEditor task_list_id=id entries=Vec::new() />
                }.into_any(),
                Screen::Listing(path) => view! { <Listing path=path /> }.into_any(),
            }}
        </main>
    }
}

/// Landing page for routes owned by other screens
#[component]
fn Listing(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section class="listing">
            <h1>"Checklist admin"</h1>
            <p class="listing-path">{path}</p>
            <nav class="listing-actions">
                <button type="button" on:click=move |_| ctx.navigate(NEW_TASK_ROUTE)>"Add task"</button>
                <button type="button" on:click=move |_| ctx.navigate(NEW_SYSTEM_ROUTE)>"Register system"</button>
            </nav>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_routes() {
        assert_eq!(Screen::for_path("/admin/tasks/new"), Screen::NewTask);
        assert_eq!(Screen::for_path("/admin/systems/new/"), Screen::NewSystem);
        assert_eq!(Screen::for_path("/checklist/12/edit"), Screen::Checklist(12));
    }

    #[test]
    fn test_unknown_routes_fall_back_to_listing() {
        assert_eq!(
            Screen::for_path("/checklist/abc/edit"),
            Screen::Listing("/checklist/abc/edit".to_string())
        );
        assert_eq!(Screen::for_path("/admin/alerts"), Screen::Listing("/admin/alerts".to_string()));
    }
}
