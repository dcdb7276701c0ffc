//! Todo App
//!
//! Builds the service from config, mirrors its store into Leptos, and lays
//! out header, list, footer and the error notification.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_core::{AppConfig, ConfigError, HttpTodoApi, StatusFilter, TodoService};

use crate::components::{ErrorNotification, Footer, Header, TodoList, UserWarning};
use crate::context::{AppContext, Service};
use crate::store::{store_sync, ViewState, ViewStateStoreFields};
use crate::timer::TimeoutScheduler;

const API_URL: Option<&str> = option_env!("TODO_API_URL");
const USER_ID: Option<&str> = option_env!("TODO_USER_ID");

fn build_service() -> Result<Service, ConfigError> {
    let config = AppConfig::default().with_overrides(API_URL, USER_ID)?;
    let api = HttpTodoApi::new(config.base_url.clone(), config.user_id()?);
    TodoService::from_config(api, &config, TimeoutScheduler)
}

fn current_hash_filter() -> StatusFilter {
    window()
        .location()
        .hash()
        .map(|hash| StatusFilter::from_hash(&hash))
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let service = match build_service() {
        Ok(service) => service,
        Err(e) => {
            log::warn!("[APP] not starting: {}", e);
            return view! { <UserWarning reason=e.to_string() /> }.into_any();
        }
    };

    // Mirror core state into the reactive store
    let state = Store::new(ViewState::default());
    service.store().subscribe(move |snapshot| store_sync(&state, snapshot));

    let ctx = AppContext::new(service.clone(), state);
    provide_context(ctx);

    // Keep the filter in sync with the location hash
    ctx.set_filter(current_hash_filter());
    let hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        ctx.set_filter(current_hash_filter());
    });
    on_cleanup(move || hash_listener.remove());

    // Load todos on mount
    spawn_local(async move {
        if service.load().await.is_ok() {
            log::debug!("[APP] initial load done");
        }
    });

    let has_todos = move || state.todos().with(|todos| !todos.is_empty());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <TodoList />

                <Show when=has_todos>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
    .into_any()
}
