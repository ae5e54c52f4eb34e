//! Create-post page: title, category and body, submitted to `POST /posts`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session and category list from context, owns a local
//! `PostFormState`, and navigates to the new post on success.
//!
//! TEARDOWN
//! ========
//! Leaving the page while a request is in flight does not abort the fetch;
//! its outcome is dropped so a stale response never writes state or
//! navigates.

#[cfg(test)]
#[path = "create_post_test.rs"]
mod create_post_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use posts::CreatePostRequest;

use crate::state::auth::AuthState;
use crate::state::categories::CategoriesState;
use crate::state::post_form::{PostFormState, SubmitStep};
use crate::util::auth::{AuthGate, LOGIN_PATH, auth_gate};

/// Route of this page.
pub const CREATE_POST_PATH: &str = "/create-post";

/// Token to submit with, if the user is signed in.
fn session_token(auth: &AuthState) -> Option<String> {
    auth.session().map(|s| s.token.to_owned())
}

/// Create-post page. Renders only a login prompt without a session.
#[component]
pub fn CreatePostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let form = RwSignal::new(PostFormState::default());
    let navigate = use_navigate();

    let alive = Arc::new(AtomicBool::new(true));
    let alive_cleanup = alive.clone();
    on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.with_untracked(session_token) else {
            return;
        };
        let step = form.try_update(PostFormState::begin_submit).unwrap_or(SubmitStep::Busy);
        let SubmitStep::Send(request) = step else {
            return;
        };
        spawn_submit(form, token, request, navigate.clone(), alive.clone());
    };

    view! {
        <Title text="Create Post"/>
        {move || match auth_gate(&auth.get()) {
            AuthGate::Loading => view! {
                <div class="create-post-page">
                    <p>"Loading..."</p>
                </div>
            }
            .into_any(),
            AuthGate::LoginPrompt => view! {
                <div class="create-post-page">
                    <p class="alert alert--warning">
                        "Please " <a href=LOGIN_PATH>"log in"</a> " to create a post."
                    </p>
                </div>
            }
            .into_any(),
            AuthGate::Ready => view! {
                <div class="create-post-page">
                    <div class="create-post-card">
                        <h2 class="create-post-card__title">"Create New Post"</h2>
                        <Show when=move || form.with(|f| f.error.is_some())>
                            <p class="alert alert--danger">
                                {move || form.with(|f| f.error.clone().unwrap_or_default())}
                            </p>
                        </Show>
                        <form class="create-post-form" on:submit=on_submit.clone()>
                            <label class="create-post-form__label" for="title">"Title"</label>
                            <input
                                id="title"
                                class="create-post-form__input"
                                type="text"
                                required=true
                                prop:value=move || form.with(|f| f.draft.title.clone())
                                on:input=move |ev| form.update(|f| f.set_title(event_target_value(&ev)))
                            />
                            <label class="create-post-form__label" for="category">"Category"</label>
                            <select
                                id="category"
                                class="create-post-form__input"
                                required=true
                                disabled=move || categories.with(|c| c.loading)
                                prop:value=move || form.with(|f| f.draft.category_id.clone())
                                on:change=move |ev| form.update(|f| f.select_category(event_target_value(&ev)))
                            >
                                {move || {
                                    categories
                                        .with(CategoriesState::select_options)
                                        .into_iter()
                                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                                        .collect_view()
                                }}
                            </select>
                            <label class="create-post-form__label" for="content">"Content"</label>
                            <textarea
                                id="content"
                                class="create-post-form__input create-post-form__input--body"
                                required=true
                                prop:value=move || form.with(|f| f.draft.content.clone())
                                on:input=move |ev| form.update(|f| f.set_content(event_target_value(&ev)))
                            ></textarea>
                            <button
                                class="create-post-form__submit"
                                type="submit"
                                disabled=move || form.with(|f| f.loading)
                            >
                                {move || form.with(PostFormState::submit_label)}
                            </button>
                        </form>
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}

#[cfg(feature = "csr")]
fn spawn_submit<F>(
    form: RwSignal<PostFormState>,
    token: String,
    request: CreatePostRequest,
    navigate: F,
    alive: Arc<AtomicBool>,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    log::info!("creating post in category {}", request.category_id);
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::create_post(&token, &request).await;
        if !alive.load(Ordering::Relaxed) {
            log::warn!("create post settled after the page was closed; result dropped");
            return;
        }
        if let Err(e) = &outcome {
            log::error!("error creating post: {e}");
        }
        if let Some(path) = form.try_update(|f| f.complete(outcome)).flatten() {
            navigate(&path, NavigateOptions::default());
        }
    });
}

#[cfg(not(feature = "csr"))]
fn spawn_submit<F>(
    form: RwSignal<PostFormState>,
    token: String,
    request: CreatePostRequest,
    navigate: F,
    alive: Arc<AtomicBool>,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    // No browser runtime: settle immediately with a transport failure.
    let _ = (token, request, navigate, alive);
    form.update(|f| {
        f.complete(Err(posts::SubmitError::Transport("not available outside the browser".to_owned())));
    });
}
