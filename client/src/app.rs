//! Root application component with routing and context providers.
//!
//! A host application that embeds [`CreatePostPage`] instead provides the
//! `RwSignal<AuthState>` and `RwSignal<CategoriesState>` contexts from its own
//! auth and category providers.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::create_post::CreatePostPage;
use crate::state::{auth::AuthState, categories::CategoriesState};

/// Root application component.
///
/// Provides the shared state contexts and mounts the create-post route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let categories = RwSignal::new(CategoriesState::default());

    provide_context(auth);
    provide_context(categories);

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("create-post") view=CreatePostPage/>
            </Routes>
        </Router>
    }
}
