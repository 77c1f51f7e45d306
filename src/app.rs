//! Bucket Dashboard App
//!
//! Picks the page to show from the document path.

use leptos::prelude::*;

use crate::pages::{Dashboard, Login};

/// Top-level pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Login,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Page::Login,
            _ => Page::Dashboard,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let path = window().location().pathname().unwrap_or_default();
    let page = Page::from_path(&path);
    log::info!("Opening {:?} page for {}", page, path);

    match page {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::Login => view! { <Login /> }.into_any(),
    }
}
