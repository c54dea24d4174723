//! To-Do Frontend App
//!
//! Task list and priority list side by side.

use leptos::prelude::*;
use list_sync::ListConfig;

use crate::components::ListPanel;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"To-Do"</h1>
                <div class="lists">
                    <ListPanel config=ListConfig::tasks() />
                    <ListPanel config=ListConfig::priorities() />
                </div>
            </main>
        </div>
    }
}
