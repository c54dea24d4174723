//! To-Do Lists Frontend Entry Point

mod app;
mod components;
mod dom;
mod logging;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
