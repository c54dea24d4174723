//! DOM Bindings
//!
//! web-sys implementations of the list-sync capabilities.

mod confirm;
mod error;
mod input_field;
mod list_view;
mod local_storage;

pub use confirm::WindowConfirm;
pub use error::{DomError, DomResult};
pub use input_field::TextInput;
pub use list_view::DomListView;
pub use local_storage::LocalStorage;

use wasm_bindgen::JsCast;

/// Global `document`
pub fn document() -> DomResult<web_sys::Document> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or(DomError::NoWindow)
}

/// Element with `id`, cast to `T`
pub fn element_by_id<T: JsCast>(id: &str) -> DomResult<T> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}
