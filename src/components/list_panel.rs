//! List Panel Component
//!
//! Heading, input field, list container and bulk actions for one list.
//! The controller binds to the rendered elements by id once mounted.

use std::rc::Rc;

use leptos::prelude::*;
use list_sync::{InputHandler, KeyValueStorage, ListConfig, ListController, MemoryStorage};

use crate::dom::{DomListView, DomResult, LocalStorage, TextInput, WindowConfirm};

struct MountedList {
    controller: Rc<ListController<DomListView>>,
    input: InputHandler<DomListView>,
    field: TextInput,
}

fn mount_list(config: &ListConfig) -> DomResult<MountedList> {
    let view = DomListView::attach(&config.container_id)?;
    let field = TextInput::attach(&config.input_id)?;
    let backend: Rc<dyn KeyValueStorage> = match LocalStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            tracing::warn!(error = %err, "localStorage unavailable, list will not persist");
            Rc::new(MemoryStorage::new())
        }
    };

    let controller = ListController::new(config.clone(), view, backend, WindowConfirm);
    controller.restore();
    Ok(MountedList {
        input: InputHandler::new(controller.clone()),
        controller,
        field,
    })
}

/// One editable, checkable list
#[component]
pub fn ListPanel(config: ListConfig) -> impl IntoView {
    let mounted = StoredValue::new_local(None::<MountedList>);

    // Runs after the elements below are in the document.
    let mount_config = config.clone();
    Effect::new(move |_| {
        if mounted.with_value(Option::is_some) {
            return;
        }
        match mount_list(&mount_config) {
            Ok(list) => mounted.set_value(Some(list)),
            Err(err) => {
                tracing::error!(key = %mount_config.storage_key, error = %err, "failed to mount list")
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        mounted.with_value(|list| {
            if let Some(list) = list {
                list.input.handle_key(&key, &list.field);
            }
        });
    };

    let on_delete_completed = move |_: web_sys::MouseEvent| {
        mounted.with_value(|list| {
            if let Some(list) = list {
                list.controller.delete_completed();
            }
        });
    };

    let on_delete_all = move |_: web_sys::MouseEvent| {
        mounted.with_value(|list| {
            if let Some(list) = list {
                list.controller.delete_all();
            }
        });
    };

    let ListConfig {
        title,
        container_id,
        input_id,
        noun,
        ..
    } = config;

    view! {
        <section class="list-panel">
            <h2>{title}</h2>
            <input
                type="text"
                id=input_id
                class="list-input"
                placeholder=format!("Add {}...", noun)
                on:keydown=on_keydown
            />
            <ul id=container_id class="item-list"></ul>
            <div class="list-actions">
                <button class="delete-completed-btn" on:click=on_delete_completed>
                    "Delete completed"
                </button>
                <button class="delete-all-btn" on:click=on_delete_all>
                    "Delete all"
                </button>
            </div>
        </section>
    }
}
