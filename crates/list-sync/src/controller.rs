//! List Controller
//!
//! Owns one rendered list and rewrites its store entry after every
//! mutation. Persistence is always recomputed from the rendered rows.

use std::rc::{Rc, Weak};

use crate::config::ListConfig;
use crate::item::{normalize_text, Item};
use crate::storage::KeyValueStorage;
use crate::store::Store;
use crate::view::{Confirm, ListView, RowHandler};

pub struct ListController<V: ListView> {
    config: ListConfig,
    view: V,
    store: Store,
    confirm: Box<dyn Confirm>,
}

impl<V: ListView + 'static> ListController<V> {
    /// Build a controller and register its row handlers on `view`.
    ///
    /// Handlers hold a weak reference, so dropping the returned `Rc`
    /// tears the controller down even while the view is still alive.
    pub fn new(
        config: ListConfig,
        view: V,
        backend: Rc<dyn KeyValueStorage>,
        confirm: impl Confirm + 'static,
    ) -> Rc<Self> {
        let store = Store::new(config.storage_key.clone(), backend);
        let controller = Rc::new(Self {
            config,
            view,
            store,
            confirm: Box::new(confirm),
        });

        controller.view.on_row_toggled(Self::handler(&controller, |c, index| {
            tracing::debug!(key = %c.store.key(), index, "row toggled");
            c.save();
        }));
        controller.view.on_row_edited(Self::handler(&controller, |c, index| {
            tracing::debug!(key = %c.store.key(), index, "row edited");
            c.save();
        }));
        controller
            .view
            .on_row_delete_requested(Self::handler(&controller, |c, index| c.delete_row(index)));

        controller
    }

    fn handler(controller: &Rc<Self>, action: fn(&Self, usize)) -> RowHandler {
        let weak: Weak<Self> = Rc::downgrade(controller);
        Rc::new(move |index| {
            if let Some(controller) = weak.upgrade() {
                action(&controller, index);
            }
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Render every stored item. Does not write back.
    pub fn restore(&self) -> usize {
        let items = self.store.load();
        for item in &items {
            self.view.render_row(item);
        }
        tracing::info!(key = %self.store.key(), count = items.len(), "restored list");
        items.len()
    }

    /// Append one row without saving
    pub fn render(&self, text: &str, completed: bool) {
        self.view.render_row(&Item::with_state(text, completed));
    }

    /// Append an unchecked row with the trimmed text, then save.
    ///
    /// Returns `false` and leaves everything untouched for blank input.
    pub fn add(&self, raw_text: &str) -> bool {
        let Some(text) = normalize_text(raw_text) else {
            return false;
        };
        self.render(text, false);
        self.save();
        true
    }

    /// Remove the row at `index`, then save
    pub fn delete_row(&self, index: usize) {
        if index >= self.view.len() {
            return;
        }
        self.view.remove_row(index);
        tracing::debug!(key = %self.store.key(), index, "row deleted");
        self.save();
    }

    /// Remove every checked row, then save. Returns the number removed.
    pub fn delete_completed(&self) -> usize {
        let mut checked = Vec::new();
        self.view.for_each_row(&mut |index, item| {
            if item.completed {
                checked.push(index);
            }
        });
        // Back to front so earlier indices stay valid.
        for &index in checked.iter().rev() {
            self.view.remove_row(index);
        }
        self.save();
        checked.len()
    }

    /// Remove every row after the user confirms. Returns whether it ran.
    pub fn delete_all(&self) -> bool {
        if !self.confirm.confirm(&self.config.delete_all_prompt()) {
            return false;
        }
        for index in (0..self.view.len()).rev() {
            self.view.remove_row(index);
        }
        self.save();
        true
    }

    /// Current rendered state, top to bottom
    pub fn snapshot(&self) -> Vec<Item> {
        self.view.rows()
    }

    /// Write the rendered rows to the store wholesale
    pub fn save(&self) {
        let items = self.snapshot();
        if let Err(err) = self.store.save(&items) {
            tracing::warn!(key = %self.store.key(), error = %err, "failed to save list");
        }
    }
}
