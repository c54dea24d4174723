//! Headless List View
//!
//! In-memory `ListView` that behaves like the DOM rows: strike-through on
//! toggle, label/editor swap on edit, commit on blur or Enter. User events
//! are simulated through the `click_*` / `*_editor` methods.

use std::cell::RefCell;

use crate::input::COMMIT_KEY;
use crate::item::{commit_edit, label_decoration, Item};
use crate::view::{ListView, RowHandler};

#[derive(Debug, Clone)]
struct HeadlessRow {
    label: String,
    checked: bool,
    /// Label `text-decoration`
    decoration: &'static str,
    /// Editor field contents while in edit mode
    editor: Option<String>,
}

#[derive(Default)]
pub struct HeadlessListView {
    rows: RefCell<Vec<HeadlessRow>>,
    toggled: RefCell<Option<RowHandler>>,
    edited: RefCell<Option<RowHandler>>,
    delete_requested: RefCell<Option<RowHandler>>,
}

impl HeadlessListView {
    pub fn new() -> Self {
        Self::default()
    }

    fn fire(slot: &RefCell<Option<RowHandler>>, index: usize) {
        // Clone out first: the handler re-enters the view to save.
        let handler = slot.borrow().clone();
        if let Some(handler) = handler {
            handler(index);
        }
    }

    pub fn label(&self, index: usize) -> Option<String> {
        self.rows.borrow().get(index).map(|row| row.label.clone())
    }

    pub fn is_struck(&self, index: usize) -> Option<bool> {
        self.decoration(index).map(|decoration| decoration == label_decoration(true))
    }

    pub fn decoration(&self, index: usize) -> Option<&'static str> {
        self.rows.borrow().get(index).map(|row| row.decoration)
    }

    pub fn is_editing(&self, index: usize) -> bool {
        self.rows
            .borrow()
            .get(index)
            .is_some_and(|row| row.editor.is_some())
    }

    /// Flip the checkbox of row `index`
    pub fn click_checkbox(&self, index: usize) {
        {
            let mut rows = self.rows.borrow_mut();
            let Some(row) = rows.get_mut(index) else {
                return;
            };
            row.checked = !row.checked;
            row.decoration = label_decoration(row.checked);
        }
        Self::fire(&self.toggled, index);
    }

    /// Activate the edit affordance: editor pre-filled with the label
    pub fn begin_edit(&self, index: usize) {
        let mut rows = self.rows.borrow_mut();
        if let Some(row) = rows.get_mut(index) {
            if row.editor.is_none() {
                row.editor = Some(row.label.clone());
            }
        }
    }

    /// Replace the editor contents of a row in edit mode
    pub fn type_into_editor(&self, index: usize, text: &str) {
        let mut rows = self.rows.borrow_mut();
        if let Some(editor) = rows.get_mut(index).and_then(|row| row.editor.as_mut()) {
            *editor = text.to_string();
        }
    }

    /// Focus leaves the editor: commit to the label
    pub fn blur_editor(&self, index: usize) {
        {
            let mut rows = self.rows.borrow_mut();
            let Some(row) = rows.get_mut(index) else {
                return;
            };
            let Some(raw) = row.editor.take() else {
                return;
            };
            row.label = commit_edit(&raw);
        }
        Self::fire(&self.edited, index);
    }

    pub fn press_key_in_editor(&self, index: usize, key: &str) {
        if key == COMMIT_KEY {
            self.blur_editor(index);
        }
    }

    pub fn click_delete(&self, index: usize) {
        if index < self.rows.borrow().len() {
            Self::fire(&self.delete_requested, index);
        }
    }
}

impl ListView for HeadlessListView {
    fn render_row(&self, item: &Item) {
        self.rows.borrow_mut().push(HeadlessRow {
            label: item.text.clone(),
            checked: item.completed,
            decoration: label_decoration(item.completed),
            editor: None,
        });
    }

    fn remove_row(&self, index: usize) {
        let mut rows = self.rows.borrow_mut();
        if index < rows.len() {
            rows.remove(index);
        }
    }

    fn for_each_row(&self, visit: &mut dyn FnMut(usize, Item)) {
        // Rows mid-edit report their label, not the editor contents.
        for (index, row) in self.rows.borrow().iter().enumerate() {
            visit(index, Item::with_state(row.label.clone(), row.checked));
        }
    }

    fn on_row_toggled(&self, handler: RowHandler) {
        *self.toggled.borrow_mut() = Some(handler);
    }

    fn on_row_edited(&self, handler: RowHandler) {
        *self.edited.borrow_mut() = Some(handler);
    }

    fn on_row_delete_requested(&self, handler: RowHandler) {
        *self.delete_requested.borrow_mut() = Some(handler);
    }
}
