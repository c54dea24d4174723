//! Input Handler
//!
//! Text field that appends to a list on the commit key.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::ListController;
use crate::view::ListView;

/// Key that submits a new item or commits an inline edit
pub const COMMIT_KEY: &str = "Enter";

/// A single-line text field
pub trait InputField {
    fn value(&self) -> String;
    fn clear(&self);
}

/// In-memory text field
#[derive(Debug, Default)]
pub struct MemoryField {
    value: RefCell<String>,
}

impl MemoryField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(value.into()),
        }
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.value.borrow_mut() = value.into();
    }
}

impl InputField for MemoryField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn clear(&self) {
        self.value.borrow_mut().clear();
    }
}

pub struct InputHandler<V: ListView> {
    controller: Rc<ListController<V>>,
}

impl<V: ListView + 'static> InputHandler<V> {
    pub fn new(controller: Rc<ListController<V>>) -> Self {
        Self { controller }
    }

    /// Handle a key press in `field`. Returns whether an item was added.
    pub fn handle_key(&self, key: &str, field: &dyn InputField) -> bool {
        if key != COMMIT_KEY {
            return false;
        }
        if !self.controller.add(&field.value()) {
            return false;
        }
        field.clear();
        true
    }
}
