//! View Layer - Capability Traits
//!
//! What the controller needs from a rendered list and from the user.
//! Implementations: `DomListView` in the page, `HeadlessListView` in tests.

use std::rc::Rc;

use crate::item::Item;

/// Callback receiving the current position of the row that fired
pub type RowHandler = Rc<dyn Fn(usize)>;

/// A rendered, ordered list of checkable rows
///
/// Rows have no identity beyond their position. Implementations apply
/// strike-through and edit-mode swaps themselves and only report the
/// outcome through the registered handlers.
pub trait ListView {
    /// Append a row at the end
    fn render_row(&self, item: &Item);

    /// Remove the row at `index`; out-of-range is a no-op
    fn remove_row(&self, index: usize);

    /// Visit rows top to bottom with their label text and checkbox state
    fn for_each_row(&self, visit: &mut dyn FnMut(usize, Item));

    /// Checkbox flipped
    fn on_row_toggled(&self, handler: RowHandler);

    /// Inline edit committed to the label
    fn on_row_edited(&self, handler: RowHandler);

    /// Row delete affordance activated
    fn on_row_delete_requested(&self, handler: RowHandler);

    /// Current rows, top to bottom
    fn rows(&self) -> Vec<Item> {
        let mut rows = Vec::new();
        self.for_each_row(&mut |_, item| rows.push(item));
        rows
    }

    fn len(&self) -> usize {
        let mut count = 0;
        self.for_each_row(&mut |_, _| count += 1);
        count
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ListView + ?Sized> ListView for Rc<T> {
    fn render_row(&self, item: &Item) {
        (**self).render_row(item)
    }

    fn remove_row(&self, index: usize) {
        (**self).remove_row(index)
    }

    fn for_each_row(&self, visit: &mut dyn FnMut(usize, Item)) {
        (**self).for_each_row(visit)
    }

    fn on_row_toggled(&self, handler: RowHandler) {
        (**self).on_row_toggled(handler)
    }

    fn on_row_edited(&self, handler: RowHandler) {
        (**self).on_row_edited(handler)
    }

    fn on_row_delete_requested(&self, handler: RowHandler) {
        (**self).on_row_delete_requested(handler)
    }
}

/// Blocking yes/no question to the user
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
