//! DOM List View
//!
//! `<li>` rows appended under the container element: checkbox, label, edit
//! button, delete button. Each row's edit field is created up front and
//! swapped in for the label while editing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use list_sync::{commit_edit, label_decoration, Item, ListView, RowHandler, COMMIT_KEY};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, KeyboardEvent, Node};

use super::{document, element_by_id, DomResult};

type Listener = Closure<dyn FnMut(Event)>;

struct DomRow {
    row: Element,
    checkbox: HtmlInputElement,
    label: HtmlElement,
    listeners: Vec<Listener>,
}

#[derive(Default)]
struct Rows {
    rows: RefCell<Vec<DomRow>>,
    /// Listeners of the last removed row. A removal can be triggered from
    /// one of them, so they are freed on the next removal instead.
    retired: RefCell<Vec<Listener>>,
    toggled: RefCell<Option<RowHandler>>,
    edited: RefCell<Option<RowHandler>>,
    delete_requested: RefCell<Option<RowHandler>>,
}

impl Rows {
    fn position(&self, node: &Node) -> Option<usize> {
        self.rows
            .borrow()
            .iter()
            .position(|row| row.row.is_same_node(Some(node)))
    }

    /// Run the handler in `slot` with the row's current index.
    /// Rows no longer in the list are ignored.
    fn fire(&self, slot: &RefCell<Option<RowHandler>>, node: &Node) {
        let Some(index) = self.position(node) else {
            return;
        };
        let handler = slot.borrow().clone();
        if let Some(handler) = handler {
            handler(index);
        }
    }
}

pub struct DomListView {
    document: Document,
    list: Element,
    rows: Rc<Rows>,
}

impl DomListView {
    /// Bind to the container element with `container_id`
    pub fn attach(container_id: &str) -> DomResult<Self> {
        Ok(Self {
            document: document()?,
            list: element_by_id(container_id)?,
            rows: Rc::new(Rows::default()),
        })
    }

    fn create<T: JsCast>(&self, tag: &str) -> DomResult<T> {
        Ok(self.document.create_element(tag)?.unchecked_into())
    }

    fn build_row(&self, item: &Item) -> DomResult<DomRow> {
        let row: Element = self.create("li")?;

        let checkbox: HtmlInputElement = self.create("input")?;
        checkbox.set_type("checkbox");
        checkbox.set_checked(item.completed);

        let label: HtmlElement = self.create("span")?;
        label.set_text_content(Some(&item.text));
        set_struck(&label, item.completed);

        let edit_button: HtmlElement = self.create("button")?;
        edit_button.set_text_content(Some("✏️"));
        edit_button.set_class_name("edit-btn");

        let delete_button: HtmlElement = self.create("button")?;
        delete_button.set_text_content(Some("×"));
        delete_button.set_class_name("delete-btn");

        let editor: HtmlInputElement = self.create("input")?;
        editor.set_type("text");
        editor.set_class_name("edit-input");

        let node: Node = row.clone().into();
        let rows: Weak<Rows> = Rc::downgrade(&self.rows);
        let mut listeners = Vec::with_capacity(5);

        listeners.push(listen(&checkbox, "change", {
            let (rows, node, checkbox, label) = (rows.clone(), node.clone(), checkbox.clone(), label.clone());
            move |_| {
                set_struck(&label, checkbox.checked());
                if let Some(rows) = rows.upgrade() {
                    rows.fire(&rows.toggled, &node);
                }
            }
        })?);

        listeners.push(listen(&edit_button, "click", {
            let (row, label, editor) = (row.clone(), label.clone(), editor.clone());
            move |_| {
                if editor.parent_node().is_some() {
                    return;
                }
                editor.set_value(&label.text_content().unwrap_or_default());
                if row.replace_child(&editor, &label).is_ok() {
                    let _ = editor.focus();
                }
            }
        })?);

        listeners.push(listen(&editor, "blur", {
            let (rows, node, row, label, editor) =
                (rows.clone(), node.clone(), row.clone(), label.clone(), editor.clone());
            move |_| {
                if editor.parent_node().is_none() {
                    return;
                }
                label.set_text_content(Some(&commit_edit(&editor.value())));
                if let Err(err) = row.replace_child(&label, &editor) {
                    tracing::warn!(error = ?err, "failed to swap label back after edit");
                    return;
                }
                if let Some(rows) = rows.upgrade() {
                    rows.fire(&rows.edited, &node);
                }
            }
        })?);

        listeners.push(listen(&editor, "keydown", {
            let editor = editor.clone();
            move |ev: Event| {
                let commit = ev
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == COMMIT_KEY);
                if commit {
                    let _ = editor.blur();
                }
            }
        })?);

        listeners.push(listen(&delete_button, "click", move |_| {
            if let Some(rows) = rows.upgrade() {
                rows.fire(&rows.delete_requested, &node);
            }
        })?);

        row.append_child(&checkbox)?;
        row.append_child(&label)?;
        row.append_child(&edit_button)?;
        row.append_child(&delete_button)?;

        Ok(DomRow {
            row,
            checkbox,
            label,
            listeners,
        })
    }
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> DomResult<Listener> {
    let listener = Listener::new(handler);
    target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
    Ok(listener)
}

fn set_struck(label: &HtmlElement, struck: bool) {
    let _ = label
        .style()
        .set_property("text-decoration", label_decoration(struck));
}

impl ListView for DomListView {
    fn render_row(&self, item: &Item) {
        let row = match self.build_row(item) {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(error = %err, "failed to build row");
                return;
            }
        };
        if let Err(err) = self.list.append_child(&row.row) {
            tracing::warn!(error = ?err, "failed to attach row");
            return;
        }
        self.rows.rows.borrow_mut().push(row);
    }

    fn remove_row(&self, index: usize) {
        let removed = {
            let mut rows = self.rows.rows.borrow_mut();
            if index >= rows.len() {
                return;
            }
            rows.remove(index)
        };
        // May fire blur on a row mid-edit; no borrows are held here.
        removed.row.remove();

        let mut retired = self.rows.retired.borrow_mut();
        retired.clear();
        retired.extend(removed.listeners);
    }

    fn for_each_row(&self, visit: &mut dyn FnMut(usize, Item)) {
        for (index, row) in self.rows.rows.borrow().iter().enumerate() {
            let text = row.label.text_content().unwrap_or_default();
            visit(index, Item::with_state(text, row.checkbox.checked()));
        }
    }

    fn on_row_toggled(&self, handler: RowHandler) {
        *self.rows.toggled.borrow_mut() = Some(handler);
    }

    fn on_row_edited(&self, handler: RowHandler) {
        *self.rows.edited.borrow_mut() = Some(handler);
    }

    fn on_row_delete_requested(&self, handler: RowHandler) {
        *self.rows.delete_requested.borrow_mut() = Some(handler);
    }
}
