use list_sync::InputField;
use web_sys::HtmlInputElement;

use super::{element_by_id, DomResult};

/// The page text field feeding one list
#[derive(Clone)]
pub struct TextInput {
    element: HtmlInputElement,
}

impl TextInput {
    pub fn attach(input_id: &str) -> DomResult<Self> {
        Ok(Self {
            element: element_by_id(input_id)?,
        })
    }
}

impl InputField for TextInput {
    fn value(&self) -> String {
        self.element.value()
    }

    fn clear(&self) {
        self.element.set_value("");
    }
}
