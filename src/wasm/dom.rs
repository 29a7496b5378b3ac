use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlInputElement};

use crate::error::{PageError, Result};
use crate::surface::Surface;

pub fn by_id<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PageError::MissingElement(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| PageError::WrongElementType {
            id: id.to_owned(),
            expected,
        })
}

/// Snapshot of the elements carrying `class`, in document order.
pub fn by_class(document: &Document, class: &str) -> Vec<HtmlElement> {
    let collection = document.get_elements_by_class_name(class);
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        warn!("could not set {property}: {value}: {e:?}");
    }
}

fn display(visible: bool) -> &'static str {
    if visible {
        "inline"
    } else {
        "none"
    }
}

/// The demo page's elements, driven by the controller.
pub struct DomSurface {
    pub modal: HtmlElement,
    pub canvas: HtmlCanvasElement,
    pub loading: HtmlElement,
    pub panels: Vec<HtmlElement>,
    pub inputs: Vec<HtmlInputElement>,
    pub labels: Vec<HtmlElement>,
}

impl Surface for DomSurface {
    fn set_modal_visible(&mut self, visible: bool) {
        set_style(&self.modal, "display", display(visible));
    }

    fn set_canvas_size(&mut self, width: Option<&str>, height: Option<&str>) {
        if let Some(w) = width {
            set_style(&self.canvas, "width", w);
        }
        if let Some(h) = height {
            set_style(&self.canvas, "height", h);
        }
    }

    fn set_panel_visible(&mut self, panel: usize, visible: bool) {
        if let Some(p) = self.panels.get(panel) {
            set_style(p, "display", display(visible));
        }
    }

    fn set_slider_value(&mut self, slider: usize, value: i32) {
        if let Some(input) = self.inputs.get(slider) {
            input.set_value(&value.to_string());
        }
    }

    fn slider_value(&self, slider: usize) -> String {
        self.inputs
            .get(slider)
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_label_text(&mut self, slider: usize, text: &str) {
        if let Some(label) = self.labels.get(slider) {
            label.set_inner_html(text);
        }
    }

    fn hide_loading(&mut self) {
        set_style(&self.loading, "visibility", "hidden");
        set_style(&self.loading, "height", "0px");
    }
}
