#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use demo_shell::error::{PageError, Result};
use demo_shell::native::NativeModule;
use demo_shell::surface::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Modal(bool),
    Canvas(Option<String>, Option<String>),
    Panel(usize, bool),
    Value(usize, i32),
    Label(usize, String),
    HideLoading,
}

/// Records every mutation and tracks the resulting page state.
#[derive(Debug, Default)]
pub struct FakePage {
    pub ops: Vec<Op>,
    pub modal: Option<bool>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub panels: Vec<Option<bool>>,
    pub labels: Vec<Option<String>>,
    pub values: Vec<Option<i32>>,
    pub loading_hidden: bool,
    /// Upper bound applied to slider writes, like a range input's `max`.
    pub slider_max: Option<i32>,
}

impl FakePage {
    pub fn new(panels: usize, sliders: usize) -> Self {
        Self {
            panels: vec![None; panels],
            labels: vec![None; sliders],
            values: vec![None; sliders],
            ..Self::default()
        }
    }
}

impl Surface for FakePage {
    fn set_modal_visible(&mut self, visible: bool) {
        self.ops.push(Op::Modal(visible));
        self.modal = Some(visible);
    }

    fn set_canvas_size(&mut self, width: Option<&str>, height: Option<&str>) {
        self.ops
            .push(Op::Canvas(width.map(str::to_owned), height.map(str::to_owned)));
        if let Some(w) = width {
            self.width = Some(w.to_owned());
        }
        if let Some(h) = height {
            self.height = Some(h.to_owned());
        }
    }

    fn set_panel_visible(&mut self, panel: usize, visible: bool) {
        self.ops.push(Op::Panel(panel, visible));
        self.panels[panel] = Some(visible);
    }

    fn set_slider_value(&mut self, slider: usize, value: i32) {
        let held = self.slider_max.map_or(value, |max| value.min(max));
        self.ops.push(Op::Value(slider, held));
        self.values[slider] = Some(held);
    }

    fn slider_value(&self, slider: usize) -> String {
        self.values[slider].map(|v| v.to_string()).unwrap_or_default()
    }

    fn set_label_text(&mut self, slider: usize, text: &str) {
        self.ops.push(Op::Label(slider, text.to_owned()));
        self.labels[slider] = Some(text.to_owned());
    }

    fn hide_loading(&mut self) {
        self.ops.push(Op::HideLoading);
        self.loading_hidden = true;
    }
}

/// Counts restarts; optionally behaves like a missing export.
#[derive(Debug, Default)]
pub struct CountingNative {
    pub calls: Rc<Cell<u32>>,
    pub missing: bool,
}

impl NativeModule for CountingNative {
    fn restart_demo(&self) -> Result<()> {
        if self.missing {
            return Err(PageError::MissingExport("_restart_demo".into()));
        }
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}
