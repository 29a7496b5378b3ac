//! Modal, canvas and slider state for the demo page.
//!
//! The controller owns the page state and talks to the page only through a [`Surface`],
//! so the same logic drives the DOM in the browser and a recording fake in tests.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::{PageError, Result};
use crate::label::LabelFormat;
use crate::native::NativeModule;
use crate::surface::Surface;

/// Data attributes read off a demo button at setup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoButton {
    pub demo: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

/// A labeled slider as the controller sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    pub initial: i32,
    pub format: LabelFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub modal_visible: bool,
    /// 1-based index of the open demo button, 0 when the modal is closed.
    pub current_demo: usize,
}

/// Which panel group is currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shown {
    /// Panels still have whatever visibility the markup gave them.
    Unknown,
    Group(Option<String>),
}

pub struct Controller<S, N> {
    surface: S,
    native: N,
    buttons: Vec<DemoButton>,
    sliders: Vec<Slider>,
    panel_count: usize,
    groups: HashMap<Option<String>, Vec<usize>>,
    shown: Shown,
    state: UiState,
}

impl<S: Surface, N: NativeModule> Controller<S, N> {
    /// `panels` holds the demo key of each slider panel, in page order.
    pub fn new(
        surface: S,
        native: N,
        buttons: Vec<DemoButton>,
        panels: Vec<Option<String>>,
        sliders: Vec<Slider>,
    ) -> Self {
        let mut groups: HashMap<Option<String>, Vec<usize>> = HashMap::new();
        for (i, demo) in panels.iter().enumerate() {
            groups.entry(demo.clone()).or_default().push(i);
        }
        for (i, b) in buttons.iter().enumerate() {
            if b.width.is_none() || b.height.is_none() {
                warn!("demo button {i} has no size attributes, canvas size will not change");
            }
        }
        Self {
            surface,
            native,
            buttons,
            sliders,
            panel_count: panels.len(),
            groups,
            shown: Shown::Unknown,
            state: UiState::default(),
        }
    }

    /// Hide the modal and write every slider's initial value and label.
    ///
    /// The label is rendered from the value the slider holds after the write, which
    /// may have been clamped or snapped by the input's range.
    pub fn init(&mut self) {
        self.surface.set_modal_visible(false);
        self.state = UiState::default();
        for (i, slider) in self.sliders.iter().enumerate() {
            self.surface.set_slider_value(i, slider.initial);
            let held = self.surface.slider_value(i);
            let text = slider.format.render(&held);
            self.surface.set_label_text(i, &text);
        }
    }

    pub fn open_demo(&mut self, index: usize) -> Result<()> {
        let button = self
            .buttons
            .get(index)
            .ok_or(PageError::UnknownButton(index))?;

        self.surface.set_modal_visible(true);
        self.state.modal_visible = true;
        self.state.current_demo = index + 1;
        self.surface
            .set_canvas_size(button.width.as_deref(), button.height.as_deref());

        let next = button.demo.clone();
        match std::mem::replace(&mut self.shown, Shown::Group(next.clone())) {
            Shown::Unknown => {
                let members = self.groups.get(&next);
                for panel in 0..self.panel_count {
                    let visible = members.is_some_and(|m| m.contains(&panel));
                    self.surface.set_panel_visible(panel, visible);
                }
            }
            Shown::Group(prev) => {
                if prev != next {
                    for &panel in self.groups.get(&prev).into_iter().flatten() {
                        self.surface.set_panel_visible(panel, false);
                    }
                }
                for &panel in self.groups.get(&next).into_iter().flatten() {
                    self.surface.set_panel_visible(panel, true);
                }
            }
        }

        debug!("opened demo {} ({:?})", index + 1, next);
        Ok(())
    }

    /// Panels keep their visibility until the next open.
    pub fn close(&mut self) {
        self.surface.set_modal_visible(false);
        self.state.modal_visible = false;
        self.state.current_demo = 0;
        debug!("closed demo modal");
    }

    pub fn slider_input(&mut self, index: usize, raw: &str) -> Result<()> {
        let slider = self
            .sliders
            .get(index)
            .ok_or(PageError::UnknownSlider(index))?;
        let text = slider.format.render(raw);
        self.surface.set_label_text(index, &text);
        Ok(())
    }

    pub fn restart(&self) -> Result<()> {
        debug!("restarting demo");
        self.native.restart_demo()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn native(&self) -> &N {
        &self.native
    }
}
