use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, HtmlInputElement};

use super::dom::{attr, by_class, by_id, DomSurface};
use crate::config::PageConfig;
use crate::controller::{Controller, DemoButton, Slider};
use crate::error::{PageError, Result};
use crate::native::NativeModule;

pub type SharedController<N> = Rc<RefCell<Controller<DomSurface, N>>>;

fn listen(target: &EventTarget, event: &str, f: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(_)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| PageError::Dom(format!("{e:?}")))?;
    // handlers live as long as the page
    closure.forget();
    Ok(())
}

/// Resolve the page's elements, initialise the controller and attach every handler.
pub fn wire<N: NativeModule + 'static>(
    document: &Document,
    config: &PageConfig,
    native: N,
) -> Result<SharedController<N>> {
    let ids = &config.ids;
    let modal: HtmlElement = by_id(document, &ids.modal, "HtmlElement")?;
    let close: HtmlElement = by_id(document, &ids.close, "HtmlElement")?;
    let canvas: HtmlCanvasElement = by_id(document, &ids.canvas, "HtmlCanvasElement")?;
    let loading: HtmlElement = by_id(document, &ids.loading, "HtmlElement")?;
    let restart: HtmlElement = by_id(document, &ids.restart, "HtmlElement")?;

    let button_elements = by_class(document, &ids.demo_button_class);
    let buttons = button_elements
        .iter()
        .map(|b| DemoButton {
            demo: attr(b, &ids.demo_attr),
            width: attr(b, &ids.width_attr),
            height: attr(b, &ids.height_attr),
        })
        .collect();

    let panels = by_class(document, &ids.panel_class);
    let panel_keys = panels.iter().map(|p| attr(p, &ids.demo_attr)).collect();

    let mut inputs = Vec::with_capacity(config.sliders.len());
    let mut labels = Vec::with_capacity(config.sliders.len());
    let mut sliders = Vec::with_capacity(config.sliders.len());
    for spec in &config.sliders {
        inputs.push(by_id::<HtmlInputElement>(document, &spec.input_id, "HtmlInputElement")?);
        labels.push(by_id::<HtmlElement>(document, &spec.label_id, "HtmlElement")?);
        sliders.push(Slider {
            initial: spec.initial,
            format: spec.format,
        });
    }

    let surface = DomSurface {
        modal,
        canvas,
        loading,
        panels,
        inputs: inputs.clone(),
        labels,
    };
    let mut controller = Controller::new(surface, native, buttons, panel_keys, sliders);
    controller.init();
    let controller = Rc::new(RefCell::new(controller));

    for (i, button) in button_elements.iter().enumerate() {
        let controller = controller.clone();
        listen(button, "click", move |_e| {
            let Ok(mut ctl) = controller.try_borrow_mut() else {
                debug!("page controller busy, event dropped");
                return;
            };
            if let Err(e) = ctl.open_demo(i) {
                error!("{e}");
            }
        })?;
    }

    {
        let controller = controller.clone();
        listen(&close, "click", move |_e| {
            let Ok(mut ctl) = controller.try_borrow_mut() else {
                debug!("page controller busy, event dropped");
                return;
            };
            ctl.close();
        })?;
    }

    for (i, input) in inputs.iter().enumerate() {
        let controller = controller.clone();
        let input_for_cb = input.clone();
        listen(input, "input", move |_e| {
            let Ok(mut ctl) = controller.try_borrow_mut() else {
                debug!("page controller busy, event dropped");
                return;
            };
            if let Err(e) = ctl.slider_input(i, &input_for_cb.value()) {
                error!("{e}");
            }
        })?;
    }

    {
        let controller = controller.clone();
        listen(&restart, "click", move |_e| {
            let Ok(ctl) = controller.try_borrow() else {
                debug!("page controller busy, event dropped");
                return;
            };
            if let Err(e) = ctl.restart() {
                error!("{e}");
            }
        })?;
    }

    Ok(controller)
}
