use std::rc::Rc;

use js_sys::{Object, Reflect};
use log::{error, info};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlScriptElement};

use super::handlers::SharedController;
use crate::bootstrap::RuntimeHooks;
use crate::error::{PageError, Result};
use crate::native::NativeModule;

fn set(target: &Object, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| PageError::Dom(format!("{e:?}")))
}

fn text_of(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Build the loader configuration object. Its canvas is the controller's canvas.
pub fn module_object<N: NativeModule + 'static>(
    hooks: Rc<RuntimeHooks>,
    controller: SharedController<N>,
) -> Result<Object> {
    let module = Object::new();

    let print = {
        let hooks = hooks.clone();
        Closure::wrap(Box::new(move |text: JsValue| {
            hooks.print(&text_of(&text));
        })
            as Box<dyn Fn(JsValue)>)
    };
    set(&module, "print", print.as_ref())?;
    print.forget();

    // the loader may pass several pieces, missing ones arrive as undefined
    let print_err = {
        let hooks = hooks.clone();
        Closure::wrap(Box::new(move |a: JsValue, b: JsValue, c: JsValue, d: JsValue| {
            let mut args = vec![a, b, c, d];
            while args.last().is_some_and(JsValue::is_undefined) {
                args.pop();
            }
            let parts: Vec<String> = args.iter().map(text_of).collect();
            hooks.print_err(&parts);
        }) as Box<dyn Fn(JsValue, JsValue, JsValue, JsValue)>)
    };
    set(&module, "printErr", print_err.as_ref())?;
    print_err.forget();

    let on_ready = {
        let hooks = hooks.clone();
        let controller = controller.clone();
        Closure::wrap(Box::new(move || {
            let Ok(mut ctl) = controller.try_borrow_mut() else {
                error!("runtime initialized while page controller was busy");
                return;
            };
            hooks.runtime_initialized(ctl.surface_mut());
        }) as Box<dyn FnMut()>)
    };
    set(&module, "onRuntimeInitialized", on_ready.as_ref())?;
    on_ready.forget();

    let canvas = controller
        .try_borrow()
        .map_err(|e| PageError::Dom(e.to_string()))?
        .surface()
        .canvas
        .clone();
    set(&module, "canvas", &JsValue::from(canvas))?;

    Ok(module)
}

/// Publish `Module` on `globalThis` for the native loader.
pub fn install<N: NativeModule + 'static>(
    hooks: Rc<RuntimeHooks>,
    controller: SharedController<N>,
) -> Result<()> {
    let module = module_object(hooks, controller)?;
    set(&js_sys::global(), "Module", &module)?;
    info!("native module bootstrap installed");
    Ok(())
}

/// Append the native loader script. `Module` must already be installed.
pub fn load_script(document: &Document, src: &str) -> Result<()> {
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| PageError::Dom(format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| PageError::WrongElementType {
            id: "script".into(),
            expected: "HtmlScriptElement",
        })?;
    script.set_src(src);
    let body = document.body().ok_or_else(|| PageError::MissingElement("body".into()))?;
    body.append_child(&script)
        .map_err(|e| PageError::Dom(format!("{e:?}")))?;
    info!("loading native module from {src}");
    Ok(())
}
