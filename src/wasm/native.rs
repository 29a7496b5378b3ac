use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{PageError, Result};
use crate::native::NativeModule;

/// A function the native module publishes on `globalThis`, looked up on every call.
pub struct GlobalExport {
    name: String,
}

impl GlobalExport {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn resolve(&self) -> Result<Function> {
        Reflect::get(&js_sys::global(), &JsValue::from_str(&self.name))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
            .ok_or_else(|| PageError::MissingExport(self.name.clone()))
    }
}

impl NativeModule for GlobalExport {
    fn restart_demo(&self) -> Result<()> {
        let f = self.resolve()?;
        f.call0(&JsValue::UNDEFINED)
            .map(|_| ())
            .map_err(|e| PageError::NativeCall {
                name: self.name.clone(),
                message: format!("{e:?}"),
            })
    }
}
