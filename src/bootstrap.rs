//! Hooks behind the `Module` object the native loader reads at startup.

use std::cell::{Cell, RefCell};

use log::{info, warn};

use crate::config::BootstrapConfig;
use crate::surface::Surface;

/// Space-joined text, the way the loader's stderr hook receives multiple arguments.
pub fn join_error_text<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fires once.
#[derive(Debug, Default)]
pub struct InitLatch {
    fired: Cell<bool>,
}

impl InitLatch {
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

#[derive(Debug, Default)]
pub struct RuntimeHooks {
    config: BootstrapConfig,
    latch: InitLatch,
    last_error: RefCell<Option<String>>,
}

impl RuntimeHooks {
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config,
            latch: InitLatch::default(),
            last_error: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Module stdout. Dropped unless echoing is enabled; returns whether it was logged.
    pub fn print(&self, text: &str) -> bool {
        if self.config.echo_print {
            info!("[native] {text}");
        }
        self.config.echo_print
    }

    /// Module stderr. Returns the joined text whether or not it was echoed.
    pub fn print_err<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let text = join_error_text(parts);
        if self.config.echo_errors {
            warn!("[native] {text}");
        }
        self.last_error.replace(Some(text.clone()));
        text
    }

    /// Most recent text passed to [`RuntimeHooks::print_err`].
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    /// Hides the loading indicator the first time the runtime reports ready.
    /// Returns whether this call did anything.
    pub fn runtime_initialized<S: Surface + ?Sized>(&self, surface: &mut S) -> bool {
        if !self.latch.fire() {
            return false;
        }
        info!("native runtime initialized");
        surface.hide_loading();
        true
    }
}
