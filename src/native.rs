use crate::error::Result;

/// Entry points the native demo engine exposes to the page.
pub trait NativeModule {
    /// Restart the running demo. Any value the engine returns is ignored.
    fn restart_demo(&self) -> Result<()>;
}

impl<N: NativeModule + ?Sized> NativeModule for std::rc::Rc<N> {
    fn restart_demo(&self) -> Result<()> {
        (**self).restart_demo()
    }
}
