//! Return navigation to the view that embedded the catalog.

/// Host hook that shows the previous view (for example a skills map).
pub trait ReturnNavigator {
    fn show_previous_view(&mut self);
}

impl<F: FnMut()> ReturnNavigator for F {
    fn show_previous_view(&mut self) {
        self()
    }
}

/// How a back request was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The injected navigator handled it.
    Delegated,
    /// No navigator was injected; the service only closed its own modals.
    Fallback,
}
