use dioxus::prelude::*;

/// Shared open/closed state for the navigation side panel.
///
/// Provided via context by the layout shell so the trigger button and the
/// backdrop can flip it without prop drilling. The panel starts closed.
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarState {
    open: Signal<bool>,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn toggle(mut self) {
        let next = !(self.open)();
        self.open.set(next);
    }

    pub fn close(mut self) {
        self.open.set(false);
    }
}

/// Install the sidebar state into context. Call once, from the layout shell.
pub fn use_sidebar_provider() -> SidebarState {
    let open = use_signal(|| false);
    use_context_provider(|| SidebarState { open })
}

/// Read the sidebar state from context.
pub fn use_sidebar() -> SidebarState {
    use_context()
}
