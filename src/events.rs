// Events that flow into the inspector's event loop
//
// Key handling produces the local ones (tab switch, theme toggle, quit);
// the host session task produces the rest. Everything funnels through one
// mpsc channel so the controller is only ever touched from the UI task.

use crate::controller::Tab;
use crate::host::{HostContext, SessionStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum InspectorEvent {
    /// User picked a tab
    SwitchTab(Tab),
    /// User pressed the theme toggle
    ToggleTheme,
    /// Session state changed (connected, standalone, host went away)
    Session(SessionStatus),
    /// Host pushed a context (initial or host-context-changed)
    HostContextChanged(HostContext),
    Quit,
}
