//! Contract between the chrome core and the platform window it decorates.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Window state as reported by the host window.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl WindowState {
    pub fn is_maximized(self) -> bool {
        self == WindowState::Maximized
    }

    /// State the maximize button moves to from `self`.
    ///
    /// A maximized window is restored; any other state becomes maximized.
    /// Restore geometry is left to the platform.
    pub fn toggled_maximized(self) -> WindowState {
        match self {
            WindowState::Maximized => WindowState::Normal,
            WindowState::Normal | WindowState::Minimized => {
                WindowState::Maximized
            },
        }
    }
}

/// Identifier of a state-change observer registered on a host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u64);

/// Callback invoked by the host with its new state.
pub type StateObserver = Rc<dyn Fn(WindowState)>;

/// Platform window decorated by custom chrome.
///
/// Every call happens on the UI thread. Methods take `&self` because
/// platform windows are shared handles; implementations keep their mutable
/// bits behind cells.
pub trait HostWindow {
    /// Failure reported by the platform while mutating the window.
    type Error;

    /// Current window state.
    fn state(&self) -> WindowState;

    /// Request a new window state.
    ///
    /// Observers must be notified once the state actually changes.
    fn set_state(&self, state: WindowState) -> Result<(), Self::Error>;

    /// Top-left corner of the window in screen coordinates.
    fn position(&self) -> Point;

    /// Pointer position relative to the window's client area.
    fn pointer_position(&self) -> Point;

    /// Request the window to close.
    fn close(&self) -> Result<(), Self::Error>;

    /// Register a callback for state transitions.
    fn subscribe_state_changed(&self, observer: StateObserver) -> ObserverId;

    /// Remove a callback registered with
    /// [`HostWindow::subscribe_state_changed`]. Unknown ids are ignored.
    fn unsubscribe_state_changed(&self, id: ObserverId);
}

/// Platform service that shows the native window (system) menu.
pub trait SystemMenu<H: HostWindow> {
    /// Show the menu for `window` at `at`, given in screen coordinates.
    fn show(&self, window: &H, at: Point) -> Result<(), H::Error>;
}

impl<H, F> SystemMenu<H> for F
where
    H: HostWindow,
    F: Fn(&H, Point) -> Result<(), H::Error>,
{
    fn show(&self, window: &H, at: Point) -> Result<(), H::Error> {
        self(window, at)
    }
}

/// Menu service for hosts without a native window menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSystemMenu;

impl<H: HostWindow> SystemMenu<H> for NoSystemMenu {
    fn show(&self, _window: &H, at: Point) -> Result<(), H::Error> {
        log::debug!("system menu requested at {at:?} without a menu service");
        Ok(())
    }
}
