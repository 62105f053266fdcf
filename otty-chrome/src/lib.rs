//! Geometry, state and window commands for custom-drawn window chrome.
//!
//! Frameless windows still need native behavior: edge resizing,
//! maximize/restore, minimize, close and the system menu. This crate keeps
//! the chrome measurements consistent with the window state and exposes
//! the commands that drive the platform window:
//! - [`ChromeViewModel`] derives margins, radii and paddings from a
//!   [`ChromeConfig`] and the [`HostWindow`] state, announcing changes
//!   through [`ChromeProperty`] subscriptions;
//! - [`RelayCommand`]s minimize, toggle maximize, close and open the
//!   [`SystemMenu`] at the pointer;
//! - [`ChromeLayout::hit_test`] maps pointer presses to caption drags and
//!   resize gestures.
//!
//! The crate does not depend on any UI toolkit. Presentation layers
//! implement [`HostWindow`] over their window handle and render from
//! [`ChromeLayout`].

mod command;
mod config;
mod errors;
mod geometry;
mod host;
mod model;
mod property;
mod resize;

pub use crate::command::{ChromeCommand, Command, RelayCommand};
pub use crate::config::ChromeConfig;
pub use crate::errors::ChromeError;
pub use crate::geometry::{
    CornerGeometry, Point, RowHeight, Size, Thickness, to_screen,
};
pub use crate::host::{
    HostWindow, NoSystemMenu, ObserverId, StateObserver, SystemMenu,
    WindowState,
};
pub use crate::model::{ChromeLayout, ChromeViewModel, ChromeViewModelBuilder};
pub use crate::property::{ChromeProperty, PropertyNotifier, SubscriptionId};
pub use crate::resize::{
    HitBands, HitRegion, NoResizeFixup, ResizeDirection, ResizeFixup,
    hit_test,
};
