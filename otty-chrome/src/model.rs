use std::rc::{Rc, Weak};

use crate::command::{ChromeCommand, Command, RelayCommand};
use crate::config::ChromeConfig;
use crate::errors::ChromeError;
use crate::geometry::{
    CornerGeometry, Point, RowHeight, Size, Thickness, to_screen,
};
use crate::host::{
    HostWindow, NoSystemMenu, ObserverId, SystemMenu, WindowState,
};
use crate::property::{ChromeProperty, PropertyNotifier, SubscriptionId};
use crate::resize::{
    HitBands, HitRegion, NoResizeFixup, ResizeFixup, hit_test,
};

/// Snapshot of every chrome measurement for one window state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeLayout {
    pub outer_margin_size: i32,
    pub corner_radius: i32,
    pub minimum_width: f64,
    pub minimum_height: f64,
    pub resize_border_width: i32,
    pub title_bar_height: i32,
    pub effective_outer_margin: i32,
    pub outer_margin_thickness: Thickness,
    pub effective_corner_radius: i32,
    pub corner_geometry: CornerGeometry,
    pub content_padding: Thickness,
    pub resize_border_padding: Thickness,
    pub title_row_height: RowHeight,
    pub is_maximized: bool,
}

impl ChromeLayout {
    /// Derive the layout of a window in `state` from base values.
    pub fn compute(config: &ChromeConfig, state: WindowState) -> Self {
        let effective_outer_margin = effective_outer_margin(config, state);
        let effective_corner_radius = effective_corner_radius(config, state);

        Self {
            outer_margin_size: config.outer_margin_size,
            corner_radius: config.corner_radius,
            minimum_width: config.minimum_width,
            minimum_height: config.minimum_height,
            resize_border_width: config.resize_border_width,
            title_bar_height: config.title_bar_height,
            effective_outer_margin,
            outer_margin_thickness: Thickness::uniform(effective_outer_margin),
            effective_corner_radius,
            corner_geometry: CornerGeometry::uniform(effective_corner_radius),
            content_padding: Thickness::uniform(config.resize_border_width),
            resize_border_padding: Thickness::uniform(
                config.resize_border_width + effective_outer_margin,
            ),
            title_row_height: RowHeight(
                config.title_bar_height + config.resize_border_width,
            ),
            is_maximized: state.is_maximized(),
        }
    }

    /// Properties whose value differs between `self` and `other`.
    pub fn changed_properties(
        &self,
        other: &ChromeLayout,
    ) -> Vec<ChromeProperty> {
        ChromeProperty::ALL
            .into_iter()
            .filter(|property| !self.same_value(other, *property))
            .collect()
    }

    /// Classify a window-relative pointer position against this layout.
    ///
    /// The resize band covers the drop-shadow margin plus the resize
    /// border and disappears while maximized; the caption ends at the
    /// bottom of the title row.
    pub fn hit_test(&self, pointer: Point, window: Size) -> HitRegion {
        let resize = if self.is_maximized {
            0.0
        } else {
            f64::from(self.resize_border_padding.top)
        };
        let caption_bottom = f64::from(
            self.effective_outer_margin + self.title_row_height.value(),
        );

        hit_test(
            pointer,
            window,
            HitBands {
                resize,
                caption_bottom,
            },
        )
    }

    fn same_value(
        &self,
        other: &ChromeLayout,
        property: ChromeProperty,
    ) -> bool {
        match property {
            ChromeProperty::OuterMarginSize => {
                self.outer_margin_size == other.outer_margin_size
            },
            ChromeProperty::CornerRadius => {
                self.corner_radius == other.corner_radius
            },
            ChromeProperty::MinimumWidth => {
                self.minimum_width == other.minimum_width
            },
            ChromeProperty::MinimumHeight => {
                self.minimum_height == other.minimum_height
            },
            ChromeProperty::ResizeBorderWidth => {
                self.resize_border_width == other.resize_border_width
            },
            ChromeProperty::TitleBarHeight => {
                self.title_bar_height == other.title_bar_height
            },
            ChromeProperty::EffectiveOuterMargin => {
                self.effective_outer_margin == other.effective_outer_margin
            },
            ChromeProperty::OuterMarginThickness => {
                self.outer_margin_thickness == other.outer_margin_thickness
            },
            ChromeProperty::EffectiveCornerRadius => {
                self.effective_corner_radius == other.effective_corner_radius
            },
            ChromeProperty::CornerGeometry => {
                self.corner_geometry == other.corner_geometry
            },
            ChromeProperty::ContentPadding => {
                self.content_padding == other.content_padding
            },
            ChromeProperty::ResizeBorderPadding => {
                self.resize_border_padding == other.resize_border_padding
            },
            ChromeProperty::TitleRowHeight => {
                self.title_row_height == other.title_row_height
            },
        }
    }
}

fn effective_outer_margin(config: &ChromeConfig, state: WindowState) -> i32 {
    if state.is_maximized() {
        0
    } else {
        config.outer_margin_size
    }
}

fn effective_corner_radius(config: &ChromeConfig, state: WindowState) -> i32 {
    if state.is_maximized() {
        0
    } else {
        config.corner_radius
    }
}

/// Geometry, state and commands of one custom-chrome window.
///
/// The view model shares the host window handle, reads the window state on
/// every query and announces state-dependent properties whenever the host
/// reports a transition. It lives as long as its window; dropping it
/// removes the state observer it registered.
pub struct ChromeViewModel<H: HostWindow + 'static> {
    host: Rc<H>,
    config: ChromeConfig,
    notifier: Rc<PropertyNotifier>,
    observer: Option<ObserverId>,
    minimize: RelayCommand<H::Error>,
    maximize: RelayCommand<H::Error>,
    close: RelayCommand<H::Error>,
    show_system_menu: RelayCommand<H::Error>,
}

impl<H: HostWindow + 'static> ChromeViewModel<H> {
    /// Chrome with default base values and no platform extras.
    pub fn new(host: Rc<H>) -> Self {
        Self::assemble(
            host,
            ChromeConfig::default(),
            Rc::new(NoSystemMenu),
            &NoResizeFixup,
        )
    }

    pub fn builder() -> ChromeViewModelBuilder<H> {
        ChromeViewModelBuilder::default()
    }

    fn assemble(
        host: Rc<H>,
        config: ChromeConfig,
        menu: Rc<dyn SystemMenu<H>>,
        fixup: &dyn ResizeFixup<H>,
    ) -> Self {
        let notifier = Rc::new(PropertyNotifier::new());

        let weak_notifier = Rc::downgrade(&notifier);
        let observer = host.subscribe_state_changed(Rc::new(move |state| {
            Self::handle_state_changed(&weak_notifier, state);
        }));

        let minimize = {
            let host = Rc::clone(&host);
            RelayCommand::new(move || {
                log::debug!("chrome command: minimize");
                host.set_state(WindowState::Minimized)
            })
        };
        let maximize = {
            let host = Rc::clone(&host);
            RelayCommand::new(move || {
                let next = host.state().toggled_maximized();
                log::debug!("chrome command: maximize toggle to {next:?}");
                host.set_state(next)
            })
        };
        let close = {
            let host = Rc::clone(&host);
            RelayCommand::new(move || {
                log::debug!("chrome command: close");
                host.close()
            })
        };
        let show_system_menu = {
            let host = Rc::clone(&host);
            RelayCommand::new(move || {
                let at = to_screen(host.position(), host.pointer_position());
                log::debug!("chrome command: system menu at {at:?}");
                menu.show(&host, at)
            })
        };

        fixup.apply(&host);

        Self {
            host,
            config,
            notifier,
            observer: Some(observer),
            minimize,
            maximize,
            close,
            show_system_menu,
        }
    }

    /// Registered with the host at construction.
    fn handle_state_changed(
        notifier: &Weak<PropertyNotifier>,
        state: WindowState,
    ) {
        let Some(notifier) = notifier.upgrade() else {
            return;
        };
        log::debug!("host window state changed to {state:?}");
        notifier.notify_each(ChromeProperty::STATE_DEPENDENT);
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn config(&self) -> ChromeConfig {
        self.config
    }

    /// Replace all base values and announce every property that changed.
    pub fn configure(&mut self, config: ChromeConfig) {
        let before = self.layout();
        self.config = config;
        let after = self.layout();

        let changed = before.changed_properties(&after);
        if !changed.is_empty() {
            log::debug!(
                "chrome reconfigured, {} property(ies) changed",
                changed.len()
            );
        }
        self.notifier.notify_each(changed);
    }

    pub fn set_outer_margin_size(&mut self, value: i32) {
        self.configure(self.config.with_outer_margin_size(value));
    }

    pub fn set_corner_radius(&mut self, value: i32) {
        self.configure(self.config.with_corner_radius(value));
    }

    pub fn set_resize_border_width(&mut self, value: i32) {
        self.configure(self.config.with_resize_border_width(value));
    }

    pub fn set_title_bar_height(&mut self, value: i32) {
        self.configure(self.config.with_title_bar_height(value));
    }

    pub fn set_minimum_size(&mut self, width: f64, height: f64) {
        self.configure(self.config.with_minimum_size(width, height));
    }

    pub fn outer_margin_size(&self) -> i32 {
        self.config.outer_margin_size
    }

    pub fn corner_radius(&self) -> i32 {
        self.config.corner_radius
    }

    pub fn minimum_width(&self) -> f64 {
        self.config.minimum_width
    }

    pub fn minimum_height(&self) -> f64 {
        self.config.minimum_height
    }

    pub fn resize_border_width(&self) -> i32 {
        self.config.resize_border_width
    }

    pub fn title_bar_height(&self) -> i32 {
        self.config.title_bar_height
    }

    /// Drop-shadow margin, zero while the window is maximized.
    pub fn effective_outer_margin(&self) -> i32 {
        effective_outer_margin(&self.config, self.host.state())
    }

    /// Corner rounding, zero while the window is maximized.
    pub fn effective_corner_radius(&self) -> i32 {
        effective_corner_radius(&self.config, self.host.state())
    }

    pub fn outer_margin_thickness(&self) -> Thickness {
        Thickness::uniform(self.effective_outer_margin())
    }

    pub fn corner_geometry(&self) -> CornerGeometry {
        CornerGeometry::uniform(self.effective_corner_radius())
    }

    /// Inset of the window content; independent of the window state.
    pub fn content_padding(&self) -> Thickness {
        Thickness::uniform(self.config.resize_border_width)
    }

    pub fn resize_border_padding(&self) -> Thickness {
        Thickness::uniform(
            self.config.resize_border_width + self.effective_outer_margin(),
        )
    }

    pub fn title_row_height(&self) -> RowHeight {
        RowHeight(
            self.config.title_bar_height + self.config.resize_border_width,
        )
    }

    pub fn layout(&self) -> ChromeLayout {
        ChromeLayout::compute(&self.config, self.host.state())
    }

    /// Announce every state-dependent property.
    ///
    /// The host observer does this on its own; presentation layers call it
    /// when they learn about a transition some other way.
    pub fn on_host_state_changed(&self) {
        log::debug!("host window state refreshed as {:?}", self.host.state());
        self.notifier.notify_each(ChromeProperty::STATE_DEPENDENT);
    }

    pub fn subscribe<F>(
        &self,
        property: ChromeProperty,
        callback: F,
    ) -> SubscriptionId
    where
        F: Fn(ChromeProperty) + 'static,
    {
        self.notifier.subscribe(property, callback)
    }

    pub fn subscribe_all<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ChromeProperty) + 'static,
    {
        self.notifier.subscribe_all(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn minimize_command(&self) -> &RelayCommand<H::Error> {
        &self.minimize
    }

    pub fn maximize_command(&self) -> &RelayCommand<H::Error> {
        &self.maximize
    }

    pub fn close_command(&self) -> &RelayCommand<H::Error> {
        &self.close
    }

    pub fn show_system_menu_command(&self) -> &RelayCommand<H::Error> {
        &self.show_system_menu
    }

    pub fn command(&self, command: ChromeCommand) -> &RelayCommand<H::Error> {
        match command {
            ChromeCommand::Minimize => &self.minimize,
            ChromeCommand::Maximize => &self.maximize,
            ChromeCommand::Close => &self.close,
            ChromeCommand::ShowSystemMenu => &self.show_system_menu,
        }
    }

    /// Run `command` against the host. Host failures come back untouched.
    pub fn execute(&self, command: ChromeCommand) -> Result<(), H::Error> {
        self.command(command).execute()
    }

    pub fn is_attached(&self) -> bool {
        self.observer.is_some()
    }

    /// Stop listening to host state transitions.
    pub fn detach(&mut self) {
        if let Some(id) = self.observer.take() {
            self.host.unsubscribe_state_changed(id);
        }
    }
}

impl<H: HostWindow + 'static> Drop for ChromeViewModel<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Builder for [`ChromeViewModel`].
pub struct ChromeViewModelBuilder<H: HostWindow + 'static> {
    host: Option<Rc<H>>,
    config: ChromeConfig,
    menu: Rc<dyn SystemMenu<H>>,
    fixup: Box<dyn ResizeFixup<H>>,
}

impl<H: HostWindow + 'static> Default for ChromeViewModelBuilder<H> {
    fn default() -> Self {
        Self {
            host: None,
            config: ChromeConfig::default(),
            menu: Rc::new(NoSystemMenu),
            fixup: Box::new(NoResizeFixup),
        }
    }
}

impl<H: HostWindow + 'static> ChromeViewModelBuilder<H> {
    pub fn with_host(mut self, host: Rc<H>) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_config(mut self, config: ChromeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_system_menu<M>(mut self, menu: M) -> Self
    where
        M: SystemMenu<H> + 'static,
    {
        self.menu = Rc::new(menu);
        self
    }

    pub fn with_resize_fixup<F>(mut self, fixup: F) -> Self
    where
        F: ResizeFixup<H> + 'static,
    {
        self.fixup = Box::new(fixup);
        self
    }

    /// Build the view model, registering it with the host window.
    ///
    /// Fails with [`ChromeError::MissingHost`] when no host was given.
    pub fn build(mut self) -> Result<ChromeViewModel<H>, ChromeError> {
        let host = self.host.take().ok_or(ChromeError::MissingHost)?;
        Ok(self.build_for(host))
    }

    /// Build the view model for `host`, ignoring any host set earlier.
    pub fn build_for(self, host: Rc<H>) -> ChromeViewModel<H> {
        ChromeViewModel::assemble(
            host,
            self.config,
            self.menu,
            self.fixup.as_ref(),
        )
    }
}
