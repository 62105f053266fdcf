#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::cell::Cell;
use std::rc::Rc;

use iced::advanced::mouse;
use iced::{Element, Subscription, Task, Theme, window};
use otty_chrome::{
    ChromeCommand, ChromeConfig, ChromeLayout, ChromeViewModel, Point, Size,
};

use crate::errors::HostError;
use crate::host::FrameHost;
use crate::settings::FrameSettings;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Chrome(ChromeCommand),
    Window(window::Event),
    CursorMoved(iced::Point),
    FramePressed,
    PlatformState { minimized: bool, maximized: bool },
}

const INITIAL_WINDOW_WIDTH: f64 = 1024.0;
const INITIAL_WINDOW_HEIGHT: f64 = 768.0;

/// Size the window opens with, never below the configured minimum.
pub(crate) fn initial_window_size(config: &ChromeConfig) -> Size {
    Size::new(
        INITIAL_WINDOW_WIDTH.max(config.minimum_width),
        INITIAL_WINDOW_HEIGHT.max(config.minimum_height),
    )
}

/// Root application state.
pub(crate) struct App {
    title: String,
    host: Rc<FrameHost>,
    chrome: ChromeViewModel<FrameHost>,
    layout: ChromeLayout,
    layout_stale: Rc<Cell<bool>>,
    last_caption_click: Option<mouse::Click>,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(settings: FrameSettings) -> (Self, Task<AppEvent>) {
        let host = FrameHost::new(initial_window_size(&settings.chrome));

        let chrome = ChromeViewModel::builder()
            .with_config(settings.chrome)
            .with_system_menu(
                |host: &FrameHost, at: Point| -> Result<(), HostError> {
                    host.request_system_menu(at);
                    Ok(())
                },
            )
            .build_for(Rc::clone(&host));

        let layout_stale = Rc::new(Cell::new(false));
        let stale = Rc::clone(&layout_stale);
        chrome.subscribe_all(move |property| {
            log::debug!("chrome property {property} changed");
            stale.set(true);
        });

        let layout = chrome.layout();
        let app = App {
            title: settings.title,
            host,
            chrome,
            layout,
            layout_stale,
            last_caption_click: None,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.title.clone()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        let task = update::update(self, event);
        self.refresh_layout();
        task
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    fn refresh_layout(&mut self) {
        if self.layout_stale.replace(false) {
            self.layout = self.chrome.layout();
        }
    }
}
