use iced::advanced::mouse::{self, click};
use iced::{Task, window};
use otty_chrome::{
    ChromeCommand, HitRegion, HostWindow, ResizeDirection,
};

use super::{App, AppEvent};
use crate::geometry::{chrome_point, chrome_size, direction, iced_point};
use crate::host::WindowRequest;

/// What a primary press on the frame turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameGesture {
    Resize(ResizeDirection),
    Drag,
    ToggleMaximize,
    Ignore,
}

/// Route an event into the chrome model and the host window.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Chrome(command) => run_command(app, command),
        AppEvent::Window(event) => handle_window_event(app, event),
        AppEvent::CursorMoved(position) => {
            app.host.set_pointer(chrome_point(position));
            Task::none()
        },
        AppEvent::FramePressed => match frame_gesture(app) {
            FrameGesture::Resize(edge) => {
                let edge = direction(edge);
                window::latest()
                    .and_then(move |id| window::drag_resize(id, edge))
            },
            FrameGesture::Drag => window::latest().and_then(window::drag),
            FrameGesture::ToggleMaximize => {
                run_command(app, ChromeCommand::Maximize)
            },
            FrameGesture::Ignore => Task::none(),
        },
        AppEvent::PlatformState {
            minimized,
            maximized,
        } => {
            app.host.sync_platform(minimized, maximized);
            Task::none()
        },
    }
}

fn run_command(app: &App, command: ChromeCommand) -> Task<AppEvent> {
    if let Err(err) = app.chrome.execute(command) {
        log::warn!("chrome command {command:?} failed: {err}");
    }
    drain_requests(app)
}

fn handle_window_event(app: &App, event: window::Event) -> Task<AppEvent> {
    match event {
        window::Event::Opened { position, size } => {
            if let Some(position) = position {
                app.host.set_position(chrome_point(position));
            }
            app.host.set_size(chrome_size(size));
            Task::none()
        },
        window::Event::Moved(position) => {
            app.host.set_position(chrome_point(position));
            Task::none()
        },
        window::Event::Resized(size) => {
            app.host.set_size(chrome_size(size));
            query_platform_state()
        },
        window::Event::Focused => query_platform_state(),
        _ => Task::none(),
    }
}

/// Ask the platform whether the window is minimized or maximized.
fn query_platform_state() -> Task<AppEvent> {
    window::latest().and_then(|id| {
        window::is_minimized(id).then(move |minimized| {
            window::is_maximized(id).map(move |maximized| {
                AppEvent::PlatformState {
                    minimized: minimized.unwrap_or(false),
                    maximized,
                }
            })
        })
    })
}

fn frame_gesture(app: &mut App) -> FrameGesture {
    let pointer = app.host.pointer_position();
    match app.layout.hit_test(pointer, app.host.size()) {
        HitRegion::Resize(edge) => {
            app.last_caption_click = None;
            FrameGesture::Resize(edge)
        },
        HitRegion::Caption => {
            let press = mouse::Click::new(
                iced_point(pointer),
                mouse::Button::Left,
                app.last_caption_click,
            );
            if press.kind() == click::Kind::Double {
                app.last_caption_click = None;
                FrameGesture::ToggleMaximize
            } else {
                app.last_caption_click = Some(press);
                FrameGesture::Drag
            }
        },
        HitRegion::Client => {
            app.last_caption_click = None;
            FrameGesture::Ignore
        },
    }
}

fn drain_requests(app: &App) -> Task<AppEvent> {
    app.host
        .take_requests()
        .into_iter()
        .map(request_task)
        .fold(Task::none(), Task::chain)
}

fn request_task(request: WindowRequest) -> Task<AppEvent> {
    log::debug!("window request {request:?}");
    match request {
        WindowRequest::Minimize => {
            window::latest().and_then(|id| window::minimize(id, true))
        },
        WindowRequest::Unminimize => {
            window::latest().and_then(|id| window::minimize(id, false))
        },
        WindowRequest::Maximize => {
            window::latest().and_then(|id| window::maximize(id, true))
        },
        WindowRequest::Unmaximize => {
            window::latest().and_then(|id| window::maximize(id, false))
        },
        WindowRequest::Close => window::latest().and_then(window::close),
        WindowRequest::ShowSystemMenu { at } => {
            log::debug!("system menu at ({}, {})", at.x, at.y);
            window::latest().and_then(window::show_system_menu)
        },
    }
}
