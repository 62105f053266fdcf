mod app;
mod caption_button;
mod errors;
mod geometry;
mod host;
mod icons;
mod settings;

use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, initial_window_size};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = settings::load_or_default();
    let initial_size = initial_window_size(&settings.chrome);
    let size = Size {
        width: initial_size.width as f32,
        height: initial_size.height as f32,
    };
    let min_size = Size {
        width: settings.chrome.minimum_width as f32,
        height: settings.chrome.minimum_height as f32,
    };

    iced::application(
        move || App::new(settings.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .window(window::Settings {
        decorations: false,
        transparent: true,
        size,
        min_size: Some(min_size),
        ..window::Settings::default()
    })
    .resizable(true)
    .subscription(App::subscription)
    .run()
}
