use iced::widget::{Space, column, container, mouse_area, row, text};
use iced::{Element, Length, Shadow, Theme, Vector, alignment};
use otty_chrome::{ChromeCommand, ChromeLayout};

use super::{App, AppEvent};
use crate::caption_button::{self, CaptionButtonProps, CaptionButtonVariant};
use crate::geometry::{padding, radius};
use crate::icons;

const CAPTION_BUTTON_WIDTH: f32 = 46.0;
const CAPTION_ICON_SIZE: f32 = 12.0;
const TITLE_TEXT_SIZE: f32 = 13.0;
const TITLE_SIDE_PADDING: f32 = 12.0;
const SHADOW_ALPHA: f32 = 0.35;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let layout = &app.layout;

    let body = column![title_row(&app.title, layout), content(layout)]
        .width(Length::Fill)
        .height(Length::Fill);

    let shadow_blur = layout.effective_outer_margin as f32;
    let corners = radius(layout.corner_geometry);
    let frame = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: iced::Border {
                    radius: corners,
                    width: 1.0,
                    color: palette.background.strong.color,
                },
                shadow: Shadow {
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, SHADOW_ALPHA),
                    offset: Vector::new(0.0, 0.0),
                    blur_radius: shadow_blur,
                },
                ..Default::default()
            }
        });

    let outer = container(frame)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding(layout.outer_margin_thickness));

    mouse_area(outer)
        .on_move(AppEvent::CursorMoved)
        .on_press(AppEvent::FramePressed)
        .into()
}

fn title_row<'a>(
    title: &'a str,
    layout: &ChromeLayout,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let row_height = layout.title_row_height.value() as f32;
    let button_height = layout.title_bar_height as f32;

    let label = container(text(title).size(TITLE_TEXT_SIZE))
        .padding([0.0, TITLE_SIDE_PADDING])
        .height(Length::Fixed(button_height))
        .align_y(alignment::Vertical::Center);

    // Left presses fall through to the frame area for drags and
    // double-clicks.
    let caption = mouse_area(
        row![label, Space::new().width(Length::Fill)]
            .height(Length::Fixed(button_height)),
    )
    .on_right_press(AppEvent::Chrome(ChromeCommand::ShowSystemMenu));

    let maximize_icon = if layout.is_maximized {
        icons::WINDOW_RESTORE
    } else {
        icons::WINDOW_MAXIMIZE
    };

    let buttons = row![
        control_button(
            icons::WINDOW_MINIMIZE,
            button_height,
            CaptionButtonVariant::Standard,
            ChromeCommand::Minimize,
        ),
        control_button(
            maximize_icon,
            button_height,
            CaptionButtonVariant::Standard,
            ChromeCommand::Maximize,
        ),
        control_button(
            icons::WINDOW_CLOSE,
            button_height,
            CaptionButtonVariant::Danger,
            ChromeCommand::Close,
        ),
    ];

    let top_inset = row_height - button_height;
    container(row![caption, buttons].width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fixed(row_height))
        .padding(iced::Padding {
            top: top_inset.max(0.0),
            ..iced::Padding::ZERO
        })
        .into()
}

fn control_button<'a>(
    icon: &'static [u8],
    height: f32,
    variant: CaptionButtonVariant,
    command: ChromeCommand,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    caption_button::view(
        CaptionButtonProps {
            icon,
            width: CAPTION_BUTTON_WIDTH,
            height,
            icon_size: CAPTION_ICON_SIZE,
            variant,
        },
        AppEvent::Chrome(command),
    )
}

fn content(
    layout: &ChromeLayout,
) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(padding(layout.content_padding))
        .into()
}
