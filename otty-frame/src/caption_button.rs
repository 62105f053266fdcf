use iced::widget::{button, container, svg};
use iced::{Color, Element, Length, Theme, alignment};

const CAPTION_BUTTON_PADDING: f32 = 0.0;

/// Visual variants for a caption button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CaptionButtonVariant {
    Standard,
    Danger,
}

/// Props for rendering a caption button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CaptionButtonProps {
    pub(crate) icon: &'static [u8],
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) icon_size: f32,
    pub(crate) variant: CaptionButtonVariant,
}

/// Render a window control (minimize, maximize, close) in the title row.
pub(crate) fn view<'a, Message>(
    props: CaptionButtonProps,
    on_press: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(|theme: &Theme, _| svg::Style {
            color: Some(theme.extended_palette().background.base.text),
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let variant = props.variant;
    button(icon_container)
        .on_press(on_press)
        .padding(CAPTION_BUTTON_PADDING)
        .width(Length::Fixed(props.width))
        .height(Length::Fixed(props.height))
        .style(move |theme: &Theme, status| {
            let hovered = matches!(
                status,
                button::Status::Hovered | button::Status::Pressed
            );
            button::Style {
                background: hovered
                    .then(|| hover_color(theme, variant).into()),
                ..button::Style::default()
            }
        })
        .into()
}

fn hover_color(theme: &Theme, variant: CaptionButtonVariant) -> Color {
    let palette = theme.extended_palette();
    match variant {
        CaptionButtonVariant::Standard => palette.background.strong.color,
        CaptionButtonVariant::Danger => palette.danger.base.color,
    }
}
