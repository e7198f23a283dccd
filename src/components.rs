use crate::app::{Alert, Message, WeatherApp};
use crate::presentation::AppTheme;
use iced::{
    theme,
    widget::{button, column, container, row, scrollable, text, Column, Image, Space},
    Alignment, Border, Color, Element, Length, Theme,
};

pub const ICON_SIZE: f32 = 150.0;

/// Flat panel filled with the theme's surface colour.
struct Panel(AppTheme);

impl container::StyleSheet for Panel {
    type Style = Theme;

    fn appearance(&self, style: &Theme) -> container::Appearance {
        container::Appearance {
            background: Some(self.0.surface().into()),
            text_color: Some(style.palette().text),
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: Color {
                    a: 0.3,
                    ..style.palette().text
                },
            },
            ..container::Appearance::default()
        }
    }
}

pub fn panel_style(app: &WeatherApp) -> theme::Container {
    theme::Container::Custom(Box::new(Panel(app.theme)))
}

pub fn create_alert_card(alert: &Alert) -> Element<Message> {
    let title = text(&alert.title)
        .size(18)
        .style(Color::from_rgb(0.8, 0.2, 0.2));

    let ok_button = button(text("OK").size(14))
        .on_press(Message::DismissAlert)
        .padding([6, 20])
        .style(theme::Button::Primary);

    container(
        column![title, text(&alert.message).size(14), ok_button]
            .spacing(8)
            .align_items(Alignment::Center),
    )
    .padding(16)
    .style(theme::Container::Box)
    .width(Length::Fill)
    .center_x()
    .into()
}

pub fn create_location_prompt(city: &str) -> Element<Message> {
    let question = text(format!(
        "Detected location: {city}. Do you want to use this city for weather data?"
    ))
    .size(14);

    let yes = button(text("Yes").size(14))
        .on_press(Message::ConfirmLocation)
        .padding([6, 20])
        .style(theme::Button::Primary);
    let no = button(text("No").size(14))
        .on_press(Message::RejectLocation)
        .padding([6, 20])
        .style(theme::Button::Secondary);

    container(
        column![
            text("Location Confirmation").size(18),
            question,
            row![yes, no].spacing(10)
        ]
        .spacing(8)
        .align_items(Alignment::Center),
    )
    .padding(16)
    .style(theme::Container::Box)
    .width(Length::Fill)
    .center_x()
    .into()
}

pub fn create_notice(message: &str) -> Element<Message> {
    container(
        text(message)
            .size(12)
            .style(Color::from_rgb(0.8, 0.5, 0.0)),
    )
    .padding([4, 12])
    .width(Length::Fill)
    .center_x()
    .into()
}

pub fn create_icon(app: &WeatherApp) -> Element<Message> {
    match &app.icon {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(ICON_SIZE))
            .height(Length::Fixed(ICON_SIZE))
            .into(),
        None => Space::new(Length::Fixed(ICON_SIZE), Length::Fixed(ICON_SIZE)).into(),
    }
}

/// The list of readings, or a status line when there is nothing to list.
pub fn create_readings_list(app: &WeatherApp) -> Element<Message> {
    let lines = app.display_lines();

    let body: Element<Message> = if lines.is_empty() {
        let status = if app.loading {
            "Loading weather data..."
        } else {
            "Enter a city and press Get Weather."
        };
        text(status).size(14).into()
    } else {
        scrollable(
            Column::with_children(
                lines
                    .into_iter()
                    .map(|line| text(line).size(14).into())
                    .collect::<Vec<Element<Message>>>(),
            )
            .spacing(2)
            .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    };

    container(body)
        .padding(10)
        .width(Length::Fill)
        .height(Length::Fixed(280.0))
        .style(panel_style(app))
        .into()
}
