use crate::app::{Message, WeatherApp};
use crate::components;
use crate::units::UnitSystem;
use iced::{
    theme,
    widget::{button, canvas::Canvas, column, container, pick_list, row, text, text_input, Space},
    Alignment, Element, Length,
};

static UNIT_CHOICES: [UnitSystem; 2] = UnitSystem::ALL;

pub fn view(app: &WeatherApp) -> Element<Message> {
    let mut content = column![].spacing(16).align_items(Alignment::Center);

    if let Some(alert) = &app.alert {
        content = content.push(components::create_alert_card(alert));
    }
    if let Some(city) = &app.pending_location {
        content = content.push(components::create_location_prompt(city));
    }
    if let Some(notice) = &app.credential_notice {
        content = content.push(components::create_notice(notice));
    }

    // Inputs on the left, condition icon in the top-right corner
    let header = row![
        create_input_card(app),
        Space::with_width(Length::Fill),
        components::create_icon(app)
    ]
    .align_items(Alignment::Start)
    .width(Length::Fill);

    let get_weather = button(text("Get Weather").size(16))
        .on_press(Message::FetchWeather)
        .padding([10, 24])
        .style(theme::Button::Primary);

    let content = content
        .push(header)
        .push(get_weather)
        .push(components::create_readings_list(app))
        .push(create_chart_container(app));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
}

fn create_input_card(app: &WeatherApp) -> Element<Message> {
    let city_input = text_input("City", &app.city_input)
        .on_input(Message::CityInputChanged)
        .on_submit(Message::FetchWeather)
        .padding(8)
        .size(14)
        .width(Length::Fixed(200.0));

    let units = pick_list(&UNIT_CHOICES[..], Some(app.units), Message::UnitSelected)
        .text_size(14)
        .width(Length::Fixed(120.0));

    let small_button = |label: &'static str, message: Message| {
        button(text(label).size(12))
            .on_press(message)
            .padding([6, 12])
            .style(theme::Button::Secondary)
    };

    let inputs = row![text("Provide City Name:").size(16), city_input, units]
        .spacing(10)
        .align_items(Alignment::Center);

    let actions = row![
        small_button("Toggle Theme", Message::ToggleTheme),
        small_button("Use My Location", Message::UseMyLocation),
        small_button("Convert Units", Message::ConvertUnits),
    ]
    .spacing(10);

    container(column![inputs, actions].spacing(12))
        .padding(16)
        .style(theme::Container::Box)
        .into()
}

fn create_chart_container(app: &WeatherApp) -> Element<Message> {
    let chart = Canvas::new(app.chart())
        .width(Length::Fill)
        .height(Length::Fixed(320.0));

    container(chart)
        .padding(8)
        .width(Length::Fill)
        .style(components::panel_style(app))
        .into()
}
