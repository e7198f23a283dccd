use crate::chart::ForecastChart;
use crate::error::WeatherError;
use crate::geolocation::GeoLocator;
use crate::icons;
use crate::presentation::{self, AppTheme};
use crate::units::UnitSystem;
use crate::view;
use crate::weather::{WeatherClient, WeatherReport};
use iced::{widget::image, Application, Command, Element, Theme};
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub enum Message {
    CityInputChanged(String),
    UnitSelected(UnitSystem),
    FetchWeather,
    WeatherFetched(Result<WeatherReport, WeatherError>),
    ConvertUnits,
    ToggleTheme,
    UseMyLocation,
    LocationDetected(Result<String, WeatherError>),
    ConfirmLocation,
    RejectLocation,
    DismissAlert,
}

/// A dialog waiting to be acknowledged.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<&WeatherError> for Alert {
    fn from(err: &WeatherError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// Startup inputs for the application.
#[derive(Debug, Clone)]
pub struct AppFlags {
    pub weather: WeatherClient,
    pub locator: GeoLocator,
    pub icons_dir: PathBuf,
    pub api_key_path: PathBuf,
}

pub struct WeatherApp {
    pub city_input: String,
    pub units: UnitSystem,
    pub theme: AppTheme,
    pub report: Option<WeatherReport>,
    pub icon: Option<image::Handle>,
    pub alert: Option<Alert>,
    pub pending_location: Option<String>,
    pub credential_notice: Option<String>,
    pub loading: bool,
    weather: WeatherClient,
    locator: GeoLocator,
    icons_dir: PathBuf,
}

impl WeatherApp {
    /// Lines of the readings list for the current state.
    pub fn display_lines(&self) -> Vec<String> {
        self.report
            .as_ref()
            .map(|report| presentation::display_lines(report, self.units))
            .unwrap_or_default()
    }

    pub fn chart(&self) -> ForecastChart {
        let points = self
            .report
            .as_ref()
            .map(|report| report.forecast.clone())
            .unwrap_or_default();
        let symbol = self
            .report
            .as_ref()
            .map_or(self.units, |report| report.units)
            .temperature_symbol();
        ForecastChart::new(points, symbol, self.theme.surface())
    }

    fn show_error(&mut self, err: &WeatherError) {
        error!(title = err.title(), error = %err, "showing error");
        self.alert = Some(Alert::from(err));
    }

    fn fetch_weather(&mut self) -> Command<Message> {
        if self.loading {
            debug!("request already in flight, ignoring");
            return Command::none();
        }

        let city = self.city_input.trim().to_string();
        if city.is_empty() {
            self.show_error(&WeatherError::EmptyInput);
            return Command::none();
        }

        self.loading = true;
        self.alert = None;
        let client = self.weather.clone();
        let units = self.units;
        Command::perform(
            async move { client.fetch(&city, units).await },
            Message::WeatherFetched,
        )
    }
}

impl Application for WeatherApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (WeatherApp, Command<Message>) {
        let credential_notice = if flags.weather.has_api_key() {
            None
        } else {
            Some(format!(
                "No API key loaded from {}. Weather lookups will fail until one is added.",
                flags.api_key_path.display()
            ))
        };

        let app = WeatherApp {
            city_input: String::new(),
            units: UnitSystem::default(),
            theme: AppTheme::default(),
            report: None,
            icon: None,
            alert: None,
            pending_location: None,
            credential_notice,
            loading: false,
            weather: flags.weather,
            locator: flags.locator,
            icons_dir: flags.icons_dir,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Weather Forecast")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CityInputChanged(value) => {
                self.city_input = value;
                Command::none()
            }
            Message::UnitSelected(units) => {
                self.units = units;
                Command::none()
            }
            Message::FetchWeather => self.fetch_weather(),
            Message::WeatherFetched(result) => {
                self.loading = false;
                match result {
                    Ok(report) => {
                        let icon_name = icons::resolve_icon(&report.current.description);
                        self.icon = icons::load_icon(&self.icons_dir, icon_name);
                        self.units = report.units;
                        self.report = Some(report);
                    }
                    Err(err) => {
                        self.report = None;
                        self.icon = None;
                        self.show_error(&err);
                    }
                }
                Command::none()
            }
            Message::ConvertUnits => {
                self.units = self.units.toggled();
                match &self.report {
                    Some(report) => info!(
                        units = %self.units,
                        temperature = presentation::displayed_temperature(report, self.units),
                        "converted displayed temperature"
                    ),
                    None => info!(units = %self.units, "unit system changed"),
                }
                Command::none()
            }
            Message::ToggleTheme => {
                self.theme = self.theme.toggled();
                Command::none()
            }
            Message::UseMyLocation => {
                if self.loading {
                    debug!("request already in flight, ignoring");
                    return Command::none();
                }
                self.loading = true;
                let locator = self.locator.clone();
                Command::perform(
                    async move { locator.locate().await },
                    Message::LocationDetected,
                )
            }
            Message::LocationDetected(result) => {
                self.loading = false;
                match result {
                    Ok(city) => self.pending_location = Some(city),
                    Err(err) => self.show_error(&err),
                }
                Command::none()
            }
            Message::ConfirmLocation => match self.pending_location.take() {
                Some(city) => {
                    self.city_input = city;
                    self.fetch_weather()
                }
                None => Command::none(),
            },
            Message::RejectLocation => {
                if let Some(city) = self.pending_location.take() {
                    info!(%city, "detected location declined");
                }
                Command::none()
            }
            Message::DismissAlert => {
                self.alert = None;
                Command::none()
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}
