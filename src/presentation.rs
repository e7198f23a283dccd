use crate::units::{round2, temperature_in, UnitSystem};
use crate::weather::WeatherReport;
use chrono::{Local, TimeZone};
use iced::{theme::Palette, Color, Theme};

pub const FORECAST_HEADER: &str = "5-Day Forecast:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTheme {
    #[default]
    Light,
    Dark,
}

impl AppTheme {
    pub fn toggled(self) -> Self {
        match self {
            AppTheme::Light => AppTheme::Dark,
            AppTheme::Dark => AppTheme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            AppTheme::Light => Palette {
                background: Color::from_rgb8(0xe0, 0xf7, 0xfa),
                text: Color::from_rgb8(0x33, 0x33, 0x33),
                primary: Color::from_rgb8(0x4f, 0xc3, 0xf7),
                success: Color::from_rgb8(0x2e, 0x7d, 0x32),
                danger: Color::from_rgb8(0xc6, 0x28, 0x28),
            },
            AppTheme::Dark => Palette {
                background: Color::from_rgb8(0x33, 0x33, 0x33),
                text: Color::from_rgb8(0xff, 0xff, 0xff),
                primary: Color::from_rgb8(0x66, 0x66, 0x66),
                success: Color::from_rgb8(0x66, 0xbb, 0x6a),
                danger: Color::from_rgb8(0xef, 0x53, 0x50),
            },
        }
    }

    /// Background of the readings list and chart panel.
    pub fn surface(self) -> Color {
        match self {
            AppTheme::Light => Color::WHITE,
            AppTheme::Dark => Color::from_rgb8(0x55, 0x55, 0x55),
        }
    }

    pub fn iced_theme(self) -> Theme {
        let name = match self {
            AppTheme::Light => "Weather Light",
            AppTheme::Dark => "Weather Dark",
        };
        Theme::custom(name.to_string(), self.palette())
    }
}

/// Wall-clock time of a unix timestamp in the local zone.
pub fn format_time(timestamp: i64) -> String {
    format_time_in(&Local, timestamp)
}

pub fn format_time_in<Tz: TimeZone>(tz: &Tz, timestamp: i64) -> String
where
    Tz::Offset: std::fmt::Display,
{
    tz.timestamp_opt(timestamp, 0)
        .single()
        .map_or_else(|| "--:--:--".to_string(), |t| t.format("%H:%M:%S").to_string())
}

/// Temperature of the current reading expressed in `units`, rounded for display.
pub fn displayed_temperature(report: &WeatherReport, units: UnitSystem) -> f64 {
    round2(temperature_in(report.current.temperature, report.units, units))
}

/// The readings list: the current snapshot, the forecast header and one line
/// per forecast day. The current temperature follows `units`; everything else
/// stays in the units it was fetched in.
pub fn display_lines(report: &WeatherReport, units: UnitSystem) -> Vec<String> {
    let now = &report.current;
    let visibility = now
        .visibility
        .map_or_else(|| "n/a".to_string(), |v| format!("{v} m"));

    let mut lines = vec![
        format!("City: {}", report.query),
        format!("Description: {}", now.description),
        format!("Temperature: {}°", displayed_temperature(report, units)),
        format!("Pressure: {} hPa", now.pressure),
        format!("Humidity: {}%", now.humidity),
        format!(
            "Wind Speed: {} {}",
            now.wind_speed,
            report.units.wind_speed_unit()
        ),
        format!("Visibility: {visibility}"),
        format!("Cloudiness: {}%", now.cloudiness),
        format!("Sunrise: {}", format_time(now.sunrise)),
        format!("Sunset: {}", format_time(now.sunset)),
        format!(
            "Date & Time: {}",
            report.fetched_at.format("%Y-%m-%d %H:%M:%S")
        ),
        FORECAST_HEADER.to_string(),
    ];

    lines.extend(
        report
            .forecast
            .iter()
            .map(|p| format!("{}: {}°, {}", p.date, p.temperature, p.description)),
    );
    lines
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::weather::{ForecastPoint, WeatherSnapshot};
    use chrono::Utc;

    pub(crate) fn london_report(units: UnitSystem) -> WeatherReport {
        WeatherReport {
            query: "London".to_string(),
            units,
            current: WeatherSnapshot {
                city: "London".to_string(),
                description: "clear sky".to_string(),
                temperature: 15.3,
                pressure: 1012.0,
                humidity: 72.0,
                wind_speed: 4.1,
                visibility: Some(10000.0),
                cloudiness: 0.0,
                sunrise: 1_699_945_200,
                sunset: 1_699_977_600,
            },
            forecast: (0..5)
                .map(|day| ForecastPoint {
                    date: format!("2023-11-{:02}", 14 + day),
                    temperature: 10.0 + day as f64,
                    description: "light rain".to_string(),
                })
                .collect(),
            fetched_at: Local::now(),
        }
    }

    #[test]
    fn renders_snapshot_header_and_forecast() {
        let lines = display_lines(&london_report(UnitSystem::Metric), UnitSystem::Metric);

        assert_eq!(lines.len(), 11 + 1 + 5);
        assert_eq!(lines[0], "City: London");
        assert_eq!(lines[1], "Description: clear sky");
        assert_eq!(lines[2], "Temperature: 15.3°");
        assert_eq!(lines[3], "Pressure: 1012 hPa");
        assert_eq!(lines[4], "Humidity: 72%");
        assert_eq!(lines[5], "Wind Speed: 4.1 m/s");
        assert_eq!(lines[6], "Visibility: 10000 m");
        assert_eq!(lines[7], "Cloudiness: 0%");
        assert!(lines[8].starts_with("Sunrise: "));
        assert!(lines[9].starts_with("Sunset: "));
        assert!(lines[10].starts_with("Date & Time: "));
        assert_eq!(lines[11], FORECAST_HEADER);
        assert_eq!(lines[12], "2023-11-14: 10°, light rain");
        assert_eq!(lines[16], "2023-11-18: 14°, light rain");
    }

    #[test]
    fn only_current_temperature_follows_unit_toggle() {
        let report = london_report(UnitSystem::Metric);
        let lines = display_lines(&report, UnitSystem::Imperial);

        assert_eq!(lines[2], "Temperature: 59.54°");
        assert_eq!(lines[5], "Wind Speed: 4.1 m/s");
        assert_eq!(lines[12], "2023-11-14: 10°, light rain");

        let back = display_lines(&report, UnitSystem::Metric);
        assert_eq!(back[2], "Temperature: 15.3°");
    }

    #[test]
    fn missing_visibility_is_marked() {
        let mut report = london_report(UnitSystem::Imperial);
        report.current.visibility = None;

        let lines = display_lines(&report, UnitSystem::Imperial);
        assert_eq!(lines[6], "Visibility: n/a");
        assert_eq!(lines[5], "Wind Speed: 4.1 mph");
    }

    #[test]
    fn formats_clock_time() {
        assert_eq!(format_time_in(&Utc, 1_699_945_200), "07:00:00");
        assert_eq!(format_time_in(&Utc, 0), "00:00:00");
    }

    #[test]
    fn themes_toggle() {
        assert_eq!(AppTheme::Light.toggled(), AppTheme::Dark);
        assert_eq!(AppTheme::Dark.toggled(), AppTheme::Light);
        assert_eq!(
            AppTheme::Dark.palette().text,
            Color::from_rgb8(0xff, 0xff, 0xff)
        );
    }
}
