use iced::widget::image;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_ICON: &str = "default.png";

const ICONS: &[(&str, &str)] = &[
    ("clear sky", "sunny.png"),
    ("few clouds", "cloudy.png"),
    ("scattered clouds", "cloudy.png"),
    ("broken clouds", "cloudy.png"),
    ("overcast clouds", "cloudy.png"),
    ("shower rain", "rainy.png"),
    ("rain", "rainy.png"),
    ("thunderstorm", "storm.png"),
    ("snow", "snowy.png"),
    ("fog", "mist.png"),
];

/// Icon filename for a provider weather description.
pub fn resolve_icon(description: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(phrase, _)| *phrase == description)
        .map_or(DEFAULT_ICON, |(_, icon)| *icon)
}

/// Image handle for `icons_dir/name`, or `None` when the file is missing.
pub fn load_icon(icons_dir: &Path, name: &str) -> Option<image::Handle> {
    let path = icons_dir.join(name);
    if path.is_file() {
        Some(image::Handle::from_path(path))
    } else {
        warn!("Icon file not found: {}", path.display());
        None
    }
}
