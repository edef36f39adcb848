pub mod city_header;
pub mod lookup_form;
pub mod report_card;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_header::{CityHeader, CityHeaderProps};
pub use lookup_form::{LookupForm, LookupFormProps};
pub use report_card::{ReportCard, ReportCardProps};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};
