pub mod age;
pub mod alerts;
pub mod languages;
pub mod strings;
pub mod vaccines;

pub use age::AgeInfo;
pub use alerts::AlertEntry;
pub use languages::Language;
pub use strings::{ui_strings, UiStrings};
pub use vaccines::VaccineEntry;

/// Emergency numbers surfaced as direct-dial links by every frontend.
pub const AMBULANCE_NUMBER: &str = "108";
pub const HEALTH_HELPLINE_NUMBER: &str = "104";
