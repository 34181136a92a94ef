use serde::Deserialize;

use super::label_from_scalar;

/// One offered weekly time slot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub week_day: u8,
    pub start_date: String,
    #[serde(deserialize_with = "label_from_scalar")]
    pub start_hour: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentorAvailability {
    #[serde(default)]
    pub availability: Vec<Availability>,
}
