use serde::Deserialize;

use super::optional_label_from_scalar;

/// Experience is capped at this many years when displayed.
const EXPERIENCE_CAP: f64 = 30.0;

/// Public profile of a mentor. Every field may be missing upstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mentor {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub photo_url: Option<String>,
    pub biography: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    /// Kept as received so `"2.5"` or `"0"` render unchanged.
    #[serde(deserialize_with = "optional_label_from_scalar")]
    pub years_of_experience: Option<String>,
    pub skills: Option<Vec<String>>,
}

/// Non-blank text, or `None`.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Like [`present`], but also drops the literal `"undefined"` some profiles
/// were saved with.
fn defined(value: &Option<String>) -> Option<&str> {
    present(value).filter(|s| *s != "undefined")
}

impl Mentor {
    pub fn full_name(&self) -> String {
        [present(&self.first_name), present(&self.last_name)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }

    /// `País[/Estado]` line. The state is only shown for Brazil.
    pub fn location(&self) -> Option<String> {
        present(&self.country)?;

        let country = defined(&self.country).unwrap_or("País");
        match defined(&self.state) {
            Some(state) if country == "Brasil" => Some(format!("{}/{}", country, state)),
            _ => Some(country.to_string()),
        }
    }

    pub fn experience(&self) -> Option<String> {
        let label = present(&self.years_of_experience)?;
        let years = label.parse::<f64>().ok().filter(|y| y.is_finite())?;

        let amount = if years < EXPERIENCE_CAP {
            label.to_string()
        } else {
            format!("{}+", EXPERIENCE_CAP)
        };
        let unit = if years > 1.0 { "anos" } else { "ano" };

        Some(format!("{} {} de experiência", amount, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentor_from(json: serde_json::Value) -> Mentor {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let mentor = mentor_from(serde_json::json!({ "firstName": "Ana" }));
        assert_eq!(mentor.first_name.as_deref(), Some("Ana"));
        assert!(mentor.biography.is_none());
        assert!(mentor.years_of_experience.is_none());
        assert!(mentor.skills().is_empty());
    }

    #[test]
    fn years_accept_strings_and_numbers() {
        let from_text = mentor_from(serde_json::json!({ "yearsOfExperience": "12" }));
        let from_number = mentor_from(serde_json::json!({ "yearsOfExperience": 12 }));
        let garbage = mentor_from(serde_json::json!({ "yearsOfExperience": "muitos" }));
        let zero_number = mentor_from(serde_json::json!({ "yearsOfExperience": 0 }));
        let zero_text = mentor_from(serde_json::json!({ "yearsOfExperience": "0" }));
        let fraction = mentor_from(serde_json::json!({ "yearsOfExperience": 2.5 }));
        assert_eq!(from_text.years_of_experience.as_deref(), Some("12"));
        assert_eq!(from_number.years_of_experience.as_deref(), Some("12"));
        assert_eq!(garbage.years_of_experience.as_deref(), Some("muitos"));
        assert_eq!(zero_number.years_of_experience, None);
        assert_eq!(zero_text.years_of_experience.as_deref(), Some("0"));
        assert_eq!(fraction.years_of_experience.as_deref(), Some("2.5"));
    }

    #[test]
    fn full_name_skips_missing_parts() {
        let mentor = mentor_from(serde_json::json!({ "firstName": "Ana", "lastName": "Souza" }));
        assert_eq!(mentor.full_name(), "Ana Souza");

        let only_last = mentor_from(serde_json::json!({ "lastName": "Souza" }));
        assert_eq!(only_last.full_name(), "Souza");
    }

    #[test]
    fn location_appends_state_only_for_brazil() {
        let br = mentor_from(serde_json::json!({ "country": "Brasil", "state": "SP" }));
        assert_eq!(br.location().as_deref(), Some("Brasil/SP"));

        let pt = mentor_from(serde_json::json!({ "country": "Portugal", "state": "Lisboa" }));
        assert_eq!(pt.location().as_deref(), Some("Portugal"));

        let undefined = mentor_from(serde_json::json!({ "country": "undefined" }));
        assert_eq!(undefined.location().as_deref(), Some("País"));

        assert_eq!(Mentor::default().location(), None);
    }

    #[test]
    fn experience_is_capped_and_pluralized() {
        let years = |label: &str| Mentor {
            years_of_experience: Some(label.to_string()),
            ..Default::default()
        };

        assert_eq!(years("1").experience().as_deref(), Some("1 ano de experiência"));
        assert_eq!(years("5").experience().as_deref(), Some("5 anos de experiência"));
        assert_eq!(years("40").experience().as_deref(), Some("30+ anos de experiência"));
        assert_eq!(Mentor::default().experience(), None);
    }

    #[test]
    fn experience_keeps_label_as_received() {
        let zero_text = mentor_from(serde_json::json!({ "yearsOfExperience": "0" }));
        let fraction = mentor_from(serde_json::json!({ "yearsOfExperience": 2.5 }));
        let zero_number = mentor_from(serde_json::json!({ "yearsOfExperience": 0 }));
        let garbage = mentor_from(serde_json::json!({ "yearsOfExperience": "muitos" }));

        assert_eq!(zero_text.experience().as_deref(), Some("0 ano de experiência"));
        assert_eq!(fraction.experience().as_deref(), Some("2.5 anos de experiência"));
        assert_eq!(zero_number.experience(), None);
        assert_eq!(garbage.experience(), None);
    }
}
