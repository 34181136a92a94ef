pub mod availability;
pub mod mentor;
pub mod viewer;

pub use availability::Availability;
pub use mentor::Mentor;
pub use viewer::Viewer;

use serde::{Deserialize, Deserializer};

/// Scalar that the backend sends either as a JSON string or a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    fn into_label(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }
    }
}

pub(crate) fn label_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_label)
}

/// Keeps the value as sent. A numeric zero counts as absent; the text `"0"`
/// does not.
pub(crate) fn optional_label_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.and_then(|scalar| match scalar {
        Scalar::Text(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Scalar::Integer(0) => None,
        Scalar::Float(n) if n == 0.0 => None,
        other => Some(other.into_label()),
    }))
}
