use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    #[serde(default)]
    pub is_mentor: bool,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self { is_mentor: false }
    }
}
