use serde::{Deserialize, Serialize};

use crate::models::{Mentor, Viewer};
use crate::models::availability::MentorAvailability;

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MentorVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityVariables<'a> {
    pub mentor_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMentorData {
    #[serde(default)]
    pub find_mentor: Option<Mentor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindMentorAvailabilityData {
    #[serde(default)]
    pub find_mentor_availability: Option<MentorAvailability>,
}

#[derive(Debug, Deserialize)]
pub struct MeData {
    #[serde(default)]
    pub me: Option<Viewer>,
}
