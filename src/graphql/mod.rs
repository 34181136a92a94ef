pub mod dto;
pub mod queries;

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::AppError;
use crate::models::{Availability, Mentor, Viewer};

#[derive(Debug, Error)]
pub enum GraphqlError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("backend returned errors: {0}")]
    Response(String),

    #[error("failed to parse backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("backend response has no data")]
    MissingData,
}

#[derive(Clone, Debug)]
pub struct GraphqlConfig {
    pub endpoint: String,
}

/// Read-only access to the mentoring platform's GraphQL backend.
#[async_trait]
pub trait MentorClient: Send + Sync {
    async fn fetch_mentor(&self, id: &str) -> Result<Option<Mentor>, GraphqlError>;
    async fn fetch_availability(&self, mentor_id: &str) -> Result<Vec<Availability>, GraphqlError>;
    async fn fetch_viewer(&self, token: &str) -> Result<Viewer, GraphqlError>;
}

pub struct GraphqlHttpClient {
    client: Client,
    config: GraphqlConfig,
}

impl GraphqlHttpClient {
    pub fn new(config: GraphqlConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn execute<V, T>(&self, query: &str, variables: V, token: Option<&str>) -> Result<T, GraphqlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request_body = dto::GraphqlRequest { query, variables };

        let mut request = self.client.post(&self.config.endpoint).json(&request_body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphqlError::Status { status, body });
        }

        let body_text = response.text().await?;
        let parsed: dto::GraphqlResponse<T> = serde_json::from_str(&body_text).map_err(|e| {
            tracing::error!("Failed to parse GraphQL response: {}", e);
            GraphqlError::Decode(e)
        })?;

        if !parsed.errors.is_empty() {
            let messages = parsed
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(GraphqlError::Response(messages));
        }

        parsed.data.ok_or(GraphqlError::MissingData)
    }
}

#[async_trait]
impl MentorClient for GraphqlHttpClient {
    async fn fetch_mentor(&self, id: &str) -> Result<Option<Mentor>, GraphqlError> {
        let data: dto::FindMentorData = self
            .execute(queries::GET_MENTOR, dto::MentorVariables { id }, None)
            .await?;
        Ok(data.find_mentor)
    }

    async fn fetch_availability(&self, mentor_id: &str) -> Result<Vec<Availability>, GraphqlError> {
        let data: dto::FindMentorAvailabilityData = self
            .execute(
                queries::GET_AVAILABILITIES,
                dto::AvailabilityVariables { mentor_id },
                None,
            )
            .await?;
        Ok(data
            .find_mentor_availability
            .map(|found| found.availability)
            .unwrap_or_default())
    }

    async fn fetch_viewer(&self, token: &str) -> Result<Viewer, GraphqlError> {
        let data: dto::MeData = self
            .execute(queries::GET_VIEWER, dto::NoVariables {}, Some(token))
            .await?;
        Ok(data.me.unwrap_or_else(Viewer::anonymous))
    }
}

/// In-memory client keyed by mentor id and viewer token.
#[derive(Default)]
pub struct InMemoryMentorClient {
    mentors: HashMap<String, Mentor>,
    availability: HashMap<String, Vec<Availability>>,
    viewers: HashMap<String, Viewer>,
}

impl InMemoryMentorClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mentor(mut self, id: &str, mentor: Mentor) -> Self {
        self.mentors.insert(id.to_string(), mentor);
        self
    }

    pub fn with_availability(mut self, mentor_id: &str, records: Vec<Availability>) -> Self {
        self.availability.insert(mentor_id.to_string(), records);
        self
    }

    pub fn with_viewer(mut self, token: &str, viewer: Viewer) -> Self {
        self.viewers.insert(token.to_string(), viewer);
        self
    }
}

#[async_trait]
impl MentorClient for InMemoryMentorClient {
    async fn fetch_mentor(&self, id: &str) -> Result<Option<Mentor>, GraphqlError> {
        Ok(self.mentors.get(id).cloned())
    }

    async fn fetch_availability(&self, mentor_id: &str) -> Result<Vec<Availability>, GraphqlError> {
        Ok(self.availability.get(mentor_id).cloned().unwrap_or_default())
    }

    async fn fetch_viewer(&self, token: &str) -> Result<Viewer, GraphqlError> {
        Ok(self.viewers.get(token).copied().unwrap_or_else(Viewer::anonymous))
    }
}
