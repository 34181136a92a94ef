use std::sync::Arc;

use crate::config::AppConfig;
use crate::graphql::MentorClient;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: Arc<dyn MentorClient>,
}
