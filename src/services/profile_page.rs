use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::graphql::MentorClient;
use crate::models::{Availability, Mentor, Viewer};
use crate::services::schedule::{WeekSchedule, group_by_weekday};

/// What the availability section of the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityView {
    /// The fetch did not finish before the page was rendered.
    Pending,
    /// The mentor has no open slots.
    Empty,
    Populated(WeekSchedule),
    /// The fetch or the grouping failed.
    Unavailable,
}

impl AvailabilityView {
    pub fn from_records(records: &[Availability]) -> Self {
        match group_by_weekday(Some(records)) {
            Ok(schedule) if schedule.is_empty() => AvailabilityView::Empty,
            Ok(schedule) => AvailabilityView::Populated(schedule),
            Err(e) => {
                warn!("Failed to group availability: {}", e);
                AvailabilityView::Unavailable
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub mentor_id: String,
    pub mentor: Mentor,
    pub availability: AvailabilityView,
    pub viewer: Viewer,
}

#[derive(Debug, Clone)]
pub enum ProfilePage {
    /// The profile itself is still on its way.
    Loading,
    Loaded(LoadedProfile),
}

pub struct ProfilePageService {
    client: Arc<dyn MentorClient>,
    fetch_timeout: Duration,
}

impl ProfilePageService {
    pub fn new(client: Arc<dyn MentorClient>, fetch_timeout: Duration) -> Self {
        Self { client, fetch_timeout }
    }

    /// Fetches profile, availability and viewer concurrently.
    ///
    /// Only the profile decides whether a page can be rendered at all; a slow
    /// or failing availability fetch degrades its own section, and a failed
    /// viewer lookup falls back to an anonymous viewer.
    pub async fn load(&self, mentor_id: &str, token: Option<&str>) -> Result<ProfilePage, AppError> {
        debug!("Loading profile page for mentor {}", mentor_id);

        let (mentor, availability, viewer) = tokio::join!(
            timeout(self.fetch_timeout, self.client.fetch_mentor(mentor_id)),
            timeout(self.fetch_timeout, self.client.fetch_availability(mentor_id)),
            self.resolve_viewer(token),
        );

        let mentor = match mentor {
            Err(_) => {
                info!("Profile of mentor {} not ready after {:?}", mentor_id, self.fetch_timeout);
                return Ok(ProfilePage::Loading);
            }
            Ok(result) => result?.ok_or(AppError::NotFound)?,
        };

        let availability = match availability {
            Err(_) => {
                info!("Availability of mentor {} not ready after {:?}", mentor_id, self.fetch_timeout);
                AvailabilityView::Pending
            }
            Ok(Err(e)) => {
                warn!("Failed to fetch availability of mentor {}: {}", mentor_id, e);
                AvailabilityView::Unavailable
            }
            Ok(Ok(records)) => AvailabilityView::from_records(&records),
        };

        Ok(ProfilePage::Loaded(LoadedProfile {
            mentor_id: mentor_id.to_string(),
            mentor,
            availability,
            viewer,
        }))
    }

    async fn resolve_viewer(&self, token: Option<&str>) -> Viewer {
        let Some(token) = token else {
            return Viewer::anonymous();
        };

        match timeout(self.fetch_timeout, self.client.fetch_viewer(token)).await {
            Ok(Ok(viewer)) => viewer,
            Ok(Err(e)) => {
                warn!("Failed to resolve viewer, treating as anonymous: {}", e);
                Viewer::anonymous()
            }
            Err(_) => {
                warn!("Viewer lookup timed out, treating as anonymous");
                Viewer::anonymous()
            }
        }
    }
}
