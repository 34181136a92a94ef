pub mod profile_page;
pub mod schedule;

pub use profile_page::{AvailabilityView, LoadedProfile, ProfilePage, ProfilePageService};
pub use schedule::{WeekSchedule, WeekdayBucket, group_by_weekday};
