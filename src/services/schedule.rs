use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Weekday};
use thiserror::Error;

use crate::models::Availability;

/// Offset-carrying ISO-8601 shapes accepted besides RFC 3339.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%#z",
];

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid start date: {0}")]
    InvalidStartDate(String),
}

/// All slots offered on one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayBucket {
    pub week_day: String,
    pub slots: Vec<String>,
}

/// Availability grouped by weekday number, iterated in ascending weekday order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    buckets: BTreeMap<u8, WeekdayBucket>,
}

impl WeekSchedule {
    pub fn get(&self, week_day: u8) -> Option<&WeekdayBucket> {
        self.buckets.get(&week_day)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &WeekdayBucket)> {
        self.buckets.iter().map(|(day, bucket)| (*day, bucket))
    }
}

/// Buckets availability records by weekday number.
///
/// The bucket label comes from formatting the first record's start date in
/// Brazilian Portuguese, not from the weekday number. Slots keep the order of
/// the source list. `None` and an empty list both produce an empty schedule.
pub fn group_by_weekday(records: Option<&[Availability]>) -> Result<WeekSchedule, ScheduleError> {
    let mut schedule = WeekSchedule::default();

    for availability in records.unwrap_or_default() {
        if !schedule.buckets.contains_key(&availability.week_day) {
            let week_day = weekday_name(&availability.start_date)?;
            schedule.buckets.insert(
                availability.week_day,
                WeekdayBucket { week_day, slots: Vec::new() },
            );
        }

        if let Some(bucket) = schedule.buckets.get_mut(&availability.week_day) {
            bucket.slots.push(availability.start_hour.clone());
        }
    }

    Ok(schedule)
}

/// Full Brazilian Portuguese weekday name of an ISO-8601 date or date-time.
pub fn weekday_name(start_date: &str) -> Result<String, ScheduleError> {
    let date = parse_start_date(start_date)?;
    Ok(pt_br_weekday(date.weekday()).to_string())
}

fn pt_br_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "domingo",
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
    }
}

fn parse_start_date(value: &str) -> Result<DateTime<FixedOffset>, ScheduleError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }

    // A trailing `Z` is only understood by the RFC 3339 parser above.
    let zoned = match value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        Some(rest) => format!("{}+00:00", rest),
        None => value.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, format) {
            return Ok(dt);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc().fixed_offset());
    }

    Err(ScheduleError::InvalidStartDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(week_day: u8, start_date: &str, start_hour: &str) -> Availability {
        Availability {
            week_day,
            start_date: start_date.to_string(),
            start_hour: start_hour.to_string(),
        }
    }

    #[test]
    fn groups_example_week() {
        let records = vec![
            slot(1, "2024-01-08T00:00:00Z", "10"),
            slot(1, "2024-01-08T00:00:00Z", "14"),
            slot(3, "2024-01-10T00:00:00Z", "09"),
        ];

        let schedule = group_by_weekday(Some(records.as_slice())).unwrap();

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.get(1).unwrap().slots, vec!["10", "14"]);
        assert_eq!(schedule.get(3).unwrap().slots, vec!["09"]);
        assert_eq!(schedule.get(1).unwrap().week_day, "segunda-feira");
        assert_eq!(schedule.get(3).unwrap().week_day, "quarta-feira");
    }

    #[test]
    fn absent_and_empty_yield_no_buckets() {
        assert!(group_by_weekday(None).unwrap().is_empty());
        assert!(group_by_weekday(Some(&[][..])).unwrap().is_empty());
    }

    #[test]
    fn slots_keep_source_order() {
        let records = vec![
            slot(5, "2024-01-12T00:00:00Z", "18"),
            slot(2, "2024-01-09T00:00:00Z", "08"),
            slot(5, "2024-01-12T00:00:00Z", "07"),
            slot(5, "2024-01-12T00:00:00Z", "12"),
        ];

        let schedule = group_by_weekday(Some(records.as_slice())).unwrap();

        assert_eq!(schedule.get(5).unwrap().slots, vec!["18", "07", "12"]);
        let days: Vec<u8> = schedule.iter().map(|(day, _)| day).collect();
        assert_eq!(days, vec![2, 5]);
    }

    #[test]
    fn label_comes_from_first_record_date() {
        let records = vec![
            slot(0, "2024-01-07T00:00:00Z", "10"),
            slot(0, "2024-01-08T00:00:00Z", "11"),
        ];

        let schedule = group_by_weekday(Some(records.as_slice())).unwrap();

        assert_eq!(schedule.get(0).unwrap().week_day, "domingo");
    }

    #[test]
    fn offset_is_respected() {
        // Monday 01:00 in UTC, Sunday evening at the given offset.
        assert_eq!(weekday_name("2024-01-07T22:00:00-03:00").unwrap(), "domingo");
    }

    #[test]
    fn full_names_for_every_weekday() {
        let names: Vec<String> = (7..=13)
            .map(|day| weekday_name(&format!("2024-01-{:02}", day)).unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "domingo",
                "segunda-feira",
                "terça-feira",
                "quarta-feira",
                "quinta-feira",
                "sexta-feira",
                "sábado",
            ]
        );
    }

    #[test]
    fn accepts_date_only_values() {
        assert_eq!(weekday_name("2024-01-13").unwrap(), "sábado");
        assert_eq!(weekday_name("2024-01-09T10:30:00").unwrap(), "terça-feira");
    }

    #[test]
    fn accepts_time_without_seconds() {
        assert_eq!(weekday_name("2024-01-08T10:00").unwrap(), "segunda-feira");
        assert_eq!(weekday_name("2024-01-08T10:00Z").unwrap(), "segunda-feira");
        assert_eq!(weekday_name("2024-01-08T10:00+03:00").unwrap(), "segunda-feira");
    }

    #[test]
    fn accepts_compact_offsets() {
        assert_eq!(weekday_name("2024-01-08T10:00:00.000+0000").unwrap(), "segunda-feira");
        assert_eq!(weekday_name("2024-01-08T10:00:00+03").unwrap(), "segunda-feira");
        assert_eq!(weekday_name("2024-01-07T23:30:00-0300").unwrap(), "domingo");
    }

    #[test]
    fn mixed_formats_still_group() {
        let records = vec![
            slot(1, "2024-01-08T10:00", "10"),
            slot(1, "2024-01-08T10:00:00.000+0000", "14"),
            slot(2, "2024-01-09T10:00:00+03", "09"),
        ];

        let schedule = group_by_weekday(Some(records.as_slice())).unwrap();

        assert_eq!(schedule.get(1).unwrap().slots, vec!["10", "14"]);
        assert_eq!(schedule.get(2).unwrap().week_day, "terça-feira");
    }

    #[test]
    fn malformed_date_is_an_error() {
        let records = vec![slot(1, "next monday", "10")];
        assert_eq!(
            group_by_weekday(Some(records.as_slice())),
            Err(ScheduleError::InvalidStartDate("next monday".to_string()))
        );
    }
}
