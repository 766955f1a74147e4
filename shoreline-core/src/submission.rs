//! Validation of cleanup reports submitted by visitors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{CleanupEvent, Location, LocationId};

/// Lowest accepted cleanliness rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted cleanliness rating.
pub const MAX_RATING: i32 = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Reasons a cleanup report is refused.
pub enum SubmissionError {
    /// The report names a location outside the catalog.
    #[error("Unknown location: {0}")]
    UnknownLocation(LocationId),
    /// The cleanup date is after the submission day.
    #[error("Cleanup date {date} is after {today}")]
    FutureDate {
        /// Reported cleanup date.
        date: NaiveDate,
        /// Day the report was made.
        today: NaiveDate,
    },
    /// Rating outside 1..=10.
    #[error("Rating {0} is outside 1..=10")]
    RatingOutOfRange(i32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A cleanup report as entered by a visitor.
pub struct CleanupSubmission {
    /// Location that was cleaned.
    pub location: LocationId,
    /// Day of the cleanup.
    pub date: NaiveDate,
    /// Cleanliness rating after the cleanup.
    pub rating: i32,
    /// What was collected.
    pub description: Option<String>,
    /// Name to credit, if the contributor wants credit.
    pub contributor_name: Option<String>,
    /// Photo reference.
    pub photo_url: Option<String>,
}

impl CleanupSubmission {
    /// Start a submission with the required fields.
    #[must_use]
    pub fn new<L: Into<LocationId>>(location: L, date: NaiveDate, rating: i32) -> Self {
        Self {
            location: location.into(),
            date,
            rating,
            description: None,
            contributor_name: None,
            photo_url: None,
        }
    }

    /// Check the report against the catalog and turn it into a cleanup event.
    ///
    /// Blank optional fields are dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] when the location is unknown, the date is
    /// after `today`, or the rating is out of range.
    pub fn validate(
        self,
        catalog: &[Location],
        today: NaiveDate,
    ) -> Result<CleanupEvent, SubmissionError> {
        if !catalog.iter().any(|location| location.id == self.location) {
            return Err(SubmissionError::UnknownLocation(self.location));
        }

        if self.date > today {
            return Err(SubmissionError::FutureDate {
                date: self.date,
                today,
            });
        }

        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(SubmissionError::RatingOutOfRange(self.rating));
        }

        Ok(CleanupEvent {
            location: self.location,
            date: Some(self.date),
            rating: Some(self.rating),
            description: non_blank(self.description),
            contributor_name: non_blank(self.contributor_name),
            photo_url: non_blank(self.photo_url),
            created_at: None,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;

    fn catalog() -> Vec<Location> {
        vec![Location {
            id: LocationId::from("Druif beach"),
            coordinates: Coordinates {
                lat: 12.6078,
                lng: -70.0331,
            },
            description: String::new(),
            image: String::new(),
        }]
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn accepts_report_for_today() {
        let mut submission = CleanupSubmission::new("Druif beach", day(2024, 12, 15), 9);
        submission.contributor_name = Some("  Sarah M. ".to_owned());
        submission.description = Some("   ".to_owned());

        let event = submission
            .validate(&catalog(), day(2024, 12, 15))
            .expect("valid submission");

        assert_eq!(event.date, Some(day(2024, 12, 15)));
        assert_eq!(event.rating, Some(9));
        assert_eq!(event.contributor_name.as_deref(), Some("Sarah M."));
        assert_eq!(event.description, None);
    }

    #[test]
    fn rejects_future_dates() {
        let err = CleanupSubmission::new("Druif beach", day(2024, 12, 16), 5)
            .validate(&catalog(), day(2024, 12, 15))
            .unwrap_err();

        assert_eq!(
            err,
            SubmissionError::FutureDate {
                date: day(2024, 12, 16),
                today: day(2024, 12, 15),
            }
        );
    }

    #[test]
    fn rejects_unknown_locations() {
        let err = CleanupSubmission::new("druif beach", day(2024, 12, 1), 5)
            .validate(&catalog(), day(2024, 12, 15))
            .unwrap_err();

        assert_eq!(
            err,
            SubmissionError::UnknownLocation(LocationId::from("druif beach"))
        );
    }

    #[test]
    fn rejects_ratings_outside_scale() {
        for rating in [0, 11, -3] {
            let err = CleanupSubmission::new("Druif beach", day(2024, 12, 1), rating)
                .validate(&catalog(), day(2024, 12, 15))
                .unwrap_err();
            assert_eq!(err, SubmissionError::RatingOutOfRange(rating));
        }
    }
}
