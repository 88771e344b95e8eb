use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::model::{attendance::AttendanceRecord, leave_request::LeaveRecord};

/// Time window a report is restricted to. Every window ends today.
#[derive(
    Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportRange {
    Today,
    /// Monday of the current week through today
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl ReportRange {
    /// Inclusive `(start, end)` bounds, or `None` when the range is unbounded.
    pub fn bounds(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let start = match self {
            ReportRange::Today => today,
            ReportRange::Week => {
                let back = today.weekday().num_days_from_monday();
                today.checked_sub_days(Days::new(back.into()))?
            }
            ReportRange::Month => today.with_day(1)?,
            ReportRange::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
            ReportRange::All => return None,
        };
        Some((start, today))
    }

    /// Whether a record dated `raw` falls inside the range. Undated or
    /// unparseable records only pass the unbounded range.
    pub fn contains(self, today: NaiveDate, raw: Option<&str>) -> bool {
        let Some((start, end)) = self.bounds(today) else {
            return true;
        };
        raw.and_then(parse_record_date)
            .is_some_and(|date| start <= date && date <= end)
    }

    pub fn filter_attendance(
        self,
        records: &[AttendanceRecord],
        today: NaiveDate,
    ) -> Vec<AttendanceRecord> {
        records
            .iter()
            .filter(|r| self.contains(today, r.date.as_deref()))
            .cloned()
            .collect()
    }

    /// Leave requests are placed in time by their start date.
    pub fn filter_leave(self, records: &[LeaveRecord], today: NaiveDate) -> Vec<LeaveRecord> {
        records
            .iter()
            .filter(|r| self.contains(today, r.start_date.as_deref()))
            .cloned()
            .collect()
    }
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and zone-less ISO datetimes.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}
