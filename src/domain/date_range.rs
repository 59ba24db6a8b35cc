// src/domain/date_range.rs

use crate::errors::ServerError;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

/// Quick ranges offered by the export widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePreset {
    #[default]
    Last7Days,
    Last30Days,
    ThisMonth,
    ThisYear,
}

impl DatePreset {
    pub const ALL: [DatePreset; 4] = [
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::ThisMonth,
        DatePreset::ThisYear,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DatePreset::Last7Days => "last7",
            DatePreset::Last30Days => "last30",
            DatePreset::ThisMonth => "month",
            DatePreset::ThisYear => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatePreset::Last7Days => "Last 7 days",
            DatePreset::Last30Days => "Last 30 days",
            DatePreset::ThisMonth => "This month",
            DatePreset::ThisYear => "This year",
        }
    }

    pub fn parse(code: Option<&str>) -> Result<Self, ServerError> {
        match code {
            None | Some("") => Ok(DatePreset::default()),
            Some("last7") => Ok(DatePreset::Last7Days),
            Some("last30") => Ok(DatePreset::Last30Days),
            Some("month") => Ok(DatePreset::ThisMonth),
            Some("year") => Ok(DatePreset::ThisYear),
            Some(other) => Err(ServerError::BadRequest(format!("unknown range: {other}"))),
        }
    }

    /// Inclusive range ending today.
    pub fn span(self, today: NaiveDate) -> DateSpan {
        let start = match self {
            DatePreset::Last7Days => today - Duration::days(6),
            DatePreset::Last30Days => today - Duration::days(29),
            DatePreset::ThisMonth => today.with_day(1).unwrap_or(today),
            DatePreset::ThisYear => today.with_ordinal(1).unwrap_or(today),
        };
        DateSpan {
            start: Some(start),
            end: Some(today),
        }
    }
}

/// Date filter choices on a project timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineFilter {
    #[default]
    All,
    Today,
    Yesterday,
    Week,
    Month,
    Custom,
}

impl TimelineFilter {
    pub const ALL: [TimelineFilter; 6] = [
        TimelineFilter::All,
        TimelineFilter::Today,
        TimelineFilter::Yesterday,
        TimelineFilter::Week,
        TimelineFilter::Month,
        TimelineFilter::Custom,
    ];

    pub fn code(self) -> &'static str {
        match self {
            TimelineFilter::All => "all",
            TimelineFilter::Today => "today",
            TimelineFilter::Yesterday => "yesterday",
            TimelineFilter::Week => "week",
            TimelineFilter::Month => "month",
            TimelineFilter::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimelineFilter::All => "All time",
            TimelineFilter::Today => "Today",
            TimelineFilter::Yesterday => "Yesterday",
            TimelineFilter::Week => "This week",
            TimelineFilter::Month => "This month",
            TimelineFilter::Custom => "Custom dates",
        }
    }

    pub fn parse(code: Option<&str>) -> Result<Self, ServerError> {
        let code = code.unwrap_or("all");
        Self::ALL
            .into_iter()
            .find(|f| f.code() == code || (code.is_empty() && *f == TimelineFilter::All))
            .ok_or_else(|| ServerError::BadRequest(format!("unknown date filter: {code}")))
    }

    /// `custom` is the only choice that reads the explicit dates.
    pub fn span(self, today: NaiveDate, custom: DateSpan) -> DateSpan {
        let day = |d: NaiveDate| DateSpan {
            start: Some(d),
            end: Some(d),
        };
        match self {
            TimelineFilter::All => DateSpan::default(),
            TimelineFilter::Today => day(today),
            TimelineFilter::Yesterday => day(today - Duration::days(1)),
            TimelineFilter::Week => DateSpan {
                start: Some(today - Duration::days(today.weekday().num_days_from_monday() as i64)),
                end: Some(today),
            },
            TimelineFilter::Month => DatePreset::ThisMonth.span(today),
            TimelineFilter::Custom => custom,
        }
    }
}

/// Optional start/end dates, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSpan {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateSpan {
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        Ok(Self {
            start: parse_date(params.get("start").map(String::as_str))?,
            end: parse_date(params.get("end").map(String::as_str))?,
        })
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }

    pub fn caption(&self) -> String {
        match (self.start, self.end) {
            (Some(s), Some(e)) => format!("{s} to {e}"),
            (Some(s), None) => format!("after {s}"),
            (None, Some(e)) => format!("before {e}"),
            (None, None) => "All time".to_string(),
        }
    }
}

/// The export widget range: explicit dates win over the preset.
pub fn export_span(
    params: &HashMap<String, String>,
    today: NaiveDate,
) -> Result<(DatePreset, DateSpan), ServerError> {
    let preset = DatePreset::parse(params.get("range").map(String::as_str))?;
    let explicit = DateSpan::from_params(params)?;
    if explicit.is_open() {
        Ok((preset, preset.span(today)))
    } else {
        Ok((preset, explicit))
    }
}

pub fn parse_date(value: Option<&str>) -> Result<Option<NaiveDate>, ServerError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid date: {s}"))),
    }
}
