//! Validated query parameters.
//!
//! Callers build these at the boundary (CLI flags, HTTP query strings) so the filter
//! and aggregation functions never see an inverted range or an unknown field name.

use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

use super::domain::EmployeeRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("minimum experience {min} exceeds maximum experience {max}")]
    InvalidExperienceRange { min: u32, max: u32 },
    #[error("unknown group field '{0}' (expected department, gender or status)")]
    UnknownGroupField(String),
    #[error(
        "unknown metric '{0}' (expected salary, years_experience, performance_rating or leaves_taken)"
    )]
    UnknownMetric(String),
    #[error("unknown sort order '{0}' (expected asc or desc)")]
    UnknownSortOrder(String),
    #[error("unknown department '{0}'")]
    UnknownDepartment(String),
    #[error("unknown gender '{0}'")]
    UnknownGender(String),
    #[error("unknown employment status '{0}'")]
    UnknownStatus(String),
    #[error("unknown salary analysis option '{0}' (expected general, department, experience or gender)")]
    UnknownSalaryOption(String),
    #[error("gender salary analysis requires a gender selection")]
    MissingGender,
}

/// Inclusive calendar range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, QueryError> {
        if start > end {
            return Err(QueryError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering both dates regardless of argument order.
    pub(crate) fn spanning(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Inclusive years-of-experience range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceRange {
    min: u32,
    max: u32,
}

impl ExperienceRange {
    pub fn new(min: u32, max: u32) -> Result<Self, QueryError> {
        if min > max {
            return Err(QueryError::InvalidExperienceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub(crate) fn spanning(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, years: u32) -> bool {
        self.min <= years && years <= self.max
    }
}

/// Categorical attribute used to partition records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    Department,
    Gender,
    Status,
}

impl GroupField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Department => "Department",
            Self::Gender => "Gender",
            Self::Status => "Status",
        }
    }
}

impl FromStr for GroupField {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "department" | "dept" => Ok(Self::Department),
            "gender" => Ok(Self::Gender),
            "status" => Ok(Self::Status),
            _ => Err(QueryError::UnknownGroupField(value.trim().to_string())),
        }
    }
}

/// Numeric attribute used for ranking and aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Salary,
    YearsExperience,
    PerformanceRating,
    LeavesTaken,
}

impl Metric {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::YearsExperience => "Years of Experience",
            Self::PerformanceRating => "Performance Rating",
            Self::LeavesTaken => "Leaves Taken",
        }
    }

    pub fn value(self, record: &EmployeeRecord) -> u32 {
        match self {
            Self::Salary => record.salary,
            Self::YearsExperience => record.years_experience,
            Self::PerformanceRating => u32::from(record.performance_rating.value()),
            Self::LeavesTaken => record.leaves_taken,
        }
    }
}

impl FromStr for Metric {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "salary" => Ok(Self::Salary),
            "years_experience" | "experience" => Ok(Self::YearsExperience),
            "performance_rating" | "performance" | "rating" => Ok(Self::PerformanceRating),
            "leaves_taken" | "leaves" => Ok(Self::LeavesTaken),
            _ => Err(QueryError::UnknownMetric(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(QueryError::UnknownSortOrder(value.trim().to_string())),
        }
    }
}
