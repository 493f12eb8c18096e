use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::query::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    It,
    Hr,
    Finance,
    Marketing,
    Engineering,
    Health,
}

impl Department {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::It,
            Self::Hr,
            Self::Finance,
            Self::Marketing,
            Self::Engineering,
            Self::Health,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::Marketing => "Marketing",
            Self::Engineering => "Engineering",
            Self::Health => "Health",
        }
    }
}

impl FromStr for Department {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| QueryError::UnknownDepartment(trimmed.to_string()))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    Inactive,
}

impl EmploymentStatus {
    pub const fn ordered() -> [Self; 2] {
        [Self::Active, Self::Inactive]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl FromStr for EmploymentStatus {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| QueryError::UnknownStatus(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn ordered() -> [Self; 2] {
        [Self::Male, Self::Female]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|gender| gender.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| QueryError::UnknownGender(trimmed.to_string()))
    }
}

/// Rating on the 1–5 performance scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PerformanceRating(u8);

impl PerformanceRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub department: Department,
    pub salary: u32,
    pub years_experience: u32,
    pub joining_date: NaiveDate,
    pub performance_rating: PerformanceRating,
    pub leaves_taken: u32,
    pub status: EmploymentStatus,
    pub gender: Gender,
}
