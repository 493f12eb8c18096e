//! Predicate filters over borrowed employee records.
//!
//! Every function takes any iterator of `&EmployeeRecord` (a roster slice or a
//! previously filtered subset) and returns a new subset borrowing from the same
//! collection, preserving input order.

use super::domain::{Department, EmployeeRecord, Gender};
use super::query::{DateRange, ExperienceRange};

pub fn filter_by_department_and_date<'a, I>(
    records: I,
    department: Department,
    joined: DateRange,
) -> Vec<&'a EmployeeRecord>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    EmployeeFilter::new()
        .department(department)
        .joined_within(joined)
        .apply(records)
}

pub fn filter_by_experience_range<'a, I>(
    records: I,
    experience: ExperienceRange,
) -> Vec<&'a EmployeeRecord>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    EmployeeFilter::new().experience(experience).apply(records)
}

pub fn filter_by_gender_and_department<'a, I>(
    records: I,
    gender: Gender,
    department: Department,
) -> Vec<&'a EmployeeRecord>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    EmployeeFilter::new()
        .gender(gender)
        .department(department)
        .apply(records)
}

pub fn filter_by_department<'a, I>(records: I, department: Department) -> Vec<&'a EmployeeRecord>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    EmployeeFilter::new().department(department).apply(records)
}

/// Conjunction of optional predicates. An empty filter matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub department: Option<Department>,
    pub joined: Option<DateRange>,
    pub experience: Option<ExperienceRange>,
    pub gender: Option<Gender>,
}

impl EmployeeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    pub fn joined_within(mut self, joined: DateRange) -> Self {
        self.joined = Some(joined);
        self
    }

    pub fn experience(mut self, experience: ExperienceRange) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        self.department
            .map_or(true, |department| record.department == department)
            && self
                .joined
                .map_or(true, |range| range.contains(record.joining_date))
            && self
                .experience
                .map_or(true, |range| range.contains(record.years_experience))
            && self.gender.map_or(true, |gender| record.gender == gender)
    }

    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a EmployeeRecord>
    where
        I: IntoIterator<Item = &'a EmployeeRecord>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
