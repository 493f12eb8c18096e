use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

use super::domain::{Department, EmployeeId, EmployeeRecord};
use super::query::{DateRange, ExperienceRange};

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("employee id {0} appears more than once")]
    DuplicateId(EmployeeId),
    #[error("employee {id} joined on {joining_date}, after the roster date {as_of}")]
    JoinedAfterAsOf {
        id: EmployeeId,
        joining_date: NaiveDate,
        as_of: NaiveDate,
    },
}

/// Immutable collection of employee records for one session.
#[derive(Debug, Clone)]
pub struct EmployeeRoster {
    records: Vec<EmployeeRecord>,
    as_of: NaiveDate,
}

impl EmployeeRoster {
    pub fn new(records: Vec<EmployeeRecord>, as_of: NaiveDate) -> Result<Self, RosterError> {
        let mut seen: HashSet<&EmployeeId> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(RosterError::DuplicateId(record.id.clone()));
            }
            if record.joining_date > as_of {
                return Err(RosterError::JoinedAfterAsOf {
                    id: record.id.clone(),
                    joining_date: record.joining_date,
                    as_of,
                });
            }
        }

        Ok(Self { records, as_of })
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Distinct departments in the order they first appear.
    pub fn departments(&self) -> Vec<Department> {
        distinct_departments(self.records.iter())
    }

    pub fn bounds(&self) -> Option<RosterBounds> {
        let first = self.records.first()?;
        let mut bounds = RosterBounds {
            earliest_joining: first.joining_date,
            latest_joining: first.joining_date,
            min_experience: first.years_experience,
            max_experience: first.years_experience,
        };

        for record in &self.records[1..] {
            bounds.earliest_joining = bounds.earliest_joining.min(record.joining_date);
            bounds.latest_joining = bounds.latest_joining.max(record.joining_date);
            bounds.min_experience = bounds.min_experience.min(record.years_experience);
            bounds.max_experience = bounds.max_experience.max(record.years_experience);
        }

        Some(bounds)
    }
}

/// Extremes of the roster, used to bound and default the date and experience inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterBounds {
    pub earliest_joining: NaiveDate,
    pub latest_joining: NaiveDate,
    pub min_experience: u32,
    pub max_experience: u32,
}

impl RosterBounds {
    pub fn date_range(&self) -> DateRange {
        DateRange::spanning(self.earliest_joining, self.latest_joining)
    }

    pub fn experience_range(&self) -> ExperienceRange {
        ExperienceRange::spanning(self.min_experience, self.max_experience)
    }
}

pub(crate) fn distinct_departments<'a, I>(records: I) -> Vec<Department>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut departments = Vec::new();
    for record in records {
        if !departments.contains(&record.department) {
            departments.push(record.department);
        }
    }
    departments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workforce::tests::common::{date, record, sample_roster};

    #[test]
    fn rejects_duplicate_ids() {
        let records = vec![
            record("E1001", Department::It, 50_000, 5),
            record("E1001", Department::Hr, 40_000, 3),
        ];

        match EmployeeRoster::new(records, date(2025, 1, 1)) {
            Err(RosterError::DuplicateId(id)) => assert_eq!(id.as_str(), "E1001"),
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn rejects_joining_dates_after_as_of() {
        let mut late = record("E1002", Department::It, 50_000, 5);
        late.joining_date = date(2025, 6, 1);

        match EmployeeRoster::new(vec![late], date(2025, 1, 1)) {
            Err(RosterError::JoinedAfterAsOf { joining_date, .. }) => {
                assert_eq!(joining_date, date(2025, 6, 1))
            }
            other => panic!("expected future joining date rejection, got {other:?}"),
        }
    }

    #[test]
    fn bounds_cover_dates_and_experience() {
        let roster = sample_roster();
        let bounds = roster.bounds().expect("non-empty roster has bounds");

        let earliest = roster.records().iter().map(|r| r.joining_date).min();
        let latest = roster.records().iter().map(|r| r.joining_date).max();
        assert_eq!(Some(bounds.earliest_joining), earliest);
        assert_eq!(Some(bounds.latest_joining), latest);
        assert_eq!(bounds.min_experience, 1);
        assert_eq!(bounds.max_experience, 15);
        assert!(bounds.date_range().contains(bounds.latest_joining));
    }

    #[test]
    fn empty_roster_has_no_bounds() {
        let roster = EmployeeRoster::new(Vec::new(), date(2025, 1, 1)).expect("empty roster");
        assert!(roster.is_empty());
        assert!(roster.bounds().is_none());
        assert!(roster.departments().is_empty());
    }

    #[test]
    fn departments_follow_first_appearance() {
        let roster = sample_roster();
        assert_eq!(
            roster.departments(),
            vec![
                Department::It,
                Department::Hr,
                Department::Finance,
                Department::Engineering
            ]
        );
    }
}
