use chrono::NaiveDate;

use crate::workforce::domain::{
    Department, EmployeeId, EmployeeRecord, EmploymentStatus, Gender, PerformanceRating,
};
use crate::workforce::roster::EmployeeRoster;

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(crate) fn as_of() -> NaiveDate {
    date(2025, 1, 1)
}

pub(crate) fn rating(value: u8) -> PerformanceRating {
    PerformanceRating::new(value).expect("rating within 1..=5")
}

/// Minimal record; tests override the fields they care about.
pub(crate) fn record(
    id: &str,
    department: Department,
    salary: u32,
    years_experience: u32,
) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId(id.to_string()),
        name: format!("Employee {id}"),
        department,
        salary,
        years_experience,
        joining_date: date(2022, 1, 1),
        performance_rating: rating(3),
        leaves_taken: 0,
        status: EmploymentStatus::Active,
        gender: Gender::Male,
    }
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    name: &str,
    department: Department,
    salary: u32,
    years_experience: u32,
    joining_date: NaiveDate,
    performance_rating: u8,
    leaves_taken: u32,
    status: EmploymentStatus,
    gender: Gender,
) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId(id.to_string()),
        name: name.to_string(),
        department,
        salary,
        years_experience,
        joining_date,
        performance_rating: rating(performance_rating),
        leaves_taken,
        status,
        gender,
    }
}

pub(crate) fn sample_records() -> Vec<EmployeeRecord> {
    use Department::*;
    use EmploymentStatus::*;
    use Gender::*;

    vec![
        employee("E1001", "Alice Chen", It, 85_000, 10, date(2021, 3, 15), 5, 3, Active, Female),
        employee("E1002", "Brian Ortiz", Hr, 42_000, 3, date(2022, 7, 1), 3, 12, Active, Male),
        employee("E1003", "Carla Diaz", It, 61_000, 5, date(2020, 11, 20), 4, 7, Inactive, Female),
        employee("E1004", "Dev Patel", Finance, 73_000, 8, date(2023, 2, 10), 2, 1, Active, Male),
        employee("E1005", "Erin Walsh", It, 47_000, 1, date(2024, 6, 3), 4, 15, Active, Male),
        employee("E1006", "Farah Khan", Engineering, 98_000, 15, date(2019, 9, 9), 5, 0, Active, Female),
        employee("E1007", "Gus Moreau", Hr, 39_000, 2, date(2023, 12, 1), 1, 9, Inactive, Male),
        employee("E1008", "Hana Sato", It, 72_000, 7, date(2022, 1, 17), 4, 3, Active, Female),
    ]
}

pub(crate) fn sample_roster() -> EmployeeRoster {
    EmployeeRoster::new(sample_records(), as_of()).expect("sample roster is valid")
}

pub(crate) fn ids(records: &[&EmployeeRecord]) -> Vec<String> {
    records.iter().map(|record| record.id.0.clone()).collect()
}
