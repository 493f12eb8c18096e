use super::common::*;
use crate::workforce::domain::{Department, Gender};
use crate::workforce::filters::filter_by_department;
use crate::workforce::query::{DateRange, ExperienceRange, GroupField, QueryError};
use crate::workforce::report::views::{ExperienceSalaryPoint, SalaryAnalysis};
use crate::workforce::report::{DashboardReports, NamesSelection, SalaryView};

#[test]
fn names_report_defaults_ranges_to_roster_bounds() {
    let roster = sample_roster();
    let reports = DashboardReports::new(&roster);

    let report = reports.names(NamesSelection {
        department: Department::It,
        joined: None,
        experience: None,
    });

    assert_eq!(report.joined.start(), date(2019, 9, 9));
    assert_eq!(report.joined.end(), date(2024, 6, 3));
    assert_eq!(report.experience.min(), 1);
    assert_eq!(report.experience.max(), 15);
    assert_eq!(report.employees.len(), 4);

    let top_rated: Vec<&str> = report.top_rated.iter().map(|bar| bar.name).collect();
    assert_eq!(
        top_rated,
        vec!["Alice Chen", "Carla Diaz", "Erin Walsh", "Hana Sato"]
    );

    let fewest: Vec<u32> = report.fewest_leaves.iter().map(|bar| bar.value).collect();
    assert_eq!(fewest, vec![3, 3, 7, 15]);
}

#[test]
fn names_report_applies_experience_after_department_and_date() {
    let roster = sample_roster();
    let reports = DashboardReports::new(&roster);

    let report = reports.names(NamesSelection {
        department: Department::It,
        joined: Some(DateRange::new(date(2020, 1, 1), date(2023, 12, 31)).expect("range")),
        experience: Some(ExperienceRange::new(6, 12).expect("range")),
    });

    let employees: Vec<&str> = report.employees.iter().map(|row| row.id).collect();
    assert_eq!(employees, vec!["E1001", "E1003", "E1008"]);

    let experienced: Vec<(&str, u32)> = report
        .experience_by_name
        .iter()
        .map(|bar| (bar.name, bar.value))
        .collect();
    assert_eq!(experienced, vec![("Alice Chen", 10), ("Hana Sato", 7)]);
}

#[test]
fn salary_general_averages_by_department() {
    let roster = sample_roster();
    let reports = DashboardReports::new(&roster);

    match reports.salary(SalaryView::General) {
        SalaryAnalysis::General {
            average_by_department,
        } => {
            let hr = average_by_department
                .iter()
                .find(|entry| entry.group == "HR")
                .expect("HR present");
            assert!((hr.mean - 40_500.0).abs() < 1e-9);
        }
        other => panic!("expected general analysis, got {other:?}"),
    }
}

#[test]
fn salary_gender_breakdown_covers_every_department() {
    let roster = sample_roster();
    let reports = DashboardReports::new(&roster);

    match reports.salary(SalaryView::Gender(Gender::Male)) {
        SalaryAnalysis::Gender { distributions, .. } => {
            let departments: Vec<&str> = distributions.iter().map(|d| d.department).collect();
            assert_eq!(departments, vec!["IT", "HR", "Finance", "Engineering"]);

            let engineering = &distributions[3];
            assert!(engineering.salaries.is_empty());
            assert!(engineering.summary.is_none());

            let hr = &distributions[1];
            assert_eq!(hr.salaries, vec![42_000, 39_000]);
            let summary = hr.summary.expect("HR has male employees");
            assert_eq!(summary.min, 39_000);
            assert_eq!(summary.max, 42_000);
        }
        other => panic!("expected gender analysis, got {other:?}"),
    }
}

#[test]
fn salary_department_lists_top_salaries() {
    let roster = sample_roster();
    let reports = DashboardReports::new(&roster);

    match reports.salary(SalaryView::Department) {
        SalaryAnalysis::Department { top_salaries } => {
            assert_eq!(top_salaries.len(), 4);
            let it: Vec<u32> = top_salaries[0].employees.iter().map(|e| e.value).collect();
            assert_eq!(it, vec![85_000, 72_000, 61_000, 47_000]);
        }
        other => panic!("expected department analysis, got {other:?}"),
    }
}

#[test]
fn salary_experience_plots_each_department_in_roster_order() {
    let roster = sample_roster();
    let reports = DashboardReports::new(&roster);

    match reports.salary(SalaryView::Experience) {
        SalaryAnalysis::Experience { departments } => {
            let labels: Vec<&str> = departments.iter().map(|d| d.department).collect();
            assert_eq!(labels, vec!["IT", "HR", "Finance", "Engineering"]);

            for (scatter, department) in departments.iter().zip(roster.departments()) {
                let expected: Vec<ExperienceSalaryPoint<'_>> =
                    filter_by_department(roster.records(), department)
                        .into_iter()
                        .map(ExperienceSalaryPoint::from)
                        .collect();
                assert_eq!(scatter.points, expected);
            }

            let it: Vec<(&str, u32, u32)> = departments[0]
                .points
                .iter()
                .map(|point| (point.name, point.years_experience, point.salary))
                .collect();
            assert_eq!(
                it,
                vec![
                    ("Alice Chen", 10, 85_000),
                    ("Carla Diaz", 5, 61_000),
                    ("Erin Walsh", 1, 47_000),
                    ("Hana Sato", 7, 72_000),
                ]
            );
        }
        other => panic!("expected experience analysis, got {other:?}"),
    }
}

#[test]
fn salary_view_requires_gender_for_gender_option() {
    assert_eq!(SalaryView::parse("gender", None), Err(QueryError::MissingGender));
    assert_eq!(
        SalaryView::parse("Gender", Some(Gender::Female)),
        Ok(SalaryView::Gender(Gender::Female))
    );
    assert_eq!(
        SalaryView::parse("tenure", None),
        Err(QueryError::UnknownSalaryOption("tenure".to_string()))
    );
}

#[test]
fn comparison_by_gender_reports_three_series() {
    let roster = sample_roster();
    let report = DashboardReports::new(&roster).comparison(GroupField::Gender);

    let groups: Vec<&str> = report.average_salary.iter().map(|e| e.group).collect();
    assert_eq!(groups, vec!["Female", "Male"]);
    assert!((report.average_salary[0].mean - 79_000.0).abs() < 1e-9);
    assert!((report.average_performance[0].mean - 4.5).abs() < 1e-9);
    assert!((report.average_experience[1].mean - 3.5).abs() < 1e-9);
}

#[test]
fn overview_serializes_every_employee() {
    let roster = sample_roster();
    let overview = DashboardReports::new(&roster).overview();

    let json = serde_json::to_value(&overview).expect("overview serializes");
    assert_eq!(json["employees"].as_array().map(Vec::len), Some(8));
    assert_eq!(json["employees"][0]["department"], "IT");
    assert_eq!(json["experience_vs_salary"][5]["salary"], 98_000);
    assert_eq!(json["department_vs_salary"][1]["gender"], "Male");
}
