use super::super::aggregate::{GroupMeanEntry, MetricSummary};
use super::super::domain::{Department, EmployeeRecord, Gender};
use super::super::query::{DateRange, ExperienceRange, GroupField};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub department: &'static str,
    pub salary: u32,
    pub years_experience: u32,
    pub joining_date: NaiveDate,
    pub performance_rating: u8,
    pub leaves_taken: u32,
    pub status: &'static str,
    pub gender: &'static str,
}

impl<'a> From<&'a EmployeeRecord> for EmployeeRow<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            id: record.id.as_str(),
            name: &record.name,
            department: record.department.label(),
            salary: record.salary,
            years_experience: record.years_experience,
            joining_date: record.joining_date,
            performance_rating: record.performance_rating.value(),
            leaves_taken: record.leaves_taken,
            status: record.status.label(),
            gender: record.gender.label(),
        }
    }
}

/// One bar of a per-employee series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameValue<'a> {
    pub name: &'a str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceSalaryPoint<'a> {
    pub name: &'a str,
    pub years_experience: u32,
    pub salary: u32,
    pub gender: &'static str,
    pub department: &'static str,
}

impl<'a> From<&'a EmployeeRecord> for ExperienceSalaryPoint<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            name: &record.name,
            years_experience: record.years_experience,
            salary: record.salary,
            gender: record.gender.label(),
            department: record.department.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSalaryPoint {
    pub department: &'static str,
    pub salary: u32,
    pub gender: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport<'a> {
    pub employees: Vec<EmployeeRow<'a>>,
    pub experience_vs_salary: Vec<ExperienceSalaryPoint<'a>>,
    pub department_vs_salary: Vec<DepartmentSalaryPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamesReport<'a> {
    pub department: Department,
    pub department_label: &'static str,
    pub joined: DateRange,
    pub experience: ExperienceRange,
    pub employees: Vec<EmployeeRow<'a>>,
    pub top_rated: Vec<NameValue<'a>>,
    pub fewest_leaves: Vec<NameValue<'a>>,
    pub experience_by_name: Vec<NameValue<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentSeries<'a> {
    pub department: &'static str,
    pub employees: Vec<NameValue<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentScatter<'a> {
    pub department: &'static str,
    pub points: Vec<ExperienceSalaryPoint<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SalaryDistribution {
    pub department: &'static str,
    pub salaries: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<MetricSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "option", rename_all = "snake_case")]
pub enum SalaryAnalysis<'a> {
    General {
        average_by_department: Vec<GroupMeanEntry>,
    },
    Department {
        top_salaries: Vec<DepartmentSeries<'a>>,
    },
    Experience {
        departments: Vec<DepartmentScatter<'a>>,
    },
    Gender {
        gender: Gender,
        gender_label: &'static str,
        distributions: Vec<SalaryDistribution>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub group_by: GroupField,
    pub group_label: &'static str,
    pub average_salary: Vec<GroupMeanEntry>,
    pub average_performance: Vec<GroupMeanEntry>,
    pub average_experience: Vec<GroupMeanEntry>,
}
