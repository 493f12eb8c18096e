use super::super::aggregate::{group_mean, summarize};
use super::super::domain::{Department, EmployeeRecord, Gender};
use super::super::filters::{
    filter_by_department, filter_by_department_and_date, filter_by_experience_range,
    filter_by_gender_and_department,
};
use super::super::query::{DateRange, ExperienceRange, GroupField, Metric, QueryError, SortOrder};
use super::super::ranking::{top_n_by, top_n_per_department};
use super::super::roster::EmployeeRoster;
use super::views::{
    ComparisonReport, DepartmentSalaryPoint, DepartmentScatter, DepartmentSeries, EmployeeRow,
    ExperienceSalaryPoint, NameValue, NamesReport, OverviewReport, SalaryAnalysis,
    SalaryDistribution,
};
use tracing::debug;

/// Length of every "top N" chart on the dashboard.
pub const TOP_N: usize = 10;

/// Which breakdown the salary section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryView {
    General,
    Department,
    Experience,
    Gender(Gender),
}

impl SalaryView {
    /// Parses the option name, pulling in the gender selection for the gender breakdown.
    pub fn parse(option: &str, gender: Option<Gender>) -> Result<Self, QueryError> {
        match option.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "department" => Ok(Self::Department),
            "experience" => Ok(Self::Experience),
            "gender" => gender.map(Self::Gender).ok_or(QueryError::MissingGender),
            _ => Err(QueryError::UnknownSalaryOption(option.trim().to_string())),
        }
    }
}

/// Selection driving the names section. Missing ranges default to the roster bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamesSelection {
    pub department: Department,
    pub joined: Option<DateRange>,
    pub experience: Option<ExperienceRange>,
}

/// Builds the serializable views of each dashboard section from one roster.
#[derive(Debug, Clone, Copy)]
pub struct DashboardReports<'a> {
    roster: &'a EmployeeRoster,
}

impl<'a> DashboardReports<'a> {
    pub fn new(roster: &'a EmployeeRoster) -> Self {
        Self { roster }
    }

    pub fn overview(&self) -> OverviewReport<'a> {
        let records = self.roster.records();
        OverviewReport {
            employees: records.iter().map(EmployeeRow::from).collect(),
            experience_vs_salary: records.iter().map(ExperienceSalaryPoint::from).collect(),
            department_vs_salary: records
                .iter()
                .map(|record| DepartmentSalaryPoint {
                    department: record.department.label(),
                    salary: record.salary,
                    gender: record.gender.label(),
                })
                .collect(),
        }
    }

    pub fn names(&self, selection: NamesSelection) -> NamesReport<'a> {
        let bounds = self.roster.bounds();
        let joined = selection
            .joined
            .or_else(|| bounds.map(|b| b.date_range()))
            .unwrap_or_else(|| DateRange::spanning(self.roster.as_of(), self.roster.as_of()));
        let experience = selection
            .experience
            .or_else(|| bounds.map(|b| b.experience_range()))
            .unwrap_or_else(|| ExperienceRange::spanning(0, 0));

        let filtered =
            filter_by_department_and_date(self.roster.records(), selection.department, joined);
        let top_rated = top_n_by(
            filtered.iter().copied(),
            Metric::PerformanceRating,
            TOP_N,
            SortOrder::Descending,
        );
        let fewest_leaves = top_n_by(
            filtered.iter().copied(),
            Metric::LeavesTaken,
            TOP_N,
            SortOrder::Ascending,
        );
        let within_experience = filter_by_experience_range(filtered.iter().copied(), experience);

        debug!(
            department = selection.department.label(),
            matched = filtered.len(),
            within_experience = within_experience.len(),
            "built names report"
        );

        NamesReport {
            department: selection.department,
            department_label: selection.department.label(),
            joined,
            experience,
            employees: filtered.iter().copied().map(EmployeeRow::from).collect(),
            top_rated: name_values(&top_rated, Metric::PerformanceRating),
            fewest_leaves: name_values(&fewest_leaves, Metric::LeavesTaken),
            experience_by_name: name_values(&within_experience, Metric::YearsExperience),
        }
    }

    pub fn salary(&self, view: SalaryView) -> SalaryAnalysis<'a> {
        let records = self.roster.records();
        match view {
            SalaryView::General => SalaryAnalysis::General {
                average_by_department: group_mean(records, GroupField::Department, Metric::Salary)
                    .entries(),
            },
            SalaryView::Department => {
                let all: Vec<&EmployeeRecord> = records.iter().collect();
                let top_salaries =
                    top_n_per_department(&all, Metric::Salary, TOP_N, SortOrder::Descending)
                        .into_iter()
                        .map(|ranking| DepartmentSeries {
                            department: ranking.department.label(),
                            employees: name_values(&ranking.records, Metric::Salary),
                        })
                        .collect();
                SalaryAnalysis::Department { top_salaries }
            }
            SalaryView::Experience => SalaryAnalysis::Experience {
                departments: self
                    .roster
                    .departments()
                    .into_iter()
                    .map(|department| DepartmentScatter {
                        department: department.label(),
                        points: filter_by_department(records, department)
                            .into_iter()
                            .map(ExperienceSalaryPoint::from)
                            .collect(),
                    })
                    .collect(),
            },
            SalaryView::Gender(gender) => SalaryAnalysis::Gender {
                gender,
                gender_label: gender.label(),
                distributions: self
                    .roster
                    .departments()
                    .into_iter()
                    .map(|department| {
                        let subset = filter_by_gender_and_department(records, gender, department);
                        SalaryDistribution {
                            department: department.label(),
                            salaries: subset.iter().map(|record| record.salary).collect(),
                            summary: summarize(subset.iter().copied(), Metric::Salary),
                        }
                    })
                    .collect(),
            },
        }
    }

    pub fn comparison(&self, group_by: GroupField) -> ComparisonReport {
        let records = self.roster.records();
        ComparisonReport {
            group_by,
            group_label: group_by.label(),
            average_salary: group_mean(records, group_by, Metric::Salary).entries(),
            average_performance: group_mean(records, group_by, Metric::PerformanceRating)
                .entries(),
            average_experience: group_mean(records, group_by, Metric::YearsExperience).entries(),
        }
    }
}

fn name_values<'a>(records: &[&'a EmployeeRecord], metric: Metric) -> Vec<NameValue<'a>> {
    records
        .iter()
        .map(|&record| NameValue {
            name: record.name.as_str(),
            value: metric.value(record),
        })
        .collect()
}
