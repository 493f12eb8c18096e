//! Employee roster filtering, ranking and aggregation.
//!
//! Subsets borrow from an [`EmployeeRoster`]; nothing here mutates the roster.

pub mod aggregate;
pub mod domain;
pub mod filters;
pub mod import;
pub mod query;
pub mod ranking;
pub mod report;
mod roster;

#[cfg(test)]
mod tests;

pub use aggregate::{
    group_mean, group_mean_for, summarize, GroupKey, GroupMean, GroupMeanEntry, GroupMeans,
    MetricSummary,
};
pub use domain::{
    Department, EmployeeId, EmployeeRecord, EmploymentStatus, Gender, PerformanceRating,
};
pub use filters::{
    filter_by_department, filter_by_department_and_date, filter_by_experience_range,
    filter_by_gender_and_department, EmployeeFilter,
};
pub use import::{RosterImportError, RosterImporter};
pub use query::{DateRange, ExperienceRange, GroupField, Metric, QueryError, SortOrder};
pub use ranking::{top_n_by, top_n_per_department, DepartmentRanking};
pub use report::{DashboardReports, NamesSelection, SalaryView};
pub use roster::{EmployeeRoster, RosterBounds, RosterError};
