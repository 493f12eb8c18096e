mod dashboard;
pub mod views;

pub use dashboard::{DashboardReports, NamesSelection, SalaryView, TOP_N};
