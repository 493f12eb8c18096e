use crate::infra::load_roster;
use crate::routes::NamesQuery;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use employee_insights::config::AppConfig;
use employee_insights::error::AppError;
use employee_insights::workforce::report::views::{
    ComparisonReport, NameValue, NamesReport, OverviewReport, SalaryAnalysis,
};
use employee_insights::workforce::{
    DashboardReports, EmployeeRoster, Gender, GroupField, GroupMeanEntry, SalaryView,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    #[command(subcommand)]
    pub(crate) section: ReportSection,
    /// Employee CSV export (falls back to APP_DATASET_PATH)
    #[arg(long, global = true)]
    pub(crate) dataset: Option<PathBuf>,
    /// Roster date used to validate joining dates (defaults to today)
    #[arg(long, global = true, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ReportSection {
    /// Full roster table with the salary overview
    Overview,
    /// Per-department names, ratings, leaves and experience
    Names(NamesArgs),
    /// Salary breakdown
    Salary(SalaryArgs),
    /// Average salary, performance and experience per group
    Comparison(ComparisonArgs),
}

#[derive(Args, Debug)]
pub(crate) struct NamesArgs {
    #[arg(long)]
    pub(crate) department: String,
    /// First joining date to include (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Last joining date to include (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end: Option<NaiveDate>,
    #[arg(long)]
    pub(crate) min_experience: Option<u32>,
    #[arg(long)]
    pub(crate) max_experience: Option<u32>,
}

#[derive(Args, Debug)]
pub(crate) struct SalaryArgs {
    /// general, department, experience or gender
    #[arg(long, default_value = "general")]
    pub(crate) option: String,
    /// Required with --option gender
    #[arg(long)]
    pub(crate) gender: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ComparisonArgs {
    /// department, gender or status
    #[arg(long, default_value = "department")]
    pub(crate) group_by: String,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        section,
        dataset,
        as_of,
    } = args;

    let config = AppConfig::load()?;
    let roster = load_roster(&config.dataset, dataset, as_of)?;
    println!("{}", render_section(&roster, section)?);
    Ok(())
}

pub(crate) fn render_section(
    roster: &EmployeeRoster,
    section: ReportSection,
) -> Result<String, AppError> {
    let reports = DashboardReports::new(roster);
    let text = match section {
        ReportSection::Overview => render_overview(roster, &reports.overview()),
        ReportSection::Names(args) => {
            let query = NamesQuery {
                department: args.department,
                start: args.start,
                end: args.end,
                min_experience: args.min_experience,
                max_experience: args.max_experience,
            };
            let selection = query.selection(roster.bounds())?;
            render_names(&reports.names(selection))
        }
        ReportSection::Salary(args) => {
            let gender = args
                .gender
                .as_deref()
                .map(str::parse::<Gender>)
                .transpose()?;
            let view = SalaryView::parse(&args.option, gender)?;
            render_salary(&reports.salary(view))
        }
        ReportSection::Comparison(args) => {
            let group_by = args.group_by.parse::<GroupField>()?;
            render_comparison(&reports.comparison(group_by))
        }
    };
    Ok(text)
}

fn render_overview(roster: &EmployeeRoster, report: &OverviewReport<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Employee overview ({} employees, as of {})\n",
        report.employees.len(),
        roster.as_of()
    ));
    for row in &report.employees {
        out.push_str(&format!(
            "- {} | {} | {} | ${} | {} yrs | joined {} | rating {} | {} leaves | {} | {}\n",
            row.id,
            row.name,
            row.department,
            row.salary,
            row.years_experience,
            row.joining_date,
            row.performance_rating,
            row.leaves_taken,
            row.status,
            row.gender
        ));
    }
    out
}

fn render_names(report: &NamesReport<'_>) -> String {
    let mut out = format!(
        "{} employees who joined {} -> {}: {}\n",
        report.department_label,
        report.joined.start(),
        report.joined.end(),
        report.employees.len()
    );
    for row in &report.employees {
        out.push_str(&format!("- {} ({})\n", row.name, row.id));
    }

    push_series(&mut out, "Top performers", &report.top_rated);
    push_series(&mut out, "Fewest leaves taken", &report.fewest_leaves);
    push_series(
        &mut out,
        &format!(
            "Experience between {} and {} years",
            report.experience.min(),
            report.experience.max()
        ),
        &report.experience_by_name,
    );
    out
}

fn render_salary(analysis: &SalaryAnalysis<'_>) -> String {
    let mut out = String::new();
    match analysis {
        SalaryAnalysis::General {
            average_by_department,
        } => push_means(&mut out, "Average salary by department", average_by_department),
        SalaryAnalysis::Department { top_salaries } => {
            for series in top_salaries {
                push_series(
                    &mut out,
                    &format!("Top salaries in {}", series.department),
                    &series.employees,
                );
            }
        }
        SalaryAnalysis::Experience { departments } => {
            for scatter in departments {
                out.push_str(&format!("\nExperience vs salary in {}\n", scatter.department));
                for point in &scatter.points {
                    out.push_str(&format!(
                        "- {}: {} yrs, ${} ({})\n",
                        point.name, point.years_experience, point.salary, point.gender
                    ));
                }
            }
        }
        SalaryAnalysis::Gender {
            gender_label,
            distributions,
            ..
        } => {
            out.push_str(&format!("Salary distribution for {gender_label} employees\n"));
            for distribution in distributions {
                match distribution.summary {
                    Some(summary) => out.push_str(&format!(
                        "- {}: {} employees, min ${}, max ${}, mean ${:.2}\n",
                        distribution.department,
                        summary.count,
                        summary.min,
                        summary.max,
                        summary.mean
                    )),
                    None => out.push_str(&format!("- {}: no employees\n", distribution.department)),
                }
            }
        }
    }
    out
}

fn render_comparison(report: &ComparisonReport) -> String {
    let mut out = String::new();
    push_means(
        &mut out,
        &format!("Average salary by {}", report.group_label),
        &report.average_salary,
    );
    push_means(
        &mut out,
        &format!("Average performance rating by {}", report.group_label),
        &report.average_performance,
    );
    push_means(
        &mut out,
        &format!("Average years of experience by {}", report.group_label),
        &report.average_experience,
    );
    out
}

fn push_series(out: &mut String, title: &str, values: &[NameValue<'_>]) {
    out.push_str(&format!("\n{title}\n"));
    if values.is_empty() {
        out.push_str("- none\n");
    }
    for bar in values {
        out.push_str(&format!("- {}: {}\n", bar.name, bar.value));
    }
}

fn push_means(out: &mut String, title: &str, entries: &[GroupMeanEntry]) {
    out.push_str(&format!("\n{title}\n"));
    for entry in entries {
        out.push_str(&format!(
            "- {}: {:.2} ({} employees)\n",
            entry.group, entry.mean, entry.count
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employee_insights::workforce::RosterImporter;

    const CSV: &str = "Employee_ID,Name,Department,Salary,Years_Experience,Joining_Date,Performance_Rating,Leaves_Taken,Status,Gender\n\
E2001,Priya Raman,Finance,66000,9,2021-04-12,4,5,Active,Female\n\
E2002,Owen Hale,Finance,54000,4,2023-01-09,3,11,Active,Male\n\
E2003,Mei Lin,Marketing,48000,2,2024-02-19,5,2,Active,Female\n";

    fn roster() -> EmployeeRoster {
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        RosterImporter::from_reader(CSV.as_bytes(), as_of).expect("roster imports")
    }

    #[test]
    fn comparison_renders_each_group_mean() {
        let text = render_section(
            &roster(),
            ReportSection::Comparison(ComparisonArgs {
                group_by: "department".to_string(),
            }),
        )
        .expect("renders");

        assert!(text.contains("Average salary by Department"));
        assert!(text.contains("- Finance: 60000.00 (2 employees)"));
        assert!(text.contains("- Marketing: 48000.00 (1 employees)"));
    }

    #[test]
    fn names_section_lists_department_members() {
        let text = render_section(
            &roster(),
            ReportSection::Names(NamesArgs {
                department: "finance".to_string(),
                start: None,
                end: None,
                min_experience: Some(5),
                max_experience: None,
            }),
        )
        .expect("renders");

        assert!(text.starts_with("Finance employees who joined"));
        assert!(text.contains("Experience between 5 and 9 years\n- Priya Raman: 9"));
        assert!(!text.contains("Owen Hale: 4"));
    }

    #[test]
    fn empty_gender_subset_is_reported_not_rejected() {
        let text = render_section(
            &roster(),
            ReportSection::Salary(SalaryArgs {
                option: "gender".to_string(),
                gender: Some("male".to_string()),
            }),
        )
        .expect("renders");

        assert!(text.contains("- Marketing: no employees"));
        assert!(text.contains("- Finance: 1 employees"));
    }

    #[test]
    fn unknown_group_field_is_an_error() {
        let result = render_section(
            &roster(),
            ReportSection::Comparison(ComparisonArgs {
                group_by: "team".to_string(),
            }),
        );
        assert!(matches!(result, Err(AppError::Query(_))));
    }
}
