use super::domain::{Department, EmployeeRecord};
use super::query::{Metric, SortOrder};
use super::roster::distinct_departments;

/// First `n` records after a stable sort on `metric`.
///
/// Equal values keep their input order in both directions, so "top 10 by rating" and
/// "top 10 with fewest leaves" share one selection rule.
pub fn top_n_by<'a, I>(
    records: I,
    metric: Metric,
    n: usize,
    order: SortOrder,
) -> Vec<&'a EmployeeRecord>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut ranked: Vec<&'a EmployeeRecord> = records.into_iter().collect();
    match order {
        SortOrder::Ascending => ranked.sort_by_key(|record| metric.value(record)),
        SortOrder::Descending => {
            ranked.sort_by(|a, b| metric.value(b).cmp(&metric.value(a)))
        }
    }
    ranked.truncate(n);
    ranked
}

#[derive(Debug, Clone)]
pub struct DepartmentRanking<'a> {
    pub department: Department,
    pub records: Vec<&'a EmployeeRecord>,
}

/// Top `n` records for each department, departments in first-appearance order.
pub fn top_n_per_department<'a>(
    records: &[&'a EmployeeRecord],
    metric: Metric,
    n: usize,
    order: SortOrder,
) -> Vec<DepartmentRanking<'a>> {
    distinct_departments(records.iter().copied())
        .into_iter()
        .map(|department| DepartmentRanking {
            department,
            records: top_n_by(
                records
                    .iter()
                    .copied()
                    .filter(|record| record.department == department),
                metric,
                n,
                order,
            ),
        })
        .collect()
}
