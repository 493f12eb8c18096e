use super::common::*;
use crate::workforce::domain::{Department, EmployeeRecord};
use crate::workforce::query::{Metric, SortOrder};
use crate::workforce::ranking::{top_n_by, top_n_per_department};

fn with_leaves(id: &str, leaves_taken: u32) -> EmployeeRecord {
    let mut employee = record(id, Department::It, 50_000, 3);
    employee.leaves_taken = leaves_taken;
    employee
}

#[test]
fn ascending_selection_takes_fewest_leaves() {
    let records = vec![
        with_leaves("A", 5),
        with_leaves("B", 1),
        with_leaves("C", 9),
    ];

    let top = top_n_by(&records, Metric::LeavesTaken, 2, SortOrder::Ascending);
    let leaves: Vec<u32> = top.iter().map(|r| r.leaves_taken).collect();
    assert_eq!(leaves, vec![1, 5]);
}

#[test]
fn descending_selection_orders_by_rating() {
    let roster = sample_roster();
    let top = top_n_by(
        roster.records(),
        Metric::PerformanceRating,
        3,
        SortOrder::Descending,
    );

    // Alice and Farah both rate 5; input order breaks the tie.
    assert_eq!(ids(&top), vec!["E1001", "E1006", "E1003"]);
}

#[test]
fn result_is_sorted_and_bounded_by_subset_size() {
    let roster = sample_roster();

    for metric in [
        Metric::Salary,
        Metric::YearsExperience,
        Metric::PerformanceRating,
        Metric::LeavesTaken,
    ] {
        for n in [0, 1, 3, 8, 50] {
            let desc = top_n_by(roster.records(), metric, n, SortOrder::Descending);
            let asc = top_n_by(roster.records(), metric, n, SortOrder::Ascending);

            assert_eq!(desc.len(), n.min(roster.len()));
            assert_eq!(asc.len(), n.min(roster.len()));
            assert!(desc
                .windows(2)
                .all(|pair| metric.value(pair[0]) >= metric.value(pair[1])));
            assert!(asc
                .windows(2)
                .all(|pair| metric.value(pair[0]) <= metric.value(pair[1])));
        }
    }
}

#[test]
fn ties_keep_input_order_in_both_directions() {
    let records = vec![
        with_leaves("A", 2),
        with_leaves("B", 2),
        with_leaves("C", 1),
        with_leaves("D", 2),
    ];

    let asc = top_n_by(&records, Metric::LeavesTaken, 4, SortOrder::Ascending);
    assert_eq!(ids(&asc), vec!["C", "A", "B", "D"]);

    let desc = top_n_by(&records, Metric::LeavesTaken, 2, SortOrder::Descending);
    assert_eq!(ids(&desc), vec!["A", "B"]);
}

#[test]
fn ranking_does_not_touch_the_input() {
    let records = vec![with_leaves("A", 5), with_leaves("B", 1)];
    let before = records.clone();
    let _ = top_n_by(&records, Metric::LeavesTaken, 1, SortOrder::Ascending);
    assert_eq!(records, before);
}

#[test]
fn per_department_rankings_follow_first_appearance() {
    let roster = sample_roster();
    let all: Vec<&EmployeeRecord> = roster.records().iter().collect();

    let rankings = top_n_per_department(&all, Metric::Salary, 2, SortOrder::Descending);
    let departments: Vec<Department> = rankings.iter().map(|r| r.department).collect();
    assert_eq!(
        departments,
        vec![
            Department::It,
            Department::Hr,
            Department::Finance,
            Department::Engineering
        ]
    );

    assert_eq!(ids(&rankings[0].records), vec!["E1001", "E1008"]);
    assert_eq!(ids(&rankings[1].records), vec!["E1002", "E1007"]);
    assert_eq!(ids(&rankings[2].records), vec!["E1004"]);
}
