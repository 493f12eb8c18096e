use serde::Serialize;
use std::collections::BTreeMap;

use super::domain::{Department, EmployeeRecord, EmploymentStatus, Gender};
use super::query::{GroupField, Metric};

/// Value of a categorical field identifying one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Department(Department),
    Gender(Gender),
    Status(EmploymentStatus),
}

impl GroupKey {
    pub fn of(field: GroupField, record: &EmployeeRecord) -> Self {
        match field {
            GroupField::Department => Self::Department(record.department),
            GroupField::Gender => Self::Gender(record.gender),
            GroupField::Status => Self::Status(record.status),
        }
    }

    pub const fn field(self) -> GroupField {
        match self {
            Self::Department(_) => GroupField::Department,
            Self::Gender(_) => GroupField::Gender,
            Self::Status(_) => GroupField::Status,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Department(department) => department.label(),
            Self::Gender(gender) => gender.label(),
            Self::Status(status) => status.label(),
        }
    }

    pub fn matches(self, record: &EmployeeRecord) -> bool {
        Self::of(self.field(), record) == self
    }

    /// Every possible key of a field, whether or not the data contains it.
    pub fn all(field: GroupField) -> Vec<Self> {
        match field {
            GroupField::Department => Department::ordered().map(Self::Department).to_vec(),
            GroupField::Gender => Gender::ordered().map(Self::Gender).to_vec(),
            GroupField::Status => EmploymentStatus::ordered().map(Self::Status).to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    count: usize,
    sum: u64,
}

impl Accumulator {
    fn push(&mut self, value: u32) {
        self.count += 1;
        self.sum += u64::from(value);
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupMean {
    pub count: usize,
    pub mean: f64,
}

/// Per-group arithmetic means of one metric.
#[derive(Debug, Clone)]
pub struct GroupMeans {
    pub field: GroupField,
    pub metric: Metric,
    groups: BTreeMap<GroupKey, GroupMean>,
}

impl GroupMeans {
    pub fn get(&self, key: GroupKey) -> Option<f64> {
        self.groups.get(&key).map(|group| group.mean)
    }

    pub fn group(&self, key: GroupKey) -> Option<&GroupMean> {
        self.groups.get(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = GroupKey> + '_ {
        self.groups.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Series entries ordered by group label.
    pub fn entries(&self) -> Vec<GroupMeanEntry> {
        let mut entries: Vec<GroupMeanEntry> = self
            .groups
            .iter()
            .map(|(key, group)| GroupMeanEntry {
                group: key.label(),
                count: group.count,
                mean: group.mean,
            })
            .collect();
        entries.sort_by(|a, b| a.group.cmp(b.group));
        entries
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMeanEntry {
    pub group: &'static str,
    pub count: usize,
    pub mean: f64,
}

/// Mean of `metric` for each distinct value of `field` present in `records`.
pub fn group_mean<'a, I>(records: I, field: GroupField, metric: Metric) -> GroupMeans
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut accumulators: BTreeMap<GroupKey, Accumulator> = BTreeMap::new();
    for record in records {
        accumulators
            .entry(GroupKey::of(field, record))
            .or_default()
            .push(metric.value(record));
    }

    let groups = accumulators
        .into_iter()
        .filter_map(|(key, acc)| {
            acc.mean().map(|mean| {
                (
                    key,
                    GroupMean {
                        count: acc.count,
                        mean,
                    },
                )
            })
        })
        .collect();

    GroupMeans {
        field,
        metric,
        groups,
    }
}

/// Mean of `metric` for each requested group; `None` where a group has no members.
pub fn group_mean_for<'a, I>(
    records: I,
    groups: &[GroupKey],
    metric: Metric,
) -> Vec<(GroupKey, Option<f64>)>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut accumulators = vec![Accumulator::default(); groups.len()];
    for record in records {
        for (key, acc) in groups.iter().zip(accumulators.iter_mut()) {
            if key.matches(record) {
                acc.push(metric.value(record));
            }
        }
    }

    groups
        .iter()
        .copied()
        .zip(accumulators.iter().map(Accumulator::mean))
        .collect()
}

/// Count, extremes and mean of a metric over a subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub count: usize,
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

pub fn summarize<'a, I>(records: I, metric: Metric) -> Option<MetricSummary>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut values = records.into_iter().map(|record| metric.value(record));
    let first = values.next()?;
    let mut summary = MetricSummary {
        count: 1,
        min: first,
        max: first,
        mean: 0.0,
    };
    let mut sum = u64::from(first);

    for value in values {
        summary.count += 1;
        summary.min = summary.min.min(value);
        summary.max = summary.max.max(value);
        sum += u64::from(value);
    }

    summary.mean = sum as f64 / summary.count as f64;
    Some(summary)
}
