use chrono::{Local, NaiveDate};
use employee_insights::config::DatasetConfig;
use employee_insights::error::AppError;
use employee_insights::workforce::{EmployeeRoster, RosterImporter};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) roster: Arc<EmployeeRoster>,
}

/// Loads the roster from the CLI override or the configured dataset path.
pub(crate) fn load_roster(
    dataset: &DatasetConfig,
    override_path: Option<PathBuf>,
    as_of: Option<NaiveDate>,
) -> Result<EmployeeRoster, AppError> {
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());
    let path = match override_path {
        Some(path) => path,
        None => dataset.require_path()?.clone(),
    };
    Ok(RosterImporter::from_path(path, as_of)?)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
