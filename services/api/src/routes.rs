use crate::infra::{deserialize_optional_date, AppState};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use employee_insights::error::AppError;
use employee_insights::workforce::report::views::EmployeeRow;
use employee_insights::workforce::{
    group_mean, top_n_by, DashboardReports, DateRange, Department, EmployeeFilter, EmployeeId,
    ExperienceRange, Gender, GroupField, GroupMeanEntry, Metric, NamesSelection, QueryError,
    RosterBounds, SalaryView, SortOrder,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EmployeeQuery {
    #[serde(default)]
    pub(crate) department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) end: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) min_experience: Option<u32>,
    #[serde(default)]
    pub(crate) max_experience: Option<u32>,
    #[serde(default)]
    pub(crate) gender: Option<String>,
}

impl EmployeeQuery {
    /// Open-ended bounds are unconstrained on that side.
    pub(crate) fn filter(&self) -> Result<EmployeeFilter, QueryError> {
        let mut filter = EmployeeFilter::new();
        if let Some(department) = &self.department {
            filter = filter.department(department.parse::<Department>()?);
        }
        if self.start.is_some() || self.end.is_some() {
            filter = filter.joined_within(DateRange::new(
                self.start.unwrap_or(NaiveDate::MIN),
                self.end.unwrap_or(NaiveDate::MAX),
            )?);
        }
        if self.min_experience.is_some() || self.max_experience.is_some() {
            filter = filter.experience(ExperienceRange::new(
                self.min_experience.unwrap_or(0),
                self.max_experience.unwrap_or(u32::MAX),
            )?);
        }
        if let Some(gender) = &self.gender {
            filter = filter.gender(gender.parse::<Gender>()?);
        }
        Ok(filter)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopQuery {
    pub(crate) metric: String,
    #[serde(default)]
    pub(crate) n: Option<usize>,
    #[serde(default)]
    pub(crate) order: Option<String>,
    #[serde(default)]
    pub(crate) department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) end: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamesQuery {
    pub(crate) department: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) end: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) min_experience: Option<u32>,
    #[serde(default)]
    pub(crate) max_experience: Option<u32>,
}

impl NamesQuery {
    /// Missing sides fall back to the roster bounds, as the dashboard inputs do. A
    /// defaulted side never lands on the wrong side of the one the caller supplied.
    pub(crate) fn selection(
        &self,
        bounds: Option<RosterBounds>,
    ) -> Result<NamesSelection, QueryError> {
        let department = self.department.parse::<Department>()?;

        let joined = match (self.start, self.end) {
            (None, None) => None,
            (start, end) => {
                let (earliest, latest) = bounds.map_or((NaiveDate::MIN, NaiveDate::MAX), |b| {
                    (b.earliest_joining, b.latest_joining)
                });
                Some(DateRange::new(
                    start.unwrap_or_else(|| end.map_or(earliest, |end| earliest.min(end))),
                    end.unwrap_or_else(|| start.map_or(latest, |start| latest.max(start))),
                )?)
            }
        };

        let experience = match (self.min_experience, self.max_experience) {
            (None, None) => None,
            (min, max) => {
                let (lowest, highest) =
                    bounds.map_or((0, u32::MAX), |b| (b.min_experience, b.max_experience));
                Some(ExperienceRange::new(
                    min.unwrap_or_else(|| max.map_or(lowest, |max| lowest.min(max))),
                    max.unwrap_or_else(|| min.map_or(highest, |min| highest.max(min))),
                )?)
            }
        };

        Ok(NamesSelection {
            department,
            joined,
            experience,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SalaryQuery {
    #[serde(default)]
    pub(crate) option: Option<String>,
    #[serde(default)]
    pub(crate) gender: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ComparisonQuery {
    #[serde(default)]
    pub(crate) group_by: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeanQuery {
    pub(crate) group_by: String,
    pub(crate) metric: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmployeesResponse<'a> {
    pub(crate) count: usize,
    pub(crate) employees: Vec<EmployeeRow<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TopResponse<'a> {
    pub(crate) metric: Metric,
    pub(crate) metric_label: &'static str,
    pub(crate) order: SortOrder,
    pub(crate) employees: Vec<EmployeeRow<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MeanResponse {
    pub(crate) group_by: GroupField,
    pub(crate) metric: Metric,
    pub(crate) groups: Vec<GroupMeanEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BoundsResponse {
    pub(crate) as_of: NaiveDate,
    pub(crate) employees: usize,
    pub(crate) departments: Vec<&'static str>,
    pub(crate) bounds: Option<RosterBounds>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/roster/bounds", get(bounds_endpoint))
        .route("/api/v1/employees", get(employees_endpoint))
        .route("/api/v1/employees/top", get(top_employees_endpoint))
        .route("/api/v1/employees/:id", get(employee_endpoint))
        .route("/api/v1/reports/overview", get(overview_endpoint))
        .route("/api/v1/reports/names", get(names_endpoint))
        .route("/api/v1/reports/salary", get(salary_endpoint))
        .route("/api/v1/reports/comparison", get(comparison_endpoint))
        .route("/api/v1/aggregate/mean", get(mean_endpoint))
        .layer(Extension(state))
}

/// Unwraps query parameters, reporting decode failures through the JSON error body.
fn decode<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::Request(rejection.body_text()))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready", "employees": state.roster.len() })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn bounds_endpoint(Extension(state): Extension<AppState>) -> Json<BoundsResponse> {
    let roster = &state.roster;
    Json(BoundsResponse {
        as_of: roster.as_of(),
        employees: roster.len(),
        departments: roster.departments().into_iter().map(Department::label).collect(),
        bounds: roster.bounds(),
    })
}

pub(crate) async fn employees_endpoint(
    Extension(state): Extension<AppState>,
    query: Result<Query<EmployeeQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let filter = decode(query)?.filter()?;
    let employees: Vec<EmployeeRow<'_>> = filter
        .apply(state.roster.records())
        .into_iter()
        .map(EmployeeRow::from)
        .collect();

    let body = EmployeesResponse {
        count: employees.len(),
        employees,
    };
    Ok(Json(body).into_response())
}

pub(crate) async fn top_employees_endpoint(
    Extension(state): Extension<AppState>,
    query: Result<Query<TopQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let params = decode(query)?;
    let metric = params.metric.parse::<Metric>()?;
    let order = params
        .order
        .as_deref()
        .map(str::parse::<SortOrder>)
        .transpose()?
        .unwrap_or_default();
    let n = params.n.unwrap_or(employee_insights::workforce::report::TOP_N);

    let filter = EmployeeQuery {
        department: params.department,
        start: params.start,
        end: params.end,
        ..EmployeeQuery::default()
    }
    .filter()?;

    let subset = filter.apply(state.roster.records());
    let employees = top_n_by(subset, metric, n, order)
        .into_iter()
        .map(EmployeeRow::from)
        .collect();

    let body = TopResponse {
        metric,
        metric_label: metric.label(),
        order,
        employees,
    };
    Ok(Json(body).into_response())
}

pub(crate) async fn employee_endpoint(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = EmployeeId(id);
    let record = state
        .roster
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("employee {id}")))?;
    Ok(Json(EmployeeRow::from(record)).into_response())
}

pub(crate) async fn overview_endpoint(Extension(state): Extension<AppState>) -> Response {
    let report = DashboardReports::new(&state.roster).overview();
    Json(report).into_response()
}

pub(crate) async fn names_endpoint(
    Extension(state): Extension<AppState>,
    query: Result<Query<NamesQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let selection = decode(query)?.selection(state.roster.bounds())?;
    let report = DashboardReports::new(&state.roster).names(selection);
    Ok(Json(report).into_response())
}

pub(crate) async fn salary_endpoint(
    Extension(state): Extension<AppState>,
    query: Result<Query<SalaryQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let params = decode(query)?;
    let gender = params
        .gender
        .as_deref()
        .map(str::parse::<Gender>)
        .transpose()?;
    let view = SalaryView::parse(params.option.as_deref().unwrap_or("general"), gender)?;
    let report = DashboardReports::new(&state.roster).salary(view);
    Ok(Json(report).into_response())
}

pub(crate) async fn comparison_endpoint(
    Extension(state): Extension<AppState>,
    query: Result<Query<ComparisonQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let group_by = decode(query)?
        .group_by
        .as_deref()
        .unwrap_or("department")
        .parse::<GroupField>()?;
    let report = DashboardReports::new(&state.roster).comparison(group_by);
    Ok(Json(report).into_response())
}

pub(crate) async fn mean_endpoint(
    Extension(state): Extension<AppState>,
    query: Result<Query<MeanQuery>, QueryRejection>,
) -> Result<Json<MeanResponse>, AppError> {
    let params = decode(query)?;
    let group_by = params.group_by.parse::<GroupField>()?;
    let metric = params.metric.parse::<Metric>()?;
    let groups = group_mean(state.roster.records(), group_by, metric).entries();

    Ok(Json(MeanResponse {
        group_by,
        metric,
        groups,
    }))
}
