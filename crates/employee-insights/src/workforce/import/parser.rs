use super::super::domain::{
    Department, EmployeeId, EmployeeRecord, EmploymentStatus, Gender, PerformanceRating,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) enum ParseError {
    Csv(csv::Error),
    Row { line: u64, reason: String },
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub(crate) fn parse_records<R: Read>(mut reader: R) -> Result<Vec<EmployeeRecord>, ParseError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(csv::Error::from)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_slice());
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for result in csv_reader.records() {
        let raw = result?;
        let line = raw
            .position()
            .map_or(records.len() as u64 + 2, |position| record_line(&data, position));
        let row: EmployeeRow = raw.deserialize(Some(&headers))?;
        let record = row
            .into_record()
            .map_err(|reason| ParseError::Row { line, reason })?;
        records.push(record);
    }

    Ok(records)
}

/// Line where a record's first field starts.
///
/// The reader stamps each record with the position where it began scanning, which sits
/// before any blank lines it skipped on the way to the record.
fn record_line(data: &[u8], position: &csv::Position) -> u64 {
    let start = usize::try_from(position.byte())
        .unwrap_or(data.len())
        .min(data.len());
    let skipped = data[start..]
        .iter()
        .take_while(|&&byte| byte == b'\r' || byte == b'\n')
        .filter(|&&byte| byte == b'\n')
        .count();
    position.line() + skipped as u64
}

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "Employee_ID")]
    employee_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Salary")]
    salary: u32,
    #[serde(rename = "Years_Experience")]
    years_experience: u32,
    #[serde(rename = "Joining_Date")]
    joining_date: String,
    #[serde(rename = "Performance_Rating")]
    performance_rating: u8,
    #[serde(rename = "Leaves_Taken")]
    leaves_taken: u32,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Gender")]
    gender: String,
}

impl EmployeeRow {
    fn into_record(self) -> Result<EmployeeRecord, String> {
        if self.employee_id.is_empty() {
            return Err("Employee_ID is empty".to_string());
        }

        let department = self
            .department
            .parse::<Department>()
            .map_err(|err| err.to_string())?;
        let status = self
            .status
            .parse::<EmploymentStatus>()
            .map_err(|err| err.to_string())?;
        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|err| err.to_string())?;
        let joining_date = parse_date(&self.joining_date)
            .ok_or_else(|| format!("Joining_Date '{}' is not YYYY-MM-DD", self.joining_date))?;
        let performance_rating =
            PerformanceRating::new(self.performance_rating).ok_or_else(|| {
                format!(
                    "Performance_Rating {} is outside {}..={}",
                    self.performance_rating,
                    PerformanceRating::MIN,
                    PerformanceRating::MAX
                )
            })?;

        Ok(EmployeeRecord {
            id: EmployeeId(self.employee_id),
            name: normalize_name(&self.name),
            department,
            salary: self.salary,
            years_experience: self.years_experience,
            joining_date,
            performance_rating,
            leaves_taken: self.leaves_taken,
            status,
            gender,
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            // Spreadsheet exports often carry a midnight timestamp.
            trimmed
                .split_once([' ', 'T'])
                .and_then(|(date, _)| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        })
}

fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
