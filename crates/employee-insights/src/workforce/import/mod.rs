mod parser;

use super::roster::{EmployeeRoster, RosterError};
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;
use tracing::info;

use parser::ParseError;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: u64, reason: String },
    Roster(RosterError),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::Row { line, reason } => {
                write!(f, "invalid roster row on line {}: {}", line, reason)
            }
            RosterImportError::Roster(err) => write!(f, "roster rejected: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::Row { .. } => None,
            RosterImportError::Roster(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<RosterError> for RosterImportError {
    fn from(err: RosterError) -> Self {
        Self::Roster(err)
    }
}

impl From<ParseError> for RosterImportError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Csv(err) => Self::Csv(err),
            ParseError::Row { line, reason } => Self::Row { line, reason },
        }
    }
}

/// Loads a roster from a CSV export with the dashboard's column headers.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        as_of: NaiveDate,
    ) -> Result<EmployeeRoster, RosterImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let roster = Self::from_reader(file, as_of)?;
        info!(
            path = %path.as_ref().display(),
            employees = roster.len(),
            "loaded employee roster"
        );
        Ok(roster)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        as_of: NaiveDate,
    ) -> Result<EmployeeRoster, RosterImportError> {
        let records = parser::parse_records(reader)?;
        Ok(EmployeeRoster::new(records, as_of)?)
    }
}
