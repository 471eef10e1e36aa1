//! Channel matrix: operators x charterers yes/no table.
//!
//! # Responsibility
//! - Read the first worksheet of a workbook into string cells.
//! - Partition operators into yes/no sets for one charterer column.
//! - Detect header changes between successive loads.
//!
//! # Invariants
//! - The first column is the operator, whatever its header says.
//! - Charterer columns are found by label.
//! - Only cells equal to `YES`/`NO` after uppercasing are classified.
//! - Rows with an empty operator are dropped.

use calamine::{open_workbook_auto, Data, Reader};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Matrix read or lookup failure.
#[derive(Debug)]
pub enum MatrixError {
    /// Workbook could not be opened or parsed.
    Workbook(calamine::Error),
    /// Workbook has no worksheet.
    NoWorksheet,
    /// First worksheet has no header row.
    Empty,
    /// No column carries this charterer label.
    UnknownCharterer(String),
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Workbook(err) => write!(f, "{err}"),
            Self::NoWorksheet => write!(f, "workbook has no worksheet"),
            Self::Empty => write!(f, "first worksheet is empty"),
            Self::UnknownCharterer(label) => write!(f, "unknown charterer column `{label}`"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Workbook(err) => Some(err),
            _ => None,
        }
    }
}

impl From<calamine::Error> for MatrixError {
    fn from(value: calamine::Error) -> Self {
        Self::Workbook(value)
    }
}

/// Operators split by their answer for one charterer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixPartition {
    /// Operators marked `YES`, in sheet order.
    pub yes: Vec<String>,
    /// Operators marked `NO`, in sheet order.
    pub no: Vec<String>,
}

/// String-typed snapshot of the matrix sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMatrix {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ChannelMatrix {
    /// Builds a matrix from a header row and data rows.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, MatrixError> {
        if header.is_empty() {
            return Err(MatrixError::Empty);
        }
        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Charterer labels: every header after the operator column.
    pub fn charterers(&self) -> &[String] {
        &self.header[1..]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Splits operators by the `YES`/`NO` answer in `charterer`'s column.
    pub fn partition(&self, charterer: &str) -> Result<MatrixPartition, MatrixError> {
        let column = self
            .header
            .iter()
            .skip(1)
            .position(|label| label == charterer)
            .map(|offset| offset + 1)
            .ok_or_else(|| MatrixError::UnknownCharterer(charterer.to_string()))?;

        let mut partition = MatrixPartition::default();
        for row in &self.rows {
            let operator = row.first().map(String::as_str).unwrap_or("");
            if operator.is_empty() {
                continue;
            }
            let answer = row.get(column).map(|cell| cell.to_uppercase());
            match answer.as_deref() {
                Some("YES") => partition.yes.push(operator.to_string()),
                Some("NO") => partition.no.push(operator.to_string()),
                _ => {}
            }
        }
        Ok(partition)
    }
}

/// Reads the first worksheet of the workbook at `path`.
pub fn load_matrix(path: &Path) -> Result<ChannelMatrix, MatrixError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(MatrixError::NoWorksheet)??;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .ok_or(MatrixError::Empty)?
        .iter()
        .enumerate()
        .map(|(index, cell)| match cell_text(cell) {
            label if label.is_empty() => format!("Unnamed: {index}"),
            label => label,
        })
        .collect();
    let rows: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    info!(
        "event=matrix_load module=reference status=ok columns={} rows={}",
        header.len(),
        rows.len()
    );
    ChannelMatrix::new(header, rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Remembers the last seen header to flag schema drift between loads.
#[derive(Debug, Clone, Default)]
pub struct MatrixSchemaTracker {
    last_header: Option<Vec<String>>,
}

impl MatrixSchemaTracker {
    /// Records `header`; returns `true` when it differs from the previous one.
    ///
    /// The first observation never counts as a change.
    pub fn observe(&mut self, header: &[String]) -> bool {
        let changed = self
            .last_header
            .as_deref()
            .is_some_and(|previous| previous != header);
        if changed {
            warn!(
                "event=matrix_schema_changed module=reference status=warn columns={}",
                header.len()
            );
        }
        self.last_header = Some(header.to_vec());
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelMatrix, MatrixError, MatrixSchemaTracker};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn sample() -> ChannelMatrix {
        ChannelMatrix::new(
            strings(&["Owner", "CharterA", "CharterB"]),
            vec![
                strings(&["X", "yes", "NO"]),
                strings(&["Y", "No", ""]),
                strings(&["", "YES", "YES"]),
                strings(&["Z", "maybe", "Yes"]),
                strings(&["W", " yes", "no"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn partition_is_case_insensitive_and_drops_blank_operators() {
        let partition = sample().partition("CharterA").unwrap();
        assert_eq!(partition.yes, vec!["X"]);
        assert_eq!(partition.no, vec!["Y"]);
    }

    #[test]
    fn other_values_are_excluded_from_both_sides() {
        let partition = sample().partition("CharterB").unwrap();
        assert_eq!(partition.yes, vec!["Z"]);
        assert_eq!(partition.no, vec!["X", "W"]);
    }

    #[test]
    fn operator_column_is_not_a_charterer() {
        let matrix = sample();
        assert_eq!(matrix.charterers(), &strings(&["CharterA", "CharterB"])[..]);
        assert!(matches!(
            matrix.partition("Owner"),
            Err(MatrixError::UnknownCharterer(_))
        ));
    }

    #[test]
    fn schema_tracker_flags_only_real_changes() {
        let mut tracker = MatrixSchemaTracker::default();
        let first = strings(&["Operator", "A"]);
        let second = strings(&["Operator", "A", "B"]);
        assert!(!tracker.observe(&first));
        assert!(!tracker.observe(&first));
        assert!(tracker.observe(&second));
        assert!(!tracker.observe(&second));
    }

    #[test]
    fn empty_header_is_rejected() {
        assert!(matches!(
            ChannelMatrix::new(Vec::new(), Vec::new()),
            Err(MatrixError::Empty)
        ));
    }
}
