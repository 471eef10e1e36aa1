//! Channel matrix panel.
//!
//! # Invariants
//! - The workbook is re-read on every action.
//! - Read, parse and lookup failures become warnings; the panel stays usable.

use crate::panel::PanelResponse;
use crate::reference::matrix::{load_matrix, ChannelMatrix, MatrixError, MatrixSchemaTracker};
use log::warn;
use std::path::{Path, PathBuf};

/// Operator actions of the channel matrix panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixAction {
    /// List the charterer columns.
    Charterers,
    /// Split operators for one charterer; `None` picks the first column.
    Partition { charterer: Option<String> },
}

/// Channel matrix panel state.
pub struct ChannelMatrixPanel {
    path: PathBuf,
    schema: MatrixSchemaTracker,
}

impl ChannelMatrixPanel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            schema: MatrixSchemaTracker::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Performs `action` against a fresh read of the workbook.
    pub fn handle(&mut self, action: MatrixAction) -> PanelResponse {
        let matrix = match load_matrix(&self.path) {
            Ok(matrix) => matrix,
            Err(err) => return load_failed(&err),
        };
        let schema_changed = self.schema.observe(matrix.header());

        let response = match action {
            MatrixAction::Charterers => PanelResponse::info(format!(
                "{} charterers",
                matrix.charterers().len()
            ))
            .with_lines(matrix.charterers().to_vec()),
            MatrixAction::Partition { charterer } => partition_response(&matrix, charterer),
        };

        if schema_changed && response.is_ok() {
            let mut warned = PanelResponse::warning(format!(
                "Matrix columns changed since the last load. {}",
                response.message
            ));
            warned.lines = response.lines;
            return warned;
        }
        response
    }
}

/// Renders the yes/no split for `charterer` (or the first charterer).
pub fn partition_response(matrix: &ChannelMatrix, charterer: Option<String>) -> PanelResponse {
    let charterer = match charterer.or_else(|| matrix.charterers().first().cloned()) {
        Some(charterer) => charterer,
        None => return PanelResponse::warning("Matrix has no charterer columns."),
    };

    let partition = match matrix.partition(&charterer) {
        Ok(partition) => partition,
        Err(err) => return load_failed(&err),
    };

    let mut lines = Vec::with_capacity(partition.yes.len() + partition.no.len() + 2);
    lines.push(format!("Operators who work with us ({}):", partition.yes.len()));
    lines.extend(partition.yes.iter().map(|operator| format!("  {operator}")));
    lines.push(format!(
        "Operators who don't work with us ({}):",
        partition.no.len()
    ));
    lines.extend(partition.no.iter().map(|operator| format!("  {operator}")));

    PanelResponse::info(format!("Charterer: {charterer}")).with_lines(lines)
}

fn load_failed(err: &MatrixError) -> PanelResponse {
    warn!(
        "event=matrix_panel module=panel status=warn error={}",
        err
    );
    PanelResponse::warning(format!("Matrix load failed: {err}"))
}
