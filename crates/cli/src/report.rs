use anyhow::Result;
use kernel::model::marker::MarkerPair;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// The marker pairs found in one analyzed file.
#[derive(Clone, Deserialize, Debug, Serialize, Eq, PartialEq)]
pub struct FileReport {
    pub path: String,
    pub pairs: Vec<MarkerPair>,
}

pub fn generate_json_report(reports: &[FileReport]) -> Result<String> {
    let json = serde_json::to_string_pretty(reports)?;
    Ok(json)
}

pub fn generate_text_report(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        for pair in &report.pairs {
            let _ = writeln!(
                out,
                "{}: start (line: {}, col: {}) -> end (line: {}, col: {})",
                report.path,
                pair.start.position.line,
                pair.start.position.col,
                pair.end.position.line,
                pair.end.position.col
            );
        }
    }
    out
}
