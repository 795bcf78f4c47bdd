use crate::domain::model::LessonTable;
use crate::utils::error::{LessenError, Result};

pub const SUBJECT_HEADER: &str = "VAK";
pub const INTERNSHIP_LABEL: &str = "Stage weken";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

/// Header row, one row per subject, then the internship row if present.
pub fn table_rows(table: &LessonTable) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(table.subjects.len() + 2);

    let mut header = vec![SUBJECT_HEADER.to_string()];
    header.extend(table.class_codes.iter().cloned());
    rows.push(header);

    for subject in &table.subjects {
        let mut row = vec![subject.label.clone()];
        row.extend(subject.hours.iter().cloned());
        rows.push(row);
    }

    if let Some(weeks) = &table.internship_weeks {
        let mut row = vec![INTERNSHIP_LABEL.to_string()];
        row.extend(weeks.iter().cloned());
        rows.push(row);
    }

    rows
}

pub fn export_table(table: &LessonTable, format: ExportFormat) -> Result<String> {
    let delimiter = match format {
        ExportFormat::Json => return Ok(serde_json::to_string_pretty(table)?),
        ExportFormat::Csv => b',',
        ExportFormat::Tsv => b'\t',
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    for row in table_rows(table) {
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|e| LessenError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
