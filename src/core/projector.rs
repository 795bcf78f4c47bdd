use crate::core::normalize::slugify;
use crate::domain::model::{
    columns, Grade, LessonTable, ProgramMetadata, RowRecord, SubjectRow, TableOutcome,
};

/// Rows of the program whose title slugs to `slug` within `grade`.
pub fn program_slice<'a>(rows: &'a [RowRecord], grade: Grade, slug: &str) -> Vec<&'a RowRecord> {
    rows.iter()
        .filter(|r| row_matches(r, grade, slug))
        .collect()
}

pub(crate) fn row_matches(row: &RowRecord, grade: Grade, slug: &str) -> bool {
    Grade::classify(row.get(columns::GRADE)) == Some(grade) && slugify(row.get(columns::TITLE)) == slug
}

/// Builds the weekly-hours table of one program.
///
/// Columns are the class codes and rows the subjects, both in first-seen
/// order. A (subject, class) pair without a row stays `""` so that it never
/// reads as zero hours.
pub fn project_program(rows: &[RowRecord], grade: Grade, slug: &str) -> TableOutcome {
    let slice = program_slice(rows, grade, slug);
    let Some(first) = slice.first() else {
        tracing::debug!("No rows for {} / {}", grade, slug);
        return TableOutcome::NoData;
    };

    let class_codes = distinct(slice.iter().map(|r| r.get(columns::CLASS_CODE)));
    let subject_labels = distinct(slice.iter().map(|r| r.get(columns::SUBJECT)));

    let subjects = subject_labels
        .into_iter()
        .map(|label| {
            let hours = class_codes
                .iter()
                .map(|code| {
                    slice
                        .iter()
                        .find(|r| r.get(columns::CLASS_CODE) == code && r.get(columns::SUBJECT) == label)
                        .map(|r| r.get(columns::HOURS).to_string())
                        .unwrap_or_default()
                })
                .collect();
            SubjectRow { label, hours }
        })
        .collect();

    let has_internship = slice.iter().any(|r| {
        let weeks = r.get(columns::INTERNSHIP_WEEKS);
        !weeks.trim().is_empty() && weeks != "0"
    });
    let internship_weeks = has_internship.then(|| {
        class_codes
            .iter()
            .map(|code| {
                slice
                    .iter()
                    .find(|r| r.get(columns::CLASS_CODE) == code)
                    .map(|r| r.get(columns::INTERNSHIP_WEEKS).to_string())
                    .unwrap_or_default()
            })
            .collect()
    });

    let footnotes = distinct(
        slice
            .iter()
            .map(|r| r.get(columns::FOOTNOTES).trim())
            .filter(|note| !note.is_empty()),
    );

    let brochure = first.get(columns::BROCHURE);
    let metadata = ProgramMetadata {
        title: first.get(columns::TITLE).to_string(),
        description: first.get(columns::DESCRIPTION).to_string(),
        brochure: (!brochure.is_empty()).then(|| brochure.to_string()),
    };

    TableOutcome::Table(LessonTable {
        class_codes,
        subjects,
        internship_weeks,
        footnotes,
        metadata,
    })
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}
