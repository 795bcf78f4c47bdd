use crate::core::normalize::normalize_domain;
use crate::core::projector::row_matches;
use crate::domain::model::{columns, Grade, RowRecord, Selection};

/// Splits `#tweede-graad-<slug>` / `derde-graad-<slug>` into grade and slug.
pub fn parse_fragment(fragment: &str) -> Option<(Grade, String)> {
    let body = fragment.strip_prefix('#').unwrap_or(fragment);
    if body.is_empty() {
        return None;
    }

    Grade::ALL.into_iter().find_map(|grade| {
        body.strip_prefix(grade.slug())
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|slug| !slug.is_empty())
            .map(|slug| (grade, slug.to_string()))
    })
}

/// Normalized domain of the first row of a program, if it has any rows.
pub fn program_domain(rows: &[RowRecord], grade: Grade, slug: &str) -> Option<String> {
    rows.iter()
        .find(|r| row_matches(r, grade, slug))
        .map(|row| normalize_domain(row.get(columns::DOMAIN)))
}

/// Finds the program a fragment points at. The domain comes from the first
/// matching row.
pub fn resolve_fragment(rows: &[RowRecord], fragment: &str) -> Option<Selection> {
    let (grade, slug) = parse_fragment(fragment)?;
    let domain = program_domain(rows, grade, &slug)?;

    Some(Selection {
        grade,
        domain,
        slug,
    })
}
