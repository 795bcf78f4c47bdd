use crate::core::normalize::normalize_domain;
use crate::domain::model::{
    columns, Catalog, DomainNode, Grade, GradeNode, Hierarchy, RowRecord, TrackNode,
};
use std::collections::HashSet;

/// Groups rows into domain → grade → track → programs.
///
/// Rows without a domain, a recognizable grade, a track or a program name are
/// left out without complaint. A program is listed once per
/// (domain, grade, track); later duplicates are ignored.
pub fn build_catalog(rows: &[RowRecord]) -> Catalog {
    let mut catalog = Catalog::default();
    let mut seen: HashSet<(String, Grade, String, String)> = HashSet::new();
    let mut skipped = 0usize;

    for row in rows {
        let raw_domain = row.get(columns::DOMAIN).trim();
        if raw_domain.is_empty() {
            skipped += 1;
            continue;
        }

        let domain = normalize_domain(raw_domain);
        catalog
            .labels
            .entry(domain.clone())
            .or_insert_with(|| raw_domain.to_uppercase());

        let Some(grade) = Grade::classify(row.get(columns::GRADE).trim()) else {
            skipped += 1;
            continue;
        };

        let track = row.get(columns::TRACK).trim();
        let program = row.get(columns::TITLE).trim();
        if domain.is_empty() || track.is_empty() || program.is_empty() {
            skipped += 1;
            continue;
        }

        let key = (
            domain.clone(),
            grade,
            track.to_string(),
            program.to_string(),
        );
        if !seen.insert(key) {
            continue;
        }

        insert_program(&mut catalog.hierarchy, &domain, grade, track, program);
    }

    if skipped > 0 {
        tracing::debug!("Left {} incomplete rows out of the menu", skipped);
    }
    tracing::debug!(
        "Built catalog with {} domains",
        catalog.hierarchy.domains.len()
    );

    catalog
}

fn insert_program(hierarchy: &mut Hierarchy, domain: &str, grade: Grade, track: &str, program: &str) {
    let domain_idx = match hierarchy.domains.iter().position(|d| d.key == domain) {
        Some(idx) => idx,
        None => {
            hierarchy.domains.push(DomainNode {
                key: domain.to_string(),
                grades: Vec::new(),
            });
            hierarchy.domains.len() - 1
        }
    };
    let grades = &mut hierarchy.domains[domain_idx].grades;

    let grade_idx = match grades.binary_search_by(|g| g.grade.cmp(&grade)) {
        Ok(idx) => idx,
        Err(idx) => {
            grades.insert(
                idx,
                GradeNode {
                    grade,
                    tracks: Vec::new(),
                },
            );
            idx
        }
    };
    let tracks = &mut grades[grade_idx].tracks;

    match tracks.iter_mut().find(|t| t.name == track) {
        Some(node) => node.programs.push(program.to_string()),
        None => tracks.push(TrackNode {
            name: track.to_string(),
            programs: vec![program.to_string()],
        }),
    }
}
