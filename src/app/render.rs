use crate::app::export::table_rows;
use crate::core::normalize::slugify;
use crate::core::session::DetailView;
use crate::domain::model::{Catalog, Grade, LessonTable, Palette, Selection, TableOutcome};
use serde_json::{json, Value};
use std::fmt::Write;

pub const EMPTY_MENU_MESSAGE: &str = "Geen lessentabellen gevonden.";
pub const NO_TABLE_MESSAGE: &str = "Geen lessentabel beschikbaar voor deze richting.";

fn link(grade: Grade, program: &str, domain: &str) -> String {
    Selection {
        grade,
        slug: slugify(program),
        domain: domain.to_string(),
    }
    .fragment()
}

pub fn render_menu(catalog: &Catalog) -> String {
    if catalog.hierarchy.is_empty() {
        return format!("{}\n", EMPTY_MENU_MESSAGE);
    }

    let mut out = String::new();
    for domain in &catalog.hierarchy.domains {
        let _ = writeln!(out, "{}", catalog.label(&domain.key));
        for grade in &domain.grades {
            let _ = writeln!(out, "  {}", grade.grade);
            for track in &grade.tracks {
                let _ = writeln!(out, "    {}", track.name);
                for program in &track.programs {
                    let _ = writeln!(
                        out,
                        "      - {}  {}",
                        program,
                        link(grade.grade, program, &domain.key)
                    );
                }
            }
        }
        out.push('\n');
    }
    out
}

/// The menu as JSON, with the theme colors of each domain.
pub fn menu_document(catalog: &Catalog, palette: &Palette) -> Value {
    let domains: Vec<Value> = catalog
        .hierarchy
        .domains
        .iter()
        .map(|domain| {
            let grades: Vec<Value> = domain
                .grades
                .iter()
                .map(|grade| {
                    let tracks: Vec<Value> = grade
                        .tracks
                        .iter()
                        .map(|track| {
                            let programs: Vec<Value> = track
                                .programs
                                .iter()
                                .map(|p| json!({ "name": p, "link": link(grade.grade, p, &domain.key) }))
                                .collect();
                            json!({ "name": track.name, "programs": programs })
                        })
                        .collect();
                    json!({ "grade": grade.grade, "tracks": tracks })
                })
                .collect();

            json!({
                "key": domain.key,
                "label": catalog.label(&domain.key),
                "colors": palette.get(&domain.key),
                "grades": grades,
            })
        })
        .collect();

    json!({ "domains": domains })
}

pub fn render_table(table: &LessonTable) -> String {
    let rows = table_rows(table);
    let columns = rows.first().map(Vec::len).unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|r| r.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                if col == 0 {
                    format!("{:<width$}", cell, width = *width)
                } else {
                    format!("{:>width$}", cell, width = *width)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" | ").trim_end());

        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            let _ = writeln!(out, "{}", rule.join("-+-"));
        }
    }
    out
}

pub fn render_detail(view: &DetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}  {}", view.selection.grade, view.fragment);
    if !view.description.is_empty() {
        let _ = writeln!(out, "\n{}", view.description);
    }
    if let Some(brochure) = &view.brochure {
        let _ = writeln!(out, "Brochure: {}", brochure);
    }
    out.push('\n');

    match &view.table {
        TableOutcome::NoData => {
            let _ = writeln!(out, "{}", NO_TABLE_MESSAGE);
        }
        TableOutcome::Table(table) => {
            out.push_str(&render_table(table));
            if let Some(notes) = table.footnote_text() {
                let _ = writeln!(out, "\n{}", notes);
            }
        }
    }

    let _ = writeln!(out, "\nAfgedrukt op: {}", view.printed_on);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hierarchy::build_catalog;
    use crate::domain::model::{columns, ProgramMetadata, RowRecord, SubjectRow};

    #[test]
    fn test_empty_menu_message() {
        assert_eq!(render_menu(&Catalog::default()), "Geen lessentabellen gevonden.\n");
    }

    #[test]
    fn test_menu_lists_links() {
        let rows = vec![RowRecord::default()
            .with(columns::DOMAIN, "STEM")
            .with(columns::GRADE, "2de jaar")
            .with(columns::TRACK, "Doorstroom")
            .with(columns::TITLE, "Wetenschappen")];
        let catalog = build_catalog(&rows);

        let menu = render_menu(&catalog);
        assert!(menu.starts_with("STEM\n  TWEEDE GRAAD\n    Doorstroom\n"));
        assert!(menu.contains("- Wetenschappen  #tweede-graad-wetenschappen"));

        let doc = menu_document(&catalog, &crate::config::palette::default_palette());
        assert_eq!(doc["domains"][0]["colors"]["base"], "#0A7254");
        assert_eq!(doc["domains"][0]["grades"][0]["grade"], "TWEEDE GRAAD");
    }

    #[test]
    fn test_table_keeps_blank_cells_blank() {
        let table = LessonTable {
            class_codes: vec!["3A".to_string(), "4A".to_string()],
            subjects: vec![SubjectRow {
                label: "Wiskunde".to_string(),
                hours: vec!["0".to_string(), "".to_string()],
            }],
            internship_weeks: None,
            footnotes: vec![],
            metadata: ProgramMetadata::default(),
        };

        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "VAK      | 3A | 4A");
        assert_eq!(lines[1], "---------+----+---");
        assert_eq!(lines[2], "Wiskunde |  0 |");
    }

    #[test]
    fn test_detail_without_table() {
        let view = DetailView {
            selection: Selection {
                grade: Grade::Third,
                slug: "onbestaand".to_string(),
                domain: String::new(),
            },
            fragment: "#derde-graad-onbestaand".to_string(),
            title: "Onbekend".to_string(),
            description: String::new(),
            brochure: None,
            colors: None,
            table: TableOutcome::NoData,
            printed_on: "01/01/2025".to_string(),
        };

        let text = render_detail(&view);
        assert!(text.starts_with("Onbekend\nDERDE GRAAD  #derde-graad-onbestaand\n"));
        assert!(text.contains("\nGeen lessentabel beschikbaar voor deze richting.\n"));
        assert!(!text.contains("VAK"));
        assert!(text.ends_with("Afgedrukt op: 01/01/2025\n"));
    }
}
