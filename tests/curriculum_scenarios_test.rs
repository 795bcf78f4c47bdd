use lessentabellen::core::normalize::{normalize_domain, slugify};
use lessentabellen::{build_catalog, parse_dataset, project_program, Grade, TableOutcome};

const DATASET: &str = "\
domein;graad;finaliteit;titel;code;label;uren;stage_weken;voetnoten;beschrijving;brochure
STEM;2de jaar;Doorstroom;Wetenschappen;3WE;Wiskunde;5;;;Sterke wiskunde;https://example.com/we.pdf
STEM;2de jaar;Doorstroom;Wetenschappen;4WE;Wiskunde;5;;* inclusief labo;;
STEM;2de jaar;Doorstroom;Wetenschappen;4WE;Fysica;0;;;;
STEM;3de jaar;Doorstroom;Wetenschappen;5WE;Wiskunde;6;;;;
Topsport Voetbal;3de jaar;Doorstroom;Sport/Wetenschappen;5TS;Sport;8;2;;;
Economie en Organisatie;3de jaar;Dubbele finaliteit;Bedrijfsorganisatie;5BO;Economie;6;;;;
;2de jaar;Doorstroom;Zonder domein;3X;Wiskunde;4;;;;
OKAN;onthaaljaar;Onthaal;Okan;OK;Nederlands;20;;;;
";

/// Single-row dataset: one domain, one program, one cell.
#[test]
fn test_single_row_scenario() {
    let text = "domein;graad;finaliteit;titel;code;label;uren\nSTEM;2de jaar;Doorstroom;Wetenschappen;2A;Wiskunde;5";
    let rows = parse_dataset(text);
    let catalog = build_catalog(&rows);

    assert_eq!(catalog.hierarchy.domains.len(), 1);
    let stem = catalog.hierarchy.domain("stem").unwrap();
    assert_eq!(stem.grades.len(), 1);
    assert_eq!(
        catalog.hierarchy.programs("stem", Grade::Second, "Doorstroom"),
        Some(&["Wetenschappen".to_string()][..])
    );

    let outcome = project_program(&rows, Grade::Second, "wetenschappen");
    let table = outcome.table().expect("program has rows");
    assert_eq!(table.class_codes, vec!["2A"]);
    assert_eq!(table.subjects.len(), 1);
    assert_eq!(table.subjects[0].label, "Wiskunde");
    assert_eq!(table.subjects[0].hours, vec!["5"]);
    assert_eq!(table.internship_weeks, None);
    assert_eq!(table.footnote_text(), None);
}

#[test]
fn test_domain_folding() {
    assert_eq!(normalize_domain("Economie en Organisatie"), "economie-organisatie");
    assert_eq!(normalize_domain("Topsport Voetbal"), "topsport");
}

#[test]
fn test_full_dataset_catalog() {
    let rows = parse_dataset(DATASET);
    assert_eq!(rows.len(), 8);

    let catalog = build_catalog(&rows);
    let keys: Vec<&str> = catalog
        .hierarchy
        .domains
        .iter()
        .map(|d| d.key.as_str())
        .collect();
    assert_eq!(keys, vec!["stem", "topsport", "economie-organisatie"]);

    // same program in two grades is listed under each
    assert!(catalog
        .hierarchy
        .programs("stem", Grade::Third, "Doorstroom")
        .unwrap()
        .contains(&"Wetenschappen".to_string()));
    assert_eq!(
        catalog
            .hierarchy
            .programs("stem", Grade::Second, "Doorstroom")
            .unwrap()
            .len(),
        1
    );

    assert_eq!(catalog.label("topsport"), "TOPSPORT VOETBAL");
    // OKAN has no 2nd/3rd grade row: labelled but not in the menu
    assert_eq!(catalog.label("okan"), "OKAN");
    assert!(catalog.hierarchy.domain("okan").is_none());
}

#[test]
fn test_projection_per_grade() {
    let rows = parse_dataset(DATASET);

    let second = project_program(&rows, Grade::Second, "wetenschappen");
    let table = second.table().unwrap();
    assert_eq!(table.class_codes, vec!["3WE", "4WE"]);
    assert_eq!(table.cell("Fysica", "3WE"), Some(""));
    assert_eq!(table.cell("Fysica", "4WE"), Some("0"));
    assert_eq!(table.footnotes, vec!["* inclusief labo"]);
    assert_eq!(table.metadata.description, "Sterke wiskunde");
    assert_eq!(
        table.metadata.brochure.as_deref(),
        Some("https://example.com/we.pdf")
    );

    let third = project_program(&rows, Grade::Third, "wetenschappen");
    assert_eq!(third.table().unwrap().class_codes, vec!["5WE"]);
}

#[test]
fn test_slash_in_title_matches_slug() {
    let rows = parse_dataset(DATASET);
    let slug = slugify("Sport/Wetenschappen");
    assert_eq!(slug, "sport-wetenschappen");

    let outcome = project_program(&rows, Grade::Third, &slug);
    let table = outcome.table().unwrap();
    assert_eq!(table.internship_weeks, Some(vec!["2".to_string()]));
}

#[test]
fn test_unknown_program_is_no_data() {
    let rows = parse_dataset(DATASET);
    assert_eq!(
        project_program(&rows, Grade::Second, "bedrijfsorganisatie"),
        TableOutcome::NoData
    );
}
