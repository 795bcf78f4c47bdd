use crate::domain::model::{DomainColors, Palette};

fn colors(base: &str, mid: &str, light1: &str, hover: &str) -> DomainColors {
    DomainColors {
        base: base.to_string(),
        mid: mid.to_string(),
        light1: light1.to_string(),
        hover: hover.to_string(),
    }
}

/// Theme colors per normalized domain key.
pub fn default_palette() -> Palette {
    Palette::from([
        ("stem".to_string(), colors("#0A7254", "#48A787", "#F5FDFB", "#E4F5F0")),
        ("topsport".to_string(), colors("#0A6180", "#1B88AE", "#F5FBFE", "#E4F3F7")),
        ("eerste-graad".to_string(), colors("#D14213", "#F3764A", "#FEF8F5", "#FAEDE7")),
        (
            "maatschappij-welzijn".to_string(),
            colors("#C4387A", "#E399BB", "#FDF6F9", "#F9EAF2"),
        ),
        (
            "economie-organisatie".to_string(),
            colors("#1A2F6E", "#2D54AE", "#F6F8FD", "#EAF0F9"),
        ),
        ("schakeljaar".to_string(), colors("#18306F", "#2F56B0", "#F6F8FD", "#EAF0F9")),
        ("okan".to_string(), colors("#C68212", "#E5A021", "#FEF9F2", "#FCF1E2")),
    ])
}
