use crate::domain::model::RowRecord;

pub const FIELD_SEPARATOR: char = ';';

/// Parses `;`-separated text whose first line is the header.
///
/// Every line after the header becomes one record carrying every header
/// column; values missing at the end of a line read as `""` and surplus values
/// are dropped. There is no quoting, so a `;` inside a value always splits it.
pub fn parse_dataset(text: &str) -> Vec<RowRecord> {
    let mut lines = text.trim().split('\n');

    let headers: Vec<&str> = match lines.next() {
        Some(line) => line.split(FIELD_SEPARATOR).map(str::trim).collect(),
        None => return Vec::new(),
    };

    let records: Vec<RowRecord> = lines
        .map(|line| {
            let values: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| (*header, values.get(i).copied().unwrap_or("")))
                .collect()
        })
        .collect();

    tracing::debug!(
        "Parsed {} records with {} columns",
        records.len(),
        headers.len()
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_dataset() {
        let text = "domein;graad;titel\nSTEM;2de jaar;Wetenschappen\nOKAN;3de jaar;Onthaal\n";
        let rows = parse_dataset(text);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("domein"), "STEM");
        assert_eq!(rows[1].get("titel"), "Onthaal");
    }

    #[test]
    fn test_headers_and_values_are_trimmed() {
        let text = " domein ; titel \r\n  STEM ;  Wetenschappen \r\n";
        let rows = parse_dataset(text);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("domein"), "STEM");
        assert_eq!(rows[0].get("titel"), "Wetenschappen");
    }

    #[test]
    fn test_missing_trailing_columns_default_to_empty() {
        let rows = parse_dataset("a;b;c\n1\n1;2;3;4");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].data.len(), 3);
        assert_eq!(rows[0].get("a"), "1");
        assert_eq!(rows[0].data.get("b").map(String::as_str), Some(""));
        assert_eq!(rows[0].data.get("c").map(String::as_str), Some(""));
        assert_eq!(rows[1].get("c"), "3");
        assert_eq!(rows[1].data.len(), 3);
    }

    #[test]
    fn test_record_count_is_line_count_minus_header() {
        let text = "x;y\n1;2\n\n3;4";
        let rows = parse_dataset(text);

        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert!(row.data.contains_key("x"));
            assert!(row.data.contains_key("y"));
        }
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_dataset("").is_empty());
        assert!(parse_dataset("   \n  ").is_empty());
        assert!(parse_dataset("domein;graad").is_empty());
    }
}
