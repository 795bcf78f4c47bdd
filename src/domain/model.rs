use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Column names of the published dataset.
pub mod columns {
    pub const DOMAIN: &str = "domein";
    pub const GRADE: &str = "graad";
    pub const TRACK: &str = "finaliteit";
    pub const TITLE: &str = "titel";
    pub const CLASS_CODE: &str = "code";
    pub const SUBJECT: &str = "label";
    pub const HOURS: &str = "uren";
    pub const INTERNSHIP_WEEKS: &str = "stage_weken";
    pub const FOOTNOTES: &str = "voetnoten";
    pub const DESCRIPTION: &str = "beschrijving";
    pub const BROCHURE: &str = "brochure";
}

/// One dataset row. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRecord {
    pub data: HashMap<String, String>,
}

impl RowRecord {
    /// Value of `column`, or `""` when the row has no such column.
    pub fn get(&self, column: &str) -> &str {
        self.data.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.data.insert(column.to_string(), value.to_string());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "TWEEDE GRAAD")]
    Second,
    #[serde(rename = "DERDE GRAAD")]
    Third,
}

impl Grade {
    pub const ALL: [Grade; 2] = [Grade::Second, Grade::Third];

    /// Classifies a raw `graad` value. The 2nd-grade marker wins when both occur.
    pub fn classify(raw: &str) -> Option<Grade> {
        let lowered = raw.to_lowercase();
        if lowered.contains("2de") {
            Some(Grade::Second)
        } else if lowered.contains("3de") {
            Some(Grade::Third)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Second => "TWEEDE GRAAD",
            Grade::Third => "DERDE GRAAD",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Grade::Second => "tweede-graad",
            Grade::Third => "derde-graad",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Grade> {
        Grade::ALL.into_iter().find(|g| g.slug() == slug)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackNode {
    pub name: String,
    pub programs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeNode {
    pub grade: Grade,
    pub tracks: Vec<TrackNode>,
}

impl GradeNode {
    pub fn track(&self, name: &str) -> Option<&TrackNode> {
        self.tracks.iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainNode {
    pub key: String,
    pub grades: Vec<GradeNode>,
}

impl DomainNode {
    pub fn grade(&self, grade: Grade) -> Option<&GradeNode> {
        self.grades.iter().find(|g| g.grade == grade)
    }
}

/// domain → grade → track → programs. Domains and tracks keep first-seen
/// order, grades are kept second-before-third.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub domains: Vec<DomainNode>,
}

impl Hierarchy {
    pub fn domain(&self, key: &str) -> Option<&DomainNode> {
        self.domains.iter().find(|d| d.key == key)
    }

    pub fn programs(&self, domain: &str, grade: Grade, track: &str) -> Option<&[String]> {
        self.domain(domain)?
            .grade(grade)?
            .track(track)
            .map(|t| t.programs.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Hierarchy plus the display label of every normalized domain key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub hierarchy: Hierarchy,
    pub labels: HashMap<String, String>,
}

impl Catalog {
    pub fn label<'a>(&'a self, domain: &'a str) -> &'a str {
        self.labels.get(domain).map(String::as_str).unwrap_or(domain)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramMetadata {
    pub title: String,
    pub description: String,
    pub brochure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRow {
    pub label: String,
    /// One cell per class code; `""` means not offered, which is not `"0"`.
    pub hours: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonTable {
    pub class_codes: Vec<String>,
    pub subjects: Vec<SubjectRow>,
    pub internship_weeks: Option<Vec<String>>,
    pub footnotes: Vec<String>,
    pub metadata: ProgramMetadata,
}

pub const FOOTNOTE_SEPARATOR: &str = " · ";

impl LessonTable {
    pub fn cell(&self, subject: &str, class_code: &str) -> Option<&str> {
        let col = self.class_codes.iter().position(|c| c == class_code)?;
        self.subjects
            .iter()
            .find(|s| s.label == subject)
            .and_then(|s| s.hours.get(col))
            .map(String::as_str)
    }

    /// `None` when there is nothing to show.
    pub fn footnote_text(&self) -> Option<String> {
        if self.footnotes.is_empty() {
            None
        } else {
            Some(self.footnotes.join(FOOTNOTE_SEPARATOR))
        }
    }
}

/// Result of projecting a program. `NoData` means no row matched at all,
/// which callers report differently from a table with blank cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "table", rename_all = "snake_case")]
pub enum TableOutcome {
    NoData,
    Table(LessonTable),
}

impl TableOutcome {
    pub fn table(&self) -> Option<&LessonTable> {
        match self {
            TableOutcome::Table(t) => Some(t),
            TableOutcome::NoData => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Vec<RowRecord>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainColors {
    pub base: String,
    pub mid: String,
    pub light1: String,
    pub hover: String,
}

pub type Palette = HashMap<String, DomainColors>;

/// A program the shell has been asked to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub grade: Grade,
    pub slug: String,
    pub domain: String,
}

impl Selection {
    pub fn fragment(&self) -> String {
        format!("#{}-{}", self.grade.slug(), self.slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    Cache,
    Network,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub rows: Vec<RowRecord>,
    pub fetched_at: DateTime<Utc>,
    pub origin: DataOrigin,
}
