use regex::Regex;
use std::sync::OnceLock;

pub const TOPSPORT_KEY: &str = "topsport";
pub const ECONOMICS_KEY: &str = "economie-organisatie";
const ECONOMICS_LONG_FORM: &str = "economie-en-organisatie";

fn separator_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s&]+").unwrap())
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn non_slug_char() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9-]").unwrap())
}

/// Canonical key for a raw `domein` value, e.g. `"Economie en Organisatie"`
/// becomes `"economie-organisatie"`.
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let domain = separator_run()
        .replace_all(lowered.trim(), "-")
        .into_owned();

    if domain.contains("sport") && domain.contains(TOPSPORT_KEY) {
        return TOPSPORT_KEY.to_string();
    }

    if domain == ECONOMICS_LONG_FORM {
        return ECONOMICS_KEY.to_string();
    }

    domain
}

/// URL-safe identifier for a program name. Output only holds `[a-z0-9-]`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let dashed = whitespace_run().replace_all(&lowered, "-").replace('/', "-");
    non_slug_char().replace_all(&dashed, "").into_owned()
}
