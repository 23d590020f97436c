//! Country labels and the free-text aliases they stand for.
//!
//! Business country fields are free text, so a selected country is expanded
//! into lowercase aliases that are matched by substring containment. Short
//! aliases over-match: `"us"` is contained in `"Mauritius"`, and `"uk"` in
//! anything spelling it. This is accepted behavior, not an invariant.

/// Countries always offered in the picker, besides the configured default.
pub const FALLBACK_COUNTRIES: &[&str] = &["UK", "USA"];

const UK_ALIASES: &[&str] = &[
    "uk",
    "united kingdom",
    "england",
    "scotland",
    "wales",
    "northern ireland",
];
const USA_ALIASES: &[&str] = &["usa", "us", "united states", "united states of america"];
const NIGERIA_ALIASES: &[&str] = &["nigeria"];

/// Expand a country label into the lowercase aliases a country field may contain.
///
/// A blank label yields no aliases, which callers treat as "accept everything".
#[must_use]
pub fn country_terms(label: &str) -> Vec<String> {
    let normalized = label.trim().to_lowercase();
    let aliases = match normalized.as_str() {
        "" => return Vec::new(),
        "uk" => UK_ALIASES,
        "usa" => USA_ALIASES,
        "nigeria" => NIGERIA_ALIASES,
        _ => return vec![normalized],
    };
    aliases.iter().map(|alias| (*alias).to_string()).collect()
}

/// True when `terms` is empty or some term is a substring of `country`
/// (case-insensitive). A missing country only passes an empty term list.
#[must_use]
pub fn matches_country(country: Option<&str>, terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let source = country.unwrap_or_default().trim().to_lowercase();
    terms.iter().any(|term| source.contains(term.as_str()))
}

/// Build the country picker list from the distinct country values in the catalog.
///
/// Values are trimmed and de-duplicated, the default and fallback countries
/// are appended when missing, and the result is sorted with `default_country`
/// first and the rest alphabetically.
#[must_use]
pub fn sanitize_country_list<I, S>(values: I, default_country: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut countries: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.as_ref().trim();
        if !trimmed.is_empty() && !countries.iter().any(|c| c == trimmed) {
            countries.push(trimmed.to_string());
        }
    }

    for fallback in std::iter::once(default_country).chain(FALLBACK_COUNTRIES.iter().copied()) {
        if !countries.iter().any(|c| c == fallback) {
            countries.push(fallback.to_string());
        }
    }

    countries.sort_by(|a, b| {
        match (a == default_country, b == default_country) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.cmp(b),
        }
    });
    countries
}
