use regex::Regex;
use std::sync::LazyLock;

/// One capitalized token: `Jane`, `O'Neil`, `Smith-Jones`, `D'Angelo`.
const TOKEN: &str = r"[A-Z](?:[a-z]+|'[A-Z][a-z]+)(?:['-][A-Z]?[a-z]+)*";

/// Maximal run of two or more capitalized tokens separated by single spaces.
static NAME_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{TOKEN}(?: {TOKEN})+\b")).unwrap()
});

const MIN_TOKENS: usize = 2;
const MAX_TOKENS: usize = 5;

/// Turns free text into candidate person names, left to right.
pub trait NameExtractor {
    fn names<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// Heuristic extractor: runs of 2 to 4 capitalized words. Misses mononyms and
/// initials, and happily accepts capitalized phrases like "Acme Corp".
#[derive(Debug, Default, Clone, Copy)]
pub struct CapitalizedRuns;

impl NameExtractor for CapitalizedRuns {
    fn names<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            NAME_RUN_RE
                .find_iter(text)
                .map(|m| m.as_str())
                .filter(|run| (MIN_TOKENS..MAX_TOKENS).contains(&run.split(' ').count())),
        )
    }
}
