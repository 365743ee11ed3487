use crate::model::{Candidate, CandidateOrigin};
use crate::parser::names::NameExtractor;
use crate::search::SearchHit;

/// Build a candidate from a structured seed row. Blank names yield `None`.
pub fn from_seed_row(
    name: &str,
    company: &str,
    title: Option<&str>,
    line: u64,
) -> Option<Candidate> {
    let name = non_blank(name)?;
    Some(Candidate {
        name,
        title: title.and_then(non_blank),
        company: non_blank(company),
        origin: CandidateOrigin::Seed { line },
    })
}

/// Build a candidate from a bare name found in unstructured text.
pub fn from_extracted_name(name: &str, query: &str, url: &str) -> Option<Candidate> {
    let name = non_blank(name)?;
    Some(Candidate {
        name,
        title: None,
        company: None,
        origin: CandidateOrigin::Search {
            query: query.to_string(),
            url: url.to_string(),
        },
    })
}

/// Title and snippet joined by a line break so tokens never run across them.
pub fn hit_text(hit: &SearchHit) -> String {
    match hit.snippet.as_deref() {
        Some(snippet) if !snippet.is_empty() => format!("{}\n{}", hit.title, snippet),
        _ => hit.title.clone(),
    }
}

/// All candidates from one search hit, in text order.
pub fn from_search_hit(
    extractor: &dyn NameExtractor,
    query: &str,
    hit: &SearchHit,
) -> Vec<Candidate> {
    let text = hit_text(hit);
    extractor
        .names(&text)
        .filter_map(|name| from_extracted_name(name, query, &hit.url))
        .collect()
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::names::CapitalizedRuns;

    #[test]
    fn seed_row_with_company() {
        let c = from_seed_row(" Jane Doe ", "Acme", None, 2).unwrap();
        assert_eq!(c.name, "Jane Doe");
        assert_eq!(c.company.as_deref(), Some("Acme"));
        assert_eq!(c.title, None);
        assert_eq!(c.origin, CandidateOrigin::Seed { line: 2 });
    }

    #[test]
    fn seed_row_blank_company_left_for_enricher() {
        let c = from_seed_row("Jane Doe", "  ", Some(""), 3).unwrap();
        assert_eq!(c.company, None);
        assert_eq!(c.title, None);
    }

    #[test]
    fn blank_names_discarded() {
        assert!(from_seed_row("   ", "Acme", None, 2).is_none());
        assert!(from_extracted_name("", "q", "u").is_none());
    }

    #[test]
    fn search_hit_candidates() {
        let hit = SearchHit {
            title: "John Q. Smith - Acme Corp".into(),
            url: "https://example.com/john".into(),
            snippet: Some("John Smith leads research".into()),
        };
        let found = from_search_hit(&CapitalizedRuns, "ai leaders", &hit);
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Corp", "John Smith"]);
        assert!(found.iter().all(|c| c.company.is_none()));
        assert_eq!(
            found[1].origin,
            CandidateOrigin::Search {
                query: "ai leaders".into(),
                url: "https://example.com/john".into()
            }
        );
    }

    #[test]
    fn title_only_hit() {
        let hit = SearchHit {
            title: "Demis Hassabis on AGI".into(),
            url: String::new(),
            snippet: None,
        };
        assert_eq!(hit_text(&hit), "Demis Hassabis on AGI");
        assert_eq!(from_search_hit(&CapitalizedRuns, "q", &hit).len(), 1);
    }
}
