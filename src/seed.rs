use std::path::Path;

use tracing::{info, warn};

use crate::model::Candidate;
use crate::parser::candidates;

/// Read seed candidates from a CSV file with `name` and `company` columns
/// (plus an optional `title`). Any problem with the file means no seeds.
pub fn read_seed_candidates(path: &Path) -> Vec<Candidate> {
    if !path.exists() {
        info!("Seed file {} not found, skipping seeds", path.display());
        return Vec::new();
    }

    let mut reader = match csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
    {
        Ok(r) => r,
        Err(e) => {
            warn!("Could not open seed file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            warn!("Seed file {} has no readable header: {}", path.display(), e);
            return Vec::new();
        }
    };

    let column = |wanted: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(wanted));
    let (Some(name_col), Some(company_col)) = (column("name"), column("company")) else {
        warn!(
            "Seed file {} must have 'name' and 'company' columns, got {:?}",
            path.display(),
            headers.iter().collect::<Vec<_>>()
        );
        return Vec::new();
    };
    let title_col = column("title");

    let mut seeds = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping malformed seed row {}: {}", i + 1, e);
                continue;
            }
        };
        // header is line 1
        let line = row.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        let name = row.get(name_col).unwrap_or_default();
        let company = row.get(company_col).unwrap_or_default();
        let title = title_col.and_then(|c| row.get(c));
        if let Some(c) = candidates::from_seed_row(name, company, title, line) {
            seeds.push(c);
        }
    }

    info!("Loaded {} seed candidates from {}", seeds.len(), path.display());
    seeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seed_file(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn reads_rows_in_order() {
        let f = seed_file("name,company\nJane Doe,Acme\nSam Altman,OpenAI\n");
        let seeds = read_seed_candidates(f.path());
        let names: Vec<&str> = seeds.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "Sam Altman"]);
        assert_eq!(seeds[1].company.as_deref(), Some("OpenAI"));
    }

    #[test]
    fn header_case_and_column_order() {
        let f = seed_file("Company,Title,Name\nAcme,CTO,Jane Doe\n");
        let seeds = read_seed_candidates(f.path());
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].name, "Jane Doe");
        assert_eq!(seeds[0].title.as_deref(), Some("CTO"));
    }

    #[test]
    fn blank_names_skipped() {
        let f = seed_file("name,company\n  ,Acme\nJane Doe,\n");
        let seeds = read_seed_candidates(f.path());
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].company, None);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_seed_candidates(&dir.path().join("nope.csv")).is_empty());
    }

    #[test]
    fn missing_columns_is_empty() {
        let f = seed_file("full_name,employer\nJane Doe,Acme\n");
        assert!(read_seed_candidates(f.path()).is_empty());
    }
}
