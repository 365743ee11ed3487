use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::model::LeaderRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("{path} is not a valid leader list: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize leaders: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Load the whole store. A missing file is an empty store; anything else
/// unreadable is an error so the file is never clobbered.
pub fn load(path: &Path) -> Result<Vec<LeaderRecord>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} not found, starting with an empty list", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let leaders: Vec<LeaderRecord> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Loaded {} leaders from {}", leaders.len(), path.display());
    Ok(leaders)
}

/// Existing records in their original order, followed by the new ones.
pub fn merge(existing: Vec<LeaderRecord>, new: Vec<LeaderRecord>) -> Vec<LeaderRecord> {
    let mut merged = existing;
    merged.extend(new);
    merged
}

/// Serialize leaders as a 4-space indented JSON array with a trailing newline.
pub fn to_json(leaders: &[LeaderRecord]) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    leaders.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Overwrite the store with `leaders`. Writes a sibling temp file first and
/// renames it into place, so a failed write leaves the old file intact.
pub fn save(path: &Path, leaders: &[LeaderRecord]) -> Result<(), StoreError> {
    let bytes = to_json(leaders)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "leaders.json".to_string());
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&tmp, &bytes).map_err(write_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    info!("Wrote {} leaders to {}", leaders.len(), path.display());
    Ok(())
}

/// Case-insensitive match on name, company or any skill.
pub fn matches_term(leader: &LeaderRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    leader.name.to_lowercase().contains(&term)
        || leader.current_role.company.to_lowercase().contains(&term)
        || leader
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(&term))
}

/// Write leaders as CSV: Name, Company, Title, Region, Skills.
pub fn export_csv<W: Write>(out: W, leaders: &[&LeaderRecord]) -> Result<(), StoreError> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["Name", "Company", "Title", "Region", "Skills"])?;
    for l in leaders {
        w.write_record([
            l.name.as_str(),
            l.current_role.company.as_str(),
            l.current_role.title.as_str(),
            l.region.as_str(),
            l.skills.join(", ").as_str(),
        ])?;
    }
    w.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CurrentRole;

    fn leader(id: &str, name: &str, company: &str) -> LeaderRecord {
        LeaderRecord {
            id: id.into(),
            name: name.into(),
            region: "USA".into(),
            current_role: CurrentRole {
                title: "CEO".into(),
                company: company.into(),
            },
            skills: vec!["GenAI".into(), "Startups".into()],
            latest_activity: vec![],
            profile_image_url: "https://img.example/x.jpg".into(),
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("leaders.json")).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaders.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load(&path), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaders.json");
        let leaders = vec![leader("sam-altman", "Sam Altman", "OpenAI")];
        save(&path, &leaders).unwrap();
        assert_eq!(load(&path).unwrap(), leaders);
        assert!(!dir.path().join(".leaders.json.tmp").exists());
    }

    #[test]
    fn json_uses_four_space_indent() {
        let out = String::from_utf8(to_json(&[leader("a-b", "A B", "X")]).unwrap()).unwrap();
        assert!(out.starts_with("[\n    {\n        \"id\": \"a-b\""));
        assert!(out.ends_with("]\n"));
    }

    #[test]
    fn save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("leaders.json");
        assert!(matches!(save(&path, &[]), Err(StoreError::Write { .. })));
    }

    #[test]
    fn merge_appends_in_order() {
        let merged = merge(
            vec![leader("b", "B", "X"), leader("a", "A", "X")],
            vec![leader("c", "C", "X")],
        );
        let ids: Vec<&str> = merged.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn term_matching() {
        let l = leader("sam-altman", "Sam Altman", "OpenAI");
        assert!(matches_term(&l, "altman"));
        assert!(matches_term(&l, "OPENAI"));
        assert!(matches_term(&l, "startup"));
        assert!(!matches_term(&l, "deepmind"));
    }

    #[test]
    fn csv_export() {
        let l = leader("sam-altman", "Sam Altman", "OpenAI");
        let mut out = Vec::new();
        export_csv(&mut out, &[&l]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Name,Company,Title,Region,Skills\nSam Altman,OpenAI,CEO,USA,\"GenAI, Startups\"\n"
        );
    }
}
