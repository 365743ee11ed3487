use std::path::PathBuf;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::enrich::enrich;
use crate::identity::{dedupe, IdentitySet};
use crate::model::Candidate;
use crate::parser::candidates;
use crate::parser::NameExtractor;
use crate::search::SearchProvider;
use crate::{seed, store};

pub struct UpdateOptions {
    pub store_path: PathBuf,
    pub seed_path: PathBuf,
    pub queries: Vec<String>,
    pub dry_run: bool,
    pub show_progress: bool,
}

#[derive(Debug, Default, PartialEq)]
pub struct RunReport {
    pub existing: usize,
    pub seed_candidates: usize,
    pub search_candidates: usize,
    pub accepted: usize,
    pub duplicates: usize,
    pub failed_queries: usize,
    pub written: bool,
}

impl RunReport {
    pub fn print(&self) {
        println!(
            "Existing {} | seed candidates {} | search candidates {} | failed queries {}",
            self.existing, self.seed_candidates, self.search_candidates, self.failed_queries
        );
        println!(
            "Accepted {} new leaders, rejected {} duplicates. Total leaders: {}.",
            self.accepted,
            self.duplicates,
            self.existing + self.accepted
        );
        if !self.written {
            println!("Store left untouched.");
        }
    }
}

/// One full load → extract → dedup → enrich → write pass.
///
/// `provider` is `None` when search is disabled or has no credential; the run
/// then proceeds on seeds alone.
pub async fn run_update(
    opts: &UpdateOptions,
    provider: Option<&dyn SearchProvider>,
    extractor: &dyn NameExtractor,
) -> Result<RunReport> {
    let existing = store::load(&opts.store_path)?;
    let mut report = RunReport {
        existing: existing.len(),
        ..Default::default()
    };

    let seeds = seed::read_seed_candidates(&opts.seed_path);
    report.seed_candidates = seeds.len();

    let found = match provider {
        Some(p) => {
            let (found, failed) =
                search_candidates(p, extractor, &opts.queries, opts.show_progress).await;
            report.failed_queries = failed;
            found
        }
        None => Vec::new(),
    };
    report.search_candidates = found.len();

    // seeds first: on a shared identity the seed record wins
    let mut identities = IdentitySet::from_store(&existing);
    let deduped = dedupe(&mut identities, seeds.into_iter().chain(found));
    report.duplicates = deduped.rejected;
    info!(
        accepted = deduped.accepted.len(),
        duplicates = deduped.rejected,
        known = identities.len(),
        "Dedup complete"
    );

    let new: Vec<_> = deduped
        .accepted
        .into_iter()
        .map(|(id, candidate)| {
            info!(
                id = %id,
                name = %candidate.name,
                origin = ?candidate.origin,
                "Adding new leader"
            );
            enrich(id, candidate)
        })
        .collect();
    report.accepted = new.len();

    if new.is_empty() {
        info!("No new leaders found, {} left untouched", opts.store_path.display());
        return Ok(report);
    }
    if opts.dry_run {
        info!("Dry run, not writing {} new leaders", new.len());
        return Ok(report);
    }

    let merged = store::merge(existing, new);
    store::save(&opts.store_path, &merged)
        .with_context(|| format!("could not update {}", opts.store_path.display()))?;
    report.written = true;

    Ok(report)
}

/// Run each query in turn. A failing query is logged and skipped.
/// Returns the candidates in query/result/text order and the failure count.
async fn search_candidates(
    provider: &dyn SearchProvider,
    extractor: &dyn NameExtractor,
    queries: &[String],
    show_progress: bool,
) -> (Vec<Candidate>, usize) {
    let pb = if show_progress {
        ProgressBar::new(queries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=> "));
    }

    let mut found = Vec::new();
    let mut failed = 0usize;

    for query in queries {
        pb.set_message(query.clone());
        match provider.search(query).await {
            Ok(hits) => {
                let before = found.len();
                for hit in &hits {
                    found.extend(candidates::from_search_hit(extractor, query, hit));
                }
                info!(
                    query = %query,
                    hits = hits.len(),
                    names = found.len() - before,
                    "Search complete"
                );
            }
            Err(e) => {
                warn!("Search failed for '{}': {}", query, e);
                failed += 1;
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    (found, failed)
}
