use std::collections::HashSet;

use tracing::debug;

use crate::model::{Candidate, LeaderRecord};

/// Identity key for a display name: trimmed, lowercased, whitespace runs
/// collapsed to a single hyphen. `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Running set of identity keys for one run: seeded from the store, grown as
/// candidates are admitted.
#[derive(Debug, Default)]
pub struct IdentitySet {
    keys: HashSet<String>,
}

impl IdentitySet {
    pub fn from_store(records: &[LeaderRecord]) -> Self {
        IdentitySet {
            keys: records.iter().map(|r| r.id.clone()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Admit a candidate if its key is unseen, recording the key immediately.
    /// Returns the key on acceptance.
    pub fn admit(&mut self, candidate: &Candidate) -> Option<String> {
        let key = normalize(&candidate.name);
        if key.is_empty() {
            return None;
        }
        if self.keys.insert(key.clone()) {
            Some(key)
        } else {
            debug!(name = %candidate.name, key = %key, "duplicate identity, skipping");
            None
        }
    }
}

/// Outcome of a dedup pass, in acceptance order.
pub struct Deduped {
    pub accepted: Vec<(String, Candidate)>,
    pub rejected: usize,
}

/// Filter candidates against `identities` in the order given. Callers pass
/// seed candidates before search candidates so the seed record wins.
pub fn dedupe<I>(identities: &mut IdentitySet, candidates: I) -> Deduped
where
    I: IntoIterator<Item = Candidate>,
{
    let mut accepted = Vec::new();
    let mut rejected = 0usize;

    for candidate in candidates {
        match identities.admit(&candidate) {
            Some(key) => accepted.push((key, candidate)),
            None => rejected += 1,
        }
    }

    Deduped { accepted, rejected }
}
