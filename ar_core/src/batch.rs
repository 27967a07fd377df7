//! Batch evaluation across many weapons
//!
//! Every calculation is a pure function over shared read-only tables, so a
//! batch fans out over rayon's thread pool without locking. Each batch is
//! tagged with a generation; starting a newer batch makes older ones stale.
//! Stale batches skip their remaining work and return `None`, which callers
//! treat as "ignore this late result".

use crate::attack_rating::{compute_ar, ArOptions, ArResult};
use crate::config::GameData;
use crate::types::{Affinity, PlayerStats};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Generation handle of one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchTicket {
    generation: u64,
}

/// Hands out batch generations and runs batches
#[derive(Debug, Default)]
pub struct BatchEvaluator {
    generation: AtomicU64,
}

impl BatchEvaluator {
    pub fn new() -> Self {
        BatchEvaluator {
            generation: AtomicU64::new(0),
        }
    }

    /// Start a new batch, superseding every earlier one
    pub fn begin(&self) -> BatchTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        BatchTicket { generation }
    }

    /// Whether no newer batch has started since `ticket`
    pub fn is_current(&self, ticket: BatchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Evaluate `f` over `items` in parallel, preserving order
    ///
    /// Returns `None` when the batch went stale before it finished.
    pub fn run<I, T, F>(&self, ticket: BatchTicket, items: &[I], f: F) -> Option<Vec<T>>
    where
        I: Sync,
        T: Send,
        F: Fn(&I) -> T + Sync,
    {
        let results: Option<Vec<T>> = items
            .par_iter()
            .map(|item| {
                if self.is_current(ticket) {
                    Some(f(item))
                } else {
                    None
                }
            })
            .collect();

        if results.is_none() || !self.is_current(ticket) {
            tracing::debug!(generation = ticket.generation, "discarding stale batch");
            return None;
        }
        results
    }
}

/// One weapon/affinity pairing to evaluate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub weapon: String,
    pub affinity: Affinity,
}

/// Every weapon/affinity pairing in the data, in weapon name order
pub fn all_requests(data: &GameData) -> Vec<BatchRequest> {
    data.weapons
        .iter()
        .flat_map(|weapon| {
            weapon.affinities.keys().map(move |&affinity| BatchRequest {
                weapon: weapon.name.clone(),
                affinity,
            })
        })
        .collect()
}

/// Attack rating of every requested pairing at one upgrade level
///
/// Entries are `None` where the pairing is not applicable; the whole result
/// is `None` if the batch went stale.
pub fn compute_ar_batch(
    data: &GameData,
    evaluator: &BatchEvaluator,
    ticket: BatchTicket,
    requests: &[BatchRequest],
    upgrade_level: u32,
    stats: &PlayerStats,
    options: &ArOptions,
) -> Option<Vec<Option<ArResult>>> {
    evaluator.run(ticket, requests, |request| {
        let weapon = data.weapons.get(&request.weapon)?;
        compute_ar(data, weapon, request.affinity, upgrade_level, stats, options)
    })
}
