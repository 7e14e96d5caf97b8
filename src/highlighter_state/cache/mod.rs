//! # Block Cache
//!
//! The cached positions shared between the tick and render callbacks, and the refresher
//! that keeps them current.
//!
//! ## Key Components
//!
//! * `BlockCache` - The current matches and the stamp of the scan that produced them
//! * `CacheRefresher` - Decides when a scan is due and swaps in its result
//! * `refresh_policy` - Staleness rules
//! * `scanner` - The bounded-radius block search
//!
//! ## Replacement
//!
//! A refresh never edits the cache in place. The scanner builds a fresh list and the
//! refresher swaps it in with a single assignment, so a reader sees either the old list or
//! the new one.

use log::debug;

use crate::config::HighlighterConfig;

use super::{
    host::{TickContext, WorldView},
    voxels::position::{block_pos_of, BlockPos},
};
use refresh_policy::{RefreshPolicy, RefreshReason, RefreshStamp};
use scanner::{BlockScanner, ScanOutcome};

pub mod refresh_policy;
pub mod scanner;

/// The current list of matched positions.
#[derive(Clone, Debug, Default)]
pub struct BlockCache {
    positions: Vec<BlockPos>,
    last_refresh: Option<RefreshStamp>,
}

impl BlockCache {
    /// Creates an empty cache that has never been refreshed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached positions, in scan order.
    pub fn positions(&self) -> &[BlockPos] {
        &self.positions
    }

    /// Number of cached positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the cache holds no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The stamp of the most recent refresh.
    pub fn last_refresh(&self) -> Option<&RefreshStamp> {
        self.last_refresh.as_ref()
    }

    /// Swaps in a new list, returning the previous one.
    pub fn replace(&mut self, positions: Vec<BlockPos>) -> Vec<BlockPos> {
        std::mem::replace(&mut self.positions, positions)
    }

    /// Empties the cache.
    pub fn clear(&mut self) {
        self.positions = Vec::new();
    }
}

/// What a simulation step did to the cache.
#[derive(Clone, Debug, PartialEq)]
pub enum RefreshOutcome {
    /// The cache was fresh; nothing happened.
    Fresh,
    /// A scan ran and replaced the cache.
    Refreshed {
        /// Why the scan ran.
        reason: RefreshReason,
        /// Number of matches now cached.
        found: usize,
        /// Chunks walked.
        chunks_scanned: usize,
        /// Chunks in range the host had not loaded.
        chunks_skipped: usize,
    },
    /// A refresh was due but the world is outside the restricted dimension, so the cache
    /// was emptied instead.
    Cleared {
        /// Why the refresh ran.
        reason: RefreshReason,
    },
}

/// Keeps a `BlockCache` in step with the world around the observer.
pub struct CacheRefresher {
    policy: RefreshPolicy,
    scanner: BlockScanner,
}

impl CacheRefresher {
    /// Creates a refresher from the policy and scan settings in `config`.
    pub fn new(config: &HighlighterConfig) -> Self {
        CacheRefresher {
            policy: RefreshPolicy::from_config(config),
            scanner: BlockScanner::new(config),
        }
    }

    /// Runs one simulation step: refreshes `cache` if the policy says it is stale.
    pub fn maybe_refresh<W: WorldView>(
        &self,
        cache: &mut BlockCache,
        ctx: &TickContext<'_, W>,
    ) -> RefreshOutcome {
        let observer = ctx.observer;
        match self.policy.due(
            cache.last_refresh(),
            ctx.tick,
            observer.position,
            &observer.dimension,
        ) {
            Some(reason) => self.refresh(cache, ctx, reason),
            None => RefreshOutcome::Fresh,
        }
    }

    /// Rescans unconditionally and stamps the cache.
    pub fn refresh<W: WorldView>(
        &self,
        cache: &mut BlockCache,
        ctx: &TickContext<'_, W>,
        reason: RefreshReason,
    ) -> RefreshOutcome {
        let observer = ctx.observer;
        let outcome = match self.scanner.scan(ctx.world, block_pos_of(observer.position)) {
            ScanOutcome::WrongDimension => {
                cache.clear();
                RefreshOutcome::Cleared { reason }
            }
            ScanOutcome::Scanned(report) => {
                let found = report.positions.len();
                cache.replace(report.positions);
                if found > 0 {
                    debug!(
                        "Found {} {:?} blocks ({}, {} chunks scanned, {} unloaded)",
                        found,
                        self.scanner.target(),
                        reason,
                        report.chunks_scanned,
                        report.chunks_skipped
                    );
                }
                RefreshOutcome::Refreshed {
                    reason,
                    found,
                    chunks_scanned: report.chunks_scanned,
                    chunks_skipped: report.chunks_skipped,
                }
            }
        };

        cache.last_refresh = Some(RefreshStamp {
            tick: ctx.tick,
            position: observer.position,
            dimension: observer.dimension.clone(),
        });
        outcome
    }
}
