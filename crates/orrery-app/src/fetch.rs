//! Bridging the fetch pipeline into the frame.
//!
//! Completed catalog requests are folded into the world only at the merge
//! point of a tick, never mid-frame. A failed request is logged and
//! dropped; the built-in catalog already populated the scene, so nothing
//! waits on the feed.

use bevy_ecs::prelude::*;
use tracing::{info, warn};

use orrery_bodies::apply_records;
use orrery_data::{BodyKind, FetchPipeline, FetchRequest};
use orrery_ecs::MergeQueue;

/// The fetch pipeline as a world resource.
#[derive(Resource)]
pub struct FetchHandle {
    pipeline: FetchPipeline,
}

impl FetchHandle {
    pub fn new(pipeline: FetchPipeline) -> Self {
        Self { pipeline }
    }

    /// Submit a request. Returns `false` when the in-flight budget is full.
    pub fn submit(&self, request: FetchRequest) -> bool {
        self.pipeline.submit(request)
    }

    /// Requests submitted but not yet drained.
    pub fn in_flight_count(&self) -> usize {
        self.pipeline.in_flight_count()
    }
}

/// Queue the startup catalog requests.
pub fn submit_initial_fetches(fetches: &FetchHandle, page_limit: u32) {
    for kind in [BodyKind::Planet, BodyKind::Comet] {
        let request = FetchRequest {
            kind,
            page: 1,
            limit: page_limit,
        };
        if !fetches.submit(request) {
            warn!("fetch budget full at startup, skipping the {kind} request");
        }
    }
}

/// Collect finished fetches and queue their records for the merge point.
pub fn drain_fetch_outcomes(fetches: Res<FetchHandle>, mut merges: ResMut<MergeQueue>) {
    for outcome in fetches.pipeline.drain_outcomes() {
        let request = outcome.request;
        match outcome.result {
            Ok(records) => {
                info!(
                    "{} {} records arrived (page {})",
                    records.len(),
                    request.kind,
                    request.page
                );
                merges.enqueue(move |world| {
                    let report = apply_records(world, request.kind, &records);
                    info!(
                        "merged the {} feed: {} updated, {} spawned",
                        request.kind, report.updated, report.spawned
                    );
                });
            }
            Err(err) => {
                warn!("{} fetch (page {}) failed: {err}", request.kind, request.page);
            }
        }
    }
}
