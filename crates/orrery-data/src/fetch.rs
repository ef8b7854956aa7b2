//! Catalog fetching: a pluggable source trait plus a worker pipeline that
//! keeps catalog I/O off the main thread.
//!
//! The main thread submits [`FetchRequest`]s, workers run the blocking
//! source, and completed [`FetchOutcome`]s are collected each frame via
//! [`drain_outcomes`](FetchPipeline::drain_outcomes). A failed request is
//! reported as an `Err` outcome rather than retried; the drain site decides
//! what to do with it.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;

use thiserror::Error;

use crate::records::{BodyKind, BodyRecord};

/// Errors from a catalog source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The source had no dataset for the requested kind, or the backing
    /// service rejected the request.
    #[error("catalog request for {kind} page {page} failed: {message}")]
    Request {
        kind: BodyKind,
        page: u32,
        message: String,
    },
    /// A file-backed source could not read its dataset.
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The dataset was not valid JSON, or did not match the record shape.
    #[error("failed to decode catalog data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A source of orbital element records.
///
/// `page` is 1-based and `limit` is the page size, mirroring the upstream
/// catalog API. Implementations may block; callers that need the main
/// thread free route requests through [`FetchPipeline`].
pub trait BodyFetcher: Send + Sync {
    fn fetch_bodies(
        &self,
        kind: BodyKind,
        page: u32,
        limit: u32,
    ) -> Result<Vec<BodyRecord>, FetchError>;
}

/// Returns the records for one page. Page numbers start at 1; a page past
/// the end of the dataset is empty, not an error.
fn page_slice(records: &[BodyRecord], page: u32, limit: u32) -> Vec<BodyRecord> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
    records.iter().skip(start).take(limit as usize).cloned().collect()
}

/// In-memory catalog source with fixed datasets per body kind.
///
/// Requests for a kind with no dataset fail with [`FetchError::Request`].
#[derive(Default)]
pub struct StaticFetcher {
    datasets: HashMap<BodyKind, Vec<BodyRecord>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the dataset for one body kind, replacing any previous one.
    pub fn insert(&mut self, kind: BodyKind, records: Vec<BodyRecord>) {
        self.datasets.insert(kind, records);
    }
}

impl BodyFetcher for StaticFetcher {
    fn fetch_bodies(
        &self,
        kind: BodyKind,
        page: u32,
        limit: u32,
    ) -> Result<Vec<BodyRecord>, FetchError> {
        match self.datasets.get(&kind) {
            Some(records) => Ok(page_slice(records, page, limit)),
            None => Err(FetchError::Request {
                kind,
                page,
                message: "no dataset installed for this kind".to_string(),
            }),
        }
    }
}

/// Catalog source backed by JSON files in a directory.
///
/// Each kind maps to one file (`planets.json`, `comets.json`,
/// `asteroids.json`) holding an array of records. The file is re-read on
/// every request so an updated dataset is picked up without a restart.
pub struct JsonDirFetcher {
    data_dir: PathBuf,
}

impl JsonDirFetcher {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn dataset_path(&self, kind: BodyKind) -> PathBuf {
        let file_name = match kind {
            BodyKind::Planet => "planets.json",
            BodyKind::Comet => "comets.json",
            BodyKind::Asteroid => "asteroids.json",
        };
        self.data_dir.join(file_name)
    }
}

impl BodyFetcher for JsonDirFetcher {
    fn fetch_bodies(
        &self,
        kind: BodyKind,
        page: u32,
        limit: u32,
    ) -> Result<Vec<BodyRecord>, FetchError> {
        let path = self.dataset_path(kind);
        let text = std::fs::read_to_string(&path).map_err(|source| FetchError::Read {
            path: path.clone(),
            source,
        })?;
        let records: Vec<BodyRecord> = serde_json::from_str(&text)?;
        Ok(page_slice(&records, page, limit))
    }
}

/// A catalog request routed to the worker pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: BodyKind,
    pub page: u32,
    pub limit: u32,
}

/// The result of a completed request, errors included.
#[derive(Debug)]
pub struct FetchOutcome {
    /// The request this outcome answers (used to match outcomes to callers).
    pub request: FetchRequest,
    pub result: Result<Vec<BodyRecord>, FetchError>,
}

/// Worker pipeline for catalog requests.
///
/// The main thread submits requests via [`submit`](Self::submit) and
/// collects outcomes each frame via [`drain_outcomes`](Self::drain_outcomes).
/// Fetching never blocks the main thread.
pub struct FetchPipeline {
    /// Channel sender for submitting requests to workers.
    request_sender: Option<crossbeam_channel::Sender<FetchRequest>>,
    /// Channel receiver for collecting completed outcomes on the main thread.
    outcome_receiver: crossbeam_channel::Receiver<FetchOutcome>,
    /// Handles to the worker threads (for shutdown).
    worker_handles: Vec<JoinHandle<()>>,
    /// Maximum number of requests that can be in-flight simultaneously.
    budget: usize,
    /// Current number of in-flight requests.
    in_flight: Arc<AtomicUsize>,
}

impl FetchPipeline {
    /// Creates a new pipeline with the given number of worker threads and
    /// request budget.
    ///
    /// `worker_count` is the number of OS threads to spawn for fetching,
    /// `budget` caps the number of in-flight requests, and `fetcher` is
    /// the catalog source shared by all workers.
    pub fn new(worker_count: usize, budget: usize, fetcher: Arc<dyn BodyFetcher>) -> Self {
        let (request_tx, request_rx) = crossbeam_channel::bounded(budget);
        let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();
        let in_flight = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            let rx: crossbeam_channel::Receiver<FetchRequest> = request_rx.clone();
            let tx = outcome_tx.clone();
            let source = Arc::clone(&fetcher);
            let flight = Arc::clone(&in_flight);

            let handle = std::thread::Builder::new()
                .name("fetch-worker".into())
                .spawn(move || {
                    while let Ok(request) = rx.recv() {
                        let result =
                            source.fetch_bodies(request.kind, request.page, request.limit);
                        let _ = tx.send(FetchOutcome { request, result });
                        flight.fetch_sub(1, Ordering::Relaxed);
                    }
                })
                .expect("Failed to spawn catalog fetch worker thread");
            handles.push(handle);
        }

        Self {
            request_sender: Some(request_tx),
            outcome_receiver: outcome_rx,
            worker_handles: handles,
            budget,
            in_flight,
        }
    }

    /// Submit a catalog request. Returns `false` if the budget is exhausted
    /// or the pipeline has been shut down.
    pub fn submit(&self, request: FetchRequest) -> bool {
        let sender = match &self.request_sender {
            Some(s) => s,
            None => return false,
        };
        if self.in_flight.load(Ordering::Relaxed) >= self.budget {
            return false;
        }
        self.in_flight.fetch_add(1, Ordering::Relaxed);
        if sender.send(request).is_err() {
            self.in_flight.fetch_sub(1, Ordering::Relaxed);
            return false;
        }
        true
    }

    /// Drain all completed outcomes. Called once per frame on the main thread.
    pub fn drain_outcomes(&self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Number of requests currently being processed or queued by workers.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.load(Ordering::Relaxed)
    }

    /// Shut down all worker threads gracefully.
    ///
    /// Drops the request sender to signal workers to exit, then joins all
    /// threads.
    pub fn shutdown(&mut self) {
        // Drop sender to close the channel, causing workers to exit.
        self.request_sender.take();
        for handle in self.worker_handles.drain(..) {
            let _ = handle.join();
        }
    }
}

impl Drop for FetchPipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}
