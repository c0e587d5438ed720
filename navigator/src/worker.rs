//! Background path queries.
//!
//! A [`SearchWorker`] runs one query on its own thread against a snapshot of
//! the pathfinder, so the caller stays responsive. The search polls a shared
//! cancel flag between frontier pops; [`SearchWorker::wait`] raises that flag
//! once the timeout passes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use gridnav_core::Cell;
use gridnav_paths::{GridPathfinder, Path, QueryError};

/// Result of a finished query, with its wall-clock time.
#[derive(Debug)]
pub struct SearchOutcome {
    pub result: Result<Option<Path>, QueryError>,
    pub elapsed: Duration,
}

/// A query running on a background thread.
pub struct SearchWorker {
    cancel: Arc<AtomicBool>,
    rx: Receiver<SearchOutcome>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Start searching from `start` to `end` on a new thread.
    pub fn spawn(pathfinder: GridPathfinder, start: Cell, end: Cell) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();
        let flag = Arc::clone(&cancel);
        let handle = thread::spawn(move || {
            let t0 = Instant::now();
            let result = pathfinder.find_path_with(start, end, || flag.load(Ordering::Relaxed));
            let outcome = SearchOutcome {
                result,
                elapsed: t0.elapsed(),
            };
            // The receiver may be gone if the caller stopped waiting.
            tx.send(outcome).ok();
        });
        log::debug!("spawned search {start} -> {end}");
        Self {
            cancel,
            rx,
            handle: Some(handle),
        }
    }

    /// Ask the search to stop at its next frontier pop.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Block until the search finishes, cancelling it after `timeout`.
    pub fn wait(mut self, timeout: Duration) -> SearchOutcome {
        let outcome = match self.rx.recv_timeout(timeout) {
            Ok(o) => o,
            Err(RecvTimeoutError::Timeout) => {
                log::warn!("search exceeded {timeout:?}, cancelling");
                self.cancel();
                self.recv_after_cancel()
            }
            Err(RecvTimeoutError::Disconnected) => Self::lost(),
        };
        if let Some(h) = self.handle.take() {
            h.join().ok();
        }
        outcome
    }

    fn recv_after_cancel(&self) -> SearchOutcome {
        self.rx.recv().unwrap_or_else(|_| Self::lost())
    }

    /// The worker thread ended without reporting, which only happens if it
    /// panicked. Treat it as a cancelled query.
    fn lost() -> SearchOutcome {
        log::error!("search worker exited without a result");
        SearchOutcome {
            result: Err(QueryError::Cancelled),
            elapsed: Duration::ZERO,
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridnav_core::{Occupancy, OccupancyGrid};

    #[test]
    fn finds_path_in_background() {
        let pf = GridPathfinder::new(OccupancyGrid::filled(4, 4, Occupancy::Free).unwrap());
        let worker = SearchWorker::spawn(pf, Cell::new(0, 0), Cell::new(3, 3));
        let outcome = worker.wait(Duration::from_secs(10));
        let path = outcome.result.unwrap().unwrap();
        assert_eq!(path.steps(), 6);
    }

    #[test]
    fn reports_invalid_endpoint() {
        let mut g = OccupancyGrid::filled(2, 2, Occupancy::Free).unwrap();
        g.set(Cell::new(1, 1), Occupancy::Blocked);
        let worker = SearchWorker::spawn(GridPathfinder::new(g), Cell::ZERO, Cell::new(1, 1));
        let outcome = worker.wait(Duration::from_secs(10));
        assert!(matches!(
            outcome.result,
            Err(QueryError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn zero_timeout_on_large_grid_cancels_or_finishes() {
        let pf = GridPathfinder::new(OccupancyGrid::filled(400, 400, Occupancy::Free).unwrap());
        let worker = SearchWorker::spawn(pf, Cell::new(0, 0), Cell::new(399, 399));
        let outcome = worker.wait(Duration::ZERO);
        match outcome.result {
            Err(QueryError::Cancelled) => {}
            Ok(Some(path)) => assert_eq!(path.steps(), 798),
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}
