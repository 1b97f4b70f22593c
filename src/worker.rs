use std::{sync::Arc, thread};

use egui::mutex::RwLock;
use tracing::{error, info};

use crate::{
    fetcher::ScoreFetcher,
    report::{ComparisonReport, PairOutcome, SingleReport},
};

/// A result being produced on a worker thread. The UI polls it once per frame.
pub struct Pending<T> {
    slot: Arc<RwLock<Option<T>>>,
}

impl<T: Send + Sync + 'static> Pending<T> {
    /// Runs `job` on its own thread and asks `repaint` for a new frame when done.
    pub fn spawn<F>(repaint: Option<egui::Context>, job: F) -> Pending<T>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let slot = Arc::new(RwLock::new(None));
        let worker_slot = Arc::clone(&slot);

        let work = move || {
            let result = job();
            *worker_slot.write() = Some(result);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        };

        if let Err(e) = thread::Builder::new()
            .name("yaps-lookup".into())
            .spawn(work)
        {
            error!(error = %e, "unable to spawn lookup thread");
        }

        Pending { slot }
    }

    /// Takes the result if the worker has finished.
    pub fn poll(&self) -> Option<T> {
        self.slot.write().take()
    }
}

pub fn lookup_one(
    fetcher: Arc<ScoreFetcher>,
    username: String,
    repaint: Option<egui::Context>,
) -> Pending<SingleReport> {
    info!(%username, "checking user");

    Pending::spawn(repaint, move || SingleReport::build(fetcher.fetch(&username)))
}

/// Both users are fetched at the same time; the report is built once both are back.
pub fn lookup_pair(
    fetcher: Arc<ScoreFetcher>,
    first: String,
    second: String,
    repaint: Option<egui::Context>,
) -> Pending<ComparisonReport> {
    info!(%first, %second, "comparing users");

    Pending::spawn(repaint, move || {
        let (a, b) = thread::scope(|scope| {
            let a = scope.spawn(|| fetcher.fetch(&first).ok());
            let b = fetcher.fetch(&second).ok();
            (a.join().unwrap_or(None), b)
        });

        ComparisonReport::build(&first, &second, PairOutcome::new(a, b))
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn wait<T: Send + Sync + 'static>(pending: &Pending<T>) -> T {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = pending.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "worker never finished");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn delivers_result_once() {
        let pending = Pending::spawn(None, || 6 * 7);

        assert_eq!(wait(&pending), 42);
        assert_eq!(pending.poll(), None);
    }

    #[test]
    fn not_ready_while_job_runs() {
        let (tx, rx) = std::sync::mpsc::channel::<()>();
        let pending = Pending::spawn(None, move || {
            rx.recv().ok();
            "done"
        });

        assert_eq!(pending.poll(), None);
        tx.send(()).unwrap();
        assert_eq!(wait(&pending), "done");
    }
}
