//! Bounded background worker pool.
//!
//! A fixed set of detached worker threads drains a bounded FIFO queue.
//! Both sizes come from configuration at construction time and never
//! change; reconfiguration means shutting the pool down and building a
//! new one. Overflow degrades to synchronous execution on the submitting
//! thread (back-pressure by slowdown, never rejection) so no work is
//! silently lost.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam::channel::{self, Receiver, Sender};
use crossbeam::select;
use tracing::debug;

use crate::config::AsyncSettings;
use crate::error::TurbineError;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Bounded worker pool sized from an [`AsyncSettings`] slice.
pub struct WorkerPool {
    jobs: Sender<Job>,
    quit: Sender<()>,
    shutting_down: AtomicBool,
    completed: Arc<AtomicU64>,
    workers: usize,
    capacity: usize,
}

impl WorkerPool {
    /// Builds a pool with `effective_worker_threads()` workers and an
    /// `effective_max_queue()`-deep queue.
    ///
    /// Worker threads are detached so they never block process exit.
    pub fn build(settings: &AsyncSettings) -> Result<Self, TurbineError> {
        let workers = settings.effective_worker_threads();
        let capacity = settings.effective_max_queue();

        let (jobs_tx, jobs_rx) = channel::bounded::<Job>(capacity);
        let (quit_tx, quit_rx) = channel::bounded::<()>(workers);
        let completed = Arc::new(AtomicU64::new(0));

        for index in 0..workers {
            let jobs_rx = jobs_rx.clone();
            let quit_rx = quit_rx.clone();
            let completed = completed.clone();
            thread::Builder::new()
                .name(format!("turbine-worker-{index}"))
                .spawn(move || worker_loop(jobs_rx, quit_rx, completed))?;
        }

        debug!("Worker pool built: {} worker(s), queue capacity {}", workers, capacity);

        Ok(Self {
            jobs: jobs_tx,
            quit: quit_tx,
            shutting_down: AtomicBool::new(false),
            completed,
            workers,
            capacity,
        })
    }

    /// Enqueues `job`, or runs it synchronously on the calling thread when
    /// the queue is full or the pool is shut down. Never rejects, never
    /// drops.
    pub fn submit(&self, job: impl FnOnce() + Send + 'static) {
        if self.shutting_down.load(Ordering::SeqCst) {
            job();
            return;
        }
        if let Err(send_error) = self.jobs.try_send(Box::new(job)) {
            // Queue full (or workers already gone): caller runs the job.
            (send_error.into_inner())();
        }
    }

    /// Requests immediate shutdown: queued jobs are abandoned and each
    /// worker exits as soon as it finishes its in-flight job. Idempotent
    /// and safe to call even if nothing was ever submitted.
    pub fn shutdown_now(&self) {
        self.shutting_down.store(true, Ordering::SeqCst);
        for _ in 0..self.workers {
            let _ = self.quit.try_send(());
        }
    }

    /// Number of jobs currently waiting in the queue.
    pub fn queue_depth(&self) -> usize {
        self.jobs.len()
    }

    /// Total jobs completed by pool workers. Jobs degraded to caller-runs
    /// are not counted.
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Number of worker threads this pool was built with.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Queue capacity this pool was built with.
    pub fn queue_capacity(&self) -> usize {
        self.capacity
    }
}

fn worker_loop(jobs: Receiver<Job>, quit: Receiver<()>, completed: Arc<AtomicU64>) {
    loop {
        // Prefer the quit signal over draining further queued work.
        if quit.try_recv().is_ok() {
            break;
        }
        select! {
            recv(quit) -> _ => break,
            recv(jobs) -> job => match job {
                Ok(job) => {
                    job();
                    completed.fetch_add(1, Ordering::Relaxed);
                }
                Err(_) => break,
            },
        }
    }
}
