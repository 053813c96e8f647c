use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Operation counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub movies_created: Arc<AtomicUsize>,
    pub movies_deleted: Arc<AtomicUsize>,
    pub directors_updated: Arc<AtomicUsize>,
    pub directors_deleted: Arc<AtomicUsize>,
    pub genres_updated: Arc<AtomicUsize>,
    pub genres_deleted: Arc<AtomicUsize>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            movies_created: Arc::new(AtomicUsize::new(0)),
            movies_deleted: Arc::new(AtomicUsize::new(0)),
            directors_updated: Arc::new(AtomicUsize::new(0)),
            directors_deleted: Arc::new(AtomicUsize::new(0)),
            genres_updated: Arc::new(AtomicUsize::new(0)),
            genres_deleted: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_movies_created(&self) {
        self.movies_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_movies_deleted(&self) {
        self.movies_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_directors_updated(&self) {
        self.directors_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_directors_deleted(&self) {
        self.directors_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_genres_updated(&self) {
        self.genres_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_genres_deleted(&self) {
        self.genres_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            movies_created: self.movies_created.load(Ordering::Relaxed),
            movies_deleted: self.movies_deleted.load(Ordering::Relaxed),
            directors_updated: self.directors_updated.load(Ordering::Relaxed),
            directors_deleted: self.directors_deleted.load(Ordering::Relaxed),
            genres_updated: self.genres_updated.load(Ordering::Relaxed),
            genres_deleted: self.genres_deleted.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub movies_created: usize,
    pub movies_deleted: usize,
    pub directors_updated: usize,
    pub directors_deleted: usize,
    pub genres_updated: usize,
    pub genres_deleted: usize,
    pub uptime_seconds: u64,
}
