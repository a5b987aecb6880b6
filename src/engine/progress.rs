//! Progress tracking and callback system for UI integration

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Progress callback trait for UI integration
pub trait ProgressCallback: Send + Sync {
    /// Called when the split run starts
    fn on_start(&self, operation: &str, total_segments: Option<u64>);

    /// Called after each completed segment
    fn on_progress(&self, completed: u64, total: Option<u64>, message: Option<String>);

    /// Called when the run completes successfully
    fn on_complete(&self, message: Option<String>);

    /// Called when the run fails
    fn on_error(&self, error: &str);
}

/// Detailed progress information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressInfo {
    /// Current phase
    pub phase: SplitPhase,
    /// Progress percentage (0.0 - 100.0)
    pub percent: f64,
    /// Completed segments
    pub completed: u64,
    /// Total segments (if known)
    pub total: Option<u64>,
    /// Current operation description
    pub message: String,
    /// Time elapsed since start
    pub elapsed: Duration,
    /// Estimated time remaining
    pub eta: Option<Duration>,
}

/// Split run phases
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SplitPhase {
    /// Initializing the run
    Initializing,
    /// Probing the input file
    Probing,
    /// Planning segment windows
    Planning,
    /// Encoding segments
    Encoding,
    /// Run completed
    Complete,
    /// Run failed
    Failed,
}

/// Progress tracker with thread-safe updates
#[derive(Clone)]
pub struct ProgressTracker {
    inner: Arc<Mutex<ProgressTrackerInner>>,
    callbacks: Arc<Mutex<Vec<Arc<dyn ProgressCallback>>>>,
}

struct ProgressTrackerInner {
    info: ProgressInfo,
    start_time: Instant,
    last_update: Instant,
    update_interval: Duration,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new(operation: &str) -> Self {
        let info = ProgressInfo {
            phase: SplitPhase::Initializing,
            percent: 0.0,
            completed: 0,
            total: None,
            message: operation.to_string(),
            elapsed: Duration::from_secs(0),
            eta: None,
        };

        let inner = ProgressTrackerInner {
            info,
            start_time: Instant::now(),
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100),
        };

        Self {
            inner: Arc::new(Mutex::new(inner)),
            callbacks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a progress callback
    pub fn add_callback(&self, callback: Arc<dyn ProgressCallback>) {
        if let Ok(mut callbacks) = self.callbacks.lock() {
            callbacks.push(callback);
        }
    }

    /// Start the run with the planned segment count
    pub fn start(&self, operation: &str, total_segments: Option<u64>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.info.phase = SplitPhase::Initializing;
            inner.info.message = operation.to_string();
            inner.info.total = total_segments;
            inner.start_time = Instant::now();
            // let the first real update through
            inner.last_update = Instant::now()
                .checked_sub(inner.update_interval)
                .unwrap_or_else(Instant::now);
        }

        self.notify_callbacks(|cb| cb.on_start(operation, total_segments));
    }

    /// Record completed segments
    pub fn update(&self, completed: u64, message: Option<String>) {
        let should_update = {
            match self.inner.lock().ok() {
                Some(ref inner) => inner.last_update.elapsed() >= inner.update_interval,
                None => false,
            }
        };

        if !should_update {
            return;
        }

        if let Ok(mut inner) = self.inner.lock() {
            let now = Instant::now();
            inner.info.completed = completed;
            inner.info.elapsed = now.duration_since(inner.start_time);
            inner.last_update = now;

            if let Some(ref msg) = message {
                inner.info.message = msg.clone();
            }

            if let Some(total) = inner.info.total {
                // percent never moves backwards
                let percent = (completed as f64 / total as f64 * 100.0).min(100.0);
                inner.info.percent = percent.max(inner.info.percent);

                if completed > 0 && inner.info.percent < 100.0 {
                    let rate = completed as f64 / inner.info.elapsed.as_secs_f64();
                    if rate > 0.0 {
                        let remaining = total - completed;
                        inner.info.eta = Some(Duration::from_secs_f64(remaining as f64 / rate));
                    }
                }
            }
        }

        self.notify_callbacks(|cb| cb.on_progress(completed, self.get_total(), message.clone()));
    }

    /// Set the current phase
    pub fn set_phase(&self, phase: SplitPhase, message: Option<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.info.phase = phase;
            if let Some(msg) = message {
                inner.info.message = msg;
            }
        }
    }

    /// Complete the run successfully
    pub fn complete(&self, message: Option<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.info.phase = SplitPhase::Complete;
            inner.info.percent = 100.0;
            if let Some(total) = inner.info.total {
                inner.info.completed = total;
            }
            inner.info.eta = None;
            if let Some(ref msg) = message {
                inner.info.message = msg.clone();
            }
        }

        self.notify_callbacks(|cb| cb.on_complete(message.clone()));
    }

    /// Mark the run as failed
    pub fn error(&self, error: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.info.phase = SplitPhase::Failed;
            inner.info.message = error.to_string();
        }

        self.notify_callbacks(|cb| cb.on_error(error));
    }

    /// Get current progress information
    pub fn get_info(&self) -> Option<ProgressInfo> {
        self.inner.lock().ok().map(|inner| inner.info.clone())
    }

    /// Get the total segment count
    pub fn get_total(&self) -> Option<u64> {
        self.inner.lock().ok().and_then(|inner| inner.info.total)
    }

    /// Set the minimum interval between recorded updates
    pub fn set_update_interval(&self, interval: Duration) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.update_interval = interval;
        }
    }

    /// Notify all callbacks
    fn notify_callbacks<F>(&self, f: F)
    where
        F: Fn(&dyn ProgressCallback),
    {
        if let Ok(callbacks) = self.callbacks.lock() {
            for callback in callbacks.iter() {
                f(callback.as_ref());
            }
        }
    }
}

/// Console progress callback for CLI usage
pub struct ConsoleProgressCallback {
    verbose: bool,
}

impl ConsoleProgressCallback {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_start(&self, operation: &str, total_segments: Option<u64>) {
        println!("Processing Clips...");
        if self.verbose {
            println!("   Operation: {}", operation);
            if let Some(total) = total_segments {
                println!("   Total segments: {}", total);
            }
        }
    }

    fn on_progress(&self, completed: u64, total: Option<u64>, message: Option<String>) {
        if let Some(total) = total {
            let percent = (completed as f64 / total as f64 * 100.0).min(100.0);
            let bar_length = 20;
            let filled = (percent / 100.0 * bar_length as f64) as usize;
            let bar = "#".repeat(filled) + &"-".repeat(bar_length - filled);

            if let Some(msg) = message {
                println!("[{}] {:>3.0}% Complete - {}", bar, percent, msg);
            } else {
                println!("[{}] {:>3.0}% Complete", bar, percent);
            }
        } else if self.verbose {
            println!("Progress: {} segments", completed);
        }
    }

    fn on_complete(&self, message: Option<String>) {
        if let Some(msg) = message {
            println!("{}", msg);
        } else {
            println!("Successfully created clips!");
        }
    }

    fn on_error(&self, error: &str) {
        eprintln!("Error during splitting process: {}", error);
    }
}

/// JSON progress callback for structured output
pub struct JsonProgressCallback;

impl JsonProgressCallback {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonProgressCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for JsonProgressCallback {
    fn on_start(&self, operation: &str, total_segments: Option<u64>) {
        let event = serde_json::json!({
            "event": "start",
            "operation": operation,
            "total_segments": total_segments,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        println!("{}", event);
    }

    fn on_progress(&self, completed: u64, total: Option<u64>, message: Option<String>) {
        let percent = total.map(|total| (completed as f64 / total as f64 * 100.0).min(100.0));

        let event = serde_json::json!({
            "event": "progress",
            "completed": completed,
            "total": total,
            "percent": percent,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        println!("{}", event);
    }

    fn on_complete(&self, message: Option<String>) {
        let event = serde_json::json!({
            "event": "complete",
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        println!("{}", event);
    }

    fn on_error(&self, error: &str) {
        let event = serde_json::json!({
            "event": "error",
            "error": error,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        println!("{}", event);
    }
}

/// No-op progress callback for silent library use
pub struct NoOpProgressCallback;

impl ProgressCallback for NoOpProgressCallback {
    fn on_start(&self, _operation: &str, _total_segments: Option<u64>) {}
    fn on_progress(&self, _completed: u64, _total: Option<u64>, _message: Option<String>) {}
    fn on_complete(&self, _message: Option<String>) {}
    fn on_error(&self, _error: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    struct TestCallback {
        started: AtomicBool,
        progress_calls: AtomicU64,
        completed: AtomicBool,
        error_called: AtomicBool,
    }

    impl TestCallback {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                started: AtomicBool::new(false),
                progress_calls: AtomicU64::new(0),
                completed: AtomicBool::new(false),
                error_called: AtomicBool::new(false),
            })
        }
    }

    impl ProgressCallback for TestCallback {
        fn on_start(&self, _operation: &str, _total_segments: Option<u64>) {
            self.started.store(true, Ordering::Relaxed);
        }

        fn on_progress(&self, _completed: u64, _total: Option<u64>, _message: Option<String>) {
            self.progress_calls.fetch_add(1, Ordering::Relaxed);
        }

        fn on_complete(&self, _message: Option<String>) {
            self.completed.store(true, Ordering::Relaxed);
        }

        fn on_error(&self, _error: &str) {
            self.error_called.store(true, Ordering::Relaxed);
        }
    }

    #[test]
    fn basic_workflow() {
        let tracker = ProgressTracker::new("split video");
        tracker.set_update_interval(Duration::from_millis(0));
        let callback = TestCallback::new();
        tracker.add_callback(callback.clone());

        tracker.start("split video", Some(4));
        assert!(callback.started.load(Ordering::Relaxed));

        tracker.update(2, Some("segment 2 of 4".to_string()));
        assert!(callback.progress_calls.load(Ordering::Relaxed) > 0);

        tracker.complete(Some("Successfully created clips!".to_string()));
        assert!(callback.completed.load(Ordering::Relaxed));

        let info = tracker.get_info().unwrap();
        assert_eq!(info.phase, SplitPhase::Complete);
        assert_eq!(info.percent, 100.0);
        assert_eq!(info.completed, 4);
    }

    #[test]
    fn percent_is_monotonic_and_reaches_100() {
        let tracker = ProgressTracker::new("split video");
        tracker.set_update_interval(Duration::from_millis(0));

        tracker.start("split video", Some(5));

        let mut last_percent = 0.0;
        for completed in 1..=5u64 {
            tracker.update(completed, None);
            let info = tracker.get_info().unwrap();
            assert!(info.percent >= last_percent);
            last_percent = info.percent;
        }

        tracker.complete(None);
        assert_eq!(tracker.get_info().unwrap().percent, 100.0);
    }

    #[test]
    fn error_sets_failed_phase() {
        let tracker = ProgressTracker::new("split video");
        let callback = TestCallback::new();
        tracker.add_callback(callback.clone());

        tracker.start("split video", Some(3));
        tracker.error("segment 2 failed");

        assert!(callback.error_called.load(Ordering::Relaxed));
        assert_eq!(tracker.get_info().unwrap().phase, SplitPhase::Failed);
    }
}
