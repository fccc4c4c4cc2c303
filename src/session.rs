//! Scoped compute session
//!
//! A [`ComputeSession`] is opened before the first stage and released when it
//! is dropped, so the release runs on the error path as well. It carries a
//! trace id and per-stage timings for the run.

use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// Timing summary handed to release hooks
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub trace_id: Uuid,
    pub app_name: String,
    pub elapsed: Duration,
    /// Stage timings in the order the stages ran
    pub stages: Vec<(String, Duration)>,
}

impl SessionSummary {
    /// Names of the stages that completed, in order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|(name, _)| name.as_str()).collect()
    }
}

type ReleaseHook = Box<dyn FnOnce(&SessionSummary)>;

/// Session scope for one pipeline run
pub struct ComputeSession {
    /// Unique trace ID for this run
    pub trace_id: Uuid,
    app_name: String,
    start_time: Instant,
    stage_timings: Vec<(String, Duration)>,
    on_release: Option<ReleaseHook>,
}

impl ComputeSession {
    /// Open a new session
    pub fn open(app_name: impl Into<String>) -> Self {
        let session = Self {
            trace_id: Uuid::new_v4(),
            app_name: app_name.into(),
            start_time: Instant::now(),
            stage_timings: Vec::new(),
            on_release: None,
        };
        info!(app = %session.app_name, trace_id = %session.trace_id, "session opened");
        session
    }

    /// Run `hook` with the final summary when the session is released
    pub fn on_release<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(&SessionSummary) + 'static,
    {
        self.on_release = Some(Box::new(hook));
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Record timing for a stage
    pub fn record_stage_timing(&mut self, stage: impl Into<String>, duration: Duration) {
        self.stage_timings.push((stage.into(), duration));
    }

    /// Time a stage execution
    ///
    /// The stage is recorded whether or not it succeeds.
    pub fn time_stage<F, R>(&mut self, stage: impl Into<String>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let stage_name = stage.into();
        let start = Instant::now();
        let result = f();
        let duration = start.elapsed();
        debug!(stage = %stage_name, ?duration, "stage finished");
        self.record_stage_timing(stage_name, duration);
        result
    }

    /// Get total elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get stage timings
    pub fn stage_timings(&self) -> &[(String, Duration)] {
        &self.stage_timings
    }

    fn summary(&self) -> SessionSummary {
        SessionSummary {
            trace_id: self.trace_id,
            app_name: self.app_name.clone(),
            elapsed: self.elapsed(),
            stages: self.stage_timings.clone(),
        }
    }
}

impl fmt::Debug for ComputeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputeSession")
            .field("trace_id", &self.trace_id)
            .field("app_name", &self.app_name)
            .field("stage_timings", &self.stage_timings)
            .finish_non_exhaustive()
    }
}

impl Drop for ComputeSession {
    fn drop(&mut self) {
        let summary = self.summary();
        for (stage, duration) in &summary.stages {
            debug!(stage = %stage, ?duration, "stage timing");
        }
        info!(
            app = %summary.app_name,
            trace_id = %summary.trace_id,
            elapsed = ?summary.elapsed,
            stages = summary.stages.len(),
            "session released"
        );
        if let Some(hook) = self.on_release.take() {
            hook(&summary);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_session_timing() {
        let mut session = ComputeSession::open("test");
        let value = session.time_stage("stage1", || 42);
        assert_eq!(value, 42);
        session.record_stage_timing("stage2", Duration::from_millis(5));

        let names: Vec<_> = session.stage_timings().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["stage1", "stage2"]);
        assert_eq!(session.app_name(), "test");
    }

    #[test]
    fn test_release_hook_runs_on_drop() {
        let seen: Rc<RefCell<Option<SessionSummary>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        {
            let mut session = ComputeSession::open("test")
                .on_release(move |summary| *sink.borrow_mut() = Some(summary.clone()));
            session.time_stage("load", || ());
        }

        let summary = seen.borrow_mut().take().expect("hook ran");
        assert_eq!(summary.app_name, "test");
        assert_eq!(summary.stage_names(), vec!["load"]);
    }

    #[test]
    fn test_release_hook_runs_on_early_return() {
        fn failing(released: Rc<RefCell<bool>>) -> Result<(), String> {
            let mut session =
                ComputeSession::open("test").on_release(move |_| *released.borrow_mut() = true);
            session.time_stage("load", || Err::<(), _>("boom".to_string()))?;
            Ok(())
        }

        let released = Rc::new(RefCell::new(false));
        assert!(failing(Rc::clone(&released)).is_err());
        assert!(*released.borrow());
    }
}
