//! Progress notification port
//!
//! Defines the interface for reporting progress while endpoints are probed.

use super::reachability::ProbeTarget;

/// Callback for progress updates during a probe run
///
/// Implementations live in the presentation layer.
pub trait ProbeProgressNotifier: Send + Sync {
    /// Called once before any target is probed
    fn on_probe_start(&self, total_targets: usize);

    /// Called when a single target has been probed
    fn on_probe_complete(&self, target: &ProbeTarget, reachable: bool);

    /// Called after the last target
    fn on_finish(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProbeProgress;

impl ProbeProgressNotifier for NoProbeProgress {
    fn on_probe_start(&self, _total_targets: usize) {}
    fn on_probe_complete(&self, _target: &ProbeTarget, _reachable: bool) {}
}
