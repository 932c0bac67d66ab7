//! Progress reporting for reachability probes

use brewenv_application::{ProbeProgressNotifier, ProbeTarget};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Spinner shown while probes are in flight
pub struct ProbeSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProbeSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProbeSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeProgressNotifier for ProbeSpinner {
    fn on_probe_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Probing");
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_probe_complete(&self, target: &ProbeTarget, reachable: bool) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if reachable {
                format!("{} {}", "v".green(), target.kind)
            } else {
                format!("{} {}", "x".red(), target.kind)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_finish(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Line-per-probe progress for non-interactive output
pub struct SimpleProbeProgress;

impl ProbeProgressNotifier for SimpleProbeProgress {
    fn on_probe_start(&self, total: usize) {
        eprintln!("{} {} ({} targets)", "->".cyan(), "Probing".bold(), total);
    }

    fn on_probe_complete(&self, target: &ProbeTarget, reachable: bool) {
        if reachable {
            eprintln!("  {} {}", "v".green(), target.kind);
        } else {
            eprintln!("  {} {} (unreachable)", "x".red(), target.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewenv_application::ProbeKind;
    use url::Url;

    #[test]
    fn test_spinner_lifecycle() {
        let spinner = ProbeSpinner::new();
        let target = ProbeTarget::new(
            ProbeKind::Api,
            Url::parse("http://127.0.0.1:5000/drinks").unwrap(),
        );

        spinner.on_probe_start(3);
        spinner.on_probe_complete(&target, true);
        spinner.on_probe_complete(&target, false);
        {
            let bar = spinner.bar.lock().unwrap();
            let pb = bar.as_ref().unwrap();
            assert_eq!(pb.position(), 2);
            assert_eq!(pb.length(), Some(3));
        }

        spinner.on_finish();
        assert!(spinner.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_ignored() {
        let spinner = ProbeSpinner::default();
        let target = ProbeTarget::new(
            ProbeKind::Jwks,
            Url::parse("https://tsitokely.us.auth0.com/.well-known/jwks.json").unwrap(),
        );
        spinner.on_probe_complete(&target, true);
        spinner.on_finish();
        assert!(spinner.bar.lock().unwrap().is_none());
    }
}
