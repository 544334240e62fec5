// Copyright 2026 the Swish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable sweep metrics for demo harnesses.

#![no_std]

extern crate alloc;

use alloc::string::String;

use swish_core::trace::SweepSummary;

/// Per-sweep metrics sample fed into [`RevealTracker::observe`].
#[derive(Clone, Copy, Debug)]
pub struct SweepSample {
    /// Live nodes scanned during the sweep.
    pub scanned: u32,
    /// Nodes newly revealed during the sweep.
    pub newly_revealed: u32,
    /// Wall-clock duration of the sweep in milliseconds.
    pub sweep_ms: f64,
}

impl From<&SweepSummary> for SweepSample {
    fn from(summary: &SweepSummary) -> Self {
        Self {
            scanned: summary.scanned,
            newly_revealed: summary.newly_revealed,
            sweep_ms: 0.0,
        }
    }
}

/// Aggregated report returned by [`RevealTracker::observe`].
#[derive(Clone, Copy, Debug)]
pub struct RevealReport {
    /// Fraction of scanned nodes revealed so far, `0.0..=1.0`.
    ///
    /// Scanned is taken from the most recent sweep; revealed accumulates, so
    /// once everything is on screen this reaches 1.0 and stays there.
    pub coverage: f64,
    /// Total sweeps observed.
    pub total_sweeps: u64,
    /// Total reveal transitions observed.
    pub total_revealed: u64,
    /// Current sweep's duration in milliseconds.
    pub sweep_ms: f64,
}

/// Rolling sweep tracker with fixed-size duration history.
#[derive(Debug)]
pub struct RevealTracker<const N: usize> {
    sweep_ms: [f64; N],
    cursor: usize,
    total_sweeps: u64,
    total_revealed: u64,
    last_scanned: u32,
}

impl<const N: usize> Default for RevealTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RevealTracker<N> {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sweep_ms: [0.0; N],
            cursor: 0,
            total_sweeps: 0,
            total_revealed: 0,
            last_scanned: 0,
        }
    }

    /// Observes one sweep and returns an updated report.
    #[must_use]
    pub fn observe(&mut self, sample: SweepSample) -> RevealReport {
        self.total_sweeps = self.total_sweeps.saturating_add(1);
        self.total_revealed = self.total_revealed.saturating_add(sample.newly_revealed.into());
        self.last_scanned = sample.scanned;
        self.sweep_ms[self.cursor % N] = sample.sweep_ms;
        self.cursor = (self.cursor + 1) % N;

        let coverage = if self.last_scanned == 0 {
            0.0
        } else {
            (self.total_revealed as f64 / f64::from(self.last_scanned)).min(1.0)
        };

        RevealReport {
            coverage,
            total_sweeps: self.total_sweeps,
            total_revealed: self.total_revealed,
            sweep_ms: sample.sweep_ms,
        }
    }

    /// Returns ring-buffer sweep durations oldest→newest.
    #[must_use]
    pub fn sweep_durations(&self) -> [f64; N] {
        let mut out = [0.0; N];
        let mut i = 0;
        while i < N {
            let idx = (self.cursor + i) % N;
            out[i] = self.sweep_ms[idx];
            i += 1;
        }
        out
    }

    /// Returns an ASCII sparkline over `sweep_durations()`.
    #[must_use]
    pub fn sparkline_ascii(&self, min_ms: f64, max_ms: f64) -> String {
        const LEVELS: &[u8] = b" .:-=+*#%@";
        let mut out = String::with_capacity(N);
        let mut i = 0;
        while i < N {
            let idx = (self.cursor + i) % N;
            let v = self.sweep_ms[idx].clamp(min_ms, max_ms);
            let t = (v - min_ms) / (max_ms - min_ms);
            #[expect(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "t is clamped to 0..=1 before scaling"
            )]
            let level = (t * (LEVELS.len() as f64 - 1.0) + 0.5) as usize;
            out.push(LEVELS[level] as char);
            i += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scanned: u32, newly_revealed: u32, sweep_ms: f64) -> SweepSample {
        SweepSample {
            scanned,
            newly_revealed,
            sweep_ms,
        }
    }

    #[test]
    fn totals_accumulate() {
        let mut t = RevealTracker::<8>::new();
        let _ = t.observe(sample(10, 3, 0.1));
        let report = t.observe(sample(10, 2, 0.1));
        assert_eq!(report.total_sweeps, 2);
        assert_eq!(report.total_revealed, 5);
    }

    #[test]
    fn coverage_reaches_one_and_saturates() {
        let mut t = RevealTracker::<8>::new();
        let _ = t.observe(sample(4, 2, 0.1));
        let report = t.observe(sample(4, 2, 0.1));
        assert!((report.coverage - 1.0).abs() < 1e-9);

        // Idempotent sweeps after full reveal keep coverage at 1.0.
        let report = t.observe(sample(4, 0, 0.1));
        assert!((report.coverage - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_scan_has_zero_coverage() {
        let mut t = RevealTracker::<8>::new();
        let report = t.observe(sample(0, 0, 0.0));
        assert_eq!(report.coverage, 0.0);
    }

    #[test]
    fn durations_roll_oldest_to_newest() {
        let mut t = RevealTracker::<4>::new();
        for i in 0..6 {
            let _ = t.observe(sample(1, 0, f64::from(i)));
        }
        // Ring of 4: last four observed durations were 2, 3, 4, 5.
        assert_eq!(t.sweep_durations(), [2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn sparkline_has_fixed_width() {
        let mut t = RevealTracker::<16>::new();
        let _ = t.observe(sample(1, 1, 0.5));
        let line = t.sparkline_ascii(0.0, 1.0);
        assert_eq!(line.len(), 16);
    }

    #[test]
    fn sample_from_sweep_summary() {
        let summary = SweepSummary {
            tick_index: 7,
            scanned: 12,
            newly_revealed: 4,
        };
        let sample = SweepSample::from(&summary);
        assert_eq!(sample.scanned, 12);
        assert_eq!(sample.newly_revealed, 4);
        assert_eq!(sample.sweep_ms, 0.0);
    }
}
