// src/viewport.rs
use crate::config::RenderConfig;
use macroquad::prelude::*;
use std::time::Duration;

/// Uniform scale that fits a `logical_*` canvas inside a `viewport_*` window.
///
/// Degenerate logical sizes scale to 0 rather than producing NaN or infinity.
pub fn compute_scale(
    viewport_width: f32,
    viewport_height: f32,
    logical_width: f32,
    logical_height: f32,
) -> f32 {
    if logical_width <= 0.0 || logical_height <= 0.0 {
        return 0.0;
    }
    (viewport_width / logical_width)
        .min(viewport_height / logical_height)
        .max(0.0)
}

/// A scheduled, cancellable recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingResize {
    deadline: f64,
    viewport: Vec2,
}

/// Coalesces bursts of resize events into one recomputation.
///
/// Each event cancels the outstanding timer and schedules a fresh one; only a
/// timer that survives a full quiet window fires.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    quiet: Duration,
    pending: Option<PendingResize>,
}

impl ResizeDebouncer {
    /// Debouncer with the given quiet window.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record a resize seen at `now` (seconds).
    pub fn signal(&mut self, viewport: Vec2, now: f64) {
        self.pending = Some(PendingResize {
            deadline: now + self.quiet.as_secs_f64(),
            viewport,
        });
    }

    /// Whether a timer is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the viewport of an expired timer, at most once per timer.
    pub fn fire(&mut self, now: f64) -> Option<Vec2> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some(p.viewport)
            }
            _ => None,
        }
    }
}

/// Current canvas scale plus its debounced resize handling.
#[derive(Debug, Clone)]
pub struct ViewportScaler {
    logical: Vec2,
    viewport: Vec2,
    scale: f32,
    debouncer: ResizeDebouncer,
}

impl ViewportScaler {
    /// Scaler for `viewport`; the initial scale is computed immediately.
    pub fn new(viewport: Vec2, config: &RenderConfig) -> Self {
        let logical = config.logical_size();
        Self {
            logical,
            viewport,
            scale: compute_scale(viewport.x, viewport.y, logical.x, logical.y),
            debouncer: ResizeDebouncer::new(config.resize_quiet),
        }
    }

    /// Scale currently in effect.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Logical canvas size.
    pub fn logical_size(&self) -> Vec2 {
        self.logical
    }

    /// On-screen size of the scaled canvas.
    pub fn canvas_size(&self) -> Vec2 {
        self.logical * self.scale
    }

    /// Feed the window size observed at `now`; ignored while it is unchanged.
    pub fn observe(&mut self, viewport: Vec2, now: f64) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.debouncer.signal(viewport, now);
        }
    }

    /// Publish a new scale once the quiet window has passed.
    pub fn poll(&mut self, now: f64) -> Option<f32> {
        let viewport = self.debouncer.fire(now)?;
        self.scale = compute_scale(viewport.x, viewport.y, self.logical.x, self.logical.y);
        tracing::debug!(
            width = viewport.x,
            height = viewport.y,
            scale = self.scale,
            "viewport rescaled"
        );
        Some(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig {
            resize_quiet: Duration::from_millis(100),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn exact_fit_doubles() {
        assert_eq!(compute_scale(2048.0, 1536.0, 1024.0, 768.0), 2.0);
    }

    #[test]
    fn narrow_window_is_width_bound() {
        let s = compute_scale(500.0, 1000.0, 1024.0, 768.0);
        assert!((s - 500.0 / 1024.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_logical_size_scales_to_zero() {
        assert_eq!(compute_scale(800.0, 600.0, 0.0, 768.0), 0.0);
    }

    #[test]
    fn initial_scale_needs_no_debounce() {
        let scaler = ViewportScaler::new(vec2(1024.0, 768.0), &config());
        assert_eq!(scaler.scale(), 1.0);
        assert_eq!(scaler.canvas_size(), vec2(1024.0, 768.0));
    }

    #[test]
    fn burst_of_resizes_publishes_once_with_last_size() {
        let mut scaler = ViewportScaler::new(vec2(1024.0, 768.0), &config());

        scaler.observe(vec2(1100.0, 800.0), 0.00);
        scaler.observe(vec2(1500.0, 900.0), 0.05);
        scaler.observe(vec2(2048.0, 1536.0), 0.09);

        // The first two timers were cancelled; the last one is still quiet.
        assert_eq!(scaler.poll(0.15), None);
        assert_eq!(scaler.scale(), 1.0);

        assert_eq!(scaler.poll(0.20), Some(2.0));
        assert_eq!(scaler.poll(0.50), None);
        assert_eq!(scaler.scale(), 2.0);
    }

    #[test]
    fn unchanged_size_schedules_nothing() {
        let mut scaler = ViewportScaler::new(vec2(800.0, 600.0), &config());
        scaler.observe(vec2(800.0, 600.0), 1.0);
        assert_eq!(scaler.poll(5.0), None);
    }

    #[test]
    fn debouncer_cancels_outstanding_timer() {
        let mut d = ResizeDebouncer::new(Duration::from_millis(100));
        d.signal(vec2(1.0, 1.0), 0.0);
        d.signal(vec2(2.0, 2.0), 0.08);
        assert_eq!(d.fire(0.12), None);
        assert!(d.is_pending());
        assert_eq!(d.fire(0.2), Some(vec2(2.0, 2.0)));
        assert!(!d.is_pending());
    }
}
