use serde::{Deserialize, Serialize};

use crate::models::slider::{Bounds, PointerScope, WindowEvent};

/// Divider position of the before/after comparison slider.
///
/// Holds a percent-from-left in [0, 100] and whether a drag is in progress.
/// Movement over the slider element always moves the divider; movement
/// observed at window scope only does while engaged, so a drag continues
/// after the pointer leaves the element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionTracker {
    position: f64,
    engaged: bool,
}

impl PositionTracker {
    /// Midpoint divider, not engaged.
    pub fn new() -> Self {
        Self::with_position(50.0)
    }

    /// Start at a given percentage (clamped).
    pub fn with_position(position: f64) -> Self {
        let position = if position.is_nan() { 50.0 } else { position.clamp(0.0, 100.0) };
        Self {
            position,
            engaged: false,
        }
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Mark a drag as started.
    pub fn begin(&mut self) {
        self.engaged = true;
    }

    /// Mark the drag as finished. Safe to call when not engaged.
    pub fn end(&mut self) {
        self.engaged = false;
    }

    /// Start a drag and move the divider to where it started.
    pub fn begin_at(&mut self, client_x: f64, bounds: Option<Bounds>) -> bool {
        self.begin();
        self.update_from_bounds(client_x, bounds)
    }

    /// Move the divider to `client_x` within the element spanning
    /// `[bounds_left, bounds_left + bounds_width]`.
    ///
    /// Returns `false` (position unchanged) when the width is not positive
    /// or the coordinate is not a number.
    pub fn update_from_pointer(&mut self, client_x: f64, bounds_left: f64, bounds_width: f64) -> bool {
        if bounds_width.is_nan() || bounds_width <= 0.0 {
            return false;
        }
        let raw = (client_x - bounds_left) / bounds_width * 100.0;
        if raw.is_nan() {
            return false;
        }
        self.position = raw.clamp(0.0, 100.0);
        true
    }

    /// Same as [`update_from_pointer`](Self::update_from_pointer), with an
    /// element that may not have been measured yet. Bounds that are not
    /// [measured](Bounds::is_measured) leave the position unchanged.
    pub fn update_from_bounds(&mut self, client_x: f64, bounds: Option<Bounds>) -> bool {
        match bounds {
            Some(b) if b.is_measured() => self.update_from_pointer(client_x, b.left, b.width),
            _ => false,
        }
    }

    /// Pointer movement observed at `scope`.
    pub fn on_pointer_move(
        &mut self,
        scope: PointerScope,
        client_x: f64,
        bounds: Option<Bounds>,
    ) -> bool {
        if !self.accepts(scope) {
            return false;
        }
        self.update_from_bounds(client_x, bounds)
    }

    /// Touch movement observed at `scope`. Only the first touch point counts.
    pub fn on_touch_move(
        &mut self,
        scope: PointerScope,
        touches: &[f64],
        bounds: Option<Bounds>,
    ) -> bool {
        match touches.first() {
            Some(&x) => self.on_pointer_move(scope, x, bounds),
            None => false,
        }
    }

    /// Dispatch a window-scope event. Returns whether the position moved.
    pub fn handle_window_event(&mut self, event: &WindowEvent, bounds: Option<Bounds>) -> bool {
        match event {
            WindowEvent::PointerUp | WindowEvent::TouchEnd => {
                self.end();
                false
            }
            WindowEvent::PointerMove { client_x } => {
                self.on_pointer_move(PointerScope::Window, *client_x, bounds)
            }
            WindowEvent::TouchMove { touches } => {
                self.on_touch_move(PointerScope::Window, touches, bounds)
            }
        }
    }

    // ── Rendering outputs ───────────────────────────────────────────

    /// Right inset of the "before" layer, in percent.
    #[must_use]
    pub fn clip_inset_right(&self) -> f64 {
        100.0 - self.position
    }

    /// CSS `clip-path` for the "before" layer.
    #[must_use]
    pub fn clip_path(&self) -> String {
        format!("inset(0 {}% 0 0)", self.clip_inset_right())
    }

    /// CSS `left` offset of the divider handle.
    #[must_use]
    pub fn handle_left(&self) -> String {
        format!("{}%", self.position)
    }

    fn accepts(&self, scope: PointerScope) -> bool {
        match scope {
            PointerScope::Target => true,
            PointerScope::Window => self.engaged,
        }
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}
