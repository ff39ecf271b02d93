use serde::{Deserialize, Serialize};

/// Measured horizontal extent of the comparison slider element,
/// in the same coordinate space as pointer `client_x` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// True when the element has been laid out with a positive width.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.left.is_finite() && self.width.is_finite()
    }
}

/// Where a movement event was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerScope {
    /// Directly over the slider element
    Target,
    /// Anywhere in the window
    Window,
}

/// Window-level input the slider listens to while mounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowEvent {
    PointerUp,
    PointerMove { client_x: f64 },
    TouchEnd,
    /// X coordinates of the active touch points, in touch order
    TouchMove { touches: Vec<f64> },
}

impl WindowEvent {
    #[must_use]
    pub fn kind(&self) -> ListenerKind {
        match self {
            WindowEvent::PointerUp => ListenerKind::PointerUp,
            WindowEvent::PointerMove { .. } => ListenerKind::PointerMove,
            WindowEvent::TouchEnd => ListenerKind::TouchEnd,
            WindowEvent::TouchMove { .. } => ListenerKind::TouchMove,
        }
    }
}

/// Window event types a listener can be attached for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerKind {
    PointerUp,
    PointerMove,
    TouchEnd,
    TouchMove,
}

impl ListenerKind {
    /// Every kind the comparison slider needs at window scope.
    pub const SLIDER: [ListenerKind; 4] = [
        ListenerKind::PointerUp,
        ListenerKind::PointerMove,
        ListenerKind::TouchEnd,
        ListenerKind::TouchMove,
    ];
}

impl std::fmt::Display for ListenerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerKind::PointerUp => write!(f, "mouseup"),
            ListenerKind::PointerMove => write!(f, "mousemove"),
            ListenerKind::TouchEnd => write!(f, "touchend"),
            ListenerKind::TouchMove => write!(f, "touchmove"),
        }
    }
}

/// Handle returned by an event target when a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u64);
