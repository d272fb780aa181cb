/// Pointer buttons, numbered as in DOM `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u32),
}

impl PointerButton {
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            2 => PointerButton::Secondary,
            n => PointerButton::Other(n),
        }
    }
}

/// Input event types the engine understands.
/// Coordinates are canvas pixels. No app-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed at (x, y).
    PointerDown { x: f32, y: f32, button: PointerButton },
    /// A pointer button was released at (x, y).
    PointerUp { x: f32, y: f32, button: PointerButton },
    /// The pointer moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// Wheel scrolled with the pointer at (x, y).
    /// `delta` counts notches; positive means away from the user (zoom in).
    Wheel { x: f32, y: f32, delta: f32 },
    /// A key was pressed (DOM `keyCode`, see [`crate::input::keys`]).
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The host is shutting the view down.
    Quit,
}

/// A queue of input events.
/// The host writes events into the queue; the runner clears it after each
/// processed frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Iterate over pending events in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Drop all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
