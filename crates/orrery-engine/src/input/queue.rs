use crate::api::types::EntityId;

/// Input event types the engine understands.
/// Pointer events arrive already hit-tested by the host, scoped to one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer entered the target's hit region.
    PointerEnter { target: EntityId },
    /// The pointer left the target's hit region.
    PointerLeave { target: EntityId },
    /// The target was clicked.
    Click { target: EntityId },
    /// A custom event from the UI layer (control buttons, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host pushes events between frames; the runner drains them after each update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the host via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events in arrival order without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerEnter { target: EntityId(3) });
        q.push(InputEvent::Click { target: EntityId(3) });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn preserves_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerEnter { target: EntityId(1) });
        q.push(InputEvent::PointerLeave { target: EntityId(1) });
        let kinds: Vec<_> = q.iter().copied().collect();
        assert_eq!(
            kinds,
            vec![
                InputEvent::PointerEnter { target: EntityId(1) },
                InputEvent::PointerLeave { target: EntityId(1) },
            ]
        );
    }

    #[test]
    fn custom_event() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 2, a: 1.5, b: 0.0, c: 0.0 });
        match q.drain()[0] {
            InputEvent::Custom { kind, a, .. } => {
                assert_eq!(kind, 2);
                assert_eq!(a, 1.5);
            }
            _ => panic!("Expected Custom event"),
        }
    }
}
