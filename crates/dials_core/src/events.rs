//! Event dispatch system
//!
//! Control-level events the host toolkit forwards to widgets. The host
//! owns the native event loop; it translates its toolkit's signals into
//! these events and routes them through an [`EventDispatcher`] keyed by
//! widget id.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Drag event (pointer down + move)
    pub const DRAG: EventType = 4;
    /// Drag ended (pointer up after drag)
    pub const DRAG_END: EventType = 5;

    pub const KEY_DOWN: EventType = 10;

    /// Text committed in an edit control (Enter pressed or focus lost)
    pub const TEXT_COMMIT: EventType = 20;

    /// Item chosen in a discrete-choice control
    pub const ITEM_SELECTED: EventType = 30;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Widget id the event is addressed to
    pub target: u64,
    pub data: EventData,
    pub propagation_stopped: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    Key {
        /// Virtual key code (platform-agnostic, use KeyCode constants)
        key: KeyCode,
        /// Keyboard modifier flags
        modifiers: Modifiers,
        /// Whether this is a repeat event
        repeat: bool,
    },
    /// Committed text from an edit control
    Text {
        text: String,
    },
    /// Selected index in a discrete-choice control
    Selection {
        index: usize,
    },
    None,
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    // Special keys
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);
    pub const PAGE_UP: KeyCode = KeyCode(0x21);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x22);

    // Unknown/unmapped key
    pub const UNKNOWN: KeyCode = KeyCode(0);
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000; // Cmd on macOS, Win on Windows

    /// Create new modifiers from flags
    pub const fn new(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0;
        if shift {
            bits |= Self::SHIFT;
        }
        if ctrl {
            bits |= Self::CTRL;
        }
        if alt {
            bits |= Self::ALT;
        }
        if meta {
            bits |= Self::META;
        }
        Self { bits }
    }

    /// Create from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Check if shift is pressed
    pub const fn shift(&self) -> bool {
        self.bits & Self::SHIFT != 0
    }

    /// Check if ctrl is pressed
    pub const fn ctrl(&self) -> bool {
        self.bits & Self::CTRL != 0
    }

    /// Check if alt is pressed
    pub const fn alt(&self) -> bool {
        self.bits & Self::ALT != 0
    }

    /// Check if meta (Cmd/Win) is pressed
    pub const fn meta(&self) -> bool {
        self.bits & Self::META != 0
    }

    /// Check if any modifier is pressed
    pub const fn any(&self) -> bool {
        self.bits != 0
    }

    /// Check if command key is pressed (Ctrl on non-macOS, Meta on macOS)
    #[cfg(target_os = "macos")]
    pub const fn command(&self) -> bool {
        self.meta()
    }

    /// Check if command key is pressed (Ctrl on non-macOS, Meta on macOS)
    #[cfg(not(target_os = "macos"))]
    pub const fn command(&self) -> bool {
        self.ctrl()
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&mut Event) + Send + Sync>;

/// Dispatches events to registered handlers
pub struct EventDispatcher {
    handlers: FxHashMap<(u64, EventType), SmallVec<[EventHandler; 2]>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register an event handler for a widget and event type
    pub fn register<F>(&mut self, widget_id: u64, event_type: EventType, handler: F)
    where
        F: Fn(&mut Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry((widget_id, event_type))
            .or_default()
            .push(Box::new(handler));
    }

    /// Dispatch an event to all handlers registered for its target
    pub fn dispatch(&self, event: &mut Event) {
        if let Some(handlers) = self.handlers.get(&(event.target, event.event_type)) {
            tracing::trace!(
                "dispatch type={} target={} handlers={}",
                event.event_type,
                event.target,
                handlers.len()
            );
            for handler in handlers {
                if event.propagation_stopped {
                    break;
                }
                handler(event);
            }
        }
    }

    /// Number of handler registrations (for host-side diagnostics)
    pub fn handler_count(&self) -> usize {
        self.handlers.values().map(|h| h.len()).sum()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
