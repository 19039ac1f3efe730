//! Dials Core Runtime
//!
//! This crate provides the foundational primitives for the dials widget
//! crates:
//!
//! - **Event Dispatch**: control-level events routed from the host
//!   toolkit to per-widget handlers
//! - **Shared State**: cheap cloneable cells widgets hand to the
//!   handler closures they register
//!
//! # Example
//!
//! ```rust
//! use dials_core::events::{event_types, Event, EventData};
//! use dials_core::EventDispatcher;
//!
//! let mut events = EventDispatcher::new();
//! events.register(1, event_types::POINTER_DOWN, |event| {
//!     if let EventData::Pointer { x, y, .. } = event.data {
//!         println!("pressed at {x},{y}");
//!     }
//! });
//!
//! let mut event = Event::new(
//!     event_types::POINTER_DOWN,
//!     1,
//!     EventData::Pointer { x: 10.0, y: 4.0, button: 0 },
//! );
//! events.dispatch(&mut event);
//! ```

pub mod events;
pub mod shared;

pub use events::{Event, EventData, EventDispatcher, EventType, KeyCode, Modifiers};
pub use shared::{next_widget_id, Shared};
