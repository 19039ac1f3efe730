//! Dials Parameter Widgets
//!
//! Slider and combo box widgets that bind a host toolkit's controls to a
//! uniform `(name, value)` change callback. The host owns the event loop
//! and layout; widgets register handlers on a
//! [`dials_core::EventDispatcher`] and the host routes its toolkit's
//! events through it. Each widget carries a [`ParamKind`] tag the host
//! reads to decide whether the value becomes a positional argument, a
//! keyword argument, or an attribute write.
//!
//! # Example
//!
//! ```rust
//! use dials_core::EventDispatcher;
//! use dials_widgets::prelude::*;
//!
//! # fn main() -> Result<(), dials_widgets::WidgetError> {
//! let mut events = EventDispatcher::new();
//!
//! let sigma = slider("sigma")
//!     .low(0.0)
//!     .high(10.0)
//!     .on_change(|name, value| println!("{name} = {value}"))
//!     .build()?;
//! sigma.attach(&mut events);
//!
//! let mode = combo_box("mode", ["nearest", "bilinear", "bicubic"])
//!     .on_change(|name, value| println!("{name} = {value}"))
//!     .build()?;
//! mode.attach(&mut events);
//! # Ok(())
//! # }
//! ```

pub mod combo_box;
pub mod editbox;
pub mod error;
pub mod param;
pub mod slider;
pub mod widget;

pub use combo_box::{combo_box, ComboBox, ComboBoxBuilder, ComboBoxConfig};
pub use error::WidgetError;
pub use param::{ChangeCallback, ParamKind, ParamValue};
pub use slider::{
    slider, Orientation, Slider, SliderBuilder, SliderConfig, UpdateOn, STEP_COUNT,
};
pub use widget::{ParamWidget, WidgetCommon};

/// Everything a host needs to build and wire widgets
pub mod prelude {
    pub use crate::combo_box::{combo_box, ComboBox, ComboBoxBuilder};
    pub use crate::error::WidgetError;
    pub use crate::param::{ParamKind, ParamValue};
    pub use crate::slider::{slider, Orientation, Slider, SliderBuilder, UpdateOn};
    pub use crate::widget::ParamWidget;

    pub use dials_core::events::{event_types, Event, EventData, KeyCode, Modifiers};
    pub use dials_core::EventDispatcher;
}
