//! Discretized range slider
//!
//! A slider divides its `[low, high]` range into 1000 integer steps so
//! the position control stays stable regardless of the value scale. The
//! host lays out a label, the position control, and a numeric edit box;
//! this widget keeps them in sync and forwards accepted changes to the
//! uniform callback.
//!
//! # Example
//!
//! ```ignore
//! let sigma = slider("sigma")
//!     .low(0.0)
//!     .high(10.0)
//!     .on_change(|name, value| println!("{name} = {value}"))
//!     .build()?;
//! sigma.attach(&mut events);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dials_core::events::{event_types, EventData, KeyCode};
use dials_core::{EventDispatcher, Shared};

use crate::editbox::{self, EditBoxData};
use crate::error::WidgetError;
use crate::param::{ChangeCallback, ParamKind, ParamValue};
use crate::widget::{ParamWidget, WidgetCommon};

/// Number of discrete positions the track is divided into
pub const STEP_COUNT: u32 = 1000;

/// Keyboard paging jump, in steps
const PAGE_STEPS: i64 = 50;

/// Track direction, a presentation detail the host layout follows.
/// Vertical tracks put `high` at the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(WidgetError::InvalidOrientation(other.to_string())),
        }
    }
}

/// When the callback fires: on every position change, or once on release
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateOn {
    #[default]
    Move,
    Release,
}

impl UpdateOn {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOn::Move => "move",
            UpdateOn::Release => "release",
        }
    }
}

impl fmt::Display for UpdateOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateOn {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move" => Ok(UpdateOn::Move),
            "release" => Ok(UpdateOn::Release),
            other => Err(WidgetError::InvalidUpdateOn(other.to_string())),
        }
    }
}

/// Slider configuration
#[derive(Clone)]
pub struct SliderConfig {
    /// Display label; its underscore-normalized form is the parameter name
    pub label: String,
    /// Range of slider values
    pub low: f64,
    pub high: f64,
    /// Initial value; `None` starts at the midpoint position
    pub value: Option<f64>,
    pub kind: ParamKind,
    pub callback: Option<ChangeCallback>,
    /// Maximum edit-box width in pixels, for host layout
    pub max_edit_width: f32,
    pub orientation: Orientation,
    pub update_on: UpdateOn,
    /// Pixel length of the track; pointer coordinates map over this extent
    pub track_extent: f32,
    pub disabled: bool,
}

impl SliderConfig {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            low: 0.0,
            high: 1.0,
            value: None,
            kind: ParamKind::default(),
            callback: None,
            max_edit_width: 60.0,
            orientation: Orientation::default(),
            update_on: UpdateOn::default(),
            track_extent: 200.0,
            disabled: false,
        }
    }
}

/// Mutable slider state behind the shared cell
struct SliderData {
    step: u32,
    low: f64,
    high: f64,
    scale: f64,
    orientation: Orientation,
    update_on: UpdateOn,
    track_extent: f32,
    dragging: bool,
    disabled: bool,
    edit: EditBoxData,
}

impl SliderData {
    fn value(&self) -> f64 {
        f64::from(self.step) * self.scale + self.low
    }

    /// Nearest step for a value, clamped to the track
    fn step_for(&self, value: f64) -> u32 {
        if self.scale == 0.0 {
            return 0;
        }
        ((value - self.low) / self.scale)
            .round()
            .clamp(0.0, f64::from(STEP_COUNT)) as u32
    }

    /// Map a pointer coordinate along the track axis to a step
    fn step_at_pointer(&self, x: f32, y: f32) -> u32 {
        let extent = self.track_extent.max(1.0);
        let fraction = match self.orientation {
            Orientation::Horizontal => x / extent,
            Orientation::Vertical => 1.0 - y / extent,
        };
        (f64::from(fraction.clamp(0.0, 1.0)) * f64::from(STEP_COUNT)).round() as u32
    }
}

/// Discretized range slider widget
pub struct Slider {
    common: Arc<WidgetCommon>,
    data: Shared<SliderData>,
}

impl Slider {
    fn from_config(config: SliderConfig) -> Result<Self, WidgetError> {
        let common = Arc::new(WidgetCommon::new(
            &config.label,
            config.kind,
            config.callback.clone(),
        )?);

        let scale = (config.high - config.low) / f64::from(STEP_COUNT);
        let step = match config.value {
            None => STEP_COUNT / 2,
            Some(_) if scale == 0.0 => 0,
            Some(value) => ((value - config.low) / scale)
                .round()
                .clamp(0.0, f64::from(STEP_COUNT)) as u32,
        };
        let initial = f64::from(step) * scale + config.low;

        let data = SliderData {
            step,
            low: config.low,
            high: config.high,
            scale,
            orientation: config.orientation,
            update_on: config.update_on,
            track_extent: config.track_extent,
            dragging: false,
            disabled: config.disabled,
            edit: EditBoxData::new(initial, config.max_edit_width),
        };

        Ok(Self {
            common,
            data: Shared::new(data),
        })
    }

    /// Current value in `[low, high]`
    pub fn current_value(&self) -> f64 {
        self.data.with(|d| d.value())
    }

    /// Current position in `[0, 1000]`
    pub fn step(&self) -> u32 {
        self.data.with(|d| d.step)
    }

    pub fn orientation(&self) -> Orientation {
        self.data.with(|d| d.orientation)
    }

    pub fn update_on(&self) -> UpdateOn {
        self.data.with(|d| d.update_on)
    }

    /// Text the host's edit box should display
    pub fn edit_text(&self) -> String {
        self.data.with(|d| d.edit.text().to_string())
    }

    /// Whether the last committed edit-box input was accepted; the host
    /// renders the error indicator when this is false
    pub fn input_valid(&self) -> bool {
        self.data.with(|d| d.edit.is_valid())
    }

    pub fn is_dragging(&self) -> bool {
        self.data.with(|d| d.dragging)
    }

    /// Move the position control to `step`
    pub fn set_step(&self, step: u32) {
        Self::apply_step(&self.common, &self.data, step);
    }

    /// End of a drag gesture
    pub fn release(&self) {
        Self::finish_drag(&self.common, &self.data);
    }

    /// Commit edit-box text, validating and syncing the position control
    pub fn commit_text(&self, text: &str) {
        Self::apply_text(&self.common, &self.data, text);
    }

    /// Step the position by a signed amount, as keyboard input does
    pub fn nudge(&self, delta: i64) {
        let target = self.data.with(|d| i64::from(d.step) + delta);
        Self::jump_to(&self.common, &self.data, target);
    }

    /// Host-initiated write; syncs position and text without firing the
    /// callback back at the host
    pub fn set_value(&self, value: f64) {
        self.data.update(|d| {
            d.step = d.step_for(value);
            let value = d.value();
            d.edit.set_text(editbox::short_text(value));
            d.edit.mark_valid();
        });
    }

    /// Position change from the toolkit's drag/position control. Fires
    /// the callback under the `Move` policy when the step actually moved.
    fn apply_step(common: &WidgetCommon, data: &Shared<SliderData>, step: u32) {
        let notify = data.update(|d| {
            let step = step.min(STEP_COUNT);
            if step == d.step {
                return None;
            }
            d.step = step;
            let value = d.value();
            d.edit.set_text(editbox::short_text(value));
            d.edit.mark_valid();
            matches!(d.update_on, UpdateOn::Move).then_some(value)
        });
        if let Some(value) = notify {
            common.notify(ParamValue::Float(value));
        }
    }

    fn finish_drag(common: &WidgetCommon, data: &Shared<SliderData>) {
        let notify = data.update(|d| {
            d.dragging = false;
            matches!(d.update_on, UpdateOn::Release).then(|| d.value())
        });
        if let Some(value) = notify {
            common.notify(ParamValue::Float(value));
        }
    }

    /// Committed text: parse, range-check, re-discretize. Rejected input
    /// sets the error flag and changes nothing; accepted input always
    /// fires the callback, independent of the update policy.
    fn apply_text(common: &WidgetCommon, data: &Shared<SliderData>, text: &str) {
        let notify = data.update(|d| {
            let Some(value) = editbox::parse_input(text) else {
                d.edit.mark_invalid();
                return None;
            };
            if !(d.low..=d.high).contains(&value) {
                d.edit.mark_invalid();
                return None;
            }
            d.step = d.step_for(value);
            let value = d.value();
            d.edit.set_text(editbox::short_text(value));
            d.edit.mark_valid();
            Some(value)
        });
        match notify {
            Some(value) => {
                tracing::debug!("slider '{}' accepted edit input {:?}", common.name(), text);
                common.notify(ParamValue::Float(value));
            }
            None => {
                tracing::debug!("slider '{}' rejected edit input {:?}", common.name(), text);
            }
        }
    }

    /// Jump to an absolute step, clamped; keyboard path, so an accepted
    /// jump fires the callback once regardless of the update policy
    fn jump_to(common: &WidgetCommon, data: &Shared<SliderData>, step: i64) {
        let notify = data.update(|d| {
            let step = step.clamp(0, i64::from(STEP_COUNT)) as u32;
            if step == d.step {
                return None;
            }
            d.step = step;
            let value = d.value();
            d.edit.set_text(editbox::short_text(value));
            d.edit.mark_valid();
            Some(value)
        });
        if let Some(value) = notify {
            common.notify(ParamValue::Float(value));
        }
    }
}

impl ParamWidget for Slider {
    fn widget_id(&self) -> u64 {
        self.common.id()
    }

    fn label(&self) -> &str {
        self.common.label()
    }

    fn name(&self) -> &str {
        self.common.name()
    }

    fn kind(&self) -> ParamKind {
        self.common.kind()
    }

    fn value(&self) -> ParamValue {
        ParamValue::Float(self.current_value())
    }

    fn attach(&self, events: &mut EventDispatcher) {
        let id = self.common.id();

        // Press and drag both reposition the thumb
        for event_type in [event_types::POINTER_DOWN, event_types::DRAG] {
            let common = Arc::clone(&self.common);
            let data = self.data.clone();
            events.register(id, event_type, move |event| {
                if let EventData::Pointer { x, y, .. } = event.data {
                    let step = data.update(|d| {
                        if d.disabled {
                            return None;
                        }
                        d.dragging = true;
                        Some(d.step_at_pointer(x, y))
                    });
                    if let Some(step) = step {
                        Self::apply_step(&common, &data, step);
                    }
                }
            });
        }

        for event_type in [event_types::POINTER_UP, event_types::DRAG_END] {
            let common = Arc::clone(&self.common);
            let data = self.data.clone();
            events.register(id, event_type, move |_| {
                if data.with(|d| d.disabled) {
                    return;
                }
                Self::finish_drag(&common, &data);
            });
        }

        {
            let common = Arc::clone(&self.common);
            let data = self.data.clone();
            events.register(id, event_types::KEY_DOWN, move |event| {
                if let EventData::Key { key, modifiers, .. } = event.data {
                    // Shift turns arrow nudges into coarse jumps
                    let unit: i64 = if modifiers.shift() { 10 } else { 1 };
                    let target = data.with(|d| {
                        if d.disabled {
                            return None;
                        }
                        let step = i64::from(d.step);
                        match key {
                            KeyCode::RIGHT | KeyCode::UP => Some(step + unit),
                            KeyCode::LEFT | KeyCode::DOWN => Some(step - unit),
                            KeyCode::PAGE_UP => Some(step + PAGE_STEPS),
                            KeyCode::PAGE_DOWN => Some(step - PAGE_STEPS),
                            KeyCode::HOME => Some(0),
                            KeyCode::END => Some(i64::from(STEP_COUNT)),
                            _ => None,
                        }
                    });
                    if let Some(target) = target {
                        Self::jump_to(&common, &data, target);
                    }
                }
            });
        }

        {
            let common = Arc::clone(&self.common);
            let data = self.data.clone();
            events.register(id, event_types::TEXT_COMMIT, move |event| {
                if let EventData::Text { text } = &event.data {
                    if data.with(|d| d.disabled) {
                        return;
                    }
                    Self::apply_text(&common, &data, text);
                }
            });
        }
    }
}

/// Builder for sliders with a fluent API
pub struct SliderBuilder {
    config: SliderConfig,
}

impl SliderBuilder {
    pub fn new(label: &str) -> Self {
        Self {
            config: SliderConfig::new(label),
        }
    }

    /// Set the lower end of the range
    pub fn low(mut self, low: f64) -> Self {
        self.config.low = low;
        self
    }

    /// Set the upper end of the range
    pub fn high(mut self, high: f64) -> Self {
        self.config.high = high;
        self
    }

    /// Set the initial value; unset sliders start at the midpoint
    pub fn value(mut self, value: f64) -> Self {
        self.config.value = Some(value);
        self
    }

    /// Set how the host applies the value
    pub fn kind(mut self, kind: ParamKind) -> Self {
        self.config.kind = kind;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    /// Set when the callback fires during drags
    pub fn update_on(mut self, update_on: UpdateOn) -> Self {
        self.config.update_on = update_on;
        self
    }

    /// Set the maximum edit-box width in pixels
    pub fn max_edit_width(mut self, width: f32) -> Self {
        self.config.max_edit_width = width;
        self
    }

    /// Set the pixel length pointer coordinates are mapped over
    pub fn track_extent(mut self, extent: f32) -> Self {
        self.config.track_extent = extent;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Set the change handler
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, ParamValue) + Send + Sync + 'static,
    {
        self.config.callback = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> Result<Slider, WidgetError> {
        Slider::from_config(self.config)
    }
}

/// Create a slider builder for the given parameter label
pub fn slider(label: &str) -> SliderBuilder {
    SliderBuilder::new(label)
}
