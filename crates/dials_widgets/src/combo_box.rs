//! Discrete-choice combo box
//!
//! A label plus a selector over an ordered list of string choices.
//! Selecting a different item forwards the new value to the uniform
//! callback; re-selecting the current item is a no-op.

use std::sync::Arc;

use dials_core::events::{event_types, EventData, KeyCode};
use dials_core::{EventDispatcher, Shared};

use crate::error::WidgetError;
use crate::param::{ChangeCallback, ParamKind, ParamValue};
use crate::widget::{ParamWidget, WidgetCommon};

/// Combo box configuration
#[derive(Clone)]
pub struct ComboBoxConfig {
    /// Display label; its underscore-normalized form is the parameter name
    pub label: String,
    /// Allowed parameter values, in display order; must be non-empty
    pub items: Vec<String>,
    pub kind: ParamKind,
    pub callback: Option<ChangeCallback>,
    pub disabled: bool,
}

impl ComboBoxConfig {
    fn new(label: &str, items: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            items,
            kind: ParamKind::default(),
            callback: None,
            disabled: false,
        }
    }
}

struct ComboBoxData {
    items: Vec<String>,
    selected: usize,
    disabled: bool,
}

/// Discrete-choice widget over an ordered list of strings
pub struct ComboBox {
    common: Arc<WidgetCommon>,
    data: Shared<ComboBoxData>,
}

impl std::fmt::Debug for ComboBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboBox")
            .field("common", &self.common)
            .finish_non_exhaustive()
    }
}

impl ComboBox {
    fn from_config(config: ComboBoxConfig) -> Result<Self, WidgetError> {
        if config.items.is_empty() {
            return Err(WidgetError::NoItems);
        }
        let common = Arc::new(WidgetCommon::new(
            &config.label,
            config.kind,
            config.callback.clone(),
        )?);
        let data = ComboBoxData {
            items: config.items,
            selected: 0,
            disabled: config.disabled,
        };
        Ok(Self {
            common,
            data: Shared::new(data),
        })
    }

    /// The item string at the currently selected index
    pub fn current_item(&self) -> String {
        self.data.with(|d| d.items[d.selected].clone())
    }

    pub fn selected_index(&self) -> usize {
        self.data.with(|d| d.selected)
    }

    pub fn items(&self) -> Vec<String> {
        self.data.with(|d| d.items.clone())
    }

    pub fn item_count(&self) -> usize {
        self.data.with(|d| d.items.len())
    }

    /// Host-side selection. Out-of-range indices are an error; selecting
    /// the current index changes nothing and fires nothing.
    pub fn select(&self, index: usize) -> Result<(), WidgetError> {
        let notify = self.data.update(|d| {
            if index >= d.items.len() {
                return Err(WidgetError::ItemOutOfRange {
                    index,
                    len: d.items.len(),
                });
            }
            if index == d.selected {
                return Ok(None);
            }
            d.selected = index;
            Ok(Some(d.items[index].clone()))
        })?;
        if let Some(item) = notify {
            self.common.notify(ParamValue::Str(item));
        }
        Ok(())
    }

    /// Selection change from the toolkit; malformed indices are logged
    /// and ignored rather than treated as host errors
    fn apply_selection(common: &WidgetCommon, data: &Shared<ComboBoxData>, index: usize) {
        let notify = data.update(|d| {
            if d.disabled {
                return None;
            }
            if index >= d.items.len() {
                tracing::warn!(
                    "combo box '{}' ignoring out-of-range index {} (have {} items)",
                    common.name(),
                    index,
                    d.items.len()
                );
                return None;
            }
            if index == d.selected {
                return None;
            }
            d.selected = index;
            Some(d.items[index].clone())
        });
        if let Some(item) = notify {
            common.notify(ParamValue::Str(item));
        }
    }

    /// Keyboard prev/next, clamped at the ends
    fn step_selection(common: &WidgetCommon, data: &Shared<ComboBoxData>, delta: i64) {
        let target = data.with(|d| {
            if d.disabled {
                return None;
            }
            let last = d.items.len() as i64 - 1;
            Some((d.selected as i64 + delta).clamp(0, last) as usize)
        });
        if let Some(target) = target {
            Self::apply_selection(common, data, target);
        }
    }
}

impl ParamWidget for ComboBox {
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
        ParamValue::Str(self.current_item())
    }

    fn attach(&self, events: &mut EventDispatcher) {
        let id = self.common.id();

        {
            let common = Arc::clone(&self.common);
            let data = self.data.clone();
            events.register(id, event_types::ITEM_SELECTED, move |event| {
                if let EventData::Selection { index } = event.data {
                    Self::apply_selection(&common, &data, index);
                }
            });
        }

        {
            let common = Arc::clone(&self.common);
            let data = self.data.clone();
            events.register(id, event_types::KEY_DOWN, move |event| {
                if let EventData::Key { key, .. } = event.data {
                    let delta = match key {
                        KeyCode::UP | KeyCode::LEFT => -1,
                        KeyCode::DOWN | KeyCode::RIGHT => 1,
                        _ => return,
                    };
                    Self::step_selection(&common, &data, delta);
                }
            });
        }
    }
}

/// Builder for combo boxes with a fluent API
pub struct ComboBoxBuilder {
    config: ComboBoxConfig,
}

impl ComboBoxBuilder {
    pub fn new<I, S>(label: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config: ComboBoxConfig::new(label, items.into_iter().map(Into::into).collect()),
        }
    }

    /// Set how the host applies the value
    pub fn kind(mut self, kind: ParamKind) -> Self {
        self.config.kind = kind;
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

    pub fn build(self) -> Result<ComboBox, WidgetError> {
        ComboBox::from_config(self.config)
    }
}

/// Create a combo box builder for the given parameter label and choices
pub fn combo_box<I, S>(label: &str, items: I) -> ComboBoxBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ComboBoxBuilder::new(label, items)
}
