//! Capability seam between the host and concrete widgets
//!
//! The host keeps widgets as trait objects, reads [`ParamWidget::kind`]
//! to decide how to apply [`ParamWidget::value`], and routes toolkit
//! events through the dispatcher each widget was attached to.

use dials_core::EventDispatcher;

use crate::error::WidgetError;
use crate::param::{param_name, ChangeCallback, ParamKind, ParamValue};

/// Behaviors every parameter widget exposes to the host
pub trait ParamWidget {
    /// Stable event-target id of this widget
    fn widget_id(&self) -> u64;

    /// Display label as given at construction
    fn label(&self) -> &str;

    /// Normalized parameter name the callback fires with
    fn name(&self) -> &str;

    /// How the host applies this widget's value
    fn kind(&self) -> ParamKind;

    /// Current value
    fn value(&self) -> ParamValue;

    /// Register this widget's event handlers with the host dispatcher
    fn attach(&self, events: &mut EventDispatcher);
}

/// Identity and callback plumbing shared by all widgets
pub struct WidgetCommon {
    id: u64,
    label: String,
    name: String,
    kind: ParamKind,
    callback: Option<ChangeCallback>,
}

impl std::fmt::Debug for WidgetCommon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetCommon")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("callback", &self.callback.as_ref().map(|_| "..."))
            .finish()
    }
}

impl WidgetCommon {
    pub fn new(
        label: &str,
        kind: ParamKind,
        callback: Option<ChangeCallback>,
    ) -> Result<Self, WidgetError> {
        Ok(Self {
            id: dials_core::next_widget_id(),
            label: label.to_string(),
            name: param_name(label)?,
            kind,
            callback,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Invoke the host callback with this widget's parameter name.
    ///
    /// The single side-effecting exit point toward the host. Callers must
    /// not hold a widget state lock across this call; the callback may
    /// re-enter the widget.
    pub fn notify(&self, value: ParamValue) {
        if let Some(callback) = &self.callback {
            tracing::trace!("notify {} = {}", self.name, value);
            callback(&self.name, value);
        }
    }
}
