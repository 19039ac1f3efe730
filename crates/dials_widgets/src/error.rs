//! Widget construction errors
//!
//! All variants are configuration failures raised while building a
//! widget, fatal to construction. Edit-box input problems never surface
//! here; they stay on the widget as its validity flag.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("unexpected value {0:?} for 'orientation' (expected 'horizontal' or 'vertical')")]
    InvalidOrientation(String),

    #[error("unexpected value {0:?} for 'update_on' (expected 'move' or 'release')")]
    InvalidUpdateOn(String),

    #[error("unexpected value {0:?} for parameter kind (expected 'arg', 'kwarg' or 'attr')")]
    InvalidParamKind(String),

    #[error("label {0:?} does not normalize to a valid parameter name")]
    InvalidName(String),

    #[error("combo box requires at least one item")]
    NoItems,

    #[error("item index {index} out of range for {len} items")]
    ItemOutOfRange { index: usize, len: usize },
}
