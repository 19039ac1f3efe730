//! Parameter tags, values, and the uniform change callback
//!
//! Every widget carries a [`ParamKind`] telling the host how to apply its
//! value, and reports changes through a [`ChangeCallback`] invoked with
//! `(parameter_name, new_value)`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::WidgetError;

/// How the host applies a widget's value:
///
/// - `Arg`: positional argument to the host's filter call
/// - `Kwarg`: keyword argument to the host's filter call
/// - `Attr`: written to a named attribute of the host plugin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParamKind {
    Arg,
    #[default]
    Kwarg,
    Attr,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Arg => "arg",
            ParamKind::Kwarg => "kwarg",
            ParamKind::Attr => "attr",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamKind {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arg" => Ok(ParamKind::Arg),
            "kwarg" => Ok(ParamKind::Kwarg),
            "attr" => Ok(ParamKind::Attr),
            other => Err(WidgetError::InvalidParamKind(other.to_string())),
        }
    }
}

/// A widget's current value as handed to the host
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Float(f64),
    Str(String),
}

impl ParamValue {
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Float(_) => None,
            ParamValue::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Str(s) => f.write_str(s),
        }
    }
}

/// Uniform change callback: `(parameter_name, new_value)`
pub type ChangeCallback = Arc<dyn Fn(&str, ParamValue) + Send + Sync>;

/// Normalize a display label into a parameter name.
///
/// Spaces become underscores; the result must be a valid identifier
/// because the host uses it as a keyword-argument name.
pub fn param_name(label: &str) -> Result<String, WidgetError> {
    let name = label.trim().replace(' ', "_");
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(name)
    } else {
        Err(WidgetError::InvalidName(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_kind_parse() {
        assert_eq!("arg".parse::<ParamKind>().unwrap(), ParamKind::Arg);
        assert_eq!("kwarg".parse::<ParamKind>().unwrap(), ParamKind::Kwarg);
        assert_eq!("attr".parse::<ParamKind>().unwrap(), ParamKind::Attr);

        let err = "positional".parse::<ParamKind>().unwrap_err();
        assert!(err.to_string().contains("positional"));
    }

    #[test]
    fn names_normalize_spaces() {
        assert_eq!(param_name("sigma").unwrap(), "sigma");
        assert_eq!(param_name("smooth mode").unwrap(), "smooth_mode");
        assert_eq!(param_name("_private").unwrap(), "_private");
    }

    #[test]
    fn bad_names_rejected() {
        for label in ["", "   ", "2 fast", "rate%", "a-b"] {
            let err = param_name(label).unwrap_err();
            assert!(matches!(err, WidgetError::InvalidName(_)), "{label:?}");
        }
    }

    #[test]
    fn value_display() {
        assert_eq!(ParamValue::Float(7.5).to_string(), "7.5");
        assert_eq!(ParamValue::Str("bilinear".into()).to_string(), "bilinear");
    }
}
