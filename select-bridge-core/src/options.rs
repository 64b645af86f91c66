//! Widget configuration bag and its resolution
//!
//! [`EnhancerOptions`] is the caller's opaque configuration, forwarded to the
//! widget. Before each construction it is resolved into a fresh
//! [`ResolvedOptions`]: the fixed locale is forced in, and a string
//! `dropdownParent` selector is turned into a live element. The caller's bag
//! is never modified.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::value::FuzzyEq;
use crate::widget::Host;

/// Locale forced into every widget construction
pub const LOCALE: &str = "zh-CN";

/// Option key the locale is written under
pub const LANGUAGE_KEY: &str = "language";

/// Option key whose string value is resolved to an element
pub const DROPDOWN_PARENT_KEY: &str = "dropdownParent";

#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("widget options must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Caller-supplied widget configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnhancerOptions {
    settings: Map<String, Value>,
}

impl EnhancerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object
    ///
    /// ```
    /// use select_bridge_core::EnhancerOptions;
    /// use serde_json::json;
    ///
    /// let options = EnhancerOptions::from_value(json!({"placeholder": "Pick one"})).unwrap();
    /// assert_eq!(options.get("placeholder"), Some(&json!("Pick one")));
    ///
    /// assert!(EnhancerOptions::from_value(json!([1, 2])).is_err());
    /// ```
    pub fn from_value(value: Value) -> Result<Self, OptionsError> {
        match value {
            Value::Object(settings) => Ok(Self { settings }),
            other => Err(OptionsError::NotAnObject(json_type(&other))),
        }
    }

    /// Set an option
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Attach the dropdown panel under the element matching `selector`
    pub fn dropdown_parent(self, selector: impl Into<String>) -> Self {
        self.set(DROPDOWN_PARENT_KEY, selector.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Produce the configuration for one widget construction
    ///
    /// The locale always overrides a caller-supplied `language`. A string
    /// `dropdownParent` is removed from the settings and resolved through the
    /// host; a selector matching nothing is dropped. Any other
    /// `dropdownParent` value is forwarded untouched.
    pub fn resolve<H: Host>(&self, host: &H) -> ResolvedOptions<H::Element> {
        let mut settings = self.settings.clone();
        settings.insert(LANGUAGE_KEY.to_string(), Value::from(LOCALE));

        let mut dropdown_parent = None;
        let selector = settings
            .get(DROPDOWN_PARENT_KEY)
            .and_then(Value::as_str)
            .map(str::to_owned);
        if let Some(selector) = selector {
            dropdown_parent = host.query_selector(&selector);
            if dropdown_parent.is_none() {
                warn!(selector = %selector, "dropdownParent selector matched no element");
            }
            settings.shift_remove(DROPDOWN_PARENT_KEY);
        }

        ResolvedOptions {
            settings,
            dropdown_parent,
        }
    }
}

impl FuzzyEq for EnhancerOptions {
    fn fuzzy_eq(&self, other: &Self) -> bool {
        self.settings.fuzzy_eq(&other.settings)
    }
}

impl TryFrom<Value> for EnhancerOptions {
    type Error = OptionsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Configuration for a single widget construction
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions<El> {
    /// Settings forwarded to the widget, locale included
    pub settings: Map<String, Value>,
    /// Resolved `dropdownParent` element
    pub dropdown_parent: Option<El>,
}

impl<El> ResolvedOptions<El> {
    /// The locale the widget will be constructed with
    pub fn language(&self) -> Option<&str> {
        self.settings.get(LANGUAGE_KEY).and_then(Value::as_str)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
