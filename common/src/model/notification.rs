//! Toast notification model.
//!
//! A notification is created from a [`NotificationRequest`] by the
//! notification store, which assigns the [`NotificationId`]. The severity is a
//! closed set, so each variant carries its own fixed [`ToastStyle`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of a notification. Drives the colors and the icon of the toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// Fixed color pair of a toast variant, as CSS color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Severity {
    pub const fn style(self) -> ToastStyle {
        match self {
            Severity::Info => ToastStyle {
                background: "#CCFCFE",
                foreground: "#0265B1",
            },
            Severity::Success => ToastStyle {
                background: "#ECFEDD",
                foreground: "#2BAA30",
            },
            Severity::Error => ToastStyle {
                background: "#FFE7DA",
                foreground: "#FF4A47",
            },
        }
    }

    /// Material Icons ligature used by the toast.
    pub const fn icon(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "check_circle",
            Severity::Error => "error",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identifier assigned by the store when a notification is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What a caller hands to the store: `{type, title, description}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    #[serde(rename = "type", default)]
    pub severity: Severity,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NotificationRequest {
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: None,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Info, title).with_description(description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Success, title).with_description(description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, title).with_description(description)
    }

    /// Sets the body text. An empty string is treated as no description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }
}

/// An active toast, as held by the store and rendered by the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn from_request(id: NotificationId, request: NotificationRequest) -> Self {
        Self {
            id,
            severity: request.severity,
            title: request.title,
            description: request.description,
        }
    }

    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }
}
