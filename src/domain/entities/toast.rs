//! Transient toast notification entity.

use std::fmt;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Unique identifier of a queued toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation of a completed action.
    Success,
    /// A failure the user should know about.
    Error,
    /// Neutral information.
    Info,
}

/// A toast that has not been queued yet; the queue assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToast {
    /// Visual category; `None` means neutral styling.
    pub kind: Option<ToastKind>,
    /// Short headline.
    pub title: String,
    /// Optional longer message.
    pub description: Option<String>,
}

impl NewToast {
    /// Creates a toast with neutral styling.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: None,
            title: title.into(),
            description: None,
        }
    }

    /// Creates a success toast.
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: Some(ToastKind::Success),
            ..Self::new(title)
        }
    }

    /// Creates an error toast.
    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: Some(ToastKind::Error),
            ..Self::new(title)
        }
    }

    /// Creates an info toast.
    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: Some(ToastKind::Info),
            ..Self::new(title)
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A queued transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Queue-assigned unique id.
    pub id: ToastId,
    /// Visual category; `None` means neutral styling.
    pub kind: Option<ToastKind>,
    /// Short headline.
    pub title: String,
    /// Optional longer message.
    pub description: Option<String>,
    /// When the toast entered the queue.
    pub created_at: Instant,
    /// How long the toast stays visible.
    pub ttl: Duration,
}

impl Toast {
    pub(crate) fn from_new(new: NewToast, ttl: Duration) -> Self {
        Self {
            id: ToastId::generate(),
            kind: new.kind,
            title: new.title,
            description: new.description,
            created_at: Instant::now(),
            ttl,
        }
    }

    /// Whether the toast has outlived its time-to-live.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}
