#![forbid(unsafe_code)]

//! Local-notification scheduling for LocalizedWords.
//!
//! The host platform's notification subsystem sits behind the
//! [`NotificationHost`] trait; this crate only sequences the two calls every
//! schedule attempt makes — request authorization, then enqueue a one-shot
//! request — and reports what happened as a [`ScheduleOutcome`] instead of
//! swallowing failures. Failures are additionally diagnostic-logged; there is
//! no retry and no delivery guarantee.
//!
//! # Role in LocalizedWords
//! `lwords-notify` is platform glue with the platform abstracted away. The
//! greeting body is resolved through `lwords-i18n` under the caller's locale,
//! so the scheduled notification speaks the user's language.
//!
//! # How it fits in the system
//! The demo binary (or any embedder) supplies a host implementation and a
//! shared [`StringCatalog`]; a schedule attempt is a single synchronous call
//! whose result the caller may inspect or ignore.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use lwords_i18n::StringCatalog;
use web_time::Duration;

/// Localization key for the greeting used as the notification body.
const GREETING_KEY: &str = "main.onboarding.title.label";

/// Fixed notification title.
const DEFAULT_TITLE: &str = "Localized Words App";

/// One-shot delay before the notification fires.
const DEFAULT_DELAY: Duration = Duration::from_secs(10);

/// Process-wide counter for unique request identifiers.
static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(0);

// ---------------------------------------------------------------------------
// Host boundary
// ---------------------------------------------------------------------------

/// Failure reported by a [`NotificationHost`] call.
///
/// Carries host-supplied detail for diagnostics; the scheduler never inspects
/// the message, only logs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    message: String,
}

impl HostError {
    /// Wrap a host-supplied failure description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HostError {}

/// A one-shot timed notification handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Process-unique request identifier.
    pub id: String,
    /// Notification title.
    pub title: String,
    /// Notification body, already localized.
    pub body: String,
    /// Delay until the notification fires. Fires once; never repeats.
    pub delay: Duration,
}

/// The host platform's notification subsystem.
///
/// Implementations mediate the actual permission dialog and delivery; both
/// calls may be arbitrarily slow or fail for host-specific reasons.
pub trait NotificationHost {
    /// Ask the user for permission to show notifications.
    ///
    /// `Ok(true)` means granted, `Ok(false)` means denied; `Err` means the
    /// request itself could not be made.
    fn request_authorization(&self) -> Result<bool, HostError>;

    /// Enqueue a notification request for later delivery.
    fn schedule(&self, request: &NotificationRequest) -> Result<(), HostError>;
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// What a schedule attempt observably did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Authorization granted and the request was enqueued.
    Scheduled,
    /// The request was handed to the host, but authorization was denied or
    /// could not be obtained; delivery is up to host policy.
    PermissionDenied,
    /// The host rejected the enqueue. Terminal for this attempt; no retry.
    ScheduleFailed,
}

impl fmt::Display for ScheduleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scheduled => f.write_str("scheduled"),
            Self::PermissionDenied => f.write_str("permission_denied"),
            Self::ScheduleFailed => f.write_str("schedule_failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Sequences authorization and enqueue against a host.
///
/// Holds only the fixed request shape (title, greeting key, delay); all
/// per-attempt state lives in the request it builds.
#[derive(Debug, Clone)]
pub struct NotificationScheduler {
    title: String,
    greeting_key: String,
    delay: Duration,
}

impl NotificationScheduler {
    /// Scheduler with the stock title, greeting key, and 10-second delay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            greeting_key: GREETING_KEY.to_owned(),
            delay: DEFAULT_DELAY,
        }
    }

    /// Override the one-shot delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Schedule the localized greeting notification for a user with the
    /// given locale.
    ///
    /// Authorization is requested first, but a failed or denied request does
    /// not prevent the enqueue attempt — the host decides what to do with an
    /// unauthorized request. Outcome precedence: a rejected enqueue is
    /// [`ScheduleOutcome::ScheduleFailed`] regardless of authorization;
    /// otherwise a missing grant is [`ScheduleOutcome::PermissionDenied`].
    pub fn schedule_greeting(
        &self,
        host: &dyn NotificationHost,
        catalog: &StringCatalog,
        locale: &str,
    ) -> ScheduleOutcome {
        let granted = match host.request_authorization() {
            Ok(granted) => {
                tracing::debug!(
                    target: "lwords.notify",
                    granted,
                    "authorization request answered"
                );
                granted
            }
            Err(err) => {
                tracing::warn!(
                    target: "lwords.notify",
                    error = %err,
                    "authorization request failed"
                );
                false
            }
        };

        let request = self.build_request(catalog, locale);
        match host.schedule(&request) {
            Ok(()) => {
                tracing::debug!(
                    target: "lwords.notify",
                    request_id = %request.id,
                    locale = %locale,
                    delay_secs = request.delay.as_secs(),
                    "notification enqueued"
                );
                if granted {
                    ScheduleOutcome::Scheduled
                } else {
                    ScheduleOutcome::PermissionDenied
                }
            }
            Err(err) => {
                tracing::warn!(
                    target: "lwords.notify",
                    request_id = %request.id,
                    error = %err,
                    "notification enqueue failed"
                );
                ScheduleOutcome::ScheduleFailed
            }
        }
    }

    /// Build the greeting request for a locale.
    ///
    /// The body falls back to the greeting key verbatim when the catalog has
    /// no entry on the locale's fallback chain, mirroring how unresolved
    /// localization keys render as themselves.
    fn build_request(&self, catalog: &StringCatalog, locale: &str) -> NotificationRequest {
        let body = catalog
            .get(locale, &self.greeting_key)
            .unwrap_or(&self.greeting_key)
            .to_owned();
        let id = format!(
            "lwords-{}",
            NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed)
        );
        NotificationRequest {
            id,
            title: self.title.clone(),
            body,
            delay: self.delay,
        }
    }
}

impl Default for NotificationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
