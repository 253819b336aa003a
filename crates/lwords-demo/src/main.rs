#![forbid(unsafe_code)]

//! LocalizedWords demo binary.
//!
//! A line-oriented guess-the-word session over the built-in catalog.
//!
//! # Running
//!
//! ```sh
//! cargo run -p lwords-demo -- fr
//! ```
//!
//! The first argument selects the locale (default `en`).
//!
//! # Commands
//!
//! - any other line: check it as a guess; a correct guess prints its hint
//! - `:notify`: schedule the greeting notification through the logging host
//! - `:quit` or EOF: exit

use std::io::{self, BufRead, Write};

use lwords_demo::{ChallengeScreen, builtin_catalog};
use lwords_notify::{
    HostError, NotificationHost, NotificationRequest, NotificationScheduler,
};

/// Stand-in for a platform notification center: grants permission and logs
/// what would have been delivered.
struct LoggingHost;

impl NotificationHost for LoggingHost {
    fn request_authorization(&self) -> Result<bool, HostError> {
        Ok(true)
    }

    fn schedule(&self, request: &NotificationRequest) -> Result<(), HostError> {
        tracing::info!(
            target: "lwords.demo",
            request_id = %request.id,
            title = %request.title,
            body = %request.body,
            delay_secs = request.delay.as_secs(),
            "notification scheduled"
        );
        Ok(())
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let locale = std::env::args().nth(1).unwrap_or_else(|| "en".to_owned());
    let catalog = builtin_catalog();

    let report = catalog.coverage_report();
    for row in &report.locales {
        if !row.missing.is_empty() {
            tracing::warn!(
                target: "lwords.demo",
                locale = %row.locale,
                missing = ?row.missing,
                "incomplete locale"
            );
        }
    }

    let screen = ChallengeScreen::new(&catalog, &locale);
    let scheduler = NotificationScheduler::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let greeting = catalog
        .get(&locale, lwords_demo::data::GREETING_KEY)
        .unwrap_or("Localized Words");
    writeln!(out, "{greeting}")?;
    writeln!(out, "Enter your guess ({} words accepted):", screen.words().len())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            ":quit" => break,
            ":notify" => {
                let outcome = scheduler.schedule_greeting(&LoggingHost, &catalog, &locale);
                writeln!(out, "notification: {outcome}")?;
            }
            guess => {
                if let Some(feedback) = screen.check_word(guess) {
                    writeln!(out, "{}", feedback.message)?;
                }
                // A wrong guess prints nothing; it is not an error.
            }
        }
    }
    Ok(())
}
