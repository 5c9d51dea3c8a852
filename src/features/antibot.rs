//! Submission screening: honeypot fields and dwell time.
//!
//! These are superficial deterrents against naive form bots, not a security
//! boundary. A tripped check drops the submission silently; nothing in the
//! response distinguishes a dropped post from an accepted one.

use crate::core::config::DEFAULT_MIN_DWELL_MS;
use crate::core::types::WaitlistForm;

/// Wire names of the hidden fields a human never fills.
pub const HONEYPOT_FIELDS: &[&str] = &["bot-field", "website", "email-confirm", "phone-check"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotVerdict {
    /// Passed every check; carries the measured time-on-page.
    Human { dwell_ms: i64 },
    /// A honeypot field arrived non-empty.
    HoneypotTripped { field: &'static str },
    /// Submitted faster than the configured minimum after render.
    SubmittedTooFast { dwell_ms: i64 },
    /// The render timestamp is missing, so dwell cannot be measured.
    MissingTimestamp,
}

impl BotVerdict {
    pub fn is_bot(&self) -> bool {
        !matches!(self, BotVerdict::Human { .. })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BotCheck {
    min_dwell_ms: i64,
}

impl Default for BotCheck {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DWELL_MS)
    }
}

impl BotCheck {
    pub fn new(min_dwell_ms: i64) -> Self {
        Self { min_dwell_ms }
    }

    pub fn min_dwell_ms(&self) -> i64 {
        self.min_dwell_ms
    }

    /// Inspects a posted form. Honeypots are checked before timing so the
    /// verdict names the strongest signal.
    pub fn inspect(&self, form: &WaitlistForm, now_ms: i64) -> BotVerdict {
        for (field, value) in form.honeypot_values() {
            if !value.trim().is_empty() {
                return BotVerdict::HoneypotTripped { field };
            }
        }
        let Some(form_ts) = form.form_ts else {
            return BotVerdict::MissingTimestamp;
        };
        let dwell_ms = now_ms - form_ts;
        if dwell_ms < self.min_dwell_ms {
            return BotVerdict::SubmittedTooFast { dwell_ms };
        }
        BotVerdict::Human { dwell_ms }
    }
}
