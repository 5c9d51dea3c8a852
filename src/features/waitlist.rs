//! Waitlist submissions: record assembly and form-backend forwarding.
//!
//! The form backend is an external collaborator reached with a single
//! urlencoded POST, no retries. The trait seam lets the HTTP handler run
//! against a stub in tests.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::core::types::WaitlistForm;
use crate::features::antibot::{BotCheck, BotVerdict};

pub const FORM_NAME: &str = "waitlist";

/// An accepted submission, ready to forward.
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    /// Log-correlation id; also forwarded.
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub ideas: String,
    pub regalo: String,
    pub acepta_rgpd: bool,
    pub submitted_at: DateTime<Utc>,
    /// Measured time between form render and submission.
    pub time_on_page_ms: i64,
}

impl SubmissionRecord {
    pub fn from_form(form: &WaitlistForm, dwell_ms: i64, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nombre: form.nombre.trim().to_string(),
            email: form.email.trim().to_string(),
            telefono: form.telefono.trim().to_string(),
            ideas: form.ideas.trim().to_string(),
            regalo: form.regalo.trim().to_string(),
            acepta_rgpd: form.consented(),
            submitted_at,
            time_on_page_ms: dwell_ms,
        }
    }

    /// Wire pairs for the urlencoded POST. Field names match what the form
    /// backend already collects from the static form, plus analysis fields.
    pub fn as_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("form-name", FORM_NAME.to_string()),
            ("submission-id", self.id.to_string()),
            ("Nombre", self.nombre.clone()),
            ("Email", self.email.clone()),
            ("Teléfono", self.telefono.clone()),
            ("Ideas", self.ideas.clone()),
            ("Regalo personalizado", self.regalo.clone()),
            (
                "Acepta RGPD",
                if self.acepta_rgpd { "sí" } else { "no" }.to_string(),
            ),
            (
                "timestamp",
                self.submitted_at
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            ("timeOnPage", self.time_on_page_ms.to_string()),
        ]
    }
}

#[derive(Debug, Error)]
pub enum WaitlistError {
    #[error("form backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("form backend rejected the submission with status {0}")]
    Rejected(u16),
}

#[async_trait]
pub trait FormBackend: Send + Sync {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), WaitlistError>;
}

/// Production backend: one POST to the configured endpoint, 2xx is success.
pub struct HttpFormBackend {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormBackend {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FormBackend for HttpFormBackend {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), WaitlistError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&record.as_pairs())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WaitlistError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}

/// What became of a posted form.
#[derive(Debug)]
pub enum SubmissionOutcome {
    Accepted { id: Uuid },
    /// Screened out; the response must not differ from a plain page visit.
    DroppedAsBot(BotVerdict),
    Invalid { field: &'static str },
    ForwardFailed(WaitlistError),
}

/// The single submission command behind the HTTP handler. Screening runs
/// before validation so bots are never told which field gave them away.
pub async fn process_submission(
    check: &BotCheck,
    backend: &dyn FormBackend,
    form: &WaitlistForm,
    now: DateTime<Utc>,
) -> SubmissionOutcome {
    let dwell_ms = match check.inspect(form, now.timestamp_millis()) {
        BotVerdict::Human { dwell_ms } => dwell_ms,
        verdict => return SubmissionOutcome::DroppedAsBot(verdict),
    };
    if let Err(field) = form.validate() {
        return SubmissionOutcome::Invalid { field };
    }
    let record = SubmissionRecord::from_form(form, dwell_ms, now);
    let id = record.id;
    match backend.submit(&record).await {
        Ok(()) => SubmissionOutcome::Accepted { id },
        Err(e) => SubmissionOutcome::ForwardFailed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn record() -> SubmissionRecord {
        let form = WaitlistForm {
            nombre: "  María  ".to_string(),
            email: "maria@example.com".to_string(),
            acepta_rgpd: "on".to_string(),
            ..Default::default()
        };
        let at = DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        SubmissionRecord::from_form(&form, 7_500, at)
    }

    #[test]
    fn record_trims_and_keeps_consent() {
        let record = record();
        assert_eq!(record.nombre, "María");
        assert!(record.acepta_rgpd);
        assert_eq!(record.time_on_page_ms, 7_500);
    }

    #[test]
    fn pairs_carry_form_name_timestamp_and_dwell() {
        let pairs = record().as_pairs();
        let get = |k: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == k)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("form-name").as_deref(), Some(FORM_NAME));
        assert_eq!(
            get("timestamp").as_deref(),
            Some("2025-06-01T12:00:00.000Z")
        );
        assert_eq!(get("timeOnPage").as_deref(), Some("7500"));
        assert_eq!(get("Acepta RGPD").as_deref(), Some("sí"));
    }

    /// Stub backend capturing records, for handler-level tests.
    pub(crate) struct CapturingBackend {
        pub submitted: Mutex<Vec<SubmissionRecord>>,
        pub fail: bool,
    }

    impl CapturingBackend {
        pub(crate) fn new(fail: bool) -> Self {
            Self {
                submitted: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl FormBackend for CapturingBackend {
        async fn submit(&self, record: &SubmissionRecord) -> Result<(), WaitlistError> {
            if self.fail {
                return Err(WaitlistError::Rejected(502));
            }
            self.submitted.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    #[test]
    fn stub_backend_round_trip() {
        let backend = CapturingBackend::new(false);
        tokio_test::block_on(backend.submit(&record())).unwrap();
        assert_eq!(backend.submitted.lock().unwrap().len(), 1);

        let failing = CapturingBackend::new(true);
        let err = tokio_test::block_on(failing.submit(&record())).unwrap_err();
        assert!(matches!(err, WaitlistError::Rejected(502)));
    }
}
