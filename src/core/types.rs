use serde::Deserialize;

/// Query parameters accepted by the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Current value of the nav search box, passed through un-sanitized.
    #[serde(default)]
    pub q: Option<String>,
    /// Error notice flag set by the waitlist handler on redirect.
    #[serde(default)]
    pub error: Option<String>,
}

/// The waitlist form as posted by the page, honeypots included.
///
/// Field names mirror the rendered form controls; visible fields keep their
/// Spanish labels on the wire so the forwarded record matches what the form
/// backend already collects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WaitlistForm {
    #[serde(rename = "form-name", default)]
    pub form_name: String,
    /// Epoch milliseconds at which the form was rendered; basis of the
    /// dwell-time check.
    #[serde(default)]
    pub form_ts: Option<i64>,

    #[serde(rename = "Nombre", default)]
    pub nombre: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Teléfono", default)]
    pub telefono: String,
    #[serde(rename = "Ideas", default)]
    pub ideas: String,
    #[serde(rename = "Regalo personalizado", default)]
    pub regalo: String,
    /// Checkbox; carries "on" when checked, absent otherwise.
    #[serde(rename = "Acepta RGPD", default)]
    pub acepta_rgpd: String,

    // Honeypot fields. Hidden from humans; any content here is a bot signal.
    #[serde(rename = "bot-field", default)]
    pub bot_field: String,
    #[serde(default)]
    pub website: String,
    #[serde(rename = "email-confirm", default)]
    pub email_confirm: String,
    #[serde(rename = "phone-check", default)]
    pub phone_check: String,
}

impl WaitlistForm {
    /// Honeypot fields paired with their wire names, for inspection and logs.
    pub fn honeypot_values(&self) -> [(&'static str, &str); 4] {
        [
            ("bot-field", self.bot_field.as_str()),
            ("website", self.website.as_str()),
            ("email-confirm", self.email_confirm.as_str()),
            ("phone-check", self.phone_check.as_str()),
        ]
    }

    /// Server-side mirror of the form's HTML constraints. Returns the name of
    /// the first offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        let name_len = self.nombre.trim().chars().count();
        if !(2..=50).contains(&name_len) {
            return Err("Nombre");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("Email");
        }
        if self.telefono.trim().chars().count() > 15 {
            return Err("Teléfono");
        }
        if self.ideas.chars().count() > 500 {
            return Err("Ideas");
        }
        if self.regalo.chars().count() > 500 {
            return Err("Regalo personalizado");
        }
        if self.acepta_rgpd.trim().is_empty() {
            return Err("Acepta RGPD");
        }
        Ok(())
    }

    pub fn consented(&self) -> bool {
        !self.acepta_rgpd.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> WaitlistForm {
        WaitlistForm {
            form_name: "waitlist".to_string(),
            form_ts: Some(0),
            nombre: "María".to_string(),
            email: "maria@example.com".to_string(),
            acepta_rgpd: "on".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn single_char_name_is_rejected() {
        let mut form = valid_form();
        form.nombre = "M".to_string();
        assert_eq!(form.validate(), Err("Nombre"));
    }

    #[test]
    fn missing_consent_is_rejected() {
        let mut form = valid_form();
        form.acepta_rgpd = String::new();
        assert_eq!(form.validate(), Err("Acepta RGPD"));
    }

    #[test]
    fn form_decodes_from_urlencoded_body() {
        let body = "form-name=waitlist&form_ts=1700000000000&Nombre=Rita\
                    &Email=rita%40example.com&Acepta+RGPD=on&bot-field=";
        let form: WaitlistForm = serde_urlencoded::from_str(body).unwrap();
        assert_eq!(form.nombre, "Rita");
        assert_eq!(form.form_ts, Some(1_700_000_000_000));
        assert!(form.consented());
        assert!(form.bot_field.is_empty());
    }
}
