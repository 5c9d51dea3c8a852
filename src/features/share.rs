//! Share actions for the thank-you screen.
//!
//! One message, three outlets: a WhatsApp share URL, a mailto URL and the
//! plain text handed to the clipboard. URL components are percent-encoded
//! with the conservative set.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub const SHARE_MESSAGE: &str =
    "Apúntate a esto, ¡te va a encantar! Hay regalito si te apuntas ahora.";
pub const SHARE_SUBJECT: &str = "Te va a encantar Tesela 40";

/// The text a visitor copies or sends: message plus the site URL.
pub fn share_text(site_url: &str) -> String {
    format!("{SHARE_MESSAGE} {site_url}")
}

pub fn whatsapp_share_url(site_url: &str) -> String {
    format!(
        "https://wa.me/?text={}",
        utf8_percent_encode(&share_text(site_url), NON_ALPHANUMERIC)
    )
}

pub fn mailto_share_url(site_url: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        utf8_percent_encode(SHARE_SUBJECT, NON_ALPHANUMERIC),
        utf8_percent_encode(&share_text(site_url), NON_ALPHANUMERIC)
    )
}
