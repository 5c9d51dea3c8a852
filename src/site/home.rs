//! The landing page: hero, waitlist form, about and contact sections.

use std::fmt::Write as _;

use super::content;
use super::layout;

/// Error notice selected by the `error` query flag on redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SubmissionFailed,
    InvalidSubmission,
}

impl Notice {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "envio" => Some(Self::SubmissionFailed),
            "datos" => Some(Self::InvalidSubmission),
            _ => None,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::SubmissionFailed => "envio",
            Self::InvalidSubmission => "datos",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::SubmissionFailed => content::NOTICE_SEND_FAILED,
            Self::InvalidSubmission => content::NOTICE_INVALID,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HomeContext<'a> {
    /// Render instant in epoch milliseconds, embedded in the form for the
    /// dwell-time check.
    pub form_ts_ms: i64,
    /// Current nav search box value.
    pub query: &'a str,
    pub notice: Option<Notice>,
}

pub fn render_home(ctx: &HomeContext<'_>) -> String {
    let mut main = String::with_capacity(16 * 1024);
    main.push_str("<main>\n");
    main.push_str(&hero_section());
    main.push_str(&divider());
    main.push_str(&waitlist_section(ctx));
    main.push_str(&about_section());
    main.push_str(&contact_section());
    main.push_str("</main>\n");
    layout::page_shell(content::PAGE_TITLE, ctx.query, &main)
}

fn hero_section() -> String {
    format!(
        "<section id=\"home\" class=\"section hero\">\n\
         <img class=\"hero-logo\" src=\"/assets/logo-hero.svg\" alt=\"{brand}\">\n\
         <h1>{heading}</h1>\n\
         <h2>{subheading}</h2>\n\
         <p><span class=\"accent\">✨</span> {status}</p>\n\
         <p><a class=\"cta\" href=\"#waitlist\">{cta}<small>{hint}</small></a></p>\n\
         <p>{line1}</p>\n<p>{line2}</p>\n\
         <div class=\"pill\">\n\
         <p>{pill_intro}</p>\n\
         <p><strong>{pill_list}</strong></p>\n\
         <p>{pill_close}</p>\n\
         </div>\n\
         <a class=\"chevron\" href=\"#waitlist\" aria-label=\"Bajar\">⌄</a>\n\
         </section>\n",
        brand = content::BRAND,
        heading = content::HERO_HEADING,
        subheading = content::HERO_SUBHEADING,
        status = content::HERO_STATUS,
        cta = content::CTA_LABEL,
        hint = content::CTA_HINT,
        line1 = content::HERO_LINE_1,
        line2 = content::HERO_LINE_2,
        pill_intro = content::HERO_PILL_INTRO,
        pill_list = content::HERO_PILL_LIST,
        pill_close = content::HERO_PILL_CLOSE,
    )
}

fn divider() -> String {
    let mut row = String::from("<div class=\"divider\" aria-hidden=\"true\">\n");
    for _ in 0..12 {
        row.push_str("<img src=\"/assets/mosaico.svg\" alt=\"\">\n");
    }
    row.push_str("</div>\n");
    row
}

fn waitlist_section(ctx: &HomeContext<'_>) -> String {
    let mut section = String::with_capacity(4 * 1024);
    section.push_str("<section id=\"waitlist\" class=\"section\">\n");
    if let Some(notice) = ctx.notice {
        let _ = write!(
            section,
            "<div class=\"notice\" role=\"alert\">{}</div>\n",
            notice.message()
        );
    }
    let _ = write!(
        section,
        "<form class=\"card\" name=\"waitlist\" method=\"post\" action=\"/waitlist\">\n\
         <div class=\"oculto\" aria-hidden=\"true\">\n\
         <label>{honeypot_label}\n\
         <input type=\"text\" name=\"bot-field\" autocomplete=\"off\" tabindex=\"-1\"></label>\n\
         <input type=\"text\" name=\"website\" autocomplete=\"off\" tabindex=\"-1\">\n\
         <input type=\"email\" name=\"email-confirm\" autocomplete=\"off\" tabindex=\"-1\">\n\
         <input type=\"tel\" name=\"phone-check\" autocomplete=\"off\" tabindex=\"-1\">\n\
         </div>\n\
         <input type=\"hidden\" name=\"form-name\" value=\"waitlist\">\n\
         <input type=\"hidden\" name=\"form_ts\" value=\"{form_ts}\">\n\
         <h3>{headline}</h3>\n",
        honeypot_label = content::FORM_HONEYPOT_LABEL,
        form_ts = ctx.form_ts_ms,
        headline = content::FORM_HEADLINE,
    );
    section.push_str(
        "<div class=\"field\">\n\
         <label for=\"nombre\">Nombre</label>\n\
         <input type=\"text\" id=\"nombre\" name=\"Nombre\" required minlength=\"2\" maxlength=\"50\">\n\
         </div>\n\
         <div class=\"field\">\n\
         <label for=\"email\">Email</label>\n\
         <input type=\"email\" id=\"email\" name=\"Email\" required>\n\
         </div>\n\
         <div class=\"field\">\n\
         <label for=\"telefono\">Teléfono (opcional)</label>\n\
         <input type=\"tel\" id=\"telefono\" name=\"Teléfono\" maxlength=\"15\">\n\
         </div>\n",
    );
    let _ = write!(
        section,
        "<div class=\"field\">\n\
         <label for=\"ideas\">Cuéntanos tus ideas</label>\n\
         <textarea id=\"ideas\" name=\"Ideas\" rows=\"4\" maxlength=\"500\" \
         placeholder=\"{ideas_ph}\"></textarea>\n\
         </div>\n\
         <div class=\"field\">\n\
         <label for=\"regalo\">{regalo_label}</label>\n\
         <textarea id=\"regalo\" name=\"Regalo personalizado\" rows=\"4\" maxlength=\"500\" \
         placeholder=\"{regalo_ph}\"></textarea>\n\
         </div>\n\
         <div class=\"field consent\">\n\
         <input type=\"checkbox\" id=\"rgpd\" name=\"Acepta RGPD\" required>\n\
         <label for=\"rgpd\">{rgpd_label}</label>\n\
         </div>\n\
         <button class=\"submit\" type=\"submit\">{cta}</button>\n\
         </form>\n",
        ideas_ph = content::FORM_IDEAS_PLACEHOLDER,
        regalo_label = content::FORM_REGALO_LABEL,
        regalo_ph = content::FORM_REGALO_PLACEHOLDER,
        rgpd_label = content::FORM_RGPD_LABEL,
        cta = content::CTA_LABEL,
    );
    section.push_str(
        "<p class=\"centered\"><a class=\"chevron\" href=\"#about\" aria-label=\"Bajar\">⌄</a></p>\n\
         </section>\n",
    );
    section
}

fn about_section() -> String {
    format!(
        "<section id=\"about\" class=\"section\">\n\
         <h2 class=\"centered\">{heading}</h2>\n\
         {body}\n\
         <div class=\"centered\">\n\
         <p>{cta_lead}</p>\n\
         <p><a class=\"cta\" href=\"#waitlist\">{cta}</a></p>\n\
         <a class=\"chevron\" href=\"#contact\" aria-label=\"Bajar\">⌄</a>\n\
         </div>\n\
         </section>\n",
        heading = content::ABOUT_HEADING,
        body = content::ABOUT_HTML,
        cta_lead = content::ABOUT_CTA_LEAD,
        cta = content::CTA_LABEL,
    )
}

fn contact_section() -> String {
    format!(
        "<section id=\"contact\" class=\"section centered\">\n\
         <h2>{heading}</h2>\n\
         <p><a class=\"contact-mail\" href=\"mailto:{email}\">{email}</a></p>\n\
         <p><a href=\"{insta_url}\" target=\"_blank\" rel=\"noopener noreferrer\">{insta_label}</a></p>\n\
         </section>\n",
        heading = content::CONTACT_HEADING,
        email = content::CONTACT_EMAIL,
        insta_url = content::CONTACT_INSTAGRAM_URL,
        insta_label = content::CONTACT_INSTAGRAM_LABEL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> HomeContext<'static> {
        HomeContext {
            form_ts_ms: 1_700_000_000_000,
            query: "",
            notice: None,
        }
    }

    #[test]
    fn home_carries_form_honeypots_and_timestamp() {
        let html = render_home(&ctx());
        for field in crate::antibot::HONEYPOT_FIELDS {
            assert!(
                html.contains(&format!("name=\"{field}\"")),
                "missing honeypot {field}"
            );
        }
        assert!(html.contains("name=\"form_ts\" value=\"1700000000000\""));
        assert!(html.contains("action=\"/waitlist\""));
    }

    #[test]
    fn home_has_all_sections_and_no_markers() {
        let html = render_home(&ctx());
        for id in ["home", "waitlist", "about", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
        }
        assert!(!html.contains("<mark"));
    }

    #[test]
    fn notice_flag_round_trips() {
        for notice in [Notice::SubmissionFailed, Notice::InvalidSubmission] {
            assert_eq!(Notice::from_flag(notice.flag()), Some(notice));
        }
        assert_eq!(Notice::from_flag("otro"), None);

        let html = render_home(&HomeContext {
            notice: Some(Notice::SubmissionFailed),
            ..ctx()
        });
        assert!(html.contains("role=\"alert\""));
    }
}
