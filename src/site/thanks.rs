//! Post-submission "thank you" screen with the share actions.
//!
//! Standalone page without the nav: the confirmation takes over the whole
//! viewport after a successful submission.

use crate::dom::escape_attr;
use crate::features::share;

use super::content;

const THANKS_CSS: &str = "\
body {
  margin: 0;
  min-height: 100vh;
  background: #a2a183;
  color: #a2a183;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: 'Inter', sans-serif;
}
.card {
  max-width: 600px;
  margin: 20px;
  background: rgba(239, 235, 224, .8);
  padding: 60px 40px;
  border-radius: 15px;
  text-align: center;
}
.card h1 { font-family: 'Dancing Script', cursive; font-size: 3rem; font-weight: 600; margin: 30px 0 20px; }
.card .lead { font-size: 1.2rem; line-height: 1.6; margin-bottom: 40px; }
.card img { height: 40px; width: auto; margin: 20px auto; display: block; }
.share-row { display: flex; gap: 15px; justify-content: center; flex-wrap: wrap; margin-top: 40px; }
.share-row a, .share-row button {
  background: #bf7969;
  color: #efebe0;
  padding: 12px 20px;
  border: 2px solid #efebe0;
  border-radius: 10px;
  text-decoration: none;
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
}
";

pub fn render_thanks(site_url: &str) -> String {
    let share_text = share::share_text(site_url);
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{brand}</title>\n<style>\n{css}</style>\n</head>\n<body>\n\
         <div class=\"card\">\n\
         <p class=\"lead\">{lead}</p>\n\
         <h1>{signature}</h1>\n\
         <img src=\"/assets/logo-hero.svg\" alt=\"{brand}\">\n\
         <p>{share_lead}</p>\n\
         <div class=\"share-row\">\n\
         <a href=\"{whatsapp}\" target=\"_blank\" rel=\"noopener noreferrer\">WhatsApp</a>\n\
         <a href=\"{mailto}\">💌 Email</a>\n\
         <button type=\"button\" data-share-text=\"{share_text}\" \
         onclick=\"navigator.clipboard.writeText(this.dataset.shareText)\
.then(function () {{ alert('{copy_confirm}'); }});\">🔗 Copiar enlace</button>\n\
         </div>\n\
         </div>\n</body>\n</html>\n",
        brand = content::BRAND,
        css = THANKS_CSS,
        lead = content::THANKS_LEAD,
        signature = content::THANKS_SIGNATURE,
        share_lead = content::THANKS_SHARE_LEAD,
        whatsapp = escape_attr(&share::whatsapp_share_url(site_url)),
        mailto = escape_attr(&share::mailto_share_url(site_url)),
        share_text = escape_attr(&share_text),
        copy_confirm = content::THANKS_COPY_CONFIRM,
    )
}
