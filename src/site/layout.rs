//! Page shell: head, stylesheet, sticky nav with the search form, footer and
//! the scroll snippet. Content sections plug into the `main` slot.

use crate::dom::escape_attr;

use super::content;

/// Brand palette and layout rules. `mark.page-highlight` is the visual form
/// of a search marker; `scroll-behavior: smooth` covers the section anchors.
const PAGE_CSS: &str = "\
html { scroll-behavior: smooth; }
body {
  margin: 0;
  min-height: 100vh;
  background: #a2a183;
  color: #efebe0;
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
  font-weight: 300;
  letter-spacing: 0.025em;
  line-height: 1.6;
}
h1, h2, .script { font-family: 'Dancing Script', cursive; }
a { color: inherit; }

mark.page-highlight {
  background: #d9a05b66;
  color: inherit;
  padding: 0 .1em;
  border-radius: .2em;
}

.nav {
  position: fixed;
  top: 0; left: 0; right: 0;
  z-index: 50;
  background: #efebe0;
  box-shadow: 0 2px 8px rgba(0,0,0,.08);
}
.nav-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}
.nav-logo { height: 2rem; width: auto; }
.nav-links { display: flex; align-items: center; gap: 2rem; }
.nav-links a { color: #bf7969; font-weight: 700; text-decoration: none; }
.nav-links a:hover { opacity: .8; }
.nav-search { display: flex; gap: .5rem; }
.nav-search input {
  padding: .5rem .75rem;
  border: none;
  border-radius: .5rem;
  background: rgba(255,255,255,.6);
  color: #bf7969;
  width: 12rem;
}
.nav-search button {
  border: none;
  border-radius: .5rem;
  background: #bf7969;
  color: #efebe0;
  padding: .5rem .9rem;
  font-weight: 600;
  cursor: pointer;
}

.section { padding: 4rem 1.5rem; max-width: 56rem; margin: 0 auto; }
.hero { padding-top: 8rem; min-height: 100vh; text-align: center; }
.hero h1 { font-size: 4rem; margin: 1.5rem 0; font-weight: 600; }
.hero h2 { font-size: 1.8rem; margin-bottom: 2rem; font-weight: 500; }
.hero-logo { height: 3rem; width: auto; }
.accent { color: #d9a05b; }
.pill {
  background: rgba(239,235,224,.6);
  color: #a2a183;
  border-radius: 999px;
  padding: 1.5rem 2rem;
  max-width: 42rem;
  margin: 1.5rem auto;
}
.pill strong { font-weight: 700; }
.cta {
  display: inline-block;
  background: #bf7969;
  color: #efebe0;
  border: 1px solid #efebe0;
  border-radius: .5rem;
  padding: 1rem 2rem;
  font-weight: 600;
  text-decoration: none;
  transition: transform .3s;
}
.cta:hover { transform: scale(1.05); }
.cta small { display: block; font-size: .75rem; opacity: .9; margin-top: .25rem; }
.chevron { display: inline-block; margin-top: 2rem; animation: bounce 1.2s infinite; text-decoration: none; font-size: 2rem; }
@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(.5rem); }
}

.divider { display: flex; justify-content: center; gap: 1rem; padding: 2rem 0; }
.divider img { height: 2rem; width: 2rem; }

.card {
  background: rgba(239,235,224,.8);
  color: #a2a183;
  border-radius: .75rem;
  padding: 2rem;
}
.card h3 { text-align: center; font-family: 'Dancing Script', cursive; font-size: 1.8rem; }
.field { margin-bottom: 1.5rem; }
.field label { display: block; font-size: .875rem; font-weight: 500; margin-bottom: .5rem; }
.field input, .field textarea {
  width: 100%;
  box-sizing: border-box;
  padding: .6rem .9rem;
  border: none;
  border-radius: .5rem;
  background: #fff;
  color: #a2a183;
}
.consent { display: flex; gap: .75rem; align-items: flex-start; font-size: .875rem; }
.submit {
  width: 100%;
  padding: .85rem;
  border: 1px solid #efebe0;
  border-radius: .5rem;
  background: #bf7969;
  color: #efebe0;
  font-weight: 600;
  cursor: pointer;
}
.oculto { display: none; }

.notice {
  background: #bf7969;
  color: #efebe0;
  border-radius: .5rem;
  padding: 1rem 1.5rem;
  margin-bottom: 1.5rem;
  text-align: center;
}

#about strong { font-weight: 800; }
.centered { text-align: center; }
.contact-mail { font-size: 1.4rem; text-decoration: underline; text-decoration-color: #d9a05b; text-underline-offset: 4px; }

.footer { padding: 2rem 0; text-align: center; font-size: .875rem; opacity: .6; }
";

/// Centers the first search marker once the page loads. Finding nothing is
/// the no-match case: no scroll happens.
const SCROLL_SNIPPET: &str = "\
<script>
  var hit = document.querySelector('mark.page-highlight');
  if (hit) { hit.scrollIntoView({ behavior: 'smooth', block: 'center' }); }
</script>";

/// Wraps rendered main content in the full page: head, nav, footer, scripts.
/// `query` refills the search box so the term stays visible after a search.
pub fn page_shell(title: &str, query: &str, main_html: &str) -> String {
    let mut html = String::with_capacity(32 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    html.push_str(&crate::dom::escape_text(title));
    html.push_str("</title>\n<style>\n");
    html.push_str(PAGE_CSS);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&nav_bar(query));
    html.push_str(main_html);
    html.push_str(&footer());
    html.push_str(SCROLL_SNIPPET);
    html.push_str("\n</body>\n</html>\n");
    html
}

/// Sticky nav: brand mark, section links, and the search form. Enter in the
/// input and a click on the button are the same `GET /` submission.
fn nav_bar(query: &str) -> String {
    format!(
        "<nav class=\"nav\">\n<div class=\"nav-inner\">\n\
         <a href=\"/\"><img class=\"nav-logo\" src=\"/assets/logo-nav.svg\" alt=\"{brand}\"></a>\n\
         <div class=\"nav-links\">\n\
         <a href=\"#about\">Sobre nosotras</a>\n\
         <a href=\"#contact\">Contacto</a>\n\
         <form class=\"nav-search\" method=\"get\" action=\"/\" role=\"search\">\n\
         <input type=\"search\" name=\"q\" value=\"{query}\" placeholder=\"Buscar...\" \
         aria-label=\"Buscar en la página\">\n\
         <button type=\"submit\" aria-label=\"Buscar\" title=\"Buscar\">Buscar</button>\n\
         </form>\n\
         </div>\n</div>\n</nav>\n",
        brand = content::BRAND,
        query = escape_attr(query),
    )
}

fn footer() -> String {
    format!(
        "<footer class=\"footer\"><p>{}</p></footer>\n",
        content::FOOTER_NOTE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_embeds_query_escaped() {
        let html = page_shell("t", "\"><script>alert(1)</script>", "<main></main>");
        assert!(!html.contains("\"><script>alert(1)"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn shell_has_single_main_between_nav_and_footer() {
        let html = page_shell("t", "", "<main><p>hola</p></main>");
        assert_eq!(html.matches("<main>").count(), 1);
        let nav = html.find("<nav").unwrap();
        let main = html.find("<main").unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(nav < main && main < footer);
    }
}
