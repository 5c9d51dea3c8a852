//! Marketing copy. Text-only constants live here; structure lives in the
//! render functions. Inline emphasis is part of the copy and kept as markup.

pub const BRAND: &str = "Tesela 40";
pub const PAGE_TITLE: &str = "Tesela 40 — Artesanía contemporánea que cuenta historias";

// --- Hero ---
pub const HERO_HEADING: &str = "Tesela 40";
pub const HERO_SUBHEADING: &str = "Artesanía contemporánea que cuenta historias";
pub const HERO_STATUS: &str = "Estamos afinando los últimos detalles...";
pub const HERO_LINE_1: &str = "Regalar algo bonito no debería ser complicado.";
pub const HERO_LINE_2: &str = "Encontrar algo auténtico, tampoco.";
pub const HERO_PILL_INTRO: &str = "Regalos artesanales únicos:";
pub const HERO_PILL_LIST: &str =
    "Flores preservadas, cerámica, aromas, gastronomía y más.";
pub const HERO_PILL_CLOSE: &str =
    "Creamos combinaciones personalizadas y packs listos para enviar sin complicaciones.";
pub const CTA_LABEL: &str = "¡Unirme a la lista de espera ya!";
pub const CTA_HINT: &str = "Y recibir un detalle especial en el primer pedido";

// --- Waitlist form ---
pub const FORM_HEADLINE: &str =
    "Descubre antes que nadie nuestras combinaciones artesanales únicas";
pub const FORM_IDEAS_PLACEHOLDER: &str = "Me encantaría ver productos como…";
pub const FORM_REGALO_LABEL: &str =
    "¿Buscas un regalo personalizado o para un evento único?";
pub const FORM_REGALO_PLACEHOLDER: &str = "Describe tu idea para un regalo especial…";
pub const FORM_RGPD_LABEL: &str =
    "Acepto el tratamiento de mis datos para recibir información comercial de Tesela 40.";
pub const FORM_HONEYPOT_LABEL: &str = "No rellenar si eres humano:";

// --- About ---
pub const ABOUT_HEADING: &str = "Sobre nosotras";
pub const ABOUT_HTML: &str = "\
<p>Tesela 40 nace de la pasión por la <strong>artesanía con una mirada contemporánea</strong> \
y el deseo de <strong>crear experiencias únicas</strong> a través de <strong>regalos \
cuidadosamente seleccionados</strong>. Y que, por fin, sea fácil regalar algo auténtico, \
original y bonito.</p>\n\
<p>Somos <strong>María</strong> y <strong>Rita</strong>, ratón de campo y ratón de ciudad. \
De Husillos (Palencia) a Barcelona, uniéndonos en Bilbao, una estudió cómo sembrar el campo, \
la otra cómo cultivar ideas. El <strong>arte y la naturaleza están presentes en todo lo que \
hacemos</strong>.</p>\n\
<p>Cada pieza de nuestras futuras colecciones cuenta una historia, conectando el trabajo de \
artesanos locales con momentos especiales en tu vida.</p>\n\
<p><strong>Creemos en la belleza de lo hecho a mano y en el poder de los pequeños detalles \
para transformar lo cotidiano en extraordinario</strong>.</p>";
pub const ABOUT_CTA_LEAD: &str =
    "¿Tienes curiosidad por saber lo que haremos? Únete a nuestra lista de espera, ¡falta poco!";

// --- Contact ---
pub const CONTACT_HEADING: &str = "Contacto";
pub const CONTACT_EMAIL: &str = "info@tesela40.es";
pub const CONTACT_INSTAGRAM_URL: &str = "https://www.instagram.com/tesela_40/";
pub const CONTACT_INSTAGRAM_LABEL: &str = "Únete al universo Tesela 40 en Instagram";

// --- Footer ---
pub const FOOTER_NOTE: &str = "© 2025 Tesela 40. Todos los derechos reservados.";

// --- Thank-you screen ---
pub const THANKS_LEAD: &str =
    "¡Gracias por unirte a Tesela 40! ¡Nuestras novedades llegarán pronto a tu buzón!";
pub const THANKS_SIGNATURE: &str = "María y Rita";
pub const THANKS_SHARE_LEAD: &str =
    "Comparte e inspira a otros a encontrar la magia del regalo perfecto.";
pub const THANKS_COPY_CONFIRM: &str =
    "¡Enlace copiado! Ya puedes compartirlo en Instagram o donde quieras.";

// --- Notices ---
pub const NOTICE_SEND_FAILED: &str =
    "Hubo un error al enviar el formulario. Por favor, inténtalo de nuevo.";
pub const NOTICE_INVALID: &str =
    "Revisa los campos marcados del formulario e inténtalo de nuevo.";
