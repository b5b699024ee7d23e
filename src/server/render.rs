//! HTML rendering of the localized pages.

use crate::content::{navigation, strings_for, Navigation, PageStrings, CONTACT_EMAIL};
use crate::i18n::{Locale, LocalizationStrategy, Location};
use std::fmt::Write;

/// Which page body to render for a base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Landing,
    Privacy,
    Terms,
    NotFound,
}

impl PageKind {
    pub fn from_base_path(base_path: &str) -> Self {
        match base_path.trim_end_matches('/') {
            "" => Self::Landing,
            "/privacy" => Self::Privacy,
            "/terms" => Self::Terms,
            _ => Self::NotFound,
        }
    }
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render a full document for `kind` in `locale`.
pub fn render_page(
    kind: PageKind,
    locale: Locale,
    strategy: LocalizationStrategy,
    location: &Location,
) -> String {
    let strings = strings_for(locale);
    let nav = navigation(locale, strategy, location);

    let title = match kind {
        PageKind::Landing => strings.title,
        PageKind::Privacy => strings.privacy_title,
        PageKind::Terms => strings.terms_title,
        PageKind::NotFound => strings.not_found_title,
    };

    let mut html = String::with_capacity(4096);
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n<meta name=\"description\" content=\"{description}\">\n</head>\n<body>\n",
        lang = locale.code(),
        title = escape_html(title),
        description = escape_html(strings.description),
    );

    render_header(&mut html, &nav, strings);

    html.push_str("<main>\n");
    match kind {
        PageKind::Landing => render_landing(&mut html, strings),
        PageKind::Privacy | PageKind::Terms => {
            let _ = writeln!(html, "<section><h1>{}</h1></section>", escape_html(title));
        }
        PageKind::NotFound => {
            let _ = writeln!(
                html,
                "<section><h1>{}</h1><p>{}</p><a href=\"{}\">{}</a></section>",
                escape_html(strings.not_found_title),
                escape_html(strings.not_found_body),
                escape_html(&nav.home_href),
                escape_html(strings.back_home),
            );
        }
    }
    html.push_str("</main>\n");

    render_footer(&mut html, &nav, strings);
    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(html: &mut String, nav: &Navigation, strings: &PageStrings) {
    let _ = writeln!(
        html,
        "<header>\n<a class=\"home\" href=\"{}\">{}</a>\n<nav>",
        escape_html(&nav.home_href),
        escape_html(strings.tagline),
    );
    for link in &nav.header {
        let _ = writeln!(
            html,
            "<a href=\"{}\">{}</a>",
            escape_html(&link.href),
            escape_html(&link.text)
        );
    }
    let _ = writeln!(
        html,
        "</nav>\n<div class=\"language-selector\" role=\"group\" aria-label=\"{}\">",
        escape_html(strings.language_label)
    );
    for option in &nav.languages {
        let _ = writeln!(
            html,
            "<a href=\"{switch}\" hreflang=\"{code}\" aria-pressed=\"{active}\">\
<img src=\"{flag}\" alt=\"{name}\"><span>{name}</span></a>",
            switch = escape_html(&option.switch_href),
            code = option.code,
            active = option.active,
            flag = escape_html(option.flag),
            name = escape_html(option.native_name),
        );
    }
    html.push_str("</div>\n</header>\n");
}

fn render_landing(html: &mut String, strings: &PageStrings) {
    let _ = writeln!(
        html,
        "<section class=\"hero\">\n<p>{}</p>\n<h1>{}</h1>\n<p>{}</p>\n\
<a class=\"btn-primary\" href=\"#contacto\">{}</a>\n\
<a class=\"btn-secondary\" href=\"/docs/dossier.pdf\" download>{}</a>\n</section>",
        escape_html(strings.tagline),
        escape_html(strings.hero_title),
        escape_html(strings.hero_subtitle),
        escape_html(strings.cta_meeting),
        escape_html(strings.cta_dossier),
    );
    let _ = writeln!(
        html,
        "<section id=\"contacto\">\n<h2>{}</h2>\n<p>{}</p>\n\
<form aria-label=\"{}\"></form>\n<a href=\"mailto:{email}\">{email}</a>\n</section>",
        escape_html(strings.contact_title),
        escape_html(strings.contact_subtitle),
        escape_html(strings.contact_form_label),
        email = CONTACT_EMAIL,
    );
}

fn render_footer(html: &mut String, nav: &Navigation, strings: &PageStrings) {
    html.push_str("<footer>\n<ul>\n");
    for link in &nav.footer {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&link.href),
            escape_html(&link.text)
        );
    }
    let _ = writeln!(html, "</ul>\n<p>{}</p>\n</footer>", escape_html(strings.footer_note));
}
