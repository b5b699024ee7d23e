/// All localized copy for one locale.
///
/// Strings are stored raw; HTML escaping happens at render time.
#[derive(Debug, Clone)]
pub struct PageStrings {
    // ==================== Metadata ====================
    /// Document title of the landing page
    pub title: &'static str,

    /// Meta description of the landing page
    pub description: &'static str,

    // ==================== Hero ====================
    pub tagline: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,

    /// Primary call to action (scrolls to the contact section)
    pub cta_meeting: &'static str,

    /// Secondary call to action (dossier download)
    pub cta_dossier: &'static str,

    // ==================== Navigation ====================
    /// Header anchors, in the order of `navigation::HEADER_ANCHORS`
    pub nav_labels: [&'static str; 5],

    /// Accessible label of the language selector
    pub language_label: &'static str,

    // ==================== Contact ====================
    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub contact_form_label: &'static str,

    // ==================== Footer ====================
    pub footer_note: &'static str,
    pub privacy_title: &'static str,
    pub terms_title: &'static str,

    // ==================== Errors ====================
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub back_home: &'static str,
}

// ==================== Spanish Strings ====================

/// Spanish copy (default locale)
pub const SPANISH_STRINGS: PageStrings = PageStrings {
    title: "Escuela Integral de Fútbol Profesional en Bulgaria",
    description: "Sports Scouting Sudamérica presenta un ecosistema deportivo integral para formar futbolistas profesionales en Bulgaria con estándares internacionales.",

    tagline: "Sports Scouting Sudamérica",
    hero_title: "Escuela Integral de Fútbol Profesional en Bulgaria",
    hero_subtitle: "Fundamos un ecosistema deportivo que une la fortaleza atlética búlgara con la creatividad sudamericana para formar profesionales capaces de conquistar el escenario internacional.",
    cta_meeting: "Agendar reunión",
    cta_dossier: "Descargar dossier",

    nav_labels: [
        "Programa Integral",
        "Infraestructura",
        "Talento y Formación",
        "Impacto Social",
        "Contacto",
    ],
    language_label: "Idioma",

    contact_title: "Conversemos sobre el proyecto",
    contact_subtitle: "Completa el formulario y coordinemos una reunión presencial o virtual.",
    contact_form_label: "Formulario de contacto",

    footer_note: "Sports Scouting Sudamérica · Bulgaria. Proyecto deportivo integral para el desarrollo del fútbol profesional.",
    privacy_title: "Política de privacidad",
    terms_title: "Términos y condiciones",

    not_found_title: "Página no encontrada",
    not_found_body: "La página que buscas no existe o fue movida.",
    back_home: "Volver al inicio",
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: PageStrings = PageStrings {
    title: "Comprehensive Professional Football Academy in Bulgaria",
    description: "Sports Scouting South America introduces an end-to-end sports ecosystem in Bulgaria to develop professional football players that meet international standards.",

    tagline: "Sports Scouting South America",
    hero_title: "Professional Football Academy in Bulgaria",
    hero_subtitle: "We build a sports ecosystem that blends Bulgarian athletic strength with South American creativity to prepare players ready to conquer the global stage.",
    cta_meeting: "Book a meeting",
    cta_dossier: "Download dossier",

    nav_labels: [
        "Comprehensive Program",
        "Infrastructure",
        "Talent & Development",
        "Social Impact",
        "Contact",
    ],
    language_label: "Language",

    contact_title: "Let's talk about the project",
    contact_subtitle: "Fill in the form and let's arrange an in-person or virtual meeting.",
    contact_form_label: "Contact form",

    footer_note: "Sports Scouting South America · Bulgaria. An integrated sports project for professional football development.",
    privacy_title: "Privacy policy",
    terms_title: "Terms and conditions",

    not_found_title: "Page not found",
    not_found_body: "The page you are looking for does not exist or has moved.",
    back_home: "Back to home",
};

// ==================== Bulgarian Strings ====================

pub const BULGARIAN_STRINGS: PageStrings = PageStrings {
    title: "Интегрална професионална футболна академия в България",
    description: "Sports Scouting South America представя цялостна спортна екосистема в България за подготовка на професионални футболисти по международни стандарти.",

    tagline: "Sports Scouting South America",
    hero_title: "Интегрална футболна академия в България",
    hero_subtitle: "Създаваме спортна екосистема, която обединява българската физическа мощ с южноамериканската креативност, за да подготвя играчи за световната сцена.",
    cta_meeting: "Запази среща",
    cta_dossier: "Изтегли досие",

    nav_labels: [
        "Интегрална програма",
        "Инфраструктура",
        "Талант и развитие",
        "Социално въздействие",
        "Контакт",
    ],
    language_label: "Език",

    contact_title: "Нека поговорим за проекта",
    contact_subtitle: "Попълнете формуляра и ще уговорим среща на живо или онлайн.",
    contact_form_label: "Формуляр за контакт",

    footer_note: "Sports Scouting South America · Bulgaria. Интегриран спортен проект за развитие на професионалния футбол.",
    privacy_title: "Политика за поверителност",
    terms_title: "Общи условия",

    not_found_title: "Страницата не е намерена",
    not_found_body: "Страницата, която търсите, не съществува или е преместена.",
    back_home: "Към началото",
};
