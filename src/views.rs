use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use crate::mappers::profile_card_mapper::{self, ProfileCard};
use crate::models::query_state::QueryState;
use crate::models::theme::ThemeState;

/// Colors for every themed element. Layout lives in `static/widget.css` and never changes with the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub page_bg: &'static str,
    pub page_text: &'static str,
    pub panel_bg: &'static str,
    pub stats_bg: &'static str,
    pub button_bg: &'static str,
    pub button_text: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
}

const DARK: Palette = Palette {
    page_bg: "#1e40af",
    page_text: "#ffffff",
    panel_bg: "#172554",
    stats_bg: "#1f2937",
    button_bg: "#1e40af",
    button_text: "#ffffff",
    icon: "#2563eb",
    accent: "#eab308",
    error: "#ef4444",
};

const LIGHT: Palette = Palette {
    page_bg: "#ffffff",
    page_text: "#000000",
    panel_bg: "#e5e7eb",
    stats_bg: "#d1d5db",
    button_bg: "#000000",
    button_text: "#ffffff",
    icon: "#000000",
    accent: "#eab308",
    error: "#ef4444",
};

pub fn palette(theme: ThemeState) -> Palette {
    match theme {
        ThemeState::Light => LIGHT,
        ThemeState::Dark => DARK,
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateViewModel {
    pub title: String,
    pub body: String,
    pub theme: ThemeState,
    pub palette: Palette,
    pub refresh: bool,
}

#[derive(Debug, Serialize)]
struct WidgetViewModel {
    palette: Palette,
    toggle_label: &'static str,
    loading: bool,
    error: Option<String>,
    card: Option<ProfileCard>,
}

impl WidgetViewModel {
    fn new(query: &QueryState, theme: ThemeState, date_format: &str) -> Self {
        let (error, card) = match query {
            QueryState::Failure { message, .. } => (Some(message.clone()), None),
            QueryState::Success { profile, .. } => {
                (None, Some(profile_card_mapper::to_card(profile, date_format)))
            }
            QueryState::Idle | QueryState::Loading { .. } => (None, None),
        };
        WidgetViewModel {
            palette: palette(theme),
            toggle_label: theme.toggle_label(),
            loading: query.is_loading(),
            error,
            card,
        }
    }
}

/// Builds the template registry used by every page.
pub fn registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_template_string("template", include_str!("templates/template.hbs"))?;
    handlebars.register_template_string("index", include_str!("templates/index.hbs"))?;
    handlebars.register_template_string("errors/500", include_str!("templates/errors/500.hbs"))?;
    Ok(handlebars)
}

/// Renders the whole widget page for one `(query, theme)` snapshot.
///
/// Output depends on nothing but the arguments, so an unchanged snapshot renders byte-identical HTML.
/// While a lookup is in flight the page asks the browser to reload itself.
pub fn render_widget(
    registry: &Handlebars<'static>,
    query: &QueryState,
    theme: ThemeState,
    date_format: &str,
) -> Result<String, RenderError> {
    let body = registry.render("index", &WidgetViewModel::new(query, theme, date_format))?;
    registry.render("template", &TemplateViewModel {
        title: "DevFinder".into(),
        body,
        theme,
        palette: palette(theme),
        refresh: query.is_loading(),
    })
}

pub fn render_error_page(registry: &Handlebars<'static>, theme: ThemeState) -> Result<String, RenderError> {
    let body = registry.render("errors/500", &())?;
    registry.render("template", &TemplateViewModel {
        title: "Error".into(),
        body,
        theme,
        palette: palette(theme),
        refresh: false,
    })
}
