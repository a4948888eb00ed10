use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    Light,
    #[default]
    Dark,
}

impl ThemeState {
    pub fn toggled(self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }

    /// Label of the toggle control, which names the theme it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeState::Light => "Dark",
            ThemeState::Dark => "Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(ThemeState::default(), ThemeState::Dark);
    }

    #[test]
    fn double_toggle_restores_theme() {
        for theme in [ThemeState::Light, ThemeState::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(ThemeState::Dark.toggle_label(), "Light");
        assert_eq!(ThemeState::Light.toggle_label(), "Dark");
    }
}
