use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::allocation::{Pensum, WeeklyAllocation};
use crate::input::toml_input::About;
use crate::report::ExportOptions;
use crate::session::Settings;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    latex_mk_path: Option<PathBuf>,
    font: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Allocation {
    #[serde(default)]
    pensum: Pensum,
    #[serde(default)]
    weekly: WeeklyAllocation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Global {
    about: About,
    #[serde(default)]
    allocation: Allocation,
    config: Option<Config>,
}

impl Global {
    #[must_use]
    pub fn about(&self) -> &About {
        &self.about
    }

    #[must_use]
    pub fn pensum(&self) -> Pensum {
        self.allocation.pensum
    }

    #[must_use]
    pub fn weekly(&self) -> &WeeklyAllocation {
        &self.allocation.weekly
    }

    #[must_use]
    pub fn latex_mk_path(&self) -> Option<&Path> {
        self.config
            .as_ref()
            .and_then(|config| config.latex_mk_path.as_deref())
    }

    #[must_use]
    pub fn font(&self) -> Option<&str> {
        self.config
            .as_ref()
            .and_then(|config| config.font.as_deref())
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings::new(self.about.name(), self.pensum(), *self.weekly())
    }

    #[must_use]
    pub fn export_options(&self) -> ExportOptions {
        let mut options = ExportOptions::default();

        if let Some(path) = self.latex_mk_path() {
            options.set_latex_mk_path(path);
        }

        if let Some(font) = self.font() {
            options.set_font(font);
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::allocation::Hours;
    use crate::report::DEFAULT_FONT;
    use crate::time::WeekDay;

    #[test]
    fn test_parse_full() {
        let global: Global = toml::from_str(concat!(
            "[about]\n",
            "name = \"Jan Kowalski\"\n",
            "\n",
            "[allocation]\n",
            "pensum = 4.2\n",
            "\n",
            "[allocation.weekly]\n",
            "monday = 4.5\n",
            "thursday = 3\n",
            "\n",
            "[config]\n",
            "latex_mk_path = \"/opt/tex/latexmk\"\n",
            "font = \"Noto Sans\"\n",
        ))
        .expect("toml should be valid");

        assert_eq!(global.about().name(), "Jan Kowalski");
        assert_eq!(global.pensum().hours(), Hours::new(dec!(4.2)).unwrap());
        assert_eq!(
            global.weekly().hours(WeekDay::Monday),
            Hours::new(dec!(4.5)).unwrap()
        );
        assert_eq!(
            global.weekly().hours(WeekDay::Thursday),
            Hours::new(dec!(3)).unwrap()
        );
        assert_eq!(global.weekly().hours(WeekDay::Friday), Hours::ZERO);

        let options = global.export_options();
        assert_eq!(options.latex_mk_path(), Some(Path::new("/opt/tex/latexmk")));
        assert_eq!(options.font(), "Noto Sans");

        let settings = global.settings();
        assert_eq!(settings.teacher_name(), "Jan Kowalski");
        assert_eq!(settings.pensum(), global.pensum());
    }

    #[test]
    fn test_parse_defaults() {
        let global: Global =
            toml::from_str("[about]\nname = \"Anna\"\n").expect("toml should be valid");

        assert_eq!(global.pensum(), Pensum::default());
        assert_eq!(global.weekly(), &WeeklyAllocation::default());
        assert_eq!(global.export_options().font(), DEFAULT_FONT);
        assert_eq!(global.export_options().latex_mk_path(), None);
    }

    #[test]
    fn test_invalid_pensum() {
        let result = toml::from_str::<Global>(concat!(
            "[about]\n",
            "name = \"Anna\"\n",
            "[allocation]\n",
            "pensum = 3.7\n",
        ));

        assert!(result.is_err());
    }

    #[test]
    fn test_negative_weekly_hours() {
        let result = toml::from_str::<Global>(concat!(
            "[about]\n",
            "name = \"Anna\"\n",
            "[allocation.weekly]\n",
            "monday = -1\n",
        ));

        assert!(result.is_err());
    }
}
