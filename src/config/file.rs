use serde::Deserialize;

pub const DEFAULT_KEY_COLOR: &str = "rgb(255,182,193)";
pub const DEFAULT_COURSE_COLOR: &str = "rgb(151,194,252)";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub render: RenderSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSection {
    #[serde(default)]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderSection {
    #[serde(default = "default_key_color")]
    pub key_color: String,
    #[serde(default = "default_course_color")]
    pub course_color: String,
    /// "hashed" or "exact"; interpreted by the CLI layer.
    #[serde(default)]
    pub fingerprint: Option<String>,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            key_color: default_key_color(),
            course_color: default_course_color(),
            fingerprint: None,
        }
    }
}

fn default_key_color() -> String {
    DEFAULT_KEY_COLOR.to_string()
}

fn default_course_color() -> String {
    DEFAULT_COURSE_COLOR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_default_colors() {
        let config: Config = toml::from_str("").expect("parse empty config");
        assert_eq!(config.render.key_color, DEFAULT_KEY_COLOR);
        assert_eq!(config.render.course_color, DEFAULT_COURSE_COLOR);
        assert!(config.render.fingerprint.is_none());
        assert!(config.catalog.file.is_none());
    }

    #[test]
    fn render_section_overrides_colors() {
        let config: Config = toml::from_str(
            r#"[render]
key_color = "rgb(1,2,3)"
fingerprint = "exact"
"#,
        )
        .expect("parse config");
        assert_eq!(config.render.key_color, "rgb(1,2,3)");
        assert_eq!(config.render.course_color, DEFAULT_COURSE_COLOR);
        assert_eq!(config.render.fingerprint.as_deref(), Some("exact"));
    }
}
