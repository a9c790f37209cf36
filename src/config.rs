use crate::theme::Theme;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry and interaction settings for the year timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineConfig {
    pub initial_day_width: f32,
    pub row_height: f32,
    pub month_row_height: f32,
    pub day_row_height: f32,
    /// Below this day width only every `density_step`th day label stays
    /// visible.
    pub density_threshold: f32,
    pub density_step: usize,
    pub min_day_width: f32,
    pub max_day_width: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
    /// Overrides the system clock, for reproducible output.
    pub today: Option<NaiveDate>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            initial_day_width: 30.0,
            row_height: 30.0,
            month_row_height: 28.0,
            day_row_height: 22.0,
            density_threshold: 25.0,
            density_step: 8,
            min_day_width: 4.0,
            max_day_width: 200.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            today: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub timeline: TimelineConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::light();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            timeline: TimelineConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    background: Option<String>,
    header_background: Option<String>,
    grid_line_color: Option<String>,
    month_text_color: Option<String>,
    day_text_color: Option<String>,
    today_color: Option<String>,
    bar_fill: Option<String>,
    bar_border_color: Option<String>,
    bar_text_color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimelineConfigFile {
    initial_day_width: Option<f32>,
    row_height: Option<f32>,
    month_row_height: Option<f32>,
    day_row_height: Option<f32>,
    density_threshold: Option<f32>,
    density_step: Option<usize>,
    min_day_width: Option<f32>,
    max_day_width: Option<f32>,
    zoom_in_factor: Option<f32>,
    zoom_out_factor: Option<f32>,
    today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    timeline: Option<TimelineConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "dark" {
            config.theme = Theme::dark();
        } else if theme_name == "light" || theme_name == "default" {
            config.theme = Theme::light();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.header_background {
            config.theme.header_background = v;
        }
        if let Some(v) = vars.grid_line_color {
            config.theme.grid_line_color = v;
        }
        if let Some(v) = vars.month_text_color {
            config.theme.month_text_color = v;
        }
        if let Some(v) = vars.day_text_color {
            config.theme.day_text_color = v;
        }
        if let Some(v) = vars.today_color {
            config.theme.today_color = v;
        }
        if let Some(v) = vars.bar_fill {
            config.theme.bar_fill = v;
        }
        if let Some(v) = vars.bar_border_color {
            config.theme.bar_border_color = v;
        }
        if let Some(v) = vars.bar_text_color {
            config.theme.bar_text_color = v;
        }
    }

    if let Some(timeline) = parsed.timeline {
        if let Some(v) = timeline.initial_day_width {
            config.timeline.initial_day_width = v;
        }
        if let Some(v) = timeline.row_height {
            config.timeline.row_height = v;
        }
        if let Some(v) = timeline.month_row_height {
            config.timeline.month_row_height = v;
        }
        if let Some(v) = timeline.day_row_height {
            config.timeline.day_row_height = v;
        }
        if let Some(v) = timeline.density_threshold {
            config.timeline.density_threshold = v;
        }
        if let Some(v) = timeline.density_step {
            config.timeline.density_step = v;
        }
        if let Some(v) = timeline.min_day_width {
            config.timeline.min_day_width = v;
        }
        if let Some(v) = timeline.max_day_width {
            config.timeline.max_day_width = v;
        }
        if let Some(v) = timeline.zoom_in_factor {
            config.timeline.zoom_in_factor = v;
        }
        if let Some(v) = timeline.zoom_out_factor {
            config.timeline.zoom_out_factor = v;
        }
        if timeline.today.is_some() {
            config.timeline.today = timeline.today;
        }
    }

    config.render.background = config.theme.background.clone();

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).expect("write config fixture");
        path
    }

    #[test]
    fn no_path_yields_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.timeline.initial_day_width, 30.0);
        assert_eq!(config.timeline.density_threshold, 25.0);
        assert_eq!(config.timeline.density_step, 8);
        assert_eq!(config.render.background, config.theme.background);
    }

    #[test]
    fn file_values_overlay_defaults() {
        let path = write_temp_config(
            "timeline_config_overlay.json",
            r#"{
                "theme": "dark",
                "timeline": {
                    "initialDayWidth": 12.5,
                    "today": "2026-03-01"
                },
                "render": { "width": 900 }
            }"#,
        );
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.timeline.initial_day_width, 12.5);
        assert_eq!(
            config.timeline.today,
            NaiveDate::from_ymd_opt(2026, 3, 1)
        );
        assert_eq!(config.render.width, 900.0);
        // Untouched settings keep their defaults.
        assert_eq!(config.timeline.row_height, 30.0);
        // Background follows the selected theme unless overridden.
        assert_eq!(config.render.background, Theme::dark().background);
    }

    #[test]
    fn theme_variables_win_over_the_named_theme() {
        // Hex colors put `"#` inside the literal, which needs the wider
        // raw-string delimiter.
        let path = write_temp_config(
            "timeline_config_vars.json",
            r##"{
                "theme": "light",
                "themeVariables": {
                    "barFill": "#123456",
                    "background": "#0B1020",
                    "fontSize": 14
                }
            }"##,
        );
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.theme.bar_fill, "#123456");
        assert_eq!(config.theme.background, "#0B1020");
        assert_eq!(config.theme.font_size, 14.0);
        // The render background tracks the overridden theme background.
        assert_eq!(config.render.background, "#0B1020");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let path = write_temp_config("timeline_config_bad.json", "{ nope");
        assert!(load_config(Some(&path)).is_err());
    }
}
