use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
    pub header_background: String,
    pub grid_line_color: String,
    pub month_text_color: String,
    pub day_text_color: String,
    pub today_color: String,
    pub bar_fill: String,
    pub bar_border_color: String,
    pub bar_text_color: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            background: "#FFFFFF".to_string(),
            header_background: "#F7FAFF".to_string(),
            grid_line_color: "#D7E0F0".to_string(),
            month_text_color: "#1C2430".to_string(),
            day_text_color: "#7A8AA6".to_string(),
            today_color: "#EF4444".to_string(),
            bar_fill: "#6366F1".to_string(),
            bar_border_color: "#4F46E5".to_string(),
            bar_text_color: "#FFFFFF".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            background: "#0F172A".to_string(),
            header_background: "#1E293B".to_string(),
            grid_line_color: "#334155".to_string(),
            month_text_color: "#E2E8F0".to_string(),
            day_text_color: "#94A3B8".to_string(),
            today_color: "#F87171".to_string(),
            bar_fill: "#818CF8".to_string(),
            bar_border_color: "#6366F1".to_string(),
            bar_text_color: "#0F172A".to_string(),
        }
    }
}
