#[cfg(feature = "png")]
use crate::config::RenderConfig;
use crate::config::TimelineConfig;
use crate::layout::Scene;
use crate::theme::Theme;
use anyhow::Result;
use chrono::Datelike;
use std::path::Path;

/// Serializes one scene to a standalone SVG document. Labels, gridlines,
/// and bars land at the pixel positions the layout computed; nothing is
/// re-measured here.
pub fn render_svg(scene: &Scene, theme: &Theme, config: &TimelineConfig) -> String {
    let mut svg = String::new();
    let width = scene.width;
    let height = scene.height;
    let header_height = config.month_row_height + config.day_row_height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"{header_height:.2}\" fill=\"{}\"/>",
        theme.header_background
    ));

    for day in &scene.days {
        if !day.is_today {
            continue;
        }
        let x = day.x - scene.day_width / 2.0;
        svg.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"0\" width=\"{:.2}\" height=\"{height:.2}\" fill=\"{}\" opacity=\"0.12\"/>",
            scene.day_width,
            theme.today_color
        ));
    }

    for line in &scene.gridlines {
        svg.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"0\" x2=\"{:.2}\" y2=\"{height:.2}\" stroke=\"{}\" stroke-width=\"1\" stroke-dasharray=\"4 4\"/>",
            line.x,
            line.x,
            theme.grid_line_color
        ));
    }

    let month_baseline = config.month_row_height - 9.0;
    for month in &scene.months {
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{month_baseline:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            month.x,
            theme.font_family,
            theme.font_size,
            theme.month_text_color,
            escape_xml(&month.text)
        ));
    }

    let day_baseline = header_height - 7.0;
    let day_font_size = theme.font_size - 2.0;
    for day in &scene.days {
        if !day.visible {
            continue;
        }
        let fill = if day.is_today {
            theme.today_color.as_str()
        } else {
            theme.day_text_color.as_str()
        };
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{day_baseline:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{day_font_size}\" fill=\"{fill}\" data-ymd=\"{}\">{}</text>",
            day.x,
            theme.font_family,
            day.date,
            day.date.day()
        ));
    }

    for bar in &scene.bars {
        svg.push_str(&format!(
            "<g data-start=\"{}\" data-end-exclusive=\"{}\">",
            bar.start, bar.end_exclusive
        ));
        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" ry=\"4\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
            bar.x,
            bar.y,
            bar.width,
            bar.height,
            theme.bar_fill,
            theme.bar_border_color
        ));
        let text_x = bar.x + 6.0;
        let text_y = bar.y + bar.height / 2.0 + theme.font_size * 0.35;
        svg.push_str(&format!(
            "<text x=\"{text_x:.2}\" y=\"{text_y:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            theme.font_family,
            theme.font_size,
            theme.bar_text_color,
            escape_xml(&bar.name)
        ));
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(
    svg: &str,
    output: &Path,
    render_cfg: &RenderConfig,
    theme: &Theme,
) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = theme
        .font_family
        .split(',')
        .next()
        .unwrap_or("sans-serif")
        .trim()
        .to_string();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(800.0, 600.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
