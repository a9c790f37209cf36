use super::*;

/// Thins out day labels when cells get too narrow to read.
///
/// Below the configured width threshold only every Nth cell keeps its
/// label; at or above it every cell stays visible. The pass runs on the
/// freshly built grid after every rebuild, so hidden cells never leak
/// across zoom levels.
pub fn apply_density(cells: Vec<DayCell>, day_width: f32, config: &TimelineConfig) -> Vec<DayCell> {
    let crowded = day_width < config.density_threshold;
    let step = config.density_step.max(1);
    cells
        .into_iter()
        .enumerate()
        .map(|(index, mut cell)| {
            cell.visible = !crowded || index % step == 0;
            cell
        })
        .collect()
}
