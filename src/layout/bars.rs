use super::*;

/// Resolves one task against the grid.
///
/// The bar spans from the left edge of the start day's cell to the left
/// edge of the cell one day past the end date, so the end day itself is
/// covered in full. Either lookup failing means the task does not fit the
/// charted year and the bar is clipped rather than guessed at.
pub fn map_bar(task: &Task, grid: &YearGrid) -> BarPlacement {
    let Some(start_cell) = grid.cell_at(task.start) else {
        return BarPlacement::Clipped(ClipReason::StartOutsideYear);
    };
    let end_cell = task
        .end
        .succ_opt()
        .and_then(|after_end| grid.cell_at(after_end));
    let Some(end_cell) = end_cell else {
        return BarPlacement::Clipped(ClipReason::EndOutsideYear);
    };
    BarPlacement::Placed(BarGeometry {
        left: start_cell.left,
        width: end_cell.left - start_cell.left,
    })
}

/// Maps every task, logging a diagnostic for each one the year cannot hold.
pub fn map_bars(tasks: &[Task], grid: &YearGrid) -> Vec<BarPlacement> {
    tasks
        .iter()
        .map(|task| {
            let placement = map_bar(task, grid);
            if let BarPlacement::Clipped(reason) = placement {
                log::warn!(
                    "skipping task {:?} ({} to {}): {} ({})",
                    task.name,
                    task.start,
                    task.end,
                    reason,
                    grid.year
                );
            }
            placement
        })
        .collect()
}
