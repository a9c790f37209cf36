use super::*;

/// Builds the day grid for `year` with every cell `day_width` pixels wide.
///
/// Cells accumulate a running left offset from zero, one per calendar day,
/// so the grid carries 365 or 366 cells depending on leap status. A month
/// header is emitted at the offset of each month's first day. Years the
/// calendar cannot represent yield an empty grid; `TimelineChart::mount`
/// rejects them before any layout runs.
pub fn build_grid(year: i32, day_width: f32, today: NaiveDate) -> YearGrid {
    let mut months = Vec::with_capacity(12);
    let mut days = Vec::with_capacity(366);
    let mut offset = 0.0_f32;

    let mut date = NaiveDate::from_ymd_opt(year, 1, 1);
    while let Some(current) = date {
        if current.year() != year {
            break;
        }
        if current.day() == 1 {
            months.push(MonthHeader {
                year,
                month: current.month(),
                left: offset,
            });
        }
        days.push(DayCell {
            date: current,
            left: offset,
            visible: true,
            is_today: current == today,
        });
        offset += day_width;
        date = current.succ_opt();
    }

    YearGrid {
        year,
        day_width,
        months,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_away() -> NaiveDate {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
    }

    #[test]
    fn common_year_has_365_cells() {
        let grid = build_grid(2023, 30.0, far_away());
        assert_eq!(grid.days.len(), 365);
        assert_eq!(grid.months.len(), 12);
    }

    #[test]
    fn leap_year_has_366_cells() {
        let grid = build_grid(2024, 30.0, far_away());
        assert_eq!(grid.days.len(), 366);
    }

    #[test]
    fn century_leap_rules_hold() {
        assert_eq!(build_grid(1900, 30.0, far_away()).days.len(), 365);
        assert_eq!(build_grid(2000, 30.0, far_away()).days.len(), 366);
    }

    #[test]
    fn unrepresentable_years_build_empty_grids() {
        let grid = build_grid(1_000_000, 30.0, far_away());
        assert!(grid.days.is_empty());
        assert!(grid.months.is_empty());
        let negative = build_grid(-1_000_000, 30.0, far_away());
        assert!(negative.days.is_empty());
    }

    #[test]
    fn cells_are_evenly_spaced() {
        let grid = build_grid(2026, 17.5, far_away());
        for pair in grid.days.windows(2) {
            assert!((pair[1].left - pair[0].left - 17.5).abs() < 1e-3);
        }
        assert_eq!(grid.days[0].left, 0.0);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let first = build_grid(2026, 30.0, far_away());
        let second = build_grid(2026, 30.0, far_away());
        assert_eq!(first.days, second.days);
        assert_eq!(first.months, second.months);
    }

    #[test]
    fn month_headers_sit_on_their_first_day() {
        let grid = build_grid(2026, 30.0, far_away());
        for header in &grid.months {
            let first = NaiveDate::from_ymd_opt(header.year, header.month, 1).unwrap();
            let cell = grid.cell_at(first).unwrap();
            assert_eq!(header.left, cell.left);
        }
        // February follows 31 January days.
        assert_eq!(grid.months[1].left, 31.0 * 30.0);
    }

    #[test]
    fn leap_year_shifts_march_by_a_cell() {
        let common = build_grid(2023, 30.0, far_away());
        let leap = build_grid(2024, 30.0, far_away());
        assert_eq!(leap.months[2].left - common.months[2].left, 30.0);
    }

    #[test]
    fn today_is_flagged_when_inside_the_year() {
        let today = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let grid = build_grid(2026, 30.0, today);
        let flagged: Vec<_> = grid.days.iter().filter(|cell| cell.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date, today);
    }

    #[test]
    fn today_outside_the_year_flags_nothing() {
        let grid = build_grid(2026, 30.0, far_away());
        assert!(grid.days.iter().all(|cell| !cell.is_today));
    }
}
