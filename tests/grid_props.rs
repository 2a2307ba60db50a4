use proptest::prelude::*;
use still_life::Cell;
use still_life::Grid;
use still_life::grid::NEIGHBOR_OFFSETS;

/// Any grid from 1x1 up to 12x12
fn any_grid() -> impl Strategy<Value = Grid> {
    (1usize..=12, 1usize..=12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |alive| {
            let mut grid = Grid::new(rows, cols).unwrap();

            for (i, a) in alive.into_iter().enumerate() {
                grid.set(i / cols, i % cols, Cell::from(a));
            }

            grid
        })
    })
}

/// A grid together with one of its positions
fn grid_and_position() -> impl Strategy<Value = (Grid, usize, usize)> {
    any_grid().prop_flat_map(|grid| {
        let (rows, cols) = (grid.rows(), grid.cols());
        (Just(grid), 0..rows, 0..cols)
    })
}

/// Count neighbors the long way, by scanning the whole board
fn brute_force_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut n = 0;

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let adjacent = r.abs_diff(row) <= 1 && c.abs_diff(col) <= 1;

            if adjacent && (r, c) != (row, col) && grid[(r, c)].is_alive() {
                n += 1;
            }
        }
    }

    n
}

fn in_bounds_offsets(grid: &Grid, row: usize, col: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| {
            let r = row.checked_add_signed(dr);
            let c = col.checked_add_signed(dc);

            matches!((r, c), (Some(r), Some(c)) if r < grid.rows() && c < grid.cols())
        })
        .count() as u8
}

proptest! {
    #[test]
    fn neighbor_count_stays_on_the_board((grid, row, col) in grid_and_position()) {
        let n = grid.live_neighbors(row, col);

        prop_assert!(n <= 8);
        prop_assert!(n <= in_bounds_offsets(&grid, row, col));
        prop_assert_eq!(n, brute_force_neighbors(&grid, row, col));
    }

    #[test]
    fn next_generation_keeps_dimensions(grid in any_grid()) {
        let next = grid.next_generation();

        prop_assert_eq!((next.rows(), next.cols()), (grid.rows(), grid.cols()));
    }

    #[test]
    fn next_generation_is_deterministic(grid in any_grid()) {
        prop_assert_eq!(grid.next_generation(), grid.clone().next_generation());
    }

    #[test]
    fn still_lifes_stay_still(grid in any_grid()) {
        let next = grid.next_generation();

        if next == grid {
            prop_assert_eq!(next.next_generation(), grid);
        }
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(a in any_grid(), b in any_grid()) {
        prop_assert!(a.same_generation(&a));
        prop_assert_eq!(a.same_generation(&b), b.same_generation(&a));
    }

    #[test]
    fn display_parses_back(grid in any_grid()) {
        prop_assert_eq!(grid.to_string().parse::<Grid>().unwrap(), grid);
    }

    #[test]
    fn corners_see_at_most_three_neighbors(grid in any_grid()) {
        let (r, c) = (grid.rows() - 1, grid.cols() - 1);

        for (row, col) in [(0, 0), (0, c), (r, 0), (r, c)] {
            prop_assert!(grid.live_neighbors(row, col) <= 3);
        }
    }
}
