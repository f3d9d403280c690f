use super::*;

/// Scripted rng cycling through the given values.
fn scripted(values: &'static [f64]) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

#[test]
fn random_fill_covers_every_cell() {
    let grid = TerritoryGrid::random(scripted(&[0.0, 0.2, 0.4, 0.6, 0.8, 0.999]));
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert!(grid.cell(col, row).is_some());
        }
    }
    assert!(grid.cell(GRID_SIZE, 0).is_none());
    assert!(grid.cell(0, GRID_SIZE).is_none());
}

#[test]
fn random_maps_unit_interval_onto_palette() {
    // First six cells follow the scripted sequence exactly.
    let grid = TerritoryGrid::random(scripted(&[0.0, 0.2, 0.4, 0.6, 0.8, 0.999]));
    let first_row: Vec<u8> = (0..6).filter_map(|col| grid.cell(col, 0)).collect();
    assert_eq!(first_row, [0, 1, 2, 3, 4, 5]);
}

#[test]
fn rng_value_of_one_stays_in_palette() {
    let grid = TerritoryGrid::random(scripted(&[1.0]));
    assert_eq!(grid.cell(0, 0), Some(5));
}

#[test]
fn claim_paints_a_three_by_three_block() {
    let mut grid = TerritoryGrid::random(scripted(&[0.0]));
    grid.claim(10, 10, 3);
    for row in 9..=11 {
        for col in 9..=11 {
            assert_eq!(grid.cell(col, row), Some(3));
        }
    }
    assert_eq!(grid.cell(8, 10), Some(0));
    assert_eq!(grid.cell(12, 10), Some(0));
}

#[test]
fn claim_clips_at_the_corner() {
    let mut grid = TerritoryGrid::random(scripted(&[0.0]));
    grid.claim(0, 0, 2);
    assert_eq!(grid.cell(0, 0), Some(2));
    assert_eq!(grid.cell(1, 0), Some(2));
    assert_eq!(grid.cell(0, 1), Some(2));
    assert_eq!(grid.cell(1, 1), Some(2));
    assert_eq!(grid.cell(2, 0), Some(0));
    assert_eq!(grid.cell(2, 2), Some(0));
}

#[test]
fn claim_outside_the_grid_is_ignored() {
    let mut grid = TerritoryGrid::random(scripted(&[0.0]));
    let before = grid.clone();
    grid.claim(-1, 5, 1);
    grid.claim(5, 30, 1);
    grid.claim(30, 30, 1);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            assert_eq!(grid.cell(col, row), before.cell(col, row));
        }
    }
}

#[test]
fn colors_resolve_through_the_palette() {
    let mut grid = TerritoryGrid::random(scripted(&[0.0]));
    assert_eq!(grid.color_at(0, 0), "#ef4444");
    grid.claim(5, 5, 4);
    assert_eq!(grid.color_at(5, 5), "#a855f7");
}

#[test]
fn stray_indices_fall_back_to_dark_fill() {
    let mut grid = TerritoryGrid::random(scripted(&[0.0]));
    grid.claim(5, 5, 200);
    assert_eq!(grid.color_at(5, 5), "#333");
}

// =========================================================================
// Pointer mapping
// =========================================================================

#[test]
fn cell_at_maps_offsets_to_columns() {
    assert_eq!(cell_at(0.0, 240.0), 0);
    assert_eq!(cell_at(8.0, 240.0), 1);
    assert_eq!(cell_at(239.9, 240.0), 29);
}

#[test]
fn cell_at_far_edge_lands_out_of_range() {
    // A click exactly on the right edge maps to column 30, which claim
    // rejects.
    assert_eq!(cell_at(240.0, 240.0), 30);
}
