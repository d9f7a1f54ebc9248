use lifeframe::{Grid, PixelBuffer, Pos2, draw, render};
use rand::{SeedableRng, rngs::StdRng};

fn pos(x: i32, y: i32) -> Pos2 {
    Pos2 { x, y }
}

fn assert_cells(grid: &Grid, expected: &[&str]) {
    let rows: Vec<String> = grid
        .view()
        .rows()
        .map(|row| row.iter().map(|&alive| if alive { 'o' } else { '.' }).collect())
        .collect();
    assert_eq!(rows, expected, "generation {}", grid.generation());
}

#[test]
fn isolated_center_dies() {
    let mut grid = Grid::from_alive(3, 3, [pos(1, 1)]);

    grid.advance();

    assert_cells(&grid, &["...", "...", "..."]);
}

#[test]
fn top_row_on_three_by_three() {
    let mut grid = Grid::from_alive(3, 3, [pos(0, 0), pos(1, 0), pos(2, 0)]);

    // corners of the row have 1 neighbor, the middle has 2, and (1,1) sees all 3
    let counts: Vec<u8> = (0..3)
        .flat_map(|y| (0..3).map(move |x| (x, y)))
        .map(|(x, y)| grid.neighbor_count(x, y))
        .collect();
    assert_eq!(counts, vec![1, 2, 1, 2, 3, 2, 0, 0, 0]);

    grid.advance();
    assert_cells(&grid, &[".o.", ".o.", "..."]);

    // a lone pair starves
    grid.advance();
    assert_cells(&grid, &["...", "...", "..."]);
}

#[test]
fn zero_initial_live_count_is_dead() {
    let mut rng = StdRng::seed_from_u64(2024);
    let grid = Grid::create(320, 240, 0, &mut rng);

    assert_eq!(grid.alive_count(), 0);
}

#[test]
fn origin_is_not_a_neighbor_of_far_edges() {
    let (w, h) = (6, 5);
    let grid = Grid::from_alive(w, h, [pos(0, 0)]);

    assert_eq!(grid.neighbor_count(w - 1, h - 1), 0);
    assert_eq!(grid.neighbor_count(0, h - 1), 0);
    assert_eq!(grid.neighbor_count(w - 1, 0), 0);
}

#[test]
fn advance_depends_only_on_current_generation() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut random = Grid::create(40, 30, 300, &mut rng);
    let mut copied = Grid::from_alive(40, 30, random.view().alive().collect::<Vec<_>>());
    assert_eq!(random.view().cells(), copied.view().cells());

    for _ in 0..10 {
        random.advance();
        copied.advance();
        assert_eq!(random.view().cells(), copied.view().cells());
    }
}

#[test]
fn glider_travels_and_dies_at_border() {
    let glider = [pos(1, 0), pos(2, 1), pos(0, 2), pos(1, 2), pos(2, 2)];
    let mut grid = Grid::from_alive(8, 8, glider);

    // every 4 generations the glider moves one cell down and right
    for _ in 0..4 {
        grid.advance();
    }
    let moved: Vec<_> = glider.iter().map(|&p| p + pos(1, 1)).collect();
    assert_eq!(grid.view().alive().collect::<Vec<_>>(), moved);

    // without wraparound it ends as a block in the bottom-right corner
    for _ in 0..40 {
        grid.advance();
    }
    let block = [pos(6, 6), pos(7, 6), pos(6, 7), pos(7, 7)];
    assert_eq!(grid.view().alive().collect::<Vec<_>>(), block);
}

#[test]
fn frame_matches_grid_after_each_generation() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut grid = Grid::create(16, 12, 60, &mut rng);
    let mut pixels = PixelBuffer::for_view(&grid.view());

    for _ in 0..5 {
        grid.advance();
        pixels.redraw(&grid.view());

        for (&alive, pixel) in grid.view().cells().iter().zip(pixels.pixels()) {
            let expected = if alive { render::ALIVE } else { render::DEAD };
            assert_eq!(pixel, expected);
        }
    }
}

#[test]
fn draw_into_caller_buffer() {
    let grid = Grid::from_alive(2, 2, [pos(0, 0)]);
    let mut out = [0x55u8; 16];

    draw(&grid.view(), &mut out);

    assert_eq!(out, [255, 255, 255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
}
