#![allow(missing_docs)]
//! Host-level tests for the glyph table and the matrix wiring.

use digit_matrix::constants::LED_COUNT;
use digit_matrix::digit::Digit;
use digit_matrix::glyph::is_lit;
use digit_matrix::layout::{LedLayout, RASTER_BY_PHYSICAL, raster_for_physical};

fn digit(value: u8) -> Digit {
    Digit::new(value).expect("test digits are in range")
}

fn cells(value: u8) -> Vec<bool> {
    (0..LED_COUNT).map(|raster| is_lit(digit(value), raster)).collect()
}

#[test]
fn matrix_layout_matches_board_wiring() {
    assert_eq!(
        RASTER_BY_PHYSICAL,
        [
            20, 21, 22, 23, 24, //
            19, 18, 17, 16, 15, //
            10, 11, 12, 13, 14, //
            9, 8, 7, 6, 5, //
            0, 1, 2, 3, 4,
        ]
    );
}

#[test]
fn matrix_layout_is_a_bijection() {
    let mut seen = [false; LED_COUNT];
    for physical in 0..LED_COUNT {
        let raster = raster_for_physical(physical);
        assert!(raster < LED_COUNT);
        assert!(!seen[raster], "raster {raster} mapped twice");
        seen[raster] = true;
    }
    assert!(seen.iter().all(|&hit| hit));
}

#[test]
fn serpentine_and_flip_small_grid() {
    const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert_eq!(SNAKE.raster_by_index(), [0, 1, 2, 5, 4, 3]);
    assert_eq!(SNAKE.flip_v().raster_by_index(), [3, 4, 5, 2, 1, 0]);
    assert!(SNAKE.flip_v().flip_v().equals(&SNAKE));
    assert!(!SNAKE.flip_v().equals(&SNAKE));
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn raster_for_physical_rejects_positions_past_the_strip() {
    let _ = raster_for_physical(LED_COUNT);
}

#[test]
fn glyph_zero_is_a_box() {
    let zero = cells(0);
    for (raster, &lit) in zero.iter().enumerate() {
        let (row, column) = (raster / 5, raster % 5);
        let on_border = row == 0 || row == 4 || column == 0 || column == 4;
        assert_eq!(lit, on_border, "raster {raster}");
    }
}

#[test]
fn glyph_rows_match_reference_patterns() {
    #[rustfmt::skip]
    let seven = [
        1, 1, 1, 1, 1,
        0, 0, 0, 0, 1,
        0, 0, 0, 1, 0,
        0, 0, 1, 0, 0,
        0, 1, 0, 0, 0,
    ];
    #[rustfmt::skip]
    let one = [
        0, 0, 1, 0, 0,
        0, 1, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
    ];
    for raster in 0..LED_COUNT {
        assert_eq!(is_lit(digit(7), raster), seven[raster] == 1);
        assert_eq!(is_lit(digit(1), raster), one[raster] == 1);
    }
}

#[test]
fn every_glyph_is_distinct_and_nonempty() {
    let all: Vec<Vec<bool>> = (0..10).map(cells).collect();
    for (index, first) in all.iter().enumerate() {
        assert!(first.iter().any(|&lit| lit), "glyph {index} is empty");
        for second in all.iter().skip(index + 1) {
            assert_ne!(first, second);
        }
    }
}

#[test]
fn raster_past_the_end_is_unlit() {
    assert!(!is_lit(digit(8), LED_COUNT));
    assert!(!is_lit(digit(8), usize::MAX));
}
