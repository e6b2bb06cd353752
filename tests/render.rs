#![allow(missing_docs)]
//! Host-level tests for turning digits into frames.

use embassy_futures::block_on;
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};

use digit_matrix::constants::LED_COUNT;
use digit_matrix::digit::{Digit, DigitState, Step};
use digit_matrix::glyph::is_lit;
use digit_matrix::layout::raster_for_physical;
use digit_matrix::led_strip::{Frame1d, FrameSink, encode};
use digit_matrix::render::{frame_for, render, run_display_loop};

/// Records the wire words of every frame written to it.
#[derive(Default)]
struct RecordingSink {
    words: Vec<u32>,
}

impl FrameSink<LED_COUNT> for RecordingSink {
    async fn write_frame(&mut self, frame: Frame1d<LED_COUNT>) {
        self.words.extend(frame.words());
    }
}

fn all_digits() -> impl Iterator<Item = Digit> {
    (0..10).map(|value| Digit::new(value).expect("digit"))
}

fn render_words(digit: Option<Digit>) -> Vec<u32> {
    let mut sink = RecordingSink::default();
    block_on(render(digit, &mut sink));
    sink.words
}

#[test]
fn each_digit_lights_exactly_its_glyph() {
    let on = encode(50, 50, 50);
    let off = encode(0, 0, 0);
    for digit in all_digits() {
        let words = render_words(Some(digit));
        assert_eq!(words.len(), LED_COUNT);
        for (physical, &word) in words.iter().enumerate() {
            let expected = if is_lit(digit, raster_for_physical(physical)) {
                on
            } else {
                off
            };
            assert_eq!(word, expected, "digit {digit:?}, physical {physical}");
        }
    }
}

#[test]
fn blank_renders_all_off() {
    let words = render_words(None);
    assert_eq!(words, vec![encode(0, 0, 0); LED_COUNT]);
}

#[test]
fn rendering_twice_gives_identical_frames() {
    let digit = Digit::new(5).expect("digit");
    let mut sink = RecordingSink::default();
    block_on(async {
        render(Some(digit), &mut sink).await;
        render(Some(digit), &mut sink).await;
    });
    let (first, second) = sink.words.split_at(LED_COUNT);
    assert_eq!(first, second);
    assert_eq!(frame_for(Some(digit)), frame_for(Some(digit)));
}

#[test]
fn render_sends_frame_in_physical_order() {
    let digit = Digit::new(1).expect("digit");
    let frame = frame_for(Some(digit));
    assert_eq!(render_words(Some(digit)), frame.words().to_vec());
}

#[test]
fn one_lights_the_expected_leds() {
    // Physical LEDs 0..5 form the bottom row; the foot of the 1 is its middle cell.
    let words = render_words(Some(Digit::new(1).expect("digit")));
    let lit: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|&(_, &word)| word != 0)
        .map(|(physical, _)| physical)
        .collect();
    assert_eq!(lit, vec![2, 7, 12, 17, 18, 22]);
}

#[test]
fn display_loop_refreshes_every_50_ms() {
    let digit_state = DigitState::new();
    for _ in 0..4 {
        digit_state.step(Step::Increment);
    }
    let mut sink = RecordingSink::default();
    // Frames go out at 0, 50 and 100 ms; the next one is due at 150 ms.
    let outcome = block_on(select(
        run_display_loop(&mut sink, &digit_state),
        Timer::after(Duration::from_millis(130)),
    ));
    assert!(matches!(outcome, Either::Second(())));
    assert_eq!(sink.words.len(), 3 * LED_COUNT);
    let expected = frame_for(digit_state.current()).words();
    for frame in sink.words.chunks(LED_COUNT) {
        assert_eq!(frame, &expected[..]);
    }
}

#[test]
fn display_loop_picks_up_a_new_digit_on_the_next_refresh() {
    let digit_state = DigitState::new();
    let mut sink = RecordingSink::default();
    block_on(select(
        run_display_loop(&mut sink, &digit_state),
        async {
            Timer::after(Duration::from_millis(25)).await;
            digit_state.step(Step::Increment);
            Timer::after(Duration::from_millis(50)).await;
        },
    ));
    assert_eq!(sink.words.len(), 2 * LED_COUNT);
    let (blank, zero) = sink.words.split_at(LED_COUNT);
    assert_eq!(blank, &frame_for(None).words()[..]);
    assert_eq!(zero, &frame_for(Some(Digit::new(0).expect("digit"))).words()[..]);
}
