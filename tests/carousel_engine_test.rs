// Infinite carousel behaviour: clone padding, navigation and wrap-around

use student_page_wasm::carousel::{CardMetrics, Transition, WrapCorrection};
use student_page_wasm::{CardStyle, CarouselState, Direction, CLONE_COUNT};

/// Navigate and let the slide finish, as the browser would
fn slide(state: &mut CarouselState, direction: Direction) -> Option<WrapCorrection> {
    assert!(state.navigate(direction), "navigation should be accepted");
    state.finish_transition()
}

#[test]
fn test_initial_state_for_every_size() {
    for n in 1..=12 {
        let state = CarouselState::new(n).unwrap();
        assert_eq!(state.cards().len(), n + 2 * CLONE_COUNT);
        assert_eq!(state.current_index(), CLONE_COUNT);
        assert_eq!(state.active_real_index(), 0);
        assert_eq!(state.cards().iter().filter(|c| !c.is_clone).count(), n);
    }
}

#[test]
fn test_five_cards_example() {
    // N=5, CLONE_COUNT=3: 11 cards, starting centered on real card 0
    let mut state = CarouselState::new(5).unwrap();
    assert_eq!(state.cards().len(), 11);
    assert_eq!(state.current_index(), 3);
    assert_eq!(state.active_real_index(), 0);

    assert_eq!(slide(&mut state, Direction::Right), None);
    assert_eq!(state.current_index(), 4);
    assert_eq!(state.active_real_index(), 1);

    for _ in 0..3 {
        assert_eq!(slide(&mut state, Direction::Right), None);
    }
    assert_eq!(state.current_index(), 7);

    // Fifth slide lands on the trailing clone of card 0 and snaps back
    assert!(state.navigate(Direction::Right));
    assert_eq!(state.current_index(), 8);
    assert_eq!(state.active_real_index(), 0);
    assert_eq!(state.finish_transition(), Some(WrapCorrection { from: 8, to: 3 }));
    assert_eq!(state.current_index(), 3);
    assert_eq!(state.active_real_index(), 0);
}

#[test]
fn test_right_and_left_move_active_card_modulo_n() {
    for n in 1..=7 {
        let mut state = CarouselState::new(n).unwrap();
        for step in 1..=(3 * n) {
            slide(&mut state, Direction::Right);
            assert_eq!(state.active_real_index(), step % n);
        }

        let mut state = CarouselState::new(n).unwrap();
        for step in 1..=(3 * n) {
            slide(&mut state, Direction::Left);
            assert_eq!(state.active_real_index(), (n * 3 - step) % n);
        }
    }
}

#[test]
fn test_wrap_keeps_visual_continuity() {
    let mut state = CarouselState::new(4).unwrap();
    // Walk left into the leading clones
    assert!(state.navigate(Direction::Left));
    let shown_before = state.active_real_index();
    let correction = state.finish_transition().expect("left of the first card wraps");
    assert_eq!(correction.to, 4 + CLONE_COUNT - 1);
    assert_eq!(state.active_real_index(), shown_before);
    assert_eq!(shown_before, 3);
}

#[test]
fn test_clicks_during_transition_are_dropped() {
    let mut state = CarouselState::new(6).unwrap();
    assert!(state.navigate(Direction::Right));
    let index = state.current_index();
    for _ in 0..5 {
        assert!(!state.navigate(Direction::Right));
        assert!(!state.navigate(Direction::Left));
    }
    assert_eq!(state.current_index(), index);
    assert!(state.is_transitioning());

    state.finish_transition();
    assert!(state.navigate(Direction::Left));
}

#[test]
fn test_frame_centers_current_card() {
    let mut state = CarouselState::new(5).unwrap();
    let metrics = CardMetrics::new(300.0, 16.0);

    let frame = state.frame(1200.0, metrics, Transition::Instant);
    assert_eq!(frame.transform_css(), format!("translateX({}px)", 600.0 - 166.0 - 3.0 * 332.0));
    assert_eq!(frame.transition.duration_css(), "0ms");

    state.navigate(Direction::Right);
    let frame = state.frame(1200.0, metrics, Transition::Eased { duration_ms: 600 });
    assert_eq!(frame.translate_x, 600.0 - 166.0 - 4.0 * 332.0);
    assert_eq!(frame.transition.duration_css(), "600ms");
    assert_eq!(frame.card_styles[4], CardStyle::Active);
    assert_eq!(frame.card_styles[3], CardStyle::Inactive);
}
