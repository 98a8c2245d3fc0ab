//! Infinite carousel state
//!
//! The slider holds the real cards padded on both sides with `clone_count`
//! clones. Positions are "virtual": the card shown at position `p` is the
//! real card `(p - clone_count) mod N`, so clones never need their own
//! bookkeeping. When an animated slide lands inside the padding the index is
//! snapped back to the matching real position, which looks identical.

use serde::{Deserialize, Serialize};

use crate::config::CLONE_COUNT;
use crate::models::{CardItem, CardStyle};

use super::layout::{centered_offset, CardMetrics, CarouselFrame, Transition};

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Index jump applied after a slide finished inside the clone padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapCorrection {
    pub from: usize,
    pub to: usize,
}

/// State of one carousel instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselState {
    current_index: usize,
    total_real_cards: usize,
    clone_count: usize,
    cards: Vec<CardItem>,
    is_transitioning: bool,
}

impl CarouselState {
    /// Build the state for `total_real_cards` cards with the default padding.
    /// Returns `None` for an empty carousel.
    pub fn new(total_real_cards: usize) -> Option<Self> {
        Self::with_clone_count(total_real_cards, CLONE_COUNT)
    }

    /// Build the state with `clone_count` cards of padding per side.
    /// Returns `None` for an empty carousel or zero padding, which would
    /// leave no clone to land on when wrapping.
    pub fn with_clone_count(total_real_cards: usize, clone_count: usize) -> Option<Self> {
        if total_real_cards == 0 || clone_count == 0 {
            return None;
        }
        let n = total_real_cards;

        // Leading clones mirror the tail, trailing clones mirror the head.
        // With fewer real cards than clones the slots cycle modulo N.
        let mut cards = Vec::with_capacity(n + 2 * clone_count);
        cards.extend((0..clone_count).map(|k| CardItem::clone_of((n * clone_count + k - clone_count) % n)));
        cards.extend((0..n).map(CardItem::real));
        cards.extend((0..clone_count).map(|k| CardItem::clone_of(k % n)));

        Some(Self {
            current_index: clone_count,
            total_real_cards: n,
            clone_count,
            cards,
            is_transitioning: false,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_real_cards(&self) -> usize {
        self.total_real_cards
    }

    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    pub fn cards(&self) -> &[CardItem] {
        &self.cards
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Real card shown at a slider position
    pub fn real_index_at(&self, position: usize) -> usize {
        let n = self.total_real_cards;
        (position + n * self.clone_count - self.clone_count) % n
    }

    /// Real card currently centered
    pub fn active_real_index(&self) -> usize {
        self.real_index_at(self.current_index)
    }

    pub fn style_for(&self, card: &CardItem) -> CardStyle {
        if card.real_index == self.active_real_index() {
            CardStyle::Active
        } else {
            CardStyle::Inactive
        }
    }

    /// Move one card in `direction` and start the slide.
    ///
    /// Dropped (returns false) while a previous slide is still running.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if self.is_transitioning {
            return false;
        }
        let next = match direction {
            Direction::Left => self.current_index.checked_sub(1),
            Direction::Right => Some(self.current_index + 1),
        };
        match next {
            Some(index) => {
                self.current_index = index;
                self.is_transitioning = true;
                true
            }
            None => false,
        }
    }

    /// Called when the slide animation ends. Releases the navigation guard and
    /// snaps the index out of the clone padding if needed.
    pub fn finish_transition(&mut self) -> Option<WrapCorrection> {
        self.is_transitioning = false;

        let from = self.current_index;
        let n = self.total_real_cards;
        let to = if from >= n + self.clone_count {
            self.clone_count
        } else if from < self.clone_count {
            n + self.clone_count - 1
        } else {
            return None;
        };

        self.current_index = to;
        Some(WrapCorrection { from, to })
    }

    /// Compute the slider offset and per-card styles for the current index
    pub fn frame(&self, container_width: f64, metrics: CardMetrics, transition: Transition) -> CarouselFrame {
        CarouselFrame {
            translate_x: centered_offset(container_width, metrics, self.current_index),
            transition,
            card_styles: self.cards.iter().map(|card| self.style_for(card)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real_indices(state: &CarouselState) -> Vec<usize> {
        state.cards().iter().map(|c| c.real_index).collect()
    }

    #[test]
    fn test_empty_carousel_has_no_state() {
        assert!(CarouselState::new(0).is_none());
    }

    #[test]
    fn test_zero_padding_is_rejected() {
        assert!(CarouselState::with_clone_count(5, 0).is_none());
        assert!(CarouselState::with_clone_count(5, 1).is_some());
    }

    #[test]
    fn test_clone_layout_for_five_cards() {
        let state = CarouselState::new(5).unwrap();
        assert_eq!(state.cards().len(), 11);
        assert_eq!(real_indices(&state), vec![2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2]);
        assert_eq!(state.current_index(), 3);
        assert_eq!(state.active_real_index(), 0);
        assert!(state.cards()[..3].iter().all(|c| c.is_clone));
        assert!(state.cards()[3..8].iter().all(|c| !c.is_clone));
        assert!(state.cards()[8..].iter().all(|c| c.is_clone));
    }

    #[test]
    fn test_clones_cycle_when_fewer_cards_than_padding() {
        let state = CarouselState::new(2).unwrap();
        assert_eq!(state.cards().len(), 2 + 2 * CLONE_COUNT);
        assert_eq!(real_indices(&state), vec![1, 0, 1, 0, 1, 0, 1, 0]);
        // Every slot agrees with the modular mapping
        for (pos, card) in state.cards().iter().enumerate() {
            assert_eq!(state.real_index_at(pos), card.real_index);
        }
    }

    #[test]
    fn test_navigation_blocked_during_transition() {
        let mut state = CarouselState::new(5).unwrap();
        assert!(state.navigate(Direction::Right));
        assert!(!state.navigate(Direction::Right));
        assert!(!state.navigate(Direction::Left));
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn test_no_correction_inside_real_range() {
        let mut state = CarouselState::new(5).unwrap();
        state.navigate(Direction::Right);
        assert_eq!(state.finish_transition(), None);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn test_left_wrap_lands_on_last_real_card() {
        let mut state = CarouselState::new(5).unwrap();
        state.navigate(Direction::Left);
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.active_real_index(), 4);
        assert_eq!(state.finish_transition(), Some(WrapCorrection { from: 2, to: 7 }));
        assert_eq!(state.active_real_index(), 4);
    }

    #[test]
    fn test_frame_marks_only_matching_cards_active() {
        let state = CarouselState::new(5).unwrap();
        let frame = state.frame(1000.0, CardMetrics::new(300.0, 16.0), Transition::Instant);
        assert_eq!(frame.card_styles.len(), 11);
        // Real card 0 appears at position 3 and as a trailing clone at 8
        let active: Vec<usize> = frame
            .card_styles
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == CardStyle::Active)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![3, 8]);
    }
}
