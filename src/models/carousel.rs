use thiserror::Error;

/// Errors raised by carousel construction and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// A direct jump asked for a slide that does not exist.
    #[error("slide index {index} is out of range for a carousel of {slide_count} slides")]
    IndexOutOfRange { index: usize, slide_count: usize },

    /// The container holds no slide elements.
    #[error("carousel has no slides")]
    NoSlides,

    /// The host page has no slide track for this carousel.
    #[error("carousel has no slide container")]
    MissingContainer,
}

/// A single index transition, `from` and `to` both in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

impl SlideChange {
    /// True when the transition left the index where it was.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Slide-index state of one carousel.
///
/// The index is always inside `0..slide_count`, and `slide_count` is never
/// zero: an empty carousel is refused at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    slide_count: usize,
    current_index: usize,
    autoplay_active: bool,
}

impl CarouselState {
    /// Create the state for `slide_count` slides, positioned on the first.
    pub fn new(slide_count: usize) -> Result<Self, CarouselError> {
        if slide_count == 0 {
            return Err(CarouselError::NoSlides);
        }

        Ok(Self {
            slide_count,
            current_index: 0,
            autoplay_active: false,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay_active
    }

    pub fn set_autoplay_active(&mut self, active: bool) {
        self.autoplay_active = active;
    }

    /// Jump directly to `index`. Out-of-range indexes are rejected and
    /// leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<SlideChange, CarouselError> {
        if index >= self.slide_count {
            return Err(CarouselError::IndexOutOfRange {
                index,
                slide_count: self.slide_count,
            });
        }

        let from = self.current_index;
        self.current_index = index;
        Ok(SlideChange { from, to: index })
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn advance(&mut self) -> SlideChange {
        let from = self.current_index;
        self.current_index = (from + 1) % self.slide_count;
        SlideChange {
            from,
            to: self.current_index,
        }
    }

    /// Step back one slide, wrapping from the first to the last.
    pub fn retreat(&mut self) -> SlideChange {
        let from = self.current_index;
        self.current_index = (from + self.slide_count - 1) % self.slide_count;
        SlideChange {
            from,
            to: self.current_index,
        }
    }

    /// Horizontal offset of the slide track, in percent of one slide.
    pub fn track_offset_percent(&self) -> i64 {
        -(self.current_index as i64) * 100
    }

    /// Inline CSS transform that positions the track on the current slide.
    pub fn track_transform(&self) -> String {
        format!("translateX({}%)", self.track_offset_percent())
    }
}

/// Accessible label for the indicator of slide `index` (zero-based).
pub fn indicator_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_starts_at_first_slide() {
        let state = CarouselState::new(3).unwrap();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.slide_count(), 3);
        assert!(!state.is_autoplay_active());
    }

    #[test]
    fn test_empty_carousel_rejected() {
        assert_eq!(CarouselState::new(0), Err(CarouselError::NoSlides));
    }

    #[test]
    fn test_four_slides_wrap_after_four_advances() {
        let mut state = CarouselState::new(4).unwrap();

        state.advance();
        assert_eq!(state.current_index(), 1);

        for _ in 0..3 {
            state.advance();
        }
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut state = CarouselState::new(4).unwrap();
        let change = state.retreat();
        assert_eq!(change, SlideChange { from: 0, to: 3 });
    }

    #[test]
    fn test_go_to_out_of_range_leaves_state() {
        let mut state = CarouselState::new(3).unwrap();
        state.go_to(2).unwrap();

        let err = state.go_to(3).unwrap_err();
        assert_eq!(
            err,
            CarouselError::IndexOutOfRange {
                index: 3,
                slide_count: 3
            }
        );
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_single_slide_navigation_is_noop() {
        let mut state = CarouselState::new(1).unwrap();
        assert!(state.advance().is_noop());
        assert!(state.retreat().is_noop());
    }

    #[test]
    fn test_track_transform() {
        let mut state = CarouselState::new(5).unwrap();
        assert_eq!(state.track_transform(), "translateX(0%)");
        state.go_to(3).unwrap();
        assert_eq!(state.track_transform(), "translateX(-300%)");
    }

    #[test]
    fn test_indicator_label_is_one_based() {
        assert_eq!(indicator_label(0), "Go to slide 1");
        assert_eq!(indicator_label(9), "Go to slide 10");
    }

    proptest! {
        #[test]
        fn prop_go_to_then_read(count in 1usize..64, seed in any::<usize>()) {
            let index = seed % count;
            let mut state = CarouselState::new(count).unwrap();
            state.go_to(index).unwrap();
            prop_assert_eq!(state.current_index(), index);
        }

        #[test]
        fn prop_advance_count_times_cycles(count in 1usize..64) {
            let mut state = CarouselState::new(count).unwrap();
            for _ in 0..count {
                state.advance();
            }
            prop_assert_eq!(state.current_index(), 0);
        }

        #[test]
        fn prop_retreat_inverts_advance(count in 1usize..64, seed in any::<usize>()) {
            let mut state = CarouselState::new(count).unwrap();
            state.go_to(seed % count).unwrap();
            let before = state.clone();

            state.advance();
            state.retreat();
            prop_assert_eq!(state, before);
        }
    }
}
