//! Category filter for the product grid.
//!
//! One chip is active at a time. A card is shown when its category matches
//! the active chip's, or when the active chip is the catch-all.

use thiserror::Error;

/// Category of the chip that shows every card.
pub const ALL_CATEGORY: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("filter chip {index} is out of range for {chip_count} chips")]
    UnknownChip { index: usize, chip_count: usize },
}

/// Whether a card in `card_category` is shown while `selected` is active.
pub fn matches_category(selected: &str, card_category: &str) -> bool {
    selected == ALL_CATEGORY || selected == card_category
}

/// Chips and cards of one product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    chips: Vec<String>,
    cards: Vec<String>,
    active_chip: Option<usize>,
}

impl ProductFilter {
    /// Build a filter from chip and card categories, in page order.
    ///
    /// Returns `None` when the page has no chips. Every card starts visible.
    pub fn new<C, P, S>(chips: C, cards: P) -> Option<Self>
    where
        C: IntoIterator<Item = S>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chips: Vec<String> = chips.into_iter().map(Into::into).collect();
        if chips.is_empty() {
            return None;
        }

        Some(Self {
            chips,
            cards: cards.into_iter().map(Into::into).collect(),
            active_chip: None,
        })
    }

    /// Activate chip `index` and return its category.
    pub fn select(&mut self, index: usize) -> Result<&str, FilterError> {
        if index >= self.chips.len() {
            return Err(FilterError::UnknownChip {
                index,
                chip_count: self.chips.len(),
            });
        }

        self.active_chip = Some(index);
        let category = self.chips[index].as_str();
        tracing::debug!("Product filter set to '{}'", category);
        Ok(category)
    }

    pub fn active_chip(&self) -> Option<usize> {
        self.active_chip
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_chip.map(|index| self.chips[index].as_str())
    }

    /// Whether card `index` is shown; unknown cards are not.
    pub fn is_visible(&self, index: usize) -> bool {
        match (self.cards.get(index), self.active_category()) {
            (Some(card), Some(selected)) => matches_category(selected, card),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Positions of every shown card.
    pub fn visible_cards(&self) -> Vec<usize> {
        (0..self.cards.len())
            .filter(|&index| self.is_visible(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> ProductFilter {
        ProductFilter::new(
            ["all", "pumps", "valves"],
            ["pumps", "valves", "pumps", "fittings"],
        )
        .unwrap()
    }

    #[test]
    fn test_everything_visible_before_selection() {
        let filter = grid();
        assert_eq!(filter.active_chip(), None);
        assert_eq!(filter.visible_cards(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_select_category() {
        let mut filter = grid();

        assert_eq!(filter.select(1).unwrap(), "pumps");
        assert_eq!(filter.visible_cards(), vec![0, 2]);

        filter.select(2).unwrap();
        assert_eq!(filter.active_chip(), Some(2));
        assert_eq!(filter.visible_cards(), vec![1]);
    }

    #[test]
    fn test_all_chip_shows_everything() {
        let mut filter = grid();
        filter.select(1).unwrap();
        filter.select(0).unwrap();

        assert_eq!(filter.active_category(), Some(ALL_CATEGORY));
        assert_eq!(filter.visible_cards(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unknown_chip_keeps_selection() {
        let mut filter = grid();
        filter.select(2).unwrap();

        let err = filter.select(7).unwrap_err();

        assert_eq!(
            err,
            FilterError::UnknownChip {
                index: 7,
                chip_count: 3
            }
        );
        assert_eq!(filter.active_chip(), Some(2));
        assert!(!filter.is_visible(99));
    }

    #[test]
    fn test_page_without_chips() {
        assert!(ProductFilter::new(Vec::<String>::new(), vec!["pumps".to_string()]).is_none());
    }
}
