/// Number of times the wallpaper list is repeated to fake an endless carousel
pub const LOOP_FACTOR: usize = 100;

/// Largest accepted loop factor, keeps the looped sequence within memory and index range
pub const MAX_LOOP_FACTOR: usize = 10_000;

/// Background shown when no wallpapers have been added
pub const FALLBACK_URI: &str =
    "https://images.unsplash.com/photo-1470252649378-9c29740c9fa8?q=80&w=2070&auto=format&fit=crop";

/// Index math for the looped wallpaper carousel
///
/// The wallpaper list is repeated `loop_factor` times and the carousel starts in the middle
/// repetition, so the user can scroll a long way in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    loop_factor: usize,
    fallback_uri: String,
}

impl Default for Carousel {
    fn default() -> Self {
        Carousel::new(LOOP_FACTOR, FALLBACK_URI)
    }
}

impl Carousel {
    /// Returns a new Carousel
    ///
    /// # Arguments
    ///
    /// * 'loop_factor' - number of repetitions, clamped to 1..=MAX_LOOP_FACTOR
    /// * 'fallback_uri' - the single background used when the wallpaper list is empty
    pub fn new(loop_factor: usize, fallback_uri: &str) -> Carousel {
        Carousel {
            loop_factor: loop_factor.clamp(1, MAX_LOOP_FACTOR),
            fallback_uri: fallback_uri.to_string(),
        }
    }

    pub fn loop_factor(&self) -> usize {
        self.loop_factor
    }

    /// Builds the backing sequence for the carousel.
    /// An empty list gives the fallback background only, which is not looped.
    ///
    /// # Arguments
    ///
    /// * 'wallpapers' - the user's wallpaper URIs
    pub fn build_looped_sequence(&self, wallpapers: &[String]) -> Vec<String> {
        if wallpapers.is_empty() {
            return vec![self.fallback_uri.clone()];
        }

        let mut looped = Vec::with_capacity(wallpapers.len().saturating_mul(self.loop_factor));
        for _ in 0..self.loop_factor {
            looped.extend_from_slice(wallpapers);
        }
        looped
    }

    /// Returns the start position in the looped sequence, i.e. its middle
    ///
    /// # Arguments
    ///
    /// * 'wallpapers' - the user's wallpaper URIs
    pub fn initial_index(&self, wallpapers: &[String]) -> usize {
        if wallpapers.is_empty() {
            0
        } else {
            wallpapers.len().saturating_mul(self.loop_factor) / 2
        }
    }

    /// Finds where to jump in the looped sequence when a wallpaper is picked from the
    /// plain list. The first occurrence of the URI is used and the target lies in the middle
    /// repetition. Returns None if the URI is not in the list.
    ///
    /// # Arguments
    ///
    /// * 'wallpapers' - the user's wallpaper URIs
    /// * 'selected' - the URI that was picked
    pub fn resolve_target(&self, wallpapers: &[String], selected: &str) -> Option<usize> {
        wallpapers
            .iter()
            .position(|w| w == selected)
            .map(|i| (self.loop_factor / 2).saturating_mul(wallpapers.len()).saturating_add(i))
    }

    /// Maps a position in the looped sequence back to the wallpaper list index
    ///
    /// # Arguments
    ///
    /// * 'wallpapers' - the user's wallpaper URIs
    /// * 'position' - index in the looped sequence
    pub fn logical_index(&self, wallpapers: &[String], position: usize) -> Option<usize> {
        if wallpapers.is_empty() {
            None
        } else {
            Some(position % wallpapers.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uris(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_list_gives_single_fallback() {
        for factor in [1, 3, 100] {
            let carousel = Carousel::new(factor, FALLBACK_URI);
            assert_eq!(carousel.build_looped_sequence(&[]), vec![FALLBACK_URI.to_string()]);
        }
    }

    #[test]
    fn list_is_repeated_in_order() {
        let carousel = Carousel::new(3, FALLBACK_URI);
        assert_eq!(
            carousel.build_looped_sequence(&uris(&["a", "b"])),
            uris(&["a", "b", "a", "b", "a", "b"])
        );
    }

    #[test]
    fn initial_index_is_middle_of_looped_sequence() {
        let carousel = Carousel::default();
        let wallpapers = uris(&["a", "b", "c"]);

        assert_eq!(carousel.initial_index(&wallpapers), 150);
        assert_eq!(carousel.initial_index(&wallpapers), carousel.build_looped_sequence(&wallpapers).len() / 2);
        assert_eq!(carousel.initial_index(&[]), 0);
    }

    #[test]
    fn initial_index_with_odd_total_rounds_down() {
        let carousel = Carousel::new(3, FALLBACK_URI);
        assert_eq!(carousel.initial_index(&uris(&["a"])), 1);
    }

    #[test]
    fn resolve_target_jumps_to_middle_repetition() {
        let carousel = Carousel::default();
        let wallpapers = uris(&["x", "y", "z"]);

        assert_eq!(carousel.resolve_target(&wallpapers, "y"), Some(151));
        assert_eq!(carousel.resolve_target(&wallpapers, "q"), None);

        let looped = carousel.build_looped_sequence(&wallpapers);
        assert_eq!(looped[151], "y");
    }

    #[test]
    fn resolve_target_uses_first_duplicate() {
        let carousel = Carousel::new(4, FALLBACK_URI);
        let wallpapers = uris(&["a", "b", "a"]);

        assert_eq!(carousel.resolve_target(&wallpapers, "a"), Some(6));
    }

    #[test]
    fn zero_loop_factor_is_treated_as_one() {
        let carousel = Carousel::new(0, FALLBACK_URI);
        assert_eq!(carousel.loop_factor(), 1);
        assert_eq!(carousel.build_looped_sequence(&uris(&["a"])), uris(&["a"]));
    }

    #[test]
    fn huge_loop_factor_is_capped() {
        let carousel = Carousel::new(usize::MAX / 2, FALLBACK_URI);
        let wallpapers = uris(&["a", "b", "c"]);

        assert_eq!(carousel.loop_factor(), MAX_LOOP_FACTOR);
        assert_eq!(carousel.initial_index(&wallpapers), 15_000);
        assert_eq!(carousel.resolve_target(&wallpapers, "c"), Some(15_002));
    }

    #[test]
    fn logical_index_wraps_position() {
        let carousel = Carousel::default();
        let wallpapers = uris(&["x", "y", "z"]);

        assert_eq!(carousel.logical_index(&wallpapers, 151), Some(1));
        assert_eq!(carousel.logical_index(&wallpapers, 150), Some(0));
        assert_eq!(carousel.logical_index(&[], 0), None);
    }
}
