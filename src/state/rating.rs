//! Star rating value and display derivation

use serde::{Deserialize, Serialize};

/// Number of star controls in a rating row
pub const STAR_COUNT: usize = 5;

/// Committed star rating, 0 (unrated) through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const UNRATED: Rating = Rating(0);
    pub const MAX: Rating = Rating(STAR_COUNT as u8);

    /// Create a rating, clamping anything above the maximum
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX.0))
    }

    /// Rating committed by clicking the 0-based star `index`
    pub fn from_star_index(index: usize) -> Self {
        Self::new(index.saturating_add(1).min(STAR_COUNT) as u8)
    }

    /// Round an average score (e.g. 3.6) to the nearest whole rating
    pub fn from_average(average: f32) -> Self {
        if !average.is_finite() || average <= 0.0 {
            return Self::UNRATED;
        }
        Self::new(average.round().min(Self::MAX.0 as f32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, STAR_COUNT)
    }
}

/// Display state of a single star
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Filled,
    Empty,
}

impl StarFill {
    pub fn glyph(self) -> &'static str {
        match self {
            StarFill::Filled => "★",
            StarFill::Empty => "☆",
        }
    }
}

/// Derive the fill of every star from the committed rating and the hovered star.
///
/// While a star is hovered the preview wins: stars `0..=hovered` are filled.
/// Otherwise the first `rating` stars are filled.
pub fn star_fills(rating: Rating, hovered: Option<usize>) -> [StarFill; STAR_COUNT] {
    let filled = match hovered {
        Some(index) => index.min(STAR_COUNT - 1) + 1,
        None => rating.value() as usize,
    };
    std::array::from_fn(|i| {
        if i < filled {
            StarFill::Filled
        } else {
            StarFill::Empty
        }
    })
}
