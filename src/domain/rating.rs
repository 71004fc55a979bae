//! Star and face glyphs for 0-5 ratings.

pub const MAX_STARS: usize = 5;

const FACES: [&str; MAX_STARS] = ["😞", "😕", "😐", "😊", "😍"];

/// Number of filled stars for a rating: the whole part, clamped to 0..=5.
pub fn filled_stars(rating: f32) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.floor() as usize).min(MAX_STARS)
}

/// Face for a rating. Anything below 2 gets the saddest face.
pub fn rating_emoji(rating: f32) -> &'static str {
    let index = filled_stars(rating).saturating_sub(1);
    FACES[index.min(MAX_STARS - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_stars() {
        assert_eq!(filled_stars(4.6), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(7.0), 5);
        assert_eq!(filled_stars(0.4), 0);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f32::NAN), 0);
    }

    #[test]
    fn test_rating_emoji_is_clamped() {
        assert_eq!(rating_emoji(0.0), "😞");
        assert_eq!(rating_emoji(1.0), "😞");
        assert_eq!(rating_emoji(3.0), "😐");
        assert_eq!(rating_emoji(5.0), "😍");
        assert_eq!(rating_emoji(9.0), "😍");
    }
}
