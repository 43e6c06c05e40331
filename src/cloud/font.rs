/// Largest font size a cloud entry can get.
pub const LARGEST_FONT: usize = 48;
/// Smallest font size a cloud entry can get.
pub const SMALLEST_FONT: usize = 11;
/// Width of the scale between the two.
pub const FONT_RANGE: usize = LARGEST_FONT - SMALLEST_FONT;

/// Maps a selected word's `count` onto the font scale, given the largest
/// and smallest counts among the selected words.
///
/// With `max != min` the count is interpolated onto `[0, FONT_RANGE]` and
/// rounded up, so any count in `[min, max]` lands in
/// `[SMALLEST_FONT, LARGEST_FONT]` and sizes never decrease as counts grow.
///
/// With `max == min` the historical formula `FONT_RANGE * (count - min)`
/// applies unchanged. The selector only ever produces `count == min` in
/// that situation, which maps to `SMALLEST_FONT`; other counts are allowed
/// and can exceed `LARGEST_FONT`.
///
/// `count < min` is a caller bug and panics.
pub fn font_size(max: usize, min: usize, count: usize) -> usize {
    assert!(
        min <= count,
        "count {} below the selected minimum {}",
        count,
        min
    );
    let offset = count - min;
    let scaled = if max == min {
        FONT_RANGE * offset
    } else {
        (FONT_RANGE * offset).div_ceil(max - min)
    };
    SMALLEST_FONT + scaled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_hit_the_bounds() {
        assert_eq!(font_size(10, 1, 1), SMALLEST_FONT);
        assert_eq!(font_size(10, 1, 10), LARGEST_FONT);
    }

    #[test]
    fn test_sample_scale() {
        // max 3, min 1: the three possible counts.
        assert_eq!(font_size(3, 1, 1), 11);
        assert_eq!(font_size(3, 1, 2), 30); // ceil(37 / 2) + 11
        assert_eq!(font_size(3, 1, 3), 48);
    }

    #[test]
    fn test_bounded_and_monotonic() {
        let (max, min) = (97, 4);
        let mut previous = 0;
        for count in min..=max {
            let size = font_size(max, min, count);
            assert!((SMALLEST_FONT..=LARGEST_FONT).contains(&size));
            assert!(size >= previous, "size shrank at count {}", count);
            previous = size;
        }
    }

    #[test]
    fn test_rounding_is_upward() {
        // 37 * 1 / 3 = 12.33... rounds up to 13.
        assert_eq!(font_size(4, 1, 2), 13 + SMALLEST_FONT);
    }

    #[test]
    fn test_degenerate_scale_at_min() {
        // Single selected word, or all counts equal.
        assert_eq!(font_size(5, 5, 5), 11);
        assert_eq!(font_size(1, 1, 1), 11);
    }

    #[test]
    fn test_degenerate_scale_above_min_is_unbounded() {
        // The historical formula, kept as-is: no interpolation, no clamp.
        assert_eq!(font_size(5, 5, 6), FONT_RANGE + SMALLEST_FONT);
        assert_eq!(font_size(5, 5, 7), 2 * FONT_RANGE + SMALLEST_FONT);
    }

    #[test]
    #[should_panic(expected = "below the selected minimum")]
    fn test_count_below_min_panics() {
        font_size(9, 3, 2);
    }
}
