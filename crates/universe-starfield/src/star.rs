//! Star particles.

use std::ops::Range;

use rand::Rng;
use universe_core::{Size, StarColor, Theme, resolve_color};

/// Radius of a star in device pixels.
pub const RADIUS_RANGE: Range<f64> = 0.0..1.5;

/// Upward drift per frame in device pixels.
pub const SPEED_RANGE: Range<f64> = 0.1..0.6;

/// A single star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position in device pixels.
    pub x: f64,
    /// Vertical position in device pixels, growing downward.
    pub y: f64,
    /// Radius, fixed at creation.
    pub radius: f64,
    /// Colour from the palette of the theme it was resolved under.
    pub color: StarColor,
    /// Pixels moved up per frame, fixed at creation.
    pub speed: f64,
}

impl Star {
    /// Place a new star uniformly inside `size`.
    pub fn random<R: Rng + ?Sized>(size: Size, theme: Theme, rng: &mut R) -> Self {
        Self {
            x: uniform(rng, size.width as f64),
            y: uniform(rng, size.height as f64),
            radius: rng.random_range(RADIUS_RANGE),
            color: resolve_color(theme, rng),
            speed: rng.random_range(SPEED_RANGE),
        }
    }

    /// Move one frame upward. A star that leaves the top re-enters at the
    /// bottom edge at a new random column.
    ///
    /// Returns `true` when the star wrapped.
    pub fn advance<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) -> bool {
        self.y -= self.speed;
        if self.y < 0.0 {
            self.y = height;
            self.x = uniform(rng, width);
            true
        } else {
            false
        }
    }
}

/// Seed `count` stars inside `size`.
pub fn generate_stars<R: Rng + ?Sized>(
    count: usize,
    size: Size,
    theme: Theme,
    rng: &mut R,
) -> Vec<Star> {
    (0..count).map(|_| Star::random(size, theme, rng)).collect()
}

/// Uniform sample from `[0, upper)`; zero for an empty range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, upper: f64) -> f64 {
    if upper > 0.0 {
        rng.random_range(0.0..upper)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use universe_core::{DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn generated_stars_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let size = Size::new(800, 600);
        let stars = generate_stars(1000, size, Theme::Light, &mut rng);
        assert_eq!(stars.len(), 1000);
        for star in &stars {
            assert!((0.0..800.0).contains(&star.x));
            assert!((0.0..600.0).contains(&star.y));
            assert!(RADIUS_RANGE.contains(&star.radius));
            assert!(SPEED_RANGE.contains(&star.speed));
            assert!(LIGHT_PALETTE.contains(star.color));
            assert!(!DARK_PALETTE.contains(star.color));
        }
    }

    #[test]
    fn dark_theme_uses_dark_palette() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let stars = generate_stars(100, Size::new(10, 10), Theme::Dark, &mut rng);
        assert!(stars.iter().all(|s| DARK_PALETTE.contains(s.color)));
    }

    #[test]
    fn empty_viewport_places_stars_at_origin() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stars = generate_stars(10, Size::default(), Theme::Light, &mut rng);
        assert!(stars.iter().all(|s| s.x == 0.0 && s.y == 0.0));
    }

    #[test]
    fn advance_moves_up_by_speed() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut star = Star {
            x: 10.0,
            y: 50.0,
            radius: 1.0,
            color: LIGHT_PALETTE.colors()[0],
            speed: 0.5,
        };
        assert!(!star.advance(100.0, 80.0, &mut rng));
        assert_eq!(star.y, 49.5);
        assert_eq!(star.x, 10.0);
    }

    #[test]
    fn advance_wraps_to_bottom() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let color = DARK_PALETTE.colors()[2];
        let mut star = Star {
            x: 10.0,
            y: 0.2,
            radius: 1.0,
            color,
            speed: 0.3,
        };
        assert!(star.advance(100.0, 80.0, &mut rng));
        assert_eq!(star.y, 80.0);
        assert!((0.0..100.0).contains(&star.x));
        assert_eq!(star.color, color);
        assert_eq!(star.speed, 0.3);
    }

    #[test]
    fn reaching_zero_exactly_does_not_wrap() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut star = Star {
            x: 10.0,
            y: 0.5,
            radius: 1.0,
            color: LIGHT_PALETTE.colors()[1],
            speed: 0.5,
        };
        assert!(!star.advance(100.0, 80.0, &mut rng));
        assert_eq!(star.y, 0.0);
    }
}
