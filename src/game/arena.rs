use crate::consts;
use rand::Rng;
use std::ops::Add;
use thiserror::Error;

/// A point in arena coordinates.  Signed so that a snake which has wandered
/// past the top or left edge still has a representable position.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// The square playing field: a window of `window × window` pixels divided
/// into square tiles of side `tile_size`.
///
/// Positions of the snake and the food are the centers of tiles, i.e.,
/// `tile_size / 2 + k * tile_size` on each axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Arena {
    window: i32,
    tile_size: i32,
}

impl Arena {
    /// The arena used by the game: [`WINDOW`][consts::WINDOW] pixels
    /// subdivided into tiles of [`TILE_SIZE`][consts::TILE_SIZE]
    pub const STANDARD: Arena = Arena {
        window: consts::WINDOW,
        tile_size: consts::TILE_SIZE,
    };

    /// Construct an arena, checking that `window` is a positive multiple of
    /// `tile_size`
    ///
    /// # Errors
    ///
    /// Returns `Err` if either size is not positive or if `window` is not a
    /// multiple of `tile_size`.
    pub fn new(window: i32, tile_size: i32) -> Result<Arena, ArenaError> {
        if window <= 0 || tile_size <= 0 {
            Err(ArenaError::NonPositive { window, tile_size })
        } else if window % tile_size != 0 {
            Err(ArenaError::Misaligned { window, tile_size })
        } else {
            Ok(Arena { window, tile_size })
        }
    }

    pub fn window(self) -> i32 {
        self.window
    }

    pub fn tile_size(self) -> i32 {
        self.tile_size
    }

    /// Number of tiles along each side of the arena
    pub fn cells(self) -> i32 {
        self.window / self.tile_size
    }

    /// Test whether `p` lies within `[0, window)` on both axes
    pub fn contains(self, p: Point) -> bool {
        (0..self.window).contains(&p.x) && (0..self.window).contains(&p.y)
    }

    /// Return the center of the tile at column `col` and row `row`
    pub fn cell_center(self, col: i32, row: i32) -> Point {
        let half = self.tile_size / 2;
        Point::new(half + col * self.tile_size, half + row * self.tile_size)
    }

    /// Return the `(column, row)` of the tile containing `p`, or `None` if `p`
    /// is outside the arena
    pub fn cell_of(self, p: Point) -> Option<(i32, i32)> {
        self.contains(p)
            .then_some((p.x / self.tile_size, p.y / self.tile_size))
    }

    /// Pick the center of a tile uniformly at random.  The two coordinates are
    /// drawn independently.
    pub fn random_cell<R: Rng>(self, rng: &mut R) -> Point {
        let cells = self.cells();
        let col = rng.random_range(0..cells);
        let row = rng.random_range(0..cells);
        self.cell_center(col, row)
    }
}

impl Default for Arena {
    fn default() -> Arena {
        Arena::STANDARD
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ArenaError {
    #[error("arena sizes must be positive (window = {window}, tile size = {tile_size})")]
    NonPositive { window: i32, tile_size: i32 },
    #[error("window size {window} is not a multiple of tile size {tile_size}")]
    Misaligned { window: i32, tile_size: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(1000, 40, Ok(Arena::STANDARD))]
    #[case(200, 40, Ok(Arena { window: 200, tile_size: 40 }))]
    #[case(1000, 30, Err(ArenaError::Misaligned { window: 1000, tile_size: 30 }))]
    #[case(0, 40, Err(ArenaError::NonPositive { window: 0, tile_size: 40 }))]
    #[case(1000, -40, Err(ArenaError::NonPositive { window: 1000, tile_size: -40 }))]
    fn test_new(
        #[case] window: i32,
        #[case] tile_size: i32,
        #[case] r: Result<Arena, ArenaError>,
    ) {
        assert_eq!(Arena::new(window, tile_size), r);
    }

    #[rstest]
    #[case(Point::new(20, 20), true)]
    #[case(Point::new(0, 999), true)]
    #[case(Point::new(980, 980), true)]
    #[case(Point::new(1000, 500), false)]
    #[case(Point::new(500, 1020), false)]
    #[case(Point::new(-20, 500), false)]
    #[case(Point::new(500, -1), false)]
    fn test_contains(#[case] p: Point, #[case] inside: bool) {
        assert_eq!(Arena::STANDARD.contains(p), inside);
    }

    #[test]
    fn cell_geometry() {
        let arena = Arena::STANDARD;
        assert_eq!(arena.cells(), 25);
        assert_eq!(arena.cell_center(0, 0), Point::new(20, 20));
        assert_eq!(arena.cell_center(24, 3), Point::new(980, 140));
        assert_eq!(arena.cell_of(Point::new(980, 140)), Some((24, 3)));
        assert_eq!(arena.cell_of(Point::new(1020, 140)), None);
    }

    #[test]
    fn random_cells_are_tile_centers_off_the_diagonal() {
        let arena = Arena::STANDARD;
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let p = arena.random_cell(&mut rng);
            assert!(arena.contains(p));
            assert_eq!((p.x - 20) % 40, 0);
            assert_eq!((p.y - 20) % 40, 0);
            seen.insert(p);
        }
        assert!(seen.iter().any(|p| p.x != p.y));
        assert!(seen.iter().any(|p| p.x == 980 || p.y == 980));
    }
}
