use knight_core::Point;

/// A position with an associated move count, returned from distance map
/// queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: usize,
}

/// One shortest knight path.
///
/// `path` holds every cell the knight lands on in travel order: the start is
/// excluded, the destination is the last element. It is empty when start and
/// destination coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnightPath {
    pub start: Point,
    pub distance: usize,
    pub path: Vec<Point>,
}

impl KnightPath {
    /// The destination cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.path.last().copied().unwrap_or(self.start)
    }

    /// Every cell of the journey with its move number, from `(0, start)` to
    /// `(distance, end)`.
    pub fn steps(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        std::iter::once(self.start)
            .chain(self.path.iter().copied())
            .enumerate()
    }

    /// Move number at which the knight lands on `p`, if it does.
    pub fn step_at(&self, p: Point) -> Option<usize> {
        self.steps().find(|&(_, q)| q == p).map(|(n, _)| n)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn knight_path_round_trip() {
        let path = KnightPath {
            start: Point::new(0, 0),
            distance: 1,
            path: vec![Point::new(2, 1)],
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: KnightPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
