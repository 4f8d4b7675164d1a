//! Point storage
//!
//! The polyline is defined entirely by the order of its points: every
//! point is joined to the one appended before it.

use crate::error::SettingsError;

/// A position in surface pixel space (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Ordered, append-only list of points. Always holds at least two.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Minimum number of points a sequence may hold
    pub const MIN_POINTS: usize = 2;

    /// Create a sequence from its initial points
    pub fn new(initial: impl IntoIterator<Item = Point>) -> Result<Self, SettingsError> {
        let points: Vec<Point> = initial.into_iter().collect();
        if points.len() < Self::MIN_POINTS {
            return Err(SettingsError::TooFewPoints {
                found: points.len(),
                required: Self::MIN_POINTS,
            });
        }
        Ok(Self { points })
    }

    /// Append a point to the end of the polyline
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }
}

impl Default for PointSequence {
    fn default() -> Self {
        Self {
            points: vec![Point::new(0.0, 0.0), Point::new(50.0, 50.0)],
        }
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sequence() {
        let points = PointSequence::default();
        assert_eq!(points.len(), 2);
        assert_eq!(points.as_slice(), &[Point::new(0.0, 0.0), Point::new(50.0, 50.0)]);
    }

    #[test]
    fn test_rejects_single_point() {
        let result = PointSequence::new([Point::new(1.0, 1.0)]);
        assert!(matches!(
            result,
            Err(SettingsError::TooFewPoints { found: 1, required: 2 })
        ));
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut points = PointSequence::default();
        points.push(Point::new(100.0, 100.0));
        points.push(Point::new(10.0, 300.0));

        let collected: Vec<[f32; 2]> = points.iter().map(|&p| p.into()).collect();
        assert_eq!(
            collected,
            vec![[0.0, 0.0], [50.0, 50.0], [100.0, 100.0], [10.0, 300.0]]
        );
        assert_eq!(points.last(), Some(&Point::new(10.0, 300.0)));
    }
}
