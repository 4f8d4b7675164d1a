//! Session state and the handlers that mutate it

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{InputError, SettingsError};
use crate::events::{InputAction, Redraw};
use crate::input::{parse_coordinate, parse_dimensions};
use crate::points::{Point, PointSequence};
use crate::settings::{AppSettings, SURFACE_MIN_DIMENSION};

/// Mutable rendering parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Rasterization line width. Not bounded here; drivers may clamp it.
    pub line_width: f32,

    /// Surface width in pixels
    pub width: u32,

    /// Surface height in pixels
    pub height: u32,
}

impl RenderConfig {
    /// Surface size as the vertex stage's resolution uniform
    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            width: 500,
            height: 500,
        }
    }
}

/// Limits enforced when the surface is resized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLimits {
    pub min_dimension: u32,
}

impl Default for SurfaceLimits {
    fn default() -> Self {
        Self {
            min_dimension: SURFACE_MIN_DIMENSION,
        }
    }
}

/// Everything the renderer and the input handlers share
#[derive(Debug, Clone, Default)]
pub struct Session {
    points: PointSequence,
    config: RenderConfig,
    limits: SurfaceLimits,
}

impl Session {
    /// Build a session from validated settings
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let points = PointSequence::new(settings.initial_points.iter().copied().map(Point::from))?;
        Ok(Self {
            points,
            config: RenderConfig {
                line_width: settings.line_width,
                width: settings.surface_width,
                height: settings.surface_height,
            },
            limits: SurfaceLimits {
                min_dimension: settings.min_surface_dimension,
            },
        })
    }

    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn limits(&self) -> &SurfaceLimits {
        &self.limits
    }

    /// Append a point sampled uniformly from `[0, width) x [0, height)`
    pub fn add_random_point(&mut self, rng: &mut impl Rng) -> Point {
        let point = Point::new(
            sample_axis(rng, self.config.width),
            sample_axis(rng, self.config.height),
        );
        self.push(point);
        point
    }

    /// Append a point typed as `"x,y"`. Leaves the session untouched on error.
    pub fn add_coordinate(&mut self, input: &str) -> Result<Point, InputError> {
        let point = parse_coordinate(input, self.config.width, self.config.height)?;
        self.push(point);
        Ok(point)
    }

    /// Resize the surface. Leaves the session untouched on error.
    pub fn resize(&mut self, width: &str, height: &str) -> Result<(u32, u32), InputError> {
        let (width, height) = parse_dimensions(width, height, self.limits.min_dimension)?;
        debug!(width, height, "Surface resized");
        self.config.width = width;
        self.config.height = height;
        Ok((width, height))
    }

    /// Append a clicked position. Clicks are trusted to lie on the surface.
    pub fn add_click(&mut self, point: Point) {
        self.push(point);
    }

    pub fn set_line_width(&mut self, line_width: f32) {
        debug!(line_width, "Line width changed");
        self.config.line_width = line_width;
    }

    /// Apply one input action and report which redraw it requires
    pub fn apply(&mut self, action: InputAction, rng: &mut impl Rng) -> Result<Redraw, InputError> {
        let result = match action {
            InputAction::AddRandom => {
                self.add_random_point(rng);
                Ok(Redraw::Reveal)
            }
            InputAction::AddCoordinate(input) => self.add_coordinate(&input).map(|_| Redraw::Reveal),
            InputAction::Resize { width, height } => {
                self.resize(&width, &height).map(|_| Redraw::Once)
            }
            InputAction::Click(point) => {
                self.add_click(point);
                Ok(Redraw::Reveal)
            }
            InputAction::SetLineWidth(width) => {
                self.set_line_width(width);
                Ok(Redraw::Once)
            }
        };

        if let Err(err) = &result {
            warn!("Rejected input: {err}");
        }
        result
    }

    fn push(&mut self, point: Point) {
        self.points.push(point);
        debug!(x = point.x, y = point.y, count = self.points.len(), "Point added");
    }
}

/// Uniform sample in `[0, extent)`, or `0.0` for a zero-sized axis
fn sample_axis(rng: &mut impl Rng, extent: u32) -> f32 {
    if extent == 0 {
        return 0.0;
    }
    rng.gen_range(0.0..extent as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_add_coordinate_scenario() {
        let mut session = Session::default();
        let redraw = session
            .apply(InputAction::AddCoordinate("100,100".to_string()), &mut rng())
            .unwrap();

        assert_eq!(redraw, Redraw::Reveal);
        let points: Vec<[f32; 2]> = session.points().iter().map(|&p| p.into()).collect();
        assert_eq!(points, vec![[0.0, 0.0], [50.0, 50.0], [100.0, 100.0]]);
    }

    #[test]
    fn test_malformed_coordinate_leaves_points_unchanged() {
        let mut session = Session::default();
        let before = session.points().clone();

        for input in ["abc,5", "1,2,3", "600,10", "10"] {
            let result = session.apply(InputAction::AddCoordinate(input.to_string()), &mut rng());
            assert!(result.is_err(), "{input:?} should be rejected");
            assert!(!result.unwrap_err().to_string().is_empty());
        }

        assert_eq!(session.points(), &before);
    }

    #[test]
    fn test_valid_coordinates_grow_by_one() {
        let mut session = Session::default();
        for (i, input) in ["0,0", "500,500", "250.5,3"].iter().enumerate() {
            session.add_coordinate(input).unwrap();
            assert_eq!(session.points().len(), 3 + i);
        }
    }

    #[test]
    fn test_resize_scenario() {
        let mut session = Session::default();
        let before = *session.config();

        let rejected = session.apply(
            InputAction::Resize { width: "300".into(), height: "500".into() },
            &mut rng(),
        );
        assert!(matches!(rejected, Err(InputError::DimensionTooSmall { .. })));
        assert_eq!(session.config(), &before);

        let accepted = session.apply(
            InputAction::Resize { width: "800".into(), height: "600".into() },
            &mut rng(),
        );
        assert_eq!(accepted, Ok(Redraw::Once));
        assert_eq!((session.config().width, session.config().height), (800, 600));
    }

    #[test]
    fn test_resize_changes_coordinate_bounds() {
        let mut session = Session::default();
        assert!(session.add_coordinate("700,10").is_err());
        session.resize("800", "600").unwrap();
        assert!(session.add_coordinate("700,10").is_ok());
    }

    #[test]
    fn test_random_points_stay_inside_surface() {
        let mut session = Session::default();
        let mut rng = rng();
        for _ in 0..200 {
            let point = session.add_random_point(&mut rng);
            assert!((0.0..500.0).contains(&point.x));
            assert!((0.0..500.0).contains(&point.y));
        }
        assert_eq!(session.points().len(), 202);
    }

    #[test]
    fn test_sample_axis_handles_zero_extent() {
        let mut rng = rng();
        assert_eq!(sample_axis(&mut rng, 0), 0.0);
        for _ in 0..50 {
            assert!((0.0..1.0).contains(&sample_axis(&mut rng, 1)));
        }
    }

    #[test]
    fn test_resize_never_goes_below_floor() {
        let settings = AppSettings::default();
        let mut session = Session::from_settings(&settings).unwrap();
        assert!(session.resize("0", "0").is_err());
        assert!(session.resize("399", "800").is_err());
        assert_eq!((session.config().width, session.config().height), (500, 500));

        let point = session.add_random_point(&mut rng());
        assert!((0.0..500.0).contains(&point.x));
    }

    #[test]
    fn test_click_is_not_bounds_checked() {
        let mut session = Session::default();
        let redraw = session
            .apply(InputAction::Click(Point::new(-20.0, 9000.0)), &mut rng())
            .unwrap();
        assert_eq!(redraw, Redraw::Reveal);
        assert_eq!(session.points().last(), Some(&Point::new(-20.0, 9000.0)));
    }

    #[test]
    fn test_line_width_has_no_bounds() {
        let mut session = Session::default();
        let redraw = session.apply(InputAction::SetLineWidth(42.0), &mut rng()).unwrap();
        assert_eq!(redraw, Redraw::Once);
        assert_eq!(session.config().line_width, 42.0);
        assert_eq!(session.points().len(), 2);
    }

    #[test]
    fn test_from_settings() {
        let settings = AppSettings {
            initial_points: vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]],
            surface_width: 640,
            surface_height: 480,
            line_width: 2.0,
            ..AppSettings::default()
        };
        let session = Session::from_settings(&settings).unwrap();
        assert_eq!(session.points().len(), 3);
        assert_eq!(session.config().resolution(), [640.0, 480.0]);
        assert_eq!(session.limits().min_dimension, 400);
    }
}
