//! Parsing and validation of typed user input

use crate::error::InputError;
use crate::points::Point;

/// Parse an `"x,y"` string into a point inside `[0, width] x [0, height]`
pub fn parse_coordinate(input: &str, width: u32, height: u32) -> Result<Point, InputError> {
    let tokens: Vec<&str> = input.split(',').collect();
    let [x, y] = tokens.as_slice() else {
        return Err(InputError::MalformedCoordinate {
            input: input.to_string(),
        });
    };

    let x = parse_component(x)?;
    let y = parse_component(y)?;

    let in_bounds = (0.0..=width as f32).contains(&x) && (0.0..=height as f32).contains(&y);
    if !in_bounds {
        return Err(InputError::OutOfBounds { x, y, width, height });
    }

    Ok(Point::new(x, y))
}

fn parse_component(token: &str) -> Result<f32, InputError> {
    let token = token.trim();
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NonNumeric {
            value: token.to_string(),
        }),
    }
}

/// Parse a width/height pair, both of which must be integers `>= min`
pub fn parse_dimensions(width: &str, height: &str, min: u32) -> Result<(u32, u32), InputError> {
    let width = parse_dimension(width)?;
    let height = parse_dimension(height)?;

    if width < min || height < min {
        return Err(InputError::DimensionTooSmall { width, height, min });
    }

    Ok((width, height))
}

fn parse_dimension(value: &str) -> Result<u32, InputError> {
    let value = value.trim();
    value.parse::<u32>().map_err(|_| InputError::InvalidDimension {
        value: value.to_string(),
    })
}
