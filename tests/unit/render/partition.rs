//! Tests for the vertical bounds split

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use shapegen::GeneratorError;
    use shapegen::geometry::{Point, Polygon};
    use shapegen::render::partition::{split_line, split_vertical};

    fn square(side: f64) -> Result<Polygon, GeneratorError> {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side, side),
            Point::new(0.0, side),
        ])
    }

    // Tests a 10x10 square splits into equal halves
    // Verified by keeping only strict inequalities
    #[test]
    fn test_split_square_halves() -> Result<(), GeneratorError> {
        let (left, right) = split_vertical(&square(10.0)?)?;

        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 4);
        assert!(approx_eq!(f64, left.area(), 50.0));
        assert!(approx_eq!(f64, right.area(), 50.0));
        assert!(left.vertices().iter().all(|p| p.x <= 5.0));
        assert!(right.vertices().iter().all(|p| p.x >= 5.0));
        Ok(())
    }

    // Tests the split line is floored to a whole column
    // Verified by rounding instead of flooring
    #[test]
    fn test_split_line_floors() -> Result<(), GeneratorError> {
        let canvas = Polygon::canvas(256, 256);

        assert!(approx_eq!(f64, split_line(&canvas), 127.0));
        let (left, right) = split_vertical(&canvas)?;
        assert!(approx_eq!(f64, left.area(), 127.0 * 255.0));
        assert!(approx_eq!(f64, right.area(), 128.0 * 255.0));
        assert!(approx_eq!(f64, split_line(&square(7.0)?), 3.0));
        Ok(())
    }

    // Tests a vertex on the split line is shared without duplicates
    // Verified by removing the deduplication
    #[test]
    fn test_split_triangle_apex_on_line() -> Result<(), GeneratorError> {
        let triangle = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 10.0),
        ])?;
        let (left, right) = split_vertical(&triangle)?;

        assert_eq!(left.len(), 3);
        assert_eq!(right.len(), 3);
        assert!(approx_eq!(f64, left.area(), 25.0));
        assert!(approx_eq!(f64, right.area(), 25.0));
        Ok(())
    }

    // Tests halves of a split can be split again
    // Verified by reusing the parent split line
    #[test]
    fn test_split_is_repeatable() -> Result<(), GeneratorError> {
        let (_, right) = split_vertical(&square(100.0)?)?;
        let (inner_left, inner_right) = split_vertical(&right)?;

        assert!(approx_eq!(f64, inner_left.area(), 2500.0));
        assert!(approx_eq!(f64, inner_right.area(), 2500.0));
        Ok(())
    }

    // Tests bounds narrower than two columns still split into two halves
    // Verified by always flooring the split line
    #[test]
    fn test_split_narrow_bounds() -> Result<(), GeneratorError> {
        let strip = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 10.0),
            Point::new(0.0, 10.0),
        ])?;

        assert!(approx_eq!(f64, split_line(&strip), 0.5));
        let (left, right) = split_vertical(&strip)?;
        assert!(approx_eq!(f64, left.area(), 5.0));
        assert!(approx_eq!(f64, right.area(), 5.0));

        let sliver = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(1.0, 5.0),
        ])?;
        let (left, right) = split_vertical(&sliver)?;
        assert!(approx_eq!(f64, left.area() + right.area(), sliver.area()));
        Ok(())
    }

    // Tests off-grid bounds whose floored midpoint falls outside them
    // Verified by always flooring the split line
    #[test]
    fn test_split_offset_bounds() -> Result<(), GeneratorError> {
        let strip = Polygon::new(vec![
            Point::new(10.4, 0.0),
            Point::new(11.2, 0.0),
            Point::new(11.2, 10.0),
            Point::new(10.4, 10.0),
        ])?;

        assert!(approx_eq!(f64, split_line(&strip), 10.8, epsilon = 1e-9));
        let (left, right) = split_vertical(&strip)?;
        assert!(approx_eq!(f64, left.area(), 4.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, right.area(), 4.0, epsilon = 1e-9));
        assert!(left.vertices().iter().all(|p| p.x < 10.8 + 1e-9));
        assert!(right.vertices().iter().all(|p| p.x > 10.8 - 1e-9));
        Ok(())
    }

    // Tests the smallest accepted canvas can be split
    // Verified by flooring the 0.5 midpoint onto the left edge
    #[test]
    fn test_split_minimal_canvas() -> Result<(), GeneratorError> {
        let (left, right) = split_vertical(&Polygon::canvas(2, 2))?;

        assert!(approx_eq!(f64, left.area(), 0.5));
        assert!(approx_eq!(f64, right.area(), 0.5));
        Ok(())
    }

    // Tests a half collapsing below three points is reported
    // Verified by padding short halves with the centroid
    #[test]
    fn test_split_degenerate_half() -> Result<(), GeneratorError> {
        let flat = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
        ])?;

        assert!(matches!(
            split_vertical(&flat),
            Err(GeneratorError::MalformedPolygon { vertices: 2, .. })
        ));
        Ok(())
    }
}
