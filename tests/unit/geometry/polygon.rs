//! Tests for the polygon kernel and the validated polygon type

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;
    use shapegen::GeneratorError;
    use shapegen::geometry::polygon::{
        angle_from_centroid, centroid, edges, order_around_centroid, point_in_polygon,
        polygon_area,
    };
    use shapegen::geometry::{Point, Polygon};

    fn square(side: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side, side),
            Point::new(0.0, side),
        ]
    }

    // Tests shoelace area of a square
    // Verified by dropping the halving
    #[test]
    fn test_polygon_area_square() -> Result<(), GeneratorError> {
        assert!(approx_eq!(f64, polygon_area(&square(10.0))?, 100.0));
        Ok(())
    }

    // Tests area and centroid reject short vertex lists
    // Verified by removing the vertex count check
    #[test]
    fn test_short_vertex_lists_rejected() {
        let two = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];

        assert!(matches!(
            polygon_area(&two),
            Err(GeneratorError::MalformedPolygon { vertices: 2, .. })
        ));
        assert!(matches!(
            centroid(&two),
            Err(GeneratorError::MalformedPolygon { vertices: 2, .. })
        ));
        assert!(Polygon::new(two.to_vec()).is_err());
        assert!(Polygon::try_from(Vec::new()).is_err());
    }

    // Tests centroid is the vertex mean
    // Verified by dividing by count minus one
    #[test]
    fn test_centroid_vertex_mean() -> Result<(), GeneratorError> {
        assert_eq!(centroid(&square(10.0))?, Point::new(5.0, 5.0));
        Ok(())
    }

    // Tests containment for interior and far exterior points
    // Verified by inverting the parity toggle
    #[test]
    fn test_point_in_polygon() {
        let sq = square(10.0);

        assert!(point_in_polygon(Point::new(5.0, 5.0), &sq));
        assert!(point_in_polygon(Point::new(0.5, 9.5), &sq));
        assert!(!point_in_polygon(Point::new(15.0, 5.0), &sq));
        assert!(!point_in_polygon(Point::new(-1.0, 5.0), &sq));
        assert!(!point_in_polygon(Point::new(5.0, 20.0), &sq));
    }

    // Tests containment in a concave polygon
    // Verified by treating the polygon as its convex hull
    #[test]
    fn test_point_in_concave_polygon() {
        let notch = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(5.0, 5.0),
            Point::new(0.0, 10.0),
        ];

        assert!(point_in_polygon(Point::new(5.0, 2.0), &notch));
        assert!(!point_in_polygon(Point::new(5.0, 8.0), &notch));
    }

    // Tests cyclic edges close the polygon
    // Verified by omitting the closing edge
    #[test]
    fn test_edges_wrap_around() {
        let sq = square(1.0);
        let all: Vec<_> = edges(&sq).collect();

        assert_eq!(all.len(), 4);
        assert_eq!(all.last(), Some(&(Point::new(0.0, 1.0), Point::new(0.0, 0.0))));
    }

    // Tests angular ordering produces a simple boundary
    // Verified by sorting on x instead of bearing
    #[test]
    fn test_order_around_centroid() -> Result<(), GeneratorError> {
        let scrambled = vec![
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        ];
        let ordered = order_around_centroid(scrambled);

        assert!(approx_eq!(f64, polygon_area(&ordered)?, 100.0));
        let center = Point::new(5.0, 5.0);
        let bearings: Vec<f64> = ordered
            .iter()
            .map(|&p| angle_from_centroid(p, center))
            .collect();
        assert!(bearings.windows(2).all(|w| w[0] <= w[1]));
        Ok(())
    }

    // Tests canvas corners sit on the last pixel
    // Verified by using width instead of width - 1
    #[test]
    fn test_canvas_polygon() {
        let canvas = Polygon::canvas(100, 50);
        let bbox = canvas.bounding_box();

        assert_eq!(canvas.len(), 4);
        assert!(!canvas.is_empty());
        assert_eq!(bbox.max, Point::new(99.0, 49.0));
        assert!(approx_eq!(f64, canvas.area(), 99.0 * 49.0));
    }

    // Tests polygon methods agree with the free functions
    // Verified by returning the bbox center as centroid
    #[test]
    fn test_polygon_methods() -> Result<(), GeneratorError> {
        let polygon = Polygon::new(square(10.0))?;

        assert_eq!(polygon.centroid(), Point::new(5.0, 5.0));
        assert!(polygon.contains(Point::new(2.0, 2.0)));
        assert!(approx_eq!(f64, polygon.distance_to(Point::new(2.0, 5.0)), 2.0));
        assert_eq!(polygon.edges().count(), 4);
        assert_eq!(polygon.clone().into_vertices(), square(10.0));
        Ok(())
    }

    fn polygon_strategy() -> impl Strategy<Value = Vec<Point>> {
        prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 3..12)
            .prop_map(|coords| coords.into_iter().map(Point::from).collect())
    }

    /// Area ignores where the vertex cycle starts.
    fn check_area_rotation_invariant(vertices: &[Point], shift: usize) -> Result<(), TestCaseError> {
        let mut rotated = vertices.to_vec();
        rotated.rotate_left(shift % vertices.len());

        let original = polygon_area(vertices).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let shifted = polygon_area(&rotated).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(approx_eq!(f64, original, shifted, epsilon = 1e-6));
        Ok(())
    }

    /// Area ignores the winding direction and is never negative.
    fn check_area_reversal_invariant(vertices: &[Point]) -> Result<(), TestCaseError> {
        let mut reversed = vertices.to_vec();
        reversed.reverse();

        let forward = polygon_area(vertices).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let backward = polygon_area(&reversed).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(forward >= 0.0);
        prop_assert!(approx_eq!(f64, forward, backward, epsilon = 1e-6));
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_area_rotation_invariant(vertices in polygon_strategy(), shift in 0usize..12) {
            check_area_rotation_invariant(&vertices, shift)?;
        }

        #[test]
        fn prop_area_reversal_invariant(vertices in polygon_strategy()) {
            check_area_reversal_invariant(&vertices)?;
        }
    }
}
