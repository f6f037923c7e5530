//! Tests for raster and recording surfaces

#[cfg(test)]
mod tests {
    use image::Rgba;
    use shapegen::geometry::Point;
    use shapegen::io::configuration::{BACKGROUND_COLOR, STROKE_COLOR, STROKE_WIDTH};
    use shapegen::render::{RasterSurface, RecordingSurface, StrokeStyle, Surface};

    fn square(min: f64, max: f64) -> Vec<Point> {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]
    }

    // Tests default stroke comes from configuration
    // Verified by changing the default width
    #[test]
    fn test_stroke_style_default() {
        let style = StrokeStyle::default();

        assert_eq!(style.width, STROKE_WIDTH);
        assert_eq!(style.color, STROKE_COLOR);
    }

    // Tests a fresh canvas is filled with the background
    // Verified by starting from transparent pixels
    #[test]
    fn test_blank_canvas() {
        let surface = RasterSurface::blank(8, 6);
        let image = surface.image();

        assert_eq!(image.dimensions(), (8, 6));
        assert!(image.pixels().all(|p| *p == Rgba(BACKGROUND_COLOR)));
    }

    // Tests outlines color edge pixels and leave the interior alone
    // Verified by filling the polygon
    #[test]
    fn test_stroke_polygon_outline() {
        let mut surface = RasterSurface::blank(32, 32);
        surface.stroke_polygon(&square(5.0, 25.0), &StrokeStyle::default());
        let image = surface.into_image();

        let stroke = Rgba(STROKE_COLOR);
        assert_eq!(*image.get_pixel(5, 5), stroke);
        assert_eq!(*image.get_pixel(15, 5), stroke);
        assert_eq!(*image.get_pixel(25, 15), stroke);
        assert_eq!(*image.get_pixel(5, 15), stroke);
        // Brush width 3 reaches one pixel either side of the edge
        assert_eq!(*image.get_pixel(15, 6), stroke);
        assert_eq!(*image.get_pixel(15, 7), Rgba(BACKGROUND_COLOR));
        assert_eq!(*image.get_pixel(15, 15), Rgba(BACKGROUND_COLOR));
    }

    // Tests single-pixel strokes stay on the edge
    // Verified by centering the brush off by one
    #[test]
    fn test_stroke_width_one() {
        let mut surface = RasterSurface::new(16, 16, [0, 0, 0, 255]);
        let style = StrokeStyle {
            width: 1,
            color: [255, 0, 0, 255],
        };
        surface.stroke_polygon(&square(4.0, 10.0), &style);
        let image = surface.image();

        assert_eq!(*image.get_pixel(4, 7), Rgba([255, 0, 0, 255]));
        assert_eq!(*image.get_pixel(5, 7), Rgba([0, 0, 0, 255]));
        assert_eq!(*image.get_pixel(3, 7), Rgba([0, 0, 0, 255]));
    }

    // Tests outlines running off the canvas are clipped
    // Verified by writing pixels without bounds checks
    #[test]
    fn test_stroke_clipped_at_canvas_edge() {
        let mut surface = RasterSurface::blank(10, 10);
        surface.stroke_polygon(&square(-5.0, 15.0), &StrokeStyle::default());
        surface.stroke_polygon(&square(0.0, 9.0), &StrokeStyle::default());

        let image = surface.image();
        assert_eq!(*image.get_pixel(0, 0), Rgba(STROKE_COLOR));
        assert_eq!(*image.get_pixel(9, 9), Rgba(STROKE_COLOR));
    }

    // Tests recording keeps outlines in drawing order
    // Verified by prepending strokes
    #[test]
    fn test_recording_surface() {
        let mut surface = RecordingSurface::new();
        let style = StrokeStyle::default();
        surface.stroke_polygon(&square(0.0, 1.0), &style);
        surface.stroke_polygon(&square(2.0, 3.0), &style);

        assert_eq!(surface.strokes.len(), 2);
        assert_eq!(surface.strokes[0].vertices, square(0.0, 1.0));
        assert_eq!(surface.strokes[1].vertices, square(2.0, 3.0));
        assert_eq!(surface.strokes[1].style, style);
        assert_eq!(RecordingSurface::default(), RecordingSurface::new());
    }
}
