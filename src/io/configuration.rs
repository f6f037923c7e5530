//! Generator constants and runtime configuration defaults

// Phrase generation
/// Default maximum number of nested relations on the subject side
pub const DEFAULT_MAX_DEPTH: usize = 4;
/// Default probability of expanding a node into a relation
pub const DEFAULT_COMPLEXITY: f64 = 0.5;
/// Depth budget for a relation's object
pub const OPERAND_MAX_DEPTH: usize = 3;
/// Expansion probability for a relation's object
pub const OPERAND_COMPLEXITY: f64 = 0.2;

// Shape placement
/// Fraction of the centroid's clearance a shape center may wander
pub const CENTER_JITTER_FRACTION: f64 = 0.15;
/// Circle radius as a fraction of the center's clearance (min, max)
pub const CIRCLE_RADIUS_RANGE: (f64, f64) = (0.75, 1.0);
/// Angular step between circle vertices
pub const CIRCLE_STEP_DEGREES: usize = 10;
/// Largest square side as a multiple of the center's clearance
pub const SQUARE_SIDE_FACTOR: f64 = 1.5;
/// Square side as a fraction of the largest side (min, max)
pub const SQUARE_SIDE_RANGE: (f64, f64) = (0.5, 1.0);

// Triangle rejection sampling
/// Candidate triangles drawn per synthesis
pub const TRIANGLE_ATTEMPTS: usize = 1000;
/// Smallest interior angle a triangle may have
pub const TRIANGLE_MIN_ANGLE_DEGREES: f64 = 25.0;
/// Starting share of the bounds area a triangle must exceed
pub const TRIANGLE_MIN_AREA_FRACTION: f64 = 0.05;
/// Margin trimmed from each side of the bounding box when sampling vertices
pub const TRIANGLE_SAMPLING_MARGIN: f64 = 0.2;
/// Draws allowed per vertex before a candidate is abandoned
pub const POINT_SAMPLING_ATTEMPTS: usize = 1000;

// Drawing
/// Outline width in pixels
pub const STROKE_WIDTH: u32 = 3;
/// Outline color
pub const STROKE_COLOR: [u8; 4] = [100, 100, 100, 255];
/// Canvas fill color
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default canvas edge length in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 256;
/// Smallest canvas edge that still encloses an area
pub const MIN_CANVAS_SIZE: u32 = 2;
/// Default number of examples per batch
pub const DEFAULT_EXAMPLE_COUNT: usize = 100;
/// Fresh attempts allowed for an example whose layout failed
pub const MAX_GENERATION_RETRIES: usize = 5;

// Output settings
/// Prefix of generated picture files
pub const IMAGE_PREFIX: &str = "example_";
/// Manifest listing every picture with its label
pub const LABELS_FILE: &str = "labels.tsv";
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "data/shapes";
/// Default log filter for the CLI
pub const DEFAULT_LOG_LEVEL: &str = "warn";
