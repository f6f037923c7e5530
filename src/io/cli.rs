//! Command-line interface for batch generation of labelled shape pictures

use crate::io::configuration::{
    DEFAULT_CANVAS_SIZE, DEFAULT_COMPLEXITY, DEFAULT_EXAMPLE_COUNT, DEFAULT_LOG_LEVEL,
    DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_DIR, DEFAULT_SEED, IMAGE_PREFIX, LABELS_FILE,
    MAX_GENERATION_RETRIES,
};
use crate::io::error::Result;
use crate::io::image::{LabelRecord, export_png, write_labels};
use crate::io::progress::ProgressManager;
use crate::label::LabelConfig;
use crate::pipeline::{Example, ExampleGenerator, GeneratorConfig};
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "shapegen")]
#[command(
    author,
    version,
    about = "Generate pictures of nested shapes paired with the phrases that describe them"
)]
/// Command-line arguments for the example generator
pub struct Cli {
    /// Number of examples to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_EXAMPLE_COUNT)]
    pub count: usize,

    /// Directory receiving the pictures and the label manifest
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum number of nested relations per phrase
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Probability of expanding a phrase node into a relation
    #[arg(short, long, default_value_t = DEFAULT_COMPLEXITY)]
    pub complexity: f64,

    /// Canvas width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Canvas size from the width and height flags
    pub fn canvas_size(&self) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE),
        }
    }

    /// Generator configuration assembled from the flags
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            label: LabelConfig {
                max_depth: self.max_depth,
                complexity: self.complexity,
                ..LabelConfig::default()
            },
            canvas_size: self.canvas_size(),
            ..GeneratorConfig::default()
        }
    }
}

/// Writes a batch of examples and their manifest with progress tracking
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate, export and list every example
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, an example still
    /// fails after its retries, or a file cannot be written
    pub fn process(&mut self) -> Result<Vec<LabelRecord>> {
        let mut generator = ExampleGenerator::new(self.cli.generator_config(), self.cli.seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut records = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let example = self.generate_with_retries(&mut generator, index)?;
            let file = Self::image_name(index);
            export_png(&example.image, &self.cli.output.join(&file))?;
            records.push(LabelRecord {
                file,
                linearized: example.linearized(),
                functional: example.functional(),
            });

            if let Some(ref pm) = self.progress_manager {
                pm.complete_example();
            }
        }

        let labels_path = self.labels_path();
        write_labels(&records, &labels_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        info!(examples = records.len(), output = self.cli.output.display().to_string(); "Batch written");

        Ok(records)
    }

    // A picture with skipped shapes no longer matches its phrase, so it is
    // retried like an error; the last attempt is kept if all come up short
    fn generate_with_retries(
        &mut self,
        generator: &mut ExampleGenerator,
        index: usize,
    ) -> Result<Example> {
        let mut attempt = 0;
        loop {
            let exhausted = attempt >= MAX_GENERATION_RETRIES;
            match generator.generate_example() {
                Ok(example) if example.report.is_complete() || exhausted => {
                    if !example.report.is_complete() {
                        warn!(index, skipped = example.report.shapes_skipped; "Keeping incomplete example");
                    }
                    return Ok(example);
                }
                Ok(example) => {
                    warn!(index, attempt, skipped = example.report.shapes_skipped; "Incomplete example, retrying");
                }
                Err(err) if !exhausted => {
                    warn!(index, attempt, error:% = err; "Example failed, retrying");
                }
                Err(err) => return Err(err),
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.record_retry();
            }
            attempt += 1;
        }
    }

    /// Manifest location inside the output directory
    pub fn labels_path(&self) -> PathBuf {
        self.cli.output.join(LABELS_FILE)
    }

    /// File name of the picture at `index`
    pub fn image_name(index: usize) -> String {
        format!("{IMAGE_PREFIX}{index:05}.png")
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.cli.output
    }
}
