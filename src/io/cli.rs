//! Command-line interface for generating cave maps to disk

use crate::algorithm::executor::{CaveGenerator, Generation};
use crate::io::configuration::{DEFAULT_OUTPUT, DEFAULT_SCALE, GeneratorConfig, OVERLAY_SUFFIX};
use crate::io::error::{GenerationError, Result};
use crate::io::image::export_tiles_as_png;
use crate::io::progress::BatchProgress;
use crate::io::visualization::export_overlay;
use crate::spatial::tiles::AsciiMap;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "hilbertcave")]
#[command(
    author,
    version,
    about = "Generate cave maps guided by a Hilbert curve and cellular automata"
)]
/// Command-line arguments for the cave generator
///
/// Every generator flag is optional so that it only overrides the value it
/// names; unset flags fall back to the config file, then to the defaults.
// CLI tools commonly need multiple boolean flags for output selection
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG path; batches insert the map index before the extension
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// JSON file with generator settings
    #[arg(short, long, value_name = "JSON")]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Seed text; leave empty for a clock-derived seed
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Initial floor density in percent
    #[arg(short, long)]
    pub fill: Option<u8>,

    /// Guide curve recursion depth
    #[arg(short, long)]
    pub order: Option<u32>,

    /// Guide curve spacing multiplier
    #[arg(long)]
    pub hilbert_size: Option<i32>,

    /// Corridor widening radius around dense path cells
    #[arg(short, long)]
    pub path_width: Option<usize>,

    /// Negative mask erosion radius
    #[arg(short, long)]
    pub girth: Option<usize>,

    /// Number of maps to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Pixels per cell in exported images
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Also write the guide overlay next to each map
    #[arg(long)]
    pub overlay: bool,

    /// Also write a text rendering next to each map
    #[arg(short, long)]
    pub ascii: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Merge defaults, the config file and explicit flags, in that order
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn resolve_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = &self.seed {
            config.seed.clone_from(seed);
        }
        if let Some(fill) = self.fill {
            config.fill_percentage = fill;
        }
        if let Some(order) = self.order {
            config.hilbert_order = order;
        }
        if let Some(size) = self.hilbert_size {
            config.hilbert_size = size;
        }
        if let Some(path_width) = self.path_width {
            config.path_width = path_width;
        }
        if let Some(girth) = self.girth {
            config.negative_path_girth = girth;
        }

        Ok(config)
    }
}

/// Seed used for map `index` of a batch of `count`
///
/// Single runs keep the seed as given. An empty seed stays empty so every
/// map of the batch draws its own clock seed.
pub fn batch_seed(seed: &str, index: usize, count: usize) -> String {
    if count <= 1 || seed.is_empty() {
        seed.to_owned()
    } else {
        format!("{seed}-{index}")
    }
}

/// Output path for map `index` of a batch of `count`
///
/// A path without extension gets `.png`.
pub fn batch_output_path(output: &Path, index: usize, count: usize) -> PathBuf {
    let output = if output.extension().is_none() {
        output.with_extension("png")
    } else {
        output.to_path_buf()
    };
    if count <= 1 {
        return output;
    }
    sibling_path(&output, &format!("_{index}"), "png")
}

/// Path next to `path` with `suffix` appended to the stem
pub fn sibling_path(path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());
    path.with_file_name(name)
}

/// Runs the generator for every requested map and writes the outputs
pub struct CaveRunner {
    cli: Cli,
}

impl CaveRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate every map and write its files
    ///
    /// Returns the paths of the PNG maps in batch order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration cannot be loaded or fails validation
    /// - A generation fails
    /// - Any output file cannot be written
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        let base = self.cli.resolve_config()?;
        let count = self.cli.count.max(1);
        let progress =
            (count > 1).then(|| BatchProgress::new(count, !self.cli.should_show_progress()));

        let mut written = Vec::with_capacity(count);
        for index in 0..count {
            let config = GeneratorConfig {
                seed: batch_seed(&base.seed, index, count),
                ..base.clone()
            };
            let generation = CaveGenerator::new(config)?.generate()?;
            let output = batch_output_path(&self.cli.output, index, count);
            self.write_outputs(&generation, &output)?;

            if let Some(ref progress) = progress {
                progress.advance(&output.display().to_string());
            }
            written.push(output);
        }

        if let Some(ref progress) = progress {
            progress.finish();
            log::info!("finished batch of {} maps", progress.completed());
        }

        Ok(written)
    }

    fn write_outputs(&self, generation: &Generation, output: &Path) -> Result<()> {
        export_tiles_as_png(&generation.tiles, self.cli.scale, output)?;
        log::info!(
            "wrote {} (seed '{}')",
            output.display(),
            generation.seed
        );

        if self.cli.overlay {
            let overlay_path = sibling_path(output, OVERLAY_SUFFIX, "png");
            export_overlay(generation, self.cli.scale, &overlay_path)?;
            log::debug!("wrote overlay {}", overlay_path.display());
        }

        if self.cli.ascii {
            let text_path = output.with_extension("txt");
            std::fs::write(&text_path, AsciiMap(&generation.tiles).to_string()).map_err(
                |source| GenerationError::FileSystem {
                    path: text_path.clone(),
                    operation: "write text map",
                    source,
                },
            )?;
            log::debug!("wrote text map {}", text_path.display());
        }

        Ok(())
    }
}
