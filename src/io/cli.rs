//! Command-line interface over the validation and scoring engine

use crate::algorithm::codec::{decode, encode, is_well_formed_sequence_string};
use crate::algorithm::generator::PatternGenerator;
use crate::algorithm::validation::validate_with;
use crate::analysis::complexity::score;
use crate::analysis::statistics::{LevelHistogram, PatternStats};
use crate::io::configuration::{
    DEFAULT_GENERATE_COUNT, DEFAULT_SEED, DEFAULT_SURVEY_SAMPLES, PatternConfig, Preset,
};
use crate::io::error::{PatternError, Result, file_system_error};
use crate::io::progress::ProgressManager;
use crate::io::visualization::render_pattern;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "patternlock")]
#[command(
    author,
    version,
    about = "Validate, score and generate dot-grid lock patterns"
)]
/// Command-line arguments for the pattern tool
pub struct Cli {
    /// Named constraint set to start from
    #[arg(short, long, value_enum, default_value_t = Preset::MobileLock, global = true)]
    pub preset: Preset,

    /// Override the minimum number of dots
    #[arg(long, global = true)]
    pub min_points: Option<usize>,

    /// Override the maximum number of dots
    #[arg(long, global = true)]
    pub max_points: Option<usize>,

    /// Override the grid width and height
    #[arg(short, long, global = true)]
    pub grid_size: Option<usize>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed on the command line
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check a comma-separated pattern against the constraints
    Validate {
        /// Pattern such as `0,1,2,5,8`
        #[arg(allow_hyphen_values = true)]
        pattern: String,
    },
    /// Print the complexity score, level and factor breakdown
    Score {
        /// Pattern such as `0,1,2,5,8`
        #[arg(allow_hyphen_values = true)]
        pattern: String,
        /// Also draw the traversal order on the grid
        #[arg(short, long)]
        diagram: bool,
    },
    /// Join indices into the comma-separated form
    Encode {
        /// Dot indices in traversal order
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<i64>,
    },
    /// Parse the comma-separated form, dropping unparsable tokens
    Decode {
        /// Comma-separated text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Report whether text is a well-formed, valid pattern
    Check {
        /// Comma-separated text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print random patterns with their complexity level
    Generate {
        /// Number of patterns to print
        #[arg(short, long, default_value_t = DEFAULT_GENERATE_COUNT)]
        count: usize,
        /// Random seed for reproducible generation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Score many random patterns and print the level distribution
    Survey {
        /// Number of patterns to score
        #[arg(short = 'n', long, default_value_t = DEFAULT_SURVEY_SAMPLES)]
        samples: usize,
        /// Random seed for reproducible generation
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Score every pattern in a file, one per line
    Batch {
        /// Text file of comma-separated patterns; `#` starts a comment line
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

impl Cli {
    /// Constraints from the preset with any explicit overrides applied
    pub fn config(&self) -> PatternConfig {
        let preset = self.preset.config();
        PatternConfig {
            min_points: self.min_points.unwrap_or(preset.min_points),
            max_points: self.max_points.unwrap_or(preset.max_points),
            grid_size: self.grid_size.unwrap_or(preset.grid_size),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Executes a parsed command, writing results to a caller-supplied sink
pub struct CommandRunner {
    cli: Cli,
    config: PatternConfig,
}

impl CommandRunner {
    /// Create a runner for the given arguments
    pub fn new(cli: Cli) -> Self {
        let config = cli.config();
        Self { cli, config }
    }

    /// Constraints the runner applies
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The constraints cannot accept any pattern
    /// - A batch file cannot be read or contains a line with no pattern
    /// - Writing to `out` fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Command::Encode { indices } => {
                writeln!(out, "{}", encode(indices))?;
            }
            Command::Decode { text } => {
                writeln!(out, "{:?}", decode(text))?;
            }
            command => {
                self.config.validate()?;
                self.run_constrained(command, out)?;
            }
        }
        Ok(())
    }

    fn run_constrained<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        match command {
            Command::Validate { pattern } => {
                let result = validate_with(&decode(pattern), &self.config);
                writeln!(out, "{}", result.message)?;
            }
            Command::Score { pattern, diagram } => {
                self.write_score(&decode(pattern), *diagram, out)?;
            }
            Command::Check { text } => {
                let well_formed = is_well_formed_sequence_string(
                    text,
                    self.config.min_points,
                    self.config.max_points,
                    self.config.grid_size,
                );
                writeln!(out, "{well_formed}")?;
            }
            Command::Generate { count, seed } => {
                let generator = PatternGenerator::new(self.config, *seed);
                for pattern in generator.take(*count) {
                    let complexity = score(&pattern, self.config.grid_size);
                    writeln!(out, "{}\t{}", encode(&pattern), complexity.level)?;
                }
            }
            Command::Survey { samples, seed } => {
                let histogram = self.survey(*samples, *seed);
                write_histogram(&histogram, out)?;
            }
            Command::Batch { path } => {
                self.score_file(path, out)?;
            }
            Command::Encode { .. } | Command::Decode { .. } => {}
        }
        Ok(())
    }

    fn write_score<W: Write>(&self, pattern: &[i64], diagram: bool, out: &mut W) -> Result<()> {
        let complexity = score(pattern, self.config.grid_size);
        writeln!(out, "score: {}", complexity.score)?;
        writeln!(out, "level: {}", complexity.level)?;
        for factor in &complexity.factors {
            writeln!(out, "  {factor}")?;
        }
        if diagram {
            writeln!(out, "{}", render_pattern(pattern, self.config.grid_size))?;
        }
        Ok(())
    }

    /// Score `samples` random patterns drawn with `seed`
    pub fn survey(&self, samples: usize, seed: u64) -> LevelHistogram {
        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(samples, "Scoring")
        } else {
            ProgressManager::hidden(samples)
        };

        let mut histogram = LevelHistogram::new();
        let generator = PatternGenerator::new(self.config, seed);
        histogram.extend(generator.take(samples).map(|pattern| {
            progress.tick();
            score(&pattern, self.config.grid_size)
        }));
        progress.finish();

        histogram
    }

    // Allow print for user feedback when a batch file holds no patterns
    #[allow(clippy::print_stderr)]
    fn score_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read batch file", e))?;

        let entries = parse_batch(&content)?;
        if entries.is_empty() {
            if !self.cli.quiet {
                eprintln!("No patterns found in {}", path.display());
            }
            return Ok(());
        }

        let mut progress = if self.cli.should_show_progress() {
            ProgressManager::new(entries.len(), "Scoring")
        } else {
            ProgressManager::hidden(entries.len())
        };

        for pattern in &entries {
            let stats = PatternStats::analyze(pattern, &self.config);
            let verdict = if stats.is_valid { "valid" } else { "invalid" };
            writeln!(
                out,
                "{}\t{verdict}\t{}\t{}",
                stats.encoded, stats.score, stats.level
            )?;
            progress.tick();
        }
        progress.finish();

        Ok(())
    }
}

/// Decode every pattern line of a batch file
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns an error for the first line that decodes to no indices at all
pub fn parse_batch(content: &str) -> Result<Vec<Vec<i64>>> {
    content
        .lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            let pattern = decode(text);
            if pattern.is_empty() {
                Err(PatternError::InvalidInput {
                    line,
                    content: text.to_string(),
                })
            } else {
                Ok(pattern)
            }
        })
        .collect()
}

fn write_histogram<W: Write>(histogram: &LevelHistogram, out: &mut W) -> Result<()> {
    for (level, count) in histogram.iter() {
        writeln!(
            out,
            "{:>11} {count:>8} {:>6.2}%",
            level.as_str(),
            histogram.fraction(level) * 100.0
        )?;
    }
    writeln!(out, "mean score: {:.2}", histogram.mean_score())?;
    Ok(())
}
