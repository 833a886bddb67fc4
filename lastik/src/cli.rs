use clap::{builder::RangedU64ValueParser, Parser, Subcommand};
use lastik_graph::RenderOptions;
use std::path::PathBuf;

/// The largest number of points that can be sampled along a curve.
pub const MAX_SAMPLES: u64 = 100_000;

#[derive(Parser)]
#[command(name = "lastik")]
#[command(author, version, about = "Strassen's decomposition drawn as colliding and cancelling Lissajous glyphs")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory the images are written to
    #[arg(long, short, global = true, env = "LASTIK_OUT", default_value = "lastik-out")]
    pub out: PathBuf,

    /// Number of points sampled along each curve
    #[arg(
        long,
        global = true,
        default_value_t = 400,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_SAMPLES),
    )]
    pub samples: usize,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the render options selected on the command line.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default().samples(self.samples)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate and draw the scenes of Strassen's decomposition
    Scenes {
        /// Scenes to evaluate (P, Q, R or S); all of them if omitted
        scenes: Vec<String>,

        /// Only print the summaries, without drawing
        #[arg(long)]
        no_render: bool,
    },

    /// Evaluate a sum of products written in term notation, such as `a * (f - h) + (a + b) * h`
    ///
    /// Without an expression, reads one expression per line from stdin, or starts an interactive
    /// session if stdin is a terminal.
    Eval {
        /// The expression to evaluate
        expr: Option<String>,

        /// Draw the evaluation of the expression to this file
        #[arg(long)]
        render: Option<PathBuf>,
    },

    /// Draw catalog shapes side by side
    Gallery {
        /// Shape ids to draw; a default selection if omitted
        ids: Vec<String>,
    },

    /// Interactively explore a single Lissajous curve
    ///
    /// Each line of input is `a b phase_pi [t_start_pi t_end_pi]`; values left out keep their
    /// previous value.
    Explore,
}
