//! Command implementations and argument parsing for the twinspan CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};
use twinspan_core::{
    Edge, EngineError, Report, SerializeError, SpanningTree, TwinspanBuilder,
    ValidationError, Vertex, VertexLabels,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "twinspan",
    about = "Compute a graph's minimum spanning tree with Prim and Kruskal and compare them."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load an edge list and print both spanning trees.
    Compute(ComputeCommand),
    /// Load an edge list and write it back out in normalised form.
    Rewrite(RewriteCommand),
}

/// Options accepted by the `compute` command.
#[derive(Debug, Args, Clone)]
pub struct ComputeCommand {
    /// CSV edge list with one `u,v,w` row per edge.
    pub path: PathBuf,

    /// Number of vertices in the graph.
    #[arg(long, short = 'n', value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Display label for a vertex, written as `VERTEX=NAME`. Repeatable.
    #[arg(long = "label", value_name = "VERTEX=NAME")]
    pub labels: Vec<String>,
}

/// Options accepted by the `rewrite` command.
#[derive(Debug, Args, Clone)]
pub struct RewriteCommand {
    /// CSV edge list to read.
    pub input: PathBuf,

    /// Destination for the normalised edge list.
    pub output: PathBuf,

    /// Number of vertices in the graph.
    #[arg(long, short = 'n', value_parser = clap::value_parser!(usize))]
    pub vertices: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A `--label` argument was not of the form `VERTEX=NAME`.
    #[error("invalid label `{raw}`: expected `VERTEX=NAME` with a numeric vertex")]
    InvalidLabel {
        /// Argument as supplied on the command line.
        raw: String,
    },
    /// The graph configuration was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Reading or writing an edge file failed.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    /// The spanning tree computation failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidLabel { .. } => "CLI_INVALID_LABEL",
            Self::Validation(err) => err.code().as_str(),
            Self::Serialize(err) => err.code().as_str(),
            Self::Engine(err) => err.code().as_str(),
        }
    }

    /// Returns the code of the error nested inside an engine or serializer
    /// failure, if any.
    #[must_use]
    pub const fn detail_code(&self) -> Option<&'static str> {
        match self {
            Self::Engine(err) => match (err.validation_code(), err.mst_code()) {
                (Some(code), _) => Some(code.as_str()),
                (None, Some(code)) => Some(code.as_str()),
                (None, None) => None,
            },
            Self::Serialize(err) => match err.validation_code() {
                Some(code) => Some(code.as_str()),
                None => None,
            },
            Self::InvalidLabel { .. } | Self::Validation(_) => None,
        }
    }
}

/// Result of executing a CLI command.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Both engines produced a spanning tree.
    Computed(Report),
    /// An edge list was normalised and written out.
    Rewritten {
        /// Destination file.
        output: PathBuf,
        /// Number of edges written.
        edges: usize,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use twinspan_cli::cli::{Cli, Command, ComputeCommand, Outcome, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,1,1\n1,2,2\n2,3,3\n0,3,10\n")?;
/// let cli = Cli {
///     command: Command::Compute(ComputeCommand {
///         path: file.path().to_path_buf(),
///         vertices: 4,
///         labels: vec!["0=A".into()],
///     }),
/// };
/// let Outcome::Computed(report) = run_cli(cli)? else {
///     panic!("compute yields a report");
/// };
/// assert_eq!(report.prim_weight(), 6);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Outcome, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Compute(command) => {
            span.record("command", field::display("compute"));
            run_compute(command)
        }
        Command::Rewrite(command) => {
            span.record("command", field::display("rewrite"));
            run_rewrite(command)
        }
    }
}

#[instrument(
    name = "cli.compute",
    err,
    skip(command),
    fields(path = %command.path.display(), vertices = command.vertices, labels = command.labels.len()),
)]
pub(super) fn run_compute(command: ComputeCommand) -> Result<Outcome, CliError> {
    let ComputeCommand {
        path,
        vertices,
        labels,
    } = command;
    let mut builder = TwinspanBuilder::new().with_vertex_count(vertices);
    for raw in &labels {
        let (vertex, name) = parse_label(raw)?;
        builder = builder.with_label(vertex, name);
    }
    let mut twinspan = builder.build()?;
    twinspan.import_edges(&path)?;
    let report = twinspan.compute_mst()?;
    if !report.is_consistent() {
        warn!(
            prim_weight = report.prim_weight(),
            kruskal_weight = report.kruskal_weight(),
            "engines reported different weights"
        );
    }
    info!(
        edges = twinspan.edges().len(),
        weight = report.kruskal_weight(),
        "command completed"
    );
    Ok(Outcome::Computed(report))
}

#[instrument(
    name = "cli.rewrite",
    err,
    skip(command),
    fields(input = %command.input.display(), output = %command.output.display()),
)]
pub(super) fn run_rewrite(command: RewriteCommand) -> Result<Outcome, CliError> {
    let RewriteCommand {
        input,
        output,
        vertices,
    } = command;
    let mut twinspan = TwinspanBuilder::new().with_vertex_count(vertices).build()?;
    twinspan.import_edges(&input)?;
    twinspan.export_edges(&output)?;
    let edges = twinspan.edges().len();
    info!(edges, "command completed");
    Ok(Outcome::Rewritten { output, edges })
}

/// Splits a `VERTEX=NAME` label argument.
pub(super) fn parse_label(raw: &str) -> Result<(Vertex, &str), CliError> {
    let invalid = || CliError::InvalidLabel {
        raw: raw.to_owned(),
    };
    let (raw_vertex, name) = raw.split_once('=').ok_or_else(invalid)?;
    let vertex = raw_vertex.trim().parse().map_err(|_| invalid())?;
    Ok((vertex, name.trim()))
}

/// Renders `outcome` to `writer` in a human-readable text format.
///
/// Tree edges are printed one per line as `u<TAB>v<TAB>w`, using vertex labels
/// where they exist.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use twinspan_cli::cli::{Outcome, render_outcome};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let outcome = Outcome::Rewritten { output: PathBuf::from("out.csv"), edges: 3 };
/// let mut buffer = Vec::new();
/// render_outcome(&outcome, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "wrote 3 edges to out.csv\n");
/// # Ok(())
/// # }
/// ```
pub fn render_outcome(outcome: &Outcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Computed(report) => {
            render_tree(
                &mut writer,
                report.prim_tree(),
                report.prim_accuracy(),
                report.labels(),
            )?;
            render_tree(
                &mut writer,
                report.kruskal_tree(),
                report.kruskal_accuracy(),
                report.labels(),
            )?;
            if !report.is_consistent() {
                writeln!(writer, "warning: engine weights differ")?;
            }
        }
        Outcome::Rewritten { output, edges } => {
            writeln!(writer, "wrote {edges} edges to {}", output.display())?;
        }
    }
    Ok(())
}

fn render_tree(
    writer: &mut impl Write,
    tree: &SpanningTree,
    accuracy: f64,
    labels: &VertexLabels,
) -> io::Result<()> {
    writeln!(writer, "engine: {}", tree.algorithm())?;
    writeln!(writer, "weight: {}", tree.total_weight())?;
    writeln!(writer, "accuracy: {accuracy:.2}%")?;
    for edge in tree.edges() {
        render_edge(writer, edge, labels)?;
    }
    Ok(())
}

fn render_edge(writer: &mut impl Write, edge: &Edge, labels: &VertexLabels) -> io::Result<()> {
    writeln!(
        writer,
        "{}\t{}\t{}",
        labels.label(edge.source()),
        labels.label(edge.target()),
        edge.weight()
    )
}
