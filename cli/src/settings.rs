//! Command-line settings.
//!
//! Every setting has a default so a bare invocation runs the demonstration
//! graph and prints its top-centrality vertices.

use anyhow::{bail, Context, Result};
use graph_centrality_core::{parse_vertex, Graph, VertexId};

/// Demonstration graph: 6 vertices, 8 edges.
pub const DEMO_VERTICES: &str = "1,2,3,4,5,6";
pub const DEMO_EDGES: &str = "1-2,1-5,2-3,2-5,3-4,4-5,4-6,3-6";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Top,
    Scores,
    Distance { from: VertexId, to: VertexId },
    Paths { from: VertexId, to: VertexId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Print usage and exit without building a graph.
    pub help: bool,
    pub command: Command,
    pub format: Format,
    /// Comma-separated vertex tokens.
    pub vertices: String,
    /// Comma-separated `u-v` edge tokens.
    pub edges: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            help: false,
            command: Command::Top,
            format: Format::Text,
            vertices: DEMO_VERTICES.to_string(),
            edges: DEMO_EDGES.to_string(),
        }
    }
}

impl Settings {
    /// Parse arguments (program name excluded).
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut settings = Settings::default();
        let mut positional: Vec<String> = Vec::new();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--vertices" => settings.vertices = flag_value(&mut args, "--vertices")?,
                "--edges" => settings.edges = flag_value(&mut args, "--edges")?,
                "--format" => {
                    settings.format = match flag_value(&mut args, "--format")?.as_str() {
                        "text" => Format::Text,
                        "json" => Format::Json,
                        other => bail!("invalid --format '{}', use 'text' or 'json'", other),
                    }
                }
                "help" | "--help" | "-h" => {
                    settings.help = true;
                    return Ok(settings);
                }
                flag if flag.starts_with("--") => bail!("unknown flag '{}'", flag),
                other => positional.push(other.to_string()),
            }
        }

        settings.command = match positional.first().map(String::as_str) {
            None | Some("top") => {
                expect_arity(&positional, 1)?;
                Command::Top
            }
            Some("scores") => {
                expect_arity(&positional, 1)?;
                Command::Scores
            }
            Some("distance") => {
                let (from, to) = vertex_pair(&positional)?;
                Command::Distance { from, to }
            }
            Some("paths") => {
                let (from, to) = vertex_pair(&positional)?;
                Command::Paths { from, to }
            }
            Some(other) => bail!("unknown mode '{}', use --help for options", other),
        };

        Ok(settings)
    }

    /// Build and validate the graph described by `vertices` and `edges`.
    pub fn graph(&self) -> Result<Graph> {
        let graph = Graph::parse(split_list(&self.vertices), split_list(&self.edges))
            .context("invalid graph")?;
        Ok(graph)
    }
}

pub fn usage() -> &'static str {
    "Usage: graph-centrality [mode] [--vertices LIST] [--edges LIST] [--format text|json]

Modes:
  top               Vertices tied at maximum betweenness centrality (default)
  scores            Betweenness centrality of every vertex
  distance A B      Shortest-path length between A and B
  paths A B         Every shortest path between A and B

Graph (defaults to the 6-vertex demonstration graph):
  --vertices 1,2,3  Comma-separated integer vertex identifiers
  --edges 1-2,2-3   Comma-separated undirected edges

Logging goes to stderr; set RUST_LOG=debug for per-vertex scores."
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("{} requires a value", flag))
}

fn expect_arity(positional: &[String], n: usize) -> Result<()> {
    if positional.len() > n {
        bail!(
            "mode '{}' takes {} argument(s), got {}",
            positional[0],
            n - 1,
            positional.len() - 1
        );
    }
    Ok(())
}

fn vertex_pair(positional: &[String]) -> Result<(VertexId, VertexId)> {
    if positional.len() != 3 {
        bail!("mode '{}' takes 2 arguments: A B", positional[0]);
    }
    Ok((parse_vertex(&positional[1])?, parse_vertex(&positional[2])?))
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}
