use anyhow::{Context, Result};
use graph_centrality_core::{
    all_shortest_paths, centrality_scores, distance, top_centrality_nodes, Graph,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod output;
mod settings;

use output::{render, Report};
use settings::{Command, Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_args(std::env::args().skip(1))?;
    if settings.help {
        println!("{}", settings::usage());
        return Ok(());
    }

    let graph = settings.graph()?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let report = run(&settings.command, &graph)?;
    println!("{}", render(&report, settings.format));
    Ok(())
}

fn run(command: &Command, graph: &Graph) -> Result<Report> {
    let report = match *command {
        Command::Top => Report::Top(
            top_centrality_nodes(graph).context("top centrality query failed")?,
        ),
        Command::Scores => {
            Report::Scores(centrality_scores(graph).context("centrality query failed")?)
        }
        Command::Distance { from, to } => Report::Distance {
            from,
            to,
            hops: distance(&graph.adjacency(), from, to).context("distance query failed")?,
        },
        Command::Paths { from, to } => Report::Paths {
            from,
            to,
            paths: all_shortest_paths(&graph.adjacency(), from, to)
                .context("shortest path query failed")?,
        },
    };
    Ok(report)
}
