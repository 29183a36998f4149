use graph_centrality_core::{CentralityScore, Path, VertexId};
use serde_json::json;

use crate::settings::Format;

/// Result of one query, ready to print.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Top(Vec<VertexId>),
    Scores(Vec<CentralityScore>),
    Distance {
        from: VertexId,
        to: VertexId,
        hops: u32,
    },
    Paths {
        from: VertexId,
        to: VertexId,
        paths: Vec<Path>,
    },
}

pub fn render(report: &Report, format: Format) -> String {
    match format {
        Format::Text => render_text(report),
        Format::Json => render_json(report).to_string(),
    }
}

fn render_text(report: &Report) -> String {
    match report {
        Report::Top(nodes) => format!("{:?}", nodes),
        Report::Scores(scores) => {
            let mut out = format!("{:>8} {:>12}\n", "vertex", "betweenness");
            out.push_str(&format!("{:->8} {:->12}", "", ""));
            for s in scores {
                out.push_str(&format!("\n{:>8} {:>12.4}", s.vertex, s.score));
            }
            out
        }
        Report::Distance { hops, .. } => hops.to_string(),
        Report::Paths { paths, .. } => paths
            .iter()
            .map(|p| {
                p.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ")
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_json(report: &Report) -> serde_json::Value {
    match report {
        Report::Top(nodes) => json!({ "top": nodes }),
        Report::Scores(scores) => json!({
            "scores": scores
                .iter()
                .map(|s| json!({ "vertex": s.vertex, "betweenness": s.score }))
                .collect::<Vec<_>>()
        }),
        Report::Distance { from, to, hops } => json!({ "from": from, "to": to, "distance": hops }),
        Report::Paths { from, to, paths } => json!({ "from": from, "to": to, "paths": paths }),
    }
}
