use serde_json::json;

use crate::graph::session::Session;

/// Serializes the session's node and edge collections as the JSON snapshot
/// handed to the renderer. Edges carry `arrows: "to"` for vis-network style
/// consumers; the snapshot is always a full replacement, never a diff.
pub fn render_json(session: &Session, pretty: bool) -> serde_json::Result<String> {
    let edges: Vec<serde_json::Value> = session
        .edges()
        .iter()
        .map(|edge| json!({"from": edge.from, "to": edge.to, "arrows": "to"}))
        .collect();

    let snapshot = json!({
        "nodes": session.nodes(),
        "edges": edges,
    });

    if pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    }
}

/// Renders the session as a Graphviz digraph.
pub fn render_dot(session: &Session) -> String {
    let mut out = String::from("digraph coursegraph {\n");
    for node in session.nodes() {
        let escaped = escape_dot_label(&node.label);
        out.push_str(&format!("  \"{}\" [label=\"{}\"];\n", node.id, escaped));
    }
    for edge in session.edges() {
        out.push_str(&format!("  \"{}\" -> \"{}\";\n", edge.from, edge.to));
    }
    out.push_str("}\n");
    out
}

fn escape_dot_label(label: &str) -> String {
    label.replace('"', "\\\"")
}
