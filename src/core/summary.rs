//! Text report of a `DailyForest`.

use crate::models::task_node::{DailyForest, DayTree, TaskNode};
use crate::utils::formatting::hours;
use std::fmt::Write;

const INDENT: usize = 2;

/// Render every day in ascending date order:
///
/// ```text
/// Date: 2024-01-01
/// Total: 3.00 hs
///   A: 3.00 hs
///     B: 1.00 hs
/// ```
///
/// Every node shows its total (own time plus descendants). An empty forest
/// renders as an empty string.
pub fn render(forest: &DailyForest) -> String {
    let mut out = String::new();

    for (date, day) in &forest.days {
        let _ = writeln!(out, "Date: {}", date.format("%Y-%m-%d"));
        let _ = writeln!(out, "Total: {} hs", hours(day.day_total()));

        for root in day.roots() {
            render_node(&mut out, day, root, INDENT);
        }
        out.push('\n');
    }

    out
}

fn render_node(out: &mut String, day: &DayTree, node: &TaskNode, indent: usize) {
    let _ = writeln!(
        out,
        "{:indent$}{}: {} hs",
        "",
        node.name,
        hours(node.total),
        indent = indent
    );
    for child in day.children(node) {
        render_node(out, day, child, indent + INDENT);
    }
}
