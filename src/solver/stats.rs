use prettytable::{Cell, Row, Table};

/// Counters accumulated over one `solve` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search-tree nodes entered.
    pub nodes_visited: u64,
    /// Branches abandoned after exhausting a value.
    pub backtracks: u64,
    /// Calls to the propagator's revise operation.
    pub revise_calls: u64,
    /// Domain values removed by propagation.
    pub values_pruned: u64,
}

/// Renders the counters as a two-column table for log output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Revise Calls"),
        Cell::new(&stats.revise_calls.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Values Pruned"),
        Cell::new(&stats.values_pruned.to_string()),
    ]));
    table.to_string()
}
