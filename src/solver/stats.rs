use prettytable::{Cell, Row, Table};

use crate::solver::search::SearchStats;

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Covers"),
        Cell::new(&stats.covers.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Max Depth"),
        Cell::new(&stats.max_depth.to_string()),
    ]));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::render_stats_table;
    use crate::solver::search::SearchStats;

    #[test]
    fn renders_all_counters() {
        let stats = SearchStats {
            nodes_visited: 82,
            backtracks: 3,
            covers: 407,
            max_depth: 81,
        };
        let rendered = render_stats_table(&stats);
        assert!(rendered.contains("Nodes Visited"));
        assert!(rendered.contains("82"));
        assert!(rendered.contains("407"));
    }
}
