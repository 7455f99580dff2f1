//! Network structure inspection command

use clap::Args;
use iac_runtime::Topology;
use tracing::info;

use super::NetworkSource;
use crate::error::CliResult;

/// Show the structure of a network
#[derive(Args, Debug)]
pub struct InspectCommand {
    #[command(flatten)]
    pub source: NetworkSource,

    /// Print the full weight matrix
    #[arg(long)]
    pub weights: bool,
}

impl InspectCommand {
    pub fn execute(self) -> CliResult<()> {
        let file = self.source.load()?;
        let network = file.build_network()?;
        let topology = network.topology();
        info!("Inspecting network with {} pools", topology.pool_count());

        print!("{}", summary(topology));
        let p = network.params();
        println!("params: min={} max={} decay={} rest={}", p.min, p.max, p.decay, p.rest);

        if self.weights {
            print!("{}", weight_table(topology));
        }
        Ok(())
    }
}

fn summary(topology: &Topology) -> String {
    let mut out = String::new();
    for (p, pool) in topology.pools().enumerate() {
        let marker = if p == topology.anchor_pool() { " (anchor)" } else { "" };
        out.push_str(&format!("pool {}{}: {}\n", p, marker, pool.join(", ")));
    }

    let (inhibitory, excitatory) = topology
        .weights()
        .edges()
        .fold((0, 0), |(inh, exc), (_, _, w)| if w < 0.0 { (inh + 1, exc) } else { (inh, exc + 1) });

    out.push_str(&format!(
        "nodes: {} ({} units, {} hub slots)\n",
        topology.node_count(),
        topology.unit_count(),
        topology.hub_count()
    ));
    out.push_str(&format!("links: {}\n", topology.link_count()));
    out.push_str(&format!("edges: {} inhibitory, {} excitatory\n", inhibitory, excitatory));
    out
}

fn weight_table(topology: &Topology) -> String {
    let labels: Vec<String> = (0..topology.node_count())
        .filter_map(|node| topology.node_label(node))
        .collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (i, label) in labels.iter().enumerate() {
        let row: Vec<String> = topology
            .weights()
            .row(i)
            .iter()
            .map(|w| format!("{:>3}", w))
            .collect();
        out.push_str(&format!("{:<width$} {}\n", label, row.join(" "), width = width));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use iac_runtime::scenario;

    #[test]
    fn test_summary_counts() {
        let topo = scenario::reference_topology().unwrap();
        let text = summary(&topo);
        assert!(text.contains("pool 0 (anchor): apple, pear"));
        assert!(text.contains("nodes: 17 (11 units, 6 hub slots)"));
        // 15 + 1 + 3 within pools, 15 within the hub; 6 owner edges + 12 target edges
        assert!(text.contains("edges: 34 inhibitory, 18 excitatory"));
    }

    #[test]
    fn test_weight_table_shape() {
        let topo = scenario::reference_topology().unwrap();
        let table = weight_table(&topo);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 17);
        assert!(lines[16].starts_with("milky way[central]"));
    }
}
