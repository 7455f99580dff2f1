//! Reference vocabulary: foods, their healthiness and their category
//!
//! Six foods form the anchor pool; each is linked through its hub slot to
//! one healthiness label and one category label.

use crate::{
    error::*,
    network::{IacNetwork, NetworkBuilder},
    params::ActivationParams,
    topology::{Topology, TopologyBuilder},
};

/// Pools of the reference network, anchor pool first
pub const REFERENCE_POOLS: [&[&str]; 3] = [
    &["apple", "pear", "zucchini", "broccoli", "snickers", "milky way"],
    &["healthy", "junk"],
    &["candy", "fruit", "vegetable"],
];

/// Excitatory links of the reference network
pub const REFERENCE_LINKS: [(&str, &[&str]); 6] = [
    ("apple", &["healthy", "fruit"]),
    ("pear", &["healthy", "fruit"]),
    ("milky way", &["junk", "candy"]),
    ("zucchini", &["healthy", "vegetable"]),
    ("broccoli", &["healthy", "vegetable"]),
    ("snickers", &["junk", "candy"]),
];

/// Input of the reference run
pub const REFERENCE_INPUT: (&str, f64) = ("apple", 1.0);

/// Cycle count of the reference run
pub const REFERENCE_CYCLES: u64 = 200;

fn reference_builder() -> TopologyBuilder {
    TopologyBuilder::new()
        .add_pools(REFERENCE_POOLS.iter().map(|pool| pool.iter().copied()))
        .add_link_map(
            REFERENCE_LINKS
                .iter()
                .map(|(source, targets)| (*source, targets.iter().copied())),
        )
}

/// Reference topology
pub fn reference_topology() -> Result<Topology> {
    reference_builder().build()
}

/// Reference network with the default activation parameters
pub fn reference_network() -> Result<IacNetwork> {
    NetworkBuilder::from_topology_builder(reference_builder())
        .with_params(ActivationParams::default())
        .build()
}
