//! IAC network: a topology paired with its activation parameters

use crate::{
    error::*,
    params::ActivationParams,
    readout::Readout,
    simulation::{SimulationEngine, SimulationParams, SimulationResult},
    topology::{Topology, TopologyBuilder},
};

/// Fully built IAC network, immutable once constructed
#[derive(Debug, Clone)]
pub struct IacNetwork {
    topology: Topology,
    params: ActivationParams,
}

impl IacNetwork {
    /// Pair a topology with validated activation parameters
    pub fn new(topology: Topology, params: ActivationParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { topology, params })
    }

    /// Create a network builder
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Network topology
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Activation parameters
    pub fn params(&self) -> &ActivationParams {
        &self.params
    }

    /// Create an engine with every node at rest
    pub fn engine(&self) -> Result<SimulationEngine<'_>> {
        SimulationEngine::new(&self.topology, self.params)
    }

    /// Run from rest with `inputs` held for `cycles` cycles
    pub fn simulate<I, S>(&self, inputs: I, cycles: u64) -> Result<Readout>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Ok(self.simulate_with(inputs, &SimulationParams::new(cycles))?.readout)
    }

    /// Run from rest with explicit simulation parameters
    pub fn simulate_with<I, S>(&self, inputs: I, params: &SimulationParams) -> Result<SimulationResult>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        self.engine()?.run(inputs, params)
    }
}

/// Builder for constructing IAC networks
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    params: ActivationParams,
    topology: TopologyBuilder,
}

impl NetworkBuilder {
    /// Create a new network builder with default activation parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing topology builder
    pub fn from_topology_builder(topology: TopologyBuilder) -> Self {
        Self {
            params: ActivationParams::default(),
            topology,
        }
    }

    /// Set activation parameters
    pub fn with_params(mut self, params: ActivationParams) -> Self {
        self.params = params;
        self
    }

    /// Add a pool of mutually inhibitory units
    pub fn add_pool<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topology = self.topology.add_pool(units);
        self
    }

    /// Declare excitatory links from one anchor-pool unit
    pub fn add_links<I, S>(mut self, source: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topology = self.topology.add_links(source, targets);
        self
    }

    /// Declare links from a `source -> targets` mapping; may be repeated
    pub fn add_connections<M, K, I, S>(mut self, links: M) -> Self
    where
        M: IntoIterator<Item = (K, I)>,
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topology = self.topology.add_link_map(links);
        self
    }

    /// Build the network
    pub fn build(self) -> Result<IacNetwork> {
        self.params.validate()?;
        IacNetwork::new(self.topology.build()?, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_network_builder() {
        let network = NetworkBuilder::new()
            .add_pool(["cat", "dog"])
            .add_pool(["meow", "woof"])
            .add_links("cat", ["meow"])
            .add_links("dog", ["woof"])
            .build()
            .unwrap();

        assert_eq!(network.topology().node_count(), 6);
        assert_eq!(network.topology().link_count(), 2);
        assert_eq!(network.params(), &ActivationParams::default());
    }

    #[test]
    fn test_repeated_connections() {
        let mut first = BTreeMap::new();
        first.insert("cat", vec!["meow"]);
        let mut second = BTreeMap::new();
        second.insert("dog", vec!["woof"]);

        let network = NetworkBuilder::new()
            .add_pool(["cat", "dog"])
            .add_pool(["meow", "woof"])
            .add_connections(first)
            .add_connections(second)
            .build()
            .unwrap();
        assert_eq!(network.topology().link_count(), 2);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = ActivationParams {
            decay: -1.0,
            ..ActivationParams::default()
        };
        let err = NetworkBuilder::new()
            .with_params(params)
            .add_pool(["a"])
            .build()
            .unwrap_err();
        assert!(matches!(err, IacError::InvalidParameter { .. }));
    }

    #[test]
    fn test_simulate_retrieves_associate() {
        let network = NetworkBuilder::new()
            .add_pool(["cat", "dog"])
            .add_pool(["meow", "woof"])
            .add_links("cat", ["meow"])
            .add_links("dog", ["woof"])
            .build()
            .unwrap();

        let readout = network.simulate([("cat", 1.0)], 100).unwrap();
        let meow = readout.get("meow").unwrap();
        let woof = readout.get("woof").unwrap();
        assert!(meow > 0.0);
        assert!(meow > woof);
        assert!(readout.get("dog").unwrap() < 0.0);
        assert_eq!(readout.winner(["meow", "woof"]).unwrap().name, "meow");
    }

    #[test]
    fn test_simulations_start_from_rest() {
        let network = NetworkBuilder::new()
            .add_pool(["cat", "dog"])
            .add_pool(["meow", "woof"])
            .add_links("cat", ["meow"])
            .build()
            .unwrap();

        let a = network.simulate([("cat", 1.0)], 30).unwrap();
        let b = network.simulate([("cat", 1.0)], 30).unwrap();
        assert_eq!(a, b);
    }
}
