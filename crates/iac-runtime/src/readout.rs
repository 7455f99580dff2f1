//! Named view of an activation vector

use crate::{error::*, topology::{Topology, HUB_SUFFIX}};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Activation of a single named node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedActivation {
    /// Unit name (for hub slots, the owning anchor-pool member)
    pub name: String,
    /// Activation value
    pub activation: f64,
}

/// Final activations keyed by unit name, with hub slots reported separately
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Readout {
    /// Real units in node order
    pub units: Vec<NamedActivation>,
    /// Hub slots in slot order, named after their anchor-pool member
    pub hubs: Vec<NamedActivation>,
}

impl Readout {
    /// Build a readout from a full activation vector
    pub fn new(topology: &Topology, activations: &[f64]) -> Result<Self> {
        if activations.len() != topology.node_count() {
            return Err(IacError::invalid_parameter(
                "activation vector length",
                activations.len().to_string(),
                topology.node_count().to_string(),
            ));
        }

        let (real, hub) = activations.split_at(topology.unit_count());
        let units = topology
            .units()
            .iter()
            .zip(real)
            .map(|(name, &activation)| NamedActivation { name: name.clone(), activation })
            .collect();
        let hubs = topology
            .anchor_units()
            .iter()
            .zip(hub)
            .map(|(name, &activation)| NamedActivation { name: name.clone(), activation })
            .collect();

        Ok(Self { units, hubs })
    }

    /// Activation of a real unit
    pub fn get(&self, unit: &str) -> Option<f64> {
        self.units.iter().find(|u| u.name == unit).map(|u| u.activation)
    }

    /// Activation of the hub slot owned by an anchor-pool unit
    pub fn hub(&self, unit: &str) -> Option<f64> {
        self.hubs.iter().find(|h| h.name == unit).map(|h| h.activation)
    }

    /// Real unit with the highest activation among `candidates`
    pub fn winner<'a, I>(&self, candidates: I) -> Option<&NamedActivation>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter_map(|name| self.units.iter().find(|u| u.name == name))
            .fold(None, |best: Option<&NamedActivation>, u| match best {
                Some(b) if b.activation >= u.activation => Some(b),
                _ => Some(u),
            })
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            writeln!(f, "{}: {}", unit.name, unit.activation)?;
        }
        for hub in &self.hubs {
            writeln!(f, "{}{}: {}", hub.name, HUB_SUFFIX, hub.activation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::TopologyBuilder;

    fn topology() -> Topology {
        TopologyBuilder::new()
            .add_pool(["apple", "pear"])
            .add_pool(["fruit"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_readout_lookup() {
        let topo = topology();
        let readout = Readout::new(&topo, &[0.5, -0.25, 0.75, 0.125, -0.5]).unwrap();

        assert_eq!(readout.get("apple"), Some(0.5));
        assert_eq!(readout.get("fruit"), Some(0.75));
        assert_eq!(readout.get("kiwi"), None);
        assert_eq!(readout.hub("apple"), Some(0.125));
        assert_eq!(readout.hub("pear"), Some(-0.5));
        assert_eq!(readout.hub("fruit"), None);
    }

    #[test]
    fn test_readout_length_mismatch() {
        let topo = topology();
        assert!(Readout::new(&topo, &[0.0; 3]).is_err());
    }

    #[test]
    fn test_readout_winner() {
        let topo = topology();
        let readout = Readout::new(&topo, &[0.5, 0.7, 0.9, 0.0, 0.0]).unwrap();
        let best = readout.winner(["apple", "pear"]).unwrap();
        assert_eq!(best.name, "pear");
        assert!(readout.winner(["kiwi"]).is_none());
    }

    #[test]
    fn test_readout_display() {
        let topo = topology();
        let readout = Readout::new(&topo, &[0.5, -0.25, 0.75, 0.125, -0.5]).unwrap();
        let text = readout.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "apple: 0.5");
        assert_eq!(lines[3], "apple[central]: 0.125");
        assert_eq!(lines[4], "pear[central]: -0.5");
    }
}
