//! Pool and hub topology of an IAC network
//!
//! Nodes are laid out as every real unit in discovery order (pool by pool,
//! member by member) followed by one hub slot per member of the anchor pool.
//! The anchor pool is the first pool of maximum size; hub slot `h` belongs to
//! its `h`-th member.
//!
//! ```text
//! | pool 0 units | pool 1 units | ... | hub 0 .. hub H-1 |
//! ```

use crate::{error::*, weights::WeightMatrix};
use std::collections::{HashMap, HashSet};
use std::ops::Range;

/// Weight of every within-pool and within-hub connection
pub const INHIBITORY_WEIGHT: f64 = -1.0;

/// Weight of both hub-mediated legs of an excitatory link
pub const EXCITATORY_WEIGHT: f64 = 1.0;

/// Suffix used when naming a hub slot after its anchor-pool member
pub const HUB_SUFFIX: &str = "[central]";

/// Immutable network structure: weights plus the name and pool layout
#[derive(Debug, Clone)]
pub struct Topology {
    weights: WeightMatrix,
    /// Real unit names in node order
    units: Vec<String>,
    /// Unit name to node index
    index: HashMap<String, usize>,
    /// Node range occupied by each pool
    pools: Vec<Range<usize>>,
    anchor_pool: usize,
    /// Number of excitatory links realized through the hub
    link_count: usize,
}

impl Topology {
    /// Create a builder
    pub fn builder() -> TopologyBuilder {
        TopologyBuilder::new()
    }

    /// Connection weights over all nodes
    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Total node count: real units plus hub slots
    pub fn node_count(&self) -> usize {
        self.weights.size()
    }

    /// Number of real units
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of hub slots, equal to the size of the largest pool
    pub fn hub_count(&self) -> usize {
        self.node_count() - self.unit_count()
    }

    /// Number of caller-supplied pools
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Real unit names in node order
    pub fn units(&self) -> &[String] {
        &self.units
    }

    /// Members of pool `pool`
    pub fn pool(&self, pool: usize) -> Option<&[String]> {
        self.pools.get(pool).map(|range| &self.units[range.clone()])
    }

    /// Node range occupied by pool `pool`
    pub fn pool_range(&self, pool: usize) -> Option<Range<usize>> {
        self.pools.get(pool).cloned()
    }

    /// Iterate over all pools in declaration order
    pub fn pools(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.pools.iter().map(move |range| &self.units[range.clone()])
    }

    /// Index of the anchor pool
    pub fn anchor_pool(&self) -> usize {
        self.anchor_pool
    }

    /// Members of the anchor pool; member `h` owns hub slot `h`
    pub fn anchor_units(&self) -> &[String] {
        &self.units[self.pools[self.anchor_pool].clone()]
    }

    /// Number of excitatory links declared
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Node index of a unit
    pub fn unit_index(&self, unit: &str) -> Result<usize> {
        self.index
            .get(unit)
            .copied()
            .ok_or_else(|| IacError::unknown_unit(unit))
    }

    /// Check whether a unit exists
    pub fn contains(&self, unit: &str) -> bool {
        self.index.contains_key(unit)
    }

    /// Node index of hub slot `slot`
    pub fn hub_index(&self, slot: usize) -> Option<usize> {
        (slot < self.hub_count()).then(|| self.unit_count() + slot)
    }

    /// Hub slot owned by an anchor-pool unit
    pub fn hub_slot_of(&self, unit: &str) -> Option<usize> {
        let range = &self.pools[self.anchor_pool];
        self.index
            .get(unit)
            .filter(|&&i| range.contains(&i))
            .map(|&i| i - range.start)
    }

    /// Whether node `node` is a hub slot
    pub fn is_hub(&self, node: usize) -> bool {
        node >= self.unit_count() && node < self.node_count()
    }

    /// Display name of a node: the unit name, or `<anchor member>[central]`
    pub fn node_label(&self, node: usize) -> Option<String> {
        if node < self.unit_count() {
            Some(self.units[node].clone())
        } else if self.is_hub(node) {
            let slot = node - self.unit_count();
            Some(format!("{}{}", self.anchor_units()[slot], HUB_SUFFIX))
        } else {
            None
        }
    }

    /// Resolve named inputs to node indices.
    ///
    /// A unit named more than once keeps the last value.
    pub fn resolve_inputs<I, S>(&self, inputs: I) -> Result<Vec<(usize, f64)>>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut resolved: Vec<(usize, f64)> = Vec::new();
        for (unit, value) in inputs {
            let node = self.unit_index(unit.as_ref())?;
            match resolved.iter_mut().find(|(n, _)| *n == node) {
                Some(entry) => entry.1 = value,
                None => resolved.push((node, value)),
            }
        }
        Ok(resolved)
    }
}

/// Builder for constructing an immutable [`Topology`]
#[derive(Debug, Clone, Default)]
pub struct TopologyBuilder {
    pools: Vec<Vec<String>>,
    links: Vec<(String, String)>,
}

impl TopologyBuilder {
    /// Create a new topology builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pool of mutually inhibitory units
    pub fn add_pool<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pools.push(units.into_iter().map(Into::into).collect());
        self
    }

    /// Add several pools at once
    pub fn add_pools<P, I, S>(self, pools: P) -> Self
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        pools.into_iter().fold(self, |builder, pool| builder.add_pool(pool))
    }

    /// Declare an excitatory link from an anchor-pool unit to any other unit
    pub fn add_link(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.links.push((source.into(), target.into()));
        self
    }

    /// Declare excitatory links from one source to several targets
    pub fn add_links<I, S>(mut self, source: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let source = source.into();
        for target in targets {
            self.links.push((source.clone(), target.into()));
        }
        self
    }

    /// Declare links from a `source -> targets` mapping
    pub fn add_link_map<M, K, I, S>(self, links: M) -> Self
    where
        M: IntoIterator<Item = (K, I)>,
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        links
            .into_iter()
            .fold(self, |builder, (source, targets)| builder.add_links(source, targets))
    }

    /// Build the topology
    pub fn build(self) -> Result<Topology> {
        if self.pools.is_empty() {
            return Err(IacError::invalid_config("at least one pool is required"));
        }
        if let Some(empty) = self.pools.iter().position(|pool| pool.is_empty()) {
            return Err(IacError::invalid_config(format!("pool {} is empty", empty)));
        }

        // Node indices in discovery order; a unit may belong to one pool only
        let mut units = Vec::new();
        let mut index = HashMap::new();
        let mut owner: HashMap<&str, usize> = HashMap::new();
        let mut ranges = Vec::with_capacity(self.pools.len());

        for (p, pool) in self.pools.iter().enumerate() {
            let start = units.len();
            for unit in pool {
                if let Some(&first_pool) = owner.get(unit.as_str()) {
                    return Err(IacError::duplicate_unit(unit.as_str(), first_pool, p));
                }
                owner.insert(unit.as_str(), p);
                index.insert(unit.clone(), units.len());
                units.push(unit.clone());
            }
            ranges.push(start..units.len());
        }

        // First pool of maximum size
        let mut anchor_pool = 0;
        for (p, range) in ranges.iter().enumerate() {
            if range.len() > ranges[anchor_pool].len() {
                anchor_pool = p;
            }
        }

        let hub_count = ranges[anchor_pool].len();
        let hub_offset = units.len();
        let mut weights = WeightMatrix::zeros(hub_offset + hub_count);

        // Within-pool inhibition
        for range in &ranges {
            connect_all(&mut weights, range.clone(), INHIBITORY_WEIGHT)?;
        }

        // Within-hub inhibition
        connect_all(&mut weights, hub_offset..hub_offset + hub_count, INHIBITORY_WEIGHT)?;

        // Hub-mediated excitation
        let anchor = ranges[anchor_pool].clone();
        let mut seen = HashSet::new();
        for (source, target) in &self.links {
            let s = *index
                .get(source)
                .ok_or_else(|| IacError::unknown_unit(source.as_str()))?;
            let t = *index
                .get(target)
                .ok_or_else(|| IacError::unknown_unit(target.as_str()))?;
            if !anchor.contains(&s) {
                return Err(IacError::invalid_link_source(source.as_str(), anchor_pool));
            }
            if s == t {
                return Err(IacError::self_connection(source.as_str()));
            }
            if !seen.insert((s, t)) {
                log::warn!("Excitatory link {} -> {} declared more than once", source, target);
            }

            let hub = hub_offset + (s - anchor.start);
            weights.set_symmetric(s, hub, EXCITATORY_WEIGHT)?;
            weights.set_symmetric(hub, t, EXCITATORY_WEIGHT)?;
        }

        log::debug!(
            "Built IAC topology: {} units in {} pools, {} hub slots, {} links, {} edges",
            units.len(),
            ranges.len(),
            hub_count,
            self.links.len(),
            weights.edges().count()
        );

        Ok(Topology {
            weights,
            units,
            index,
            pools: ranges,
            anchor_pool,
            link_count: self.links.len(),
        })
    }
}

/// Connect every unordered pair of distinct nodes in `range` with `weight`
fn connect_all(weights: &mut WeightMatrix, range: Range<usize>, weight: f64) -> Result<()> {
    for i in range.clone() {
        for j in (i + 1)..range.end {
            weights.set_symmetric(i, j, weight)?;
        }
    }
    Ok(())
}
