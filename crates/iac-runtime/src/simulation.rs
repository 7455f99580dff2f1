//! Cycle dynamics for IAC networks
//!
//! Each cycle computes the net input of every node from the rectified
//! activations of its neighbours, adds the external input, and moves every
//! node with non-zero net input by the bounded-integrator rule in
//! [`ActivationParams::delta`]. All nodes update from the same snapshot.

use crate::{
    error::*,
    params::ActivationParams,
    readout::Readout,
    topology::Topology,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integration step size applied every cycle
pub const DEFAULT_RATE: f64 = 0.1;

/// Simulation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    /// Number of cycles to run
    pub cycles: u64,
    /// Integration step size
    pub rate: f64,
    /// Write each input value into its unit's activation before the first cycle
    pub seed_inputs: bool,
    /// Record the full activation vector after every cycle
    pub record_trace: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            cycles: 100,
            rate: DEFAULT_RATE,
            seed_inputs: false,
            record_trace: false,
        }
    }
}

impl SimulationParams {
    /// Create parameters for `cycles` cycles at the default rate
    pub fn new(cycles: u64) -> Self {
        Self {
            cycles,
            ..Default::default()
        }
    }

    /// Seed unit activations with their input values
    pub fn with_seed_inputs(mut self, enabled: bool) -> Self {
        self.seed_inputs = enabled;
        self
    }

    /// Enable per-cycle activation recording
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.record_trace = enabled;
        self
    }

    /// Override the integration step size
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(IacError::invalid_parameter(
                "rate",
                self.rate.to_string(),
                "a finite number > 0.0",
            ));
        }
        Ok(())
    }
}

/// Activation vectors recorded after each cycle
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivationTrace {
    /// Node labels, in node order
    pub labels: Vec<String>,
    /// One activation vector per executed cycle
    pub cycles: Vec<Vec<f64>>,
}

impl ActivationTrace {
    fn new(topology: &Topology) -> Self {
        let labels = (0..topology.node_count())
            .filter_map(|node| topology.node_label(node))
            .collect();
        Self {
            labels,
            cycles: Vec::new(),
        }
    }

    /// Number of recorded cycles
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Activation history of one node
    pub fn node_series(&self, node: usize) -> Vec<f64> {
        self.cycles
            .iter()
            .filter_map(|snapshot| snapshot.get(node).copied())
            .collect()
    }
}

/// Simulation results
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Final activation vector over all nodes
    pub activations: Vec<f64>,
    /// Final activations by name
    pub readout: Readout,
    /// Number of cycles executed in this run
    pub cycles_executed: u64,
    /// Largest absolute per-node change during the last cycle
    pub last_max_change: f64,
    /// Per-cycle activations, when recorded
    pub trace: Option<ActivationTrace>,
}

/// Simulation engine owning the activation vector of one network run.
///
/// The topology is only borrowed; activations persist across successive
/// [`SimulationEngine::run`] calls until [`SimulationEngine::reset`].
#[derive(Debug)]
pub struct SimulationEngine<'t> {
    topology: &'t Topology,
    params: ActivationParams,
    activations: Vec<f64>,
    /// Net input scratch buffer
    net: Vec<f64>,
    cycles_run: u64,
}

impl<'t> SimulationEngine<'t> {
    /// Create an engine with every node at rest
    pub fn new(topology: &'t Topology, params: ActivationParams) -> Result<Self> {
        params.validate()?;
        let n = topology.node_count();
        Ok(Self {
            topology,
            params,
            activations: vec![params.rest; n],
            net: vec![0.0; n],
            cycles_run: 0,
        })
    }

    /// Create an engine from an explicit initial activation vector
    pub fn with_activations(
        topology: &'t Topology,
        params: ActivationParams,
        initial: Vec<f64>,
    ) -> Result<Self> {
        if initial.len() != topology.node_count() {
            return Err(IacError::invalid_parameter(
                "initial activations",
                format!("{} values", initial.len()),
                format!("{} values", topology.node_count()),
            ));
        }
        let mut engine = Self::new(topology, params)?;
        engine.activations = initial;
        Ok(engine)
    }

    /// Run `params.cycles` cycles with `inputs` injected every cycle
    pub fn run<I, S>(&mut self, inputs: I, params: &SimulationParams) -> Result<SimulationResult>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        params.validate()?;
        let inputs = self.topology.resolve_inputs(inputs)?;

        log::info!(
            "Starting IAC simulation: {} cycles over {} nodes ({} inputs)",
            params.cycles,
            self.topology.node_count(),
            inputs.len()
        );

        if params.seed_inputs && params.cycles > 0 {
            for &(node, value) in &inputs {
                self.activations[node] = value;
            }
        }

        let mut trace = params
            .record_trace
            .then(|| ActivationTrace::new(self.topology));
        let mut last_max_change = 0.0;

        for cycle in 0..params.cycles {
            last_max_change = self.step(&inputs, params.rate)?;
            log::trace!("Cycle {}: max activation change {:.6e}", cycle, last_max_change);

            if let Some(trace) = trace.as_mut() {
                trace.cycles.push(self.activations.clone());
            }
        }

        log::info!(
            "Simulation completed: {} cycles (last max change {:.3e})",
            params.cycles,
            last_max_change
        );

        Ok(SimulationResult {
            activations: self.activations.clone(),
            readout: self.readout()?,
            cycles_executed: params.cycles,
            last_max_change,
            trace,
        })
    }

    /// Advance one cycle with resolved `(node, value)` inputs.
    ///
    /// Returns the largest absolute activation change.
    pub fn step(&mut self, inputs: &[(usize, f64)], rate: f64) -> Result<f64> {
        self.topology
            .weights()
            .multiply_rectified(&self.activations, &mut self.net)?;

        for &(node, value) in inputs {
            let net = self.net.get_mut(node).ok_or_else(|| {
                IacError::invalid_parameter(
                    "input node",
                    node.to_string(),
                    format!("< {}", self.topology.node_count()),
                )
            })?;
            *net += value;
        }

        let mut max_change: f64 = 0.0;
        for (a, &net) in self.activations.iter_mut().zip(&self.net) {
            let delta = self.params.delta(*a, net, rate);
            *a += delta;
            max_change = max_change.max(delta.abs());
        }

        self.cycles_run += 1;
        Ok(max_change)
    }

    /// Return every node to rest
    pub fn reset(&mut self) {
        self.activations.fill(self.params.rest);
        self.cycles_run = 0;
    }

    /// Current activation vector
    pub fn activations(&self) -> &[f64] {
        &self.activations
    }

    /// Current activations by name
    pub fn readout(&self) -> Result<Readout> {
        Readout::new(self.topology, &self.activations)
    }

    /// Total cycles since creation or the last reset
    pub fn cycles_run(&self) -> u64 {
        self.cycles_run
    }

    /// Activation parameters
    pub fn params(&self) -> &ActivationParams {
        &self.params
    }

    /// Topology being simulated
    pub fn topology(&self) -> &Topology {
        self.topology
    }
}

/// Run `cycles` cycles from `initial` and return the final activation vector.
///
/// Pure with respect to its arguments: the topology is only read and the
/// returned vector is freshly owned.
pub fn run_cycles<I, S>(
    topology: &Topology,
    params: ActivationParams,
    initial: Vec<f64>,
    inputs: I,
    cycles: u64,
) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let mut engine = SimulationEngine::with_activations(topology, params, initial)?;
    let result = engine.run(inputs, &SimulationParams::new(cycles))?;
    Ok(result.activations)
}
