//! Interactive Activation and Competition (IAC) network runtime
//!
//! Units are grouped into mutually inhibitory pools. Excitation between pools
//! is routed through a hub pool sized after the largest (anchor) pool: each
//! anchor-pool member owns one hub slot, and every excitatory link from that
//! member runs member -> hub slot -> target. Given external input, the network
//! settles over discrete cycles toward the activation pattern that best
//! satisfies these constraints.
//!
//! ```
//! use iac_runtime::{NetworkBuilder, Result};
//!
//! fn main() -> Result<()> {
//!     let network = NetworkBuilder::new()
//!         .add_pool(["cat", "dog"])
//!         .add_pool(["meow", "woof"])
//!         .add_links("cat", ["meow"])
//!         .add_links("dog", ["woof"])
//!         .build()?;
//!
//!     let readout = network.simulate([("cat", 1.0)], 100)?;
//!     assert!(readout.get("meow").unwrap() > readout.get("woof").unwrap());
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod error;
pub mod params;
pub mod weights;
pub mod topology;
pub mod readout;
pub mod simulation;
pub mod network;
pub mod scenario;

// Re-export essential types
pub use error::{IacError, Result};
pub use params::ActivationParams;
pub use weights::WeightMatrix;
pub use topology::{Topology, TopologyBuilder};
pub use readout::{NamedActivation, Readout};
pub use simulation::{
    run_cycles, ActivationTrace, SimulationEngine, SimulationParams, SimulationResult, DEFAULT_RATE,
};
pub use network::{IacNetwork, NetworkBuilder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_integration() {
        // Test that all components can be imported and basic objects created
        let params = ActivationParams::default();
        assert!(params.max > params.min);

        let sim_params = SimulationParams::default();
        assert!(sim_params.rate > 0.0);

        let network = NetworkBuilder::new().add_pool(["only"]).build().unwrap();
        assert_eq!(network.topology().node_count(), 2);
    }
}
