//! Simulation command

use clap::{Args, ValueEnum};
use iac_runtime::SimulationParams;
use std::path::PathBuf;
use tracing::{debug, info};

use super::NetworkSource;
use crate::config::DEFAULT_CYCLES;
use crate::error::CliResult;

/// Run a network and print the settled activations
#[derive(Args, Debug)]
pub struct RunCommand {
    #[command(flatten)]
    pub source: NetworkSource,

    /// Number of cycles (overrides the file's [run] cycles)
    #[arg(long)]
    pub cycles: Option<u64>,

    /// External input held every cycle (unit=value, repeatable)
    #[arg(short, long = "input", value_parser = parse_key_val::<String, f64>)]
    pub inputs: Vec<(String, f64)>,

    /// Write input values into the activations before the first cycle
    #[arg(long)]
    pub seed_inputs: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the per-cycle activation history to this JSON file
    #[arg(long)]
    pub trace: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `name: value` lines
    Text,
    /// JSON object
    Json,
}

impl RunCommand {
    pub fn execute(self) -> CliResult<()> {
        let file = self.source.load()?;
        let network = file.build_network()?;

        let mut inputs = file.run.inputs.clone();
        for (unit, value) in &self.inputs {
            inputs.insert(unit.clone(), *value);
        }
        let cycles = self.cycles.or(file.run.cycles).unwrap_or(DEFAULT_CYCLES);
        let params = SimulationParams::new(cycles)
            .with_seed_inputs(self.seed_inputs || file.run.seed_inputs)
            .with_trace(self.trace.is_some());

        info!(
            "Running {} cycles on {} nodes with inputs {:?}",
            cycles,
            network.topology().node_count(),
            inputs
        );
        let result = network.simulate_with(inputs.iter().map(|(u, v)| (u.as_str(), *v)), &params)?;
        debug!("Last max activation change: {:e}", result.last_max_change);

        if let (Some(path), Some(trace)) = (&self.trace, &result.trace) {
            std::fs::write(path, serde_json::to_string_pretty(trace)?)?;
            info!("Wrote activation trace ({} cycles) to {}", trace.len(), path.display());
        }

        match self.format {
            OutputFormat::Text => print!("{}", result.readout),
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "cycles": result.cycles_executed,
                    "last_max_change": result.last_max_change,
                    "units": result.readout.units,
                    "hubs": result.readout.hubs,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }

        Ok(())
    }
}

fn parse_key_val<T, U>(s: &str) -> Result<(T, U), Box<dyn std::error::Error + Send + Sync + 'static>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    U: std::str::FromStr,
    U::Err: std::error::Error + Send + Sync + 'static,
{
    let pos = s
        .rfind('=')
        .ok_or_else(|| format!("invalid UNIT=value: no `=` found in `{s}`"))?;
    Ok((s[..pos].parse()?, s[pos + 1..].parse()?))
}
