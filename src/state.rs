//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::config::{CounterBackend, ServerConfig};
use crate::contract::{DocumentRenderer, SalesContractGenerator, TypstRenderEngine};
use crate::metrics::ContractMetrics;
use crate::sequence::{FileSequence, InMemorySequence, SequenceSource};

#[derive(Clone)]
pub struct AppState {
    pub sequence: Arc<dyn SequenceSource>,
    pub renderer: Arc<dyn DocumentRenderer>,
    pub metrics: ContractMetrics,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let sequence: Arc<dyn SequenceSource> = match &config.counter {
            CounterBackend::File(path) => {
                log::info!("Using counter file {}", path.display());
                Arc::new(FileSequence::new(path))
            }
            CounterBackend::Memory => {
                log::warn!("Using in-memory counter, contract numbers restart with the process");
                Arc::new(InMemorySequence::new())
            }
        };

        let engine = TypstRenderEngine::new(config.typst_bin.clone());
        let renderer = Arc::new(SalesContractGenerator::new(&config.static_dir, engine)?);

        Ok(Self::new_with_components(sequence, renderer)?)
    }

    pub fn new_with_components(
        sequence: Arc<dyn SequenceSource>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Result<Self, prometheus::Error> {
        Ok(AppState {
            sequence,
            renderer,
            metrics: ContractMetrics::new()?,
        })
    }
}
