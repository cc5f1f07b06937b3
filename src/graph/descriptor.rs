//! Processor metadata and the name-to-factory registry.
//!
//! Mirrors how a host audio graph learns about processing units: each unit
//! registers under a stable name together with its port arity and the named,
//! ranged automation parameters it accepts. Hosts (and UIs) read descriptors
//! to build controls; the registry instantiates processors by name.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::multisine::MultiSineNode;
use crate::graph::node::BlockProcessor;
use crate::graph::noise::WhiteNoiseNode;
use crate::graph::passthrough::PassthroughNode;

/// How often a parameter may change value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationRate {
    /// One value per sample.
    ARate,
    /// One value per block.
    KRate,
}

/// A named, ranged automation parameter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ParamDescriptor {
    pub name: String,
    pub default_value: f32,
    pub min_value: f32,
    pub max_value: f32,
    pub rate: AutomationRate,
}

/// Static description of a block processor: identity, port arity, parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ProcessorDescriptor {
    pub name: String,
    pub num_inputs: usize,
    pub num_outputs: usize,
    pub output_channels: usize,
    pub params: Vec<ParamDescriptor>,
}

type Factory = fn(output_channels: usize) -> Box<dyn BlockProcessor>;

struct RegistryEntry {
    descriptor: ProcessorDescriptor,
    factory: Factory,
}

/// Registry mapping processor names to descriptors and factories.
pub struct ProcessorRegistry {
    entries: Vec<RegistryEntry>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry preloaded with the built-in units.
    pub fn with_builtins(output_channels: usize) -> Self {
        let mut registry = Self::new();
        registry.register(MultiSineNode::descriptor(output_channels), |channels| {
            Box::new(MultiSineNode::new(channels))
        });
        registry.register(PassthroughNode::descriptor(output_channels), |_| {
            Box::new(PassthroughNode::new())
        });
        registry.register(WhiteNoiseNode::descriptor(output_channels), |_| {
            Box::new(WhiteNoiseNode::new())
        });
        registry
    }

    /// Register a processor. A later registration under an existing name
    /// replaces the earlier one.
    pub fn register(&mut self, descriptor: ProcessorDescriptor, factory: Factory) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.descriptor.name == descriptor.name)
        {
            entry.descriptor = descriptor;
            entry.factory = factory;
        } else {
            self.entries.push(RegistryEntry {
                descriptor,
                factory,
            });
        }
    }

    pub fn descriptor(&self, name: &str) -> Option<&ProcessorDescriptor> {
        self.entries
            .iter()
            .find(|e| e.descriptor.name == name)
            .map(|e| &e.descriptor)
    }

    /// Instantiate a processor by name with the registered channel count.
    pub fn create(&self, name: &str) -> Option<Box<dyn BlockProcessor>> {
        self.entries
            .iter()
            .find(|e| e.descriptor.name == name)
            .map(|e| (e.factory)(e.descriptor.output_channels))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.descriptor.name.as_str())
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
