//! Node factories, their metadata and the registry that dispatches to them

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use egui::{Color32, Pos2, Vec2};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{NodeError, NodeResult};
use crate::nodes::{Node, NodeId};
use crate::plugin_interface::NodeData;

/// Kind of value a port carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// A single float
    Float,
    /// Ordered list of floats
    FloatCollection,
}

impl DataType {
    /// Whether an output of this type may feed an input of `other`.
    ///
    /// A single float feeds a collection port and is broadcast there.
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        self == other || (*self == DataType::Float && *other == DataType::FloatCollection)
    }
}

/// Menu path a node is listed under, e.g. `Math`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Last path component
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    pub fn math() -> Self {
        Self::new(&["Math"])
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path.join(" > "))
    }
}

/// Named, typed port a factory declares
#[derive(Debug, Clone)]
pub struct PortDefinition {
    pub name: String,
    pub data_type: DataType,
    pub description: Option<String>,
}

impl PortDefinition {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Rough cost of one evaluation, reported to the host scheduler
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingCost {
    Minimal, // < 1ms
    Low,     // 1-10ms
    Medium,  // 10-100ms
    High,    // > 100ms
}

/// Everything the host needs to list, draw and create a node type
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,

    pub color: Color32,
    pub icon: &'static str,
    pub size_hint: Vec2,

    pub category: NodeCategory,
    pub tags: Vec<&'static str>,

    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,

    pub processing_cost: ProcessingCost,
}

impl NodeMetadata {
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            description,
            version: "1.0",
            color: Color32::from_rgb(100, 100, 100),
            icon: "⚡",
            size_hint: Vec2::new(120.0, 80.0),
            category,
            tags: vec![],
            inputs: vec![],
            outputs: vec![],
            processing_cost: ProcessingCost::Low,
        }
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_size_hint(mut self, size: Vec2) -> Self {
        self.size_hint = size;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_processing_cost(mut self, cost: ProcessingCost) -> Self {
        self.processing_cost = cost;
        self
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }
}

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(crate::constants::node::TEMP_ID_START);

/// A node type: its metadata, its defaults and its computation
pub trait NodeFactory: Send + Sync {
    fn metadata() -> NodeMetadata where Self: Sized;

    /// Parameter values a freshly created node starts with
    fn default_parameters() -> Vec<(String, NodeData)> where Self: Sized {
        Vec::new()
    }

    /// Compute output port values from input port values
    fn process(node: &Node, inputs: &[NodeData]) -> NodeResult<Vec<NodeData>> where Self: Sized;

    /// Build a node instance at `position` with ports and default parameters
    fn create(position: Pos2) -> Node where Self: Sized {
        let meta = Self::metadata();
        let id: NodeId = NEXT_NODE_ID.fetch_add(1, Ordering::SeqCst);
        let mut node = Node::new(id, meta.display_name, meta.node_type, position)
            .with_color(meta.color)
            .with_size(meta.size_hint);

        for input in &meta.inputs {
            node.add_input(&input.name, input.data_type);
        }
        for output in &meta.outputs {
            node.add_output(&output.name, output.data_type);
        }
        for (name, value) in Self::default_parameters() {
            node.set_parameter(name, value);
        }

        // Needs the final port list and size
        node.update_port_positions();
        node
    }
}

type NodeCreator = fn(Pos2) -> Node;
type MetadataProvider = fn() -> NodeMetadata;
type NodeProcessor = fn(&Node, &[NodeData]) -> NodeResult<Vec<NodeData>>;

/// Node types known to the host, keyed by type identifier
pub struct NodeRegistry {
    creators: BTreeMap<String, NodeCreator>,
    metadata_providers: BTreeMap<String, MetadataProvider>,
    processors: BTreeMap<String, NodeProcessor>,
    categories: HashMap<NodeCategory, Vec<String>>,
}

impl NodeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            creators: BTreeMap::new(),
            metadata_providers: BTreeMap::new(),
            processors: BTreeMap::new(),
            categories: HashMap::new(),
        }
    }

    pub fn register<T: NodeFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let node_type = metadata.node_type.to_string();

        if self.creators.contains_key(&node_type) {
            warn!("Node type '{}' registered twice, replacing previous factory", node_type);
        } else {
            self.categories
                .entry(metadata.category.clone())
                .or_default()
                .push(node_type.clone());
        }

        self.creators.insert(node_type.clone(), T::create);
        self.metadata_providers.insert(node_type.clone(), T::metadata);
        self.processors.insert(node_type.clone(), T::process);
        debug!(
            "Registered node type '{}' (version {}) under {}",
            node_type, metadata.version, metadata.category
        );
    }

    pub fn create_node(&self, node_type: &str, position: Pos2) -> Option<Node> {
        match self.creators.get(node_type) {
            Some(creator) => Some(creator(position)),
            None => {
                warn!("No factory found for node type: {}", node_type);
                None
            }
        }
    }

    /// Run a node's computation on the given input port values
    pub fn execute(&self, node: &Node, inputs: &[NodeData]) -> NodeResult<Vec<NodeData>> {
        let processor = self
            .processors
            .get(&node.type_id)
            .ok_or_else(|| NodeError::UnknownNodeType(node.type_id.clone()))?;
        debug!("Executing node {} ({}) with {} inputs", node.id, node.type_id, inputs.len());
        processor(node, inputs)
    }

    pub fn get_metadata(&self, node_type: &str) -> Option<NodeMetadata> {
        self.metadata_providers.get(node_type).map(|provider| provider())
    }

    /// Registered type identifiers, sorted
    pub fn node_types(&self) -> Vec<&str> {
        self.creators.keys().map(|s| s.as_str()).collect()
    }

    pub fn nodes_in_category(&self, category: &NodeCategory) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|nodes| nodes.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<&NodeCategory> {
        self.categories.keys().collect()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register::<crate::nodes::math::collection_math::FloatCollectionMathNodeFactory>();

        info!("Node registry initialized with {} node types", registry.creators.len());
        registry
    }
}

static GLOBAL_REGISTRY: Lazy<NodeRegistry> = Lazy::new(NodeRegistry::default);

/// Process-wide registry with every built-in node registered
pub fn global_registry() -> &'static NodeRegistry {
    &GLOBAL_REGISTRY
}
