//! Float collection math node implementation
//!
//! - mod.rs: Base node metadata and factory implementation
//! - functions.rs: Core computation logic (broadcast + operation dispatch)
//! - logic.rs: Port-level processing
//! - parameters.rs: Parameter model, defaults and choice labels
//! - error.rs: Error taxonomy

pub mod error;
pub mod functions;
pub mod logic;
pub mod parameters;

pub use error::{CollectionMathError, Result};
pub use functions::{broadcast, evaluate, CollectionOperation, Operand};
pub use logic::FloatCollectionMathLogic;
pub use parameters::FloatCollectionMathNode;

use egui::{Color32, Vec2};
use crate::constants::{self, port};
use crate::error::NodeResult;
use crate::nodes::{NodeFactory, NodeMetadata, NodeCategory, DataType, PortDefinition, Node};
use crate::nodes::factory::ProcessingCost;
use crate::plugin_interface::NodeData;

/// Node applying an elementwise or reducing operation to float collections
#[derive(Default)]
pub struct FloatCollectionMathNodeFactory;

impl NodeFactory for FloatCollectionMathNodeFactory {
    fn metadata() -> NodeMetadata {
        let [r, g, b] = constants::visual::NODE_COLOR;
        let [width, height] = constants::visual::NODE_SIZE;
        NodeMetadata::new(
            constants::node::NODE_TYPE,
            constants::node::DISPLAY_NAME,
            NodeCategory::math(),
            constants::node::DESCRIPTION,
        )
        .with_color(Color32::from_rgb(r, g, b))
        .with_icon("∑")
        .with_size_hint(Vec2::new(width, height))
        .with_inputs(vec![
            PortDefinition::new(port::INPUT_A, DataType::FloatCollection)
                .with_description("The first list (A)"),
            PortDefinition::new(port::INPUT_B, DataType::FloatCollection)
                .with_description("The second list (B)"),
        ])
        .with_outputs(vec![
            PortDefinition::new(port::OUTPUT_COLLECTION, DataType::FloatCollection)
                .with_description("The resulting collection (C)"),
        ])
        .with_tags(vec!["math", "collection"])
        .with_version(constants::node::VERSION)
        .with_processing_cost(ProcessingCost::Minimal)
    }

    fn default_parameters() -> Vec<(String, NodeData)> {
        FloatCollectionMathNode::default().to_parameters()
    }

    fn process(node: &Node, inputs: &[NodeData]) -> NodeResult<Vec<NodeData>> {
        let result = FloatCollectionMathNode::from_node(node)
            .and_then(|params| FloatCollectionMathLogic::new(params).process(inputs));
        if let Err(err) = &result {
            log::warn!("Node {} ({}) failed: {}", node.id, constants::node::DISPLAY_NAME, err);
        }
        Ok(result?)
    }
}
