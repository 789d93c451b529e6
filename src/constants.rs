//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Float collection math node identity
pub mod node {
    /// Node type identifier registered with the host
    pub const NODE_TYPE: &str = "float_collection_math";

    /// Display title
    pub const DISPLAY_NAME: &str = "Float Collection Math";

    /// Node version reported to the host
    pub const VERSION: &str = "1.0.2";

    /// Node description shown in menus and tooltips
    pub const DESCRIPTION: &str =
        "Performs a math operation on a collection of floats. Usually truncates to the length of the shorter list";

    /// Starting ID for nodes created outside a graph
    pub const TEMP_ID_START: usize = 1_000_000_000;
}

/// Port names
pub mod port {
    pub const INPUT_A: &str = "A";
    pub const INPUT_B: &str = "B";
    pub const OUTPUT_COLLECTION: &str = "Collection";
}

/// Parameter names and their default values
pub mod parameter {
    pub const OPERATION: &str = "operation";
    pub const A: &str = "a";
    pub const B: &str = "b";
    pub const S: &str = "s";

    pub const DEFAULT_A: f64 = 1.0;
    pub const DEFAULT_B: f64 = 1.0;
    pub const DEFAULT_S: f64 = 0.0;
}

/// Node visuals
pub mod visual {
    /// Default node color (matches the other math nodes)
    pub const NODE_COLOR: [u8; 3] = [45, 55, 65];

    /// Default node size
    pub const NODE_SIZE: [f32; 2] = [150.0, 30.0];
}
