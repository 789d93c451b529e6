//! Math operation nodes

pub mod collection_math;
