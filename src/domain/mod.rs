// ============================================================================
// Domain Module
// Value types describing arithmetic requests
// ============================================================================

mod operation;

pub use operation::Operation;
