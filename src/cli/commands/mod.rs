//! Command implementations for the adomain-eval CLI
//!
//! Each command has its own module with its argument struct.

pub mod evaluate;
pub mod normalize;
pub mod parse_sandpuma;

// Re-export argument types for parser
pub use evaluate::EvaluateArgs;
pub use normalize::NormalizeArgs;
pub use parse_sandpuma::ParseSandpumaArgs;
