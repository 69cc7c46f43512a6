pub mod browse_flow;
pub mod generate_flow;

pub use browse_flow::BrowseFlow;
pub use generate_flow::{GenerateFlow, GenerateOutcome};
