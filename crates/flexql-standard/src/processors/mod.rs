//! Standard rewriting passes.

mod boolean_modifiers;
mod boost;


use flexql_core::QueryNodeProcessorPipeline;

pub use boolean_modifiers::BooleanModifiersProcessor;
pub use boost::BoostProcessor;

/// Passes for trees produced by the precedence parser, in run order:
/// boolean modifiers, then field boosts.
pub fn precedence_pipeline() -> QueryNodeProcessorPipeline {
    QueryNodeProcessorPipeline::new()
        .with(BooleanModifiersProcessor::new())
        .with(BoostProcessor::new())
}
