pub mod decay_function;
pub mod ranking_engine;

pub use decay_function::IDecayFunction;
pub use ranking_engine::IRankingEngine;
