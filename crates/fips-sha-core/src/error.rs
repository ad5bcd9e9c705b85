use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid hex length {got}: expected an even number of characters")]
    InvalidHexLength { got: usize },

    #[error("invalid hex character {ch:?} at index {index}")]
    InvalidHexChar { ch: char, index: usize },

    #[error("invalid digest length {got}: expected 32 bytes")]
    InvalidDigestLength { got: usize },

    #[error("engine already finalized; call reset() before loading a new message")]
    EngineFinalized,

    #[error("{step} is not allowed while the engine is {phase}")]
    StepOutOfOrder {
        step: &'static str,
        phase: &'static str,
    },

    #[error("partial block: {len} bytes is not a multiple of the {block_size}-byte block size")]
    PartialBlock { len: usize, block_size: usize },

    #[error("self test '{name}' failed: expected {expected}, got {got}")]
    SelfTestFailed {
        name: &'static str,
        expected: String,
        got: String,
    },
}
