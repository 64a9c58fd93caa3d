//! Image primitives: centered crop arithmetic, alpha flattening, exact-size resampling,
//! and the pure transforms composed from them.
pub mod crop;
pub mod flatten;
pub mod pipeline;
pub mod resize;
