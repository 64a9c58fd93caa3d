//! Core building blocks: preparation parameters, the fixed entry manifests, and the
//! crop/flatten/resize primitives. These are consumed by the high-level `api` module.
pub mod manifest;
pub mod params;
pub mod processing;
