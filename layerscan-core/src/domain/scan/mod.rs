//! Scan domain: options, findings and the capability contracts
//!
//! The orchestrator composes two capabilities defined here:
//! [`IdentityResolver`] (what image is this?) and [`Detector`] (what is
//! vulnerable in it?). Both are async traits so implementations may block on
//! registry access or database lookups.

pub mod entities;
pub mod errors;
pub mod traits;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use traits::*;
pub use value_objects::*;
