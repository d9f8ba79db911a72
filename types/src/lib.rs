//! Payra domain types.
//!
//! Defines the admin settings, quiz/wheel content, account record, and error
//! taxonomy shared by the engine and clients. Settings serialize with the
//! original camelCase field names so persisted blobs keep round-tripping
//! against the flat key-value contract.

mod account;
mod constants;
mod error;
mod quiz;
mod settings;
mod wheel;

pub use account::*;
pub use constants::*;
pub use error::*;
pub use quiz::*;
pub use settings::*;
pub use wheel::*;
