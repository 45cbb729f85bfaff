//! Record Registry - contact record registration service.
//!
//! Lists registered contact records and admits new ones after checking,
//! in a fixed order:
//! - phone and mail uniqueness against the store
//! - mail and phone format
//! - presence of every required field

pub mod admission;
pub mod api;
pub mod config;
pub mod error;
pub mod store;

pub use admission::{admit, evaluate, Verdict};
pub use config::Config;
pub use error::{Field, Rejection, SeedError};
pub use store::{Record, RecordStore};
