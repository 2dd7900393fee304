//! # expo-core
//! Foundation types, configuration and traits for the Expo simulation kernel.

pub mod constants;
pub mod error;
pub mod params;
pub mod traits;
pub mod types;
