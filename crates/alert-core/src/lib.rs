//! Core types and pure logic for the live alert map client.
//!
//! This crate provides the shared model used by every other crate in the
//! workspace. It defines:
//!
//! - [`Alert`] - One broadcast event as delivered by the alerts endpoint
//! - [`RegionId`] / [`Region`] - Static display regions and membership lookup
//! - [`AlertStore`] - The current alert plus the bounded history list
//! - [`AlertFeed`] - The transport trait implemented by HTTP and mock feeds
//! - [`view`] - Read models derived from the store for a selected region
//!
//! # Example
//!
//! ```rust
//! use alert_core::{parse_current_payload, region, RegionId};
//!
//! let body = "\u{feff}{\"id\":\"1\",\"cat\":\"1\",\"title\":\"ירי רקטות\",\"data\":[\"שדרות\",\"חיפה\"]}";
//! let alert = parse_current_payload(body).unwrap().unwrap();
//!
//! let south = region::filter_locations(&alert.locations, RegionId::Otef);
//! assert_eq!(south.as_ref(), ["שדרות".to_string()]);
//! ```

mod alert;
mod category;
mod error;
mod feed;
mod geo;
mod store;

pub mod demo;
pub mod region;
pub mod view;

pub use alert::{parse_current_payload, parse_history_payload, Alert};
pub use category::{category, Category, DEFAULT_CATEGORY};
pub use error::{FeedError, PayloadError};
pub use feed::AlertFeed;
pub use geo::{coordinates, known_locations, LatLng};
pub use region::{Region, RegionId, UnknownRegion};
pub use store::{AlertStore, FilteredAlert, HISTORY_LIMIT};

// Re-export async_trait for feed implementations
pub use async_trait::async_trait;
