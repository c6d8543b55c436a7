//! DishaNav - Indoor navigation controller for visually impaired users
//!
//! DishaNav guides a user through a building by correlating scanned QR
//! waypoints with a precomputed shortest route and emitting step-by-step
//! guidance directives.
//!
//! ## Multi-Threaded Architecture
//!
//! Three threads cooperate around a single-consumer event gateway:
//!
//! - **Scanner thread**: polls the QR scan source and forwards decoded text
//! - **Voice thread**: captures a destination code when prompted
//! - **Control thread**: the only event consumer; drives the navigation
//!   session and announces guidance directives
//!
//! Camera capture, speech synthesis and recognition, GPS, and the
//! monitoring dashboard are external adapters behind the [`adapters`]
//! traits.

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod directive;
pub mod error;
pub mod events;
pub mod gateway;
pub mod graph;
pub mod planning;
pub mod session;
pub mod shared;
pub mod threads;

// Re-export commonly used types
pub use catalog::{WaypointCatalog, WaypointCode};
pub use config::DishaConfig;
pub use directive::Directive;
pub use error::{DishaError, Result};
pub use events::{NavEvent, VoiceFailureReason};
pub use graph::LocationGraph;
pub use planning::Route;
pub use session::{NavigationSession, SessionPhase};
