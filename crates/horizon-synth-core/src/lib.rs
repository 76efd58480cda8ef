//! Core systems for Horizon Synth.
//!
//! This crate provides the small amount of shared infrastructure the look-and-feel
//! layer needs outside of styling itself:
//!
//! - **Sessions**: [`SessionId`] identifies the logical owner of an installed
//!   look-and-feel (a window group, a test harness, an embedded view).
//! - **Session caches**: [`SessionCache`] associates a session with a weakly-held
//!   value, so the value is dropped as soon as its owner lets go of it.
//! - **Logging**: target and span-name constants for `tracing` filtering.
//!
//! # Session Cache Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_synth_core::{SessionCache, SessionId};
//!
//! let cache: SessionCache<String> = SessionCache::new();
//! let session = SessionId::new();
//!
//! let value = Arc::new("installed".to_string());
//! cache.install(session, &value);
//! assert_eq!(cache.get(session).as_deref(), Some(&"installed".to_string()));
//!
//! // Dropping the last strong reference empties the slot.
//! drop(value);
//! assert!(cache.get(session).is_none());
//! ```

pub mod error;
pub mod logging;
pub mod session;

pub use error::{Result, SessionError};
pub use session::{SessionCache, SessionId};
