//! # duck-strategy
//!
//! Runtime-swappable behavior composition, shown with ducks.
//!
//! A [`Duck`] does not hard-code how it flies or quacks. It owns two **slots**,
//! each holding a strategy object, and forwards calls to whatever is installed:
//! - **Strategy**: a single-action capability ([`FlyBehavior`], [`QuackBehavior`])
//! - **Slot**: a named position on the host ([`Slot::Fly`], [`Slot::Quack`])
//! - **Host**: the [`Duck`], tagged with a [`DuckKind`] for its identity
//!
//! ## Example
//!
//! ```rust
//! use duck_strategy::prelude::*;
//! use std::sync::Arc;
//!
//! let mut duck = Duck::mallard();
//! let mut out = Vec::new();
//!
//! duck.perform_fly(&mut out).unwrap();
//! duck.set_fly_behavior(Arc::new(FlyRocketPowered));
//! duck.perform_fly(&mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "I can fly with my wings !\nI can fly with a rocket !\n"
//! );
//! ```

// ============================================================================
// MODULES
// ============================================================================

pub mod behavior;
pub mod config;
pub mod duck;
pub mod person;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use behavior::{
    FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings, FnFlyBehavior, FnQuackBehavior,
    MuteQuack, Quack, QuackBehavior, Slot, Squeak, Strategy,
};
pub use config::DuckConfig;
pub use duck::{Duck, DuckBuilder, DuckKind, SharedDuck, swim};
pub use person::Person;

/// Convenient re-exports for common types and traits
pub mod prelude {
    pub use crate::behavior::{
        FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings, MuteQuack, Quack, QuackBehavior,
        Slot, Squeak, Strategy, fly_behavior, quack_behavior,
    };
    pub use crate::{
        Duck, DuckBuilder, DuckConfig, DuckError, DuckKind, DuckResult, Person, SharedDuck,
    };
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Result type alias for duck operations
pub type DuckResult<T> = Result<T, DuckError>;

/// Common error type for duck operations
#[derive(Debug, thiserror::Error)]
pub enum DuckError {
    /// A host could not be assembled from the supplied strategies
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A strategy was offered to a slot it cannot fill
    #[error("strategy '{offered}' cannot fill the {slot} slot")]
    CapabilityMismatch { slot: Slot, offered: String },

    #[error("unknown slot: {0}")]
    UnknownSlot(String),

    /// Malformed duck configuration
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// The output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DuckError {
    pub fn missing_slot(slot: Slot) -> Self {
        Self::InvalidConfiguration(format!("{} slot has no strategy", slot))
    }
}
