//! Onboarding wizard state store for the CoForge client shell.
//!
//! Holds multi-step onboarding progress and the accumulated profile record,
//! persists every mutation to a durable local snapshot, and rehydrates from
//! that snapshot on open.

pub mod onboarding_command;
pub mod onboarding_profile;
pub mod snapshot_storage;
pub mod wizard_state;
pub mod wizard_store;
