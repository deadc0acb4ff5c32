//! Shared client-side state.
//!
//! DESIGN
//! ======
//! One `RwSignal` per state struct, provided via context from the root
//! component. Mutation goes through named transition methods only, so
//! every observable state change has a name and a single code path.

pub mod auth;
