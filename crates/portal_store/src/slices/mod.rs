//! State slices
//!
//! Each slice owns one bounded piece of application state and exposes its
//! only legal mutations as a closed action enum matched exhaustively by a
//! pure reducer. Reducers perform no I/O; lifecycle phases arrive as plain
//! actions stamped by the store.

pub mod auth;
pub mod claims;
pub mod policies;
