//! Portal State Store
//!
//! The single write path for all client state. Three slices (auth, policies,
//! claims) each pair a state struct with a closed action enum and a pure
//! reducer; the `Store` container composes them behind a lock and drives the
//! three-phase async-fetch lifecycle (`pending -> fulfilled | rejected`)
//! against the injected `PortalApi` port.
//!
//! # Control flow
//!
//! ```text
//! view -> Store::dispatch / async operation
//!      -> reducer commits the phase into slice state
//!      -> selectors recompute derived views
//!      -> view re-renders from a state snapshot
//! ```
//!
//! The store is explicitly injectable: tests construct isolated instances
//! with preloaded state via [`Store::with_state`].

pub mod selectors;
pub mod slices;
pub mod state;
pub mod store;

pub use state::{Action, RootState};
pub use store::Store;

pub use slices::auth::{AuthAction, AuthState};
pub use slices::claims::{ClaimsAction, ClaimsState};
pub use slices::policies::{PoliciesAction, PoliciesState};
