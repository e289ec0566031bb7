//! Auth slice

use domain_auth::{Session, User};
use portal_kernel::FetchStatus;

/// Authentication slice state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// The single session held by this store
    pub session: Session,
    /// Lifecycle status of the latest auth operation
    pub status: FetchStatus,
    /// Reason of the latest rejection, if any
    pub error: Option<String>,
}

/// Legal mutations of the auth slice
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginPending,
    LoginFulfilled { user: User, token: String },
    LoginRejected(String),
    SignupPending,
    SignupFulfilled(User),
    SignupRejected(String),
    /// Logout always fulfils; there is nothing remote to fail
    LoggedOut,
}

/// Pure reducer for the auth slice
pub fn reduce(mut state: AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::LoginPending | AuthAction::SignupPending => {
            state.status = FetchStatus::Loading;
            state.error = None;
        }
        AuthAction::LoginFulfilled { user, token } => {
            state.status = FetchStatus::Succeeded;
            state.session = Session::authenticated(user, token);
        }
        AuthAction::SignupFulfilled(user) => {
            state.status = FetchStatus::Succeeded;
            state.session = Session::authenticated_without_token(user);
        }
        AuthAction::LoginRejected(reason) | AuthAction::SignupRejected(reason) => {
            state.status = FetchStatus::Failed;
            state.error = Some(reason);
            state.session.is_authenticated = false;
        }
        AuthAction::LoggedOut => {
            state = AuthState::default();
        }
    }
    state
}
