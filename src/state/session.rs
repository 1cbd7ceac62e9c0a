//! Session state for the current signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for authentication. `SessionState` lives in an
//! `RwSignal` provided via context at the app root; the route guard and
//! pages read it and never talk to the identity provider directly.
//!
//! CONCURRENCY
//! ===========
//! Sign-in/out are async and may overlap. Every request bumps a generation
//! counter and captures a token; a completion whose token is no longer
//! current is discarded. A sign-out issued while a sign-in is in flight
//! therefore wins even if the sign-in's network call resolves later.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use thiserror::Error;

use crate::net::provider;
use crate::net::types::ProfileRecord;
use crate::state::role::{Role, RoleResolution, resolve_role};

/// Identity-level record of who is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque external identity from the provider.
    pub identity: String,
    pub email: String,
    pub authenticated: bool,
}

/// Application-level record extending a session with role and display data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub identity: String,
    pub role: RoleResolution,
    pub display_name: String,
}

impl Profile {
    /// Build a profile from a provider record, validating it against the
    /// identity it must belong to.
    ///
    /// Structural problems (empty or mismatched identity) are a
    /// `ProfileResolutionFailure`. An out-of-set role is not an error: the
    /// record is kept and the role resolves to the `Unauthorized` sentinel.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ProfileResolutionFailure` if the record cannot be
    /// tied to `identity`.
    pub fn from_record(identity: &str, record: &ProfileRecord) -> Result<Profile, AuthError> {
        if identity.is_empty() || record.id != identity {
            return Err(AuthError::ProfileResolutionFailure);
        }
        Ok(Profile {
            identity: record.id.clone(),
            role: resolve_role(&record.role),
            display_name: record.display_name.clone(),
        })
    }
}

/// Failure taxonomy for everything auth-related.
///
/// Raw provider errors are translated into these variants at the
/// `net::provider` boundary; display strings below are what pages show.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("An account with this email already exists.")]
    DuplicateAccount,
    #[error("Unknown account role: {0}")]
    InvalidRole(String),
    #[error("Could not reach the sign-in service. Check your connection.")]
    NetworkFailure,
    #[error("Your account profile could not be loaded.")]
    ProfileResolutionFailure,
    #[error("Your account is not permitted to view this page.")]
    Unauthorized,
    #[error("You are not signed in.")]
    Unauthenticated,
    #[error("Sign-in service error: {0}")]
    Provider(String),
}

/// Authentication state shared through context as `RwSignal<SessionState>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub profile: Option<Profile>,
    /// True while a sign-in/out or the startup session check is in flight.
    pub loading: bool,
    /// Request token; only a completion stamped with the current value may
    /// mutate `session`/`profile`.
    generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        // The startup session check has not run yet, so the app boots in the
        // loading state; the guard must not redirect before it resolves.
        SessionState { session: None, profile: None, loading: true, generation: 0 }
    }
}

impl SessionState {
    /// Whether a signed-in session is present.
    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.authenticated)
    }

    /// Synchronous read of the current session, if any.
    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Synchronous read of the current profile, if any.
    pub fn current_profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Resolved role of the current profile, if a profile is present.
    pub fn role_resolution(&self) -> Option<RoleResolution> {
        self.profile.as_ref().map(|p| p.role)
    }

    /// Begin a sign-in/out request: bump the generation and enter loading.
    /// Returns the token the eventual completion must present.
    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a successful sign-in completion. Returns `false` (and changes
    /// nothing) when the token is stale.
    pub fn apply_sign_in(&mut self, token: u64, session: Session, profile: Profile) -> bool {
        if token != self.generation {
            return false;
        }
        self.session = Some(session);
        self.profile = Some(profile);
        self.loading = false;
        true
    }

    /// Apply a failed sign-in or session-check completion. Leaves the state
    /// signed out. Returns `false` when the token is stale.
    pub fn apply_auth_failure(&mut self, token: u64) -> bool {
        if token != self.generation {
            return false;
        }
        self.session = None;
        self.profile = None;
        self.loading = false;
        true
    }

    /// Clear the session immediately. Idempotent. Bumps the generation so a
    /// pending sign-in completion cannot resurrect the old identity.
    pub fn apply_sign_out(&mut self) {
        self.generation += 1;
        self.session = None;
        self.profile = None;
        self.loading = false;
    }
}

/// Validate a raw role string from a form before any network call.
///
/// # Errors
///
/// Returns `AuthError::InvalidRole` when the value is outside the closed set.
pub fn validate_requested_role(raw: &str) -> Result<Role, AuthError> {
    Role::parse(raw).ok_or_else(|| AuthError::InvalidRole(raw.trim().to_owned()))
}

/// Sign in against the identity provider and resolve the profile.
///
/// The profile is awaited here and returned directly so callers never need a
/// second state read to learn the role. State is updated only if this
/// request is still the current one when it completes.
///
/// # Errors
///
/// Any `AuthError`; on error the session is left (or made) unauthenticated.
pub async fn sign_in(
    state: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<Profile, AuthError> {
    let token = state.try_update(SessionState::begin_request).unwrap_or_default();

    let outcome = resolve_sign_in(email, password).await;
    match outcome {
        Ok((session, profile)) => {
            let applied = state
                .try_update(|s| s.apply_sign_in(token, session, profile.clone()))
                .unwrap_or(false);
            if applied {
                Ok(profile)
            } else {
                // Signed out (or superseded) while the call was in flight.
                Err(AuthError::Unauthenticated)
            }
        }
        Err(err) => {
            let _ = state.try_update(|s| s.apply_auth_failure(token));
            Err(err)
        }
    }
}

/// Create an account and its profile row, then sign the new user in.
///
/// # Errors
///
/// `InvalidRole` before any network call for out-of-set roles,
/// `DuplicateAccount` when the email is taken, plus the usual taxonomy.
pub async fn sign_up(
    state: RwSignal<SessionState>,
    email: &str,
    password: &str,
    role: &str,
    display_name: &str,
) -> Result<Profile, AuthError> {
    let role = validate_requested_role(role)?;
    let token = state.try_update(SessionState::begin_request).unwrap_or_default();

    let outcome = resolve_sign_up(email, password, role, display_name).await;
    match outcome {
        Ok((session, profile)) => {
            let applied = state
                .try_update(|s| s.apply_sign_in(token, session, profile.clone()))
                .unwrap_or(false);
            if applied {
                Ok(profile)
            } else {
                Err(AuthError::Unauthenticated)
            }
        }
        Err(err) => {
            let _ = state.try_update(|s| s.apply_auth_failure(token));
            Err(err)
        }
    }
}

/// Sign out: clear local state synchronously, then tell the provider on a
/// best-effort basis. Idempotent.
pub fn sign_out(state: RwSignal<SessionState>) {
    state.update(SessionState::apply_sign_out);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async {
        provider::sign_out().await;
    });
}

/// One-time session bootstrap invoked at application start: asks the
/// provider for the current account and resolves its profile. The guard
/// stays in its loading state until this completes.
pub fn init_session(state: RwSignal<SessionState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let token = state.try_update(SessionState::begin_request).unwrap_or_default();
        match resolve_current().await {
            Ok(Some((session, profile))) => {
                let _ = state.try_update(|s| s.apply_sign_in(token, session, profile));
            }
            Ok(None) | Err(_) => {
                let _ = state.try_update(|s| s.apply_auth_failure(token));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    state.update(|s| {
        let token = s.begin_request();
        s.apply_auth_failure(token);
    });
}

async fn resolve_sign_in(email: &str, password: &str) -> Result<(Session, Profile), AuthError> {
    let account = provider::sign_in(email, password).await?;
    let record = provider::fetch_profile(&account.id).await?;
    let profile = Profile::from_record(&account.id, &record)?;
    let session =
        Session { identity: account.id, email: account.email, authenticated: true };
    Ok((session, profile))
}

async fn resolve_sign_up(
    email: &str,
    password: &str,
    role: Role,
    display_name: &str,
) -> Result<(Session, Profile), AuthError> {
    let account = provider::sign_up(email, password).await?;
    let record = provider::create_profile(&account.id, role, display_name).await?;
    let profile = Profile::from_record(&account.id, &record)?;
    let session =
        Session { identity: account.id, email: account.email, authenticated: true };
    Ok((session, profile))
}

async fn resolve_current() -> Result<Option<(Session, Profile)>, AuthError> {
    let Some(account) = provider::current_account().await else {
        return Ok(None);
    };
    let record = provider::fetch_profile(&account.id).await?;
    let profile = Profile::from_record(&account.id, &record)?;
    let session =
        Session { identity: account.id, email: account.email, authenticated: true };
    Ok(Some((session, profile)))
}
