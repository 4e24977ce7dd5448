//! Session/auth gate: credential checks and the `logged_in` session flag.
//!
//! The blog has exactly one credential pair, supplied by configuration.
//! Login state and the one-shot flash notice live server-side in the
//! session store; the cookie only carries the session id.

use tower_sessions::Session;

use crate::config::AppConfig;
use crate::error::BlogError;

/// Session key holding the authentication flag.
const LOGGED_IN_KEY: &str = "logged_in";

/// Session key holding the pending flash notice.
const NOTICE_KEY: &str = "notice";

/// Reason a login attempt was rejected.
///
/// The two reasons are deliberately distinguishable to match the original
/// application's behavior; see DESIGN.md for the security note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Submitted username does not match the configured one.
    #[error("Invalid username")]
    InvalidUsername,
    /// Username matched but the password did not.
    #[error("Invalid password")]
    InvalidPassword,
}

/// Checks a submitted credential pair against the configured values.
///
/// Username is checked first; a wrong username is reported as such
/// regardless of the password.
///
/// # Errors
///
/// Returns the specific [`LoginError`] for the first mismatching field.
pub fn verify_credentials(
    config: &AppConfig,
    username: &str,
    password: &str,
) -> Result<(), LoginError> {
    if username != config.username {
        return Err(LoginError::InvalidUsername);
    }
    if password != config.password {
        return Err(LoginError::InvalidPassword);
    }
    Ok(())
}

/// Marks the session as authenticated.
///
/// # Errors
///
/// Returns [`BlogError::Session`] if the session store rejects the write.
pub async fn log_in(session: &Session) -> Result<(), BlogError> {
    session.insert(LOGGED_IN_KEY, true).await?;
    Ok(())
}

/// Drops the authentication flag from the session.
///
/// The session itself survives so the logout notice can still be carried
/// to the next list render. No-op when the flag was never set.
///
/// # Errors
///
/// Returns [`BlogError::Session`] if the session store rejects the write.
pub async fn log_out(session: &Session) -> Result<(), BlogError> {
    session.remove::<bool>(LOGGED_IN_KEY).await?;
    Ok(())
}

/// Rejects the request unless the session is authenticated.
///
/// Called first in every mutating handler, so the handler body never runs
/// for an unauthenticated client.
///
/// # Errors
///
/// Returns [`BlogError::Unauthorized`] when the flag is absent or false,
/// or [`BlogError::Session`] on a session store failure.
pub async fn require_authenticated(session: &Session) -> Result<(), BlogError> {
    let logged_in = session.get::<bool>(LOGGED_IN_KEY).await?.unwrap_or(false);
    if logged_in {
        Ok(())
    } else {
        Err(BlogError::Unauthorized)
    }
}

/// Stores a one-shot notice to be shown on the next list render.
///
/// # Errors
///
/// Returns [`BlogError::Session`] if the session store rejects the write.
pub async fn set_notice(session: &Session, message: &str) -> Result<(), BlogError> {
    session.insert(NOTICE_KEY, message).await?;
    Ok(())
}

/// Takes the pending notice, removing it from the session.
///
/// # Errors
///
/// Returns [`BlogError::Session`] on a session store failure.
pub async fn take_notice(session: &Session) -> Result<Option<String>, BlogError> {
    let notice = session.remove::<String>(NOTICE_KEY).await?;
    Ok(notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn make_config() -> AppConfig {
        AppConfig {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            username: "admin".to_string(),
            password: "default".to_string(),
        }
    }

    #[test]
    fn correct_credentials_pass() {
        let config = make_config();
        assert_eq!(verify_credentials(&config, "admin", "default"), Ok(()));
    }

    #[test]
    fn wrong_password_is_reported_as_such() {
        let config = make_config();
        assert_eq!(
            verify_credentials(&config, "admin", "nope"),
            Err(LoginError::InvalidPassword)
        );
        assert_eq!(LoginError::InvalidPassword.to_string(), "Invalid password");
    }

    #[test]
    fn wrong_username_wins_regardless_of_password() {
        let config = make_config();
        assert_eq!(
            verify_credentials(&config, "root", "default"),
            Err(LoginError::InvalidUsername)
        );
        assert_eq!(
            verify_credentials(&config, "root", "nope"),
            Err(LoginError::InvalidUsername)
        );
        assert_eq!(LoginError::InvalidUsername.to_string(), "Invalid username");
    }
}
