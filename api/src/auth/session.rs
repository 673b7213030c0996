//! Session plumbing shared by the gated server functions.

use dioxus::prelude::ServerFnError;
use tower_sessions::Session;
use uuid::Uuid;

use crate::db::get_pool;
use crate::models::Profile;

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Load the profile behind the session, if any.
pub async fn load_session_user(session: &Session) -> Result<Option<Profile>, ServerFnError> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user_uuid = Uuid::parse_str(&user_id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let profile: Option<Profile> = sqlx::query_as("SELECT * FROM profiles WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(profile)
}

/// The calling user's profile, or a "Not authenticated" error.
pub async fn require_user(session: &Session) -> Result<Profile, ServerFnError> {
    load_session_user(session)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))
}

/// The calling user's profile if they are an admin, error otherwise.
pub async fn require_admin(session: &Session) -> Result<Profile, ServerFnError> {
    let profile = require_user(session).await?;
    if !profile.user_rank.is_admin() {
        return Err(ServerFnError::new("Admin access required"));
    }
    Ok(profile)
}
