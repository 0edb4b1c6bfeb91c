//! User endpoints

use axum::{extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path};
use crate::domain::user::{FieldUpdate, User, UserId};

/// Request to create a new user
///
/// Unknown fields (such as a `password`) are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request to update a user; only supplied fields change
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserApiRequest {
    #[serde(default)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    pub email: FieldUpdate<String>,
}

/// User representation, also used as the profile view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
    pub created_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().to_string(),
            email: user.email().map(String::from),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

/// List users response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub count: usize,
    pub users: Vec<UserResponse>,
}

/// Delete user response
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserResponse {
    pub deleted: bool,
    pub id: u64,
}

fn user_not_found() -> ApiError {
    ApiError::not_found("User not found")
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!("Listing all users");

    let users = state.user_directory.list_all().await?;
    let users: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();

    Ok(Json(ListUsersResponse {
        count: users.len(),
        users,
    }))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!("Creating user");

    let user = state
        .user_directory
        .create(request.name.as_deref(), request.email.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id, "Getting user");

    let user = state
        .user_directory
        .get_by_id(UserId::new(user_id))
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(UserResponse::from(&user)))
}

/// PATCH /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id, "Updating user");

    let user = state
        .user_directory
        .update(UserId::new(user_id), request.name, request.email)
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    debug!(user_id, "Deleting user");

    if !state.user_directory.delete(UserId::new(user_id)).await? {
        return Err(user_not_found());
    }

    Ok(Json(DeleteUserResponse {
        deleted: true,
        id: user_id,
    }))
}

/// GET /users/{user_id}/profile
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id, "Getting user profile");

    let user = state
        .user_directory
        .get_by_id(UserId::new(user_id))
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(UserResponse::from(&user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_ignores_password() {
        let json = r#"{"name": "Alice", "email": "a@example.com", "password": "hunter2"}"#;

        let request: CreateUserApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name.as_deref(), Some("Alice"));
        assert_eq!(request.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_create_user_request_allows_missing_fields() {
        let request: CreateUserApiRequest = serde_json::from_str("{}").unwrap();
        assert!(request.name.is_none());
        assert!(request.email.is_none());
    }

    #[test]
    fn test_update_user_request_tri_state() {
        let request: UpdateUserApiRequest =
            serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert_eq!(request.name, FieldUpdate::Unchanged);
        assert_eq!(request.email, FieldUpdate::Clear);
    }

    #[test]
    fn test_user_response_from_user() {
        let user = User::new(UserId::new(4), "Dana", Some("dana@example.com".to_string()));

        let response = UserResponse::from(&user);
        assert_eq!(response.id, 4);
        assert_eq!(response.name, "Dana");
        assert_eq!(response.email.as_deref(), Some("dana@example.com"));
        assert_eq!(response.created_at, user.created_at().to_rfc3339());
    }
}
