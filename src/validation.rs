use crate::{
    clients::{UserDirectory, UserLookup},
    error::{AppError, AppResult},
};

/// Confirms that `user_id` names an existing user.
///
/// Payload shape is checked by the caller beforehand; this only answers
/// whether the reference resolves.
pub async fn validate_order_data(users: &dyn UserDirectory, user_id: i64) -> AppResult<()> {
    match users.lookup(user_id).await {
        UserLookup::Exists => Ok(()),
        UserLookup::NotFound => Err(AppError::Validation(format!(
            "user with ID {user_id} does not exist"
        ))),
        UserLookup::Unreachable => Err(AppError::Upstream(format!(
            "user service unavailable while validating user {user_id}"
        ))),
    }
}
