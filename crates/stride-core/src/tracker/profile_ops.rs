//! User profile operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::UserProfile,
    params::{UpdateProfile, UserScope},
};

impl Tracker {
    /// Stored profile for a user, if one has been saved.
    pub async fn get_profile(&self, params: &UserScope) -> Result<Option<UserProfile>> {
        let user_id = params.user_id.trim().to_string();
        self.with_database(move |db| db.get_profile(&user_id)).await
    }

    /// Merges the provided fields into the user's profile, creating it on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if no field is given or a value
    /// is out of range.
    pub async fn update_profile(&self, params: &UpdateProfile) -> Result<UserProfile> {
        let request = params.validate()?;
        let user_id = params.user_id.trim().to_string();
        self.with_database(move |db| db.upsert_profile(&user_id, request))
            .await
    }
}
