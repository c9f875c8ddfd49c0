//! Profile reads and partial updates

use crate::error::ApiError;
use crate::repositories::{AccountRepository, KvStore, ProfileRepository};
use chrono::Utc;
use fitkro_shared::validation::validate_profile_update;
use fitkro_shared::{ProfileFields, UpdateProfileRequest, UserProfile};
use tracing::info;
use uuid::Uuid;

pub struct ProfileService;

impl ProfileService {
    /// Stored profile, `None` if the user never completed onboarding
    pub async fn get(store: &dyn KvStore, user_id: Uuid) -> Result<Option<UserProfile>, ApiError> {
        ProfileRepository::get(store, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Merge the supplied fields into the stored profile
    ///
    /// A missing profile is created from the account record. Fields absent
    /// from the request keep their stored value.
    pub async fn update(
        store: &dyn KvStore,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        validate_profile_update(&req)?;

        let now = Utc::now();
        let mut profile = match ProfileRepository::get(store, user_id)
            .await
            .map_err(ApiError::Internal)?
        {
            Some(profile) => profile,
            None => {
                let account = AccountRepository::find_by_id(store, user_id)
                    .await
                    .map_err(ApiError::Internal)?;
                let (name, email) = account
                    .map(|a| (a.name, a.email))
                    .unwrap_or_default();
                blank_profile(user_id, name, email, now)
            }
        };

        if let Some(name) = req.name {
            profile.name = name.trim().to_string();
        }
        apply_fields(&mut profile, req.fields);
        profile.updated_at = Some(now);

        ProfileRepository::save(store, &profile)
            .await
            .map_err(ApiError::Internal)?;

        info!(%user_id, "Profile updated");
        Ok(profile)
    }
}

fn blank_profile(
    user_id: Uuid,
    name: String,
    email: String,
    created_at: chrono::DateTime<Utc>,
) -> UserProfile {
    UserProfile {
        user_id,
        name,
        email,
        gender: None,
        age: None,
        height: None,
        weight: None,
        goal: None,
        activity_level: None,
        diet_preference: None,
        created_at,
        updated_at: None,
    }
}

fn apply_fields(profile: &mut UserProfile, fields: ProfileFields) {
    let ProfileFields {
        gender,
        age,
        height,
        weight,
        goal,
        activity_level,
        diet_preference,
    } = fields;

    profile.gender = gender.or(profile.gender);
    profile.age = age.or(profile.age);
    profile.height = height.or(profile.height);
    profile.weight = weight.or(profile.weight);
    profile.goal = goal.or(profile.goal);
    profile.activity_level = activity_level.or(profile.activity_level);
    profile.diet_preference = diet_preference.or(profile.diet_preference);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryKvStore;
    use fitkro_shared::{ActivityLevel, FitnessGoal};

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let store = MemoryKvStore::new();
        let user_id = Uuid::new_v4();

        let mut initial = blank_profile(user_id, "Meera".into(), "m@example.com".into(), Utc::now());
        initial.height = Some(160.0);
        initial.goal = Some(FitnessGoal::Gain);
        ProfileRepository::save(&store, &initial).await.unwrap();

        let updated = ProfileService::update(
            &store,
            user_id,
            UpdateProfileRequest {
                name: None,
                fields: ProfileFields {
                    weight: Some(55.0),
                    activity_level: Some(ActivityLevel::Light),
                    ..Default::default()
                },
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "Meera");
        assert_eq!(updated.height, Some(160.0));
        assert_eq!(updated.goal, Some(FitnessGoal::Gain));
        assert_eq!(updated.weight, Some(55.0));
        assert_eq!(updated.activity_level, Some(ActivityLevel::Light));
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.created_at, initial.created_at);

        let stored = ProfileService::get(&store, user_id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_without_profile_creates_one() {
        let store = MemoryKvStore::new();
        let user_id = Uuid::new_v4();

        let profile = ProfileService::update(
            &store,
            user_id,
            UpdateProfileRequest {
                name: Some("Kabir".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(profile.name, "Kabir");
        assert_eq!(profile.user_id, user_id);
    }

    #[tokio::test]
    async fn test_invalid_update_writes_nothing() {
        let store = MemoryKvStore::new();
        let user_id = Uuid::new_v4();

        let err = ProfileService::update(
            &store,
            user_id,
            UpdateProfileRequest {
                fields: ProfileFields {
                    age: Some(0),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(store.is_empty().await);
    }
}
