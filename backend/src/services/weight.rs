//! Weight logging

use crate::error::ApiError;
use crate::repositories::{new_log_id, KvStore, WeightRepository};
use chrono::Utc;
use fitkro_shared::stats::sort_chronologically;
use fitkro_shared::validation::validate_weight;
use fitkro_shared::{LogWeightRequest, ValidationError, WeightLogEntry};
use tracing::info;
use uuid::Uuid;

pub struct WeightService;

impl WeightService {
    pub async fn log_weight(
        store: &dyn KvStore,
        user_id: Uuid,
        req: LogWeightRequest,
    ) -> Result<WeightLogEntry, ApiError> {
        let weight = req.weight.ok_or(ValidationError::Required("weight"))?;
        validate_weight(weight)?;

        let entry = WeightLogEntry {
            id: new_log_id(user_id),
            user_id,
            weight,
            date: req.date.unwrap_or_else(|| Utc::now().fixed_offset()),
        };

        WeightRepository::create(store, &entry)
            .await
            .map_err(ApiError::Internal)?;

        info!(%user_id, log_id = %entry.id, "Weight logged");
        Ok(entry)
    }

    /// Weight entries ordered by date, oldest first
    pub async fn history(store: &dyn KvStore, user_id: Uuid) -> Result<Vec<WeightLogEntry>, ApiError> {
        let mut weights = WeightRepository::list(store, user_id)
            .await
            .map_err(ApiError::Internal)?;
        sort_chronologically(&mut weights);
        Ok(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryKvStore;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    #[tokio::test]
    async fn test_history_sorted_by_measurement_date() {
        let store = MemoryKvStore::new();
        let user_id = Uuid::new_v4();
        let base = Utc.with_ymd_and_hms(2026, 9, 1, 7, 0, 0).unwrap();

        // Logged out of order: backfilled entries get earlier dates
        for (days, kg) in [(5, 71.0), (0, 72.0), (9, 70.2)] {
            WeightService::log_weight(
                &store,
                user_id,
                LogWeightRequest {
                    weight: Some(kg),
                    date: Some((base + Duration::days(days)).fixed_offset()),
                },
            )
            .await
            .unwrap();
        }

        let weights: Vec<f64> = WeightService::history(&store, user_id)
            .await
            .unwrap()
            .iter()
            .map(|w| w.weight)
            .collect();
        assert_eq!(weights, vec![72.0, 71.0, 70.2]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(0.0))]
    #[case(Some(900.0))]
    #[tokio::test]
    async fn test_rejects_unusable_weight(#[case] weight: Option<f64>) {
        let store = MemoryKvStore::new();
        let err = WeightService::log_weight(
            &store,
            Uuid::new_v4(),
            LogWeightRequest { weight, date: None },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
