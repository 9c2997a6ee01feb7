use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// An immutable historical fact: one price charged for a product to a customer.
/// Written when a quote is persisted, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub product_id: Uuid,
    pub customer_id: Uuid,
    /// The quote the price was charged on, when known
    pub quote_id: Option<Uuid>,
    pub price: f64,
    /// Kept verbatim; records for one product may carry mixed currencies
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// Price-history related errors
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Unknown product: {0}")]
    UnknownProduct(Uuid),

    #[error("Price history backend unavailable: {0}")]
    Unavailable(String),
}

/// Collaborator contract for historical price lookups.
///
/// A product with no history returns an empty vector, never an error.
#[async_trait]
pub trait PriceHistoryStore: Send + Sync {
    async fn list_price_records(&self, product_id: Uuid) -> Result<Vec<PriceRecord>, HistoryError>;
}

/// In-memory price history keyed by product, for tests and in-process embedding
#[derive(Default)]
pub struct MemoryPriceHistory {
    records: RwLock<HashMap<Uuid, Vec<PriceRecord>>>,
}

impl MemoryPriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, record: PriceRecord) {
        self.records
            .write()
            .await
            .entry(record.product_id)
            .or_default()
            .push(record);
    }

    pub async fn record_count(&self, product_id: Uuid) -> usize {
        self.records
            .read()
            .await
            .get(&product_id)
            .map(|records| records.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl PriceHistoryStore for MemoryPriceHistory {
    async fn list_price_records(&self, product_id: Uuid) -> Result<Vec<PriceRecord>, HistoryError> {
        Ok(self
            .records
            .read()
            .await
            .get(&product_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product_id: Uuid, price: f64) -> PriceRecord {
        PriceRecord {
            product_id,
            customer_id: Uuid::new_v4(),
            quote_id: None,
            price,
            currency: "USD".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_empty_history_is_ok_not_error() {
        let store = MemoryPriceHistory::new();
        let records = store.list_price_records(Uuid::new_v4()).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_append_and_list() {
        let store = MemoryPriceHistory::new();
        let product_id = Uuid::new_v4();

        store.append(record(product_id, 100.0)).await;
        store.append(record(product_id, 80.0)).await;
        store.append(record(Uuid::new_v4(), 999.0)).await;

        let records = store.list_price_records(product_id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.product_id == product_id));
    }
}
