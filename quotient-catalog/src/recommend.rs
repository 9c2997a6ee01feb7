use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::history::{PriceHistoryStore, PriceRecord};

/// Average price charged to every customer other than the one being quoted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceAverage {
    pub average: f64,
    /// Number of records that contributed to the average
    pub count: usize,
}

/// The two advisory figures shown next to a quote line.
///
/// Derived on demand from the product's price history; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Most recent price charged to this customer for the product
    pub last_price_for_customer: Option<PriceRecord>,
    /// Mean over all other customers' records. Prices are summed as-is:
    /// records in different currencies contaminate the mean.
    pub average_for_others: Option<PriceAverage>,
}

impl RecommendationResult {
    /// Single pass over the product's history. Ties on `created_at` are
    /// broken arbitrarily (first maximum encountered wins).
    pub fn from_records(records: &[PriceRecord], customer_id: Uuid) -> Self {
        let mut last: Option<&PriceRecord> = None;
        let mut sum = 0.0;
        let mut count = 0usize;

        for record in records {
            if record.customer_id == customer_id {
                match last {
                    Some(current) if current.created_at >= record.created_at => {}
                    _ => last = Some(record),
                }
            } else {
                sum += record.price;
                count += 1;
            }
        }

        Self {
            last_price_for_customer: last.cloned(),
            average_for_others: (count > 0).then(|| PriceAverage {
                average: sum / count as f64,
                count,
            }),
        }
    }

    /// True when there is nothing advisory to show
    pub fn is_empty(&self) -> bool {
        self.last_price_for_customer.is_none() && self.average_for_others.is_none()
    }
}

/// Computes price recommendations from the history store.
pub struct RecommendationEngine {
    store: Arc<dyn PriceHistoryStore>,
}

impl RecommendationEngine {
    pub fn new(store: Arc<dyn PriceHistoryStore>) -> Self {
        Self { store }
    }

    /// Recommendation for pricing `product_id` towards `customer_id`.
    ///
    /// A failed history lookup degrades to the empty result: quote
    /// assembly must never block on an unreachable history backend.
    pub async fn recommend(&self, product_id: Uuid, customer_id: Uuid) -> RecommendationResult {
        match self.store.list_price_records(product_id).await {
            Ok(records) => RecommendationResult::from_records(&records, customer_id),
            Err(err) => {
                tracing::warn!(
                    %product_id,
                    %customer_id,
                    error = %err,
                    "price history lookup failed, proceeding without recommendation"
                );
                RecommendationResult::default()
            }
        }
    }
}
