use chrono::{DateTime, Duration, Utc};
use quotient_catalog::{PriceRecord, RecommendationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quote lifecycle status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
    Rejected,
}

/// One product entry within a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub product_id: Uuid,
    pub product_code: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub unit: String,
    /// Advisory pricing hints; derived, refreshed on customer change,
    /// stripped before the quote is persisted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_info: Option<RecommendationResult>,
}

impl QuoteLine {
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// A finalized quote, in the shape handed to the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub quote_number: String,
    pub customer_id: Uuid,
    pub items: Vec<QuoteLine>,
    pub total: f64,
    pub currency: String,
    pub valid_days: u32,
    pub notes: String,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn valid_until(&self) -> DateTime<Utc> {
        self.created_at + Duration::days(self.valid_days as i64)
    }

    /// The history facts this quote contributes once persisted: one
    /// record per line, all stamped with the quote's creation time.
    pub fn price_records(&self) -> Vec<PriceRecord> {
        self.items
            .iter()
            .map(|line| PriceRecord {
                product_id: line.product_id,
                customer_id: self.customer_id,
                quote_id: Some(self.id),
                price: line.unit_price,
                currency: self.currency.clone(),
                created_at: self.created_at,
            })
            .collect()
    }
}
