use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product with its list price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// List price used when no customer-specific history applies
    pub default_price: f64,
    pub currency: String,
    /// Sales unit, e.g. "pcs", "kg", "m"
    pub unit: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>, default_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            description: None,
            default_price,
            currency: "USD".to_string(),
            unit: "pcs".to_string(),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    /// "CODE - Name" label used in search results and line items
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        let product = Product::new("PMP-100", "Centrifugal Pump", 450.0);
        assert_eq!(product.label(), "PMP-100 - Centrifugal Pump");
    }

    #[test]
    fn test_new_defaults() {
        let product = Product::new("VLV-20", "Gate Valve", 85.5);
        assert_eq!(product.currency, "USD");
        assert_eq!(product.unit, "pcs");
        assert!(product.description.is_none());
    }
}
