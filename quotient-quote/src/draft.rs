use quotient_catalog::{PriceHistoryStore, Product, RecommendationEngine};
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{Quote, QuoteLine, QuoteStatus};

/// An in-memory quote under interactive assembly.
///
/// Owned by the assembling session; operations take it by `&mut`, which
/// is also what serializes line mutations against each other.
#[derive(Debug, Clone)]
pub struct DraftQuote {
    pub customer_id: Option<Uuid>,
    pub items: Vec<QuoteLine>,
    pub currency: String,
    pub valid_days: u32,
    pub notes: String,
}

impl Default for DraftQuote {
    fn default() -> Self {
        Self {
            customer_id: None,
            items: Vec::new(),
            currency: "USD".to_string(),
            valid_days: 30,
            notes: String::new(),
        }
    }
}

impl DraftQuote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of quantity times unit price over all lines, in the draft's
    /// declared currency. Lines are assumed to be denominated in it.
    pub fn total(&self) -> f64 {
        self.items.iter().map(QuoteLine::line_total).sum()
    }

    /// Replaces the quantity at `index` with the coerced operator input.
    /// Does not touch `price_info`.
    pub fn update_line_quantity(&mut self, index: usize, raw: &str) {
        self.items[index].quantity = coerce_quantity(raw);
    }

    /// Replaces the unit price at `index` with the coerced operator input.
    /// Does not touch `price_info`.
    pub fn update_line_price(&mut self, index: usize, raw: &str) {
        self.items[index].unit_price = coerce_price(raw);
    }

    /// Removes the line at `index`, shifting later lines down.
    /// An out-of-range index is a caller bug and panics.
    pub fn remove_line(&mut self, index: usize) -> QuoteLine {
        self.items.remove(index)
    }

    /// Turns the draft into the persistable quote shape.
    ///
    /// Advisory `price_info` is derived data and is stripped here; it is
    /// recomputed from history whenever the quote is edited again.
    pub fn finalize(&self, quote_number: impl Into<String>) -> Result<Quote, QuoteError> {
        let customer_id = self.customer_id.ok_or(QuoteError::NoCustomer)?;
        if self.items.is_empty() {
            return Err(QuoteError::NoItems);
        }

        let items: Vec<QuoteLine> = self
            .items
            .iter()
            .cloned()
            .map(|mut line| {
                line.price_info = None;
                line
            })
            .collect();
        let total = items.iter().map(QuoteLine::line_total).sum();

        Ok(Quote {
            id: Uuid::new_v4(),
            quote_number: quote_number.into(),
            customer_id,
            items,
            total,
            currency: self.currency.clone(),
            valid_days: self.valid_days,
            notes: self.notes.trim().to_string(),
            status: QuoteStatus::Draft,
            created_at: chrono::Utc::now(),
        })
    }
}

/// Draft validation errors surfaced to the operator
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("A customer must be selected before saving the quote")]
    NoCustomer,

    #[error("A quote needs at least one line")]
    NoItems,
}

/// Operator-entered quantity: invalid or non-positive input becomes 1
pub fn coerce_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|q| *q > 0).unwrap_or(1)
}

/// Operator-entered price: invalid or negative input becomes 0
pub fn coerce_price(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

/// Adds lines to a draft and keeps their advisory pricing consistent
/// with the draft's selected customer.
pub struct QuoteAssembler {
    engine: RecommendationEngine,
}

impl QuoteAssembler {
    pub fn new(store: Arc<dyn PriceHistoryStore>) -> Self {
        Self {
            engine: RecommendationEngine::new(store),
        }
    }

    /// Appends one line for `product` at the end of the draft.
    ///
    /// When a customer is selected, the line opens at the last price
    /// charged to that customer; otherwise at the product's list price.
    /// The average-for-others figure is informational only and is never
    /// auto-applied.
    pub async fn add_line(&self, draft: &mut DraftQuote, product: &Product) {
        let price_info = match draft.customer_id {
            Some(customer_id) => Some(self.engine.recommend(product.id, customer_id).await),
            None => None,
        };

        let unit_price = price_info
            .as_ref()
            .and_then(|info| info.last_price_for_customer.as_ref())
            .map(|record| record.price)
            .unwrap_or(product.default_price);

        let unit = if product.unit.is_empty() {
            "pcs".to_string()
        } else {
            product.unit.clone()
        };

        draft.items.push(QuoteLine {
            product_id: product.id,
            product_code: product.code.clone(),
            product_name: product.name.clone(),
            quantity: 1,
            unit_price,
            unit,
            price_info,
        });
    }

    /// Selects `customer_id` and refreshes every line's advisory
    /// `price_info` in index order. Unit prices entered or suggested
    /// earlier are never overwritten.
    pub async fn set_customer(&self, draft: &mut DraftQuote, customer_id: Uuid) {
        draft.customer_id = Some(customer_id);

        tracing::debug!(
            %customer_id,
            lines = draft.items.len(),
            "refreshing price recommendations for draft"
        );

        for index in 0..draft.items.len() {
            let product_id = draft.items[index].product_id;
            let info = self.engine.recommend(product_id, customer_id).await;
            draft.items[index].price_info = Some(info);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_quantity_defaults() {
        assert_eq!(coerce_quantity("5"), 5);
        assert_eq!(coerce_quantity(" 12 "), 12);
        assert_eq!(coerce_quantity("0"), 1);
        assert_eq!(coerce_quantity("-3"), 1);
        assert_eq!(coerce_quantity("abc"), 1);
        assert_eq!(coerce_quantity(""), 1);
    }

    #[test]
    fn test_coerce_price_defaults() {
        assert_eq!(coerce_price("19.99"), 19.99);
        assert_eq!(coerce_price(" 0 "), 0.0);
        assert_eq!(coerce_price("-5"), 0.0);
        assert_eq!(coerce_price("NaN"), 0.0);
        assert_eq!(coerce_price("free"), 0.0);
    }

    fn line(unit_price: f64, quantity: u32) -> QuoteLine {
        QuoteLine {
            product_id: Uuid::new_v4(),
            product_code: "X".to_string(),
            product_name: "X".to_string(),
            quantity,
            unit_price,
            unit: "pcs".to_string(),
            price_info: None,
        }
    }

    #[test]
    fn test_total_sums_lines() {
        let mut draft = DraftQuote::new();
        assert_eq!(draft.total(), 0.0);

        draft.items.push(line(10.0, 2));
        draft.items.push(line(5.5, 3));
        assert!((draft.total() - 36.5).abs() < 1e-9);
    }

    #[test]
    fn test_update_operations_coerce_in_place() {
        let mut draft = DraftQuote::new();
        draft.items.push(line(10.0, 1));

        draft.update_line_quantity(0, "4");
        draft.update_line_price(0, "bogus");
        assert_eq!(draft.items[0].quantity, 4);
        assert_eq!(draft.items[0].unit_price, 0.0);
    }

    #[test]
    fn test_remove_restores_prior_sequence() {
        let mut draft = DraftQuote::new();
        draft.items.push(line(1.0, 1));
        draft.items.push(line(2.0, 1));
        let before = draft.items.clone();

        draft.items.push(line(3.0, 1));
        draft.remove_line(2);
        assert_eq!(draft.items, before);
    }

    #[test]
    #[should_panic]
    fn test_remove_out_of_range_panics() {
        let mut draft = DraftQuote::new();
        draft.remove_line(0);
    }

    #[test]
    fn test_finalize_requires_customer_and_items() {
        let mut draft = DraftQuote::new();
        assert!(matches!(
            draft.finalize("TKL-2026-0001"),
            Err(QuoteError::NoCustomer)
        ));

        draft.customer_id = Some(Uuid::new_v4());
        assert!(matches!(
            draft.finalize("TKL-2026-0001"),
            Err(QuoteError::NoItems)
        ));

        draft.items.push(line(10.0, 2));
        draft.notes = "  deliver by friday  ".to_string();
        let quote = draft.finalize("TKL-2026-0001").unwrap();
        assert_eq!(quote.total, 20.0);
        assert_eq!(quote.notes, "deliver by friday");
        assert_eq!(quote.status, QuoteStatus::Draft);
    }
}
