use quotient_catalog::Customer;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::Quote;

/// Id-to-name lookup built once before rendering or filtering a list
pub fn customer_name_map(customers: &[Customer]) -> HashMap<Uuid, String> {
    customers
        .iter()
        .map(|customer| (customer.id, customer.name.clone()))
        .collect()
}

/// Orders quotes the way the list screen shows them: newest first
pub fn sort_newest_first(quotes: &mut [Quote]) {
    quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Case-insensitive filter over quote number, customer name and notes.
///
/// Customer names come from the caller as an id-to-name map since quotes
/// only carry the customer id. An empty or whitespace query matches all.
pub fn filter_quotes<'a>(
    quotes: &'a [Quote],
    customer_names: &HashMap<Uuid, String>,
    query: &str,
) -> Vec<&'a Quote> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return quotes.iter().collect();
    }

    quotes
        .iter()
        .filter(|quote| {
            let customer = customer_names
                .get(&quote.customer_id)
                .map(|name| name.to_lowercase())
                .unwrap_or_default();

            quote.quote_number.to_lowercase().contains(&term)
                || customer.contains(&term)
                || quote.notes.to_lowercase().contains(&term)
        })
        .collect()
}
