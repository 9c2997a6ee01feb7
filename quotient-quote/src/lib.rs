pub mod draft;
pub mod models;
pub mod numbering;
pub mod search;

pub use draft::{coerce_price, coerce_quantity, DraftQuote, QuoteAssembler, QuoteError};
pub use models::{Quote, QuoteLine, QuoteStatus};
pub use numbering::next_quote_number;
pub use search::{customer_name_map, filter_quotes, sort_newest_first};
