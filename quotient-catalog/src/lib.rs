pub mod customer;
pub mod history;
pub mod product;
pub mod recommend;

pub use customer::Customer;
pub use history::{HistoryError, MemoryPriceHistory, PriceHistoryStore, PriceRecord};
pub use product::Product;
pub use recommend::{PriceAverage, RecommendationEngine, RecommendationResult};
