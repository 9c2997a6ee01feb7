use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer quotes are addressed to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            company: None,
            email: None,
            phone: None,
            address: None,
            created_at: Utc::now(),
        }
    }

    /// Display label used in pickers: name, with the company when present
    pub fn label(&self) -> String {
        match &self.company {
            Some(company) if !company.is_empty() => format!("{} ({})", self.name, company),
            _ => self.name.clone(),
        }
    }
}
