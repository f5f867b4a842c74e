//! Record types and the sample dataset.
//!
//! The dataset is constructed once at startup and never mutated, so handlers
//! read it without any synchronization.

use serde::{Deserialize, Serialize};

/// Monthly sales figure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SalesRecord {
    /// Month label, e.g. "Enero"
    pub month: String,
    /// Sales amount; always non-negative
    pub amount: f64,
}

impl SalesRecord {
    pub fn new(month: impl Into<String>, amount: f64) -> Self {
        Self {
            month: month.into(),
            amount,
        }
    }
}

/// A user account entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserRecord {
    pub name: String,
    /// "Admin" or "User"
    pub role: String,
    pub active: bool,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, role: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            active,
        }
    }
}

/// The full in-memory dataset served by the API and dashboard.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub sales: Vec<SalesRecord>,
    pub users: Vec<UserRecord>,
}

impl Dataset {
    /// The fixed sample dataset: six months of sales and three users.
    pub fn sample() -> Self {
        Self {
            sales: vec![
                SalesRecord::new("Enero", 12000.0),
                SalesRecord::new("Febrero", 15000.0),
                SalesRecord::new("Marzo", 18000.0),
                SalesRecord::new("Abril", 14000.0),
                SalesRecord::new("Mayo", 20000.0),
                SalesRecord::new("Junio", 22000.0),
            ],
            users: vec![
                UserRecord::new("Juan Pérez", "Admin", true),
                UserRecord::new("María García", "User", true),
                UserRecord::new("Carlos López", "User", false),
            ],
        }
    }

    /// Total sales amount across all months.
    pub fn total_sales(&self) -> f64 {
        self.sales.iter().map(|record| record.amount).sum()
    }
}
