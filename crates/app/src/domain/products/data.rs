//! Products Data

/// Product Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: u64,
    pub unit: String,
}
