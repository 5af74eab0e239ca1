//! Loan product records and the read-only catalog

use serde::{Deserialize, Serialize};

/// A single loan product offering
///
/// Defined once at startup from the catalog configuration and never
/// mutated afterwards; shared by reference across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanProduct {
    /// Stable product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// One-sentence description
    pub description: String,
    /// Minimum loan amount in dollars
    pub min_amount: u64,
    /// Maximum loan amount in dollars
    pub max_amount: u64,
    /// Starting interest rate as a percentage
    pub interest_rate: f64,
    /// Available terms in months, ascending
    pub term_months: Vec<u32>,
    /// Human-readable eligibility criteria
    #[serde(default)]
    pub eligibility: Vec<String>,
}

impl LoanProduct {
    /// Longest available term in months
    pub fn max_term_months(&self) -> u32 {
        self.term_months.iter().copied().max().unwrap_or(0)
    }

    /// Shortest available term in months
    pub fn min_term_months(&self) -> u32 {
        self.term_months.iter().copied().min().unwrap_or(0)
    }
}

/// Read-only product catalog with stable, declared ordering
///
/// Iteration order is the declaration order of the source configuration,
/// which makes default suggestions reproducible.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<LoanProduct>,
}

impl ProductCatalog {
    /// Create a catalog from products in their declared order
    pub fn new(products: Vec<LoanProduct>) -> Self {
        Self { products }
    }

    /// All products in declared order
    pub fn products(&self) -> &[LoanProduct] {
        &self.products
    }

    /// Look up a product by id
    pub fn product(&self, id: &str) -> Option<&LoanProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First `n` products in declared order
    pub fn top(&self, n: usize) -> &[LoanProduct] {
        &self.products[..n.min(self.products.len())]
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
