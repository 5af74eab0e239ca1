//! Loan product catalog
//!
//! Declares the fixed lineup of products the advisor can offer. Declared
//! order is the catalog order; default suggestions take the first entries.

use loan_advisor_core::{LoanProduct, ProductCatalog};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Product catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products in catalog order
    #[serde(default)]
    pub products: Vec<LoanProduct>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products: vec![
                home_plus(),
                auto_express(),
                biz_growth(),
                debt_relief(),
                edu_future(),
            ],
        }
    }
}

impl CatalogConfig {
    /// Build the immutable catalog shared across requests
    pub fn build(&self) -> ProductCatalog {
        ProductCatalog::new(self.products.clone())
    }

    /// Get product by ID
    pub fn get_product(&self, id: &str) -> Option<&LoanProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Validate catalog contents
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.products.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.products".to_string(),
                message: "Catalog must contain at least one product".to_string(),
            });
        }

        for product in &self.products {
            if product.min_amount > product.max_amount {
                return Err(ConfigError::InvalidValue {
                    field: format!("catalog.products.{}", product.id),
                    message: "min_amount exceeds max_amount".to_string(),
                });
            }
            if product.term_months.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("catalog.products.{}", product.id),
                    message: "At least one term option is required".to_string(),
                });
            }
        }

        Ok(())
    }
}

fn home_plus() -> LoanProduct {
    LoanProduct {
        id: "home_plus".to_string(),
        name: "HomePlus Mortgage".to_string(),
        description: "Flexible home loan with competitive fixed and variable rate options, \
                      ideal for first-time buyers and upgraders."
            .to_string(),
        min_amount: 50_000,
        max_amount: 750_000,
        interest_rate: 6.25,
        term_months: vec![120, 180, 240, 360],
        eligibility: vec![
            "Minimum credit score 670".to_string(),
            "Stable employment history".to_string(),
            "Debt-to-income ratio below 45%".to_string(),
        ],
    }
}

fn auto_express() -> LoanProduct {
    LoanProduct {
        id: "auto_express".to_string(),
        name: "AutoExpress Loan".to_string(),
        description: "Quick approval car loan with low down payment and flexible terms \
                      for new and used vehicles."
            .to_string(),
        min_amount: 5_000,
        max_amount: 80_000,
        interest_rate: 5.1,
        term_months: vec![36, 48, 60, 72],
        eligibility: vec![
            "Credit score 630+".to_string(),
            "Vehicle not older than 7 years".to_string(),
            "Proof of insurance".to_string(),
        ],
    }
}

fn biz_growth() -> LoanProduct {
    LoanProduct {
        id: "biz_growth".to_string(),
        name: "BizGrowth Line".to_string(),
        description: "Revolving line of credit for small businesses covering working \
                      capital and expansion needs."
            .to_string(),
        min_amount: 10_000,
        max_amount: 250_000,
        interest_rate: 8.9,
        term_months: vec![12, 24, 36, 48],
        eligibility: vec![
            "2+ years operating history".to_string(),
            "Annual revenue above $120k".to_string(),
            "Business credit score 70+".to_string(),
        ],
    }
}

fn debt_relief() -> LoanProduct {
    LoanProduct {
        id: "debt_relief".to_string(),
        name: "DebtRelief Consolidation".to_string(),
        description: "Personal loan designed to consolidate multiple debts into a single \
                      manageable payment."
            .to_string(),
        min_amount: 3_000,
        max_amount: 60_000,
        interest_rate: 7.4,
        term_months: vec![24, 36, 48, 60],
        eligibility: vec![
            "Credit score 650+".to_string(),
            "No bankruptcies in last 3 years".to_string(),
            "Proof of employment".to_string(),
        ],
    }
}

fn edu_future() -> LoanProduct {
    LoanProduct {
        id: "edu_future".to_string(),
        name: "EduFuture Loan".to_string(),
        description: "Education financing for undergraduate and postgraduate programs \
                      with grace periods."
            .to_string(),
        min_amount: 2_000,
        max_amount: 120_000,
        interest_rate: 4.8,
        term_months: vec![48, 72, 96, 144],
        eligibility: vec![
            "Enrollment proof".to_string(),
            "Co-signer for applicants with limited credit".to_string(),
            "Flexible repayment grace period".to_string(),
        ],
    }
}
