//! Keyword-based product suggestion
//!
//! Maps message content to catalog products. Only consulted once a
//! conversation has reached the loan discussion stage.

use std::sync::Arc;

use loan_advisor_core::{LoanProduct, ProductCatalog};

/// Category rules checked in order; each matching rule contributes the
/// product it names, so a message can accumulate several suggestions.
const CATEGORY_RULES: [(&[&str], &str); 5] = [
    (&["home", "house", "mortgage"], "home_plus"),
    (&["car", "vehicle", "auto"], "auto_express"),
    (&["business", "company", "startup"], "biz_growth"),
    (&["debt", "consolidate", "credit card"], "debt_relief"),
    (&["school", "college", "education", "study"], "edu_future"),
];

/// How many catalog entries to suggest when nothing matches.
const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Selects loan products matching a message.
pub struct SuggestionSelector {
    catalog: Arc<ProductCatalog>,
}

impl SuggestionSelector {
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self { catalog }
    }

    /// Return products matching the message, in rule order.
    ///
    /// A message with no category match falls back to the first catalog
    /// entries in declared order.
    pub fn select(&self, message: &str) -> Vec<LoanProduct> {
        let lowered = message.to_lowercase();
        let mut suggestions = Vec::new();

        for (keywords, product_id) in CATEGORY_RULES {
            if keywords.iter().any(|k| lowered.contains(k)) {
                if let Some(product) = self.catalog.product(product_id) {
                    suggestions.push(product.clone());
                }
            }
        }

        if suggestions.is_empty() {
            suggestions = self.catalog.top(DEFAULT_SUGGESTION_COUNT).to_vec();
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> SuggestionSelector {
        SuggestionSelector::new(Arc::new(test_catalog()))
    }

    // Minimal catalog mirroring the production lineup order.
    fn test_catalog() -> ProductCatalog {
        let ids = [
            "home_plus",
            "auto_express",
            "biz_growth",
            "debt_relief",
            "edu_future",
        ];
        let products = ids
            .iter()
            .map(|id| LoanProduct {
                id: id.to_string(),
                name: id.to_uppercase(),
                description: format!("{} description.", id),
                min_amount: 1_000,
                max_amount: 10_000,
                interest_rate: 5.0,
                term_months: vec![12, 24],
                eligibility: vec![],
            })
            .collect();
        ProductCatalog::new(products)
    }

    fn ids(products: &[LoanProduct]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_mortgage_selects_home_product() {
        let suggestions = selector().select("I'm shopping for a mortgage");
        assert_eq!(ids(&suggestions), vec!["home_plus"]);
    }

    #[test]
    fn test_multiple_categories_accumulate_in_rule_order() {
        let suggestions = selector().select("Funding for my business and some debt cleanup");
        assert_eq!(ids(&suggestions), vec!["biz_growth", "debt_relief"]);
    }

    #[test]
    fn test_credit_card_phrase_matches_debt_relief() {
        // "card" also contains "car", so the auto rule fires first
        let suggestions = selector().select("My credit card balance is out of hand");
        assert_eq!(ids(&suggestions), vec!["auto_express", "debt_relief"]);
    }

    #[test]
    fn test_no_match_returns_catalog_front() {
        let suggestions = selector().select("I'd like to talk money");
        assert_eq!(ids(&suggestions), vec!["home_plus", "auto_express", "biz_growth"]);
    }

    #[test]
    fn test_case_insensitive() {
        let suggestions = selector().select("LOOKING AT A NEW CAR");
        assert_eq!(ids(&suggestions), vec!["auto_express"]);
    }
}
