//! Markup and margin on a single sale

use serde::{Deserialize, Serialize};

use crate::common::{Checker, Metric, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub cost_price: f64,
    pub selling_price: f64,
}

impl Validate for PricingInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("costPrice", self.cost_price)
            .amount("sellingPrice", self.selling_price)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupOutput {
    #[serde(flatten)]
    pub input: PricingInput,
    pub markup_price: f64,
    /// Markup over cost (percent)
    pub markup_percentage: Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginOutput {
    #[serde(flatten)]
    pub input: PricingInput,
    pub gross_profit: f64,
    /// Profit over selling price (percent)
    pub margin_percentage: Metric,
    pub markup_percentage: Metric,
}

pub fn markup(input: &PricingInput) -> MarkupOutput {
    let markup_price = input.selling_price - input.cost_price;
    MarkupOutput {
        input: input.clone(),
        markup_price,
        markup_percentage: Metric::percent(markup_price, input.cost_price),
    }
}

pub fn margin(input: &PricingInput) -> MarginOutput {
    let profit = input.selling_price - input.cost_price;
    MarginOutput {
        input: input.clone(),
        gross_profit: profit,
        margin_percentage: Metric::percent(profit, input.selling_price),
        markup_percentage: Metric::percent(profit, input.cost_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(cost: f64, price: f64) -> PricingInput {
        PricingInput {
            cost_price: cost,
            selling_price: price,
        }
    }

    #[test]
    fn test_markup() {
        let out = markup(&sale(100.0, 150.0));
        assert_eq!(out.markup_price, 50.0);
        assert_eq!(out.markup_percentage, Metric::Finite(50.0));
    }

    #[test]
    fn test_margin() {
        let out = margin(&sale(100.0, 150.0));
        assert_eq!(out.gross_profit, 50.0);
        let pct = out.margin_percentage.value().unwrap();
        assert!((pct - 33.333333).abs() < 1e-5, "Expected 33.33% margin, got {}", pct);
        assert_eq!(out.markup_percentage, Metric::Finite(50.0));
    }

    #[test]
    fn test_selling_at_a_loss() {
        let out = margin(&sale(120.0, 90.0));
        assert_eq!(out.gross_profit, -30.0);
        assert!(out.margin_percentage.value().unwrap() < 0.0);
    }

    #[test]
    fn test_zero_prices_not_finite() {
        assert_eq!(markup(&sale(0.0, 10.0)).markup_percentage, Metric::NotFinite);
        assert_eq!(margin(&sale(10.0, 0.0)).margin_percentage, Metric::NotFinite);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = sale(-1.0, 10.0).validate().unwrap_err();
        assert!(err.has_field("costPrice"));
        assert!(!err.has_field("sellingPrice"));
    }
}
