//! Break-even analysis with a linear profit sweep

use serde::{Deserialize, Serialize};

use crate::common::validation::MAX_SWEEP_POINTS;
use crate::common::{Checker, Metric, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenInput {
    pub fixed_costs: f64,
    pub variable_cost_per_unit: f64,
    pub price_per_unit: f64,
    pub units_from: u32,
    pub units_to: u32,
    pub units_step: u32,
}

impl BreakEvenInput {
    fn sweep_points(&self) -> u64 {
        if self.units_step == 0 || self.units_to < self.units_from {
            return 0;
        }
        u64::from(self.units_to - self.units_from) / u64::from(self.units_step) + 1
    }
}

impl Validate for BreakEvenInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("fixedCosts", self.fixed_costs)
            .amount("variableCostPerUnit", self.variable_cost_per_unit)
            .amount("pricePerUnit", self.price_per_unit)
            .rule("unitsTo", self.units_from <= self.units_to, "must not be below unitsFrom")
            .rule("unitsStep", self.units_step > 0, "must be positive")
            .rule(
                "unitsStep",
                self.sweep_points() <= u64::from(MAX_SWEEP_POINTS),
                "sweep would produce too many points",
            )
            .finish()
    }
}

/// Costs, revenue and profit at one production volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenPoint {
    pub units: u32,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenOutput {
    #[serde(flatten)]
    pub input: BreakEvenInput,
    pub contribution_margin: f64,
    pub contribution_margin_ratio: Metric,
    /// Units needed to cover fixed costs; not finite when each unit loses money
    pub break_even_units: Metric,
    pub break_even_revenue: Metric,
    pub sweep: Vec<BreakEvenPoint>,
}

pub fn break_even(input: &BreakEvenInput) -> BreakEvenOutput {
    let margin = input.price_per_unit - input.variable_cost_per_unit;
    let units = if margin > 0.0 {
        Metric::ratio(input.fixed_costs, margin)
    } else {
        Metric::NotFinite
    };

    let points = input.sweep_points().min(u64::from(MAX_SWEEP_POINTS)) as u32;
    let sweep = (0..points)
        .map(|i| {
            let units = input.units_from + i * input.units_step;
            let total_cost = input.fixed_costs + input.variable_cost_per_unit * units as f64;
            let total_revenue = input.price_per_unit * units as f64;
            BreakEvenPoint {
                units,
                total_cost,
                total_revenue,
                net_profit: total_revenue - total_cost,
            }
        })
        .collect();

    BreakEvenOutput {
        input: input.clone(),
        contribution_margin: margin,
        contribution_margin_ratio: Metric::ratio(margin, input.price_per_unit),
        break_even_units: units,
        break_even_revenue: units.map(|u| u * input.price_per_unit),
        sweep,
    }
}
