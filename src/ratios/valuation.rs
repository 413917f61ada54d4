//! Valuation ratios: P/E, NAV per unit, enterprise value

use serde::{Deserialize, Serialize};

use crate::common::{Checker, Metric, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeRatioInput {
    pub share_price: f64,
    /// May be negative for loss-making companies
    pub earnings_per_share: f64,
}

impl Validate for PeRatioInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("sharePrice", self.share_price)
            .signed_amount("earningsPerShare", self.earnings_per_share)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeRatioOutput {
    #[serde(flatten)]
    pub input: PeRatioInput,
    pub pe_ratio: Metric,
    /// Earnings over price (percent)
    pub earnings_yield: Metric,
}

pub fn pe_ratio(input: &PeRatioInput) -> PeRatioOutput {
    PeRatioOutput {
        input: input.clone(),
        pe_ratio: Metric::ratio(input.share_price, input.earnings_per_share),
        earnings_yield: Metric::percent(input.earnings_per_share, input.share_price),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavInput {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub units_outstanding: f64,
}

impl Validate for NavInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("totalAssets", self.total_assets)
            .amount("totalLiabilities", self.total_liabilities)
            .amount("unitsOutstanding", self.units_outstanding)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavOutput {
    #[serde(flatten)]
    pub input: NavInput,
    pub net_assets: f64,
    /// Net assets per unit
    pub nav: Metric,
}

pub fn nav(input: &NavInput) -> NavOutput {
    let net_assets = input.total_assets - input.total_liabilities;
    NavOutput {
        input: input.clone(),
        net_assets,
        nav: Metric::ratio(net_assets, input.units_outstanding),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseValueInput {
    pub market_cap: f64,
    pub total_debt: f64,
    pub cash_and_equivalents: f64,
    #[serde(default)]
    pub preferred_equity: f64,
    #[serde(default)]
    pub minority_interest: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebitda: Option<f64>,
}

impl Validate for EnterpriseValueInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::new();
        checker
            .amount("marketCap", self.market_cap)
            .amount("totalDebt", self.total_debt)
            .amount("cashAndEquivalents", self.cash_and_equivalents)
            .amount("preferredEquity", self.preferred_equity)
            .amount("minorityInterest", self.minority_interest);
        if let Some(ebitda) = self.ebitda {
            checker.signed_amount("ebitda", ebitda);
        }
        checker.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseValueOutput {
    #[serde(flatten)]
    pub input: EnterpriseValueInput,
    pub enterprise_value: f64,
    /// Not finite when EBITDA is absent or zero
    pub ev_to_ebitda: Metric,
}

pub fn enterprise_value(input: &EnterpriseValueInput) -> EnterpriseValueOutput {
    let ev = input.market_cap + input.total_debt + input.preferred_equity + input.minority_interest
        - input.cash_and_equivalents;

    EnterpriseValueOutput {
        input: input.clone(),
        enterprise_value: ev,
        ev_to_ebitda: input
            .ebitda
            .map(|ebitda| Metric::ratio(ev, ebitda))
            .unwrap_or(Metric::NotFinite),
    }
}
