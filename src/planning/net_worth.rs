//! Net worth statement

use serde::{Deserialize, Serialize};

use crate::common::{Checker, Metric, Validate, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assets {
    pub cash_and_bank: f64,
    pub investments: f64,
    pub real_estate: f64,
    pub vehicles: f64,
    pub retirement_accounts: f64,
    pub other_assets: f64,
}

impl Assets {
    pub fn total(&self) -> f64 {
        self.cash_and_bank
            + self.investments
            + self.real_estate
            + self.vehicles
            + self.retirement_accounts
            + self.other_assets
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Liabilities {
    pub home_loan: f64,
    pub vehicle_loan: f64,
    pub personal_loan: f64,
    pub credit_card_debt: f64,
    pub education_loan: f64,
    pub other_liabilities: f64,
}

impl Liabilities {
    pub fn total(&self) -> f64 {
        self.home_loan
            + self.vehicle_loan
            + self.personal_loan
            + self.credit_card_debt
            + self.education_loan
            + self.other_liabilities
    }
}

/// Missing categories count as zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetWorthInput {
    pub assets: Assets,
    pub liabilities: Liabilities,
}

impl Validate for NetWorthInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let a = &self.assets;
        let l = &self.liabilities;
        Checker::new()
            .amount("assets.cashAndBank", a.cash_and_bank)
            .amount("assets.investments", a.investments)
            .amount("assets.realEstate", a.real_estate)
            .amount("assets.vehicles", a.vehicles)
            .amount("assets.retirementAccounts", a.retirement_accounts)
            .amount("assets.otherAssets", a.other_assets)
            .amount("liabilities.homeLoan", l.home_loan)
            .amount("liabilities.vehicleLoan", l.vehicle_loan)
            .amount("liabilities.personalLoan", l.personal_loan)
            .amount("liabilities.creditCardDebt", l.credit_card_debt)
            .amount("liabilities.educationLoan", l.education_loan)
            .amount("liabilities.otherLiabilities", l.other_liabilities)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthOutput {
    #[serde(flatten)]
    pub input: NetWorthInput,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    /// Liabilities over assets; not finite with no assets
    pub debt_to_asset_ratio: Metric,
}

pub fn net_worth(input: &NetWorthInput) -> NetWorthOutput {
    let total_assets = input.assets.total();
    let total_liabilities = input.liabilities.total();

    NetWorthOutput {
        input: input.clone(),
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        debt_to_asset_ratio: Metric::ratio(total_liabilities, total_assets),
    }
}
