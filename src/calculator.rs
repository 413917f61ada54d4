//! Calculator registry and tagged request dispatch
//!
//! Every calculator is a [`Calculator`] pairing its kind with a validator and a
//! pure formula. Requests arrive as `{"kind": "sip", "input": {...}}` and come
//! back as `{"kind": "sip", "output": {...}}`.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::annuity::*;
use crate::common::{Validate, ValidationErrors};
use crate::error::{CalcError, Result};
use crate::growth::*;
use crate::loan::*;
use crate::planning::*;
use crate::ratios::*;
use crate::returns::*;
use crate::withdrawal::*;

/// Validation followed by a pure computation
pub struct Calculator<I, O> {
    pub kind: CalculatorKind,
    validate: fn(&I) -> std::result::Result<(), ValidationErrors>,
    compute: fn(&I) -> O,
}

impl<I, O> Calculator<I, O> {
    pub const fn new(
        kind: CalculatorKind,
        validate: fn(&I) -> std::result::Result<(), ValidationErrors>,
        compute: fn(&I) -> O,
    ) -> Self {
        Self { kind, validate, compute }
    }

    /// Validate `input`, then compute
    pub fn evaluate(&self, input: &I) -> Result<O> {
        if let Err(errors) = (self.validate)(input) {
            warn!("{} input rejected: {}", self.kind, errors);
            return Err(errors.into());
        }
        debug!("evaluating {}", self.kind);
        Ok((self.compute)(input))
    }
}

macro_rules! calculators {
    ($($variant:ident, $tag:literal, $calc:ident: $input:ty => $output:ty = $func:path;)+) => {
        /// Every calculator the library exposes
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum CalculatorKind {
            $($variant,)+
        }

        impl CalculatorKind {
            pub const ALL: &'static [CalculatorKind] = &[$(CalculatorKind::$variant,)+];

            /// Wire tag, as used in the `kind` field of requests
            pub fn as_str(self) -> &'static str {
                match self {
                    $(CalculatorKind::$variant => $tag,)+
                }
            }
        }

        $(
            pub const $calc: Calculator<$input, $output> =
                Calculator::new(CalculatorKind::$variant, <$input as Validate>::validate, $func);
        )+

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind", content = "input", rename_all = "snake_case")]
        pub enum CalculationRequest {
            $($variant($input),)+
        }

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind", content = "output", rename_all = "snake_case")]
        pub enum CalculationResult {
            $($variant($output),)+
        }

        impl CalculationRequest {
            pub fn kind(&self) -> CalculatorKind {
                match self {
                    $(CalculationRequest::$variant(_) => CalculatorKind::$variant,)+
                }
            }
        }

        impl CalculationResult {
            pub fn kind(&self) -> CalculatorKind {
                match self {
                    $(CalculationResult::$variant(_) => CalculatorKind::$variant,)+
                }
            }
        }

        /// Validate and run whichever calculator the request names
        pub fn evaluate(request: &CalculationRequest) -> Result<CalculationResult> {
            match request {
                $(CalculationRequest::$variant(input) => $calc.evaluate(input).map(CalculationResult::$variant),)+
            }
        }
    };
}

calculators! {
    Lumpsum, "lumpsum", LUMPSUM: LumpsumInput => LumpsumOutput = lumpsum;
    FixedDeposit, "fixed_deposit", FIXED_DEPOSIT: FixedDepositInput => FixedDepositOutput = fixed_deposit;
    FutureValue, "future_value", FUTURE_VALUE: FutureValueInput => FutureValueOutput = future_value;
    Cagr, "cagr", CAGR: CagrInput => CagrOutput = cagr;
    SimpleInterest, "simple_interest", SIMPLE_INTEREST: SimpleInterestInput => SimpleInterestOutput = simple_interest;
    Sip, "sip", SIP: SipInput => SipOutput = sip;
    RecurringDeposit, "recurring_deposit", RECURRING_DEPOSIT: RecurringDepositInput => RecurringDepositOutput = recurring_deposit;
    Ppf, "ppf", PPF: PpfInput => PpfOutput = ppf;
    WealthGain, "wealth_gain", WEALTH_GAIN: WealthGainInput => WealthGainOutput = wealth_gain;
    StepUpSip, "step_up_sip", STEP_UP_SIP: StepUpSipInput => StepUpSipOutput = step_up_sip;
    SipDelay, "sip_delay", SIP_DELAY: SipDelayInput => SipDelayOutput = sip_delay;
    Emi, "emi", EMI: EmiInput => EmiOutput = emi;
    Swp, "swp", SWP: SwpInput => SwpOutput = swp;
    Roi, "roi", ROI: RoiInput => RoiOutput = roi;
    AnnualizedReturn, "annualized_return", ANNUALIZED_RETURN: AnnualizedReturnInput => AnnualizedReturnOutput = annualized_return;
    Xirr, "xirr", XIRR: XirrInput => XirrOutput = xirr;
    Markup, "markup", MARKUP: PricingInput => MarkupOutput = markup;
    Margin, "margin", MARGIN: PricingInput => MarginOutput = margin;
    BreakEven, "break_even", BREAK_EVEN: BreakEvenInput => BreakEvenOutput = break_even;
    PeRatio, "pe_ratio", PE_RATIO: PeRatioInput => PeRatioOutput = pe_ratio;
    Nav, "nav", NAV: NavInput => NavOutput = nav;
    EnterpriseValue, "enterprise_value", ENTERPRISE_VALUE: EnterpriseValueInput => EnterpriseValueOutput = enterprise_value;
    Inflation, "inflation", INFLATION: InflationInput => InflationOutput = inflation;
    NetWorth, "net_worth", NET_WORTH: NetWorthInput => NetWorthOutput = net_worth;
    Retirement, "retirement", RETIREMENT: RetirementInput => RetirementOutput = retirement;
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        CalculatorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CalcError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Metric;
    use crate::planning::{Assets, Liabilities};

    fn roundtrip(request: &CalculationRequest) -> CalculationResult {
        let result = evaluate(request).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result, "{} output changed across JSON", request.kind());
        result
    }

    #[test]
    fn test_kind_tags_match_serde() {
        assert_eq!(CalculatorKind::ALL.len(), 25);
        for kind in CalculatorKind::ALL {
            let tag = serde_json::to_value(kind).unwrap();
            assert_eq!(tag, serde_json::Value::String(kind.as_str().to_string()));
            assert_eq!(kind.as_str().parse::<CalculatorKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        let err = "mortgage".parse::<CalculatorKind>().unwrap_err();
        assert!(matches!(err, CalcError::UnknownKind(ref k) if k == "mortgage"));
    }

    #[test]
    fn test_request_wire_format() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{"kind": "sip", "input": {"monthlyInvestment": 25000, "expectedReturnRate": 12, "timePeriod": 10}}"#,
        )
        .unwrap();
        assert_eq!(request.kind(), CalculatorKind::Sip);

        let json = serde_json::to_value(evaluate(&request).unwrap()).unwrap();
        assert_eq!(json["kind"], "sip");
        assert_eq!(json["output"]["monthlyInvestment"], 25000.0);
        assert_eq!(json["output"]["investedAmount"], 3_000_000.0);
        assert!(json["output"]["yearly"].is_array());
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let request = CalculationRequest::Sip(SipInput {
            monthly_investment: -1.0,
            expected_return_rate: 250.0,
            time_period: 0,
        });
        match evaluate(&request) {
            Err(CalcError::Validation(errors)) => {
                assert_eq!(errors.errors.len(), 3);
                assert!(errors.has_field("expectedReturnRate"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_markup_roundtrip() {
        let result = roundtrip(&CalculationRequest::Markup(PricingInput {
            cost_price: 100.0,
            selling_price: 150.0,
        }));
        match result {
            CalculationResult::Markup(out) => {
                assert_eq!(out.markup_price, 50.0);
                assert_eq!(out.markup_percentage, Metric::Finite(50.0));
            }
            other => panic!("Unexpected result {:?}", other.kind()),
        }
    }

    #[test]
    fn test_not_finite_roundtrips_as_null() {
        let request = CalculationRequest::PeRatio(PeRatioInput {
            share_price: 10.0,
            earnings_per_share: 0.0,
        });
        let json = serde_json::to_value(evaluate(&request).unwrap()).unwrap();
        assert!(json["output"]["peRatio"].is_null());
        roundtrip(&request);
    }

    #[test]
    fn test_outputs_roundtrip() {
        let requests = vec![
            CalculationRequest::Lumpsum(LumpsumInput {
                total_investment: 25_000.0,
                expected_return_rate: 12.0,
                time_period: 10,
            }),
            CalculationRequest::Emi(EmiInput {
                loan_amount: 2_500_000.0,
                interest_rate: 8.5,
                loan_tenure: 15,
                tenure_unit: Default::default(),
                loan_kind: LoanKind::Home,
            }),
            CalculationRequest::Swp(SwpInput {
                total_investment: 500_000.0,
                withdrawal_per_month: 10_000.0,
                expected_return_rate: 8.0,
                time_period: 10,
            }),
            CalculationRequest::BreakEven(BreakEvenInput {
                fixed_costs: 20_000.0,
                variable_cost_per_unit: 12.5,
                price_per_unit: 20.0,
                units_from: 0,
                units_to: 5_000,
                units_step: 500,
            }),
            CalculationRequest::EnterpriseValue(EnterpriseValueInput {
                market_cap: 1_000.0,
                total_debt: 200.0,
                cash_and_equivalents: 50.0,
                preferred_equity: 0.0,
                minority_interest: 0.0,
                ebitda: Some(115.0),
            }),
            CalculationRequest::Retirement(RetirementInput {
                current_age: 35,
                retirement_age: 60,
                life_expectancy: 85,
                current_monthly_expenses: 40_000.0,
                inflation_rate: 6.0,
                pre_retirement_return: 11.0,
                post_retirement_return: 7.0,
                existing_savings: 1_000_000.0,
            }),
        ];
        for request in &requests {
            let result = roundtrip(request);
            assert_eq!(result.kind(), request.kind());
        }
    }

    #[test]
    fn test_net_worth_roundtrip() {
        let result = roundtrip(&CalculationRequest::NetWorth(NetWorthInput {
            assets: Assets {
                cash_and_bank: 200_000.0,
                investments: 1_500_000.0,
                real_estate: 6_000_000.0,
                ..Default::default()
            },
            liabilities: Liabilities {
                home_loan: 3_000_000.0,
                credit_card_debt: 40_000.0,
                ..Default::default()
            },
        }));
        if let CalculationResult::NetWorth(out) = result {
            assert_eq!(out.total_assets, 7_700_000.0);
            assert_eq!(out.total_liabilities, 3_040_000.0);
            assert_eq!(out.net_worth, 4_660_000.0);
        } else {
            panic!("Expected net worth result");
        }
    }
}
