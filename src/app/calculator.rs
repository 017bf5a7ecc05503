use std::fmt::{Display, Formatter};

use thiserror::Error;
use tracing::debug;

/// Text shown to the user whenever any field is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid positive numbers for all fields.";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    MonthlyInvestment,
    AnnualRate,
    Tenure,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::MonthlyInvestment => write!(f, "monthly investment"),
            Field::AnnualRate => write!(f, "annual rate"),
            Field::Tenure => write!(f, "tenure"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Reason {
    NotANumber,
    NotPositive,
    Negative,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {reason:?}")]
pub struct InvalidInputError {
    pub field: Field,
    pub reason: Reason,
}

impl InvalidInputError {
    fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }

    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

/// The three fields exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub monthly_investment: String,
    pub annual_rate: String,
    pub tenure_years: String,
}

impl RawInputs {
    pub fn new(
        monthly_investment: impl Into<String>,
        annual_rate: impl Into<String>,
        tenure_years: impl Into<String>,
    ) -> Self {
        Self {
            monthly_investment: monthly_investment.into(),
            annual_rate: annual_rate.into(),
            tenure_years: tenure_years.into(),
        }
    }

    pub fn validate(&self) -> Result<ValidatedInputs, InvalidInputError> {
        let monthly_investment = parse_finite(&self.monthly_investment, Field::MonthlyInvestment)?;
        let annual_rate_percent = parse_finite(&self.annual_rate, Field::AnnualRate)?;
        let years = parse_finite(&self.tenure_years, Field::Tenure)?;

        if monthly_investment <= 0.0 {
            return Err(InvalidInputError::new(Field::MonthlyInvestment, Reason::NotPositive));
        }
        if annual_rate_percent < 0.0 {
            return Err(InvalidInputError::new(Field::AnnualRate, Reason::Negative));
        }
        if years <= 0.0 {
            return Err(InvalidInputError::new(Field::Tenure, Reason::NotPositive));
        }

        Ok(ValidatedInputs {
            monthly_investment,
            annual_rate_percent,
            years,
        })
    }
}

fn parse_finite(text: &str, field: Field) -> Result<f64, InvalidInputError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InvalidInputError::new(field, Reason::NotANumber))
}

/// Inputs that passed validation: contribution and tenure are positive, rate is non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValidatedInputs {
    monthly_investment: f64,
    annual_rate_percent: f64,
    years: f64,
}

impl TryFrom<&RawInputs> for ValidatedInputs {
    type Error = InvalidInputError;

    fn try_from(raw: &RawInputs) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

impl ValidatedInputs {
    pub fn monthly_investment(&self) -> f64 {
        self.monthly_investment
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn years(&self) -> f64 {
        self.years
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent() / 12.0 / 100.0
    }

    /// Number of monthly contributions. Not rounded: half a year is six periods,
    /// a tenth of a year is 1.2.
    pub fn periods(&self) -> f64 {
        self.years() * 12.0
    }

    pub fn calculate(&self) -> CalculationResult {
        self.calculate_with(ContributionTiming::default())
    }

    pub fn calculate_with(&self, timing: ContributionTiming) -> CalculationResult {
        let p = self.monthly_investment();
        let i = self.monthly_rate();
        let n = self.periods();

        let future_value = future_value(p, i, n, timing);
        let total_invested = p * n;
        let result = CalculationResult {
            future_value,
            total_invested,
            estimated_returns: future_value - total_invested,
        };
        debug!(
            monthly_investment = p,
            monthly_rate = i,
            periods = n,
            %timing,
            future_value = result.future_value,
            "calculated sip projection"
        );
        result
    }
}

/// When in each month the contribution is made.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContributionTiming {
    /// Annuity due: every contribution compounds for its own month too.
    #[default]
    StartOfMonth,
    /// Ordinary annuity.
    EndOfMonth,
}

impl Display for ContributionTiming {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ContributionTiming::StartOfMonth => write!(f, "Start of month"),
            ContributionTiming::EndOfMonth => write!(f, "End of month"),
        }
    }
}

/// Future value of `n` monthly contributions of `p` at monthly rate `i`.
pub fn future_value(p: f64, i: f64, n: f64, timing: ContributionTiming) -> f64 {
    // the general formula divides by i
    if i == 0.0 {
        return p * n;
    }

    // ((1 + i)^n - 1) / i without losing i to rounding when it is tiny
    let growth = (n * i.ln_1p()).exp_m1() / i;
    let value = match timing {
        ContributionTiming::StartOfMonth => p * growth * (1.0 + i),
        ContributionTiming::EndOfMonth => p * growth,
    };

    // from one whole period on the value never falls short of the sum paid in;
    // near-zero rates can still round a hair under it
    if timing == ContributionTiming::StartOfMonth || n >= 1.0 {
        value.max(p * n)
    } else {
        value
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalculationResult {
    pub future_value: f64,
    pub total_invested: f64,
    pub estimated_returns: f64,
}
