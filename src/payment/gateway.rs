use super::form::{FieldError, PaymentForm};
use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::thread;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_SUCCESS_RATE: f64 = 0.8;
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(3);

const SHARED_FEATURES: &[&str] = &[
    "Advanced Assessment (150+ questions)",
    "Detailed Performance Analytics",
    "Career Mapping & Recommendations",
    "Industry Trends & Insights",
    "Peer Comparison Analytics",
    "AI-Powered Career Guidance",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Monthly,
    #[default]
    Annual,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Monthly, Plan::Annual];

    pub fn name(self) -> &'static str {
        match self {
            Plan::Monthly => "Premium Monthly",
            Plan::Annual => "Premium Annual",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            Plan::Monthly => "$9.99",
            Plan::Annual => "$79.99",
        }
    }

    pub fn period(self) -> &'static str {
        match self {
            Plan::Monthly => "per month",
            Plan::Annual => "per year",
        }
    }

    /// Undiscounted price, shown struck through
    pub fn original_price(self) -> Option<&'static str> {
        match self {
            Plan::Monthly => None,
            Plan::Annual => Some("$119.88"),
        }
    }

    pub fn savings(self) -> Option<&'static str> {
        match self {
            Plan::Monthly => None,
            Plan::Annual => Some("Save 33%"),
        }
    }

    /// Highlighted as the recommended choice
    pub fn is_popular(self) -> bool {
        matches!(self, Plan::Annual)
    }

    pub fn features(self) -> Vec<&'static str> {
        let extra: &[&str] = match self {
            Plan::Monthly => &["Email Support"],
            Plan::Annual => &[
                "Priority Support",
                "Export Reports",
                "Advanced Analytics Dashboard",
                "Career Development Tracking",
            ],
        };
        SHARED_FEATURES.iter().chain(extra).copied().collect()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Idle,
    Processing,
    Success,
    Error,
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("payment failed, please try again")]
    Declined,
}

/// Decides whether a simulated charge goes through
pub trait OutcomeSource {
    fn approve(&mut self) -> bool;
}

/// Approves with a fixed probability
#[derive(Debug, Clone)]
pub struct RandomOutcome {
    success_rate: f64,
}

impl RandomOutcome {
    /// Rates outside [0, 1] are clamped. A non-finite rate never approves.
    pub fn new(success_rate: f64) -> Self {
        let success_rate = if success_rate.is_finite() {
            success_rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { success_rate }
    }
}

impl Default for RandomOutcome {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_RATE)
    }
}

impl OutcomeSource for RandomOutcome {
    fn approve(&mut self) -> bool {
        rand::thread_rng().gen_bool(self.success_rate)
    }
}

/// Always gives the same answer
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub bool);

impl OutcomeSource for FixedOutcome {
    fn approve(&mut self) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub plan: Plan,
    pub amount: &'static str,
    pub card_last4: String,
    pub email: String,
}

/// Simulated checkout: validate, wait, then ask the outcome source.
pub struct PaymentGateway<O: OutcomeSource> {
    delay: Duration,
    outcome: O,
    status: PaymentStatus,
}

impl PaymentGateway<RandomOutcome> {
    pub fn random(delay: Duration, success_rate: f64) -> Self {
        Self::new(delay, RandomOutcome::new(success_rate))
    }
}

impl<O: OutcomeSource> PaymentGateway<O> {
    pub fn new(delay: Duration, outcome: O) -> Self {
        Self {
            delay,
            outcome,
            status: PaymentStatus::Idle,
        }
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Run one payment attempt.
    ///
    /// An invalid form is rejected before any delay and puts the status back to idle.
    /// A decline leaves the status at `Error`; calling again retries.
    pub fn process(&mut self, form: &PaymentForm, plan: Plan) -> Result<Receipt, PaymentError> {
        if let Err(errors) = form.validate() {
            tracing::debug!(count = errors.len(), "payment form rejected");
            self.status = PaymentStatus::Idle;
            return Err(PaymentError::Invalid(errors));
        }

        self.status = PaymentStatus::Processing;
        tracing::debug!(plan = %plan, delay = ?self.delay, "processing payment");
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        if self.outcome.approve() {
            self.status = PaymentStatus::Success;
            tracing::info!(plan = %plan, "payment approved");
            Ok(Receipt {
                plan,
                amount: plan.price(),
                card_last4: form.card_last4(),
                email: form.email.trim().to_string(),
            })
        } else {
            self.status = PaymentStatus::Error;
            tracing::info!(plan = %plan, "payment declined");
            Err(PaymentError::Declined)
        }
    }

    /// Back to idle, as when the checkout is closed
    pub fn reset(&mut self) {
        self.status = PaymentStatus::Idle;
    }
}
