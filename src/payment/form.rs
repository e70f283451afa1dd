use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

static EXPIRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

const MIN_CARD_DIGITS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentField {
    CardNumber,
    ExpiryDate,
    Cvv,
    CardholderName,
    Email,
    BillingAddress,
    City,
    ZipCode,
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentField::CardNumber => "card_number",
            PaymentField::ExpiryDate => "expiry_date",
            PaymentField::Cvv => "cvv",
            PaymentField::CardholderName => "cardholder_name",
            PaymentField::Email => "email",
            PaymentField::BillingAddress => "billing_address",
            PaymentField::City => "city",
            PaymentField::ZipCode => "zip_code",
        };
        f.write_str(name)
    }
}

/// A problem with one form field, shown next to that field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: PaymentField,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentForm {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
    pub email: String,
    pub billing_address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for PaymentForm {
    fn default() -> Self {
        Self {
            card_number: String::new(),
            expiry_date: String::new(),
            cvv: String::new(),
            cardholder_name: String::new(),
            email: String::new(),
            billing_address: String::new(),
            city: String::new(),
            zip_code: String::new(),
            country: "United States".to_string(),
        }
    }
}

impl PaymentForm {
    /// Check every field. Returns all errors at once, in form order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut fail = |field, message| errors.push(FieldError { field, message });

        let card: String = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        if card.len() < MIN_CARD_DIGITS || !card.chars().all(|c| c.is_ascii_digit()) {
            fail(PaymentField::CardNumber, "Please enter a valid card number");
        }

        if !EXPIRY_RE.is_match(self.expiry_date.trim()) {
            fail(PaymentField::ExpiryDate, "Please enter a valid expiry date");
        }

        let cvv = self.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            fail(PaymentField::Cvv, "Please enter a valid CVV");
        }

        if self.cardholder_name.trim().is_empty() {
            fail(PaymentField::CardholderName, "Please enter cardholder name");
        }

        if !EMAIL_RE.is_match(&self.email) {
            fail(PaymentField::Email, "Please enter a valid email address");
        }

        if self.billing_address.trim().is_empty() {
            fail(PaymentField::BillingAddress, "Please enter billing address");
        }

        if self.city.trim().is_empty() {
            fail(PaymentField::City, "Please enter city");
        }

        if self.zip_code.trim().is_empty() {
            fail(PaymentField::ZipCode, "Please enter zip code");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Last four digits of the card, for receipts
    pub fn card_last4(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}

/// Group card digits in fours as they are typed ("4111111111111111" -> "4111 1111 1111 1111").
///
/// Non-digits are dropped and input past 16 digits is ignored.
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MIN_CARD_DIGITS)
        .collect();
    if digits.len() < 4 {
        return digits.into_iter().collect();
    }
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert the slash once two digits are typed ("1225" -> "12/25")
pub fn format_expiry_date(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let year: String = digits.chars().skip(2).take(2).collect();
        format!("{}/{}", &digits[..2], year)
    } else {
        digits
    }
}

/// Digits only, at most four
pub fn sanitize_cvv(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).take(4).collect()
}
