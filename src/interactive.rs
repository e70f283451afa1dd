use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};

use crate::payment::{format_card_number, format_expiry_date, sanitize_cvv, FieldError, PaymentField, PaymentForm};
use crate::quiz::{Category, Progress, Question, QuizSession, ScoreMap};

/// Line-based terminal dialogue over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Prompt user with a message and return their trimmed input.
    /// End of input is an error so loops never spin forever.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt user with a message and a default value. Returns default if input is empty.
    pub fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Prompt user with a yes/no question. Returns bool based on input and default.
    pub fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?;
        let input = input.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    /// Walk through every question, re-asking until a valid option is chosen.
    /// Options are shown and entered 1-based.
    pub fn run_quiz<C: Category>(&mut self, questions: &[Question<C>]) -> Result<ScoreMap<C>> {
        let mut session = QuizSession::new(questions);

        while let Some(question) = session.current_question() {
            self.say("")?;
            self.say(&format!(
                "Question {} of {} ({:.0}%) - {}",
                session.current_index() + 1,
                session.question_count(),
                session.progress_percent(),
                question.category
            ))?;
            self.say(&question.prompt)?;
            for (i, option) in question.options.iter().enumerate() {
                self.say(&format!("  {}. {}", i + 1, option))?;
            }

            let count = question.options.len();
            let answer = loop {
                let input = self.prompt(&format!("Your answer (1-{}): ", count))?;
                match input.parse::<usize>() {
                    Ok(n) if (1..=count).contains(&n) => break n - 1,
                    _ => self.say(&format!("  Invalid: enter a number from 1 to {}.", count))?,
                }
            };

            if let Progress::Complete = session.submit_answer(answer)? {
                break;
            }
        }

        session
            .scores()
            .cloned()
            .context("Quiz ended before every question was answered")
    }

    /// Ask for every payment field that is still blank, formatting card
    /// input as it would be typed. Country is only confirmed when something
    /// else had to be asked.
    pub fn fill_payment_form(&mut self, mut form: PaymentForm) -> Result<PaymentForm> {
        let mut asked = false;
        if form.card_number.trim().is_empty() {
            form.card_number = format_card_number(&self.prompt("Card number: ")?);
            asked = true;
        }
        if form.expiry_date.trim().is_empty() {
            form.expiry_date = format_expiry_date(&self.prompt("Expiry (MM/YY): ")?);
            asked = true;
        }
        if form.cvv.trim().is_empty() {
            form.cvv = sanitize_cvv(&self.prompt("CVV: ")?);
            asked = true;
        }
        if form.cardholder_name.trim().is_empty() {
            form.cardholder_name = self.prompt("Cardholder name: ")?;
            asked = true;
        }
        if form.email.trim().is_empty() {
            form.email = self.prompt("Email: ")?;
            asked = true;
        }
        if form.billing_address.trim().is_empty() {
            form.billing_address = self.prompt("Billing address: ")?;
            asked = true;
        }
        if form.city.trim().is_empty() {
            form.city = self.prompt("City: ")?;
            asked = true;
        }
        if form.zip_code.trim().is_empty() {
            form.zip_code = self.prompt("Zip code: ")?;
            asked = true;
        }
        if asked {
            form.country = self.prompt_with_default("Country", &form.country)?;
        }
        Ok(form)
    }

    /// Show field errors and blank the offending fields so they are asked again
    pub fn report_field_errors(&mut self, form: &mut PaymentForm, errors: &[FieldError]) -> Result<()> {
        for error in errors {
            self.say(&format!("  - {}", error))?;
            clear_field(form, error.field);
        }
        Ok(())
    }
}

fn clear_field(form: &mut PaymentForm, field: PaymentField) {
    let slot = match field {
        PaymentField::CardNumber => &mut form.card_number,
        PaymentField::ExpiryDate => &mut form.expiry_date,
        PaymentField::Cvv => &mut form.cvv,
        PaymentField::CardholderName => &mut form.cardholder_name,
        PaymentField::Email => &mut form.email,
        PaymentField::BillingAddress => &mut form.billing_address,
        PaymentField::City => &mut form.city,
        PaymentField::ZipCode => &mut form.zip_code,
    };
    slot.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{basic_questions, Stream};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&console.output).to_string()
    }

    #[test]
    fn test_prompt_trims() {
        let mut c = console("  hello \n");
        assert_eq!(c.prompt("> ").unwrap(), "hello");
        assert_eq!(printed(&c), "> ");
    }

    #[test]
    fn test_prompt_eof_is_error() {
        let mut c = console("");
        assert!(c.prompt("> ").is_err());
    }

    #[test]
    fn test_prompt_with_default() {
        let mut c = console("\nIndia\n");
        assert_eq!(c.prompt_with_default("Country", "United States").unwrap(), "United States");
        assert_eq!(c.prompt_with_default("Country", "United States").unwrap(), "India");
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut c = console("\nn\nYES\n");
        assert!(c.prompt_yes_no("Continue?", true).unwrap());
        assert!(!c.prompt_yes_no("Continue?", true).unwrap());
        assert!(c.prompt_yes_no("Continue?", false).unwrap());
    }

    #[test]
    fn test_run_quiz_reasks_invalid_answers() {
        // "9" and "x" are rejected, then five valid answers
        let mut c = console("9\nx\n1\n2\n3\n4\n1\n");
        let scores = c.run_quiz(&basic_questions()).unwrap();
        assert_eq!(scores.get(Stream::Science), 15);
        let out = printed(&c);
        assert_eq!(out.matches("Invalid: enter a number from 1 to 4.").count(), 2);
        assert!(out.contains("Question 5 of 5 (100%)"));
    }

    #[test]
    fn test_run_quiz_stops_on_closed_input() {
        let mut c = console("1\n2\n");
        assert!(c.run_quiz(&basic_questions()).is_err());
    }

    #[test]
    fn test_fill_payment_form_formats_input() {
        let input = "4111111111111111\n1227\n12a3\nAsha Rao\nasha@example.com\n12 MG Road\nPune\n411001\n\n";
        let mut c = console(input);
        let form = c.fill_payment_form(PaymentForm::default()).unwrap();
        assert_eq!(form.card_number, "4111 1111 1111 1111");
        assert_eq!(form.expiry_date, "12/27");
        assert_eq!(form.cvv, "123");
        assert_eq!(form.country, "United States");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_fill_payment_form_keeps_given_fields() {
        let given = PaymentForm {
            card_number: "4111 1111 1111 1111".to_string(),
            expiry_date: "12/27".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            billing_address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            ..Default::default()
        };
        let mut c = console("411001\nIndia\n");
        let form = c.fill_payment_form(given).unwrap();
        assert_eq!(form.zip_code, "411001");
        assert_eq!(form.country, "India");
    }

    #[test]
    fn test_fill_payment_form_complete_asks_nothing() {
        let given = PaymentForm {
            card_number: "4111 1111 1111 1111".to_string(),
            expiry_date: "12/27".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            billing_address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            zip_code: "411001".to_string(),
            ..Default::default()
        };
        let mut c = console("");
        let form = c.fill_payment_form(given.clone()).unwrap();
        assert_eq!(form, given);
        assert!(printed(&c).is_empty());
    }

    #[test]
    fn test_report_field_errors_clears_fields() {
        let mut form = PaymentForm {
            card_number: "4111".to_string(),
            city: "Pune".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let mut c = console("");
        c.report_field_errors(&mut form, &errors).unwrap();
        assert!(form.card_number.is_empty());
        assert_eq!(form.city, "Pune");
        assert!(printed(&c).contains("card_number: Please enter a valid card number"));
    }
}
