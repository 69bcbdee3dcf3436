use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::domain::{ApplicationInput, FieldError, ValidationOutcome};
use super::frequent_flyer::{
    ContractViolation, FrequentFlyerNumberValidator, SchemeFrequentFlyerValidator,
    SCHEME_IDENTIFIERS,
};
use crate::config::ValidationConfig;

/// One check over a submission. Rules append field errors in order and only
/// return `Err` when a collaborator's calling contract was broken.
pub trait ApplicationRule: Send + Sync {
    fn check(
        &self,
        input: &ApplicationInput,
        errors: &mut Vec<FieldError>,
    ) -> Result<(), ContractViolation>;
}

/// Ordered rule set producing a [`ValidationOutcome`].
pub struct ApplicationValidator {
    rules: Vec<Box<dyn ApplicationRule>>,
}

impl ApplicationValidator {
    pub fn new(rules: Vec<Box<dyn ApplicationRule>>) -> Self {
        Self { rules }
    }

    /// Names required plus the frequent flyer grammar.
    pub fn standard() -> Self {
        Self::with_frequent_flyer_validator(Arc::new(SchemeFrequentFlyerValidator))
    }

    pub fn with_frequent_flyer_validator(
        validator: Arc<dyn FrequentFlyerNumberValidator>,
    ) -> Self {
        Self::new(vec![
            Box::new(RequiredText::first_name()),
            Box::new(RequiredText::last_name()),
            Box::new(FrequentFlyerNumberRule::new(validator)),
        ])
    }

    /// Standard rules followed by whichever bounds the configuration sets.
    pub fn from_config(config: &ValidationConfig) -> Self {
        let mut validator = Self::standard();
        if config.min_age.is_some() || config.max_age.is_some() {
            validator.push(AgeRange {
                min: config.min_age,
                max: config.max_age,
            });
        }
        if config.min_income.is_some() || config.max_income.is_some() {
            validator.push(IncomeRange {
                min: config.min_income,
                max: config.max_income,
            });
        }
        validator
    }

    pub fn push(&mut self, rule: impl ApplicationRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn validate(
        &self,
        input: &ApplicationInput,
    ) -> Result<ValidationOutcome, ContractViolation> {
        let mut errors = Vec::new();
        for rule in &self.rules {
            rule.check(input, &mut errors)?;
        }
        Ok(ValidationOutcome::from_errors(errors))
    }
}

impl Default for ApplicationValidator {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for ApplicationValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationValidator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Rejects blank text fields.
pub struct RequiredText {
    field: &'static str,
    message: &'static str,
    select: fn(&ApplicationInput) -> &str,
}

impl RequiredText {
    pub fn first_name() -> Self {
        Self {
            field: "first_name",
            message: "Please provide a first name",
            select: |input| input.first_name.as_str(),
        }
    }

    pub fn last_name() -> Self {
        Self {
            field: "last_name",
            message: "Please provide a last name",
            select: |input| input.last_name.as_str(),
        }
    }
}

impl ApplicationRule for RequiredText {
    fn check(
        &self,
        input: &ApplicationInput,
        errors: &mut Vec<FieldError>,
    ) -> Result<(), ContractViolation> {
        if (self.select)(input).trim().is_empty() {
            errors.push(FieldError::new(self.field, self.message));
        }
        Ok(())
    }
}

/// Applies the frequent flyer grammar when a number was supplied.
pub struct FrequentFlyerNumberRule {
    validator: Arc<dyn FrequentFlyerNumberValidator>,
}

impl FrequentFlyerNumberRule {
    pub fn new(validator: Arc<dyn FrequentFlyerNumberValidator>) -> Self {
        Self { validator }
    }
}

impl ApplicationRule for FrequentFlyerNumberRule {
    fn check(
        &self,
        input: &ApplicationInput,
        errors: &mut Vec<FieldError>,
    ) -> Result<(), ContractViolation> {
        let Some(number) = input.frequent_flyer_number.as_deref() else {
            return Ok(());
        };

        if !self.validator.is_valid(Some(number))? {
            let schemes = SCHEME_IDENTIFIERS
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            errors.push(FieldError::new(
                "frequent_flyer_number",
                format!(
                    "Frequent flyer number must be six digits, a separator, then one of {schemes}"
                ),
            ));
        }
        Ok(())
    }
}

/// Inclusive age bounds; either side may be open.
#[derive(Debug, Clone, Copy)]
pub struct AgeRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl ApplicationRule for AgeRange {
    fn check(
        &self,
        input: &ApplicationInput,
        errors: &mut Vec<FieldError>,
    ) -> Result<(), ContractViolation> {
        if let Some(message) = out_of_range("age", input.age, self.min, self.max) {
            errors.push(FieldError::new("age", message));
        }
        Ok(())
    }
}

/// Inclusive gross annual income bounds; either side may be open.
#[derive(Debug, Clone, Copy)]
pub struct IncomeRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

impl ApplicationRule for IncomeRange {
    fn check(
        &self,
        input: &ApplicationInput,
        errors: &mut Vec<FieldError>,
    ) -> Result<(), ContractViolation> {
        if let Some(message) = out_of_range(
            "gross annual income",
            input.gross_annual_income,
            self.min,
            self.max,
        ) {
            errors.push(FieldError::new("gross_annual_income", message));
        }
        Ok(())
    }
}

fn out_of_range<T>(label: &str, value: T, min: Option<T>, max: Option<T>) -> Option<String>
where
    T: PartialOrd + fmt::Display + Copy,
{
    match (min, max) {
        (Some(min), _) if value < min => Some(format!("{label} must be at least {min}")),
        (_, Some(max)) if value > max => Some(format!("{label} must be at most {max}")),
        _ => None,
    }
}
