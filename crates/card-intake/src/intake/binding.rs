use std::str::FromStr;

use serde::Deserialize;

use super::domain::{ApplicationInput, ModelErrors};

/// Raw form fields exactly as posted; every field is text so binding never
/// fails before the controller sees the submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<String>,
    pub frequent_flyer_number: Option<String>,
    pub gross_annual_income: Option<String>,
}

/// Bind posted text into an [`ApplicationInput`], collecting conversion
/// failures instead of aborting.
///
/// Absent numeric fields take their default. A numeric field that is present
/// but blank or unparseable keeps its default and records a model error.
/// An empty frequent flyer number binds to `None`; any other text, padding
/// included, is passed through untouched for validation to judge.
pub fn bind_application(form: ApplicationForm) -> (ApplicationInput, ModelErrors) {
    let mut errors = ModelErrors::new();

    let age = bind_number(form.age, "age", &mut errors);
    let gross_annual_income =
        bind_number(form.gross_annual_income, "gross_annual_income", &mut errors);

    let frequent_flyer_number = form
        .frequent_flyer_number
        .filter(|value| !value.is_empty());

    let input = ApplicationInput {
        first_name: form.first_name.unwrap_or_default(),
        last_name: form.last_name.unwrap_or_default(),
        age,
        frequent_flyer_number,
        gross_annual_income,
    };

    (input, errors)
}

fn bind_number<T>(raw: Option<String>, field: &'static str, errors: &mut ModelErrors) -> T
where
    T: FromStr + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("A value is required for {field}"));
        return T::default();
    }

    match trimmed.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            errors.add(field, format!("The value '{trimmed}' is not valid for {field}"));
            T::default()
        }
    }
}
