use crate::infra::InMemoryApplicationRepository;
use card_intake::config::ValidationConfig;
use card_intake::error::AppError;
use card_intake::intake::{
    bind_application, is_valid_frequent_flyer_number, ApplicationForm, ApplicationInput,
    ApplicationValidator, ApplyController, IntakeView, ModelErrors, RepositoryError,
    SCHEME_IDENTIFIERS,
};
use clap::Args;
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct FrequentFlyerArgs {
    /// Number to check, e.g. 012345-A
    pub(crate) number: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional minimum applicant age applied during the demo
    #[arg(long)]
    pub(crate) min_age: Option<i32>,
    /// Optional minimum gross annual income applied during the demo
    #[arg(long)]
    pub(crate) min_income: Option<Decimal>,
}

pub(crate) fn run_frequent_flyer_check(args: FrequentFlyerArgs) -> Result<(), AppError> {
    let verdict = if is_valid_frequent_flyer_number(&args.number) {
        "valid"
    } else {
        "invalid"
    };
    println!("{}: {}", args.number, verdict);
    if verdict == "invalid" {
        let schemes: String = SCHEME_IDENTIFIERS.iter().collect();
        println!("Expected six digits, a separator, then one of [{schemes}]");
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let validation = ValidationConfig {
        min_age: args.min_age,
        min_income: args.min_income,
        ..ValidationConfig::default()
    };
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let controller = ApplyController::with_validator(
        repository.clone(),
        ApplicationValidator::from_config(&validation),
    );

    println!("Credit card intake demo");
    render_view("Begin application", &controller.begin_application());

    let view = controller
        .submit_application(ApplicationInput::default(), ModelErrors::new())
        .await?;
    render_view("Blank submission", &view);

    let (input, model_errors) = bind_application(ApplicationForm {
        first_name: Some("Sarah".to_string()),
        last_name: Some("Smith".to_string()),
        age: Some("eighteen".to_string()),
        frequent_flyer_number: None,
        gross_annual_income: Some("100000.50".to_string()),
    });
    let view = controller.submit_application(input, model_errors).await?;
    render_view("Age typed as words", &view);

    let view = controller
        .submit_application(demo_applicant("012345-a"), ModelErrors::new())
        .await?;
    render_view("Lowercase scheme identifier", &view);

    let view = controller
        .submit_application(demo_applicant("012345-A"), ModelErrors::new())
        .await?;
    render_view("Corrected submission", &view);

    let records = repository
        .records()
        .map_err(|err: RepositoryError| AppError::Intake(err.into()))?;
    println!("\nStored applications: {}", records.len());
    for record in records {
        println!(
            "- {} | {} {} | status {} | received {}",
            record.id.0,
            record.application.first_name,
            record.application.last_name,
            record.status.label(),
            record.received_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    Ok(())
}

fn demo_applicant(frequent_flyer_number: &str) -> ApplicationInput {
    ApplicationInput {
        first_name: "Sarah".to_string(),
        last_name: "Smith".to_string(),
        age: 18,
        frequent_flyer_number: Some(frequent_flyer_number.to_string()),
        gross_annual_income: Decimal::new(10_000_050, 2),
    }
}

fn render_view(step: &str, view: &IntakeView) {
    println!("\n{step} -> view {}", view.view_name());
    if let IntakeView::ShowForm { input, errors } = view {
        println!(
            "  Echoed: {} {} | age {} | ffn {} | income {}",
            input.first_name,
            input.last_name,
            input.age,
            input.frequent_flyer_number.as_deref().unwrap_or("-"),
            input.gross_annual_income
        );
        for error in errors {
            println!("  - {}: {}", error.field, error.message);
        }
    }
}
