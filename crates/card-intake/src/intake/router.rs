use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde_json::json;

use super::binding::{bind_application, ApplicationForm};
use super::controller::{ApplyController, ApplyError, IntakeView};
use super::repository::{CreditCardApplicationRepository, RepositoryError};

/// Router builder exposing the two step intake flow.
pub fn apply_router<R>(controller: Arc<ApplyController<R>>) -> Router
where
    R: CreditCardApplicationRepository + 'static,
{
    Router::new()
        .route("/apply", get(begin_handler::<R>).post(submit_handler::<R>))
        .with_state(controller)
}

pub(crate) async fn begin_handler<R>(
    State(controller): State<Arc<ApplyController<R>>>,
) -> Response
where
    R: CreditCardApplicationRepository + 'static,
{
    render(controller.begin_application())
}

pub(crate) async fn submit_handler<R>(
    State(controller): State<Arc<ApplyController<R>>>,
    Form(form): Form<ApplicationForm>,
) -> Response
where
    R: CreditCardApplicationRepository + 'static,
{
    let (input, model_errors) = bind_application(form);
    match controller.submit_application(input, model_errors).await {
        Ok(view) => render(view),
        Err(ApplyError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "application already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

fn render(view: IntakeView) -> Response {
    let status = match &view {
        IntakeView::ShowEmptyForm => StatusCode::OK,
        IntakeView::ShowForm { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        IntakeView::ShowCompletion => StatusCode::CREATED,
    };
    (status, axum::Json(view.payload())).into_response()
}
