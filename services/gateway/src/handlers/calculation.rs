use crate::error::AppError;
use crate::models::{CalculationResponse, CalculatorForm};
use crate::state::AppState;
use axum::{extract::State, Json};
use uuid::Uuid;

pub async fn calculate(
    State(state): State<AppState>,
    Json(form): Json<CalculatorForm>,
) -> Result<Json<CalculationResponse>, AppError> {
    let calculation_id = Uuid::now_v7();

    // 1. Parse raw form text; the calculator is never invoked on bad text
    let inputs = form
        .into_inputs(state.default_sizing_policy)
        .inspect_err(|e| {
            tracing::info!(%calculation_id, field = %e.field, "rejected unparseable form field");
        })?;

    // 2. Compute
    let metrics = state.calculator.compute(&inputs).inspect_err(|e| {
        tracing::info!(%calculation_id, kind = ?e.kind, "rejected trade inputs: {}", e);
    })?;

    // 3. Render
    let report = calculator::render(&metrics);

    tracing::info!(
        %calculation_id,
        side = ?inputs.side,
        leverage = inputs.leverage,
        advisories = ?metrics.advisories,
        "calculation complete"
    );

    Ok(Json(CalculationResponse {
        calculation_id,
        metrics,
        report,
    }))
}

pub async fn defaults() -> Json<CalculatorForm> {
    Json(CalculatorForm::default())
}
