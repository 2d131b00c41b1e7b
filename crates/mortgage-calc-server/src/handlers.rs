use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    Json,
};
use mortgage_calc_core::parse::{parse_amount, parse_rate_update, parse_schedule};
use mortgage_calc_core::{
    calculator, MortgageAmountRequest, MortgageResult, PaymentAmountRequest,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::response::{
    ApiResponse, HealthBody, InterestRateBody, MortgageAmountBody, PaymentAmountBody,
    RateChangeBody,
};
use crate::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Raw `/payment-amount/` query parameters, all required.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentAmountParams {
    #[serde(rename = "asking-price")]
    pub asking_price: Option<String>,
    #[serde(rename = "down-payment")]
    pub down_payment: Option<String>,
    #[serde(rename = "payment-schedule")]
    pub payment_schedule: Option<String>,
    #[serde(rename = "amortization-period")]
    pub amortization_period: Option<String>,
}

impl PaymentAmountParams {
    pub fn into_request(self) -> MortgageResult<PaymentAmountRequest> {
        Ok(PaymentAmountRequest {
            asking_price: parse_amount("asking-price", self.asking_price.as_deref())?,
            down_payment: parse_amount("down-payment", self.down_payment.as_deref())?,
            amortization_years: parse_amount(
                "amortization-period",
                self.amortization_period.as_deref(),
            )?,
            payment_schedule: parse_schedule(
                "payment-schedule",
                self.payment_schedule.as_deref(),
            )?,
        })
    }
}

/// Raw `/mortgage-amount/` query parameters, all required.
#[derive(Debug, Default, Deserialize)]
pub struct MortgageAmountParams {
    #[serde(rename = "payment-amount")]
    pub payment_amount: Option<String>,
    #[serde(rename = "payment-schedule")]
    pub payment_schedule: Option<String>,
    #[serde(rename = "amortization-period")]
    pub amortization_period: Option<String>,
}

impl MortgageAmountParams {
    pub fn into_request(self) -> MortgageResult<MortgageAmountRequest> {
        Ok(MortgageAmountRequest {
            payment_amount: parse_amount("payment-amount", self.payment_amount.as_deref())?,
            amortization_years: parse_amount(
                "amortization-period",
                self.amortization_period.as_deref(),
            )?,
            payment_schedule: parse_schedule(
                "payment-schedule",
                self.payment_schedule.as_deref(),
            )?,
        })
    }
}

/// GET /api/v1/payment-amount/ - Periodic payment for a requested mortgage
pub async fn payment_amount(
    State(state): State<AppState>,
    query: Result<Query<PaymentAmountParams>, QueryRejection>,
) -> ApiResult<PaymentAmountBody> {
    let Query(params) = query?;
    let request = params.into_request()?;
    let quote = calculator::payment_amount(&state.rates, &request)?;

    Ok(Json(ApiResponse::ok(PaymentAmountBody {
        payment_amount: quote.payment_amount,
    })))
}

/// GET /api/v1/mortgage-amount/ - Maximum mortgage for a periodic payment
pub async fn mortgage_amount(
    State(state): State<AppState>,
    query: Result<Query<MortgageAmountParams>, QueryRejection>,
) -> ApiResult<MortgageAmountBody> {
    let Query(params) = query?;
    let request = params.into_request()?;
    let quote = calculator::mortgage_amount(&state.rates, &request)?;

    Ok(Json(ApiResponse::ok(MortgageAmountBody {
        mortgage_amount: quote.mortgage_amount,
    })))
}

/// PATCH /api/v1/interest-rate/ - Replace the shared interest rate
///
/// The body is taken raw so malformed JSON is answered with the fail envelope
/// instead of axum's plain-text rejection.
pub async fn update_interest_rate(State(state): State<AppState>, body: Bytes) -> ApiResult<RateChangeBody> {
    let new_rate = parse_rate_update(&body)?;
    let change = calculator::update_interest_rate(&state.rates, new_rate)?;
    tracing::info!(
        old_rate = %change.old_rate,
        new_rate = %change.new_rate,
        "interest rate updated"
    );

    Ok(Json(ApiResponse::ok(RateChangeBody {
        old_interest_rate: change.old_rate,
        new_interest_rate: change.new_rate,
    })))
}

/// GET /api/v1/interest-rate/ - Current interest rate
pub async fn current_interest_rate(State(state): State<AppState>) -> ApiResult<InterestRateBody> {
    Ok(Json(ApiResponse::ok(InterestRateBody {
        interest_rate: state.rates.current(),
    })))
}

/// GET /api/v1/health - Health check
pub async fn health() -> Json<ApiResponse<HealthBody>> {
    Json(ApiResponse::ok(HealthBody { status: "ok" }))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
