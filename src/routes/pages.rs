//! Pricing form route handlers

use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};

use crate::error::{AppError, Result};
use crate::pricing::requests::{PriceForm, FORM_FACTORS};
use crate::pricing::round_money;
use crate::AppState;

const FORM_ENDPOINT: &str = "/";

/// Pricing form template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    factors: Vec<FactorOption>,
}

/// Quoted price template
#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate {
    base_price: String,
    optimal_price: String,
    applied_factors: Vec<FactorOption>,
    has_factors: bool,
}

/// Checkbox shown on the form
struct FactorOption {
    name: &'static str,
    label: String,
}

impl FactorOption {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            label: factor_label(name),
        }
    }
}

/// `"solar_energy"` -> `"Solar energy"`
fn factor_label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pricing form
pub async fn index() -> Result<Html<String>> {
    let template = IndexTemplate {
        factors: FORM_FACTORS.into_iter().map(FactorOption::new).collect(),
    };
    Ok(Html(template.render()?))
}

/// Form submission: quote and render the result page
pub async fn quote(
    State(state): State<AppState>,
    form: std::result::Result<Form<PriceForm>, FormRejection>,
) -> Result<Html<String>> {
    render_quote(&state, form).map_err(|err| {
        state.pricing.reporter().request_failed(FORM_ENDPOINT, &err);
        err
    })
}

fn render_quote(
    state: &AppState,
    form: std::result::Result<Form<PriceForm>, FormRejection>,
) -> Result<Html<String>> {
    let Form(form) = form?;
    let applied_factors: Vec<FactorOption> = form
        .checked_factors()
        .into_iter()
        .map(FactorOption::new)
        .collect();

    let request = form.into_price_request()?;
    let quote = state.pricing.quote(&request).map_err(AppError::from)?;

    let template = ResultTemplate {
        base_price: format!("{:.2}", round_money(request.base_price, 2)),
        optimal_price: format!("{:.2}", round_money(quote.optimal_price, 2)),
        has_factors: !applied_factors.is_empty(),
        applied_factors,
    };

    Ok(Html(template.render()?))
}
