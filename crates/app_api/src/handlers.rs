use cost_app::{AppError, Result, current_period};
use cost_core::{CategoryTotal, CostInput, MonthReport, MonthTotal, RateTable};

use crate::{
    AddCostRequest, AppContext, ReportRequest, SettingsPutRequest, SettingsResponse,
    YearlyReportRequest,
};

fn resolve_period(year: Option<i32>, month: Option<u32>) -> Result<(i32, u32)> {
    let (current_year, current_month) = current_period();
    let month = month.unwrap_or(current_month);
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidInput(format!(
            "month must be between 1 and 12, got {}",
            month
        )));
    }
    Ok((year.unwrap_or(current_year), month))
}

fn validate_cost(req: AddCostRequest) -> Result<CostInput> {
    if !req.sum.is_finite() || req.sum <= 0.0 {
        return Err(AppError::InvalidInput(
            "sum must be a positive number".to_string(),
        ));
    }
    let category = req.category.trim();
    if category.is_empty() {
        return Err(AppError::InvalidInput("category is required".to_string()));
    }
    let description = req
        .description
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    Ok(CostInput {
        sum: req.sum,
        currency: req.currency,
        category: category.to_string(),
        description,
    })
}

pub async fn add_cost(ctx: &AppContext, req: AddCostRequest) -> Result<CostInput> {
    let cost = validate_cost(req)?;
    ctx.app_state.services.costs.add_cost(cost).await
}

pub async fn report(ctx: &AppContext, req: ReportRequest) -> Result<MonthReport> {
    let (year, month) = resolve_period(req.year, req.month)?;
    ctx.app_state
        .services
        .costs
        .get_report(year, month, req.currency)
        .await
}

pub async fn category_report(ctx: &AppContext, req: ReportRequest) -> Result<Vec<CategoryTotal>> {
    let (year, month) = resolve_period(req.year, req.month)?;
    ctx.app_state
        .services
        .costs
        .get_costs_by_category(year, month, req.currency)
        .await
}

pub async fn yearly_report(ctx: &AppContext, req: YearlyReportRequest) -> Result<Vec<MonthTotal>> {
    let year = req.year.unwrap_or_else(|| current_period().0);
    ctx.app_state
        .services
        .costs
        .get_yearly_report(year, req.currency)
        .await
}

pub async fn rates(ctx: &AppContext) -> RateTable {
    ctx.app_state.services.rates.fetch_exchange_rates().await
}

pub async fn settings_get(ctx: &AppContext) -> Result<SettingsResponse> {
    let snapshot = ctx.app_state.services.settings.get().await?;
    Ok(SettingsResponse {
        rates_url: snapshot.rates_url,
        default_rates_url: snapshot.default_rates_url,
        db_path: snapshot.db_path.to_string_lossy().to_string(),
        app_data_dir: ctx.app_data_dir.to_string_lossy().to_string(),
        schema_version: snapshot.schema_version,
    })
}

pub async fn settings_put(ctx: &AppContext, req: SettingsPutRequest) -> Result<SettingsResponse> {
    ctx.app_state
        .services
        .settings
        .update(req.rates_url.as_deref())
        .await?;
    settings_get(ctx).await
}

#[cfg(test)]
mod tests {
    use cost_app::{AppConfig, AppState};
    use cost_core::Currency;

    use super::*;

    fn request(sum: f64, category: &str) -> AddCostRequest {
        AddCostRequest {
            sum,
            currency: Currency::Usd,
            category: category.to_string(),
            description: Some("  ".to_string()),
        }
    }

    #[test]
    fn validate_cost_trims_and_drops_blank_description() {
        let cost = validate_cost(request(12.5, "  Food ")).expect("valid");
        assert_eq!(cost.category, "Food");
        assert_eq!(cost.description, None);
    }

    #[test]
    fn validate_cost_rejects_bad_sums_and_categories() {
        for sum in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_cost(request(sum, "Food")),
                Err(AppError::InvalidInput(_))
            ));
        }
        assert!(matches!(
            validate_cost(request(1.0, "   ")),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn resolve_period_checks_month() {
        assert_eq!(resolve_period(Some(2024), Some(2)).expect("period"), (2024, 2));
        assert!(resolve_period(Some(2024), Some(0)).is_err());
        assert!(resolve_period(Some(2024), Some(13)).is_err());
        let (_, month) = resolve_period(None, None).expect("current");
        assert!((1..=12).contains(&month));
    }

    #[tokio::test]
    async fn settings_round_trip_through_context() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = AppConfig::new(dir.path().to_path_buf());
        config.default_rates_url = "http://127.0.0.1:9/rates.json".to_string();
        let app_state = AppState::new(config).expect("app state");
        app_state.initialize().await.expect("initialize");
        let ctx = AppContext {
            app_state,
            app_data_dir: dir.path().to_path_buf(),
        };

        let updated = settings_put(
            &ctx,
            SettingsPutRequest {
                rates_url: Some("https://rates.example.com/latest.json".to_string()),
            },
        )
        .await
        .expect("settings put");
        assert_eq!(updated.rates_url, "https://rates.example.com/latest.json");
        assert_eq!(updated.default_rates_url, "http://127.0.0.1:9/rates.json");
        assert_eq!(updated.schema_version, cost_app::LATEST_SCHEMA_VERSION);

        let reset = settings_put(&ctx, SettingsPutRequest { rates_url: None })
            .await
            .expect("settings reset");
        assert_eq!(reset.rates_url, reset.default_rates_url);
    }
}
