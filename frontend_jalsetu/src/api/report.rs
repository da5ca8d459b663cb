// frontend_jalsetu/src/api/report.rs
use gloo::{console::log, net::http::Request};
use wasm_bindgen_futures::spawn_local;

use crate::api::utils::handle_api_response;
use crate::config_file::{get_config, FrontendConfig};
use crate::error::ReportError;
use crate::model::{ReportResult, ValidForm};

pub const REPORT_ENDPOINT: &str = "/api/calculate-rainwater-harvesting";

pub fn report_url(config: &FrontendConfig, form: &ValidForm) -> String {
    format!("{}{REPORT_ENDPOINT}?{}", config.api_url, form.query_string(config))
}

/// Ask the estimation service for a report
/// ### Examples
/// - `GET /api/calculate-rainwater-harvesting?location=Delhi&roof_area=1200&roof_type=Concrete&household_size=4&per_capita_demand=135&water_cost=500`
pub fn api_calculate_report<F>(form: ValidForm, callback: F)
where
    F: FnOnce(Result<ReportResult, ReportError>) + 'static,
{
    let config = get_config();
    let url = report_url(&config, &form);

    spawn_local(async move {
        log!(format!("Making API call to: {url}"));

        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await;

        let result = handle_api_response::<ReportResult>(response, "Report").await;
        if let Ok(report) = &result {
            log!(format!(
                "Report for {}: feasibility {}",
                report.input_parameters.location,
                report.feasibility.label()
            ));
        }
        callback(result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormField, ReportForm};

    #[test]
    fn url_joins_base_endpoint_and_query() {
        let form = ReportForm::default()
            .with_field(FormField::Location, "Delhi")
            .with_field(FormField::RoofArea, "1200")
            .with_field(FormField::RoofType, "PVC")
            .with_field(FormField::Dwellers, "5")
            .validate()
            .unwrap();
        let config = FrontendConfig {
            api_url: "https://api.jalsetu.in".into(),
            ..FrontendConfig::default()
        };
        assert_eq!(
            report_url(&config, &form),
            "https://api.jalsetu.in/api/calculate-rainwater-harvesting?location=Delhi\
             &roof_area=1200&roof_type=PVC&household_size=5&per_capita_demand=135&water_cost=500"
        );
    }
}
