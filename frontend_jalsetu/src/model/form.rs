// frontend_jalsetu/src/model/form.rs
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::config_file::FrontendConfig;
use crate::error::ReportError;
use crate::model::roof::RoofType;

pub const SQFT_TO_M2: f64 = 0.092903;

const INVALID_FORM: &str = "Please fill in all required fields with valid values";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Location,
    RoofArea,
    RoofType,
    Dwellers,
}

/// What the user typed into the potential form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportForm {
    pub location: String,
    /// square feet
    pub roof_area: f64,
    pub roof_type: Option<RoofType>,
    pub dwellers: u32,
}

impl ReportForm {
    /// Update one field from the raw input value. Unparsable numbers become 0.
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::Location => self.location = raw.to_owned(),
            FormField::RoofArea => self.roof_area = parse_number(raw),
            FormField::RoofType => self.roof_type = raw.parse().ok(),
            FormField::Dwellers => self.dwellers = parse_count(raw),
        }
    }

    pub fn with_field(mut self, field: FormField, raw: &str) -> Self {
        self.set_field(field, raw);
        self
    }

    pub fn roof_area_m2(&self) -> f64 {
        self.roof_area * SQFT_TO_M2
    }

    pub fn validate(&self) -> Result<ValidForm, ReportError> {
        let location = self.location.trim();
        match self.roof_type {
            Some(roof_type) if !location.is_empty() && self.roof_area > 0.0 && self.dwellers > 0 => {
                Ok(ValidForm {
                    location: location.to_owned(),
                    roof_area: self.roof_area,
                    roof_type,
                    dwellers: self.dwellers,
                })
            }
            _ => Err(ReportError::Validation(INVALID_FORM.to_owned())),
        }
    }

    /// Seed a form from the report page query. Missing values stay at their defaults.
    pub fn from_params(params: &ReportParams) -> Self {
        let mut form = ReportForm::default();
        let fields = [
            (FormField::Location, &params.location),
            (FormField::RoofArea, &params.roof_area),
            (FormField::RoofType, &params.roof_type),
            (FormField::Dwellers, &params.dwellers),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }
        form
    }

    /// Build the report page query, leaving out fields the user never filled.
    pub fn to_params(&self) -> ReportParams {
        let location = self.location.trim();
        ReportParams {
            location: (!location.is_empty()).then(|| location.to_owned()),
            roof_area: (self.roof_area > 0.0).then(|| self.roof_area.to_string()),
            roof_type: self.roof_type.map(|roof| roof.label().to_owned()),
            dwellers: (self.dwellers > 0).then(|| self.dwellers.to_string()),
        }
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn parse_count(raw: &str) -> u32 {
    let value = parse_number(raw);
    if value <= 0.0 {
        0
    } else {
        value.trunc().min(u32::MAX as f64) as u32
    }
}

/// Raw text of the form inputs while the user is typing.
/// Numbers are only parsed when a `ReportForm` is built, so "12." survives a re-render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormDraft {
    pub location: String,
    pub roof_area: String,
    pub roof_type: String,
    pub dwellers: String,
}

impl FormDraft {
    pub fn from_form(form: &ReportForm) -> Self {
        let non_zero = |v: f64| if v > 0.0 { v.to_string() } else { String::new() };
        Self {
            location: form.location.clone(),
            roof_area: non_zero(form.roof_area),
            roof_type: form.roof_type.map(|r| r.label().to_owned()).unwrap_or_default(),
            dwellers: non_zero(form.dwellers as f64),
        }
    }

    pub fn set(&mut self, field: FormField, raw: String) {
        match field {
            FormField::Location => self.location = raw,
            FormField::RoofArea => self.roof_area = raw,
            FormField::RoofType => self.roof_type = raw,
            FormField::Dwellers => self.dwellers = raw,
        }
    }

    pub fn to_form(&self) -> ReportForm {
        ReportForm::default()
            .with_field(FormField::Location, &self.location)
            .with_field(FormField::RoofArea, &self.roof_area)
            .with_field(FormField::RoofType, &self.roof_type)
            .with_field(FormField::Dwellers, &self.dwellers)
    }
}

/// A form that passed validation and can be turned into a request.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidForm {
    pub location: String,
    pub roof_area: f64,
    pub roof_type: RoofType,
    pub dwellers: u32,
}

impl ValidForm {
    /// Query parameters for the estimation endpoint, in wire order
    pub fn query_pairs(&self, config: &FrontendConfig) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("roof_area", self.roof_area.to_string()),
            ("roof_type", self.roof_type.label().to_owned()),
            ("household_size", self.dwellers.to_string()),
            ("per_capita_demand", config.per_capita_demand_lpd.to_string()),
            ("water_cost", config.water_cost_rs_per_m3.to_string()),
        ]
    }

    pub fn query_string(&self, config: &FrontendConfig) -> String {
        self.query_pairs(config)
            .iter()
            .map(|(key, value)| format!("{key}={}", encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Query of the `/report` route: `?location=..&roofArea=..&roofType=..&dwellers=..`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dwellers: Option<String>,
}

impl ReportParams {
    fn filled(value: &Option<String>) -> bool {
        value.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !self.fields().into_iter().any(Self::filled)
    }

    /// All four values present: the report page generates right away
    pub fn is_complete(&self) -> bool {
        self.fields().into_iter().all(Self::filled)
    }

    fn fields(&self) -> [&Option<String>; 4] {
        [&self.location, &self.roof_area, &self.roof_type, &self.dwellers]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ReportForm {
        ReportForm::default()
            .with_field(FormField::Location, "Hyderabad")
            .with_field(FormField::RoofArea, "1200")
            .with_field(FormField::RoofType, "Concrete")
            .with_field(FormField::Dwellers, "4")
    }

    #[test]
    fn complete_form_validates() {
        let valid = filled_form().validate().unwrap();
        assert_eq!(valid.location, "Hyderabad");
        assert_eq!(valid.roof_area, 1200.0);
        assert_eq!(valid.roof_type, RoofType::Concrete);
        assert_eq!(valid.dwellers, 4);
    }

    #[test]
    fn rejects_missing_or_non_positive_fields() {
        let cases = [
            filled_form().with_field(FormField::Location, "   "),
            filled_form().with_field(FormField::RoofArea, "0"),
            filled_form().with_field(FormField::RoofArea, "-25"),
            filled_form().with_field(FormField::RoofArea, "abc"),
            filled_form().with_field(FormField::RoofType, ""),
            filled_form().with_field(FormField::Dwellers, "0"),
            filled_form().with_field(FormField::Dwellers, ""),
            ReportForm::default(),
        ];
        for form in cases {
            assert_eq!(
                form.validate(),
                Err(ReportError::Validation(INVALID_FORM.to_owned())),
                "{form:?}"
            );
        }
    }

    #[test]
    fn location_is_trimmed() {
        let valid = filled_form()
            .with_field(FormField::Location, "  Jaipur, Rajasthan ")
            .validate()
            .unwrap();
        assert_eq!(valid.location, "Jaipur, Rajasthan");
    }

    #[test]
    fn dwellers_are_whole_people() {
        let form = ReportForm::default().with_field(FormField::Dwellers, "2.7");
        assert_eq!(form.dwellers, 2);
        let form = ReportForm::default().with_field(FormField::Dwellers, "-3");
        assert_eq!(form.dwellers, 0);
    }

    #[test]
    fn roof_area_rejects_non_finite() {
        let form = ReportForm::default().with_field(FormField::RoofArea, "inf");
        assert_eq!(form.roof_area, 0.0);
        let form = ReportForm::default().with_field(FormField::RoofArea, " 850.5 ");
        assert_eq!(form.roof_area, 850.5);
    }

    #[test]
    fn converts_roof_area_to_square_metres() {
        let form = ReportForm::default().with_field(FormField::RoofArea, "1000");
        assert!((form.roof_area_m2() - 92.903).abs() < 1e-9);
    }

    #[test]
    fn query_string_has_all_parameters_in_order() {
        let valid = filled_form().validate().unwrap();
        let query = valid.query_string(&FrontendConfig::default());
        assert_eq!(
            query,
            "location=Hyderabad&roof_area=1200&roof_type=Concrete&household_size=4\
             &per_capita_demand=135&water_cost=500"
        );
    }

    #[test]
    fn query_string_encodes_values() {
        let valid = filled_form()
            .with_field(FormField::Location, "Navi Mumbai, Maharashtra")
            .with_field(FormField::RoofType, "Bitumen Road")
            .with_field(FormField::RoofArea, "950.5")
            .validate()
            .unwrap();
        let query = valid.query_string(&FrontendConfig::default());
        assert!(query.starts_with("location=Navi%20Mumbai%2C%20Maharashtra&roof_area=950.5"));
        assert!(query.contains("&roof_type=Bitumen%20Road&"));
    }

    #[test]
    fn query_string_uses_configured_defaults() {
        let config = FrontendConfig {
            per_capita_demand_lpd: 100.0,
            water_cost_rs_per_m3: 22.5,
            ..FrontendConfig::default()
        };
        let query = filled_form().validate().unwrap().query_string(&config);
        assert!(query.ends_with("&per_capita_demand=100&water_cost=22.5"));
    }

    #[test]
    fn params_round_trip_through_the_form() {
        let form = filled_form();
        let params = form.to_params();
        assert!(params.is_complete());
        assert_eq!(params.roof_area.as_deref(), Some("1200"));
        assert_eq!(ReportForm::from_params(&params), form);
    }

    #[test]
    fn params_leave_out_empty_fields() {
        let form = ReportForm::default().with_field(FormField::Location, "Pune");
        let params = form.to_params();
        assert_eq!(
            params,
            ReportParams {
                location: Some("Pune".into()),
                ..ReportParams::default()
            }
        );
        assert!(!params.is_complete());
        assert!(!params.is_empty());
        assert!(ReportParams::default().is_empty());
    }

    #[test]
    fn params_use_camel_case_names() {
        let json = serde_json::to_value(filled_form().to_params()).unwrap();
        assert_eq!(json["roofArea"], "1200");
        assert_eq!(json["roofType"], "Concrete");
        assert_eq!(json["dwellers"], "4");
    }

    #[test]
    fn draft_keeps_partial_numbers() {
        let mut draft = FormDraft::default();
        draft.set(FormField::RoofArea, "12.".into());
        assert_eq!(draft.roof_area, "12.");
        assert_eq!(draft.to_form().roof_area, 12.0);
    }

    #[test]
    fn draft_from_empty_form_shows_blank_numbers() {
        let draft = FormDraft::from_form(&ReportForm::default());
        assert_eq!(draft, FormDraft::default());

        let draft = FormDraft::from_form(&filled_form());
        assert_eq!(draft.roof_area, "1200");
        assert_eq!(draft.roof_type, "Concrete");
        assert_eq!(draft.dwellers, "4");
        assert_eq!(draft.to_form(), filled_form());
    }

    #[test]
    fn blank_param_is_not_complete() {
        let params = ReportParams {
            location: Some(" ".into()),
            ..filled_form().to_params()
        };
        assert!(!params.is_complete());
    }
}
