// frontend_jalsetu/src/model/report.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Qualitative category assigned by the estimation service.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feasibility {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Feasibility {
    pub fn label(&self) -> &'static str {
        match self {
            Feasibility::High => "High",
            Feasibility::Medium => "Medium",
            Feasibility::Low => "Low",
            Feasibility::Unknown => "Unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Feasibility::High => "✅",
            Feasibility::Medium => "⚠️",
            Feasibility::Low | Feasibility::Unknown => "❌",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Feasibility::High => "bg-green-100 text-green-800",
            Feasibility::Medium => "bg-yellow-100 text-yellow-800",
            Feasibility::Low | Feasibility::Unknown => "bg-red-100 text-red-800",
        }
    }
}

/// Echo of the values the service computed with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InputParameters {
    pub location: String,
    pub roof_area_sqft: f64,
    pub roof_area_m2: f64,
    pub roof_type: String,
    pub household_size: u32,
    pub per_capita_demand_lpd: f64,
    pub water_cost_rs_per_m3: f64,
}

/// Body of `GET /api/calculate-rainwater-harvesting`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportResult {
    pub location: Coordinates,
    pub annual_rainfall_m: f64,
    pub runoff_coefficient: f64,
    pub roof_type: String,
    pub roof_area_m2: f64,
    pub harvested_volume_m3: f64,
    pub harvested_volume_liters: f64,
    pub annual_demand_m3: f64,
    pub annual_demand_liters: f64,
    pub household_size: u32,
    pub per_capita_demand_lpd: f64,
    pub feasibility: Feasibility,
    pub annual_savings_rs: f64,
    pub water_cost_rs_per_m3: f64,
    pub input_parameters: InputParameters,
}

impl ReportResult {
    pub fn daily_demand_liters(&self) -> f64 {
        self.annual_demand_liters / 365.0
    }

    /// Share of the yearly demand the roof can supply, in percent
    pub fn coverage_percent(&self) -> f64 {
        if self.annual_demand_m3 > 0.0 {
            self.harvested_volume_m3 / self.annual_demand_m3 * 100.0
        } else {
            0.0
        }
    }

    pub fn rainfall_display(&self) -> String {
        format!("{:.2}m", self.annual_rainfall_m)
    }

    pub fn harvested_display(&self) -> String {
        format!("{:.1}m³", self.harvested_volume_m3)
    }

    pub fn demand_display(&self) -> String {
        format!("{:.1}m³", self.annual_demand_m3)
    }

    pub fn savings_display(&self) -> String {
        format!("₹{:.0}", self.annual_savings_rs)
    }

    pub fn runoff_display(&self) -> String {
        format!("{:.0}%", self.runoff_coefficient * 100.0)
    }

    pub fn roof_area_display(&self) -> String {
        format!(
            "{} sq ft ({:.1} m²)",
            self.input_parameters.roof_area_sqft, self.roof_area_m2
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Body as the estimation service produces it for Hyderabad, 1200 sq ft concrete, 4 people
    pub(crate) const SAMPLE_REPORT: &str = r#"{
        "location": {"latitude": 17.385, "longitude": 78.4867},
        "annual_rainfall_m": 0.812,
        "runoff_coefficient": 0.95,
        "roof_type": "Concrete",
        "roof_area_m2": 111.4836,
        "harvested_volume_m3": 86.0,
        "harvested_volume_liters": 85998.0,
        "annual_demand_m3": 197.1,
        "annual_demand_liters": 197100.0,
        "household_size": 4,
        "per_capita_demand_lpd": 135,
        "feasibility": "Medium",
        "annual_savings_rs": 42999.12,
        "water_cost_rs_per_m3": 500,
        "input_parameters": {
            "location": "Hyderabad",
            "roof_area_sqft": 1200.0,
            "roof_area_m2": 111.4836,
            "roof_type": "Concrete",
            "household_size": 4,
            "per_capita_demand_lpd": 135,
            "water_cost_rs_per_m3": 500
        }
    }"#;

    pub(crate) fn sample() -> ReportResult {
        serde_json::from_str(SAMPLE_REPORT).unwrap()
    }

    #[test]
    fn parses_service_payload() {
        let report = sample();
        assert_eq!(report.feasibility, Feasibility::Medium);
        assert_eq!(report.household_size, 4);
        assert_eq!(report.location.latitude, 17.385);
        assert_eq!(report.input_parameters.location, "Hyderabad");
        assert_eq!(report.per_capita_demand_lpd, 135.0);
    }

    #[test]
    fn unknown_feasibility_is_tolerated() {
        let body = SAMPLE_REPORT.replace("\"Medium\"", "\"Marginal\"");
        let report: ReportResult = serde_json::from_str(&body).unwrap();
        assert_eq!(report.feasibility, Feasibility::Unknown);
        assert_eq!(report.feasibility.badge_class(), Feasibility::Low.badge_class());
    }

    #[test]
    fn display_formatting() {
        let report = sample();
        assert_eq!(report.rainfall_display(), "0.81m");
        assert_eq!(report.harvested_display(), "86.0m³");
        assert_eq!(report.demand_display(), "197.1m³");
        assert_eq!(report.savings_display(), "₹42999");
        assert_eq!(report.runoff_display(), "95%");
        assert_eq!(report.roof_area_display(), "1200 sq ft (111.5 m²)");
        assert_eq!(format!("{:.0}", report.daily_demand_liters()), "540");
    }

    #[test]
    fn coverage_is_share_of_demand() {
        let mut report = sample();
        assert!((report.coverage_percent() - 86.0 / 197.1 * 100.0).abs() < 1e-9);
        report.annual_demand_m3 = 0.0;
        assert_eq!(report.coverage_percent(), 0.0);
    }

    #[test]
    fn feasibility_badges() {
        assert_eq!(Feasibility::High.icon(), "✅");
        assert_eq!(Feasibility::Medium.icon(), "⚠️");
        assert_eq!(Feasibility::Low.icon(), "❌");
        assert!(Feasibility::High.badge_class().contains("green"));
        assert!(Feasibility::Medium.badge_class().contains("yellow"));
    }
}
