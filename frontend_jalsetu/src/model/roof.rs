// frontend_jalsetu/src/model/roof.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catchment surfaces the estimation service knows a runoff coefficient for.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoofType {
    #[serde(rename = "Concrete")]
    Concrete,
    #[serde(rename = "PVC")]
    Pvc,
    #[serde(rename = "Asbestos")]
    Asbestos,
    #[serde(rename = "Concrete Road")]
    ConcreteRoad,
    #[serde(rename = "Bitumen Road")]
    BitumenRoad,
}

impl RoofType {
    pub const ALL: [RoofType; 5] = [
        RoofType::Concrete,
        RoofType::Pvc,
        RoofType::Asbestos,
        RoofType::ConcreteRoad,
        RoofType::BitumenRoad,
    ];

    /// Label sent over the wire and shown in the select box
    pub fn label(&self) -> &'static str {
        match self {
            RoofType::Concrete => "Concrete",
            RoofType::Pvc => "PVC",
            RoofType::Asbestos => "Asbestos",
            RoofType::ConcreteRoad => "Concrete Road",
            RoofType::BitumenRoad => "Bitumen Road",
        }
    }

    /// Typical share of rainfall that runs off this surface
    pub fn typical_runoff(&self) -> f64 {
        match self {
            RoofType::Pvc => 0.98,
            RoofType::Asbestos => 0.85,
            RoofType::Concrete | RoofType::ConcreteRoad | RoofType::BitumenRoad => 0.95,
        }
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoofType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoofType::ALL
            .into_iter()
            .find(|roof| roof.label() == s.trim())
            .ok_or_else(|| format!("unknown roof type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for roof in RoofType::ALL {
            assert_eq!(roof.label().parse::<RoofType>(), Ok(roof));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("Thatch".parse::<RoofType>().is_err());
        assert!("".parse::<RoofType>().is_err());
        // labels are case sensitive on the wire
        assert!("pvc".parse::<RoofType>().is_err());
    }

    #[test]
    fn serializes_with_wire_label() {
        let json = serde_json::to_string(&RoofType::BitumenRoad).unwrap();
        assert_eq!(json, "\"Bitumen Road\"");
        let back: RoofType = serde_json::from_str("\"PVC\"").unwrap();
        assert_eq!(back, RoofType::Pvc);
    }

    #[test]
    fn runoff_hints() {
        assert_eq!(RoofType::Pvc.typical_runoff(), 0.98);
        assert_eq!(RoofType::Asbestos.typical_runoff(), 0.85);
        assert_eq!(RoofType::ConcreteRoad.typical_runoff(), 0.95);
    }
}
