use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Planned,
    Unplanned,
    Emergency,
}

/// Every accepted service type, in the order the form presents them.
pub const SERVICE_TYPE_OPTIONS: [ServiceType; 3] = [
    ServiceType::Planned,
    ServiceType::Unplanned,
    ServiceType::Emergency,
];

impl ServiceType {
    pub fn st_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "planned" => Some(Self::Planned),
            "unplanned" => Some(Self::Unplanned),
            "emergency" => Some(Self::Emergency),
            _ => None,
        }
    }

    pub fn st_as_str(&self) -> &'static str {
        match self {
            ServiceType::Planned => "planned",
            ServiceType::Unplanned => "unplanned",
            ServiceType::Emergency => "emergency",
        }
    }

    pub fn is_planned(&self) -> bool {
        matches!(self, ServiceType::Planned)
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, ServiceType::Emergency)
    }
}
