use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::FunnelError;

/// Building usage category chosen in the first funnel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Apartment,
    OfficeTel,
    CommunityFacility,
    CommercialFacility,
    RetailFacility,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Apartment,
        Self::OfficeTel,
        Self::CommunityFacility,
        Self::CommercialFacility,
        Self::RetailFacility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apartment => "APARTMENT",
            Self::OfficeTel => "OFFICE_TEL",
            Self::CommunityFacility => "COMMUNITY_FACILITY",
            Self::CommercialFacility => "COMMERCIAL_FACILITY",
            Self::RetailFacility => "RETAIL_FACILITY",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Apartment => "아파트",
            Self::OfficeTel => "오피스텔",
            Self::CommunityFacility => "부대 복리 시설",
            Self::CommercialFacility => "근린 생활 시설",
            Self::RetailFacility => "판매 시설",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FunnelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|category| {
                category.as_str().eq_ignore_ascii_case(&normalized) || category.label() == trimmed
            })
            .ok_or_else(|| FunnelError::UnknownCategory(s.to_string()))
    }
}

/// The three slots of the funnel; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FunnelStep {
    #[default]
    #[serde(rename = "CATEGORY_STEP")]
    Category,
    #[serde(rename = "BUILDING_COUNT_STEP")]
    BuildingCount,
    #[serde(rename = "FACILITY_CHECK_STEP")]
    FacilityCheck,
}

impl FunnelStep {
    pub const ALL: [FunnelStep; 3] = [Self::Category, Self::BuildingCount, Self::FacilityCheck];
}

/// Display groups for facilities, declared in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FacilityCategory {
    #[serde(rename = "주차시설")]
    Parking,
    #[serde(rename = "기계설비시설")]
    Mechanical,
    #[serde(rename = "전기통신시설")]
    ElectricalTelecom,
    #[serde(rename = "주민편의시설")]
    ResidentAmenity,
    #[serde(rename = "관리시설")]
    Management,
    #[serde(rename = "기타시설")]
    Other,
}

impl FacilityCategory {
    pub const ALL: [FacilityCategory; 6] = [
        Self::Parking,
        Self::Mechanical,
        Self::ElectricalTelecom,
        Self::ResidentAmenity,
        Self::Management,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Parking => "주차시설",
            Self::Mechanical => "기계설비시설",
            Self::ElectricalTelecom => "전기통신시설",
            Self::ResidentAmenity => "주민편의시설",
            Self::Management => "관리시설",
            Self::Other => "기타시설",
        }
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

macro_rules! facility_ids {
    ($($variant:ident => $wire:literal),+ $(,)?) => {
        /// Identity of a catalog facility. Declaration order matches `FACILITY_ITEMS`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum FacilityId {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl FacilityId {
            pub const ALL: &'static [FacilityId] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }
    };
}

facility_ids! {
    UndergroundParking => "UNDERGROUND_PARKING",
    GroundParking => "GROUND_PARKING",
    PumpRoom => "PUMP_ROOM",
    ElectricRoom => "ELECTRIC_ROOM",
    MachineRoom => "MACHINE_ROOM",
    GeneratorRoom => "GENERATOR_ROOM",
    VentilationRoom => "VENTILATION_ROOM",
    CommunicationRoom => "COMMUNICATION_ROOM",
    CommunityFacility => "COMMUNITY_FACILITY",
    ManagementOffice => "MANAGEMENT_OFFICE",
    StaffLounge => "STAFF_LOUNGE",
    DisasterPreventionRoom => "DISASTER_PREVENTION_ROOM",
    ExerciseFacility => "EXERCISE_FACILITY",
    OutdoorStairs => "OUTDOOR_STAIRS",
    Storage => "STORAGE",
    SecurityOffice => "SECURITY_OFFICE",
    NeighborhoodFacility => "NEIGHBORHOOD_FACILITY",
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FacilityId {
    type Err = FunnelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FunnelError::UnknownFacility(s.to_string()))
    }
}

/// Number of buildings ("동") being described. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BuildingCount(NonZeroU32);

impl BuildingCount {
    pub const DEFAULT: BuildingCount = BuildingCount(NonZeroU32::MIN);

    pub fn new(count: u32) -> Result<Self, FunnelError> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(FunnelError::InvalidBuildingCount(count))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for BuildingCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for BuildingCount {
    type Error = FunnelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BuildingCount> for u32 {
    fn from(value: BuildingCount) -> Self {
        value.get()
    }
}

impl fmt::Display for BuildingCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BuildingCount {
    type Err = FunnelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s
            .trim()
            .parse::<u32>()
            .map_err(|_| FunnelError::MalformedBuildingCount(s.to_string()))?;
        Self::new(count)
    }
}
