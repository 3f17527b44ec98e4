//! Static registry of the facilities that can be attached to a building overview.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{FacilityCategory, FacilityId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityInfo {
    pub id: FacilityId,
    pub name: &'static str,
    pub category: FacilityCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

const fn facility(
    id: FacilityId,
    name: &'static str,
    category: FacilityCategory,
    description: &'static str,
) -> FacilityInfo {
    FacilityInfo {
        id,
        name,
        category,
        description: Some(description),
    }
}

/// Every facility, in definition order. Indexed by `FacilityId as usize`.
pub static FACILITY_ITEMS: [FacilityInfo; 17] = [
    facility(
        FacilityId::UndergroundParking,
        "지하주차장",
        FacilityCategory::Parking,
        "건물 지하에 설치된 주차 공간",
    ),
    facility(
        FacilityId::GroundParking,
        "지상주차장",
        FacilityCategory::Parking,
        "건물 외부에 설치된 주차 공간",
    ),
    facility(
        FacilityId::PumpRoom,
        "펌프실",
        FacilityCategory::Mechanical,
        "급수 설비가 설치된 공간",
    ),
    facility(
        FacilityId::ElectricRoom,
        "전기실",
        FacilityCategory::ElectricalTelecom,
        "전기 설비가 설치된 공간",
    ),
    facility(
        FacilityId::MachineRoom,
        "기계실",
        FacilityCategory::Mechanical,
        "기계 설비가 설치된 공간",
    ),
    facility(
        FacilityId::GeneratorRoom,
        "발전기실",
        FacilityCategory::ElectricalTelecom,
        "비상 발전 설비가 설치된 공간",
    ),
    facility(
        FacilityId::VentilationRoom,
        "제연휀룸",
        FacilityCategory::Mechanical,
        "화재 시 연기 배출을 위한 설비가 설치된 공간",
    ),
    facility(
        FacilityId::CommunicationRoom,
        "통신실",
        FacilityCategory::ElectricalTelecom,
        "통신 설비가 설치된 공간",
    ),
    facility(
        FacilityId::CommunityFacility,
        "주민공동시설",
        FacilityCategory::ResidentAmenity,
        "주민들의 공동 활동을 위한 공간",
    ),
    facility(
        FacilityId::ManagementOffice,
        "관리사무소",
        FacilityCategory::Management,
        "건물 관리를 위한 사무 공간",
    ),
    facility(
        FacilityId::StaffLounge,
        "용역원휴게실",
        FacilityCategory::Management,
        "관리 직원들을 위한 휴게 공간",
    ),
    facility(
        FacilityId::DisasterPreventionRoom,
        "방재실,MDF실",
        FacilityCategory::ElectricalTelecom,
        "재난 방지 및 통신 설비가 설치된 공간",
    ),
    facility(
        FacilityId::ExerciseFacility,
        "주민운동시설",
        FacilityCategory::ResidentAmenity,
        "주민들의 운동을 위한 공간",
    ),
    facility(
        FacilityId::OutdoorStairs,
        "옥외계단",
        FacilityCategory::Other,
        "건물 외부에 설치된 계단",
    ),
    facility(
        FacilityId::Storage,
        "세대창고",
        FacilityCategory::Other,
        "각 세대별 물품 보관을 위한 공간",
    ),
    facility(
        FacilityId::SecurityOffice,
        "경비실",
        FacilityCategory::Management,
        "건물 보안을 위한 공간",
    ),
    facility(
        FacilityId::NeighborhoodFacility,
        "근린생활시설",
        FacilityCategory::Other,
        "주민 생활 편의를 위한 상업 시설",
    ),
];

pub fn catalog() -> &'static [FacilityInfo] {
    &FACILITY_ITEMS
}

impl FacilityId {
    pub fn info(self) -> &'static FacilityInfo {
        &FACILITY_ITEMS[self as usize]
    }
}

/// Partitions the catalog by display group, keeping definition order inside each group.
///
/// Every call builds a fresh map; callers may hold on to or mutate the result freely.
pub fn group_by_category() -> BTreeMap<FacilityCategory, Vec<&'static FacilityInfo>> {
    let mut groups: BTreeMap<FacilityCategory, Vec<&'static FacilityInfo>> = BTreeMap::new();
    for facility in &FACILITY_ITEMS {
        groups.entry(facility.category).or_default().push(facility);
    }
    groups
}
