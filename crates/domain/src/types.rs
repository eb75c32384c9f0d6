// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a soldier's gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Returns the string representation of this gender.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Parses a gender from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid gender.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(DomainError::InvalidGender(format!("Unknown gender: {s}"))),
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a soldier's service classification.
///
/// Service types are fixed domain constants. The consultant variant covers
/// civilian advisers attached to a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Regular (conscript or career) service.
    Regular,
    /// Reserve duty.
    Reserve,
    /// External consultant.
    Consultant,
}

impl ServiceType {
    /// Returns the string representation of this service type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Reserve => "reserve",
            Self::Consultant => "consultant",
        }
    }

    /// Parses a service type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid service type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "regular" => Ok(Self::Regular),
            "reserve" => Ok(Self::Reserve),
            "consultant" => Ok(Self::Consultant),
            _ => Err(DomainError::InvalidServiceType(format!(
                "Unknown service type: {s}"
            ))),
        }
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a soldier tracked by the console.
///
/// `id` is the canonical identifier: immutable once assigned and unique
/// within the soldier collection. The military identifier is unique per
/// soldier and is what operators search and display; it is never used as
/// the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soldier {
    /// Canonical identifier (opaque, stable, immutable).
    pub id: String,
    /// The soldier's full name.
    pub full_name: String,
    /// The military identifier (unique per soldier).
    pub military_id: String,
    /// The national identifier.
    pub national_id: String,
    /// Mobile phone number.
    pub phone: String,
    /// The soldier's gender.
    pub gender: Gender,
    /// The soldier's rank (free text).
    pub rank: String,
    /// The soldier's service classification.
    pub service_type: ServiceType,
    /// Organizational center.
    pub center: String,
    /// Organizational branch.
    pub branch: String,
    /// Organizational department, used for grouping and filtering.
    pub department: String,
    /// Team within the department, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// The soldier's role or title.
    pub role: String,
    /// Whether base entry requires an extra approval.
    pub requires_entry_approval: bool,
    /// Whether the soldier's unit posts its own guard.
    pub has_unit_guard: bool,
    /// Security clearance level (free text).
    pub security_clearance: String,
    /// Allergy information (free text).
    pub allergies: String,
}

/// A soldier payload lacking an identifier.
///
/// The store assigns a fresh unique id when the soldier is added; every
/// other field is carried over verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSoldier {
    /// The soldier's full name.
    pub full_name: String,
    /// The military identifier.
    pub military_id: String,
    /// The national identifier.
    pub national_id: String,
    /// Mobile phone number.
    pub phone: String,
    /// The soldier's gender.
    pub gender: Gender,
    /// The soldier's rank (free text).
    pub rank: String,
    /// The soldier's service classification.
    pub service_type: ServiceType,
    /// Organizational center.
    pub center: String,
    /// Organizational branch.
    pub branch: String,
    /// Organizational department.
    pub department: String,
    /// Team within the department, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// The soldier's role or title.
    pub role: String,
    /// Whether base entry requires an extra approval.
    pub requires_entry_approval: bool,
    /// Whether the soldier's unit posts its own guard.
    pub has_unit_guard: bool,
    /// Security clearance level (free text).
    pub security_clearance: String,
    /// Allergy information (free text).
    pub allergies: String,
}

impl NewSoldier {
    /// Converts this payload into a [`Soldier`] under the given id.
    #[must_use]
    pub fn into_soldier(self, id: String) -> Soldier {
        Soldier {
            id,
            full_name: self.full_name,
            military_id: self.military_id,
            national_id: self.national_id,
            phone: self.phone,
            gender: self.gender,
            rank: self.rank,
            service_type: self.service_type,
            center: self.center,
            branch: self.branch,
            department: self.department,
            team: self.team,
            role: self.role,
            requires_entry_approval: self.requires_entry_approval,
            has_unit_guard: self.has_unit_guard,
            security_clearance: self.security_clearance,
            allergies: self.allergies,
        }
    }
}

/// A partial soldier update.
///
/// Each populated field replaces the corresponding field on the existing
/// record; absent fields are left untouched (shallow merge). The id is
/// deliberately not part of the patch: it is immutable once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoldierPatch {
    /// Replacement full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Replacement military identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub military_id: Option<String>,
    /// Replacement national identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// Replacement phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Replacement gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Replacement rank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    /// Replacement service classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    /// Replacement organizational center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
    /// Replacement organizational branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Replacement organizational department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Replacement team.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Replacement role or title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Replacement entry-approval flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_entry_approval: Option<bool>,
    /// Replacement unit-guard flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_unit_guard: Option<bool>,
    /// Replacement security clearance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_clearance: Option<String>,
    /// Replacement allergy information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

impl SoldierPatch {
    /// Applies this patch to an existing soldier record as a shallow merge.
    ///
    /// Fields not present in the patch keep their prior value.
    pub fn apply_to(&self, soldier: &mut Soldier) {
        if let Some(full_name) = &self.full_name {
            soldier.full_name = full_name.clone();
        }
        if let Some(military_id) = &self.military_id {
            soldier.military_id = military_id.clone();
        }
        if let Some(national_id) = &self.national_id {
            soldier.national_id = national_id.clone();
        }
        if let Some(phone) = &self.phone {
            soldier.phone = phone.clone();
        }
        if let Some(gender) = self.gender {
            soldier.gender = gender;
        }
        if let Some(rank) = &self.rank {
            soldier.rank = rank.clone();
        }
        if let Some(service_type) = self.service_type {
            soldier.service_type = service_type;
        }
        if let Some(center) = &self.center {
            soldier.center = center.clone();
        }
        if let Some(branch) = &self.branch {
            soldier.branch = branch.clone();
        }
        if let Some(department) = &self.department {
            soldier.department = department.clone();
        }
        if let Some(team) = &self.team {
            soldier.team = Some(team.clone());
        }
        if let Some(role) = &self.role {
            soldier.role = role.clone();
        }
        if let Some(requires_entry_approval) = self.requires_entry_approval {
            soldier.requires_entry_approval = requires_entry_approval;
        }
        if let Some(has_unit_guard) = self.has_unit_guard {
            soldier.has_unit_guard = has_unit_guard;
        }
        if let Some(security_clearance) = &self.security_clearance {
            soldier.security_clearance = security_clearance.clone();
        }
        if let Some(allergies) = &self.allergies {
            soldier.allergies = allergies.clone();
        }
    }

    /// Returns true if the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.military_id.is_none()
            && self.national_id.is_none()
            && self.phone.is_none()
            && self.gender.is_none()
            && self.rank.is_none()
            && self.service_type.is_none()
            && self.center.is_none()
            && self.branch.is_none()
            && self.department.is_none()
            && self.team.is_none()
            && self.role.is_none()
            && self.requires_entry_approval.is_none()
            && self.has_unit_guard.is_none()
            && self.security_clearance.is_none()
            && self.allergies.is_none()
    }
}
