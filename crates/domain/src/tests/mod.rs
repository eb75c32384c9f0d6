// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod validation;

use crate::{Gender, NewSoldier, ServiceType, Soldier};

pub fn create_test_new_soldier() -> NewSoldier {
    NewSoldier {
        full_name: String::from("Dana Levi"),
        military_id: String::from("1234567"),
        national_id: String::from("123456789"),
        phone: String::from("0501234567"),
        gender: Gender::Female,
        rank: String::from("Sergeant"),
        service_type: ServiceType::Regular,
        center: String::from("Center 1"),
        branch: String::from("Intelligence"),
        department: String::from("Research"),
        team: Some(String::from("Team A")),
        role: String::from("Analyst"),
        requires_entry_approval: true,
        has_unit_guard: false,
        security_clearance: String::from("Secret"),
        allergies: String::from("None"),
    }
}

pub fn create_test_soldier(id: &str) -> Soldier {
    create_test_new_soldier().into_soldier(id.to_string())
}
