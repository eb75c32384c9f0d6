// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.


use muster_domain::{
    Gender, NewSoldier, Request, RequestDetail, ServiceType, Soldier,
};
use time::macros::{date, datetime};

pub fn create_test_soldier(id: &str) -> Soldier {
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
        team: None,
        role: String::from("Analyst"),
        requires_entry_approval: false,
        has_unit_guard: false,
        security_clearance: String::from("Secret"),
        allergies: String::from("None"),
    }
    .into_soldier(id.to_string())
}

pub fn create_test_request(id: &str) -> Request {
    Request::new(
        id.to_string(),
        datetime!(2025-01-05 08:30:00 UTC),
        String::from("user1"),
        RequestDetail::DayVisit {
            soldier: create_test_soldier("s-1"),
            arrival_date: date!(2025 - 01 - 10),
            base: String::from("North Base"),
            requires_base_approval: false,
            has_visited_base: true,
        },
    )
}
