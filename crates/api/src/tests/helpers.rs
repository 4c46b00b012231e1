// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use urbia::SolicitationLifecycleService;
use urbia_persistence::SqlitePersistence;

use crate::handlers::create_solicitation;
use crate::request_response::{CreateSolicitationRequest, SolicitationInfo};

/// A lifecycle service over a seeded in-memory database.
pub struct TestHarness {
    pub service: SolicitationLifecycleService<SqlitePersistence>,
    pub category_id: i64,
    pub admin_id: i64,
    pub citizen_id: i64,
}

pub fn test_harness() -> TestHarness {
    let mut db = SqlitePersistence::new_in_memory().expect("in-memory database");
    let category_id: i64 = db.create_category("Iluminação Pública").expect("category");
    let admin_id: i64 = db.create_admin("Prefeitura").expect("admin user");
    let citizen_id: i64 = db.create_citizen("Maria").expect("citizen user");
    TestHarness {
        service: SolicitationLifecycleService::new(db),
        category_id,
        admin_id,
        citizen_id,
    }
}

pub fn create_request(harness: &TestHarness) -> CreateSolicitationRequest {
    CreateSolicitationRequest {
        reporter_id: harness.citizen_id,
        category_id: harness.category_id,
        latitude: -23.5505,
        longitude: -46.6333,
        address: Some(String::from("Praça da Sé, Centro")),
        description: String::from("Poste com lâmpada queimada"),
    }
}

pub fn file_solicitation(harness: &mut TestHarness) -> SolicitationInfo {
    let request = create_request(harness);
    create_solicitation(&mut harness.service, &request)
        .expect("create solicitation")
        .solicitation
}
