// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::SqlitePersistence;
use urbia::Storage;
use urbia_domain::{NewSolicitation, Protocol, Solicitation, SolicitationStatus};

/// A freshly migrated in-memory database with one category, one
/// administrator, and one citizen seeded.
pub struct SeededDb {
    pub db: SqlitePersistence,
    pub category_id: i64,
    pub admin_id: i64,
    pub citizen_id: i64,
}

pub fn seeded_db() -> SeededDb {
    let mut db = SqlitePersistence::new_in_memory().expect("in-memory database");
    let category_id: i64 = db.create_category("Iluminação Pública").expect("category");
    let admin_id: i64 = db.create_admin("Prefeitura").expect("admin user");
    let citizen_id: i64 = db.create_citizen("Maria").expect("citizen user");
    SeededDb {
        db,
        category_id,
        admin_id,
        citizen_id,
    }
}

pub fn new_solicitation(
    sequence: u32,
    category_id: i64,
    reporter_id: i64,
) -> NewSolicitation {
    NewSolicitation {
        protocol: Protocol::new(2026, sequence).expect("valid protocol"),
        status: SolicitationStatus::Pendente,
        category_id,
        reporter_id,
        latitude: -23.5505,
        longitude: -46.6333,
        address: Some(String::from("Praça da Sé, Centro")),
        description: String::from("Poste com lâmpada queimada"),
        created_at: String::from("2026-03-10T12:00:00Z"),
        updated_at: String::from("2026-03-10T12:00:00Z"),
    }
}

pub fn insert_seeded(seeded: &mut SeededDb, sequence: u32) -> Solicitation {
    let new = new_solicitation(sequence, seeded.category_id, seeded.citizen_id);
    seeded.db.insert_solicitation(&new).expect("insert")
}
