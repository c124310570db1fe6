//! Embedded catalog used when no seed file is available.

use catalog_core::seed::round_robin;
use catalog_core::types::DbId;
use serde_json::{json, Value};

/// Default theaters. Ids are fixed so repeated fresh installs agree.
pub fn theaters() -> Vec<Value> {
    vec![
        json!({
            "id": "33bd96af-0431-47fc-aaad-08107e268393",
            "name": "CGV Gangnam",
            "brand": "CGV",
            "location": "Yeoksam-dong, Gangnam-gu, Seoul",
            "operating_hours": "09:00-24:00"
        }),
        json!({
            "id": "343f8b25-22e0-4d49-a75a-5ba34a69f1bf",
            "name": "Lotte Cinema World Tower",
            "brand": "Lotte Cinema",
            "location": "Jamsil-dong, Songpa-gu, Seoul",
            "operating_hours": "08:00-02:00"
        }),
        json!({
            "id": "8d94bf5f-0cd5-4d19-b6ae-ce35fa59dfb4",
            "name": "Megabox COEX",
            "brand": "Megabox",
            "location": "Samseong-dong, Gangnam-gu, Seoul",
            "operating_hours": "09:00-01:00"
        }),
        json!({
            "id": "e78327f8-469e-45e3-8873-c2bdf84ad038",
            "name": "CGV Yongsan I'Park Mall",
            "brand": "CGV",
            "location": "Hangang-ro 3-ga, Yongsan-gu, Seoul",
            "operating_hours": "09:30-23:30"
        }),
        json!({
            "id": "deecc0da-b267-41d3-95e2-61101c1b1107",
            "name": "Lotte Cinema Konkuk Univ.",
            "brand": "Lotte Cinema",
            "location": "Hwayang-dong, Gwangjin-gu, Seoul",
            "operating_hours": "09:00-24:00"
        }),
    ]
}

/// Default movies, each attached to one of `theater_ids` in turn.
///
/// With no theater ids the records carry no reference and are rejected by
/// record validation like any other dangling movie.
pub fn movies(theater_ids: &[DbId]) -> Vec<Value> {
    let base = [
        json!({
            "title": "Oppenheimer",
            "distributor": "Universal Pictures",
            "ticket_price": 14000,
            "runtime_minutes": 180,
            "genre": "Drama"
        }),
        json!({
            "title": "Exhuma",
            "distributor": "Showbox",
            "ticket_price": 13000,
            "runtime_minutes": 134,
            "genre": "Occult"
        }),
        json!({
            "title": "Dune: Part Two",
            "distributor": "Warner Bros.",
            "ticket_price": 15000,
            "runtime_minutes": 166,
            "genre": "SF"
        }),
    ];

    base.into_iter()
        .enumerate()
        .map(|(i, mut movie)| {
            if let Some(theater_id) = round_robin(theater_ids, i) {
                movie["theater_id"] = Value::String(theater_id.clone());
            }
            movie
        })
        .collect()
}
