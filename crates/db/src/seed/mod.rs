//! Startup seeding of an empty catalog.
//!
//! Runs once before the server accepts requests. Each entity kind is only
//! populated when its table is empty, so restarts never duplicate data and a
//! catalog that already has theaters can be backfilled with movies alone.
//!
//! Records come from `theaters.json` / `movies.json` in the seed directory or,
//! when a file is unusable, from the embedded defaults. Bad records are
//! skipped one by one; the whole run shares a single transaction that is
//! committed only if something was inserted.

pub mod defaults;
pub mod source;

use std::collections::HashSet;
use std::path::Path;

use catalog_core::seed::{parse_movie, parse_theater, record_label};
use catalog_core::types::{new_id, DbId};
use serde_json::Value;
use sqlx::{Connection, Sqlite, Transaction};

use crate::models::movie::Movie;
use crate::models::theater::Theater;
use crate::repositories::{MovieRepo, TheaterRepo};
use crate::DbPool;

pub const THEATERS_FILE: &str = "theaters.json";
pub const MOVIES_FILE: &str = "movies.json";

/// Where a batch of seed records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    File,
    Defaults,
}

/// Outcome of a seed run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedReport {
    /// Both tables already had rows; nothing was attempted.
    pub skipped: bool,
    pub theaters_inserted: u64,
    pub movies_inserted: u64,
    /// `None` when theaters were not seeded in this run.
    pub theater_source: Option<SeedSource>,
    /// `None` when movies were not seeded in this run.
    pub movie_source: Option<SeedSource>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("no usable theater records, seed aborted")]
    NoUsableTheaters,

    #[error("seed run inserted no records")]
    NothingInserted,

    #[error("database error during seed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Populate whichever catalog tables are empty.
pub async fn seed_if_empty(pool: &DbPool, data_dir: &Path) -> Result<SeedReport, SeedError> {
    let mut tx = crate::begin_write(pool).await?;

    let theaters_empty = TheaterRepo::is_empty(&mut *tx).await?;
    let movies_empty = MovieRepo::is_empty(&mut *tx).await?;

    if !theaters_empty && !movies_empty {
        tracing::info!("Catalog already populated, skipping seed");
        return Ok(SeedReport {
            skipped: true,
            ..SeedReport::default()
        });
    }

    let mut report = SeedReport::default();
    let mut fresh_theaters: Vec<DbId> = Vec::new();

    if theaters_empty {
        let (source, records) = load_or_default(&data_dir.join(THEATERS_FILE), defaults::theaters);
        tracing::info!(?source, candidates = records.len(), "Seeding theaters");

        fresh_theaters = insert_theaters(&mut tx, &records).await?;
        report.theater_source = Some(source);
        report.theaters_inserted = fresh_theaters.len() as u64;

        if fresh_theaters.is_empty() {
            tracing::error!("Every theater record was rejected, rolling back seed");
            tx.rollback().await?;
            return Err(SeedError::NoUsableTheaters);
        }
        tracing::info!(count = report.theaters_inserted, "Theaters inserted");
    }

    if movies_empty {
        let known: HashSet<DbId> = TheaterRepo::list_ids(&mut *tx).await?.into_iter().collect();

        let path = data_dir.join(MOVIES_FILE);
        let (source, records) = match source::load_records(&path) {
            Some(records) => (SeedSource::File, records),
            None => {
                tracing::info!(path = %path.display(), "Using embedded default movies");
                let targets = if fresh_theaters.is_empty() {
                    TheaterRepo::list_ids(&mut *tx).await?
                } else {
                    fresh_theaters.clone()
                };
                (SeedSource::Defaults, defaults::movies(&targets))
            }
        };
        tracing::info!(?source, candidates = records.len(), "Seeding movies");

        report.movies_inserted = insert_movies(&mut tx, &records, &known).await?;
        report.movie_source = Some(source);

        if report.movies_inserted == 0 {
            if fresh_theaters.is_empty() {
                tracing::error!("Every movie record was rejected, rolling back seed");
                tx.rollback().await?;
                return Err(SeedError::NothingInserted);
            }
            tracing::warn!(
                theaters = report.theaters_inserted,
                "No usable movie records, keeping theater-only catalog"
            );
        } else {
            tracing::info!(count = report.movies_inserted, "Movies inserted");
        }
    }

    if report.theaters_inserted == 0 && report.movies_inserted == 0 {
        tracing::error!("Seed inserted no records");
        tx.rollback().await?;
        return Err(SeedError::NothingInserted);
    }

    tx.commit().await?;
    tracing::info!(
        theaters = report.theaters_inserted,
        movies = report.movies_inserted,
        "Seed complete"
    );
    Ok(report)
}

fn load_or_default(path: &Path, fallback: fn() -> Vec<Value>) -> (SeedSource, Vec<Value>) {
    match source::load_records(path) {
        Some(records) => (SeedSource::File, records),
        None => {
            tracing::info!(path = %path.display(), "Using embedded default theaters");
            (SeedSource::Defaults, fallback())
        }
    }
}

/// Insert every valid theater record, returning the ids that made it in.
///
/// Each insert runs in its own savepoint so a storage-level rejection (for
/// instance a duplicate id inside the file) only drops that record.
async fn insert_theaters(
    tx: &mut Transaction<'_, Sqlite>,
    records: &[Value],
) -> Result<Vec<DbId>, sqlx::Error> {
    let mut inserted = Vec::new();

    for record in records {
        let label = record_label(record, "name");
        let seed = match parse_theater(record) {
            Ok(seed) => seed,
            Err(e) => {
                tracing::warn!(theater = label, error = %e, "Skipping theater record");
                continue;
            }
        };

        let theater = Theater {
            id: seed.id.unwrap_or_else(new_id),
            name: seed.name,
            brand: seed.brand,
            location: seed.location,
            operating_hours: seed.operating_hours,
        };

        let mut savepoint = tx.begin().await?;
        match TheaterRepo::insert(&mut *savepoint, &theater).await {
            Ok(_) => {
                savepoint.commit().await?;
                inserted.push(theater.id);
            }
            Err(e) => {
                savepoint.rollback().await?;
                tracing::warn!(theater = label, error = %e, "Skipping theater record");
            }
        }
    }

    Ok(inserted)
}

/// Insert every valid movie record whose theater is in `known`, returning
/// how many made it in.
async fn insert_movies(
    tx: &mut Transaction<'_, Sqlite>,
    records: &[Value],
    known: &HashSet<DbId>,
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;

    for record in records {
        let label = record_label(record, "title");
        let seed = match parse_movie(record, known) {
            Ok(seed) => seed,
            Err(e) => {
                tracing::warn!(movie = label, error = %e, "Skipping movie record");
                continue;
            }
        };

        let movie = Movie {
            id: seed.id.unwrap_or_else(new_id),
            title: seed.title,
            distributor: seed.distributor,
            ticket_price: seed.ticket_price,
            runtime_minutes: seed.runtime_minutes,
            genre: seed.genre,
            theater_id: seed.theater_id,
        };

        let mut savepoint = tx.begin().await?;
        match MovieRepo::insert(&mut *savepoint, &movie).await {
            Ok(_) => {
                savepoint.commit().await?;
                inserted += 1;
            }
            Err(e) => {
                savepoint.rollback().await?;
                tracing::warn!(movie = label, error = %e, "Skipping movie record");
            }
        }
    }

    Ok(inserted)
}
