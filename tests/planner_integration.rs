//! Planner flow against the in-memory location store.

use chrono::{TimeZone, Utc};

use astroplanner::api::{LocationId, UserId};
use astroplanner::db::{LocalRepository, LocationRepository, NewLocation};
use astroplanner::ephemeris::Vsop87Ephemeris;
use astroplanner::models::TimeError;
use astroplanner::services::{visible_targets, PlannerError, TimeQuery, VisibilityError};

fn toronto_location(timezone: Option<&str>) -> NewLocation {
    NewLocation {
        name: "Backyard".to_string(),
        latitude: 43.7,
        longitude: -79.4,
        timezone: timezone.map(str::to_string),
        notes: None,
    }
}

#[tokio::test]
async fn test_full_flow_returns_ranked_catalog() {
    let repo = LocalRepository::new();
    let eph = Vsop87Ephemeris::new().unwrap();
    let owner = UserId::new(1);
    let location = repo.insert(owner, toronto_location(Some("America/Toronto"))).await.unwrap();

    let query = TimeQuery {
        when: None,
        when_local: Some("2024-06-21T23:00".to_string()),
        tz: None, // falls back to the stored timezone
    };
    let results = visible_targets(&repo, &eph, owner, location.id, query)
        .await
        .unwrap();
    assert_eq!(results.len(), 11);
}

#[tokio::test]
async fn test_stored_timezone_fallback_matches_explicit_tz() {
    let repo = LocalRepository::new();
    let eph = Vsop87Ephemeris::new().unwrap();
    let owner = UserId::new(1);
    let location = repo.insert(owner, toronto_location(Some("America/Toronto"))).await.unwrap();

    let fallback = visible_targets(
        &repo,
        &eph,
        owner,
        location.id,
        TimeQuery {
            when_local: Some("2024-06-21T23:00".to_string()),
            ..TimeQuery::default()
        },
    )
    .await
    .unwrap();

    let explicit = visible_targets(
        &repo,
        &eph,
        owner,
        location.id,
        TimeQuery {
            when_local: Some("2024-06-21T23:00".to_string()),
            tz: Some("America/Toronto".to_string()),
            ..TimeQuery::default()
        },
    )
    .await
    .unwrap();

    for (a, b) in fallback.iter().zip(explicit.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.altitude_deg.to_bits(), b.altitude_deg.to_bits());
    }
}

#[tokio::test]
async fn test_request_tz_overrides_stored_timezone() {
    let repo = LocalRepository::new();
    let eph = Vsop87Ephemeris::new().unwrap();
    let owner = UserId::new(1);
    let location = repo.insert(owner, toronto_location(Some("America/Toronto"))).await.unwrap();

    // Same wall-clock string in UTC is four hours earlier than in Toronto;
    // the results must differ.
    let toronto = visible_targets(
        &repo,
        &eph,
        owner,
        location.id,
        TimeQuery {
            when_local: Some("2024-06-21T23:00".to_string()),
            ..TimeQuery::default()
        },
    )
    .await
    .unwrap();
    let utc = visible_targets(
        &repo,
        &eph,
        owner,
        location.id,
        TimeQuery {
            when_local: Some("2024-06-21T23:00".to_string()),
            tz: Some("UTC".to_string()),
            ..TimeQuery::default()
        },
    )
    .await
    .unwrap();

    let sun_toronto = toronto[0].sun_altitude_deg;
    let sun_utc = utc[0].sun_altitude_deg;
    assert!((sun_toronto - sun_utc).abs() > 1.0);
}

#[tokio::test]
async fn test_missing_timezone_everywhere_is_rejected() {
    let repo = LocalRepository::new();
    let eph = Vsop87Ephemeris::new().unwrap();
    let owner = UserId::new(1);
    let location = repo.insert(owner, toronto_location(None)).await.unwrap();

    let result = visible_targets(
        &repo,
        &eph,
        owner,
        location.id,
        TimeQuery {
            when_local: Some("2024-06-21T23:00".to_string()),
            ..TimeQuery::default()
        },
    )
    .await;
    assert_eq!(
        result.unwrap_err(),
        PlannerError::Visibility(VisibilityError::Time(TimeError::MissingTimezone))
    );
}

#[tokio::test]
async fn test_local_form_preferred_over_absolute() {
    let repo = LocalRepository::new();
    let eph = Vsop87Ephemeris::new().unwrap();
    let owner = UserId::new(1);
    let location = repo.insert(owner, toronto_location(Some("America/Toronto"))).await.unwrap();

    // The absolute field points at midday; the local field at night. The
    // local form wins, so the sky must be dark.
    let results = visible_targets(
        &repo,
        &eph,
        owner,
        location.id,
        TimeQuery {
            when: Some(Utc.with_ymd_and_hms(2024, 6, 21, 17, 0, 0).unwrap()),
            when_local: Some("2024-06-21T23:30".to_string()),
            tz: None,
        },
    )
    .await
    .unwrap();
    assert!(results[0].sun_altitude_deg < 0.0);
}

#[tokio::test]
async fn test_no_time_fields_is_rejected() {
    let repo = LocalRepository::new();
    let eph = Vsop87Ephemeris::new().unwrap();
    let owner = UserId::new(1);
    let location = repo.insert(owner, toronto_location(Some("America/Toronto"))).await.unwrap();

    let result = visible_targets(&repo, &eph, owner, location.id, TimeQuery::default()).await;
    assert_eq!(result.unwrap_err(), PlannerError::MissingTime);
}

#[tokio::test]
async fn test_unknown_location_is_not_found() {
    let repo = LocalRepository::new();
    let eph = Vsop87Ephemeris::new().unwrap();

    let result = visible_targets(
        &repo,
        &eph,
        UserId::new(1),
        LocationId::new(42),
        TimeQuery {
            when: Some(Utc.with_ymd_and_hms(2024, 6, 22, 3, 0, 0).unwrap()),
            ..TimeQuery::default()
        },
    )
    .await;
    assert_eq!(result.unwrap_err(), PlannerError::LocationNotFound);
}

#[tokio::test]
async fn test_other_users_location_is_not_found() {
    let repo = LocalRepository::new();
    let eph = Vsop87Ephemeris::new().unwrap();
    let owner = UserId::new(1);
    let location = repo.insert(owner, toronto_location(Some("America/Toronto"))).await.unwrap();

    let result = visible_targets(
        &repo,
        &eph,
        UserId::new(2),
        location.id,
        TimeQuery {
            when: Some(Utc.with_ymd_and_hms(2024, 6, 22, 3, 0, 0).unwrap()),
            ..TimeQuery::default()
        },
    )
    .await;
    assert_eq!(result.unwrap_err(), PlannerError::LocationNotFound);
}
