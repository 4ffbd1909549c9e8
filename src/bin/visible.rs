//! Visible-targets demo binary.
//!
//! Runs one visibility request from the command line and prints the ranked
//! result list as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Rank targets for an observer right now
//! visible-targets 43.7 -79.4
//!
//! # At an explicit UTC instant
//! visible-targets 43.7 -79.4 --when 2024-06-22T03:00:00Z
//!
//! # At a local wall-clock time in an IANA zone
//! visible-targets 43.7 -79.4 --when-local 2024-06-21T23:00 --tz America/Toronto
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::{anyhow, bail, Context};
use chrono::Utc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use astroplanner::ephemeris::Vsop87Ephemeris;
use astroplanner::models::{GeographicLocation, TimeDescriptor};
use astroplanner::services::compute_visible_targets;

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (observer, descriptor) = parse_args(&args)?;

    // Ephemeris load failure is fatal; there is nothing to serve without it.
    let ephemeris = Vsop87Ephemeris::new().context("ephemeris startup failed")?;
    info!(
        latitude = observer.latitude,
        longitude = observer.longitude,
        "computing visible targets"
    );

    let targets = compute_visible_targets(&ephemeris, &observer, &descriptor)?;
    println!("{}", serde_json::to_string_pretty(&targets)?);

    Ok(())
}

fn parse_args(args: &[String]) -> anyhow::Result<(GeographicLocation, TimeDescriptor)> {
    if args.len() < 2 {
        bail!("usage: visible-targets <latitude> <longitude> [--when TS | --when-local TS --tz ZONE]");
    }

    let latitude: f64 = args[0].parse().context("latitude must be a number")?;
    let longitude: f64 = args[1].parse().context("longitude must be a number")?;
    let observer = GeographicLocation::new(latitude, longitude).map_err(|e| anyhow!(e))?;

    let mut when: Option<String> = None;
    let mut when_local: Option<String> = None;
    let mut tz: Option<String> = None;

    let mut rest = args[2..].iter();
    while let Some(flag) = rest.next() {
        let value = rest
            .next()
            .ok_or_else(|| anyhow!("missing value for {flag}"))?
            .clone();
        match flag.as_str() {
            "--when" => when = Some(value),
            "--when-local" => when_local = Some(value),
            "--tz" => tz = Some(value),
            other => bail!("unknown flag: {other}"),
        }
    }

    let descriptor = if let Some(when_local) = when_local {
        TimeDescriptor::Local {
            when_local,
            timezone: tz,
        }
    } else if let Some(when) = when {
        TimeDescriptor::parse_absolute(&when)?
    } else {
        TimeDescriptor::Utc(Utc::now())
    };

    Ok((observer, descriptor))
}
