use crate::config::{NewArgs, ParseArgs};
use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;
use ulidgen::{FixedClock, SystemClock, ThreadRandom, Ulid, UlidFactory, UlidGenerator};

/// Picks the clock and random source requested on the command line.
pub fn build_generator(timestamp: Option<u64>, seed: Option<u64>) -> Box<dyn UlidGenerator> {
    match (timestamp, seed) {
        (Some(ts), Some(seed)) => Box::new(UlidFactory::seeded(FixedClock::new(ts), seed)),
        (Some(ts), None) => Box::new(UlidFactory::new(FixedClock::new(ts), ThreadRandom)),
        (None, Some(seed)) => Box::new(UlidFactory::seeded(SystemClock, seed)),
        (None, None) => Box::new(UlidFactory::system()),
    }
}

pub fn run_new(args: &NewArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let generator = build_generator(args.timestamp, args.seed);
    tracing::debug!(
        count = args.count,
        timestamp = ?args.timestamp,
        seeded = args.seed.is_some(),
        "minting identifiers"
    );

    for i in 0..args.count {
        let id = generator
            .generate_now()
            .with_context(|| format!("failed to mint identifier {} of {}", i + 1, args.count))?;
        writeln!(out, "{id}")?;
    }
    Ok(())
}

pub fn run_parse(args: &ParseArgs, out: &mut impl Write) -> anyhow::Result<()> {
    for raw in &args.ulids {
        let id = Ulid::decode(raw).with_context(|| format!("failed to parse {raw:?}"))?;
        let datetime: DateTime<Utc> = id.datetime().into();
        writeln!(
            out,
            "{id}\t{}\t{}",
            id.timestamp(),
            datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
    }
    Ok(())
}
