use std::time::{Instant, SystemTime};

use anyhow::Result;
use chrono::{SecondsFormat, Utc};

/// Builds a time derived identifier such as `req_1718000000000`.
pub fn time_id(prefix: &str) -> Result<String> {
    let unix_now: i64 = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)?
        .as_millis()
        .try_into()?;
    Ok(format!("{prefix}_{unix_now}"))
}

/// Current time as an ISO-8601 string with microsecond precision.
pub fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
