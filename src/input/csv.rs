use crate::core::{Channel, Entity, EntityLoad, EntityMeta, LoadError, LoadFailure, Rgb, Sample};
use crate::input::{DataProvider, SessionRequest};
use chrono::{NaiveTime, Timelike};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

const KEY_COLUMN: &[&str] = &["abbreviation", "driver", "key", "code"];
const FULL_NAME_COLUMN: &[&str] = &["fullname", "full_name", "name"];
const FIRST_NAME_COLUMN: &[&str] = &["firstname", "first_name"];
const LAST_NAME_COLUMN: &[&str] = &["lastname", "last_name"];
const COLOR_COLUMN: &[&str] = &["teamcolor", "team_color", "color", "colour"];
const TIME_COLUMN: &[&str] = &["time", "laptime", "elapsed"];

/// Sessions exported as CSV tables
///
/// Layout:
/// - `<root>/<season>/<event>/<session>/results.csv`: one row per entity,
///   in leaderboard order (`Abbreviation`, `FirstName`, `LastName` or
///   `FullName`, `TeamColor`)
/// - `<root>/<season>/<event>/<session>/<Abbreviation>.csv`: the entity's
///   telemetry (`X`, `Y`, `Speed`, `Throttle`, `Brake`, `nGear`, optional `Time`)
pub struct CsvProvider {
    root: PathBuf,
}

impl CsvProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn session_dir(&self, request: &SessionRequest) -> PathBuf {
        self.root
            .join(request.season.to_string())
            .join(&request.event)
            .join(&request.session)
    }
}

impl DataProvider for CsvProvider {
    fn name(&self) -> &str {
        "CSV export"
    }

    fn load_session(&self, request: &SessionRequest) -> Result<Vec<EntityLoad>, LoadError> {
        let dir = self.session_dir(request);
        let results = read_results(open(&dir.join("results.csv"))?)?;

        Ok(results
            .into_iter()
            .map(|meta| {
                let path = dir.join(format!("{}.csv", meta.key));
                debug!("Reading telemetry for {} from {:?}", meta.key, path);
                let key = meta.key.clone();
                open(&path)
                    .and_then(read_telemetry)
                    .and_then(|samples| Entity::new(meta, samples))
                    .map_err(|reason| LoadFailure::new(key, reason))
            })
            .collect())
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::MissingTelemetry(path.display().to_string()),
        _ => LoadError::Io(e),
    })
}

/// Parse the session results table into display identities
pub fn read_results<R: Read>(reader: R) -> Result<Vec<EntityMeta>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let key_idx = find_column(&headers, KEY_COLUMN)?;
    let full_name_idx = find_column(&headers, FULL_NAME_COLUMN).ok();
    let first_idx = find_column(&headers, FIRST_NAME_COLUMN).ok();
    let last_idx = find_column(&headers, LAST_NAME_COLUMN).ok();
    let color_idx = find_column(&headers, COLOR_COLUMN).ok();

    let mut entries = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").trim();

        let key = cell(Some(key_idx));
        if key.is_empty() {
            continue;
        }

        let name = match cell(full_name_idx) {
            "" => format!("{} {}", cell(first_idx), cell(last_idx)).trim().to_string(),
            full => full.to_string(),
        };
        let name = if name.is_empty() { key.to_string() } else { name };

        entries.push(EntityMeta::new(key, name, Rgb::from_hex_or_white(cell(color_idx))));
    }

    Ok(entries)
}

/// Parse one entity's telemetry table
pub fn read_telemetry<R: Read>(reader: R) -> Result<Vec<Sample>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut columns = Vec::with_capacity(Channel::ALL.len());
    for channel in Channel::ALL {
        columns.push((channel, find_column(&headers, channel_aliases(channel))?));
    }
    let time_idx = find_column(&headers, TIME_COLUMN).ok();

    let mut samples = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        let mut sample = Sample::default();

        for &(channel, idx) in &columns {
            let raw = record.get(idx).unwrap_or("");
            let value = parse_value(raw).ok_or_else(|| LoadError::InvalidCell {
                row: row + 1,
                column: channel.column_name(),
                value: raw.to_string(),
            })?;
            sample.set_channel(channel, value);
        }
        sample.elapsed = time_idx
            .and_then(|i| record.get(i))
            .and_then(parse_elapsed);

        samples.push(sample);
    }

    Ok(samples)
}

fn channel_aliases(channel: Channel) -> &'static [&'static str] {
    match channel {
        Channel::X => &["x"],
        Channel::Y => &["y"],
        Channel::Speed => &["speed"],
        Channel::Throttle => &["throttle"],
        Channel::Brake => &["brake"],
        Channel::Gear => &["ngear", "gear"],
    }
}

/// Find a column by checking possible names
fn find_column(headers: &csv::StringRecord, names: &'static [&'static str]) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| {
            let header = header.trim().to_lowercase();
            names.iter().any(|&name| header == name)
        })
        .ok_or(LoadError::MissingColumn(names))
}

/// Numeric cell. Flags record as 100/0 so they share the percent scale; empty
/// cells become NaN and are skipped when drawing.
fn parse_value(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(f64::NAN);
    }
    if raw.eq_ignore_ascii_case("true") {
        return Some(100.0);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Some(0.0);
    }
    raw.parse::<f64>().ok()
}

/// Seconds, either plain or as a `D days HH:MM:SS.ffffff` timedelta
fn parse_elapsed(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<f64>() {
        return secs.is_finite().then_some(secs);
    }

    let (days, clock) = match raw.split_once(" days ") {
        Some((days, clock)) => (days.trim().parse::<f64>().ok()?, clock),
        None => (0.0, raw),
    };
    let time = NaiveTime::parse_from_str(clock.trim(), "%H:%M:%S%.f").ok()?;

    Some(
        days * 86_400.0
            + time.num_seconds_from_midnight() as f64
            + time.nanosecond() as f64 / 1e9,
    )
}
