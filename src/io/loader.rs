/*!
 * Process Definition Loader
 * Header-driven, comma-delimited input with line-numbered validation errors
 */

use crate::core::config::PriorityMap;
use crate::core::errors::{SimulatorError, ValidationError};
use crate::core::limits::{
    COLUMN_ARRIVAL_TIME, COLUMN_BURST_TIME, COLUMN_PRIORITY, COLUMN_PROCESS_ID,
};
use crate::core::types::{SimResult, Ticks};
use crate::process::validation::SpecValidator;
use crate::process::{PriorityLevel, ProcessSpec};
use std::path::Path;
use tracing::debug;

const DELIMITER: char = ',';

/// Column positions resolved from the header row
struct Columns {
    id: usize,
    arrival: usize,
    burst: usize,
    priority: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, ValidationError> {
        let names: Vec<&str> = split_fields(header.trim_start_matches('\u{feff}')).collect();
        let find = |column: &str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or_else(|| ValidationError::MissingColumn(column.to_string()))
        };

        Ok(Self {
            id: find(COLUMN_PROCESS_ID)?,
            arrival: find(COLUMN_ARRIVAL_TIME)?,
            burst: find(COLUMN_BURST_TIME)?,
            priority: find(COLUMN_PRIORITY)?,
        })
    }
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(DELIMITER).map(unquote)
}

fn unquote(field: &str) -> &str {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(field)
}

fn field<'a>(
    fields: &[&'a str],
    index: usize,
    name: &str,
    line: usize,
) -> Result<&'a str, ValidationError> {
    match fields.get(index) {
        Some(&value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField {
            line,
            field: name.to_string(),
        }),
    }
}

fn integer(value: &str, name: &str, line: usize) -> Result<Ticks, ValidationError> {
    value
        .parse::<Ticks>()
        .map_err(|_| ValidationError::InvalidInteger {
            line,
            field: name.to_string(),
            value: value.to_string(),
        })
}

/// Parse process definitions from text
///
/// The first non-blank line is the header; blank lines are skipped. Extra
/// columns are ignored.
pub fn parse_processes(
    text: &str,
    priorities: &PriorityMap,
) -> Result<Vec<ProcessSpec>, ValidationError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines.next().ok_or(ValidationError::EmptyInput)?;
    let columns = Columns::from_header(header)?;

    let mut validator = SpecValidator::new();
    let mut specs = Vec::new();

    for (line, raw) in lines {
        let fields: Vec<&str> = split_fields(raw).collect();

        let id = field(&fields, columns.id, COLUMN_PROCESS_ID, line)?;
        let arrival = field(&fields, columns.arrival, COLUMN_ARRIVAL_TIME, line)?;
        let burst = field(&fields, columns.burst, COLUMN_BURST_TIME, line)?;
        let priority = field(&fields, columns.priority, COLUMN_PRIORITY, line)?;

        let level = PriorityLevel::parse(priority).ok_or_else(|| {
            ValidationError::UnknownPriority {
                line,
                value: priority.to_string(),
            }
        })?;

        let spec = ProcessSpec::new(
            id,
            integer(arrival, COLUMN_ARRIVAL_TIME, line)?,
            integer(burst, COLUMN_BURST_TIME, line)?,
            priorities.resolve(level),
        );
        validator.check(line, &spec)?;
        specs.push(spec);
    }

    Ok(specs)
}

/// Read and parse a process definition file
pub async fn load_processes(path: &Path, priorities: &PriorityMap) -> SimResult<Vec<ProcessSpec>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SimulatorError::io(path, e))?;

    let specs = parse_processes(&text, priorities)?;
    debug!(path = %path.display(), processes = specs.len(), "Process definitions loaded");
    Ok(specs)
}
