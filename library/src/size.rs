use crate::ParseError;

const UNIT: u64 = 1024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Render a byte count with binary prefixes.
///
/// Below 1024 the exact count is printed (`"1023 B"`), otherwise one decimal
/// place with the largest prefix that keeps the value under 1024 (`"1.5 MiB"`).
pub fn to_human_byte_format(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;

    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}iB", bytes as f64 / div as f64, PREFIXES[exp])
}

/// Parse the byte count out of `zfs send -nP` output.
///
/// The report is tab separated and the size is the second field of the
/// second line:
///
/// ```text
/// incremental	snap1	tank@snap2	5632
/// size	5632
/// ```
pub fn parse_send_estimate(output: &str) -> Result<u64, ParseError> {
    let lines = output.trim().lines().collect::<Vec<&str>>();

    let line = lines.get(1).ok_or(ParseError::LineCount {
        expected: 2,
        found: lines.len(),
    })?;

    let field = line
        .trim()
        .split('\t')
        .nth(1)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .ok_or(ParseError::MissingField { line: 2, field: 2 })?;

    field
        .parse::<u64>()
        .map_err(|_| ParseError::NotNumeric(field.to_string()))
}
