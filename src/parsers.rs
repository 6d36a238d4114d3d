use std::time::Duration;

/// Single-character field separator for the CSV output (`,`, `;`, `tab`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterArg(pub char);

impl Default for DelimiterArg {
    fn default() -> Self {
        Self(',')
    }
}

impl std::str::FromStr for DelimiterArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" | "\\t" | "\t" => return Ok(Self('\t')),
            "semicolon" => return Ok(Self(';')),
            "comma" => return Ok(Self(',')),
            _ => {}
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !matches!(c, '"' | '\r' | '\n') => Ok(Self(c)),
            _ => Err(format!("Invalid delimiter: {s:?} (use a single character or 'tab')")),
        }
    }
}

/// Positive number of seconds, fractions allowed.
pub fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number of seconds: {s}"))?;
    if secs <= 0.0 {
        return Err(format!("Timeout must be greater than zero: {s}"));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("Invalid timeout {s}: {e}"))
}
