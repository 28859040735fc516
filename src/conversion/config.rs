//! Configuration options for CSV to GeoJSON conversion

/// Header names recognised as longitude when no column is given
pub const DEFAULT_LONGITUDE_NAMES: &[&str] = &["x", "longitude", "long", "lon", "lng"];

/// Header names recognised as latitude when no column is given
pub const DEFAULT_LATITUDE_NAMES: &[&str] = &["y", "latitude", "lat"];

/// Which header wins when several columns match a lookup.
///
/// Existing files produced by this converter rely on the last matching column
/// being used, so `LastMatchWins` is the default and should stay that way.
pub const DEFAULT_MATCH_POLICY: MatchPolicy = MatchPolicy::LastMatchWins;

/// Tie-break rule for header lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Keep scanning and use the highest matching index
    LastMatchWins,
    /// Stop at the lowest matching index
    FirstMatchWins,
}

/// Candidate header names used to guess coordinate columns
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeuristics {
    pub longitude: Vec<String>,
    pub latitude: Vec<String>,
}

impl Default for ColumnHeuristics {
    fn default() -> Self {
        Self {
            longitude: DEFAULT_LONGITUDE_NAMES.iter().map(|s| s.to_string()).collect(),
            latitude: DEFAULT_LATITUDE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Compare two header names ignoring case, with full Unicode lowercasing
pub fn same_column_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

impl ColumnHeuristics {
    /// Check whether `name` is a longitude candidate (case-insensitive)
    pub fn is_longitude(&self, name: &str) -> bool {
        self.longitude.iter().any(|c| same_column_name(c, name))
    }

    /// Check whether `name` is a latitude candidate (case-insensitive)
    pub fn is_latitude(&self, name: &str) -> bool {
        self.latitude.iter().any(|c| same_column_name(c, name))
    }
}

/// Interpret a delimiter token as given on the command line.
///
/// Surrounding single quotes are dropped, a token containing a literal `\t`
/// means TAB, anything else uses its first character.
pub fn parse_delimiter(token: &str) -> Result<u8, String> {
    let token = token.trim_matches('\'');
    if token.contains("\\t") {
        return Ok(b'\t');
    }

    match token.chars().next() {
        None => Err("Delimiter must not be empty".to_string()),
        Some(c) if c.is_ascii() => Ok(c as u8),
        Some(c) => Err(format!(
            "Invalid delimiter '{}'. Only single-byte characters are supported",
            c
        )),
    }
}

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Field delimiter of the input table
    pub delimiter: u8,
    /// Explicit longitude column name
    pub longitude_column: Option<String>,
    /// Explicit latitude column name
    pub latitude_column: Option<String>,
    /// Names tried when a column is not given
    pub heuristics: ColumnHeuristics,
    /// Tie-break for multiple matching headers
    pub match_policy: MatchPolicy,
    /// Maximum accepted input size in bytes
    pub input_limit: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            longitude_column: None,
            latitude_column: None,
            heuristics: ColumnHeuristics::default(),
            match_policy: DEFAULT_MATCH_POLICY,
            input_limit: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set explicit longitude column
    pub fn with_longitude_column(mut self, name: impl Into<String>) -> Self {
        self.longitude_column = Some(name.into());
        self
    }

    /// Set explicit latitude column
    pub fn with_latitude_column(mut self, name: impl Into<String>) -> Self {
        self.latitude_column = Some(name.into());
        self
    }

    /// Replace the heuristic name lists
    pub fn with_heuristics(mut self, heuristics: ColumnHeuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Set the header tie-break policy
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Set input size limit
    pub fn with_input_limit(mut self, limit_bytes: u64) -> Self {
        self.input_limit = limit_bytes;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(format!(
                "Delimiter {:?} cannot be used as a field separator",
                self.delimiter as char
            ));
        }

        if self.longitude_column.is_none() && self.heuristics.longitude.is_empty() {
            return Err("No longitude column given and no longitude names to guess from".to_string());
        }

        if self.latitude_column.is_none() && self.heuristics.latitude.is_empty() {
            return Err("No latitude column given and no latitude names to guess from".to_string());
        }

        if self.input_limit < 1024 {
            return Err("Input limit must be at least 1KB".to_string());
        }

        Ok(())
    }
}
