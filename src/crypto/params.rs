use std::fmt;

use serde::{Deserialize, Serialize};

use super::{MIN_MEMORY_COST, MIN_PARALLELISM, MIN_TIME_COST};

/// Caller supplied Argon2 cost parameters.
///
/// Fields are optional so that partial configuration files deserialize, but
/// once a set is handed to [`validate`] every field is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParameters {
    /// Number of iterations.
    #[serde(default)]
    pub time_cost: Option<u32>,
    /// Memory usage in KiB.
    #[serde(default)]
    pub memory_cost: Option<u32>,
    /// Number of lanes.
    #[serde(default)]
    pub parallelism: Option<u32>,
}

impl HashParameters {
    pub fn new(time_cost: u32, memory_cost: u32, parallelism: u32) -> Self {
        Self {
            time_cost: Some(time_cost),
            memory_cost: Some(memory_cost),
            parallelism: Some(parallelism),
        }
    }

    /// Fills missing fields from `other`.
    pub fn or(self, other: HashParameters) -> Self {
        Self {
            time_cost: self.time_cost.or(other.time_cost),
            memory_cost: self.memory_cost.or(other.memory_cost),
            parallelism: self.parallelism.or(other.parallelism),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.time_cost.is_none() && self.memory_cost.is_none() && self.parallelism.is_none()
    }

    fn get(&self, name: ParameterName) -> Option<u32> {
        match name {
            ParameterName::TimeCost => self.time_cost,
            ParameterName::MemoryCost => self.memory_cost,
            ParameterName::Parallelism => self.parallelism,
        }
    }
}

impl From<ResolvedParams> for HashParameters {
    fn from(p: ResolvedParams) -> Self {
        Self::new(p.time_cost, p.memory_cost, p.parallelism)
    }
}

/// Recognized parameter names, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterName {
    TimeCost,
    MemoryCost,
    Parallelism,
}

impl ParameterName {
    pub const ALL: [ParameterName; 3] = [
        ParameterName::TimeCost,
        ParameterName::MemoryCost,
        ParameterName::Parallelism,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParameterName::TimeCost => "time_cost",
            ParameterName::MemoryCost => "memory_cost",
            ParameterName::Parallelism => "parallelism",
        }
    }

    /// Minimal accepted value, also used as the default.
    pub fn minimum(self) -> u32 {
        match self {
            ParameterName::TimeCost => MIN_TIME_COST,
            ParameterName::MemoryCost => MIN_MEMORY_COST,
            ParameterName::Parallelism => MIN_PARALLELISM,
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Ok,
    /// No parameter set was supplied.
    Incomplete,
    /// Missing or below the minimum.
    NotMinimalSecure,
}

impl ValidationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Ok => "OK",
            ValidationStatus::Incomplete => "INCOMPLETE",
            ValidationStatus::NotMinimalSecure => "NOT_MINIMAL_SECURE",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub parameter_name: ParameterName,
    pub status: ValidationStatus,
}

/// Checks a parameter set against the minimal security thresholds.
///
/// Always yields one outcome per [`ParameterName::ALL`] entry, in that order.
/// An absent set is `Incomplete` across the board; nothing is compared.
pub fn validate(params: Option<&HashParameters>) -> [ValidationOutcome; 3] {
    ParameterName::ALL.map(|parameter_name| {
        let status = match params {
            None => ValidationStatus::Incomplete,
            Some(p) => match p.get(parameter_name) {
                Some(value) if value >= parameter_name.minimum() => ValidationStatus::Ok,
                _ => ValidationStatus::NotMinimalSecure,
            },
        };
        ValidationOutcome {
            parameter_name,
            status,
        }
    })
}

/// Effective cost parameters handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedParams {
    pub time_cost: u32,
    pub memory_cost: u32,
    pub parallelism: u32,
}

impl Default for ResolvedParams {
    fn default() -> Self {
        Self {
            time_cost: MIN_TIME_COST,
            memory_cost: MIN_MEMORY_COST,
            parallelism: MIN_PARALLELISM,
        }
    }
}

impl ResolvedParams {
    pub fn get(&self, name: ParameterName) -> u32 {
        match name {
            ParameterName::TimeCost => self.time_cost,
            ParameterName::MemoryCost => self.memory_cost,
            ParameterName::Parallelism => self.parallelism,
        }
    }

    fn set(&mut self, name: ParameterName, value: u32) {
        match name {
            ParameterName::TimeCost => self.time_cost = value,
            ParameterName::MemoryCost => self.memory_cost = value,
            ParameterName::Parallelism => self.parallelism = value,
        }
    }
}

/// Result of [`resolve`]: the effective values and every rejected name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub params: ResolvedParams,
    pub rejected: Vec<ParameterName>,
    pub outcomes: [ValidationOutcome; 3],
}

impl Resolution {
    pub fn is_secure(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Resolves effective parameters.
///
/// `Ok` outcomes take the caller's value, `Incomplete` outcomes fall back to
/// the minimum and `NotMinimalSecure` outcomes are collected in `rejected`.
pub fn resolve(params: Option<&HashParameters>) -> Resolution {
    let outcomes = validate(params);
    let mut resolved = ResolvedParams::default();
    let mut rejected = Vec::new();

    for outcome in outcomes {
        match outcome.status {
            ValidationStatus::Ok => {
                // Ok implies the field is present.
                if let Some(value) = params.and_then(|p| p.get(outcome.parameter_name)) {
                    resolved.set(outcome.parameter_name, value);
                }
            }
            ValidationStatus::Incomplete => {}
            ValidationStatus::NotMinimalSecure => rejected.push(outcome.parameter_name),
        }
    }

    tracing::debug!(
        time_cost = resolved.time_cost,
        memory_cost = resolved.memory_cost,
        parallelism = resolved.parallelism,
        rejected = rejected.len(),
        "resolved argon2 parameters"
    );

    Resolution {
        params: resolved,
        rejected,
        outcomes,
    }
}
