use super::reading::Reading;

/// One row of the `values` mapping
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorReading {
    pub indicator: String,
    pub reading: Reading,
}

impl IndicatorReading {
    pub fn new(indicator: impl Into<String>, reading: Reading) -> Self {
        Self {
            indicator: indicator.into(),
            reading,
        }
    }
}

/// One row of the `breaches` mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachFlag {
    pub rule: String,
    pub triggered: bool,
}

impl BreachFlag {
    pub fn new(rule: impl Into<String>, triggered: bool) -> Self {
        Self {
            rule: rule.into(),
            triggered,
        }
    }
}

/// The producer's `breach_count` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreachCount {
    Count(u64),
    /// Anything other than a whole number, kept as text for display
    Raw(String),
}

impl BreachCount {
    pub fn count(&self) -> Option<u64> {
        match self {
            BreachCount::Count(n) => Some(*n),
            BreachCount::Raw(_) => None,
        }
    }

    pub fn display(&self) -> String {
        match self {
            BreachCount::Count(n) => n.to_string(),
            BreachCount::Raw(text) => text.clone(),
        }
    }
}

/// Snapshot of macro stress indicators written by the compute process.
///
/// `values` and `breaches` keep the order in which the producer wrote them;
/// their key sets are independent of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Producer timestamp, shown as-is and never parsed
    pub generated_utc: String,
    pub values: Vec<IndicatorReading>,
    pub breaches: Vec<BreachFlag>,
    /// Count reported by the producer; `None` when missing, null or boolean
    pub breach_count: Option<BreachCount>,
}

impl Snapshot {
    /// Number of breach flags that are actually set
    pub fn triggered_count(&self) -> u64 {
        self.breaches.iter().filter(|b| b.triggered).count() as u64
    }

    /// Whether the reported count agrees with the flags.
    /// A missing count is treated as consistent; a non-numeric one is not.
    pub fn is_breach_count_consistent(&self) -> bool {
        match &self.breach_count {
            None => true,
            Some(reported) => reported.count() == Some(self.triggered_count()),
        }
    }
}
