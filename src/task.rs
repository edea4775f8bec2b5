use serde::{Deserialize, Serialize};

/// A raw field value as delivered by the task store.
///
/// Duration fields arrive as numbers, strings ("0004", "3 days"), or null
/// depending on how the record was entered upstream. The resolver in
/// [`crate::duration`] turns any of these into a usable number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Number(f64),
    Text(String),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Null
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// A task as supplied by the external task store.
///
/// The engine treats these records as read-only input; the computed schedule
/// lives in [`crate::Schedule`], never back in the task itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub duration: RawValue,
    #[serde(default)]
    pub optimistic_time: RawValue,
    #[serde(default)]
    pub most_likely_time: RawValue,
    #[serde(default)]
    pub pessimistic_time: RawValue,
    #[serde(default)]
    pub expected_time: RawValue,
}

impl Task {
    pub fn new(id: i32, name: impl Into<String>, duration: impl Into<RawValue>) -> Self {
        Self {
            id,
            name: name.into(),
            duration: duration.into(),
            optimistic_time: RawValue::Null,
            most_likely_time: RawValue::Null,
            pessimistic_time: RawValue::Null,
            expected_time: RawValue::Null,
        }
    }

    /// Sets the three-point estimate fields.
    pub fn with_estimates(
        mut self,
        optimistic: impl Into<RawValue>,
        most_likely: impl Into<RawValue>,
        pessimistic: impl Into<RawValue>,
    ) -> Self {
        self.optimistic_time = optimistic.into();
        self.most_likely_time = most_likely.into();
        self.pessimistic_time = pessimistic.into();
        self
    }

    /// Sets the stored expected-time field.
    pub fn with_expected(mut self, expected: impl Into<RawValue>) -> Self {
        self.expected_time = expected.into();
        self
    }
}

/// A finish-to-start precedence edge between two tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub predecessor_task_id: i32,
    pub successor_task_id: i32,
}

impl Dependency {
    pub fn new(predecessor_task_id: i32, successor_task_id: i32) -> Self {
        Self {
            predecessor_task_id,
            successor_task_id,
        }
    }
}
