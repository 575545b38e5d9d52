use super::Value;

/// A condition template with positional `?` placeholders and the values
/// bound to them.
///
/// Multiple filters on one statement are AND-joined; their value lists
/// concatenate positionally, which the compiler must preserve exactly.
#[derive(Debug, Clone)]
pub struct Filter {
    pub condition: String,
    pub values: Vec<Value>,
}

impl Filter {
    pub fn new(condition: impl Into<String>, values: Vec<Value>) -> Filter {
        Filter {
            condition: condition.into(),
            values,
        }
    }

    /// Number of `?` placeholders in the condition template.
    pub fn placeholders(&self) -> usize {
        self.condition.matches('?').count()
    }
}
