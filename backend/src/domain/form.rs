//! Submitted form values.

use std::collections::HashMap;

/// Name/value pairs from a query string or form body.
///
/// Missing keys read as the empty string, matching how browsers omit empty
/// optional inputs.
///
/// # Examples
/// ```
/// use dad_rental::domain::FormInput;
///
/// let form = FormInput::from_iter([("username", "bob")]);
/// assert_eq!(form.value("username"), "bob");
/// assert_eq!(form.value("password"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    values: HashMap<String, String>,
}

impl FormInput {
    /// Wrap already-decoded pairs.
    #[must_use]
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Value for `name`, or `""` when absent.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Value for `name` when present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Fill in keys from `other` that are not already present.
    pub fn merge_missing(&mut self, other: Self) {
        for (name, value) in other.values {
            self.values.entry(name).or_insert(value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn merge_keeps_existing_values() {
        let mut form = FormInput::from_iter([("action", "Login"), ("username", "bob")]);
        form.merge_missing(FormInput::from_iter([("action", "Home"), ("dad_id", "3")]));
        assert_eq!(form.value("action"), "Login");
        assert_eq!(form.value("dad_id"), "3");
        assert_eq!(form.get("missing"), None);
    }
}
