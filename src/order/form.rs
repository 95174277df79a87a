//! The order form's fields and the payload collected from them.

use std::collections::BTreeMap;

use serde::Serialize;

/// One named input of the order form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    /// The field name, which becomes the payload key.
    pub name: String,
    /// The current value.
    pub value: String,
}

/// The fields of an order form, in document order.
///
/// Names may repeat; [`to_payload`](Self::to_payload) keeps the last value.
///
/// # Example
///
/// ```rust
/// use sheet_storefront::order::OrderForm;
///
/// let mut form = OrderForm::new(["Nome", "Produto"]);
/// form.set("Nome", "Ana");
/// form.set("Produto", "Mesa");
///
/// let payload = form.to_payload();
/// assert_eq!(payload.get("Nome"), Some("Ana"));
///
/// form.reset();
/// assert_eq!(form.value("Nome"), Some(""));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderForm {
    fields: Vec<FormField>,
}

impl OrderForm {
    /// Creates a form with one empty field per name.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: names
                .into_iter()
                .map(|name| FormField {
                    name: name.into(),
                    value: String::new(),
                })
                .collect(),
        }
    }

    /// Appends a field, even if one with the same name exists.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Sets the value of the first field called `name`.
    ///
    /// Returns `false` when the form has no such field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Returns the value of the first field called `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Returns `true` if the form has a field called `name`.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Returns the fields in document order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Empties every field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Collects every field into a payload; repeated names keep the last value.
    #[must_use]
    pub fn to_payload(&self) -> OrderPayload {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect()
    }
}

/// The body of an order submission: field name to value.
///
/// Keys must match the order sheet's column headers; nothing checks that.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderPayload(BTreeMap<String, String>);

impl OrderPayload {
    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Sets `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the payload has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the payload as a flat JSON object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderPayload {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut payload = Self::default();
        for (key, value) in iter {
            payload.insert(key, value);
        }
        payload
    }
}
