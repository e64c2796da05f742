use std::fmt;

use crate::util;

/// A single wire parameter value.
///
/// Values keep their semantic type until they are rendered, so the
/// canonical textual form is decided in one place: strings verbatim,
/// booleans as `true`/`false`, integers in base 10, floats in their
/// shortest round-trip form.
#[derive(Clone, Debug)]
pub enum ParamValue {
    StringValue(String),
    IntValue(i64),
    FloatValue(f64),
    BoolValue(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::StringValue(s) => f.write_str(s),
            ParamValue::IntValue(n) => write!(f, "{}", n),
            ParamValue::FloatValue(n) => write!(f, "{}", n),
            ParamValue::BoolValue(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::StringValue(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::StringValue(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::IntValue(n)
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::FloatValue(n)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::BoolValue(b)
    }
}

/// Ordered wire-level form/query parameters.
///
/// Names may repeat. A list is built fresh per request and handed to the
/// signer as-is; the signer re-sorts, so insertion order only decides ties
/// between equal names.
#[derive(Clone, Debug, Default)]
pub struct ParamList {
    pairs: Vec<(String, String)>,
}

impl ParamList {
    pub fn new() -> Self {
        ParamList { pairs: Vec::new() }
    }

    pub fn push<V: Into<ParamValue>>(&mut self, name: &str, value: V) {
        self.pairs.push((name.to_string(), value.into().to_string()));
    }

    /// Push a field that may be unset. `None` contributes nothing; a value
    /// explicitly set to its type's zero value is still included.
    pub fn push_opt<V: Into<ParamValue>>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the transmitted form, sorted by name, `+` for spaces.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.pairs.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", util::form_encode(k), util::form_encode(v)))
            .collect::<Vec<String>>()
            .join("&")
    }
}

/// Conversion from a typed input record to its wire parameters.
///
/// Implementations list their (wire name, field) pairs explicitly, one
/// `push_opt` per field, so the mapping is visible at the definition site.
pub trait ToParams {
    fn to_params(&self) -> ParamList;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        a_string: Option<String>,
        a_bool: Option<bool>,
        an_int: Option<i64>,
        a_float: Option<f64>,
        unset: Option<String>,
    }

    impl ToParams for Record {
        fn to_params(&self) -> ParamList {
            let mut params = ParamList::new();
            params.push_opt("a_string", self.a_string.clone());
            params.push_opt("a_bool", self.a_bool);
            params.push_opt("an_int", self.an_int);
            params.push_opt("a_float", self.a_float);
            params.push_opt("unset", self.unset.clone());
            params
        }
    }

    #[test]
    fn unset_fields_are_omitted() {
        let record = Record {
            a_string: Some("test".to_string()),
            a_bool: Some(true),
            an_int: Some(10),
            a_float: Some(3.49),
            unset: None,
        };
        let params = record.to_params();

        assert_eq!(params.len(), 4);
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("a_string", "test"),
                ("a_bool", "true"),
                ("an_int", "10"),
                ("a_float", "3.49"),
            ]
        );
    }

    #[test]
    fn zero_values_are_kept() {
        let record = Record {
            a_string: Some(String::new()),
            a_bool: Some(false),
            an_int: Some(0),
            a_float: Some(0.0),
            unset: None,
        };
        let params = record.to_params();

        assert_eq!(params.len(), 4);
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("a_string", ""),
                ("a_bool", "false"),
                ("an_int", "0"),
                ("a_float", "0"),
            ]
        );
    }

    #[test]
    fn names_may_repeat() {
        let mut params = ParamList::new();
        params.push("id", 1i64);
        params.push("id", 2i64);

        assert_eq!(params.len(), 2);
        assert_eq!(params.encode(), "id=1&id=2");
    }

    #[test]
    fn encode_sorts_and_form_escapes() {
        let mut params = ParamList::new();
        params.push("status", "Hello Ladies + Gentlemen, a signed OAuth request!");
        params.push("include_entities", true);

        assert_eq!(
            params.encode(),
            "include_entities=true&status=Hello+Ladies+%2B+Gentlemen%2C+a+signed+OAuth+request%21"
        );
    }
}
