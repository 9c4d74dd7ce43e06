use crate::args::{ArgumentError, Signature};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::fmt::Write;

/// An ordered list of positional inputs plus an ordered list of named inputs.
///
/// Values are held as [`serde_json::Value`], so a single target can accept any
/// mix of inputs and pull typed values back out with [`Arguments::arg`] and
/// [`Arguments::kwarg`]. The bundle renders as `v1, v2, name=v3`, each value in
/// its JSON form.
#[derive(Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional input.
    #[must_use]
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Adds a named input; a repeated name replaces the earlier value but keeps its position.
    #[must_use]
    pub fn with_kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.named.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.named.push((name, value)),
        }
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.named.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.named.iter().find(|(existing, _)| existing == name).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deserializes the positional input at `index`.
    pub fn arg<'a, T: Deserialize<'a>>(&'a self, index: usize) -> Result<T, ArgumentError> {
        let value = self.get(index).ok_or_else(|| ArgumentError::missing_positional(index))?;
        T::deserialize(value).map_err(|e| ArgumentError::invalid_type(format!("at index {index}"), e))
    }

    /// Deserializes the named input `name`, which must be present.
    pub fn kwarg<'a, T: Deserialize<'a>>(&'a self, name: &str) -> Result<T, ArgumentError> {
        self.kwarg_opt(name)?.ok_or_else(|| ArgumentError::missing_named(name))
    }

    /// Deserializes the named input `name` if it was passed.
    pub fn kwarg_opt<'a, T: Deserialize<'a>>(&'a self, name: &str) -> Result<Option<T>, ArgumentError> {
        self.get_named(name)
            .map(|value| T::deserialize(value).map_err(|e| ArgumentError::invalid_type(format!("`{name}`"), e)))
            .transpose()
    }
}

impl Signature for Arguments {
    fn write_signature(&self, out: &mut String) -> fmt::Result {
        let positional = self.positional.iter().map(|value| (None, value));
        let named = self.named.iter().map(|(name, value)| (Some(name), value));

        for (i, (name, value)) in positional.chain(named).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if let Some(name) = name {
                write!(out, "{name}=")?;
            }
            write!(out, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

#[cfg(test)]
mod tests {
    use crate::args::{ArgumentError, Arguments, Signature};
    use serde_json::json;

    fn greeting_args() -> Arguments {
        Arguments::new().with_arg("Ana").with_kwarg("age", 12).with_kwarg("tags", json!(["a", "b"]))
    }

    #[test]
    fn test_signature() {
        assert_eq!(greeting_args().signature(), r#""Ana", age=12, tags=["a","b"]"#);
        assert_eq!(format!("{:?}", greeting_args()), greeting_args().signature());
        assert_eq!(Arguments::new().signature(), "");
    }

    #[test]
    fn test_kwarg_only_signature() {
        let args = Arguments::new().with_kwarg("name", "Ana");
        assert_eq!(args.signature(), r#"name="Ana""#);
    }

    #[test]
    fn test_typed_access() {
        let args = greeting_args();
        assert_eq!(args.arg::<&str>(0).unwrap(), "Ana");
        assert_eq!(args.kwarg::<u32>("age").unwrap(), 12);
        assert_eq!(args.kwarg::<Vec<String>>("tags").unwrap(), vec!["a", "b"]);
        assert_eq!(args.kwarg_opt::<u32>("height").unwrap(), None);
        assert_eq!(args.len(), 3);
        assert!(!args.is_empty());
    }

    #[test]
    fn test_missing_inputs() {
        let args = greeting_args();
        assert!(matches!(args.arg::<String>(1), Err(ArgumentError::MissingPositional { index: 1 })));
        assert!(matches!(args.kwarg::<u32>("height"), Err(ArgumentError::MissingNamed { name }) if name == "height"));
    }

    #[test]
    fn test_invalid_type() {
        let err = greeting_args().kwarg::<String>("age").unwrap_err();
        assert!(matches!(err, ArgumentError::InvalidType { .. }));
        assert!(err.to_string().starts_with("argument `age` has an unexpected type"));
    }

    #[test]
    fn test_repeated_kwarg_replaces_in_place() {
        let args = Arguments::new().with_kwarg("a", 1).with_kwarg("b", 2).with_kwarg("a", 3);
        let named: Vec<_> = args.named().map(|(name, value)| (name.to_string(), value.clone())).collect();
        assert_eq!(named, vec![("a".to_string(), json!(3)), ("b".to_string(), json!(2))]);
    }
}
