//! Typed access to one item's parameters

use ac_core::{Error, Result};
use serde_json::{Map, Value};

use crate::context::ExecutionContext;
use crate::description::NodeDescription;

/// Parameters of a single input item, with metadata defaults applied
pub struct ItemParams<'a> {
    ctx: &'a ExecutionContext,
    description: &'a NodeDescription,
    item: usize,
    batch_wide: &'a [&'a str],
}

impl<'a> ItemParams<'a> {
    pub fn new(ctx: &'a ExecutionContext, description: &'a NodeDescription, item: usize) -> Self {
        Self {
            ctx,
            description,
            item,
            batch_wide: &[],
        }
    }

    /// Read `names` from item 0 regardless of the current item
    pub fn with_batch_wide(mut self, names: &'a [&'a str]) -> Self {
        self.batch_wide = names;
        self
    }

    pub fn item(&self) -> usize {
        self.item
    }

    pub fn value(&self, name: &str) -> Option<Value> {
        self.ctx
            .resolve_batch_parameter(self.description, name, self.item, self.batch_wide)
            .filter(|v| !v.is_null())
    }

    fn required(&self, name: &str) -> Result<Value> {
        self.value(name)
            .ok_or_else(|| Error::missing_parameter(name, self.item))
    }

    fn invalid(&self, name: &str, expected: &'static str) -> Error {
        Error::invalid_parameter(name, self.item, expected)
    }

    pub fn string(&self, name: &str) -> Result<String> {
        match self.required(name)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(self.invalid(name, "a string")),
        }
    }

    /// `None` when absent or empty
    pub fn optional_string(&self, name: &str) -> Result<Option<String>> {
        if self.value(name).is_none() {
            return Ok(None);
        }
        self.string(name).map(|s| Some(s).filter(|s| !s.is_empty()))
    }

    pub fn boolean(&self, name: &str) -> Result<bool> {
        match self.value(name) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(b),
            Some(Value::String(s)) => match s.as_str() {
                "true" => Ok(true),
                "false" | "" => Ok(false),
                _ => Err(self.invalid(name, "a boolean")),
            },
            Some(_) => Err(self.invalid(name, "a boolean")),
        }
    }

    /// A JSON number; numeric strings are converted
    pub fn number(&self, name: &str) -> Result<Value> {
        match self.required(name)? {
            n @ Value::Number(_) => Ok(n),
            Value::String(s) => {
                let s = s.trim();
                if let Ok(i) = s.parse::<i64>() {
                    Ok(Value::from(i))
                } else if let Ok(f) = s.parse::<f64>() {
                    serde_json::Number::from_f64(f)
                        .map(Value::Number)
                        .ok_or_else(|| self.invalid(name, "a number"))
                } else {
                    Err(self.invalid(name, "a number"))
                }
            }
            _ => Err(self.invalid(name, "a number")),
        }
    }

    /// Positive integer, as used for `limit`
    pub fn positive_integer(&self, name: &str) -> Result<u64> {
        self.number(name)?
            .as_u64()
            .filter(|n| *n > 0)
            .ok_or_else(|| self.invalid(name, "a positive integer"))
    }

    /// Record id rendered as an endpoint path segment
    pub fn id(&self, name: &str) -> Result<String> {
        match self.required(name)? {
            Value::Number(n) => match n.as_u64() {
                Some(id) => Ok(id.to_string()),
                None => Err(self.invalid(name, "a record id")),
            },
            Value::String(s) => {
                let s = s.trim();
                if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
                    Ok(s.to_string())
                } else {
                    Err(self.invalid(name, "a record id"))
                }
            }
            _ => Err(self.invalid(name, "a record id")),
        }
    }

    /// Collection parameter; absent means empty
    pub fn object(&self, name: &str) -> Result<Map<String, Value>> {
        match self.value(name) {
            None => Ok(Map::new()),
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(self.invalid(name, "an object")),
        }
    }

    /// Raw value, any JSON type
    pub fn raw(&self, name: &str) -> Result<Value> {
        self.required(name)
    }
}
