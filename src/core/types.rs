//! Method signature and argument records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// One `type name` pair from an argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    arg_type: String,
    name: String,
}

impl Argument {
    pub fn new(arg_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            arg_type: arg_type.into(),
            name: name.into(),
        }
    }

    pub fn arg_type(&self) -> &str {
        &self.arg_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.arg_type, self.name)
    }
}

/// Structured form of a single-line method signature.
///
/// Fields are only readable once built; a record is produced in one pass and
/// never changed afterwards. Records from [`parse`](crate::parser::parse),
/// [`MethodSignature::try_new`] and deserialization always have non-empty
/// tokens and render back to text that parses to an equal record.
/// [`MethodSignature::new`] skips that check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SignatureFields")]
pub struct MethodSignature {
    access_modifier: Option<String>,
    return_type: String,
    method_name: String,
    arguments: Vec<Argument>,
}

#[derive(Deserialize)]
struct SignatureFields {
    #[serde(default)]
    access_modifier: Option<String>,
    return_type: String,
    method_name: String,
    #[serde(default)]
    arguments: Vec<Argument>,
}

impl TryFrom<SignatureFields> for MethodSignature {
    type Error = ParseError;

    fn try_from(fields: SignatureFields) -> Result<Self, Self::Error> {
        Self::try_new(
            fields.access_modifier,
            fields.return_type,
            fields.method_name,
            fields.arguments,
        )
    }
}

impl MethodSignature {
    /// Build a record without validation. Tokens that are empty or contain
    /// separators produce a record `parse` could never return; use
    /// [`MethodSignature::try_new`] for untrusted parts.
    pub fn new(
        access_modifier: Option<String>,
        return_type: impl Into<String>,
        method_name: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            access_modifier,
            return_type: return_type.into(),
            method_name: method_name.into(),
            arguments,
        }
    }

    /// Build a record, rejecting parts that would not parse back unchanged.
    pub fn try_new(
        access_modifier: Option<String>,
        return_type: impl Into<String>,
        method_name: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Result<Self, ParseError> {
        let signature = Self::new(access_modifier, return_type, method_name, arguments);
        let rendered = signature.to_string();
        if crate::parser::parse(&rendered)? != signature {
            return Err(ParseError::NotReparseable { rendered });
        }
        Ok(signature)
    }

    /// Leading token of a three-token prefix. No keyword check is made, so
    /// `static int f()` reports `static` here.
    pub fn access_modifier(&self) -> Option<&str> {
        self.access_modifier.as_deref()
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Arguments in the order they appear in the source text.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn has_access_modifier(&self) -> bool {
        self.access_modifier.is_some()
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

/// Renders the signature back into the single-line form the parser accepts.
impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(modifier) = &self.access_modifier {
            write!(f, "{} ", modifier)?;
        }
        write!(f, "{} {}(", self.return_type, self.method_name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

impl FromStr for MethodSignature {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
