//! Owned MFString value.
//!
//! `MfString` is a list of strings whose text form is the MFString encoding.
//! It formats with [`list::encode`], parses with strict [`list::decode`], and
//! serializes through `serde` as the encoded text, so it can sit directly in a
//! struct that maps to XML attributes or JSON fields.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ListEncodingError;
use crate::list;
use crate::options::Strictness;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MfString(Vec<String>);

impl MfString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.0.push(item.into());
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// The encoded text, same as `to_string()`.
    pub fn encode(&self) -> String {
        list::encode(&self.0)
    }
}

impl Deref for MfString {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for MfString {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl From<MfString> for Vec<String> {
    fn from(value: MfString) -> Self {
        value.0
    }
}

impl<S: Into<String>> FromIterator<S> for MfString {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl IntoIterator for MfString {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MfString {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MfString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Parses strictly; any malformed input is an error.
impl FromStr for MfString {
    type Err = ListEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        list::decode(s, Strictness::Strict).map(Self)
    }
}

impl Serialize for MfString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for MfString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
