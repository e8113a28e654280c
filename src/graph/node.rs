//! Neuron identifiers and node attributes

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::error::GraphError;

/// Unique identifier for a neuron
///
/// Identifiers are plain strings. Many neuron names carry a one-character
/// bilateral suffix (`AVAL`/`AVAR`) marking left/right homologue pairs;
/// [`NodeId::side`] and [`NodeId::mirror`] expose that convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bilateral side encoded in the identifier suffix, if any
    ///
    /// A bare `"L"` or `"R"` is a whole name, not a suffix.
    pub fn side(&self) -> Option<Side> {
        if self.0.len() < 2 {
            return None;
        }
        match self.0.chars().last() {
            Some('L') => Some(Side::Left),
            Some('R') => Some(Side::Right),
            _ => None,
        }
    }

    /// The identifier with any bilateral suffix stripped
    pub fn base(&self) -> &str {
        match self.side() {
            Some(_) => &self.0[..self.0.len() - 1],
            None => &self.0,
        }
    }

    /// The contralateral homologue's identifier, if this one is sided
    pub fn mirror(&self) -> Option<NodeId> {
        self.side()
            .map(|side| NodeId(format!("{}{}", self.base(), side.opposite().suffix())))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Bilateral body side, encoded as an `L`/`R` identifier suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The identifier suffix for this side
    pub fn suffix(&self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }

    /// The other side
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl FromStr for Side {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Side::Left),
            "R" => Ok(Side::Right),
            other => Err(GraphError::InvalidArgument(format!(
                "side must be 'L' or 'R', was '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Typed attribute values
///
/// Attribute maps on nodes and edges are open: any key may carry any of
/// these values. `List` appears on collapsed edges, where per-constituent
/// values are aggregated in order (with `Null` placeholders for absences).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Numeric view of the value, if it is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Int(i) => Some(*i as f64),
            AttrValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// String view of the value, if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "null"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::Float(x) => write!(f, "{x}"),
            AttrValue::String(s) => write!(f, "{s}"),
            AttrValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        AttrValue::Float(x)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

/// A neuron in the connectome
///
/// The functional class (`type`: sensory, inter, motor) is the one core
/// attribute; everything else lives in the open `extra` map.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Functional class (`sensory` | `inter` | `motor`), when annotated
    pub node_type: Option<String>,
    /// Additional attributes
    pub extra: BTreeMap<String, AttrValue>,
}

impl Node {
    /// Create a bare node with the given identifier
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            node_type: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the functional class
    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    /// Add an attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Look up an attribute by name, uniformly over core and extra keys
    pub fn get(&self, key: &str) -> Option<AttrValue> {
        match key {
            "type" => self.node_type.clone().map(AttrValue::String),
            _ => self.extra.get(key).cloned(),
        }
    }

    /// All attributes present on this node, as (key, value) pairs
    pub fn attributes(&self) -> BTreeMap<String, AttrValue> {
        let mut map = self.extra.clone();
        if let Some(ref t) = self.node_type {
            map.insert("type".to_string(), AttrValue::String(t.clone()));
        }
        map
    }
}
