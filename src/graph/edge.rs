//! Connection attributes: per-edge records and collapsed aggregates

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::node::AttrValue;

/// Attributes of a single synaptic or ionic connection
///
/// The core biological attributes are typed fields; anything else a data
/// set carries ends up in the open `extra` map. `weight` is the contact
/// count of the connection and defaults to 1 wherever an operation needs
/// a number and none is recorded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeData {
    /// Contact count (missing means 1 where a default is documented)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Connection category (e.g. `chemical` | `electrical`), the usual
    /// multiplex partition attribute
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
    /// Postsynaptic receptor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receptor: Option<String>,
    /// Neurotransmitter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmitter: Option<String>,
    /// Anatomical length of the connection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Additional attributes
    #[serde(flatten)]
    pub extra: BTreeMap<String, AttrValue>,
}

impl EdgeData {
    /// Create an empty attribute record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contact count
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the connection category
    pub fn with_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }

    /// Set the receptor
    pub fn with_receptor(mut self, receptor: impl Into<String>) -> Self {
        self.receptor = Some(receptor.into());
        self
    }

    /// Set the transmitter
    pub fn with_transmitter(mut self, transmitter: impl Into<String>) -> Self {
        self.transmitter = Some(transmitter.into());
        self
    }

    /// Set the length
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
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
            "weight" => self.weight.map(AttrValue::Float),
            "type" => self.edge_type.clone().map(AttrValue::String),
            "receptor" => self.receptor.clone().map(AttrValue::String),
            "transmitter" => self.transmitter.clone().map(AttrValue::String),
            "length" => self.length.map(AttrValue::Float),
            _ => self.extra.get(key).cloned(),
        }
    }

    /// All attribute keys present on this record
    pub fn keys(&self) -> BTreeSet<String> {
        let mut keys: BTreeSet<String> = self.extra.keys().cloned().collect();
        for (core, present) in [
            ("weight", self.weight.is_some()),
            ("type", self.edge_type.is_some()),
            ("receptor", self.receptor.is_some()),
            ("transmitter", self.transmitter.is_some()),
            ("length", self.length.is_some()),
        ] {
            if present {
                keys.insert(core.to_string());
            }
        }
        keys
    }

    /// Contact count with the documented missing-means-1 default applied
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// Aggregated attributes of all parallel edges between one ordered pair
///
/// Produced by [`Multiplex::collapse`](crate::Multiplex::collapse). The
/// weight sum and first-encountered length are pulled out as scalars;
/// every other key present on any constituent is preserved as a list of
/// per-constituent values in encounter order, with `Null` standing in for
/// constituents that lacked the key.
#[derive(Debug, Clone, PartialEq)]
pub struct CollapsedEdge {
    /// Sum of the constituents' recorded weights (absences excluded)
    pub summed_weight: f64,
    /// First non-null length among the constituents
    pub length: Option<f64>,
    /// Per-key value lists across constituents, in encounter order
    pub provenance: BTreeMap<String, Vec<AttrValue>>,
}

impl CollapsedEdge {
    /// Aggregate the attribute records of one ordered pair's parallel edges
    ///
    /// `edges` must be non-empty and in encounter order.
    pub fn aggregate<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a EdgeData>,
    {
        let edges: Vec<&EdgeData> = edges.into_iter().collect();

        let keys: BTreeSet<String> = edges.iter().flat_map(|e| e.keys()).collect();

        let mut provenance = BTreeMap::new();
        for key in &keys {
            if key == "length" {
                continue;
            }
            let values: Vec<AttrValue> = edges
                .iter()
                .map(|e| e.get(key).unwrap_or(AttrValue::Null))
                .collect();
            provenance.insert(key.clone(), values);
        }

        Self {
            summed_weight: edges.iter().filter_map(|e| e.weight).sum(),
            length: edges.iter().find_map(|e| e.length),
            provenance,
        }
    }
}
