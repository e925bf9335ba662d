use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global string interner for node and edge IDs.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Shared counter so generated ids never collide across prefixes.
static COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_serial() -> u64 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// A lightweight, interned identifier for a node on the board.
/// Internally a `Spur` index: 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Spur);

impl NodeId {
    /// Intern a string as a NodeId, or return the existing one.
    pub fn intern(s: &str) -> Self {
        NodeId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Generate a fresh `node_N` id.
    pub fn generate() -> Self {
        Self::with_prefix("node")
    }

    /// Generate a unique ID with a prefix (e.g. `pencil_4`, `node_12`).
    pub fn with_prefix(prefix: &str) -> Self {
        Self::intern(&format!("{prefix}_{}", next_serial()))
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.as_str())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.as_str())
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(NodeId::intern(&s))
    }
}

/// Identifier for a directed connection between two nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(Spur);

impl EdgeId {
    pub fn intern(s: &str) -> Self {
        EdgeId(INTERNER.get_or_intern(s))
    }

    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Generate a fresh `edge_N` id.
    pub fn generate() -> Self {
        Self::intern(&format!("edge_{}", next_serial()))
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~{}", self.as_str())
    }
}

impl Serialize for EdgeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EdgeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(EdgeId::intern(&s))
    }
}
