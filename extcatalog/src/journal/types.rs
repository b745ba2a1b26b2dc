// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Journal entry types and on-disk framing
//!
//! Each entry is stored as:
//! - Checksum (4 bytes): CRC32 of the payload, little endian
//! - Payload (variable): bincode encoded [`JournalRecord`]

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::catalog_log::CatalogLog;
use crate::catalog::traits::CatalogId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend used to persist the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalStorageType {
    /// Sled - embedded, survives restarts
    Sled,
    /// In-memory, for tests
    Memory,
}

impl Default for JournalStorageType {
    fn default() -> Self {
        if cfg!(feature = "sled-backend") {
            JournalStorageType::Sled
        } else {
            JournalStorageType::Memory
        }
    }
}

impl std::str::FromStr for JournalStorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sled" => Ok(JournalStorageType::Sled),
            "memory" => Ok(JournalStorageType::Memory),
            _ => Err(format!(
                "Unknown journal storage type: {}. Valid options: sled, memory",
                s
            )),
        }
    }
}

impl fmt::Display for JournalStorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JournalStorageType::Sled => "sled",
            JournalStorageType::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

/// A catalog operation recorded in the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JournalOp {
    CreateCatalog(CatalogLog),
    DropCatalog {
        catalog_id: CatalogId,
        catalog_name: String,
    },
}

impl JournalOp {
    pub fn catalog_name(&self) -> &str {
        match self {
            JournalOp::CreateCatalog(log) => &log.catalog_name,
            JournalOp::DropCatalog { catalog_name, .. } => catalog_name,
        }
    }
}

/// The serialized part of an entry. The sequence number is the storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub timestamp: DateTime<Utc>,
    pub op: JournalOp,
}

/// A journal entry as returned to readers
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
    pub op: JournalOp,
}

impl JournalRecord {
    pub fn new(op: JournalOp) -> Self {
        Self {
            timestamp: Utc::now(),
            op,
        }
    }

    pub fn encode(&self) -> CatalogResult<Vec<u8>> {
        let payload = bincode::serialize(self)?;
        let checksum = crc32fast::hash(&payload);
        let mut buffer = Vec::with_capacity(4 + payload.len());
        buffer.extend_from_slice(&checksum.to_le_bytes());
        buffer.extend_from_slice(&payload);
        Ok(buffer)
    }

    pub fn decode(sequence: u64, bytes: &[u8]) -> CatalogResult<JournalEntry> {
        if bytes.len() < 4 {
            return Err(CatalogError::Journal(format!(
                "entry {} is truncated ({} bytes)",
                sequence,
                bytes.len()
            )));
        }
        let (header, payload) = bytes.split_at(4);
        let expected = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
        let actual = crc32fast::hash(payload);
        if expected != actual {
            return Err(CatalogError::Journal(format!(
                "entry {} checksum mismatch: expected {:08x}, got {:08x}",
                sequence, expected, actual
            )));
        }
        let record: JournalRecord = bincode::deserialize(payload)?;
        Ok(JournalEntry {
            sequence,
            timestamp: record.timestamp,
            op: record.op,
        })
    }
}

/// Storage key for a sequence number; big endian so keys sort numerically
pub fn sequence_key(sequence: u64) -> [u8; 8] {
    sequence.to_be_bytes()
}

pub fn sequence_from_key(key: &[u8]) -> CatalogResult<u64> {
    let bytes: [u8; 8] = key
        .try_into()
        .map_err(|_| CatalogError::Journal(format!("invalid journal key length {}", key.len())))?;
    Ok(u64::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::properties::PropertySet;

    fn create_op() -> JournalOp {
        JournalOp::CreateCatalog(CatalogLog {
            catalog_id: 3,
            catalog_name: "hive".to_string(),
            resource: None,
            comment: Some("prod".to_string()),
            props: PropertySet::new().with("type", "hms"),
        })
    }

    #[test]
    fn test_decode_rejects_corruption() {
        let mut bytes = JournalRecord::new(create_op()).encode().unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        match JournalRecord::decode(7, &bytes) {
            Err(CatalogError::Journal(msg)) => assert!(msg.contains("entry 7")),
            other => panic!("expected checksum failure, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_truncation() {
        assert!(JournalRecord::decode(1, &[1, 2]).is_err());
    }

    #[test]
    fn test_decode_preserves_op() {
        let record = JournalRecord::new(create_op());
        let entry = JournalRecord::decode(1, &record.encode().unwrap()).unwrap();
        assert_eq!(entry.sequence, 1);
        assert_eq!(entry.op.catalog_name(), "hive");
        assert_eq!(entry.op, create_op());
    }

    #[test]
    fn test_sequence_keys_sort_numerically() {
        assert!(sequence_key(2) < sequence_key(10));
        assert_eq!(sequence_from_key(&sequence_key(42)).unwrap(), 42);
        assert!(sequence_from_key(&[0, 1]).is_err());
    }

    #[test]
    fn test_storage_type_parse() {
        assert_eq!("SLED".parse::<JournalStorageType>(), Ok(JournalStorageType::Sled));
        assert_eq!(JournalStorageType::Memory.to_string(), "memory");
        assert!("rocksdb".parse::<JournalStorageType>().is_err());
    }
}
