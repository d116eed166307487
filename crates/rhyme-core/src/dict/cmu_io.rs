use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::cmu::CmuDictionary;
use super::DictError;
use crate::phoneme::Pronunciation;

const MAGIC: &[u8; 4] = b"RHDX";
const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5;

impl CmuDictionary {
    /// Serialize to bytes (RHDX format): magic, version, bincode body.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let mut records: Vec<(&String, &Pronunciation)> = self.entries.iter().collect();
        records.sort_by(|a, b| a.0.cmp(b.0));
        let body = bincode::serialize(&records).map_err(DictError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        let records: Vec<(String, Pronunciation)> =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        let entries: HashMap<String, Pronunciation> = records.into_iter().collect();
        Ok(Self { entries })
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn open(path: &Path) -> Result<Self, DictError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Load a CMU text dictionary from disk.
    pub fn open_text(path: &Path) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }
}
