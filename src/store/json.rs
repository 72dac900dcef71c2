use super::*;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub const SEED_PATH: &str = "./data/contacts.json";

/// Read-only JSON seed file. The file is never written back.
pub struct JsonSeed {
    pub path: PathBuf,
}

impl JsonSeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for JsonSeed {
    fn default() -> Self {
        JsonSeed::new(SEED_PATH)
    }
}

impl SeedSource for JsonSeed {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut file = File::open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_str(&data)?;

        match value {
            Value::Array(_) => Ok(serde_json::from_value(value)?),
            // Keyed format: { "<id>": { name, email, phone } }
            Value::Object(records) => records
                .into_iter()
                .map(|(key, mut record)| -> Result<Contact, AppError> {
                    if let Value::Object(fields) = &mut record
                        && !fields.contains_key("id")
                    {
                        fields.insert("id".to_string(), Value::String(key));
                    }
                    Ok(serde_json::from_value(record)?)
                })
                .collect(),
            _ => Err(AppError::Validation(
                "Invalid seed JSON structure: expected array or object".to_string(),
            )),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
