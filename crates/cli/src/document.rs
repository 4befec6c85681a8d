//! Layout document parsing and result serialization.
//!
//! The wire format matches the solver's upstream data files: `boundary`
//! (implicitly closed point list), `door` (two endpoints), `isOpenInward`
//! (defaults to false) and `algoToPlace` (item name to `[dim1, dim2]`,
//! insertion order preserved). Item names containing `"fridge"` become
//! refrigerator-class at parse time.

use roomlay_core::{Door, ItemKind, ItemSpec, PlacementOutcome, ResultSet, Room};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when reading a layout document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    Invalid(#[from] roomlay_core::Error),
}

/// A room-layout problem as read from disk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    boundary: Vec<[f64; 2]>,
    door: Vec<[f64; 2]>,
    #[serde(default)]
    is_open_inward: bool,
    algo_to_place: Map<String, Value>,
}

impl LayoutDocument {
    /// Reads a document from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the number of boundary points.
    pub fn boundary_len(&self) -> usize {
        self.boundary.len()
    }

    /// Returns the number of items to place.
    pub fn item_count(&self) -> usize {
        self.algo_to_place.len()
    }

    /// Converts the document into validated solver inputs.
    pub fn into_problem(self) -> Result<(Room, Door, Vec<ItemSpec>), DocumentError> {
        let room = Room::new(self.boundary.iter().map(|p| (p[0], p[1])).collect())?;

        let [a, b] = <[[f64; 2]; 2]>::try_from(self.door.as_slice()).map_err(|_| {
            DocumentError::InvalidFormat(format!(
                "door must have exactly two endpoints, got {}",
                self.door.len()
            ))
        })?;
        let door = Door::new((a[0], a[1]), (b[0], b[1]), self.is_open_inward)?;

        let mut items = Vec::with_capacity(self.algo_to_place.len());
        for (name, dims) in &self.algo_to_place {
            let dims: [f64; 2] = serde_json::from_value(dims.clone()).map_err(|_| {
                DocumentError::InvalidFormat(format!(
                    "item '{}' must map to two dimensions",
                    name
                ))
            })?;
            items.push(
                ItemSpec::new(name.clone(), dims[0], dims[1])?
                    .with_kind(ItemKind::from_name(name)),
            );
        }

        Ok((room, door, items))
    }
}

/// Serializes a result set into the output document: item name to either
/// `{placed, center, rotation}` or `{placed, error}`.
pub fn result_document(results: &ResultSet) -> Value {
    let mut map = Map::with_capacity(results.len());
    for entry in results.iter() {
        let value = match entry.outcome() {
            PlacementOutcome::Placed { x, y, rotation } => json!({
                "placed": true,
                "center": [x, y],
                "rotation": rotation,
            }),
            PlacementOutcome::Failed { reason } => json!({
                "placed": false,
                "error": reason,
            }),
        };
        map.insert(entry.name().to_string(), value);
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"{
        "boundary": [[0, 0], [400, 0], [400, 300], [0, 300]],
        "door": [[400, 105], [400, 195]],
        "isOpenInward": true,
        "algoToPlace": {
            "shelf1": [40, 200],
            "fridge1": [70, 70]
        }
    }"#;

    #[test]
    fn test_parse_and_convert() {
        let doc = LayoutDocument::from_json(EXAMPLE).unwrap();
        assert_eq!(doc.boundary_len(), 4);
        assert_eq!(doc.item_count(), 2);

        let (room, door, items) = doc.into_problem().unwrap();
        assert_eq!(room.walls().len(), 4);
        assert!(door.opens_inward());
        assert_eq!(items.len(), 2);
        // Input order is preserved; dimensions are normalized.
        assert_eq!(items[0].name(), "shelf1");
        assert_eq!(items[0].length(), 200.0);
        assert_eq!(items[0].kind(), ItemKind::Standard);
        assert_eq!(items[1].kind(), ItemKind::Refrigerator);
    }

    #[test]
    fn test_is_open_inward_defaults_to_false() {
        let doc = LayoutDocument::from_json(
            r#"{
                "boundary": [[0, 0], [100, 0], [100, 100], [0, 100]],
                "door": [[40, 0], [60, 0]],
                "algoToPlace": {}
            }"#,
        )
        .unwrap();
        let (_, door, items) = doc.into_problem().unwrap();
        assert!(!door.opens_inward());
        assert!(items.is_empty());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let missing_door = r#"{
            "boundary": [[0, 0], [100, 0], [100, 100], [0, 100]],
            "algoToPlace": {}
        }"#;
        assert!(matches!(
            LayoutDocument::from_json(missing_door),
            Err(DocumentError::Json(_))
        ));
    }

    #[test]
    fn test_wrong_door_arity_is_rejected() {
        let doc = LayoutDocument::from_json(
            r#"{
                "boundary": [[0, 0], [100, 0], [100, 100], [0, 100]],
                "door": [[40, 0], [60, 0], [80, 0]],
                "algoToPlace": {}
            }"#,
        )
        .unwrap();
        assert!(matches!(
            doc.into_problem(),
            Err(DocumentError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_bad_item_dimensions_are_rejected() {
        let doc = LayoutDocument::from_json(
            r#"{
                "boundary": [[0, 0], [100, 0], [100, 100], [0, 100]],
                "door": [[40, 0], [60, 0]],
                "algoToPlace": { "shelf1": [40] }
            }"#,
        )
        .unwrap();
        assert!(matches!(
            doc.into_problem(),
            Err(DocumentError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_result_document_shape() {
        use roomlay_core::{Pose, ResultEntry};

        let mut results = ResultSet::new();
        results.push(ResultEntry::placed("fridge1", Pose::new(35.0, 35.0, 0.0)));
        results.push(ResultEntry::failed("shelf1", roomlay_core::NO_VALID_POSITION));

        let value = result_document(&results);
        assert_eq!(value["fridge1"]["placed"], json!(true));
        assert_eq!(value["fridge1"]["center"], json!([35.0, 35.0]));
        assert_eq!(value["fridge1"]["rotation"], json!(0.0));
        assert_eq!(value["shelf1"]["placed"], json!(false));
        assert_eq!(
            value["shelf1"]["error"],
            json!(roomlay_core::NO_VALID_POSITION)
        );
    }
}
