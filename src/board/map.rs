//! The circular board.
//!
//! The map owns every field and a single cursor shared by all players.
//! The cursor starts one before the first field so that an opening roll of
//! 1 lands on field 0.

use serde::{Deserialize, Serialize};

use super::field::{Field, FieldIndex};

/// Ordered, wrap-around sequence of fields with the current position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Map {
    fields: Vec<Field>,
    /// `None` before the first move.
    cursor: Option<usize>,
}

impl Map {
    /// Create a map over `fields`. Must not be empty.
    pub fn new(fields: Vec<Field>) -> Self {
        assert!(!fields.is_empty(), "Map must have at least 1 field");
        Self {
            fields,
            cursor: None,
        }
    }

    /// Number of fields on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: a map has at least one field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the field last landed on, `None` before the first move.
    #[must_use]
    pub fn position(&self) -> Option<FieldIndex> {
        self.cursor.map(|c| FieldIndex::new(c as u32))
    }

    /// Move the cursor forward by `roll` fields and return where it landed.
    pub fn advance(&mut self, roll: u8) -> (FieldIndex, &mut Field) {
        let len = self.fields.len();
        let target = match self.cursor {
            Some(c) => c + roll as usize,
            None => (roll as usize).saturating_sub(1),
        };
        let index = if target >= len { target % len } else { target };

        self.cursor = Some(index);
        (FieldIndex::new(index as u32), &mut self.fields[index])
    }

    #[must_use]
    pub fn field(&self, index: FieldIndex) -> &Field {
        &self.fields[index.index()]
    }

    pub fn field_mut(&mut self, index: FieldIndex) -> &mut Field {
        &mut self.fields[index.index()]
    }

    /// All fields in board order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
