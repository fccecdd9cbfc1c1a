//! Object nodes of the result tree.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::ResultValue;

/// One named field inside an [`ObjectResult`].
#[derive(Debug)]
pub struct ObjectField {
    name: String,
    value: ResultValue,
}

impl ObjectField {
    /// Creates a field with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<ResultValue>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field value.
    #[must_use]
    pub const fn value(&self) -> &ResultValue {
        &self.value
    }

    /// Mutable access to the field value.
    pub fn value_mut(&mut self) -> &mut ResultValue {
        &mut self.value
    }

    /// Consumes the field and returns its value.
    #[must_use]
    pub fn into_value(self) -> ResultValue {
        self.value
    }
}

/// An object node of the result tree.
///
/// Fields keep selection-set order. The node is rented from a
/// [`ResultPool`](crate::pool::ResultPool) and must eventually travel back
/// to it, either attached to the tree a
/// [`ResultMemoryOwner`](crate::owner::ResultMemoryOwner) releases or
/// returned directly.
#[derive(Debug, Default)]
pub struct ObjectResult {
    fields: Vec<ObjectField>,
}

impl ObjectResult {
    /// Appends a field.
    ///
    /// Selection sets are merged before execution, so field names are
    /// unique per object by construction; this is not re-checked here.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ResultValue>) {
        self.fields.push(ObjectField::new(name, value));
    }

    /// Looks up a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResultValue> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .map(ObjectField::value)
    }

    /// Mutable lookup of a field value by name, used to overwrite a
    /// position in place, for example when nulling out a failed subtree.
    ///
    /// Replacing a value that holds pooled nodes drops them without
    /// returning them to the pool; release such values through the pool
    /// first.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ResultValue> {
        self.fields
            .iter_mut()
            .find(|field| field.name() == name)
            .map(ObjectField::value_mut)
    }

    /// The fields in selection-set order.
    #[must_use]
    pub fn fields(&self) -> &[ObjectField] {
        &self.fields
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Clears the node for reuse, keeping its capacity.
    pub fn reset(&mut self) {
        self.fields.clear();
    }

    /// Moves all fields out of the node, keeping its capacity.
    pub(crate) fn drain_fields(&mut self) -> std::vec::Drain<'_, ObjectField> {
        self.fields.drain(..)
    }
}

impl Serialize for ObjectResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(field.name(), field.value())?;
        }
        map.end()
    }
}
