/* src/editor/rust/src/field_array.rs */

use serde_json::Value;

use crate::types::{FormValues, Props};

/// Field-array controller holding the live-edited property bags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldArray {
  values: FormValues,
}

impl FieldArray {
  pub fn new(values: FormValues) -> Self {
    Self { values }
  }

  pub fn fields(&self) -> &[Props] {
    &self.values.components
  }

  pub fn get_values(&self) -> &FormValues {
    &self.values
  }

  pub fn len(&self) -> usize {
    self.values.components.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.components.is_empty()
  }

  pub fn append(&mut self, props: Props) {
    self.values.components.push(props);
  }

  pub fn remove(&mut self, index: usize) -> Option<Props> {
    (index < self.len()).then(|| self.values.components.remove(index))
  }

  /// Swap two entries; out-of-range indices leave the array untouched.
  pub fn swap(&mut self, a: usize, b: usize) -> bool {
    if a >= self.len() || b >= self.len() {
      return false;
    }
    self.values.components.swap(a, b);
    true
  }

  /// Set one field of the bag at `index`.
  pub fn set_value(&mut self, index: usize, key: impl Into<String>, value: Value) -> bool {
    match self.values.components.get_mut(index) {
      Some(bag) => {
        bag.insert(key.into(), value);
        true
      }
      None => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn out_of_range_operations_are_ignored() {
    let mut fields = FieldArray::new(FormValues { components: vec![Props::new()] });
    assert!(!fields.swap(0, 1));
    assert!(fields.remove(3).is_none());
    assert!(!fields.set_value(1, "title", json!("x")));
    assert_eq!(fields.len(), 1);
  }

  #[test]
  fn set_value_edits_in_place() {
    let mut fields = FieldArray::default();
    fields.append(Props::new());
    assert!(fields.set_value(0, "title", json!("Hi")));
    assert_eq!(fields.fields()[0].get("title"), Some(&json!("Hi")));
  }
}
