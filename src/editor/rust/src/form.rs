/* src/editor/rust/src/form.rs */

use serde_json::Value;

use crate::field_array::FieldArray;
use crate::types::{
  EditorPayload, FormValues, PageComponentData, Props, map_components_to_form_data,
  map_form_data_to_components,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  Prev,
  Next,
}

/// Editor state for one page: the component list (identities and order) and
/// the field array (live property values). Both always have the same length
/// and are index-aligned.
#[derive(Debug, Clone)]
pub struct EditorForm {
  components: Vec<PageComponentData>,
  fields: FieldArray,
}

impl EditorForm {
  pub fn new(components: Vec<PageComponentData>) -> Self {
    let fields = FieldArray::new(map_components_to_form_data(&components));
    Self { components, fields }
  }

  pub fn components(&self) -> &[PageComponentData] {
    &self.components
  }

  pub fn values(&self) -> &FormValues {
    self.fields.get_values()
  }

  pub fn len(&self) -> usize {
    self.components.len()
  }

  pub fn is_empty(&self) -> bool {
    self.components.is_empty()
  }

  /// Swap the entry at `position` with its neighbour. Returns `false` (and
  /// changes nothing) when either index falls outside the list.
  pub fn reorder(&mut self, direction: Direction, position: usize) -> bool {
    let target = match direction {
      Direction::Prev => position.checked_sub(1),
      Direction::Next => position.checked_add(1),
    };
    let Some(target) = target else { return false };
    if position >= self.len() || target >= self.len() {
      return false;
    }
    self.components.swap(position, target);
    self.fields.swap(position, target)
  }

  pub fn remove(&mut self, index: usize) -> Option<PageComponentData> {
    if index >= self.len() {
      return None;
    }
    self.fields.remove(index);
    Some(self.components.remove(index))
  }

  pub fn add(&mut self, component: impl Into<String>) {
    self.components.push(PageComponentData::new(component));
    self.fields.append(Props::new());
  }

  /// Edit one property of the component at `index`, as a form field would.
  pub fn set_field(&mut self, index: usize, key: impl Into<String>, value: Value) -> bool {
    self.fields.set_value(index, key, value)
  }

  /// Current values folded back into the component list.
  pub fn to_components(&self) -> Vec<PageComponentData> {
    map_form_data_to_components(self.fields.get_values(), &self.components)
  }

  pub fn payload(&self, template: impl Into<String>) -> EditorPayload {
    EditorPayload { components: self.to_components(), template: template.into() }
  }
}
