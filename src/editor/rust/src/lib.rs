/* src/editor/rust/src/lib.rs */

mod client;
mod field_array;
mod form;
mod types;

pub use client::{EDITOR_API_PATH, EditorClient, PageReload};
pub use field_array::FieldArray;
pub use form::{Direction, EditorForm};
pub use types::{
  EditorPayload, FormValues, PageComponentData, Props, map_components_to_form_data,
  map_form_data_to_components,
};
