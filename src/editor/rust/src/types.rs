/* src/editor/rust/src/types.rs */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property bag of one component instance.
pub type Props = Map<String, Value>;

/// One configured component on a page. `props` is `None` rather than an empty
/// map, and is left out of the JSON entirely in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageComponentData {
  pub component: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub props: Option<Props>,
}

impl PageComponentData {
  pub fn new(component: impl Into<String>) -> Self {
    Self { component: component.into(), props: None }
  }

  pub fn with_props(component: impl Into<String>, props: Props) -> Self {
    Self { component: component.into(), props: non_empty(props) }
  }
}

fn non_empty(props: Props) -> Option<Props> {
  if props.is_empty() { None } else { Some(props) }
}

/// Form-side view of the page: only the property bags, index-aligned with the
/// component list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
  pub components: Vec<Props>,
}

/// Body of `POST /live/api/editor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorPayload {
  pub components: Vec<PageComponentData>,
  pub template: String,
}

pub fn map_components_to_form_data(components: &[PageComponentData]) -> FormValues {
  FormValues {
    components: components.iter().map(|c| c.props.clone().unwrap_or_default()).collect(),
  }
}

/// Identities come from `components`, property bags from `values`.
pub fn map_form_data_to_components(
  values: &FormValues,
  components: &[PageComponentData],
) -> Vec<PageComponentData> {
  components
    .iter()
    .zip(&values.components)
    .map(|(c, props)| PageComponentData {
      component: c.component.clone(),
      props: non_empty(props.clone()),
    })
    .collect()
}
