/* src/cli/codegen/src/typescript/tests/mod.rs */

use serde_json::json;

use super::*;
use crate::manifest::SchemaEntry;

mod module;

fn paths(v: &[&str]) -> Vec<String> {
  v.iter().map(|s| (*s).to_string()).collect()
}

fn sample_snapshot() -> ManifestSnapshot {
  ManifestSnapshot {
    routes: paths(&["/index.tsx"]),
    islands: paths(&["/Counter.tsx"]),
    components: paths(&["/Footer.tsx", "/Hero.tsx"]),
    schemas: vec![
      SchemaEntry { component: "Hero".into(), schema: Some(json!({ "type": "string" })) },
      SchemaEntry { component: "Footer".into(), schema: None },
    ],
  }
}
