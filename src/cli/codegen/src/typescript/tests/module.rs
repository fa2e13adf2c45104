/* src/cli/codegen/src/typescript/tests/module.rs */

use super::*;

#[test]
fn aliases_are_numbered_per_category() {
  let module = build_manifest_module(&sample_snapshot(), &ManifestFolders::default());
  let aliases: Vec<&str> = module.imports.iter().map(|i| i.alias.as_str()).collect();
  assert_eq!(aliases, ["$0", "$$0", "$$$0", "$$$1"]);
}

#[test]
fn specifiers_are_prefixed_with_category_folder() {
  let module = build_manifest_module(&sample_snapshot(), &ManifestFolders::default());
  let specifiers: Vec<&str> = module.imports.iter().map(|i| i.specifier.as_str()).collect();
  assert_eq!(
    specifiers,
    [
      "./routes/index.tsx",
      "./islands/Counter.tsx",
      "./components/Footer.tsx",
      "./components/Hero.tsx",
    ]
  );
}

#[test]
fn custom_folders_flow_into_keys() {
  let folders = ManifestFolders {
    routes: "pages".into(),
    islands: "interactive".into(),
    components: "sections".into(),
  };
  let module = build_manifest_module(&sample_snapshot(), &folders);
  assert_eq!(module.tables[0].entries[0].key, "./pages/index.tsx");
  assert_eq!(module.tables[1].entries[0].key, "./interactive/Counter.tsx");
  assert_eq!(module.tables[2].entries[1].key, "./sections/Hero.tsx");
}

#[test]
fn tables_follow_input_order() {
  let mut snapshot = sample_snapshot();
  snapshot.components = paths(&["/Zeta.tsx", "/Alpha.tsx"]);
  let module = build_manifest_module(&snapshot, &ManifestFolders::default());
  let components = &module.tables[2];
  assert_eq!(components.name, "components");
  assert_eq!(components.entries[0].key, "./components/Zeta.tsx");
  assert_eq!(components.entries[0].value, TableValue::Alias("$$$0".into()));
  assert_eq!(components.entries[1].value, TableValue::Alias("$$$1".into()));
}

#[test]
fn schema_table_keyed_by_component_name() {
  let module = build_manifest_module(&sample_snapshot(), &ManifestFolders::default());
  let schemas = &module.tables[3];
  assert_eq!(schemas.name, "schemas");
  assert_eq!(schemas.entries[0].key, "Hero");
  assert_eq!(schemas.entries[0].value, TableValue::Json(json!({ "type": "string" })));
  assert_eq!(schemas.entries[1].key, "Footer");
  assert_eq!(schemas.entries[1].value, TableValue::Null);
}

#[test]
fn empty_snapshot_has_no_imports() {
  let module = build_manifest_module(&ManifestSnapshot::default(), &ManifestFolders::default());
  assert!(module.imports.is_empty());
  assert_eq!(module.tables.len(), 4);
  assert!(module.tables.iter().all(|t| t.entries.is_empty()));
}
