/* src/cli/core/src/config/tests/parsing.rs */

use super::*;

#[test]
fn minimal_config_uses_defaults() {
  let config: DecoConfig = toml::from_str(
    r#"
[project]
name = "storefront"
"#,
  )
  .unwrap();
  assert_eq!(config.project.name, "storefront");
  assert_eq!(config.manifest.out_file, "deco.gen.ts");
  assert_eq!(config.manifest.routes_dir, "routes");
  assert_eq!(config.manifest.islands_dir, "islands");
  assert_eq!(config.manifest.components_dir, "components");
  assert_eq!(config.runtime.eval_command, "deno eval");
  assert_eq!(config.format.command, "deno fmt -");
  assert!(config.dev.command.is_none());
  assert!(config.manifest.validate().is_ok());
}

#[test]
fn full_config() {
  let config: DecoConfig = toml::from_str(
    r#"
[project]
name = "storefront"

[manifest]
out_file = "manifest.gen.ts"
routes_dir = "pages"
islands_dir = "interactive"
components_dir = "sections"

[runtime]
eval_command = "bun -e"

[format]
command = "prettier --stdin-filepath manifest.gen.ts"

[dev]
command = "deno run -A --watch main.ts"
"#,
  )
  .unwrap();
  assert_eq!(config.manifest.out_file, "manifest.gen.ts");
  let folders = config.manifest.folders();
  assert_eq!(folders.routes, "pages");
  assert_eq!(folders.islands, "interactive");
  assert_eq!(folders.components, "sections");
  assert_eq!(config.runtime.eval_command, "bun -e");
  assert_eq!(config.format.command, "prettier --stdin-filepath manifest.gen.ts");
  assert_eq!(config.dev.command.as_deref(), Some("deno run -A --watch main.ts"));
}

#[test]
fn missing_project_is_rejected() {
  let result: Result<DecoConfig, _> = toml::from_str("[manifest]\nout_file = \"x.ts\"\n");
  assert!(result.is_err());
}

#[test]
fn duplicate_category_dirs_are_rejected() {
  let section = ManifestSection { islands_dir: "components/".into(), ..ManifestSection::default() };
  let err = section.validate().unwrap_err().to_string();
  assert!(err.contains("more than one category"), "got: {err}");
}

#[test]
fn empty_out_file_is_rejected() {
  let section = ManifestSection { out_file: " ".into(), ..ManifestSection::default() };
  assert!(section.validate().is_err());
}

#[test]
fn empty_category_dir_is_rejected() {
  let section = ManifestSection { routes_dir: "/".into(), ..ManifestSection::default() };
  let err = section.validate().unwrap_err().to_string();
  assert!(err.contains("routes_dir"), "got: {err}");
}
