use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const CATALOG_SCHEMA_VERSION: u32 = 1;
const MIN_WINDOW_WIDTH: i32 = 300;
const MIN_WINDOW_HEIGHT: i32 = 200;

/// Catalog id token -> `AppId` variant.
const APP_IDS: [(&str, &str); 6] = [
    ("profile", "Profile"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("terminal", "Terminal"),
    ("resume", "Resume"),
    ("contact", "Contact"),
];

/// Catalog icon token -> `system_ui::IconName` variant.
const ICONS: [(&str, &str); 6] = [
    ("user", "User"),
    ("folder-git", "FolderGit"),
    ("cpu", "Cpu"),
    ("terminal", "Terminal"),
    ("file-lock", "FileLock"),
    ("radio", "Radio"),
];

#[derive(Debug, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    apps: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    title: String,
    icon: String,
    default_x: i32,
    default_y: i32,
    default_width: i32,
    default_height: i32,
}

fn lookup(table: &[(&str, &'static str)], token: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == token)
        .map(|(_, variant)| *variant)
}

fn validate(catalog: &AppCatalog, path: &str) {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "app catalog schema mismatch in {path}: expected {CATALOG_SCHEMA_VERSION} found {}",
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &catalog.apps {
        if lookup(&APP_IDS, &entry.id).is_none() {
            panic!("unknown app id `{}` in {path}", entry.id);
        }
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate app id `{}` in {path}", entry.id);
        }
        if lookup(&ICONS, &entry.icon).is_none() {
            panic!("unknown icon `{}` for app `{}` in {path}", entry.icon, entry.id);
        }
        if entry.title.trim().is_empty() {
            panic!("app `{}` has an empty title in {path}", entry.id);
        }
        if entry.default_width < MIN_WINDOW_WIDTH || entry.default_height < MIN_WINDOW_HEIGHT {
            panic!(
                "app `{}` default size {}x{} is below the {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT} minimum in {path}",
                entry.id, entry.default_width, entry.default_height
            );
        }
    }

    for (id, _) in APP_IDS {
        if !seen.contains(id) {
            panic!("app catalog {path} is missing app `{id}`");
        }
    }
}

fn render(catalog: &AppCatalog) -> String {
    let mut out = String::new();
    out.push_str("/// Build-time generated app catalog, in launcher order.\n");
    let _ = writeln!(
        out,
        "const APP_REGISTRY: [AppDescriptor; {}] = [",
        catalog.apps.len()
    );
    for entry in &catalog.apps {
        let variant = lookup(&APP_IDS, &entry.id).unwrap_or_default();
        let icon = lookup(&ICONS, &entry.icon).unwrap_or_default();
        let _ = writeln!(
            out,
            "    AppDescriptor {{ app_id: AppId::{variant}, title: {:?}, icon: IconName::{icon}, default_rect: WindowRect {{ x: {}, y: {}, w: {}, h: {} }} }},",
            entry.title, entry.default_x, entry.default_y, entry.default_width, entry.default_height
        );
    }
    out.push_str("];\n\n");

    out.push_str("/// Returns the catalog entry for `app_id`.\n");
    out.push_str("pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {\n");
    out.push_str("    match app_id {\n");
    for (index, entry) in catalog.apps.iter().enumerate() {
        let variant = lookup(&APP_IDS, &entry.id).unwrap_or_default();
        let _ = writeln!(out, "        AppId::{variant} => &APP_REGISTRY[{index}],");
    }
    out.push_str("    }\n}\n");
    out
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: AppCatalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, render(&catalog))
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
