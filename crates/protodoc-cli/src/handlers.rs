//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod config;
mod list;
mod render;
mod sample;
mod utils;

pub use completions::handle_completions;
pub use config::handle_config;
pub use list::handle_list;
pub use render::handle_render;
pub use sample::handle_sample;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::PathBuf;
    use tempfile::TempDir;

    pub(crate) const INVENTORY_JSON: &str = r#"{
  "files": [
    {
      "name": "inventory.proto",
      "package": "inventory",
      "messages": [
        {
          "name": "Item",
          "longName": "Item",
          "fullName": "inventory.Item",
          "fields": [
            {"name": "sku", "type": "string", "fullType": "string"},
            {"name": "count", "type": "uint32", "fullType": "uint32"},
            {"name": "state", "type": "State", "fullType": "inventory.State"},
            {"name": "supplier", "type": "Supplier", "fullType": "vendor.Supplier"}
          ]
        }
      ],
      "enums": [
        {
          "name": "State",
          "longName": "State",
          "fullName": "inventory.State",
          "values": [
            {"name": "IN_STOCK", "number": "0"},
            {"name": "SOLD_OUT", "number": "3"}
          ]
        }
      ]
    }
  ]
}"#;

    /// Write the inventory schema into `dir`
    pub(crate) fn inventory_schema(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, INVENTORY_JSON).unwrap();
        path
    }
}
