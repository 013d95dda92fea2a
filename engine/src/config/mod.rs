// Engine configuration: defaults are embedded, a JSON file may override them.
pub mod settings;
