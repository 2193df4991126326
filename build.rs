use std::fs;

include!("src/config_schema.rs");

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);
    println!("cargo:rerun-if-changed=src/config_schema.rs");

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let config = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("Invalid default_config.toml: {}", e));

    // Serde ignores unknown keys, so a typo here would silently fall back to a default.
    let errors = schema_errors(&config);
    if !errors.is_empty() {
        panic!("Invalid default_config.toml:\n  {}", errors.join("\n  "));
    }
}
