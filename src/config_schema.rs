// Shared by build.rs and the config tests via `include!`.

/// Tables and keys that `default_config.toml` must declare, and nothing else.
const CONFIG_SCHEMA: &[(&str, &[&str])] = &[
    (
        "site",
        &["content_dir", "static_dir", "output_dir", "template", "base_path"],
    ),
    (
        "template",
        &["title_placeholder", "content_placeholder", "escape_title"],
    ),
];

/// Missing tables or keys, and any table or key the config does not know.
fn schema_errors(config: &toml::Table) -> Vec<String> {
    let mut errors = Vec::new();

    for name in config.keys() {
        if !CONFIG_SCHEMA.iter().any(|(table, _)| *table == name.as_str()) {
            errors.push(format!("unknown table [{name}]"));
        }
    }

    for (table, keys) in CONFIG_SCHEMA {
        let Some(section) = config.get(*table).and_then(toml::Value::as_table) else {
            errors.push(format!("missing table [{table}]"));
            continue;
        };
        for key in *keys {
            if !section.contains_key(*key) {
                errors.push(format!("missing key {table}.{key}"));
            }
        }
        for key in section.keys() {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("unknown key {table}.{key}"));
            }
        }
    }

    errors
}
