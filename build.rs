use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    expect(&table, "links", "external_prefixes", is_string_array);
    expect(&table, "links", "class", toml::Value::is_str);
    expect(&table, "image", "wrapper_class", toml::Value::is_str);
    expect(&table, "image", "sizes", toml::Value::is_str);
    expect(&table, "image", "widths", is_integer_array);
    expect(&table, "image", "format", toml::Value::is_str);
    expect(&table, "image", "quality_mobile", is_u8);
    expect(&table, "image", "quality_desktop", is_u8);
    expect(&table, "image", "mobile_breakpoint", is_u32);
    expect(&table, "render", "resolve_asset_hyperlinks", toml::Value::is_bool);
}

/// Panic unless `[section].key` exists and passes `check`.
fn expect(table: &toml::Table, section: &str, key: &str, check: fn(&toml::Value) -> bool) {
    let Some(values) = table.get(section).and_then(toml::Value::as_table) else {
        panic!("default_config.toml is missing the [{}] section", section);
    };
    match values.get(key) {
        Some(value) if check(value) => {}
        Some(value) => panic!("default_config.toml: {}.{} has the wrong type: {}", section, key, value),
        None => panic!("default_config.toml is missing {}.{}", section, key),
    }
}

fn is_string_array(value: &toml::Value) -> bool {
    value.as_array().is_some_and(|items| items.iter().all(toml::Value::is_str))
}

fn is_integer_array(value: &toml::Value) -> bool {
    value.as_array().is_some_and(|items| items.iter().all(is_u32))
}

fn is_u8(value: &toml::Value) -> bool {
    value.as_integer().is_some_and(|n| u8::try_from(n).is_ok())
}

fn is_u32(value: &toml::Value) -> bool {
    value.as_integer().is_some_and(|n| u32::try_from(n).is_ok())
}
