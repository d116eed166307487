fn main() {
    // Validate embedded TOML at compile time.
    let content = include_str!("src/default_settings.toml");
    if content.parse::<toml::Value>().is_err() {
        panic!("src/default_settings.toml contains invalid TOML");
    }
}
