use std::env;
use std::fs;
use std::path::Path;

/// Keys read by `AppConfig::from_env` in src/config.rs
const CONFIG_KEYS: [&str; 6] = [
    "BACKEND_URL",
    "BACKEND_URL_DEVELOPMENT",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "GUEST_CAR_LIMIT",
    "DEFAULT_CAR_PHOTO",
];

/// `KEY=VALUE` (optionally `export KEY="VALUE"`), `None` for blanks and comments
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"').trim_matches('\'')))
}

// Config keys from `.env` become compile-time variables for `option_env!`.
// Anything else in the file is ignored.
fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found, using built-in defaults (see .env.example)");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=Could not read .env: {}", e);
            return;
        }
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env key {} is not used by the front end", key);
            continue;
        }
        // Shell exports win over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
