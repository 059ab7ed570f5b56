use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Drop a config template next to the target directory
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|_| "./".to_string());
    let template_path = Path::new(&out_dir).join("../../../config.template.toml");

    let template = r#"# ogginfo configuration template
# Copy this file to 'ogginfo.toml' and adjust the values

# Drop pages with a bad checksum
verify_crc = true

# Log filter used when OGGINFO_LOG is unset
log_level = "warn"
"#;

    let _ = fs::write(template_path, template);
    println!("cargo:rerun-if-changed=build.rs");
}
