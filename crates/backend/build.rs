use std::env;
use std::fs;
use std::path::Path;

// Copies the workspace config.toml next to the backend binary,
// where load_config() looks for it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target/{} not found, config.toml not copied", profile);
        return;
    };

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found, the embedded default will be used");
        return;
    }

    let dest = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        println!("cargo:warning=Failed to copy config.toml to {:?}: {}", dest, e);
    }
}
