use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    // Copy config.toml next to the built binary (target/<profile>/)
    let config_path = Path::new("config.toml");
    let Some(dest_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    if config_path.exists() {
        fs::copy(config_path, dest_dir.join("config.toml"))
            .expect("failed to copy config.toml to the target directory");
    }
}
