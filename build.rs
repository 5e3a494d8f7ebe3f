use std::path::Path;
use std::process::Command;

fn main() {
    let hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=RASTERBOARD_GIT_HASH={hash}");
    println!("cargo:rerun-if-changed=build.rs");

    let git_dir = std::env::var_os("GIT_DIR").unwrap_or_else(|| ".git".into());
    let git_dir = Path::new(&git_dir);
    for name in ["HEAD", "refs", "packed-refs"] {
        let path = git_dir.join(name);
        if let Some(display) = path.to_str().filter(|_| path.exists()) {
            println!("cargo:rerun-if-changed={display}");
        }
    }
}
