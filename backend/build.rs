use std::fs;
use std::path::Path;

use fs_extra::dir::CopyOptions;

const FRONTEND_DIST: &str = "../frontend/dist";
const EMBEDDED_DIST: &str = "static/dist";

/// Replaces the embedded bundle with the latest `trunk build` output.
fn refresh_bundle(dist: &Path, embedded: &Path) -> Result<(), String> {
    if embedded.exists() {
        fs::remove_dir_all(embedded).map_err(|e| format!("removing {}: {e}", embedded.display()))?;
    }
    fs::create_dir_all(embedded).map_err(|e| format!("creating {}: {e}", embedded.display()))?;
    let options = CopyOptions::new().overwrite(true).content_only(true);
    fs_extra::dir::copy(dist, embedded, &options)
        .map(|_| ())
        .map_err(|e| format!("copying {}: {e}", dist.display()))
}

fn main() {
    println!("cargo:rerun-if-changed={FRONTEND_DIST}");

    let dist = Path::new(FRONTEND_DIST);
    if !dist.join("index.html").exists() {
        // No frontend build yet: keep the checked-in placeholder shell.
        return;
    }
    if let Err(e) = refresh_bundle(dist, Path::new(EMBEDDED_DIST)) {
        panic!("could not embed the frontend bundle: {e}");
    }
}
