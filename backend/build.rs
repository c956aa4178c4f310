use std::fs;
use std::path::Path;

const FALLBACK_INDEX: &str = "<!DOCTYPE html>\n<html><head><title>DriveSphere</title></head>\
<body><p>Frontend bundle not built. Run <code>trunk build</code> in frontend/.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .expect("copy frontend bundle");
    }

    // include_dir! needs the directory to exist even without a frontend build.
    let embedded = out_dir.join("dist");
    let index = embedded.join("index.html");
    if !index.exists() {
        fs::create_dir_all(&embedded).expect("create static/dist");
        fs::write(&index, FALLBACK_INDEX).expect("write fallback index.html");
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
