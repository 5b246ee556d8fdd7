use chrono::Local;
use std::process::Command;

fn git(args: &[&str]) -> Option<std::process::Output> {
    Command::new("git").args(args).output().ok()
}

fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"])
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string());

    let build_hash = match hash {
        Some(hash) => {
            // Tracked-file changes only; untracked files are ignored
            let dirty = git(&["diff", "--quiet", "HEAD"])
                .map(|out| !out.status.success())
                .unwrap_or(false);
            if dirty {
                format!("{hash}-dirty-{}", Local::now().format("%Y%m%d-%H%M%S"))
            } else {
                hash
            }
        }
        None => "unknown".to_string(),
    };

    println!("cargo:rustc-env=BUILD_HASH={build_hash}");

    // .git lives at the workspace root, two levels up
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");
}
