use std::process::Command;

fn main() {
    println!(
        "cargo:rustc-env=ROSTER_BUILD_DATE={}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
    println!(
        "cargo:rustc-env=ROSTER_BUILD_COMMIT={}",
        git(&["rev-parse", "--short", "HEAD"]).as_deref().unwrap_or("unknown")
    );
    println!("cargo:rerun-if-changed=../.git/HEAD");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_owned())
}
