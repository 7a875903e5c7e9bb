use chrono::{SecondsFormat, Utc};

fn main() {
    // Stamped into the footer as the "last updated" date
    let built_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={built_at}");
    println!("cargo:rerun-if-changed=build.rs");
}
