//! Build script for cablegen
//!
//! Embeds build-time information (git commit, dirty status, build timestamp)
//! shown in the GUI footer and `--version` output.

fn main() {
    shadow_rs::ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build info");
}
