//! Build script for copycat - embeds git commit hash for dev builds
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` environment variable with the commit hash
//!
//! When the `release` feature IS set (CI/official builds):
//! - Does not emit git info (clean version string)

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = match GitclBuilder::default().sha(true).build() {
            Ok(git) => git,
            Err(e) => {
                println!("cargo:warning=Failed to configure git info: {}", e);
                println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
                return;
            }
        };

        let emitted = Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit());

        if let Err(e) = emitted {
            // Not in a git checkout (e.g. a source tarball)
            println!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
