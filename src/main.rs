//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` locally so the backdrop can be viewed in a browser.
//!
//! `cargo run -- 9000` picks a different port.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = host::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, Stdio};
    use std::{env, thread, time::Duration};

    const DEFAULT_PORT: u16 = 8000;

    pub fn run() -> Result<(), String> {
        let port = env::args()
            .nth(1)
            .map(|arg| arg.parse::<u16>().map_err(|e| format!("bad port {arg:?}: {e}")))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        build_bundle()?;

        log::info!("serving static/ at http://127.0.0.1:{port}");
        let mut server = Command::new("python3")
            .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| format!("failed to start http server: {e}"))?;

        // Keep process alive for as long as the server is.
        loop {
            match server.try_wait() {
                Ok(Some(status)) => return Err(format!("http server exited: {status}")),
                Ok(None) => thread::sleep(Duration::from_secs(1)),
                Err(e) => return Err(format!("lost track of http server: {e}")),
            }
        }
    }

    fn build_bundle() -> Result<(), String> {
        log::info!("building WASM pkg …");
        match Command::new("wasm-pack")
            .args([
                "build",
                "--release",
                "--target",
                "web",
                "--out-dir",
                "static/pkg",
            ])
            .status()
        {
            Ok(st) if st.success() => Ok(()),
            Ok(_) => Err("wasm-pack finished with errors".to_string()),
            Err(_) => {
                log::warn!(
                    "wasm-pack not found in PATH, serving whatever is already in static/pkg \
                     (https://rustwasm.github.io/wasm-pack/)"
                );
                Ok(())
            }
        }
    }
}
