//! Entry point for the WASM application

pub fn main() {
    snap_frontend::start();
}
