//! Binary entrypoint for the browser-hosted primitive gallery.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    ui_gallery::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This binary is intended for the browser/WASM workflow. Build for wasm32 with the `csr` feature.");
}
