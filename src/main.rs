// WASM entrypoint for Trunk.
//
// Native builds of this binary are no-ops; the real app is behind
// `--features web` and `wasm32`.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() -> Result<(), wasm_bindgen::JsValue> {
    profile_web::start()
}
