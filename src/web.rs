use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::bootstrap::Bootstrap;

mod lifecycle;
mod shell;
mod storage;

pub use storage::LocalStorage;

use lifecycle::on_structural_ready;
use shell::{LoginView, ProfileView};

pub fn start() -> Result<(), JsValue> {
    let bootstrap = Bootstrap::new(
        LocalStorage,
        || mount_to_body(|| view! { <LoginView /> }),
        || mount_to_body(|| view! { <ProfileView /> }),
    );
    on_structural_ready(move || bootstrap.run())?;
    Ok(())
}
