use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::bootstrap::structure_already_parsed;
use crate::error::BootstrapError;

const STRUCTURAL_READY_EVENT: &str = "DOMContentLoaded";

/// Run `f` once the document structure has been parsed.
///
/// If parsing already finished the event will not fire again, so `f` runs
/// immediately. Errors from a deferred `f` are thrown into the host.
pub(super) fn on_structural_ready<F>(f: F) -> Result<(), BootstrapError>
where
    F: FnOnce() -> Result<(), BootstrapError> + 'static,
{
    let document = web_sys::window()
        .ok_or(BootstrapError::NoWindow)?
        .document()
        .ok_or(BootstrapError::NoDocument)?;

    if structure_already_parsed(&document.ready_state()) {
        return f();
    }

    let cb = Closure::once_into_js(move || {
        if let Err(e) = f() {
            wasm_bindgen::throw_val(e.into());
        }
    });

    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_once(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            STRUCTURAL_READY_EVENT,
            cb.unchecked_ref(),
            &opts,
        )
        .map_err(|_| BootstrapError::Lifecycle("addEventListener() threw".to_string()))
}
