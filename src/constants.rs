// Page wiring for the auto-started figure.

/// Canvas picked up automatically when the module loads.
pub const CANVAS_ID: &str = "penrose-canvas";

/// `document.readyState` while the DOM is still being parsed.
pub const READY_STATE_LOADING: &str = "loading";
