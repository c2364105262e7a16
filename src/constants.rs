/// Page wiring, asset locations and modal styling.
///
/// Element ids and selectors are the contract with the host page; the
/// inline styles are the minimum the modal needs to position and animate
/// itself without an external stylesheet.
// Host page elements
pub const MAIN_MOUNT_ID: &str = "canvas-container";
pub const MAIN_SINK_ID: &str = "loading";
pub const POPCORN_MOUNT_ID: &str = "container-popcorn";
pub const POPCORN_SINK_ID: &str = "loading-popcorn";
pub const MODAL_TRIGGER_SELECTOR: &str = ".container-trofeu";

// Assets (glTF JSON with its .bin beside it)
pub const SMARTWATCH_ASSET: &str = "assets/models/3D_smartwatch/scene.gltf";
pub const POPCORN_ASSET: &str = "assets/models/3D_popcorn/scene.gltf";

// Modal copy
pub const MODAL_TITLE: &str = "Electronics Insurance";
pub const MODAL_SUBTITLE: &str = "Smartwatch insured since 04/12/2025";
pub const CLOSE_LABEL: &str = "Close";

// Modal styling
pub const OVERLAY_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
background-color:rgba(0,0,0,0.5);z-index:1000;display:none;opacity:0;\
transition:opacity 0.3s ease-in-out;font-family:Roboto,sans-serif";
pub const PANEL_STYLE: &str = "position:fixed;top:0;right:-100%;width:100%;height:100%;\
background-color:white;overflow:auto;z-index:1001;display:none;\
transition:right 0.4s ease-in-out";
pub const CONTENT_STYLE: &str = "padding:20px;display:flex;flex-direction:column;\
align-items:center;justify-content:center;text-align:center;max-width:500px;\
margin:0 auto;height:100%";
pub const CLOSE_BUTTON_STYLE: &str = "position:absolute;top:10px;left:20px;background:none;\
border:none;cursor:pointer;padding:10px;display:flex;align-items:center;justify-content:center";
pub const MODEL_MOUNT_STYLE: &str = "width:100%;height:35vh;min-height:250px;margin-bottom:10px;\
position:relative;overflow:hidden";
pub const SINK_STYLE: &str = "position:absolute;top:50%;left:50%;transform:translate(-50%,-50%)";
pub const CANVAS_STYLE: &str = "display:block;touch-action:none";
pub const TITLE_STYLE: &str = "margin:10px 0 5px";
pub const SUBTITLE_STYLE: &str = "margin:0;color:#555";
pub const TRIGGER_CURSOR: &str = "pointer";

// Panel offsets driven through the `right` transition
pub const PANEL_RIGHT_IN: &str = "0";
pub const PANEL_RIGHT_OUT: &str = "-100%";

pub const CLOSE_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 320 512" width="24" height="24"><path d="M9.4 233.4c-12.5 12.5-12.5 32.8 0 45.3l192 192c12.5 12.5 32.8 12.5 45.3 0s12.5-32.8 0-45.3L77.3 256 246.6 86.6c12.5-12.5 12.5-32.8 0-45.3s-32.8-12.5-45.3 0l-192 192z" fill="#000000"/></svg>"##;
