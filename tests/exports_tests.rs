// The JS surface is wasm-only; check on the host that each entry point carries its export attribute.

const LIB_RS: &str = include_str!("../src/lib.rs");

/// Attribute lines directly above the first line starting with `item`.
fn attributes_of(item: &str) -> Vec<&'static str> {
    let lines: Vec<&str> = LIB_RS.lines().collect();
    let Some(at) = lines.iter().position(|l| l.starts_with(item)) else {
        panic!("{item} not found in lib.rs");
    };
    lines[..at]
        .iter()
        .rev()
        .take_while(|l| l.starts_with("#[") || l.starts_with("///"))
        .filter(|l| l.starts_with("#["))
        .copied()
        .collect()
}

#[test]
fn create_viewer_is_exported() {
    let attrs = attributes_of("pub fn create_viewer(");
    assert!(attrs.iter().any(|a| a.starts_with("#[wasm_bindgen")), "{attrs:?}");
}

#[test]
fn viewer_handle_is_exported() {
    assert!(attributes_of("pub struct ViewerHandle").contains(&"#[wasm_bindgen]"));
    assert!(attributes_of("impl ViewerHandle").contains(&"#[wasm_bindgen]"));
}

#[test]
fn start_runs_on_module_load() {
    assert_eq!(attributes_of("pub fn start("), vec!["#[wasm_bindgen(start)]"]);
}
