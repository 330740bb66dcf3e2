//! Exported API, run in a JS host with `wasm-pack test`.
#![cfg(target_arch = "wasm32")]

use backgammon_diagram::Diagram;
use backgammon_diagram::xgid::STARTING_POSITION;
use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).expect("field present")
}

#[wasm_bindgen_test]
fn primitives_are_exported_as_tagged_objects() {
    let diagram = Diagram::new(None, JsValue::UNDEFINED).expect("default diagram");
    let primitives = diagram.primitives().expect("primitives");

    assert!(Array::is_array(&primitives));
    let list = Array::from(&primitives);
    assert_eq!(list.length() as usize, diagram.draw_primitives().len());
    assert_eq!(field(&list.get(0), "kind").as_string().as_deref(), Some("strokedRect"));
}

#[wasm_bindgen_test]
fn options_object_overrides_defaults() {
    let options = js_sys::Object::new();
    Reflect::set(&options, &"canvasWidth".into(), &800.into()).unwrap();

    let diagram = Diagram::new(Some(STARTING_POSITION.to_string()), options.into()).expect("diagram");

    assert_eq!(diagram.config().canvas_width, 800.0);
    assert_eq!(diagram.config().canvas_height, 560.0);
}

#[wasm_bindgen_test]
fn malformed_xgid_is_rejected() {
    assert!(Diagram::new(Some("XGID=bad".to_string()), JsValue::UNDEFINED).is_err());

    let mut diagram = Diagram::new(None, JsValue::UNDEFINED).expect("default diagram");
    assert!(diagram.set_position("-b----5-C---eE---c-e----B-:0:0:1:21:0:0:3:0:10").is_err());
    assert!(diagram.warnings().is_empty());
}

#[wasm_bindgen_test]
fn decoded_state_exposes_cube_and_bar() {
    let state = backgammon_diagram::diagram::decode_xgid("aa----E-C---eE---c-e----AA:1:-1:1:00:0:0:0:5:10")
        .expect("decodes");

    assert_eq!(field(&state, "cubeValue").as_f64(), Some(2.0));
    assert_eq!(field(&state, "cubeOwner").as_string().as_deref(), Some("opponent"));
    assert_eq!(field(&field(&state, "bar"), "player").as_f64(), Some(1.0));
    assert_eq!(field(&state, "matchLength").as_f64(), Some(5.0));
}
