//! WASM-facing entry points for triangular mesh generation.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `*_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let mesh = triangle_mesh_wasm::generate_triangle_mesh_internal(2, true).unwrap();
//! assert_eq!(mesh.vertex_count(), 6);
//! assert_eq!(mesh.triangle_count(), 4);
//! ```

use config::constants::DEFAULT_SUBDIVISIONS;
use js_sys::{Function, Reflect};
use triangle_mesh::{
    CallbackTarget, GeneratorSettings, MeshBuffers, MeshError, MeshTarget, TriangularMeshGenerator,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod diagnostics;
mod mesh_handle;

pub use diagnostics::{Diagnostic, ErrorKind};
pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "triangle-mesh-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the subdivision level the generator uses when none is given.
///
/// # Examples
/// ```
/// assert_eq!(triangle_mesh_wasm::default_subdivisions(), 300);
/// ```
#[wasm_bindgen]
pub fn default_subdivisions() -> u32 {
    DEFAULT_SUBDIVISIONS
}

/// Generates a triangular mesh with `subdivisions` rows.
///
/// # Errors
/// Throws a `{ kind, message }` object when `subdivisions` is negative or
/// the mesh would exceed the size limits.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_triangle_mesh(16, true);
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn generate_triangle_mesh(subdivisions: i32, generate_uvs: bool) -> Result<MeshHandle, JsValue> {
    generate_triangle_mesh_internal(subdivisions.into(), generate_uvs).map_err(to_js_error)
}

/// Host-only helper behind [`generate_triangle_mesh`] exposing Rust errors.
///
/// # Examples
/// ```
/// use triangle_mesh_wasm::generate_triangle_mesh_internal;
/// assert!(generate_triangle_mesh_internal(-1, true).is_err());
/// ```
pub fn generate_triangle_mesh_internal(
    subdivisions: i64,
    generate_uvs: bool,
) -> Result<MeshHandle, MeshError> {
    let mesh = triangle_mesh::build(subdivisions, generate_uvs)?;
    Ok(MeshHandle::from_mesh(config::constants::DEFAULT_MESH_NAME, &mesh))
}

/// Runs the mesh generator described by `settings_json` and notifies
/// `target` by calling its `callback_method` once the mesh is ready.
///
/// Missing settings take their defaults. Pass `null` or `undefined` as
/// `target` to skip the notification.
///
/// # Errors
/// Throws a `{ kind, message }` object if the settings are malformed or the
/// mesh cannot be built; the callback is not invoked in that case.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const listener = { OnMeshGenerated() { console.log("ready"); } };
/// // const mesh = generate_with_callback('{"subdivisions": 32}', listener);
/// ```
#[wasm_bindgen]
pub fn generate_with_callback(settings_json: &str, target: JsValue) -> Result<MeshHandle, JsValue> {
    let settings = GeneratorSettings::from_json(settings_json).map_err(to_js_error)?;
    let target = (!target.is_null() && !target.is_undefined()).then_some(JsCallbackTarget(target));
    run_generator_internal(settings, target).map_err(to_js_error)
}

/// Host-only helper behind [`generate_with_callback`], generic over the
/// callback target.
///
/// # Examples
/// ```
/// use triangle_mesh::{GeneratorSettings, NoCallback};
/// use triangle_mesh_wasm::run_generator_internal;
///
/// let settings = GeneratorSettings { subdivisions: 3, ..Default::default() };
/// let mesh = run_generator_internal::<NoCallback>(settings, None).unwrap();
/// assert_eq!(mesh.name(), "TriangularMesh");
/// ```
pub fn run_generator_internal<T: CallbackTarget>(
    settings: GeneratorSettings,
    target: Option<T>,
) -> Result<MeshHandle, MeshError> {
    TriangularMeshGenerator::generate(settings, target, &mut HandleSink)
}

fn to_js_error(err: MeshError) -> JsValue {
    Diagnostic::from(&err).to_js_object()
}

/// Converts the installed mesh into a [`MeshHandle`].
struct HandleSink;

impl MeshTarget for HandleSink {
    type Installed = MeshHandle;

    fn install_mesh(&mut self, name: &str, mesh: MeshBuffers) -> MeshHandle {
        MeshHandle::from_mesh(name, &mesh)
    }
}

/// A JavaScript object whose methods are invoked by name.
struct JsCallbackTarget(JsValue);

impl CallbackTarget for JsCallbackTarget {
    fn send_custom_event(&self, method: &str) {
        let function = Reflect::get(&self.0, &JsValue::from_str(method))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok());

        match function {
            Some(function) => {
                if let Err(err) = function.call0(&self.0) {
                    log::warn!("completion callback {method:?} threw: {err:?}");
                }
            }
            None => log::warn!("completion target has no method {method:?}"),
        }
    }
}
