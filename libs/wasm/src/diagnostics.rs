//! WASM-compatible error reporting.
//!
//! Converts mesh errors into plain JavaScript objects.

use triangle_mesh::MeshError;
use wasm_bindgen::prelude::*;

/// Category of a failed generation, for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    DegenerateInput,
    TooLarge,
    InvalidSettings,
}

impl From<&MeshError> for ErrorKind {
    fn from(err: &MeshError) -> Self {
        match err {
            MeshError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            MeshError::DegenerateInput { .. } => ErrorKind::DegenerateInput,
            MeshError::TooManyVertices { .. } | MeshError::TooManyTriangles { .. } => {
                ErrorKind::TooLarge
            }
            MeshError::InvalidSettings { .. } => ErrorKind::InvalidSettings,
        }
    }
}

/// A diagnostic message for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { generate_triangle_mesh(-1, true); }
/// // catch (diag) { console.log(diag.kind, diag.message); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Diagnostic {
    kind: ErrorKind,
    message: String,
}

#[wasm_bindgen]
impl Diagnostic {
    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Converts this diagnostic to a plain JavaScript object
    /// `{ kind, message }`.
    ///
    /// Plain objects can be posted between a worker and the main thread,
    /// unlike wasm-bindgen wrappers.
    pub fn to_js_object(&self) -> JsValue {
        use js_sys::{Object, Reflect};

        let obj = Object::new();
        // Setting a fresh key on a plain object cannot fail.
        let _ = Reflect::set(&obj, &JsValue::from_str("kind"), &JsValue::from(self.kind as i32));
        let _ = Reflect::set(
            &obj,
            &JsValue::from_str("message"),
            &JsValue::from_str(&self.message),
        );
        JsValue::from(obj)
    }
}

impl From<&MeshError> for Diagnostic {
    fn from(err: &MeshError) -> Self {
        Self {
            kind: err.into(),
            message: err.to_string(),
        }
    }
}
