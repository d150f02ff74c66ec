//! # Mesh Generator
//!
//! Host-side component that builds the mesh once from its settings, hands
//! the buffers to a renderer and notifies a completion target.
//!
//! The host supplies two collaborators:
//! - a [`MeshTarget`] that takes ownership of the generated buffers
//! - an optional [`CompletionCallback`] naming a target and a method to
//!   invoke after installation
//!
//! ```rust
//! use triangle_mesh::{GeneratorSettings, MeshBuffers, MeshTarget, StartOutcome, TriangularMeshGenerator};
//!
//! #[derive(Default)]
//! struct Renderer(Option<MeshBuffers>);
//!
//! impl MeshTarget for Renderer {
//!     type Installed = usize;
//!
//!     fn install_mesh(&mut self, _name: &str, mesh: MeshBuffers) -> usize {
//!         let count = mesh.triangle_count();
//!         self.0 = Some(mesh);
//!         count
//!     }
//! }
//!
//! let settings = GeneratorSettings { subdivisions: 4, ..Default::default() };
//! let mut generator = TriangularMeshGenerator::without_callback(settings);
//! let mut renderer = Renderer::default();
//!
//! assert_eq!(generator.start(&mut renderer).unwrap(), StartOutcome::Installed(16));
//! assert_eq!(renderer.0.as_ref().unwrap().triangle_count(), 16);
//! assert_eq!(generator.start(&mut renderer).unwrap(), StartOutcome::AlreadyFinished);
//! ```

use config::constants::{
    DEFAULT_CALLBACK_METHOD, DEFAULT_GENERATE_UVS, DEFAULT_MESH_NAME, DEFAULT_SUBDIVISIONS,
};
use serde::{Deserialize, Serialize};

use crate::builder::{BuildOptions, TriangleMeshBuilder};
use crate::error::MeshError;
use crate::mesh::MeshBuffers;
use crate::subdivision::SubdivisionLevel;

/// Generator settings as exposed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Subdivision level; negative values are rejected when the generator starts.
    pub subdivisions: i64,
    /// Emit UV coordinates.
    pub generate_uvs: bool,
    /// Name the mesh is installed under.
    pub mesh_name: String,
    /// Method invoked on the completion target. Empty disables the callback.
    pub callback_method: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS as i64,
            generate_uvs: DEFAULT_GENERATE_UVS,
            mesh_name: DEFAULT_MESH_NAME.to_owned(),
            callback_method: DEFAULT_CALLBACK_METHOD.to_owned(),
        }
    }
}

impl GeneratorSettings {
    /// Parses settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, MeshError> {
        serde_json::from_str(json).map_err(|err| MeshError::invalid_settings(err.to_string()))
    }
}

/// Receives ownership of a generated mesh.
pub trait MeshTarget {
    /// Value handed back once a mesh is installed.
    type Installed;

    /// Installs `mesh` under `name`, replacing whatever was there.
    fn install_mesh(&mut self, name: &str, mesh: MeshBuffers) -> Self::Installed;
}

/// Something that can be notified by method name.
pub trait CallbackTarget {
    /// Invokes `method` on the target, with no payload.
    fn send_custom_event(&self, method: &str);
}

/// One-shot notification sent after a mesh has been installed.
///
/// Firing consumes the callback, so it can run at most once.
#[derive(Debug, Clone)]
pub struct CompletionCallback<T> {
    target: T,
    method: String,
}

impl<T: CallbackTarget> CompletionCallback<T> {
    /// Creates a callback invoking `method` on `target`.
    pub fn new(target: T, method: impl Into<String>) -> Self {
        Self {
            target,
            method: method.into(),
        }
    }

    /// Returns the method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Sends the notification. Returns false if the method name is empty and
    /// nothing was sent.
    pub fn fire(self) -> bool {
        if self.method.is_empty() {
            return false;
        }
        self.target.send_custom_event(&self.method);
        true
    }
}

/// Placeholder target for generators without a callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCallback;

impl CallbackTarget for NoCallback {
    fn send_custom_event(&self, _method: &str) {}
}

/// Lifecycle of a [`TriangularMeshGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Not started yet, or the last start failed.
    Pending,
    /// The mesh has been installed; further starts do nothing.
    Finished,
}

/// Result of [`TriangularMeshGenerator::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome<I> {
    /// The mesh was built and installed by this call, carrying what the
    /// target returned.
    Installed(I),
    /// An earlier call already installed the mesh.
    AlreadyFinished,
}

/// Builds the mesh described by its settings exactly once.
#[derive(Debug)]
pub struct TriangularMeshGenerator<T = NoCallback> {
    settings: GeneratorSettings,
    callback: Option<CompletionCallback<T>>,
    state: GeneratorState,
}

impl TriangularMeshGenerator<NoCallback> {
    /// Creates a generator with no completion callback.
    pub fn without_callback(settings: GeneratorSettings) -> Self {
        Self::new(settings, None)
    }
}

impl<T: CallbackTarget> TriangularMeshGenerator<T> {
    /// Creates a generator with an optional callback target. The callback
    /// uses the method named in `settings.callback_method`.
    pub fn new(settings: GeneratorSettings, target: Option<T>) -> Self {
        let callback = target.map(|t| CompletionCallback::new(t, settings.callback_method.clone()));
        Self {
            settings,
            callback,
            state: GeneratorState::Pending,
        }
    }

    /// Returns the settings.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Runs a fresh generator once and returns what `target` handed back
    /// for the installed mesh.
    ///
    /// # Errors
    ///
    /// Returns the builder's error unchanged; nothing is installed and the
    /// callback is not fired.
    pub fn generate<M: MeshTarget>(
        settings: GeneratorSettings,
        callback_target: Option<T>,
        target: &mut M,
    ) -> Result<M::Installed, MeshError> {
        Self::new(settings, callback_target).install(target)
    }

    /// Builds the mesh, installs it into `target` and fires the completion
    /// callback.
    ///
    /// # Errors
    ///
    /// Returns the builder's error unchanged. Nothing is installed, the
    /// callback is kept and the generator stays [`GeneratorState::Pending`].
    pub fn start<M: MeshTarget>(
        &mut self,
        target: &mut M,
    ) -> Result<StartOutcome<M::Installed>, MeshError> {
        if self.state == GeneratorState::Finished {
            log::debug!("generator for {:?} already finished", self.settings.mesh_name);
            return Ok(StartOutcome::AlreadyFinished);
        }
        self.install(target).map(StartOutcome::Installed)
    }

    fn install<M: MeshTarget>(&mut self, target: &mut M) -> Result<M::Installed, MeshError> {
        let mesh = self.build().inspect_err(|err| {
            log::warn!("failed to generate {:?}: {err}", self.settings.mesh_name);
        })?;

        log::info!(
            "installing mesh {:?} ({} vertices, {} triangles)",
            self.settings.mesh_name,
            mesh.vertex_count(),
            mesh.triangle_count(),
        );
        let installed = target.install_mesh(&self.settings.mesh_name, mesh);

        if let Some(callback) = self.callback.take() {
            let method = callback.method().to_owned();
            if callback.fire() {
                log::info!("sent completion event {method:?}");
            }
        }

        self.state = GeneratorState::Finished;
        Ok(installed)
    }

    fn build(&self) -> Result<MeshBuffers, MeshError> {
        let level = SubdivisionLevel::new(self.settings.subdivisions)?;
        let options = BuildOptions::default().with_uvs(self.settings.generate_uvs);
        TriangleMeshBuilder::new(options).build(level)
    }
}
