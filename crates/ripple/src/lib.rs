//! Ripple: an interactive 2D wave-field simulator.
//!
//! A grid of cells holds a scalar amplitude that evolves under the
//! discrete wave equation. Point sources inject a continuous sine drive;
//! walls drawn as line segments reflect waves and are pinned to zero.
//!
//! This is the facade crate that re-exports the public API from all
//! Ripple sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//!
//! let mut world = WaveWorld::new(WorldConfig::new(64, 48)).unwrap();
//! world.add_source(20, 24);
//! world.draw_wall(GridCoord::new(40, 0), GridCoord::new(40, 47));
//!
//! for _ in 0..120 {
//!     world.tick();
//! }
//!
//! let pixels = Renderer::new().render(&world.snapshot());
//! assert_eq!(pixels.len(), 64 * 48 * 4);
//! // Nothing crosses a full-height wall.
//! assert_eq!(world.snapshot().amplitude(GridCoord::new(50, 24)), Some(0.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | IDs, coordinates, parameters, sources, commands, errors |
//! | [`space`] | `ripple-space` | Grid geometry, Bresenham rasterization, viewport mapping |
//! | [`arena`] | `ripple-arena` | Field buffer ring, wall mask, `GridState`, `Snapshot` |
//! | [`propagators`] | `ripple-propagators` | Wave integrator, injection plan, diagnostics |
//! | [`render`] | `ripple-render` | Amplitude-to-colour contract, RGBA frames |
//! | [`engine`] | `ripple-engine` | `WaveWorld`, command ingress, realtime driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`ripple-core`).
pub use ripple_core as types;

/// Grid geometry and wall rasterization (`ripple-space`).
pub use ripple_space as space;

/// Field and wall storage (`ripple-arena`).
///
/// Most users only need [`arena::Snapshot`], also in the [`prelude`].
pub use ripple_arena as arena;

/// The wave integrator and field diagnostics (`ripple-propagators`).
pub use ripple_propagators as propagators;

/// Colour mapping and frame fill (`ripple-render`).
pub use ripple_render as render;

/// Worlds and drivers (`ripple-engine`).
///
/// [`engine::WaveWorld`] for direct stepping, [`engine::RealtimeWorld`]
/// for a background tick thread fed by commands.
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use ripple_core::{Command, DriveConfig, GridCoord, SourceRegistry, TickId, WaveParams};

    // Errors
    pub use ripple_core::{GridError, IngressError};
    pub use ripple_engine::ConfigError;
    pub use ripple_render::RenderError;

    // Space and storage
    pub use ripple_arena::{GridState, Snapshot};
    pub use ripple_space::{Grid2D, Viewport};

    // Integration and rendering
    pub use ripple_propagators::WaveIntegrator;
    pub use ripple_render::{Renderer, Rgba};

    // Engine
    pub use ripple_engine::{
        CommandSender, Frame, IngressQueue, RealtimeConfig, RealtimeWorld, StepMetrics, WaveWorld,
        WorldConfig,
    };
}
