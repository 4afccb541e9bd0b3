//! diagram-core - an interactive 2D diagramming engine.
//!
//! A pannable, zoomable canvas of positioned elements organized into ordered
//! layers, with hit-testing, rectangle selection and dragging. All
//! interaction is routed through a stack of input modes.
//!
//! ```ignore
//! use diagram_core::{Diagram, DiagramOptions, Element, RecordingSurface, Rect};
//!
//! let mut diagram = Diagram::new(RecordingSurface::new(800.0, 600.0), DiagramOptions::new())?;
//! let layer = diagram.stage_mut().add_layer("content");
//! diagram.stage_mut().add_element(layer, Element::rectangle(Rect::new(100.0, 100.0, 300.0, 100.0)));
//! diagram.render_frame();
//! ```

pub mod config;
pub mod constants;
pub mod diagram;
pub mod element;
pub mod error;
pub mod input;
pub mod logging;
pub mod modes;
pub mod perf;
pub mod render;
pub mod selection;
pub mod spatial_index;
pub mod stage;
pub mod types;

pub use config::{DiagramConfig, ZoomRange};
pub use diagram::{Diagram, DiagramContext, DiagramOptions, MoveComplete, MovedElement, Viewport};
pub use element::{CustomElement, Element, ElementKind};
pub use error::{ConfigError, ConfigResult, DiagramError, DiagramResult};
pub use input::{
    InputTarget, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerInfo,
    TouchEvent, WheelEvent,
};
pub use modes::{DragSelectMode, IdleMode, Mode, ModeStack, MoveMode, PanMode, Transition};
pub use render::{
    Color, DrawCommand, DrawingContext, RecordingSurface, RenderContext, RenderSurface, Theme,
};
pub use selection::SelectionManager;
pub use spatial_index::{ElementHit, GeometryIndex};
pub use stage::{ElementChange, ElementChangeKind, Layer, StageManager};
pub use types::{CursorStyle, ElementId, LayerId, Point, Rect, Size};
