//! diagram-replay - run a scripted input session against an off-screen diagram.
//!
//! ```text
//! diagram-replay <script.json> [--config <config.json>]
//! ```
//!
//! The script declares the surface, the initial layers and a list of input
//! events. Each event is replayed and followed by a frame; the final state
//! and frame statistics are printed to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use diagram_core::constants::DEFAULT_ELEMENT_SIZE;
use diagram_core::{
    Diagram, DiagramConfig, DiagramOptions, Element, KeyEvent, PointerEvent, Rect,
    RecordingSurface, TouchEvent, WheelEvent, logging,
};
use serde::Deserialize;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    surface: SurfaceSpec,
    #[serde(default)]
    layers: Vec<LayerSpec>,
    #[serde(default)]
    events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SurfaceSpec {
    width: f64,
    height: f64,
    device_pixel_ratio: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            device_pixel_ratio: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LayerSpec {
    name: String,
    #[serde(default)]
    elements: Vec<ElementSpec>,
}

#[derive(Debug, Deserialize)]
struct ElementSpec {
    x: f64,
    y: f64,
    width: Option<f64>,
    height: Option<f64>,
    #[serde(default = "default_selectable")]
    selectable: bool,
}

fn default_selectable() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ScriptEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    DoubleClick(PointerEvent),
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    Wheel(WheelEvent),
    TouchStart(TouchEvent),
    TouchMove(TouchEvent),
    TouchEnd(TouchEvent),
    Blur,
    Resize { width: f64, height: f64 },
    SelectAll,
    SelectNone,
}

/// Replay a scripted input session against an off-screen diagram
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the replay script (JSON)
    script: PathBuf,

    /// Path to a diagram config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init_logging()?;
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DiagramConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DiagramConfig::default(),
    };

    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let script: Script = serde_json::from_str(&content).context("invalid replay script")?;

    let spec = &script.surface;
    let surface = RecordingSurface::new(spec.width, spec.height)
        .with_origin(spec.origin_x, spec.origin_y)
        .with_device_pixel_ratio(spec.device_pixel_ratio);

    let moves = Rc::new(RefCell::new(0usize));
    let move_counter = moves.clone();
    let options = DiagramOptions::new()
        .with_config(config)
        .on_move_complete(move |event| {
            info!(elements = event.elements.len(), "Move complete");
            *move_counter.borrow_mut() += 1;
        })
        .on_background_double_click(|world| info!(x = world.x, y = world.y, "Background double-click"))
        .on_element_double_click(|hit| info!(element = %hit.element_id, "Element double-click"));

    let mut diagram = Diagram::new(surface, options)?;
    populate(&mut diagram, &script.layers);
    diagram.render_frame();

    for event in &script.events {
        replay(&mut diagram, event);
        diagram.render_frame();
    }

    let stats = diagram.frame_stats();
    println!("{}", diagram.status_text());
    println!("selection: {} element(s)", diagram.selection().len());
    for id in diagram.selection().selection() {
        println!("  {id}");
    }
    println!("moves completed: {}", moves.borrow());
    println!(
        "frames: {} (avg {:.2}ms, max {:.2}ms)",
        stats.total_frames(),
        stats.average_frame_time(),
        stats.max_frame_time()
    );
    println!("draw commands: {}", diagram.surface().commands().len());

    diagram.detach();
    Ok(())
}

fn populate(diagram: &mut Diagram<RecordingSurface>, layers: &[LayerSpec]) {
    let stage = diagram.stage_mut();
    for layer in layers {
        let layer_id = stage.add_layer(layer.name.clone());
        for spec in &layer.elements {
            let bounds = Rect::new(
                spec.x,
                spec.y,
                spec.width.unwrap_or(DEFAULT_ELEMENT_SIZE.0),
                spec.height.unwrap_or(DEFAULT_ELEMENT_SIZE.1),
            );
            stage.add_element(layer_id, Element::rectangle(bounds).with_selectable(spec.selectable));
        }
    }
}

fn replay(diagram: &mut Diagram<RecordingSurface>, event: &ScriptEvent) {
    match event {
        ScriptEvent::PointerDown(e) => {
            diagram.handle_pointer_down(e);
        }
        ScriptEvent::PointerMove(e) => {
            diagram.handle_pointer_move(e);
        }
        ScriptEvent::PointerUp(e) => {
            diagram.handle_pointer_up(e);
        }
        ScriptEvent::DoubleClick(e) => {
            diagram.handle_double_click(e);
        }
        ScriptEvent::KeyDown(e) => {
            diagram.handle_key_down(e);
        }
        ScriptEvent::KeyUp(e) => {
            diagram.handle_key_up(e);
        }
        ScriptEvent::Wheel(e) => {
            diagram.handle_wheel(e);
        }
        ScriptEvent::TouchStart(e) => {
            diagram.handle_touch_start(e);
        }
        ScriptEvent::TouchMove(e) => {
            diagram.handle_touch_move(e);
        }
        ScriptEvent::TouchEnd(e) => diagram.handle_touch_end(e),
        ScriptEvent::Blur => diagram.handle_blur(),
        ScriptEvent::Resize { width, height } => diagram.resize(*width, *height),
        ScriptEvent::SelectAll => diagram.select_all(),
        ScriptEvent::SelectNone => diagram.select_none(),
    }
}
