// ABOUTME: Command-line replay of pointer scripts against a split container.
// ABOUTME: Acts as a controlled caller, adopting every proposed size array it is handed.

mod script;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use sash_core::SplitConfig;
use sash_layout::{PointerEvent, SashContent, SplitFrame, SplitPane};

use script::{Script, ScriptEvent};

struct App {
    split: SplitPane,
    /// Latest proposal from the container, adopted after each event
    pending: Rc<RefCell<Option<Vec<f64>>>>,
    /// Cross-axis size used to hit test presses that name no divider
    cross_extent: f64,
    epoch: Instant,
}

impl App {
    fn new(config: SplitConfig, cross_extent: f64) -> Self {
        tracing::info!(
            "Loaded config: {} panes, split={:?}, performance_mode={}",
            config.pane_count(),
            config.split,
            config.performance_mode
        );

        let pending = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&pending);
        let split = SplitPane::new(config)
            .on_change(move |sizes: &[f64]| *sink.borrow_mut() = Some(sizes.to_vec()))
            .on_drag_start(|event: &PointerEvent| {
                tracing::info!("Drag started at {:?}", event.position)
            })
            .on_drag_end(|event: &PointerEvent| {
                tracing::info!("Drag ended at {:?}", event.position)
            });

        Self {
            split,
            pending,
            cross_extent,
            epoch: Instant::now(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.epoch + Duration::from_millis(ms)
    }

    fn handle(&mut self, event: &ScriptEvent) {
        match *event {
            ScriptEvent::Resize { extent } => self.split.update_extent(extent),
            ScriptEvent::Enter { sash, at_ms } => self.split.pointer_enter(sash, self.at(at_ms)),
            ScriptEvent::Leave { sash } => self.split.pointer_leave(sash),
            ScriptEvent::Tick { at_ms } => {
                if self.split.tick(self.at(at_ms)) {
                    tracing::debug!("Hover state changed at {}ms", at_ms);
                }
            }
            ScriptEvent::Down { sash, x, y } => {
                let target = sash.or_else(|| self.split.frame().hit_sash(x, y, self.cross_extent));
                match target {
                    Some(sash) => {
                        if !self.split.pointer_down(sash, PointerEvent::at(x, y)) {
                            tracing::warn!("Press on divider {} did not start a drag", sash);
                        }
                    }
                    None => tracing::debug!("Press at ({}, {}) missed every divider", x, y),
                }
            }
            ScriptEvent::Move { x, y } => {
                self.split.pointer_move(PointerEvent::at(x, y));
            }
            ScriptEvent::Up { x, y } => {
                self.split.pointer_up(PointerEvent::at(x, y));
            }
        }

        let adopted = self.pending.borrow_mut().take();
        if let Some(sizes) = adopted {
            self.split.set_pixel_sizes(&sizes);
        }
    }
}

fn describe(frame: &SplitFrame<SashContent>) -> String {
    let panes: Vec<String> = frame
        .panes
        .iter()
        .map(|p| format!("{:.1}@{:.1}", p.size, p.offset))
        .collect();
    let sashes: Vec<String> = frame
        .sashes
        .iter()
        .map(|s| format!("{:.1}{}", s.offset, if s.content.active { "*" } else { "" }))
        .collect();
    format!(
        "panes [{}] sashes [{}]{}",
        panes.join(", "),
        sashes.join(", "),
        if frame.dragging { " dragging" } else { "" }
    )
}

fn describe_rects(frame: &SplitFrame<SashContent>, cross_extent: f64) -> Vec<String> {
    frame
        .pane_rects(cross_extent)
        .iter()
        .enumerate()
        .map(|(index, r)| {
            format!(
                "pane {}: {:.1},{:.1} {:.1}x{:.1}",
                index, r.x, r.y, r.width, r.height
            )
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let script_path = PathBuf::from(
        args.next()
            .context("usage: sash-replay <script.json> [config.toml]")?,
    );
    let config = match args.next() {
        Some(path) => SplitConfig::load(Path::new(&path))
            .with_context(|| format!("Failed to load config {}", path))?,
        None => SplitConfig::load_or_default(),
    };
    let script = Script::load(&script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;

    tracing::info!("Replaying {} events", script.events.len());

    let mut app = App::new(config, script.cross_extent);
    app.split.update_extent(script.extent);
    println!("start: {}", describe(&app.split.frame()));

    for (step, event) in script.events.iter().enumerate() {
        app.handle(event);
        println!("{:>3} {:?}: {}", step, event, describe(&app.split.frame()));
    }
    for line in describe_rects(&app.split.frame(), script.cross_extent) {
        println!("{}", line);
    }

    Ok(())
}
