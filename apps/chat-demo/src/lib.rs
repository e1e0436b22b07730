//! Scripted, headless run of the chat screen.
//!
//! Opens the accent sheet, drags it, releases, optionally picks an accent,
//! and prints one line per frame so the sheet motion can be inspected without
//! a window.

use std::io::Write;
use std::time::Duration;

use accent_chat::{ChatOptions, ChatScreen, ScreenEvent};
use accent_foundation::PointerEvent;
use accent_graphics::Color;
use accent_sheet::{SheetConfig, SheetState};
use anyhow::{bail, Context};
use web_time::Instant;

/// ~60 FPS.
pub const DEFAULT_FRAME_NANOS: u64 = 16_666_667;

/// Frames a single settle phase may take before the run is aborted.
const MAX_SETTLE_FRAMES: u64 = 10_000;

const POINTER_X: f32 = 200.0;
const POINTER_START_Y: f32 = 400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoOptions {
    pub sheet: SheetConfig,
    /// Total vertical drag applied to the open sheet.
    pub drag: f32,
    pub drag_steps: usize,
    /// Palette entry to pick once the drag has settled.
    pub accent_index: Option<usize>,
    /// Pace frames against the wall clock instead of simulating time.
    pub realtime: bool,
    pub frame_nanos: u64,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            drag: 200.0,
            drag_steps: 12,
            accent_index: Some(3),
            realtime: false,
            frame_nanos: DEFAULT_FRAME_NANOS,
        }
    }
}

impl DemoOptions {
    pub fn with_sheet(mut self, sheet: SheetConfig) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_drag(mut self, drag: f32, steps: usize) -> Self {
        self.drag = drag;
        self.drag_steps = steps.max(1);
        self
    }

    pub fn with_accent(mut self, index: Option<usize>) -> Self {
        self.accent_index = index;
        self
    }

    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }
}

/// What a finished run ended up with.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub frames: u64,
    pub events: Vec<ScreenEvent>,
    pub final_state: SheetState,
    pub accent: Color,
}

enum FrameClock {
    Simulated { now: u64, step: u64 },
    Realtime { origin: Instant, frames: u64, step: u64 },
}

impl FrameClock {
    fn new(realtime: bool, step: u64) -> Self {
        if realtime {
            FrameClock::Realtime {
                origin: Instant::now(),
                frames: 0,
                step,
            }
        } else {
            FrameClock::Simulated { now: 0, step }
        }
    }

    /// Timestamp of the next frame, sleeping until it is due when realtime.
    fn next_frame(&mut self) -> u64 {
        match self {
            FrameClock::Simulated { now, step } => {
                *now += *step;
                *now
            }
            FrameClock::Realtime {
                origin,
                frames,
                step,
            } => {
                *frames += 1;
                let due = Duration::from_nanos(*frames * *step);
                let elapsed = origin.elapsed();
                if due > elapsed {
                    std::thread::sleep(due - elapsed);
                }
                origin.elapsed().as_nanos() as u64
            }
        }
    }
}

struct Run<'a, W: Write> {
    screen: ChatScreen,
    clock: FrameClock,
    out: &'a mut W,
    frames: u64,
    events: Vec<ScreenEvent>,
}

impl<W: Write> Run<'_, W> {
    fn frame(&mut self) -> anyhow::Result<()> {
        let time = self.clock.next_frame();
        let events = self.screen.on_frame(time);
        self.frames += 1;
        let state = self.screen.sheet_state();
        writeln!(
            self.out,
            "{:>5} {:>9.1}ms offset={:>8.2} open={}",
            self.frames,
            time as f64 / 1_000_000.0,
            state.vertical_offset,
            state.is_open
        )
        .context("writing frame line")?;
        for event in events {
            writeln!(self.out, "      -> {event:?}").context("writing event line")?;
            self.events.push(event);
        }
        Ok(())
    }

    fn settle(&mut self, phase: &str) -> anyhow::Result<()> {
        for _ in 0..MAX_SETTLE_FRAMES {
            if self.screen.is_idle() {
                log::info!("{phase}: settled after {} frames", self.frames);
                return Ok(());
            }
            self.frame()?;
        }
        bail!("{phase}: still animating after {MAX_SETTLE_FRAMES} frames");
    }

    fn drag(&mut self, total: f32, steps: usize) -> anyhow::Result<()> {
        self.screen
            .pointer(&PointerEvent::down(POINTER_X, POINTER_START_Y));
        for i in 1..=steps {
            let y = POINTER_START_Y + total * i as f32 / steps as f32;
            self.screen.pointer(&PointerEvent::moved(POINTER_X, y));
            self.frame()?;
        }
        self.screen
            .pointer(&PointerEvent::up(POINTER_X, POINTER_START_Y + total));
        Ok(())
    }
}

/// Run the scripted session, writing one line per frame to `out`.
pub fn run<W: Write>(options: &DemoOptions, out: &mut W) -> anyhow::Result<DemoReport> {
    let screen = ChatScreen::new(ChatOptions::default().with_sheet(options.sheet));
    let mut session = Run {
        screen,
        clock: FrameClock::new(options.realtime, options.frame_nanos.max(1)),
        out,
        frames: 0,
        events: Vec::new(),
    };

    log::info!("opening sheet");
    session.screen.tap_settings();
    session.frame()?;

    log::info!("dragging sheet by {:.1}", options.drag);
    session.drag(options.drag, options.drag_steps.max(1))?;
    session.settle("release")?;

    if let Some(index) = options.accent_index {
        if !session.screen.sheet_state().is_open {
            log::info!("sheet was dismissed; reopening to pick");
            session.screen.tap_settings();
            session.frame()?;
        }
        let Some(color) = session.screen.pick_accent(index) else {
            bail!(
                "no palette entry {index} (palette has {})",
                session.screen.palette().len()
            );
        };
        log::info!("picked accent {}", color.to_hex());
        session.settle("recolor")?;
    }

    Ok(DemoReport {
        frames: session.frames,
        final_state: session.screen.sheet_state(),
        accent: session.screen.accent(),
        events: session.events,
    })
}
