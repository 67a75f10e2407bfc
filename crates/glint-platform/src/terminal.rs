//! Interactive terminal runner.
//!
//! Single-threaded, cooperative loop: compose a frame when one is
//! requested, paint it, then wait for either a key press or the next timer
//! deadline. State mutations and timer callbacks interleave on this one
//! thread, never in parallel.

use std::io::{Write, stdout};
use std::rc::Rc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute, queue};
use web_time::Duration;

use glint_core::host::{self, HostPage};
use glint_core::{runtime, time, timers};
use glint_ui::color::Color;
use glint_ui::paint::{Scene, paint};
use glint_ui::view::View;

const IDLE_POLL: Duration = Duration::from_millis(250);

struct TerminalPage;

impl HostPage for TerminalPage {
    fn set_title(&self, title: &str) {
        let _ = execute!(stdout(), SetTitle(title));
    }
}

/// Restores the terminal on drop, including on unwind.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.0,
        g: c.1,
        b: c.2,
    }
}

fn draw(scene: &Scene) -> Result<()> {
    let mut out = stdout();
    queue!(
        out,
        cursor::MoveTo(0, 0),
        Clear(ClearType::All),
        SetBackgroundColor(term_color(scene.background)),
    )?;
    for line in &scene.lines {
        queue!(out, SetForegroundColor(term_color(line.fg)))?;
        if line.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(&line.text), Print("\r\n"))?;
        if line.bold {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Runs `root` until the user quits with `q` or Esc. Runtime shutdown (which
/// cancels every live interval) happens before the terminal is restored.
pub fn run_terminal_app(mut root: impl FnMut() -> View + 'static) -> Result<()> {
    host::install_page(Rc::new(TerminalPage));
    time::set_clock(Rc::new(time::SystemClock));

    let guard = RawModeGuard::enter()?;
    let mut scene: Option<Scene> = None;

    loop {
        if runtime::take_frame_request() {
            let view = runtime::compose_frame(&mut root);
            let painted = paint(&view);
            draw(&painted)?;
            scene = Some(painted);
        }

        let timeout = timers::next_deadline()
            .map(|d| d.saturating_duration_since(time::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(c) => {
                        if let Some(scene) = &scene {
                            if !scene.activate(c) {
                                log::debug!("unbound key '{c}'");
                            }
                        }
                    }
                    _ => {}
                },
                Event::Resize(..) => runtime::request_frame(),
                _ => {}
            }
        }

        timers::run_due();
    }

    runtime::shutdown();
    drop(guard);
    Ok(())
}
