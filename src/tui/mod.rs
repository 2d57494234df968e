// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galene-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galene and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI shell.
//!
//! Hosts the browser and session windows as buffers in one terminal (ratatui +
//! crossterm). The shell owns window text, cursors and dirty markers; the core
//! tasks receive the resulting [`WindowEvent`]s over their channels and write
//! structured text back through the [`Window`] contract.
//!
//! Key map: Tab/BackTab cycle windows, arrows move the cursor, printable keys
//! edit the body, Ctrl-T executes the cursor line in the body, Ctrl-O opens
//! the note under the cursor, Ctrl-U/Ctrl-S/Ctrl-G execute Update/Put/Get,
//! Ctrl-W closes the focused window, Ctrl-Q quits.

use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Tabs},
};
use tokio::sync::mpsc;

use crate::window::{EventReceiver, EventSender, Host, HostIoError, Window, WindowEvent};

const FOCUS_COLOR: Color = Color::LightGreen;
const TAG_COLOR: Color = Color::Cyan;
const TOAST_COLOR: Color = Color::LightRed;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const POLL_INTERVAL: Duration = Duration::from_millis(250);
const TAB_DISPLAY_WIDTH: usize = 4;

#[derive(Debug, Default)]
struct ShellState {
    next_id: u64,
    windows: Vec<WindowBuf>,
    focused: usize,
    toast: Option<String>,
}

#[derive(Debug)]
struct WindowBuf {
    id: u64,
    name: String,
    tag: String,
    body: String,
    /// Byte offset into `body`; always on a char boundary.
    cursor: usize,
    dirty: bool,
    events: EventSender,
}

impl WindowBuf {
    fn send(&self, event: WindowEvent) {
        // The owning task may already be gone; the buffer outlives it.
        let _ = self.events.send(event);
    }

    fn line_start(&self) -> usize {
        self.body[..self.cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn line_end(&self) -> usize {
        self.body[self.line_start()..]
            .find('\n')
            .map(|i| self.line_start() + i)
            .unwrap_or(self.body.len())
    }

    fn current_line(&self) -> String {
        self.body[self.line_start()..self.line_end()].to_owned()
    }
}

/// Shared shell handle; clones cheaply into core tasks.
#[derive(Debug, Clone, Default)]
pub struct Shell {
    state: Arc<Mutex<ShellState>>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ShellState> {
        self.state.lock().expect("shell state lock poisoned")
    }
}

impl Host for Shell {
    type Window = ShellWindow;

    fn open_window(&self) -> Result<(ShellWindow, EventReceiver), HostIoError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.windows.push(WindowBuf {
            id,
            name: String::new(),
            tag: String::new(),
            body: String::new(),
            cursor: 0,
            dirty: false,
            events: tx,
        });
        state.focused = state.windows.len() - 1;
        Ok((ShellWindow { shell: self.clone(), id }, rx))
    }
}

/// Handle a core task uses to talk to its buffer in the shell.
#[derive(Debug, Clone)]
pub struct ShellWindow {
    shell: Shell,
    id: u64,
}

impl ShellWindow {
    fn with_buf<T>(&self, apply: impl FnOnce(&mut WindowBuf) -> T) -> Result<T, HostIoError> {
        let mut state = self.shell.lock();
        match state.windows.iter_mut().find(|buf| buf.id == self.id) {
            Some(buf) => Ok(apply(buf)),
            None => Err(HostIoError::Closed),
        }
    }
}

impl Window for ShellWindow {
    fn set_name(&self, name: &str) -> Result<(), HostIoError> {
        self.with_buf(|buf| buf.name = name.to_owned())
    }

    fn set_tag(&self, tag: &str) -> Result<(), HostIoError> {
        self.with_buf(|buf| buf.tag = tag.to_owned())
    }

    fn clear_body(&self) -> Result<(), HostIoError> {
        self.with_buf(|buf| {
            buf.body.clear();
            buf.cursor = 0;
        })
    }

    fn append_body(&self, text: &str) -> Result<(), HostIoError> {
        self.with_buf(|buf| buf.body.push_str(text))
    }

    fn read_body(&self) -> Result<String, HostIoError> {
        self.with_buf(|buf| buf.body.clone())
    }

    fn read_line(&self, line: usize) -> Result<String, HostIoError> {
        self.with_buf(|buf| {
            buf.body
                .lines()
                .nth(line.saturating_sub(1))
                .unwrap_or_default()
                .to_owned()
        })
    }

    fn set_dirty(&self, dirty: bool) -> Result<(), HostIoError> {
        self.with_buf(|buf| buf.dirty = dirty)
    }

    fn scroll_to_top(&self) -> Result<(), HostIoError> {
        self.with_buf(|buf| buf.cursor = 0)
    }

    fn report_error(&self, message: &str) -> Result<(), HostIoError> {
        let mut state = self.shell.lock();
        let name = match state.windows.iter().find(|buf| buf.id == self.id) {
            Some(buf) => buf.name.clone(),
            None => return Err(HostIoError::Closed),
        };
        state.toast = Some(if name.is_empty() {
            message.to_owned()
        } else {
            format!("{name}: {message}")
        });
        Ok(())
    }

    fn forward(&self, event: &WindowEvent) -> Result<(), HostIoError> {
        if let WindowEvent::ExecTag { text } = event {
            let message = format!("unknown command: {text}");
            return self.report_error(&message);
        }
        Ok(())
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the shell loop on the calling thread until the user quits.
pub fn run(shell: Shell) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut should_quit = false;

    while !should_quit {
        terminal.draw(|frame| draw(frame, &shell))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(&shell, key) {
                        should_quit = true;
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}

fn handle_key(shell: &Shell, key: KeyEvent) -> bool {
    let mut state = shell.lock();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('w') => close_focused(&mut state),
            KeyCode::Char('u') => exec_tag_word(&state, "Update"),
            KeyCode::Char('s') => exec_tag_word(&state, "Put"),
            KeyCode::Char('g') => exec_tag_word(&state, "Get"),
            KeyCode::Char('t') => exec_body_at_cursor(&state),
            KeyCode::Char('o') => look_at_cursor(&state),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Tab => cycle_focus(&mut state, 1),
        KeyCode::BackTab => cycle_focus(&mut state, -1),
        KeyCode::Esc => state.toast = None,
        KeyCode::Left => move_horizontal(&mut state, false),
        KeyCode::Right => move_horizontal(&mut state, true),
        KeyCode::Up => move_vertical(&mut state, false),
        KeyCode::Down => move_vertical(&mut state, true),
        KeyCode::Enter => insert_text(&mut state, "\n"),
        KeyCode::Backspace => delete_before_cursor(&mut state),
        KeyCode::Char(c) => insert_text(&mut state, &c.to_string()),
        _ => {}
    }
    false
}

fn focused(state: &ShellState) -> Option<&WindowBuf> {
    state.windows.get(state.focused)
}

fn focused_mut(state: &mut ShellState) -> Option<&mut WindowBuf> {
    let index = state.focused;
    state.windows.get_mut(index)
}

fn cycle_focus(state: &mut ShellState, step: isize) {
    if state.windows.is_empty() {
        return;
    }
    let count = state.windows.len() as isize;
    state.focused = ((state.focused as isize + step).rem_euclid(count)) as usize;
}

fn close_focused(state: &mut ShellState) {
    if state.windows.is_empty() {
        return;
    }
    // Dropping the buffer drops the sender; the owning task sees its event
    // stream end and winds down.
    let index = state.focused;
    state.windows.remove(index);
    if state.focused >= state.windows.len() && state.focused > 0 {
        state.focused -= 1;
    }
}

fn exec_tag_word(state: &ShellState, word: &str) {
    if let Some(buf) = focused(state) {
        buf.send(WindowEvent::ExecTag { text: word.to_owned() });
    }
}

fn exec_body_at_cursor(state: &ShellState) {
    if let Some(buf) = focused(state) {
        buf.send(WindowEvent::ExecBody { text: buf.current_line(), offset: buf.cursor });
    }
}

fn look_at_cursor(state: &ShellState) {
    if let Some(buf) = focused(state) {
        buf.send(WindowEvent::Look { offset: buf.cursor });
    }
}

fn insert_text(state: &mut ShellState, text: &str) {
    if let Some(buf) = focused_mut(state) {
        let offset = buf.cursor;
        buf.body.insert_str(offset, text);
        buf.cursor += text.len();
        buf.send(WindowEvent::Insert { offset, text: text.to_owned() });
    }
}

fn delete_before_cursor(state: &mut ShellState) {
    if let Some(buf) = focused_mut(state) {
        if buf.cursor == 0 {
            return;
        }
        let start = prev_char_boundary(&buf.body, buf.cursor);
        let end = buf.cursor;
        buf.body.replace_range(start..end, "");
        buf.cursor = start;
        buf.send(WindowEvent::Delete { start, end });
    }
}

fn move_horizontal(state: &mut ShellState, forward: bool) {
    if let Some(buf) = focused_mut(state) {
        buf.cursor = if forward {
            next_char_boundary(&buf.body, buf.cursor)
        } else {
            prev_char_boundary(&buf.body, buf.cursor)
        };
    }
}

fn move_vertical(state: &mut ShellState, down: bool) {
    let Some(buf) = focused_mut(state) else {
        return;
    };
    let line_start = buf.line_start();
    let column = buf.cursor - line_start;

    let target = if down {
        let Some(next_start) =
            buf.body[buf.cursor..].find('\n').map(|i| buf.cursor + i + 1)
        else {
            return;
        };
        let next_end = buf.body[next_start..]
            .find('\n')
            .map(|i| next_start + i)
            .unwrap_or(buf.body.len());
        (next_start + column).min(next_end)
    } else {
        if line_start == 0 {
            return;
        }
        let prev_end = line_start - 1;
        let prev_start = buf.body[..prev_end].rfind('\n').map(|i| i + 1).unwrap_or(0);
        (prev_start + column).min(prev_end)
    };

    buf.cursor = snap_to_char_boundary(&buf.body, target);
}

fn prev_char_boundary(text: &str, offset: usize) -> usize {
    text[..offset].chars().next_back().map(|c| offset - c.len_utf8()).unwrap_or(0)
}

fn next_char_boundary(text: &str, offset: usize) -> usize {
    text[offset..].chars().next().map(|c| offset + c.len_utf8()).unwrap_or(offset)
}

fn snap_to_char_boundary(text: &str, mut offset: usize) -> usize {
    offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

fn draw(frame: &mut Frame<'_>, shell: &Shell) {
    let state = shell.lock();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    draw_tabs(frame, rows[0], &state);
    draw_tag(frame, rows[1], &state);
    draw_body(frame, rows[2], &state);
    frame.render_widget(footer_help_line(), rows[3]);
    draw_toast(frame, rows[4], &state);
}

fn draw_tabs(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let titles: Vec<Line<'_>> = state.windows.iter().map(|buf| Line::from(tab_title(buf))).collect();
    let tabs = Tabs::new(titles)
        .select(state.focused)
        .highlight_style(Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn tab_title(buf: &WindowBuf) -> String {
    let marker = if buf.dirty { "*" } else { "" };
    let name = if buf.name.is_empty() { "(unnamed)" } else { &buf.name };
    format!("{marker}{name}")
}

fn draw_tag(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let tag = focused(state).map(|buf| buf.tag.as_str()).unwrap_or_default();
    frame.render_widget(
        Paragraph::new(tag).style(Style::default().fg(TAG_COLOR)),
        area,
    );
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let Some(buf) = focused(state) else {
        frame.render_widget(Paragraph::new("no windows, press Ctrl-Q to quit"), area);
        return;
    };

    let (cursor_row, cursor_col) = cursor_position(buf);
    let height = area.height.max(1) as usize;
    let scroll = cursor_row.saturating_sub(height - 1);

    let text: Vec<Line<'_>> =
        buf.body.split('\n').map(|line| Line::from(expand_tabs(line))).collect();
    frame.render_widget(Paragraph::new(text).scroll((scroll as u16, 0)), area);

    let x = area.x + (cursor_col as u16).min(area.width.saturating_sub(1));
    let y = area.y + (cursor_row - scroll) as u16;
    frame.set_cursor(x, y);
}

/// (row, display column) of the cursor, counting tabs as their display width.
fn cursor_position(buf: &WindowBuf) -> (usize, usize) {
    let before = &buf.body[..buf.cursor];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..]
        .chars()
        .map(|c| if c == '\t' { TAB_DISPLAY_WIDTH } else { 1 })
        .sum();
    (row, column)
}

fn expand_tabs(line: &str) -> String {
    line.replace('\t', "    ")
}

fn draw_toast(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    if let Some(toast) = &state.toast {
        frame.render_widget(
            Paragraph::new(toast.as_str()).style(Style::default().fg(TOAST_COLOR)),
            area,
        );
    }
}

fn footer_help_line() -> Paragraph<'static> {
    let key = Style::default().fg(FOOTER_KEY_COLOR);
    let label = Style::default().fg(FOOTER_LABEL_COLOR);
    let spans = vec![
        Span::styled("^T", key),
        Span::styled(" toggle  ", label),
        Span::styled("^O", key),
        Span::styled(" open  ", label),
        Span::styled("^U", key),
        Span::styled(" update  ", label),
        Span::styled("^S", key),
        Span::styled(" put  ", label),
        Span::styled("^G", key),
        Span::styled(" get  ", label),
        Span::styled("Tab", key),
        Span::styled(" windows  ", label),
        Span::styled("^W", key),
        Span::styled(" close  ", label),
        Span::styled("^Q", key),
        Span::styled(" quit", label),
    ];
    Paragraph::new(Line::from(spans))
}
