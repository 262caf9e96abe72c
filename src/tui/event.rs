use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    ForceQuit, // Ctrl+C
    Escape,
    InputChar(char),
    Backspace,
    CycleCategory, // Tab
    MouseDown(MouseButton, u16, u16),
    MouseDrag(u16, u16),
    MouseMove(u16, u16),
    MouseUp(MouseButton, u16, u16),
    ScrollUp(u16, u16),
    ScrollDown(u16, u16),
    FocusLost,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => match event::read() {
            Ok(ev) => translate(ev),
            Err(e) => {
                log::warn!("Failed to read terminal event: {}", e);
                None
            }
        },
        Ok(false) => None,
        Err(e) => {
            log::warn!("Failed to poll terminal events: {}", e);
            None
        }
    }
}

fn translate(ev: Event) -> Option<TuiEvent> {
    match ev {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Tab) => Some(TuiEvent::CycleCategory),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => {
            let (col, row) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(button) => Some(TuiEvent::MouseDown(button, col, row)),
                MouseEventKind::Drag(_) => Some(TuiEvent::MouseDrag(col, row)),
                MouseEventKind::Moved => Some(TuiEvent::MouseMove(col, row)),
                MouseEventKind::Up(button) => Some(TuiEvent::MouseUp(button, col, row)),
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp(col, row)),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown(col, row)),
                _ => None,
            }
        }
        Event::FocusLost => Some(TuiEvent::FocusLost),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
