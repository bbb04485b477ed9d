use egui::{Context, Key, Modifiers, Pos2, Rect};

pub mod controller;

pub use controller::{
    DragMode, InteractionController, InteractionState, PointerDownOutcome, Session,
};

/// Pointer activity on the canvas, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed over the canvas
    Down { position: Pos2 },
    /// Pointer moved, anywhere in the window
    Move { position: Pos2 },
    /// Primary button released, anywhere in the window
    Up,
}

/// Keyboard shortcuts that edit the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    DeleteSelected,
    DuplicateSelected,
    Deselect,
}

/// Handles converting raw egui input into canvas events
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Process raw egui input and generate pointer events.
    ///
    /// Presses only count inside the canvas rect, and only while the canvas
    /// is hovered rather than a popup above it. Moves and releases count
    /// anywhere, so a drag that leaves the canvas still ends when the button
    /// goes up.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;

            if let Some(pos) = pointer.latest_pos() {
                if Some(pos) != self.last_pointer_pos {
                    events.push(PointerEvent::Move { position: pos });
                }
                self.last_pointer_pos = Some(pos);
            }

            if canvas_hovered && pointer.primary_pressed() {
                if let Some(pos) = pointer.interact_pos() {
                    if self.canvas_rect.contains(pos) {
                        events.push(PointerEvent::Down { position: pos });
                    }
                }
            }

            if pointer.primary_released() {
                events.push(PointerEvent::Up);
            }
        });

        events
    }

    /// Keyboard shortcuts, unless a text field has focus
    pub fn process_shortcuts(&self, ctx: &Context) -> Vec<EditCommand> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }

        let mut commands = Vec::new();
        ctx.input_mut(|input| {
            if input.consume_key(Modifiers::NONE, Key::Delete)
                || input.consume_key(Modifiers::NONE, Key::Backspace)
            {
                commands.push(EditCommand::DeleteSelected);
            }
            if input.consume_key(Modifiers::COMMAND, Key::D) {
                commands.push(EditCommand::DuplicateSelected);
            }
            if input.consume_key(Modifiers::NONE, Key::Escape) {
                commands.push(EditCommand::Deselect);
            }
        });
        commands
    }
}
