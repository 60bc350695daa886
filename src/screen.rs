//! Terminal setup and teardown around the game loop

use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::{self, Write};

/// Switches to raw mode on the alternate screen and asks for key release
/// events when `keyboard_enhanced` is set.
pub fn enter<W: Write>(out: &mut W, title: &str, keyboard_enhanced: bool) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, SetTitle(title))?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if keyboard_enhanced {
        execute!(
            out,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }
    Ok(())
}

/// Undoes [`enter`]. Raw mode, the alternate screen and the cursor are
/// always restored; a failed keyboard flag pop is only logged.
pub fn restore<W: Write>(out: &mut W, keyboard_enhanced: bool) -> io::Result<()> {
    // Flags are stacked per screen, so pop while still on the alternate one
    if keyboard_enhanced {
        if let Err(err) = execute!(out, PopKeyboardEnhancementFlags) {
            log::warn!("Could not pop keyboard enhancement flags: {err}");
        }
    }

    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}
