// clipboard-privacy/src/injector/keyboard.rs
//! Windows: synthetic Ctrl+V through the Win32 input API.

use winapi::um::winuser::{keybd_event, KEYEVENTF_KEYUP, VK_CONTROL};

use super::PasteSimulator;

const VK_V: u8 = 0x56;

#[derive(Debug, Default)]
pub struct KeyboardEventSimulator;

impl PasteSimulator for KeyboardEventSimulator {
    fn name(&self) -> &str {
        "keybd_event"
    }

    fn simulate_paste(&self) -> bool {
        // SAFETY: keybd_event takes plain values and has no pointer arguments.
        unsafe {
            keybd_event(VK_CONTROL as u8, 0, 0, 0);
            keybd_event(VK_V, 0, 0, 0);
            keybd_event(VK_V, 0, KEYEVENTF_KEYUP, 0);
            keybd_event(VK_CONTROL as u8, 0, KEYEVENTF_KEYUP, 0);
        }
        true
    }
}
