use std::collections::HashMap;

use invaders_core::core::machine::InputButton;
use sdl2::keyboard::Scancode;

/// Maps SDL scancodes to machine button IDs.
pub struct KeyMap {
    map: HashMap<Scancode, u8>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode to a machine button ID.
    pub fn bind(&mut self, scancode: Scancode, button_id: u8) {
        self.map.insert(scancode, button_id);
    }

    /// Look up the machine button ID for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<u8> {
        self.map.get(&scancode).copied()
    }
}

/// Build a default key map for this board's input buttons.
/// Uses name-based matching against `input_map()`'s display names, in the
/// idiom of the teacher's per-machine default key maps.
pub fn default_key_map(buttons: &[InputButton]) -> KeyMap {
    let mut km = KeyMap::new();

    for button in buttons {
        let scancode = match button.name {
            "P1 Left" => Some(Scancode::Left),
            "P1 Right" => Some(Scancode::Right),
            "P1 Fire" => Some(Scancode::LCtrl),
            "P1 Start" => Some(Scancode::Num1),

            "P2 Left" => Some(Scancode::A),
            "P2 Right" => Some(Scancode::D),
            "P2 Fire" => Some(Scancode::LShift),
            "P2 Start" => Some(Scancode::Num2),

            "Coin" => Some(Scancode::Num5),
            "Tilt" => Some(Scancode::T),

            _ => None,
        };

        if let Some(sc) = scancode {
            km.bind(sc, button.id);
        }
    }

    km
}

/// Apply config-file overrides on top of a default key map. Each entry maps
/// a button's display name (e.g. "P1 Fire") to an SDL scancode name (e.g.
/// "LCtrl"); unrecognized button or scancode names are reported and skipped
/// rather than treated as fatal.
pub fn apply_overrides(km: &mut KeyMap, buttons: &[InputButton], overrides: &HashMap<String, String>) {
    for (button_name, scancode_name) in overrides {
        let Some(button) = buttons.iter().find(|b| b.name == button_name) else {
            eprintln!("config: unknown input button \"{button_name}\", ignoring");
            continue;
        };
        let Some(scancode) = Scancode::from_name(scancode_name) else {
            eprintln!("config: unknown key name \"{scancode_name}\", ignoring");
            continue;
        };
        km.bind(scancode, button.id);
    }
}
