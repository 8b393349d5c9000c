use clap::Parser;

use invaders_core::core::machine::Machine;
use invaders_machine::SpaceInvadersSystem;

mod config;
mod emulator;
mod input;
mod rom_path;
mod video;

/// Taito Space Invaders cabinet emulator.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a ROM ZIP, a MAME-style rompath directory, or a directory of
    /// loose ROM files (invaders.h/g/f/e).
    rom_path: String,

    /// Window scale factor.
    #[arg(long, default_value_t = 3)]
    scale: u32,

    /// Optional TOML file overriding key bindings and DIP switches.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let rom_set =
        rom_path::load_rom_set("invaders", &cli.rom_path).expect("failed to load ROM files");

    let mut machine = SpaceInvadersSystem::new();
    machine
        .load_rom_set(&rom_set)
        .expect("failed to map program ROMs");
    machine.reset();

    let mut key_map = input::default_key_map(machine.input_map());

    // DIP overrides must be applied after reset(): reset_io() re-zeroes the
    // DIP/input port, which would otherwise silently discard them.
    if let Some(config_path) = &cli.config {
        match config::Config::load(config_path) {
            Ok(cfg) => {
                input::apply_overrides(&mut key_map, machine.input_map(), &cfg.keys);
                if let Some(lives) = cfg.dip.lives {
                    machine.set_dip_lives(lives);
                }
                if let Some(on) = cfg.dip.bonus_life_at_1000 {
                    machine.set_dip_bonus_life_at_1000(on);
                }
                if let Some(on) = cfg.dip.hide_coin_info {
                    machine.set_dip_hide_coin_info(on);
                }
            }
            Err(e) => eprintln!("warning: {e}, continuing with defaults"),
        }
    }

    let machine: &mut dyn Machine = &mut machine;
    emulator::run(machine, &key_map, cli.scale);
}
