//! # Terminal Rendering
//!
//! Formats an engine snapshot for a terminal: a small data panel with the
//! current phase and the five upcoming event dates, optionally followed
//! by an ASCII moon disc shaded to the current phase.
//!
//! The shading walks the disc row by row: for each row the full disc
//! spans `[-x, x]` on an ellipse, and the terminator scales one limb by
//! `-cos(phase · 2π)` — the left limb while waxing, the right limb while
//! waning — so the lit portion grows from a sliver on the right to the
//! full disc and recedes to a sliver on the left.
//!
//! This module only reads the engine's query surface; all numeric work
//! happens in the engine and its collaborators.

use crate::config::Config;
use crate::engine::Engine;

/// The moon disc. Shading masks columns of this fixed art; it is never
/// mutated.
const MOON_ART: [&str; 24] = [
    r"                  .------------.                 ",
    r"             .---' o     .  .   `---.            ",
    r"          .-'   .    O    .       .  `-.         ",
    r"        .'@   @@@@@@@   .   @@@@@       `.       ",
    r"      .'@@  @@@@@@@@@@@    @@@@@@@   .    `.     ",
    r"     /    o @@@@@@@@@@@    @@@@@@@       .  \    ",
    r"    /@  o   @@@@@@@@@@@.    @@@@@@@   O      \   ",
    r"   /@@@   .   @@@@@@@o     @@@@@@@@@@     @@@ \  ",
    r"  /@@@@@               .  @@@@@@@@@@@@@ o @@@@ \ ",
    r"  |@@@@  O  `.-./  .       @@@@@@@@@@@@    @@  | ",
    r" / @@@@    --`-'       o      @@@@@@@@ @@@@     \ ",
    r" |@ @@@     @  `           .   @@     @@@@@@@   |",
    r" |      @           o          @      @@@@@@@   |",
    r" \       @@            .-.      @@@    @@@@  o  /",
    r"  | . @        @@@     `-'    . @@@@           | ",
    r"  \      @@   @@@@@ .            @@   .        / ",
    r"   \    @@@@  @\@@    /  .   O    .     o   . /  ",
    r"    \ o  @@     \ \  /          .    .       /   ",
    r"     \     .    .\.-.___    .      .   .-.  /    ",
    r"      `.          `-'                 `-' .'     ",
    r"        `.   o   / |      o    O   .    .'       ",
    r"          `-.   /      .       .     .-'         ",
    r"             `---.       .      .---'            ",
    r"                  `------------'                 ",
];

/// Render the moon disc shaded for `phase_fraction`, one string per art
/// row. `aspect` is the character cell width-to-height ratio.
pub fn moon_art_lines(phase_fraction: f64, aspect: f64) -> Vec<String> {
    let angular_phase = phase_fraction * std::f64::consts::TAU;
    let terminator_scale = -angular_phase.cos();

    let y_radius = MOON_ART.len() as f64 / 2.0;
    let x_radius = y_radius / aspect;

    let mut lines = Vec::with_capacity(MOON_ART.len());
    for (row, art) in MOON_ART.iter().enumerate() {
        // Edges of the full disc on this row
        let y = row as f64 + 0.5 - y_radius;
        let mut x_right = x_radius * (1.0 - (y * y) / (y_radius * y_radius)).sqrt();
        let mut x_left = -x_right;

        // Scale one limb to the terminator: the left while waxing, the
        // right while waning.
        if angular_phase < std::f64::consts::PI {
            x_left *= terminator_scale;
        } else {
            x_right *= terminator_scale;
        }

        let center = (x_radius + 0.5) as i32;
        let col_left = (center + (x_left + 0.5) as i32).max(0) as usize;
        let col_right = (center + (x_right + 0.5) as i32).max(0) as usize;

        let mut line = String::with_capacity(col_right);
        let art_bytes = art.as_bytes();
        for col in 0..col_right {
            if col < col_left {
                line.push(' ');
            } else {
                line.push(*art_bytes.get(col).unwrap_or(&b' ') as char);
            }
        }
        lines.push(line);
    }
    lines
}

/// Render the full report to stdout: data panel, event dates, and
/// (config permitting) the shaded moon.
pub fn draw_ascii(engine: &Engine, config: &Config) {
    let moon = engine.moon();
    let dates = engine.upcoming_phase_dates();

    println!();
    println!("\t\t\tPhases of the Moon");
    println!("{}", "-".repeat(64));
    println!(
        "Date: {}\t\tJulian Date: {}",
        engine.date_string(),
        engine.julian_date()
    );
    println!("Current Phase: {}", engine.phase_label());
    println!(
        "Illuminated: {:.1}%\tAge: {:.1} days",
        moon.illuminated_fraction * 100.0,
        moon.age_days
    );
    println!(
        "Distance: {:.0} km\tAngular Diameter: {:.3}\u{00b0}",
        moon.distance_km, moon.angular_diameter_deg
    );
    println!();
    println!("New Moon: {}\t\tFirst Quarter Moon: {}", dates[0], dates[1]);
    println!("Full Moon: {}\t\tLast Quarter Moon: {}", dates[2], dates[3]);
    println!("Next New Moon: {}", dates[4]);
    println!("{}", "-".repeat(64));

    if config.display.show_moon_art {
        println!();
        for line in moon_art_lines(engine.phase_fraction(), config.display.moon_aspect) {
            println!("{}", line);
        }
    }
}
