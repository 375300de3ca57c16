//! SVG snapshot of a session: winner-shaded cells with district outlines.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::session::Session;
use crate::types::{Party, Winner};

/// Simple RGB color, formatted as CSS: rgb(r,g,b).
#[derive(Clone, Copy, Debug)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

fn party_color(party: Party) -> Rgb {
    match party {
        Party::Blue => Rgb { r: 5, g: 113, b: 176 },
        Party::Red => Rgb { r: 202, g: 0, b: 32 },
    }
}

fn winner_color(winner: Winner) -> Rgb {
    match winner {
        Winner::Party(party) => party_color(party),
        Winner::Tie => Rgb { r: 150, g: 150, b: 150 },
    }
}

/// Pixels per grid cell.
const CELL: usize = 20;
/// Inset of the voter marker inside its cell, in pixels.
const INSET: usize = 5;

impl Session {
    /// Write the current map to `path` as an SVG: each cell shaded by its
    /// district's winner, each voter marked with its own party, and district
    /// boundaries stroked where adjacent cells belong to different districts.
    pub fn to_svg(&self, path: &Path) -> Result<()> {
        let grid = self.grid();
        let partition = self.partition();
        let size = grid.width() * CELL;

        let file = File::create(path)
            .with_context(|| format!("[to_svg] Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
        )?;

        // Winner shading plus voter markers, cell by cell.
        for voter in 0..grid.len() {
            let (x, y) = grid.position(voter);
            let (px, py) = (x * CELL, y * CELL);
            let shade = winner_color(partition.winner(partition.assignment(voter)));
            let mark = party_color(grid.party(voter));
            writeln!(
                writer,
                r#"<rect x="{px}" y="{py}" width="{CELL}" height="{CELL}" style="fill:{shade};fill-opacity:0.45"/>"#,
            )?;
            writeln!(
                writer,
                r#"<rect x="{}" y="{}" width="{}" height="{}" style="fill:{mark}"/>"#,
                px + INSET,
                py + INSET,
                CELL - 2 * INSET,
                CELL - 2 * INSET,
            )?;
        }

        // District boundaries: stroke every edge between cells of different
        // districts, plus the outer frame.
        for voter in 0..grid.len() {
            let (x, y) = grid.position(voter);
            let district = partition.assignment(voter);
            if x + 1 < grid.width() && partition.assignment(voter + 1) != district {
                let px = (x + 1) * CELL;
                writeln!(
                    writer,
                    r#"<line x1="{px}" y1="{}" x2="{px}" y2="{}" style="stroke:#111827;stroke-width:2"/>"#,
                    y * CELL,
                    (y + 1) * CELL,
                )?;
            }
            if y + 1 < grid.width() && partition.assignment(voter + grid.width()) != district {
                let py = (y + 1) * CELL;
                writeln!(
                    writer,
                    r#"<line x1="{}" y1="{py}" x2="{}" y2="{py}" style="stroke:#111827;stroke-width:2"/>"#,
                    x * CELL,
                    (x + 1) * CELL,
                )?;
            }
        }
        writeln!(
            writer,
            r#"<rect x="0" y="0" width="{size}" height="{size}" style="fill:none;stroke:#111827;stroke-width:4"/>"#,
        )?;

        writeln!(writer, "</svg>")?;
        writer.flush()?;
        Ok(())
    }
}
