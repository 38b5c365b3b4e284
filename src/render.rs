//! HTML swatch sheet for generated schemes.
//!
//! One section per scheme: a row of color cells, a grayscale strip
//! under it and the hex code labeled under each cell.

use std::io::Write;
use rgb::RGB8;
use crate::{Error, RGBColor, SchemeRow};

const CELL_WIDTH: u32 = 60;

fn gray_css(hex: &str) -> Result<String, Error> {
    RGB8::from_hex(hex)?.to_gray().to_hex()
}

/// Write the swatch sheet for `rows` to `fh`.
///
/// `base` is the color the schemes were generated from, annotated
/// above each row exactly as supplied.
pub fn swatch_sheet(fh: &mut impl Write, base: &str, rows: &[SchemeRow])
    -> Result<(), Error> {
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color harmonies for {base}</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h2>Color harmonies for {base}</h2>")?;
    for row in rows {
        writeln!(fh, "<h3>{} Scheme - {}</h3>", row.name, row.description)?;
        writeln!(fh, "<p>Base Color: {base}</p>")?;
        writeln!(fh, "<table style=\"border: 0px; \
                      border-spacing: 0px\"><tr>")?;
        for hex in &row.colors {
            writeln!(fh, "  <td style=\"width: {CELL_WIDTH}px; \
                          height: 30px; background-color: {hex}\"></td>")?;
        }
        writeln!(fh, "</tr><tr>")?;
        for hex in &row.colors {
            writeln!(fh, "  <td style=\"width: {CELL_WIDTH}px; \
                          height: 12px; background-color: {}\"></td>",
                     gray_css(hex)?)?;
        }
        writeln!(fh, "</tr><tr>")?;
        for hex in &row.colors {
            writeln!(fh, "  <td style=\"text-align: center; \
                          font-size: 80%\">{hex}</td>")?;
        }
        writeln!(fh, "</tr></table><br/>")?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
