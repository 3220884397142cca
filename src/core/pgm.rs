use std::io::{self, Write};

/// Plain-text (P2) pixel-map serializer.
///
/// Layout: format tag, a comment line, `<width> <height>`, the fixed
/// maximum intensity 255, then one value per line with a blank line
/// closing every row (the last row included).
pub fn write_header<W: Write>(out: &mut W, width: u32, height: u32) -> io::Result<()> {
    write!(out, "P2\n# Fractal image\n{} {}\n255\n", width, height)
}

pub fn write_row<W: Write>(out: &mut W, row: &[u8]) -> io::Result<()> {
    for v in row {
        writeln!(out, "{}", v)?;
    }
    // Row separator
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_shape() {
        let mut buf = Vec::new();
        write_header(&mut buf, 4, 4).unwrap();
        assert_eq!(buf, b"P2\n# Fractal image\n4 4\n255\n");
    }

    #[test]
    fn rows_end_with_blank_line() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[255, 0, 7]).unwrap();
        assert_eq!(buf, b"255\n0\n7\n\n");
    }
}
