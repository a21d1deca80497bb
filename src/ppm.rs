//! Binary P6 output with 16-bit big-endian samples.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    pixel::EncodedPixel,
    render::Image,
    viewport::Viewport,
};

/// Largest sample value the header declares. P6 readers treat anything
/// above 255 as two bytes per sample, so the floor keeps the file 16-bit.
pub fn max_value(max_iter: u16) -> u16 {
    max_iter.max(256)
}

pub fn header(viewport: &Viewport, max_iter: u16, width: u32, height: u32) -> String {
    format!(
        "P6\n# Mandelbrot, xmin={:.6}, xmax={:.6}, ymin={:.6}, ymax={:.6}, maxiter={}\n{}\n{}\n{}\n",
        viewport.xmin,
        viewport.xmax,
        viewport.ymin,
        viewport.ymax,
        max_iter,
        width,
        height,
        max_value(max_iter)
    )
}

/// Write the header and then every pixel in scan order.
pub fn write_to<W: Write>(
    image: &Image,
    viewport: &Viewport,
    max_iter: u16,
    mut destination: W,
) -> io::Result<()> {
    trace!("begin write");
    let header = header(viewport, max_iter, image.width(), image.height());
    destination.write_all(header.as_bytes())?;
    destination.write_all(image.as_bytes())?;
    destination.flush()?;
    trace!("end write");
    Ok(())
}

pub fn write_file(
    image: &Image,
    viewport: &Viewport,
    max_iter: u16,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    debug!(
        "writing {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );

    let file = File::create(path).map_err(|source| Error::io(path, source))?;
    write_to(image, viewport, max_iter, BufWriter::new(file))
        .map_err(|source| Error::io(path, source))
}

/// Dimensions declared by a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub max_value: u16,
    /// Byte offset of the first pixel.
    pub data_offset: usize,
}

impl Header {
    pub fn data_len(&self) -> usize {
        self.width as usize * self.height as usize * EncodedPixel::SIZE
    }
}

/// Parse a header as written by [`header`]: the `P6` tag, any number of
/// `#` comment lines, then width, height and max value, one per line.
pub fn read_header(bytes: &[u8]) -> Option<Header> {
    let mut offset = 0;

    if next_line(bytes, &mut offset)? != "P6" {
        return None;
    }
    let mut line = next_line(bytes, &mut offset)?;
    while line.starts_with('#') {
        line = next_line(bytes, &mut offset)?;
    }
    let width = line.trim().parse().ok()?;
    let height = next_line(bytes, &mut offset)?.trim().parse().ok()?;
    let max_value = next_line(bytes, &mut offset)?.trim().parse().ok()?;

    Some(Header {
        width,
        height,
        max_value,
        data_offset: offset,
    })
}

fn next_line<'a>(bytes: &'a [u8], offset: &mut usize) -> Option<&'a str> {
    let rest = bytes.get(*offset..)?;
    let end = rest.iter().position(|byte| *byte == b'\n')?;
    *offset += end + 1;
    std::str::from_utf8(&rest[..end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render::render, screen::Resolution};

    fn viewport() -> Viewport {
        Viewport::new(0.27085, 0.27100, 0.004640, 0.004810).unwrap()
    }

    #[test]
    fn header_text_is_exact() {
        assert_eq!(
            header(&viewport(), 1000, 1024, 1161),
            "P6\n# Mandelbrot, xmin=0.270850, xmax=0.271000, ymin=0.004640, ymax=0.004810, maxiter=1000\n1024\n1161\n1000\n"
        );
    }

    #[test]
    fn small_bounds_still_declare_sixteen_bits() {
        assert_eq!(max_value(1), 256);
        assert_eq!(max_value(255), 256);
        assert_eq!(max_value(256), 256);
        assert_eq!(max_value(u16::MAX), u16::MAX);

        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        assert!(header(&viewport, 50, 3, 2).ends_with("\n3\n2\n256\n"));
        assert!(header(&viewport, 50, 3, 2).contains("xmin=-2.000000"));
    }

    #[test]
    fn written_bytes_match_declared_size() {
        let viewport = viewport();
        let resolution = Resolution::for_viewport(&viewport, 64).unwrap();
        let image = render(&viewport, resolution, 300, 4).unwrap();

        let mut bytes = Vec::new();
        write_to(&image, &viewport, 300, &mut bytes).unwrap();

        let header = read_header(&bytes).unwrap();
        assert_eq!(header.width, 64);
        assert_eq!(header.height, resolution.height);
        assert_eq!(header.max_value, 300);
        assert_eq!(bytes.len() - header.data_offset, header.data_len());
        assert_eq!(header.data_len(), 64 * resolution.height as usize * 6);
        assert_eq!(&bytes[header.data_offset..], image.as_bytes());
    }

    #[test]
    fn pixel_data_is_scan_order() {
        let viewport = Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let mut image = Image::zeroed(Resolution::new(2, 2).unwrap());
        image[1] = EncodedPixel::gray(300);
        image[2] = EncodedPixel::gray(1);

        let mut bytes = Vec::new();
        write_to(&image, &viewport, 1000, &mut bytes).unwrap();
        let header = read_header(&bytes).unwrap();

        assert_eq!(
            &bytes[header.data_offset..],
            &[
                0, 0, 0, 0, 0, 0, //
                0x01, 0x2C, 0x01, 0x2C, 0x01, 0x2C, //
                0, 1, 0, 1, 0, 1, //
                0, 0, 0, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn write_file_round_trips() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let resolution = Resolution::new(9, 6).unwrap();
        let image = render(&viewport, resolution, 64, 2).unwrap();

        let path = std::env::temp_dir().join(format!(
            "cpu-mandelbrot-{}.ppm",
            std::process::id()
        ));
        write_file(&image, &viewport, 64, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let header = read_header(&bytes).unwrap();
        assert_eq!((header.width, header.height, header.max_value), (9, 6, 256));
        assert_eq!(bytes.len(), header.data_offset + header.data_len());
    }

    #[test]
    fn unwritable_path_reports_it() {
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let image = Image::zeroed(Resolution::new(1, 1).unwrap());
        let path = std::env::temp_dir()
            .join("cpu-mandelbrot-missing-dir")
            .join("out.ppm");

        match write_file(&image, &viewport, 10, &path) {
            Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected i/o error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_other_formats() {
        assert_eq!(read_header(b"P5\n1\n1\n255\n"), None);
        assert_eq!(read_header(b"P6\n# truncated"), None);
    }
}
