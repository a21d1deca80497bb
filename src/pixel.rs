use bytemuck::{Pod, Zeroable};

/// A point in the complex plane.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }
}

/// One output pixel: three 16-bit channels, each stored big-endian.
///
/// The byte layout is exactly what the image file expects, so a slice of
/// pixels can be cast to bytes with [`bytemuck::cast_slice`].
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EncodedPixel {
    pub channels: [[u8; 2]; 3],
}

impl EncodedPixel {
    pub const BLACK: Self = EncodedPixel {
        channels: [[0; 2]; 3],
    };

    pub const SIZE: usize = std::mem::size_of::<Self>();

    pub fn gray(value: u16) -> Self {
        let bytes = value.to_be_bytes();
        Self {
            channels: [bytes; 3],
        }
    }

    /// Value of the first channel.
    pub fn value(&self) -> u16 {
        u16::from_be_bytes(self.channels[0])
    }
}
