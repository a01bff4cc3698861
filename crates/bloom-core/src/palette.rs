use rand::Rng;

/// 8-bit RGB triple. Entities copy the value; nothing holds a reference into the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

// Pastel bloom colors
pub const PALETTE: [Color; 5] = [
    Color::new(255, 182, 193), // pink
    Color::new(221, 160, 221), // plum
    Color::new(176, 224, 230), // powder blue
    Color::new(255, 218, 185), // peach
    Color::new(240, 230, 140), // khaki
];

/// Pick one palette entry uniformly.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}
