use rand::prelude::*;

/// Fixed palette shared by confetti and ribbons, packed as 0xRRGGBB.
pub const PALETTE: [u32; 6] = [0xdf0049, 0x00e857, 0x2bebbc, 0xffd200, 0x0000ff, 0xffff00];

/// Unpack 0xRRGGBB into [r, g, b] components in [0, 1].
#[inline]
pub fn unpack_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Uniform random pick from the palette.
#[inline]
pub fn random_palette_color<R: Rng>(rng: &mut R) -> [f32; 3] {
    unpack_rgb(*PALETTE.choose(rng).unwrap_or(&PALETTE[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unpack_matches_components() {
        let [r, g, b] = unpack_rgb(0xdf0049);
        assert!((r - 223.0 / 255.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 73.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn random_pick_is_a_palette_member() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let c = random_palette_color(&mut rng);
            assert!(PALETTE.iter().any(|&hex| unpack_rgb(hex) == c));
        }
    }
}
