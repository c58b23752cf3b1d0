use rand::Rng;

/// Film-grain dither over RGBA8 pixels.
///
/// Each pixel gets one random offset in `[-amplitude, amplitude)` added to R, G
/// and B alike, so the grain shifts brightness and never tints. Alpha is left
/// alone. Results round to nearest and saturate at 0 and 255.
pub fn apply_grain<R: Rng + ?Sized>(data: &mut [u8], amplitude: f32, rng: &mut R) {
    if !amplitude.is_finite() || amplitude <= 0.0 {
        return;
    }
    for px in data.chunks_exact_mut(4) {
        let noise = rng.gen_range(-amplitude..amplitude);
        for channel in &mut px[..3] {
            *channel = (*channel as f32 + noise).round().clamp(0.0, 255.0) as u8;
        }
    }
}
