use rand::Rng;

const FLOAT_STEPS: i32 = 10000;

/// Random integer in `min..=max`, bounds may come in either order
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Random float between `min` and `max` with a resolution of 1/10000
pub fn rand_float<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let k = rng.gen_range(0..=FLOAT_STEPS);
    min + k as f32 / FLOAT_STEPS as f32 * (max - min)
}

/// True with probability `p` (0.0 to 1.0)
pub fn rand_chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    rand_float(rng, 0.0, 1.0) < p
}
