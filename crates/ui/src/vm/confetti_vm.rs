use rand::Rng;

const CONFETTI_PIECES: usize = 48;

const PALETTE: [&str; 6] = [
    "#6366f1", "#22c55e", "#f59e0b", "#ec4899", "#0ea5e9", "#a855f7",
];

/// One falling confetti square, positioned with inline CSS.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPieceVm {
    pub left_pct: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub rotation_deg: i32,
    pub color: &'static str,
}

impl ConfettiPieceVm {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; background: {}; animation-delay: {}ms; animation-duration: {}ms; transform: rotate({}deg);",
            self.left_pct, self.color, self.delay_ms, self.duration_ms, self.rotation_deg
        )
    }
}

#[must_use]
pub fn scatter_confetti(count: usize, rng: &mut impl Rng) -> Vec<ConfettiPieceVm> {
    (0..count)
        .map(|_| ConfettiPieceVm {
            left_pct: rng.random_range(0.0..100.0),
            delay_ms: rng.random_range(0..400),
            duration_ms: rng.random_range(1400..2400),
            rotation_deg: rng.random_range(-180..180),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        })
        .collect()
}

#[must_use]
pub fn confetti_burst() -> Vec<ConfettiPieceVm> {
    scatter_confetti(CONFETTI_PIECES, &mut rand::rng())
}
