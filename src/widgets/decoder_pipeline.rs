//! Decoding pipeline animation — syndrome → transformer → correction.
//!
//! Cosmetic four-stage loop, no real inference. The stage only moves when
//! the owning view's [`StageTimer`] fires; the timer lives exactly as long
//! as the view that acquired it.

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Default period between stage transitions.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Number of stages in the loop.
pub const STAGE_COUNT: u8 = 4;

/// One step of the decoding loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Syndrome history arrives.
    Syndrome,
    /// Transformer attends over space and time.
    Attention,
    /// Transformer produces its prediction.
    Inference,
    /// Correction emitted.
    Correction,
}

impl Stage {
    pub fn from_index(index: u8) -> Self {
        match index % STAGE_COUNT {
            0 => Stage::Syndrome,
            1 => Stage::Attention,
            2 => Stage::Inference,
            _ => Stage::Correction,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Stage::Syndrome => 0,
            Stage::Attention => 1,
            Stage::Inference => 2,
            Stage::Correction => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Syndrome => "Syndrome",
            Stage::Attention => "Attention",
            Stage::Inference => "Inference",
            Stage::Correction => "Correction",
        }
    }
}

/// Animation state. Starts at stage 0 on mount.
#[derive(Debug, Clone)]
pub struct DecoderPipeline {
    stage: u8,
    speckle: [bool; 9],
}

impl Default for DecoderPipeline {
    fn default() -> Self {
        Self {
            stage: 0,
            speckle: random_speckle(),
        }
    }
}

impl DecoderPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next stage, wrapping 3 → 0.
    pub fn advance(&mut self) {
        self.stage = (self.stage + 1) % STAGE_COUNT;
        self.speckle = random_speckle();
        debug!(stage = self.stage, "decoder stage advanced");
    }

    pub fn stage(&self) -> Stage {
        Stage::from_index(self.stage)
    }

    pub fn stage_index(&self) -> u8 {
        self.stage
    }

    /// Input block lit on stage 0.
    pub fn input_highlighted(&self) -> bool {
        self.stage == 0
    }

    /// Transformer block lit on stages 1 and 2.
    pub fn transformer_highlighted(&self) -> bool {
        self.stage == 1 || self.stage == 2
    }

    /// Attention scan lines only on stage 1.
    pub fn attention_visible(&self) -> bool {
        self.stage == 1
    }

    /// Output block lit on stage 3.
    pub fn output_highlighted(&self) -> bool {
        self.stage == 3
    }

    /// Syndrome → transformer arrow emphasis.
    pub fn input_arrow_lit(&self) -> bool {
        self.stage >= 1
    }

    /// Transformer → correction arrow emphasis.
    pub fn output_arrow_lit(&self) -> bool {
        self.stage >= 3
    }

    /// Glyph in the correction block.
    pub fn output_glyph(&self) -> &'static str {
        if self.output_highlighted() {
            "X"
        } else {
            "?"
        }
    }

    /// Progress dots, one per stage; `true` marks the current one.
    pub fn progress(&self) -> [bool; STAGE_COUNT as usize] {
        let mut dots = [false; STAGE_COUNT as usize];
        dots[self.stage as usize] = true;
        dots
    }

    /// Decorative 3x3 measurement pattern shown in the input block.
    pub fn speckle(&self) -> &[bool; 9] {
        &self.speckle
    }
}

fn random_speckle() -> [bool; 9] {
    let mut rng = rand::thread_rng();
    std::array::from_fn(|_| rng.gen_bool(0.3))
}

/// Repeating timer owned by the pipeline view.
///
/// Acquired on mount; the first tick arrives one period later. Dropping the
/// timer aborts its task, so no tick is delivered after the view is gone.
pub struct StageTimer {
    ticks: mpsc::Receiver<()>,
    task: JoinHandle<()>,
    period: Duration,
}

impl StageTimer {
    /// Spawn the timer task on the current tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(1);
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        info!(period_ms = period.as_millis() as u64, "stage timer acquired");
        Self {
            ticks,
            task,
            period,
        }
    }

    /// Wait for the next tick. `None` once the timer task has ended.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.task.abort_handle()
    }
}

impl Drop for StageTimer {
    fn drop(&mut self) {
        self.task.abort();
        info!("stage timer released");
    }
}
