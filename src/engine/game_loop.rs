/// Fixed-timestep frame clock
///
/// The simulation advances in fixed ticks (60 per second) no matter how
/// fast the embedding frame driver runs. Each rendered frame, the driver
/// asks the clock how many simulation ticks to execute; leftover time is
/// carried in an accumulator so long-term tick rate stays exact.
use std::time::{Duration, Instant};

/// Target simulation rate (ticks per second)
pub const TICK_RATE: f32 = 60.0;

/// Duration of one simulation tick
pub const FIXED_TIMESTEP: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum ticks executed per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Frame timing state for an embedding driver
pub struct FrameClock {
    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when the clock started
    start_time: Instant,

    /// Total ticks handed out
    tick_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of simulation ticks to run.
    ///
    /// Clamped at `MAX_TICKS_PER_FRAME`: after a long stall the clock
    /// drops time rather than replaying it all at once.
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= FIXED_TIMESTEP && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP;
            ticks += 1;
        }

        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Interpolation alpha for rendering between simulation ticks.
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / FIXED_TIMESTEP.as_secs_f32()
    }

    /// Total ticks handed out so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Wall-clock time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_frame_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.tick_count(), 0);
    }

    #[test]
    fn test_tick_accumulation() {
        let mut clock = FrameClock::new();

        thread::sleep(FIXED_TIMESTEP);

        let ticks = clock.begin_frame();
        assert!(ticks >= 1);
        assert!(ticks <= MAX_TICKS_PER_FRAME);
        assert_eq!(clock.tick_count(), ticks as u64);
    }

    #[test]
    fn test_max_ticks_per_frame_limit() {
        let mut clock = FrameClock::new();

        // Simulate a very long stall (200ms would allow 12 ticks)
        thread::sleep(Duration::from_millis(200));

        let ticks = clock.begin_frame();
        assert!(ticks <= MAX_TICKS_PER_FRAME);
    }

    #[test]
    fn test_stall_drops_backlog() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(200));
        clock.begin_frame();

        // Accumulator was reset, so an immediate next frame yields no ticks
        let ticks = clock.begin_frame();
        assert_eq!(ticks, 0);
    }

    #[test]
    fn test_alpha_range() {
        let clock = FrameClock::new();
        let alpha = clock.alpha();
        assert!((0.0..=1.0).contains(&alpha));
    }

    #[test]
    fn test_elapsed_time() {
        let clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        assert!(clock.elapsed() >= Duration::from_millis(10));
    }
}
