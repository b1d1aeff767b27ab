/// Frame clock for the game loop
///
/// Measures one variable-length step per rendered frame and hands the
/// player the current time in milliseconds plus the step length in seconds.
use std::time::{Duration, Instant};

/// Target frame rate
pub const TARGET_FPS: u32 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Timing handed to per-frame updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Milliseconds since the loop started
    pub current_time: f32,
    /// Seconds since the previous frame
    pub dt: f32,
}

/// Game loop timing state
pub struct GameLoop {
    /// Time of last frame
    last_frame_time: Instant,

    /// Time when game loop started
    start_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a game loop whose clock starts at `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame_time: start,
            start_time: start,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame at the current instant
    pub fn begin_frame(&mut self) -> FrameTime {
        self.begin_frame_at(Instant::now())
    }

    /// Begin a new frame at `now`
    pub fn begin_frame_at(&mut self, now: Instant) -> FrameTime {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        FrameTime {
            current_time: now.saturating_duration_since(self.start_time).as_secs_f32() * 1000.0,
            dt: frame_time.as_secs_f32(),
        }
    }

    /// When the next frame is due at the target frame rate
    pub fn next_frame_deadline(&self) -> Instant {
        self.last_frame_time + FRAME_DURATION
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
