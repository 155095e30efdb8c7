use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

/// How long to wait for terminal input before checking the tick timer again
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Wait for the next terminal event or clock tick
    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        loop {
            // Check for terminal events without blocking first
            if poll(Duration::from_millis(0))? {
                return Ok(match crossterm::event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                    Event::Mouse(mouse) => EventType::Mouse(mouse),
                    Event::Resize(w, h) => EventType::Resize(w, h),
                    _ => EventType::Other,
                });
            }

            if self.should_tick() {
                self.last_tick = Instant::now();
                return Ok(EventType::Tick);
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Whether a full tick interval has passed since the last tick
    pub fn should_tick(&self) -> bool {
        self.last_tick.elapsed() >= self.tick_rate
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::DEFAULT_TICK_RATE_MS))
    }
}
