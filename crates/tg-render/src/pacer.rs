use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Cadence fixe de lecture + compteur FPS par fenêtre glissante.
///
/// Chaque frame a une échéance `intervalle` après la précédente. Une frame
/// en retard ne déclenche pas de rattrapage en rafale : l'échéance suivante
/// repart de l'instant présent.
///
/// # Example
/// ```
/// use tg_render::pacer::FramePacer;
/// let pacer = FramePacer::new(50);
/// assert_eq!(pacer.interval().as_millis(), 20);
/// ```
pub struct FramePacer {
    interval: Duration,
    next_deadline: Option<Instant>,
    /// Timestamps des dernières N frames.
    timestamps: VecDeque<Instant>,
    /// Taille de la fenêtre (nombre de frames à moyenner).
    window: usize,
    frames: u64,
    overruns: u64,
}

impl FramePacer {
    /// Pacer for `target_fps` frames per second (at least 1).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let window = 60;
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1))),
            next_deadline: None,
            timestamps: VecDeque::with_capacity(window + 1),
            window,
            frames: 0,
            overruns: 0,
        }
    }

    /// Durée cible d'une frame.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Temps restant avant l'échéance de la frame courante.
    ///
    /// `Duration::ZERO` avant la première frame ou en cas de retard.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_deadline
            .map_or(Duration::ZERO, |deadline| deadline.saturating_duration_since(now))
    }

    /// Marque une frame comme affichée à `now` et fixe l'échéance suivante.
    ///
    /// # Example
    /// ```
    /// use std::time::{Duration, Instant};
    /// use tg_render::pacer::FramePacer;
    /// let mut pacer = FramePacer::new(10);
    /// let t0 = Instant::now();
    /// pacer.mark(t0);
    /// assert_eq!(pacer.remaining(t0), Duration::from_millis(100));
    /// ```
    pub fn mark(&mut self, now: Instant) {
        let deadline = match self.next_deadline {
            Some(prev) if prev + self.interval > now => prev + self.interval,
            Some(prev) => {
                self.overruns += 1;
                log::debug!(
                    "Frame en retard de {:?}, échéance recalée sur maintenant",
                    now.saturating_duration_since(prev)
                );
                now + self.interval
            }
            None => now + self.interval,
        };
        self.next_deadline = Some(deadline);

        self.frames += 1;
        self.timestamps.push_back(now);
        if self.timestamps.len() > self.window {
            self.timestamps.pop_front();
        }
    }

    /// Dort jusqu'à l'échéance courante puis marque la frame suivante.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.mark(Instant::now());
    }

    /// FPS moyen sur la fenêtre.
    #[must_use]
    pub fn fps(&self) -> f64 {
        match (self.timestamps.front(), self.timestamps.back()) {
            (Some(first), Some(last)) if self.timestamps.len() >= 2 => {
                let secs = last.duration_since(*first).as_secs_f64();
                if secs > 0.0 {
                    (self.timestamps.len() - 1) as f64 / secs
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    /// Nombre de frames marquées depuis la création.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames affichées après leur échéance (cadence recalée).
    #[must_use]
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadlines_advance_by_interval_when_on_time() {
        let mut pacer = FramePacer::new(20);
        let t0 = Instant::now();
        pacer.mark(t0);
        pacer.mark(t0 + Duration::from_millis(10));
        assert_eq!(
            pacer.remaining(t0 + Duration::from_millis(10)),
            Duration::from_millis(90)
        );
    }

    #[test]
    fn late_frame_reanchors_instead_of_bursting() {
        let mut pacer = FramePacer::new(20);
        let t0 = Instant::now();
        pacer.mark(t0);
        let late = t0 + Duration::from_millis(500);
        pacer.mark(late);
        assert_eq!(pacer.remaining(late), Duration::from_millis(50));
        assert_eq!(pacer.overruns(), 1);
    }

    #[test]
    fn on_time_frames_are_not_overruns() {
        let mut pacer = FramePacer::new(20);
        let t0 = Instant::now();
        for i in 0..5 {
            pacer.mark(t0 + Duration::from_millis(50 * i));
        }
        assert_eq!(pacer.overruns(), 0);
    }

    #[test]
    fn fps_reflects_marked_spacing() {
        let mut pacer = FramePacer::new(25);
        let t0 = Instant::now();
        for i in 0..11 {
            pacer.mark(t0 + Duration::from_millis(40 * i));
        }
        assert!((pacer.fps() - 25.0).abs() < 0.01);
        assert_eq!(pacer.frames(), 11);
    }

    #[test]
    fn zero_fps_is_treated_as_one() {
        assert_eq!(FramePacer::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn nothing_remaining_before_first_frame() {
        assert_eq!(FramePacer::new(30).remaining(Instant::now()), Duration::ZERO);
    }
}
