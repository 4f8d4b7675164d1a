//! Progressive reveal animation
//!
//! Every run redraws the scene once per display refresh tick while its tick
//! counter is at most the current point count, which gives `N + 1` draws for
//! `N` points. Runs are independent: starting one never cancels another, so
//! overlapping runs each issue their own draws. Every draw shows the full
//! point sequence; the counter only bounds how long a run lasts.

use tracing::{debug, trace};

use ld_core::{Redraw, Session};

use crate::Renderer;

/// Identifies one animation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

#[derive(Debug)]
struct RevealRun {
    id: RunId,
    ticks: usize,
}

/// Drives reveal runs across refresh ticks
#[derive(Debug, Default)]
pub struct RevealAnimator {
    runs: Vec<RevealRun>,
    next_id: u64,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run alongside any already in flight
    pub fn start(&mut self) -> RunId {
        let id = RunId(self.next_id);
        self.next_id += 1;
        self.runs.push(RevealRun { id, ticks: 0 });
        debug!(?id, active = self.runs.len(), "Reveal started");
        id
    }

    /// Stop a run before it finishes. Returns `false` if it already ended.
    pub fn cancel(&mut self, id: RunId) -> bool {
        let before = self.runs.len();
        self.runs.retain(|run| run.id != id);
        self.runs.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.runs.clear();
    }

    /// Number of runs still scheduling ticks
    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }

    pub fn is_idle(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn is_running(&self, id: RunId) -> bool {
        self.runs.iter().any(|run| run.id == id)
    }

    /// Advance every run by one refresh tick, returning the number of draws issued
    pub fn tick(&mut self, session: &Session, renderer: &mut dyn Renderer) -> usize {
        let point_count = session.points().len();
        let mut draws = 0;

        self.runs.retain_mut(|run| {
            if run.ticks > point_count {
                trace!(id = ?run.id, "Reveal finished");
                return false;
            }
            renderer.draw(session);
            run.ticks += 1;
            draws += 1;
            true
        });

        draws
    }
}

/// Carry out the redraw an accepted action asked for.
///
/// `Reveal` starts a run that draws on later ticks; `Once` draws right away.
pub fn route_redraw(
    redraw: Redraw,
    session: &Session,
    animator: &mut RevealAnimator,
    renderer: &mut dyn Renderer,
) {
    match redraw {
        Redraw::Reveal => {
            animator.start();
        }
        Redraw::Once => renderer.draw(session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CountingRenderer;
    use ld_core::{InputAction, Point, Redraw};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Tick until the animator goes idle, with a safety cap
    fn run_to_completion(
        animator: &mut RevealAnimator,
        session: &Session,
        renderer: &mut CountingRenderer,
    ) -> usize {
        let mut ticks = 0;
        while !animator.is_idle() {
            animator.tick(session, renderer);
            ticks += 1;
            assert!(ticks < 10_000, "animation never finished");
        }
        ticks
    }

    #[test]
    fn test_reveal_draws_point_count_plus_one() {
        let mut session = Session::default();
        session.add_coordinate("100,100").unwrap();

        let mut animator = RevealAnimator::new();
        let mut renderer = CountingRenderer::default();
        animator.start();
        run_to_completion(&mut animator, &session, &mut renderer);

        assert_eq!(renderer.draws, 4);
        assert_eq!(renderer.last_point_count, 3);
    }

    #[test]
    fn test_every_point_adding_action_reveals() {
        let mut rng = StdRng::seed_from_u64(1);
        let actions = [
            InputAction::AddRandom,
            InputAction::AddCoordinate("10,20".to_string()),
            InputAction::Click(Point::new(5.0, 5.0)),
        ];

        for action in actions {
            let mut session = Session::default();
            let mut animator = RevealAnimator::new();
            let mut renderer = CountingRenderer::default();

            assert_eq!(session.apply(action, &mut rng), Ok(Redraw::Reveal));
            animator.start();
            run_to_completion(&mut animator, &session, &mut renderer);

            let n = session.points().len();
            assert_eq!(renderer.draws, n + 1);
        }
    }

    #[test]
    fn test_one_draw_per_tick() {
        let session = Session::default();
        let mut animator = RevealAnimator::new();
        let mut renderer = CountingRenderer::default();
        animator.start();

        assert_eq!(animator.tick(&session, &mut renderer), 1);
        assert_eq!(animator.tick(&session, &mut renderer), 1);
        assert_eq!(animator.tick(&session, &mut renderer), 1);
        assert_eq!(animator.tick(&session, &mut renderer), 0);
        assert!(animator.is_idle());
        assert_eq!(renderer.draws, 3);
    }

    #[test]
    fn test_overlapping_runs_are_independent() {
        let mut session = Session::default();
        let mut animator = RevealAnimator::new();
        let mut renderer = CountingRenderer::default();

        session.add_click(Point::new(1.0, 1.0));
        let first = animator.start();
        animator.tick(&session, &mut renderer);

        session.add_click(Point::new(2.0, 2.0));
        let second = animator.start();
        assert_ne!(first, second);
        assert_eq!(animator.active_runs(), 2);
        assert_eq!(animator.tick(&session, &mut renderer), 2);

        run_to_completion(&mut animator, &session, &mut renderer);

        // Both runs see four points by the end, so each draws five times.
        assert_eq!(renderer.draws, 10);
    }

    #[test]
    fn test_resize_draws_once_without_animation() {
        let mut session = Session::default();
        let mut animator = RevealAnimator::new();
        let mut renderer = CountingRenderer::default();
        let mut rng = StdRng::seed_from_u64(3);

        let action = InputAction::Resize { width: "800".into(), height: "600".into() };
        let redraw = session.apply(action, &mut rng).unwrap();
        route_redraw(redraw, &session, &mut animator, &mut renderer);

        assert_eq!(renderer.draws, 1);
        assert!(animator.is_idle());
        assert_eq!(session.config().resolution(), [800.0, 600.0]);

        let redraw = session.apply(InputAction::SetLineWidth(4.0), &mut rng).unwrap();
        route_redraw(redraw, &session, &mut animator, &mut renderer);
        assert_eq!(renderer.draws, 2);
        assert!(animator.is_idle());
    }

    #[test]
    fn test_point_actions_route_to_a_reveal() {
        let mut session = Session::default();
        let mut animator = RevealAnimator::new();
        let mut renderer = CountingRenderer::default();
        let mut rng = StdRng::seed_from_u64(3);

        let redraw = session.apply(InputAction::AddRandom, &mut rng).unwrap();
        route_redraw(redraw, &session, &mut animator, &mut renderer);

        assert_eq!(renderer.draws, 0);
        assert_eq!(animator.active_runs(), 1);

        run_to_completion(&mut animator, &session, &mut renderer);
        assert_eq!(renderer.draws, 4);
    }

    #[test]
    fn test_cancel() {
        let session = Session::default();
        let mut animator = RevealAnimator::new();
        let mut renderer = CountingRenderer::default();

        let first = animator.start();
        let second = animator.start();
        assert!(animator.cancel(first));
        assert!(!animator.cancel(first));
        assert!(!animator.is_running(first));
        assert!(animator.is_running(second));

        run_to_completion(&mut animator, &session, &mut renderer);
        assert_eq!(renderer.draws, 3);

        animator.start();
        animator.start();
        animator.cancel_all();
        assert_eq!(animator.tick(&session, &mut renderer), 0);
    }
}
