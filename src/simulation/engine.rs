use crate::block::{Block, KillReport};
use crate::cli::Args;
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::script::SpawnEvent;
use crate::simulation::collision::Peers;
use crate::utils::START_BLOCKS;
use colored::Colorize;
use std::time::{Duration, Instant};

/// Outcome of a single tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Blocks that were updated this tick
    pub updated: usize,
    /// Blocks removed this tick, in processing order
    pub killed: Vec<KillReport>,
}

/// Owns the live blocks and advances them one tick at a time
pub struct Simulation {
    blocks: Vec<Block>,
    bounds: Rect,
    block_size: i32,
    next_id: u32,
    ticks: u64,
    kills: usize,
    suppress_events: bool,
}

impl Simulation {
    /// Create an empty simulation
    pub fn new(bounds: Rect, block_size: i32) -> Self {
        Self {
            blocks: Vec::new(),
            bounds,
            block_size,
            next_id: 0,
            ticks: 0,
            kills: 0,
            suppress_events: true,
        }
    }

    /// Create a simulation configured from CLI arguments
    pub fn from_args(args: &Args, rng: &mut fastrand::Rng) -> Self {
        let mut sim = Self::new(args.bounds(), args.block_size);
        sim.suppress_events = args.suppress_events;
        if !args.no_start_blocks {
            sim.populate(rng);
        }
        for &position in &args.spawn {
            sim.spawn(position, rng);
        }
        sim
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Ticks run since creation or the last reset
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Blocks removed since creation or the last reset
    #[inline]
    pub fn kills(&self) -> usize {
        self.kills
    }

    #[inline]
    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a block to the live set. No overlap check: a block added on
    /// top of another sorts itself out (or dies) on its next update.
    pub fn add(&mut self, block: Block) {
        self.next_id = self.next_id.max(block.id.saturating_add(1));
        self.blocks.push(block);
    }

    /// Add a random-colored block at `position`, as a click would.
    /// Returns the new block's id.
    pub fn spawn(&mut self, position: Point, rng: &mut fastrand::Rng) -> u32 {
        let color = Color::random(rng);
        self.spawn_colored(color, position, rng)
    }

    /// Add a block of a given color at `position`
    pub fn spawn_colored(&mut self, color: Color, position: Point, rng: &mut fastrand::Rng) -> u32 {
        let id = self.allocate_id();
        let block = Block::new(id, color, position.into(), self.block_size, rng);
        self.blocks.push(block);
        id
    }

    /// Drop every block and bring back the start set
    pub fn reset(&mut self, rng: &mut fastrand::Rng) {
        self.blocks.clear();
        self.next_id = 0;
        self.ticks = 0;
        self.kills = 0;
        self.populate(rng);
    }

    fn populate(&mut self, rng: &mut fastrand::Rng) {
        for (color, position) in START_BLOCKS {
            self.spawn_colored(color, position, rng);
        }
    }

    /// Advance every live block once, in insertion order.
    ///
    /// Each block sees the others as they are right now, so blocks later in
    /// the list react to moves and velocity swaps made earlier in the same
    /// tick. Blocks removed during the pass are skipped for the rest of it
    /// and dropped once it is over.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();

        for idx in 0..self.blocks.len() {
            let (before, rest) = self.blocks.split_at_mut(idx);
            let Some((block, after)) = rest.split_first_mut() else {
                break;
            };
            if !block.is_alive() {
                continue;
            }

            let mut peers = Peers::new(before, after);
            report.updated += 1;
            if let Some(kill) = block.update(self.bounds, &mut peers) {
                self.log_kill(&kill);
                report.killed.push(kill);
            }
        }

        self.blocks.retain(Block::is_alive);
        self.ticks += 1;
        self.kills += report.killed.len();
        report
    }

    /// Run `ticks` ticks, applying scripted spawns right before their tick.
    /// Events scheduled past the last tick are ignored.
    pub fn run(
        &mut self,
        ticks: u64,
        events: &[SpawnEvent],
        rng: &mut fastrand::Rng,
    ) -> Duration {
        let start = Instant::now();
        let mut pending = events.iter().peekable();

        for _ in 0..ticks {
            let now = self.ticks;
            while let Some(event) = pending.next_if(|e| e.tick <= now) {
                self.spawn(event.position, rng);
            }
            self.tick();
        }

        start.elapsed()
    }

    /// Log a removed block
    #[inline]
    fn log_kill(&self, kill: &KillReport) {
        if self.suppress_events {
            return;
        }
        println!(
            "{} {} {}\n   {}",
            "💀".red(),
            format!("block {}", kill.id).bright_red(),
            format!("unjustly murdered in {}", kill.stage()).red(),
            kill.to_string().dimmed()
        );
    }

    /// Print the run summary followed by every surviving block
    pub fn print_summary(&self, elapsed: Duration) {
        println!(
            "{}\n{} {:.3} ms {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("ticks={}", self.ticks).cyan(),
            format!("blocks={}", self.blocks.len()).cyan(),
            format!("killed={}", self.kills).cyan(),
        );

        for block in &self.blocks {
            let center = Point::rounded(block.position());
            println!(
                "{} {} {} center={} velocity={:?}",
                block.color.paint("■"),
                format!("block {}", block.id).bold(),
                block.color.to_string().dimmed(),
                center,
                block.velocity()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::KillCause;

    const SCREEN: Rect = Rect::new(0, 0, 700, 500);

    fn block(id: u32, center: [f64; 2], size: i32, velocity: [i32; 2]) -> Block {
        Block::with_velocity(id, Color::CYAN, center, size, velocity)
    }

    /// Random non-overlapping blocks on a grid
    fn scattered(sim: &mut Simulation, rng: &mut fastrand::Rng, count: usize) {
        let mut cells: Vec<(i32, i32)> = (0..7).flat_map(|c| (0..5).map(move |r| (c, r))).collect();
        rng.shuffle(&mut cells);
        for &(c, r) in cells.iter().take(count) {
            let center = Point::new(c * 100 + 50, r * 100 + 50);
            sim.spawn(center, rng);
        }
    }

    #[test]
    fn test_two_block_scenario() {
        let mut sim = Simulation::new(Rect::new(0, 0, 500, 500), 30);
        sim.add(block(0, [15.0, 15.0], 30, [3, 0]));
        sim.add(block(1, [45.0, 15.0], 30, [-3, 0]));

        let report = sim.tick();

        assert_eq!(report.updated, 2);
        assert!(report.killed.is_empty());
        let blocks = sim.blocks();
        assert_eq!(blocks[0].rect(), Rect::new(0, 0, 30, 30));
        assert_eq!(blocks[0].velocity(), [-3, 0]);
        assert_eq!(blocks[1].velocity(), [3, 0]);
        assert!(!blocks[0].rect().collides(&blocks[1].rect()));
    }

    #[test]
    fn test_stacked_blocks_swap_vertical_velocity() {
        let mut sim = Simulation::new(SCREEN, 30);
        sim.add(block(0, [200.0, 100.0], 30, [2, 3]));
        sim.add(block(1, [200.0, 131.0], 30, [-1, -3]));

        assert!(sim.tick().killed.is_empty());

        let blocks = sim.blocks();
        assert_eq!(blocks[0].velocity(), [2, -3]);
        assert_eq!(blocks[1].velocity(), [-1, 3]);
    }

    #[test]
    fn test_wedged_block_is_dropped_after_tick() {
        let mut sim = Simulation::new(SCREEN, 30);
        sim.add(block(0, [100.0, 100.0], 30, [0, 0]));
        sim.add(block(1, [105.0, 105.0], 30, [0, 0]));

        let report = sim.tick();

        assert_eq!(report.killed.len(), 1);
        let kill = &report.killed[0];
        assert_eq!(kill.id, 0);
        assert_eq!(kill.steps, 1000);
        assert!(matches!(kill.cause, KillCause::Collision { peer_id: 1, .. }));

        // block 1 no longer overlaps a live block, so it survives
        assert_eq!(sim.len(), 1);
        assert_eq!(sim.blocks()[0].id, 1);
        assert_eq!(sim.kills(), 1);
    }

    #[test]
    fn test_add_performs_no_overlap_check() {
        let mut sim = Simulation::new(SCREEN, 50);
        sim.add(block(0, [100.0, 100.0], 50, [1, 0]));
        sim.add(block(1, [100.0, 100.0], 50, [-1, 0]));

        assert_eq!(sim.len(), 2);
        assert!(sim.blocks()[0].rect().collides(&sim.blocks()[1].rect()));
    }

    #[test]
    fn test_add_keeps_ids_unique() {
        let mut rng = fastrand::Rng::with_seed(5);
        let mut sim = Simulation::new(SCREEN, 50);
        sim.add(block(10, [100.0, 100.0], 50, [1, 0]));

        let id = sim.spawn(Point::new(300, 300), &mut rng);
        assert_eq!(id, 11);
    }

    #[test]
    fn test_add_with_largest_id() {
        let mut sim = Simulation::new(SCREEN, 50);
        sim.add(block(u32::MAX, [100.0, 100.0], 50, [1, 0]));

        assert_eq!(sim.len(), 1);
        assert_eq!(sim.blocks()[0].id, u32::MAX);
    }

    #[test]
    fn test_spawns_at_extreme_coordinates_are_removed() {
        let mut rng = fastrand::Rng::with_seed(8);
        let mut sim = Simulation::new(SCREEN, 50);
        sim.spawn(Point::new(i32::MAX, 250), &mut rng);
        sim.spawn(Point::new(i32::MIN, 250), &mut rng);
        sim.spawn(Point::new(350, i32::MAX), &mut rng);
        sim.spawn(Point::new(350, 250), &mut rng);

        let report = sim.tick();

        assert_eq!(report.killed.len(), 3);
        assert!(report.killed.iter().all(|k| k.stage() == "constrain"));
        assert_eq!(sim.len(), 1);
        assert!(SCREEN.contains(&sim.blocks()[0].rect()));
    }

    #[test]
    fn test_start_blocks_and_reset() {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut sim = Simulation::new(SCREEN, 50);
        sim.reset(&mut rng);

        assert_eq!(sim.len(), 4);
        let centers: Vec<_> = sim.blocks().iter().map(|b| b.rect().center()).collect();
        assert_eq!(
            centers,
            vec![
                Point::new(50, 50),
                Point::new(240, 340),
                Point::new(180, 250),
                Point::new(35, 450),
            ]
        );
        assert_eq!(sim.blocks()[0].color, Color::TOMATO);

        sim.spawn(Point::new(600, 100), &mut rng);
        sim.tick();
        assert_eq!(sim.ticks(), 1);

        sim.reset(&mut rng);
        assert_eq!(sim.len(), 4);
        assert_eq!(sim.ticks(), 0);
        assert_eq!(sim.blocks().iter().map(|b| b.id).max(), Some(3));
    }

    #[test]
    fn test_scripted_spawns_apply_before_their_tick() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut sim = Simulation::new(SCREEN, 50);
        let events = [
            SpawnEvent { tick: 0, position: Point::new(100, 100) },
            SpawnEvent { tick: 2, position: Point::new(400, 100) },
            SpawnEvent { tick: 2, position: Point::new(600, 400) },
            SpawnEvent { tick: 50, position: Point::new(300, 300) },
        ];

        sim.run(3, &events, &mut rng);

        assert_eq!(sim.ticks(), 3);
        assert_eq!(sim.len() + sim.kills(), 3);
    }

    #[test]
    fn test_no_overlaps_after_clean_ticks() {
        for seed in 0..20 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let mut sim = Simulation::new(SCREEN, 50);
            scattered(&mut sim, &mut rng, 12);

            for _ in 0..400 {
                let report = sim.tick();
                if !report.killed.is_empty() {
                    continue;
                }
                let blocks = sim.blocks();
                for (i, a) in blocks.iter().enumerate() {
                    for b in &blocks[i + 1..] {
                        assert!(
                            !a.rect().collides(&b.rect()),
                            "seed {}: block {} {} overlaps block {} {}",
                            seed,
                            a.id,
                            a.rect(),
                            b.id,
                            b.rect()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_dead_blocks_never_survive_a_tick() {
        let mut rng = fastrand::Rng::with_seed(77);
        let mut sim = Simulation::new(SCREEN, 50);
        for _ in 0..30 {
            // all on top of each other
            sim.spawn(Point::new(350, 250), &mut rng);
        }

        for _ in 0..50 {
            sim.tick();
            assert!(sim.blocks().iter().all(Block::is_alive));
        }
        assert_eq!(sim.len() + sim.kills(), 30);
    }
}
