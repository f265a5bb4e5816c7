#[cfg(test)]
mod progress {
    use wh_core::Tick;
    use wh_grid::{AStarPathfinder, GridLayoutBuilder};
    use wh_sim::{SimBuilder, SimObserver, TickSummary, WarehouseConfig, World};

    use crate::ProgressObserver;

    #[derive(Default)]
    struct Hooks {
        starts:    Vec<Tick>,
        ends:      Vec<Tick>,
        snapshots: Vec<Tick>,
        sim_end:   Option<Tick>,
    }

    impl SimObserver for Hooks {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_tick_end(&mut self, tick: Tick, _summary: &TickSummary) {
            self.ends.push(tick);
        }
        fn on_snapshot(&mut self, tick: Tick, _world: &World) {
            self.snapshots.push(tick);
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.sim_end = Some(final_tick);
        }
    }

    #[test]
    fn every_hook_reaches_inner_observer() {
        let config = WarehouseConfig {
            restockers:            0,
            deliverers:            0,
            marking_batch:         0,
            total_ticks:           3,
            output_interval_ticks: 2,
            ..WarehouseConfig::default()
        };
        let grid = GridLayoutBuilder::new(3, 3).build().unwrap();
        let mut sim = SimBuilder::new(config, grid, AStarPathfinder).build().unwrap();

        let mut obs = ProgressObserver::new(Hooks::default());
        sim.run(&mut obs);

        let ticks = vec![Tick(0), Tick(1), Tick(2)];
        assert_eq!(obs.inner.starts, ticks);
        assert_eq!(obs.inner.ends, ticks);
        assert_eq!(obs.inner.snapshots, vec![Tick(0), Tick(2)]);
        assert_eq!(obs.inner.sim_end, Some(Tick(3)));
        assert_eq!(obs.restocked, 0);
    }
}
