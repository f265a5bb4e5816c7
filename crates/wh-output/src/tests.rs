//! Integration tests for wh-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            tick,
            agent_id,
            role:     "deliverer",
            x:        agent_id as i32,
            y:        3,
            battery:  80,
            task:     "pickup",
            carrying: agent_id % 2 == 1,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            moved:       5,
            waited:      1,
            replanned:   0,
            blocked:     0,
            unavailable: 2,
            restocked:   1,
            delivered:   0,
            marked:      3,
            preempted:   0,
            charging:    1,
        }
    }

    fn read_all(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn missing_directory_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("agent_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "agent_id", "role", "x", "y", "battery", "task", "carrying"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2[0], "tick");
        assert_eq!(headers2.len(), 11);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let rows = read_all(&dir, "agent_snapshots.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "5");         // tick
        assert_eq!(&rows[1][1], "1");         // agent_id
        assert_eq!(&rows[1][2], "deliverer");
        assert_eq!(&rows[1][6], "pickup");
        assert_eq!(&rows[0][7], "0");         // carrying as 0/1
        assert_eq!(&rows[1][7], "1");
    }

    #[test]
    fn csv_tick_summary_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let rows = read_all(&dir, "tick_summaries.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "5");   // moved
        assert_eq!(&rows[0][8], "3");   // marked
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
        w.finish().unwrap();
        assert!(read_all(&dir, "agent_snapshots.csv").is_empty());
    }
}

#[cfg(test)]
mod observer_tests {
    use wh_agent::{AgentStoreBuilder, Battery, Role};
    use wh_alloc::ShelfStatus;
    use wh_core::Cell;
    use wh_grid::{AStarPathfinder, GridLayout, GridLayoutBuilder};
    use wh_sim::{SimBuilder, WarehouseConfig};

    use crate::{
        AgentSnapshotRow, CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver,
        TickSummaryRow,
    };

    /// Counts rows and fails every snapshot write after the first.
    #[derive(Default)]
    struct Flaky {
        snapshot_calls: usize,
        summaries:      usize,
        finished:       bool,
    }

    impl OutputWriter for Flaky {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.snapshot_calls += 1;
            if self.snapshot_calls > 1 {
                return Err(OutputError::Io(std::io::Error::other(format!(
                    "disk full on call {}",
                    self.snapshot_calls
                ))));
            }
            Ok(())
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries += 1;
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn small_sim(config: WarehouseConfig) -> wh_sim::Sim {
        let mut b = GridLayoutBuilder::new(4, 3);
        b.add_pickup(Cell::new(0, 0));
        b.add_shelf(Cell::new(2, 1));
        b.add_delivery(Cell::new(3, 2));
        let agents = AgentStoreBuilder::new()
            .agent(Role::Restocker, Cell::new(0, 0), Battery::FULL)
            .agent(Role::Deliverer, Cell::new(3, 2), Battery::FULL)
            .build();
        SimBuilder::new(config, b.build().unwrap(), AStarPathfinder)
            .agents(agents)
            .shelf_statuses(vec![ShelfStatus::Empty])
            .build()
            .unwrap()
    }

    #[test]
    fn first_error_kept_and_run_completes() {
        let config = WarehouseConfig { total_ticks: 6, output_interval_ticks: 2, ..Default::default() };
        let mut sim = small_sim(config);
        let mut obs = SimOutputObserver::new(Flaky::default());
        sim.run(&mut obs);

        let err = obs.take_error().expect("second snapshot write fails");
        assert!(err.to_string().contains("call 2"));
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.snapshot_calls, 3);
        assert_eq!(writer.summaries, 6);
        assert!(writer.finished);
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = WarehouseConfig { total_ticks: 10, output_interval_ticks: 5, ..Default::default() };
        let mut sim = small_sim(config);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut snaps = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let snap_rows: Vec<_> = snaps.records().map(|r| r.unwrap()).collect();
        // Ticks 0 and 5, two agents each.
        assert_eq!(snap_rows.len(), 4);
        assert_eq!(&snap_rows[0][2], "restocker");
        assert_eq!(&snap_rows[1][2], "deliverer");
        assert_eq!(&snap_rows[2][0], "5");

        let mut sums = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(sums.records().count(), 10);
    }

    #[test]
    fn reference_warehouse_rows_per_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = WarehouseConfig { total_ticks: 3, ..Default::default() };
        let grid = GridLayout::reference_warehouse().unwrap();
        let mut sim = SimBuilder::new(config, grid, AStarPathfinder).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut snaps = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(snaps.records().count(), 3 * 8);
    }
}
