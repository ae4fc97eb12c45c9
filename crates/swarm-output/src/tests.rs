//! Integration tests for swarm-output.

#[cfg(test)]
mod csv_tests {
    use swarm_core::{Quat, Vec3};
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
            species:     1,
            position:    Vec3::new(1.5, -2.0, 0.25),
            velocity:    Vec3::new(0.0, 1.0, 0.0),
            orientation: Quat::IDENTITY,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("agent_snapshots.csv")),
            ["tick", "agent_id", "species", "px", "py", "pz", "vx", "vy", "vz", "qx", "qy", "qz", "qw"],
        );
        assert_eq!(
            headers(&dir.path().join("tick_summaries.csv")),
            ["tick", "sim_time_secs", "agent_count", "spawned"],
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(7, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");    // tick
        assert_eq!(&rows[1][1], "7");    // agent_id
        assert_eq!(&rows[0][2], "1");    // species
        assert_eq!(&rows[0][3], "1.5");  // px
        assert_eq!(&rows[0][4], "-2");   // py
        assert_eq!(&rows[0][12], "1");   // qw
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, sim_time_secs: 0.5, agent_count: 40, spawned: 0 })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "0.5");
        assert_eq!(&rows[0][2], "40");
        assert_eq!(&rows[0][3], "0");
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
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use swarm_core::{SimConfig, Vec3};
    use swarm_sim::{SimBuilder, SimObserver, TickSummary};
    use swarm_species::{SpeciesDefinition, SpeciesSetup, SwarmConfigBuilder};

    use crate::{
        AgentSnapshotRow, CsvWriter, OutputError, OutputResult, OutputWriter, SimOutputObserver,
        TickSummaryRow,
    };

    fn config(total_ticks: u64, interval: u64) -> SimConfig {
        SimConfig {
            delta_time:            0.02,
            total_ticks,
            cell_size:             3.0,
            num_threads:           Some(1),
            output_interval_ticks: interval,
            spawn_seed:            Some(1),
        }
    }

    fn swarm(count: u32) -> swarm_species::SwarmConfig {
        let mut b = SwarmConfigBuilder::new();
        let t = b.add_template(SpeciesDefinition::new("boid", 2.0));
        b.add_species(
            SpeciesSetup::new(Some(t), count)
                .spawn_sphere(Vec3::ZERO, 5.0)
                .initial_speed(1.0),
        );
        b.build().unwrap()
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config(6, 2), swarm(4))
            .spawn_on_start(true)
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 4 agents)
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[0][3], "4"); // spawned on tick 0
        assert_eq!(&rows[1][3], "0");
        assert_eq!(&rows[5][2], "4");
    }

    /// Fails every write with a distinct message.
    #[derive(Default)]
    struct FailingWriter {
        calls: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(io::Error::other(format!("write {}", self.calls)).into())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(io::Error::other(format!("write {}", self.calls)).into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn keeps_first_error_only() {
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        obs.on_tick_end(&TickSummary::default());
        obs.on_tick_end(&TickSummary::default());

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.to_string(), "write 1"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 2);
    }
}
