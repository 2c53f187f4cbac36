use std::path::PathBuf;

use battle_core::{BattleTypeDescriptor, Formation, ResolveError, TimeOfDay};
use battle_runtime::{BatchEvaluator, BattleJob, RuntimeConfig, RuntimeError};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn evaluator(seed: u64, workers: usize) -> BatchEvaluator {
    let config = RuntimeConfig::default()
        .with_data_dir(data_dir())
        .with_seed(seed)
        .with_workers(workers);
    BatchEvaluator::from_content(config).expect("bundled master data should load")
}

#[tokio::test]
async fn same_seed_replays_identically() {
    let first = evaluator(7, 4);
    let second = evaluator(7, 2);

    let a = first
        .evaluate(first.load_jobs(&[]).unwrap())
        .await
        .unwrap();
    let b = second
        .evaluate(second.load_jobs(&[]).unwrap())
        .await
        .unwrap();

    assert!(!a.is_empty());
    assert_eq!(a.len(), b.len());
    for (left, right) in a.iter().zip(&b) {
        assert_eq!(left.name, right.name);
        assert_eq!(left.seed, right.seed);
        assert_eq!(left.outcome, right.outcome);
    }
}

#[tokio::test]
async fn reports_follow_job_order() {
    let evaluator = evaluator(1, 3);
    let jobs = evaluator.load_jobs(&[]).unwrap();
    let names: Vec<_> = jobs.iter().map(|job| job.name.clone()).collect();

    let reports = evaluator.evaluate(jobs).await.unwrap();

    let indices: Vec<_> = reports.iter().map(|report| report.index).collect();
    assert_eq!(indices, (0..names.len()).collect::<Vec<_>>());
    let reported: Vec<_> = reports.iter().map(|report| report.name.clone()).collect();
    assert_eq!(reported, names);
    assert_eq!(evaluator.metrics().resolved(), names.len() as u64);
    assert_eq!(evaluator.metrics().failed(), 0);
}

#[tokio::test]
async fn single_worker_drains_the_batch() {
    let evaluator = evaluator(3, 1);
    let jobs = evaluator
        .load_jobs(&["night_skirmish".to_owned(), "air_raid".to_owned()])
        .unwrap();

    let reports = evaluator.evaluate(jobs).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].seed, evaluator.job_seed(0));
    assert_eq!(reports[1].seed, evaluator.job_seed(1));
    assert_eq!(
        evaluator.metrics().strikes(),
        reports.iter().map(|report| report.strikes() as u64).sum::<u64>()
    );
}

#[tokio::test]
async fn rejected_battle_names_its_job() {
    let evaluator = evaluator(0, 2);
    let skirmish = evaluator
        .load_jobs(&["night_skirmish".to_owned()])
        .unwrap()
        .remove(0);
    // The skirmish has no friendly escort fleet to combine with.
    let job = BattleJob::new(
        "broken",
        BattleTypeDescriptor::new(TimeOfDay::Day, Formation::Combined),
        skirmish.engagement,
    );

    let err = evaluator.evaluate(vec![job]).await.unwrap_err();

    match err {
        RuntimeError::Resolve { name, source } => {
            assert_eq!(name, "broken");
            assert_eq!(source, ResolveError::MissingEscortFleet);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(evaluator.metrics().failed(), 1);
    assert_eq!(evaluator.metrics().resolved(), 0);
}

#[test]
fn unknown_scenario_is_a_content_error() {
    let evaluator = evaluator(0, 1);
    let err = evaluator
        .load_jobs(&["no_such_scenario".to_owned()])
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Content(_)));
}

#[test]
fn missing_data_dir_is_a_content_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = RuntimeConfig::default().with_data_dir(dir.path().join("absent"));
    assert!(matches!(
        BatchEvaluator::from_content(config),
        Err(RuntimeError::Content(_))
    ));
}
