use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pushscan_analysis::{ScanConfig, run_scan};
use pushscan_utils::errors::{IngestError, ReportError, ScanError};
use std::path::Path;

fn dump_line(address: &str, code: &[u8]) -> String {
    format!("{address},{}\n", STANDARD.encode(code))
}

fn config(dir: &Path, dump: &str) -> anyhow::Result<ScanConfig> {
    let input = dir.join("accounts.csv");
    std::fs::write(&input, dump)?;
    Ok(ScanConfig {
        input,
        output: dir.join("result.csv"),
        ..ScanConfig::default()
    })
}

#[tokio::test]
async fn scan_appends_one_line_per_record() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let dir = tempfile::tempdir()?;
    let dump = [
        // PUSH1 0x00 PUSH1 0x00 RETURN
        dump_line("0xaaaa", &[0x60, 0x00, 0x60, 0x00, 0xf3]),
        // PUSH2 0x6000: the pattern is data
        dump_line("0xbbbb", &[0x61, 0x60, 0x00]),
        dump_line("0xcccc", &[]),
    ]
    .concat();
    let cfg = config(dir.path(), &dump)?;

    let mut seen = Vec::new();
    let summary = run_scan(&cfg, |scanned| {
        seen.push(scanned.stats.address.clone());
        Ok(())
    })
    .await?;

    assert_eq!(seen, vec!["0xaaaa", "0xbbbb", "0xcccc"]);
    assert_eq!(summary.records, 3);
    assert_eq!(summary.push0_count, 2);
    assert_eq!(summary.deploy_gas_saved, 400);
    assert_eq!(summary.runtime_gas_saved, 2);
    assert_eq!(summary.data_bytes, 4);

    let result = std::fs::read_to_string(&cfg.output)?;
    assert_eq!(
        result,
        "0xaaaa, 2, 800, 400, 6, 4\n0xbbbb, 0, 0, 0, 0, 0\n0xcccc, 0, 0, 0, 0, 0\n"
    );
    Ok(())
}

#[tokio::test]
async fn repeated_scans_accumulate() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = config(dir.path(), &dump_line("0x01", &[0x60, 0x00]))?;

    run_scan(&cfg, |_| Ok(())).await?;
    run_scan(&cfg, |_| Ok(())).await?;

    let result = std::fs::read_to_string(&cfg.output)?;
    assert_eq!(result.lines().count(), 2);
    assert!(result.lines().all(|l| l == "0x01, 1, 400, 200, 3, 2"));
    Ok(())
}

#[tokio::test]
async fn bad_payload_aborts_scan() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let dump = dump_line("0x01", &[0x00]) + "0x02,not base64!\n";
    let cfg = config(dir.path(), &dump)?;

    let err = run_scan(&cfg, |_| Ok(())).await.unwrap_err();
    assert!(matches!(
        err,
        ScanError::Ingest(IngestError::Base64 { line: 2, .. })
    ));
    assert!(!cfg.output.exists());
    Ok(())
}

#[tokio::test]
async fn missing_input_is_reported() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = ScanConfig {
        input: dir.path().join("absent.csv"),
        output: dir.path().join("result.csv"),
        ..ScanConfig::default()
    };
    let err = run_scan(&cfg, |_| Ok(())).await.unwrap_err();
    assert!(matches!(err, ScanError::Ingest(IngestError::FileRead { .. })));
    Ok(())
}

#[tokio::test]
async fn listing_is_rendered_when_enabled() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let dump = dump_line("0x01", &[0x60, 0x00, 0x5b]) + &dump_line("0x02", &[0x60, 0x5b]);
    let cfg = ScanConfig {
        listing: true,
        ..config(dir.path(), &dump)?
    };

    let mut listings = Vec::new();
    run_scan(&cfg, |scanned| {
        listings.push(scanned.listing.clone());
        Ok(())
    })
    .await?;

    assert_eq!(
        listings,
        vec![
            Some("Address: 0x01\n[ 0 ] 60 PUSH1\n>>> PUSH0\n[ 1 ] 00 data\n[ 2 ] 5b JUMPDEST\n".to_string()),
            Some("Address: 0x02\n[ 0 ] 60 PUSH1\n[ 1 ] 5b data\n".to_string()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn listing_is_absent_by_default() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = config(dir.path(), &dump_line("0x01", &[0x60, 0x00]))?;

    let mut listed = false;
    run_scan(&cfg, |scanned| {
        listed |= scanned.listing.is_some();
        Ok(())
    })
    .await?;
    assert!(!listed);
    Ok(())
}

#[tokio::test]
async fn serialization_failure_in_callback_stops_scan() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let dump = dump_line("0x01", &[0x00]) + &dump_line("0x02", &[0x00]);
    let cfg = config(dir.path(), &dump)?;

    let mut calls = 0;
    let err = run_scan(&cfg, |_| {
        calls += 1;
        Err(serde_json::from_str::<u8>("x").unwrap_err().into())
    })
    .await
    .unwrap_err();

    assert_eq!(calls, 1);
    assert!(matches!(err, ScanError::Report(ReportError::Serialize(_))));
    Ok(())
}
